use std::io::{self, Write};
use tracing::error;

/// Receives every number that passed the filter, then a single
/// `on_finished` once the stream is exhausted.
///
/// Observers are independent: nothing one observer does can stop another
/// from being notified.
pub trait NumberObserver {
    fn on_number(&mut self, number: i32);

    fn on_finished(&mut self);
}

fn emit<W: Write>(out: &mut W, line: std::fmt::Arguments<'_>) {
    if let Err(e) = writeln!(out, "{line}").and_then(|_| out.flush()) {
        error!(error = %e, "failed to write observer output");
    }
}

/// Echoes each number as soon as it arrives.
pub struct PrintObserver<W: Write = io::Stdout> {
    out: W,
}

impl PrintObserver<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> PrintObserver<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> NumberObserver for PrintObserver<W> {
    fn on_number(&mut self, number: i32) {
        emit(
            &mut self.out,
            format_args!("Read and filtered number: {number}"),
        );
    }

    fn on_finished(&mut self) {
        emit(&mut self.out, format_args!("Number processing finished."));
    }
}

/// Counts numbers and reports the total when the stream finishes.
pub struct CountObserver<W: Write = io::Stdout> {
    out: W,
    count: u64,
}

impl CountObserver<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> CountObserver<W> {
    pub fn new(out: W) -> Self {
        Self { out, count: 0 }
    }
}

impl<W: Write> NumberObserver for CountObserver<W> {
    fn on_number(&mut self, _number: i32) {
        self.count += 1;
    }

    fn on_finished(&mut self) {
        emit(
            &mut self.out,
            format_args!("Total number of filtered numbers: {}", self.count),
        );
    }
}
