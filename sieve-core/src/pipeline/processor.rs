use super::filter::NumberFilter;
use super::observer::NumberObserver;
use super::reader::NumberReader;
use crate::pipeline::errors::ReadError;
use std::path::Path;
use tracing::info;

/// Counters for one completed run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Numbers successfully parsed from the input.
    pub read: usize,
    /// Numbers that passed the filter.
    pub kept: usize,
    /// Tokens skipped with a warning.
    pub skipped: usize,
}

/// Drives one reader through one filter into a list of observers.
pub struct NumberProcessor {
    reader: Box<dyn NumberReader>,
    filter: Box<dyn NumberFilter>,
    observers: Vec<Box<dyn NumberObserver>>,
}

impl NumberProcessor {
    pub fn new(reader: Box<dyn NumberReader>, filter: Box<dyn NumberFilter>) -> Self {
        Self {
            reader,
            filter,
            observers: Vec::new(),
        }
    }

    /// Observers are notified in registration order.
    pub fn register(&mut self, observer: Box<dyn NumberObserver>) {
        self.observers.push(observer);
    }

    pub fn with_observer(mut self, observer: Box<dyn NumberObserver>) -> Self {
        self.register(observer);
        self
    }

    /// Reads `path`, filters every number in file order and notifies the
    /// observers.
    ///
    /// A reader failure aborts before any observer is touched, including
    /// `on_finished`.
    pub fn run(&mut self, path: &Path) -> Result<RunSummary, ReadError> {
        let batch = self.reader.read(path)?;

        let mut summary = RunSummary {
            read: batch.numbers.len(),
            kept: 0,
            skipped: batch.skipped.len(),
        };

        for number in batch.numbers {
            if self.filter.keep(number) {
                summary.kept += 1;
                self.notify_number(number);
            }
        }
        self.notify_finished();

        info!(
            path = %path.display(),
            read = summary.read,
            kept = summary.kept,
            skipped = summary.skipped,
            "number pipeline finished"
        );

        Ok(summary)
    }

    fn notify_number(&mut self, number: i32) {
        for observer in &mut self.observers {
            observer.on_number(number);
        }
    }

    fn notify_finished(&mut self) {
        for observer in &mut self.observers {
            observer.on_finished();
        }
    }
}
