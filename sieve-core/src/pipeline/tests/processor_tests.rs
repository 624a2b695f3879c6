use super::test_helpers::{Event, RecordingObserver};
use crate::pipeline::errors::ReadError;
use crate::pipeline::filter::{EvenFilter, GreaterThanFilter};
use crate::pipeline::observer::CountObserver;
use crate::pipeline::processor::{NumberProcessor, RunSummary};
use crate::pipeline::reader::{NumberBatch, NumberReader};
use crate::test_helpers::SharedBuffer;
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::io;
use std::path::Path;
use std::rc::Rc;

struct FixedReader(Vec<i32>);

impl NumberReader for FixedReader {
    fn read(&self, _path: &Path) -> Result<NumberBatch, ReadError> {
        Ok(NumberBatch {
            numbers: self.0.clone(),
            skipped: Vec::new(),
        })
    }
}

struct FailingReader;

impl NumberReader for FailingReader {
    fn read(&self, path: &Path) -> Result<NumberBatch, ReadError> {
        Err(ReadError::Open {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        })
    }
}

fn recorder(name: &'static str, journal: &Rc<RefCell<Vec<Event>>>) -> Box<RecordingObserver> {
    Box::new(RecordingObserver {
        name,
        journal: Rc::clone(journal),
    })
}

#[test]
fn observers_notified_in_registration_order() {
    // Arrange
    let journal = Rc::new(RefCell::new(Vec::new()));
    let mut processor = NumberProcessor::new(
        Box::new(FixedReader(vec![1, 2, 3, 4])),
        Box::new(EvenFilter),
    )
    .with_observer(recorder("A", &journal))
    .with_observer(recorder("B", &journal));

    // Act
    processor.run(Path::new("ignored")).unwrap();

    // Assert
    assert_eq!(
        *journal.borrow(),
        vec![
            Event::Number("A", 2),
            Event::Number("B", 2),
            Event::Number("A", 4),
            Event::Number("B", 4),
            Event::Finished("A"),
            Event::Finished("B"),
        ]
    );
}

#[test]
fn finished_is_sent_even_when_nothing_passes() {
    let journal = Rc::new(RefCell::new(Vec::new()));
    let mut processor = NumberProcessor::new(
        Box::new(FixedReader(vec![1, 2])),
        Box::new(GreaterThanFilter::new(100)),
    )
    .with_observer(recorder("A", &journal));

    let summary = processor.run(Path::new("ignored")).unwrap();

    assert_eq!(*journal.borrow(), vec![Event::Finished("A")]);
    assert_eq!(
        summary,
        RunSummary {
            read: 2,
            kept: 0,
            skipped: 0
        }
    );
}

#[test]
fn reader_failure_notifies_nobody() {
    // Arrange
    let journal = Rc::new(RefCell::new(Vec::new()));
    let buf = SharedBuffer::default();
    let mut processor = NumberProcessor::new(Box::new(FailingReader), Box::new(EvenFilter))
        .with_observer(recorder("A", &journal))
        .with_observer(Box::new(CountObserver::new(buf.clone())));

    // Act
    let result = processor.run(Path::new("nowhere.txt"));

    // Assert
    assert!(matches!(result, Err(ReadError::Open { .. })));
    assert!(journal.borrow().is_empty());
    assert_eq!(buf.contents(), "");
}

#[test]
fn preserves_file_order_of_kept_numbers() {
    let journal = Rc::new(RefCell::new(Vec::new()));
    let mut processor = NumberProcessor::new(
        Box::new(FixedReader(vec![9, -4, 7, 0, 12])),
        Box::new(GreaterThanFilter::new(0)),
    )
    .with_observer(recorder("A", &journal));

    processor.run(Path::new("ignored")).unwrap();

    let kept: Vec<i32> = journal
        .borrow()
        .iter()
        .filter_map(|e| match e {
            Event::Number(_, n) => Some(*n),
            Event::Finished(_) => None,
        })
        .collect();
    assert_eq!(kept, vec![9, 7, 12]);
}
