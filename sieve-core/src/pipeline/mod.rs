pub mod errors;
pub mod filter;
pub mod observer;
pub mod processor;
pub mod reader;
#[cfg(test)]
mod tests;

pub use errors::{FilterError, ReadError, TokenError};
pub use filter::{FilterFactory, FilterSelector, NumberFilter};
pub use observer::{CountObserver, NumberObserver, PrintObserver};
pub use processor::{NumberProcessor, RunSummary};
pub use reader::{FileReader, NumberBatch, NumberReader, SkippedToken};
