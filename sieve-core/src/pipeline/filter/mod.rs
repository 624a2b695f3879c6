pub mod builtin;
pub mod factory;
pub mod selector;

pub use builtin::{EvenFilter, GreaterThanFilter, OddFilter};
pub use factory::FilterFactory;
pub use selector::FilterSelector;

/// A predicate deciding whether a number continues down the pipeline.
///
/// Implementations must be pure: the same input always yields the same answer.
pub trait NumberFilter: Send + Sync {
    fn keep(&self, number: i32) -> bool;
}
