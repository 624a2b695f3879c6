pub mod buffer;
pub mod fixtures;
pub mod tracing;

pub use buffer::SharedBuffer;
pub use fixtures::Workspace;
pub use tracing::{CapturedEvent, capture_events};
