pub mod cli;
pub mod logger;
pub mod logging;
pub mod pipeline;
#[cfg(test)]
mod test_helpers;
