//! Logging and tracing setup.

mod logging;

pub use logging::{log_filter, setup_logging};
