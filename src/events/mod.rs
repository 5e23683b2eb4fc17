pub mod log;

pub use log::{EventLog, LogTarget};
