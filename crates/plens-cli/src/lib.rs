//! Library surface of the Process Lens CLI.
//!
//! Only the logging setup lives here so the binary and tests share it.

pub mod logging;
