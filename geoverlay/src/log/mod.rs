//! Logging abstraction layer.
//!
//! Renderers and controllers log through the [`Logger`] trait instead of
//! calling `tracing` directly, so hosts can route diagnostics (such as
//! capability warnings) wherever they like and tests can inspect them.
//!
//! - [`TracingLogger`]: production adapter that delegates to `tracing`
//! - [`NoOpLogger`]: discards everything
//! - [`MemoryLogger`]: keeps messages in memory for inspection
//!
//! ```
//! use geoverlay::log::{Logger, MemoryLogger};
//! use geoverlay::log_warn;
//! use std::sync::Arc;
//!
//! let logger = Arc::new(MemoryLogger::new());
//! log_warn!(logger, "tile layer {} ignored extra headers", "roads");
//! assert_eq!(logger.warnings().len(), 1);
//! ```

mod memory;
mod noop;
mod tracing_adapter;
mod r#trait;

pub use memory::{LogRecord, MemoryLogger};
pub use noop::NoOpLogger;
pub use r#trait::{LogLevel, Logger};
pub use tracing_adapter::TracingLogger;
