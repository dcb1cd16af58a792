//! Async tasks for the runner firmware.
//!
//! - `flush`: Display buffer flush task (DMA transfers)

pub mod flush;

pub use flush::{FLUSH_DONE, FLUSH_SIGNAL, display_flush_task};
