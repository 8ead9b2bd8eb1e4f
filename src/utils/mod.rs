//! Small helpers.
//!
//! - [`fs`]: atomic writes and PNG discovery
//! - [`plural`]: count formatting

pub mod fs;
pub mod plural;

pub use fs::{list_pngs, write_atomic};
pub use plural::plural_count;
