//! Fireside - a read-aloud story library
//!
//! Stores short illustrated stories (a title plus ordered chapters, each a
//! title plus ordered paragraphs), persists them as a single JSON blob, and
//! narrates chapters through the platform text-to-speech engine with an
//! adjustable voice and speed.

pub mod error;
pub mod session;
pub mod speech;
pub mod store;

pub use error::{FiresideError, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "fireside";
