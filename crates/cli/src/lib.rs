//! Interactive presentation shell for the inventory store.
//!
//! Everything here is about text: reading lines, re-prompting on bad input and
//! rendering tables. The store itself only ever sees typed values.

pub mod config;
pub mod console;
pub mod render;
pub mod shell;

pub use config::{OutputFormat, ShellConfig};
pub use shell::Shell;
