//! CLI command implementations
//!
//! - `export`: Project export (export)
//! - `inspect`: Table and hook inspection (command, commands, hooks)
//! - `util`: Shared utility functions

pub mod export;
pub mod inspect;
pub mod util;

pub use export::cmd_export;
pub use inspect::{cmd_command, cmd_commands, cmd_hooks};
