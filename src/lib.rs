// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # side-export - Selenium IDE recordings as Codeception tests
//!
//! Translates the command stream of a Selenium IDE `.side` project into PHP
//! acceptance tests for Codeception's WebDriver module.
//!
//! ## Core Concept
//!
//! Every recorded command is handed to an *emitter* looked up by name in a
//! [`CommandTable`]. An emitter returns an [`Emission`]: nothing, a single
//! statement, a block of leveled statements, or a raw driver callback for
//! things the Codeception API cannot express. Control-flow commands carry
//! level adjustments that a [`LevelTracker`] applies in stream order, so
//! nested `if`/`while`/`forEach` blocks come out properly indented.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use side_export::{Command, CommandTable, Exporter, Project};
//!
//! // One command at a time
//! let table = CommandTable::new();
//! let emission = table.emit(&Command::new("click").with_target("css=#submit"))?;
//! assert_eq!(emission.lines()[0].statement, r##"$I->click(["css" => "#submit"]);"##);
//!
//! // A whole project
//! let project = Project::load("shop.side".as_ref())?;
//! let php = Exporter::default().render_project(&project, "shop.side")?;
//! ```
//!
//! ## Extending
//!
//! The table is keyed by command name, so new commands (or replacements
//! for built-in ones) are added with [`CommandTable::register`]:
//!
//! ```rust,ignore
//! table.register("hover", |cmd, ctx| {
//!     Ok(Emission::statement(format!("$I->moveMouseOver({});", ctx.locator(cmd.target())?)))
//! });
//! ```
//!
//! ## Architecture
//!
//! ```text
//! .side JSON ──► Project ──► Test ──► Command*
//!                                        │
//!                                        ▼
//!                 CommandTable::emit ──► Emission ──► LevelTracker
//!                                                          │
//!                 hooks + extras + template ◄──────────────┘
//!                            │
//!                            ▼
//!                       XxxCest.php
//! ```

pub mod command;
pub mod config;
pub mod emit;
pub mod error;
pub mod export;
pub mod format;
pub mod hook;
pub mod location;
pub mod project;
pub mod templates;
pub mod util;

// Re-exports
pub use command::{Command, KeyPart, Script};
pub use config::{ExportConfig, CONFIG_FILE};
pub use emit::{
    Block, Callback, CommandTable, ControlFlow, EmitContext, Emission, Emitter, LevelTracker,
    LeveledStatement,
};
pub use error::{Error, Result};
pub use export::{render_lines, Exporter};
pub use hook::{generate, generate_hooks, Hook, HookName};
pub use location::{CodeceptionLocator, LocatorResolver, Strategy};
pub use project::{Project, Suite, Test};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
