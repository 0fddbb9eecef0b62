//! Template context for a Cest file

use serde::Serialize;

/// Everything the Cest template lays out.
///
/// Members are rendered already, relative to the class body.
#[derive(Debug, Clone, Serialize)]
pub struct CestContext {
    /// Opening of the file (`<?php`)
    pub begin: String,
    /// Whether to include the provenance header
    pub provenance: bool,
    /// Source `.side` file
    pub source: String,
    pub project_hash: String,
    pub generated_at: String,
    /// side-export version
    pub version: String,
    /// `use` statements, may be empty
    pub dependencies: String,
    pub class_name: String,
    /// Indentation unit for class members
    pub indent: String,
    /// Hooks, test methods and helper methods, in order
    pub members: Vec<String>,
}
