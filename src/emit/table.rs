//! Name-keyed emitter registry

use super::window::with_new_window_handling;
use super::{base_emitters, Block, EmitContext, Emission};
use crate::command::Command;
use crate::config::ExportConfig;
use crate::error::{Error, Result};
use crate::location::{CodeceptionLocator, LocatorResolver};
use std::collections::HashMap;
use std::sync::Arc;

/// A registered emitter
pub type Emitter = Arc<dyn Fn(&Command, &EmitContext<'_>) -> Result<Emission> + Send + Sync>;

/// Maps command names to emitters.
///
/// Lookup is by exact name. Aliases are separate registrations of the same
/// function.
pub struct CommandTable {
    emitters: HashMap<String, Emitter>,
    resolver: Arc<dyn LocatorResolver>,
    config: ExportConfig,
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandTable {
    /// Table with every built-in Codeception emitter
    pub fn new() -> Self {
        Self::with_config(ExportConfig::default())
    }

    pub fn with_config(config: ExportConfig) -> Self {
        let mut table = Self {
            emitters: HashMap::new(),
            resolver: Arc::new(CodeceptionLocator),
            config,
        };
        for (name, emitter) in base_emitters() {
            table.register(name, emitter);
        }
        table
    }

    /// Replace the locator resolver
    pub fn with_resolver(mut self, resolver: impl LocatorResolver + 'static) -> Self {
        self.resolver = Arc::new(resolver);
        self
    }

    /// Add or overwrite an emitter
    pub fn register<F>(&mut self, name: impl Into<String>, emitter: F)
    where
        F: Fn(&Command, &EmitContext<'_>) -> Result<Emission> + Send + Sync + 'static,
    {
        self.emitters.insert(name.into(), Arc::new(emitter));
    }

    pub fn can_emit(&self, name: &str) -> bool {
        self.emitters.contains_key(name)
    }

    /// Emit one command at the outermost level
    pub fn emit(&self, command: &Command) -> Result<Emission> {
        self.emit_at(command, 0)
    }

    /// Emit one command placed `depth` blocks deep
    pub fn emit_at(&self, command: &Command, depth: usize) -> Result<Emission> {
        let emitter = self
            .emitters
            .get(&command.name)
            .ok_or_else(|| Error::UnsupportedCommand(command.name.clone()))?;
        let ctx = EmitContext {
            resolver: self.resolver.as_ref(),
            config: &self.config,
            depth,
        };
        let emission = emitter(command, &ctx)?;
        tracing::debug!(command = %command.name, locator = command.target(), "emitted");

        if !command.opens_window || emission.is_empty() {
            return Ok(emission);
        }
        let (starting_level_adjustment, ending_level_adjustment) = emission.level_adjustments();
        Ok(Emission::Block(Block {
            commands: with_new_window_handling(
                command,
                emission.lines(),
                self.config.default_window_timeout,
            ),
            starting_level_adjustment,
            ending_level_adjustment,
        }))
    }

    /// Registered command names, sorted
    pub fn commands(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.emitters.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_command() {
        let table = CommandTable::new();
        assert!(!table.can_emit("teleport"));
        assert!(matches!(
            table.emit(&Command::new("teleport")),
            Err(Error::UnsupportedCommand(name)) if name == "teleport"
        ));
    }

    #[test]
    fn test_aliases_are_separate_registrations() {
        let table = CommandTable::new();
        assert!(table.can_emit("assertEditable"));
        assert!(table.can_emit("verifyEditable"));
        let a = table.emit(&Command::new("assertEditable").with_target("id=x")).unwrap();
        let b = table.emit(&Command::new("verifyEditable").with_target("id=x")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_register_overrides() {
        let mut table = CommandTable::new();
        table.register("click", |cmd: &Command, _: &EmitContext<'_>| {
            Ok(Emission::statement(format!("// click {}", cmd.target())))
        });
        table.register("hover", |_: &Command, _: &EmitContext<'_>| {
            Ok(Emission::statement("$I->hover();"))
        });
        assert_eq!(
            table.emit(&Command::new("click").with_target("id=a")).unwrap(),
            Emission::statement("// click id=a")
        );
        assert!(table.can_emit("hover"));
    }

    #[test]
    fn test_commands_sorted() {
        let table = CommandTable::new();
        let names = table.commands();
        assert!(names.windows(2).all(|w| w[0] <= w[1]));
        assert!(names.contains(&"storeAttribute"));
    }

    #[test]
    fn test_opens_window_wraps_lines() {
        let table = CommandTable::new();
        let cmd = Command::new("click")
            .with_target("id=popup")
            .opening_window("win1", Some(5000));
        let lines = table.emit(&cmd).unwrap().lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].statement, r#"$I->click(["id" => "popup"]);"#);
        assert_eq!(
            lines[2].statement,
            "$win1 = $this->waitForWindow($I, $windowHandles, 5000);"
        );
    }

    struct PageObjects;

    impl LocatorResolver for PageObjects {
        fn resolve(&self, locator: &str) -> Result<String> {
            Ok(format!("Page::{}()", locator.trim_start_matches("id=")))
        }

        fn resolve_driver(&self, locator: &str) -> Result<String> {
            Ok(format!("Page::driver('{}')", locator))
        }
    }

    #[test]
    fn test_custom_resolver() {
        let table = CommandTable::new().with_resolver(PageObjects);
        let emission = table
            .emit(&Command::new("click").with_target("id=submit"))
            .unwrap();
        assert_eq!(emission, Emission::statement("$I->click(Page::submit());"));
    }
}
