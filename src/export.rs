//! Test and suite assembly
//!
//! Runs a test's commands through the [`CommandTable`] in order, applies
//! the level protocol and wraps the result with hooks and the Cest class
//! layout.

use crate::config::ExportConfig;
use crate::emit::{extras, CommandTable, Emission, LevelTracker, LeveledStatement};
use crate::error::Result;
use crate::hook::{generate_hooks, Hook, HookName};
use crate::project::{Project, Test};
use crate::templates::{self, context::CestContext};
use crate::util::{sanitize_name, to_pascal_case};
use chrono::Utc;
use minijinja::Environment;
use std::collections::{BTreeMap, HashSet};

/// Level of class members in the file
const MEMBER_LEVEL: usize = 1;

/// Render leveled statements, one per line
pub fn render_lines(lines: &[LeveledStatement], indent: &str) -> String {
    lines
        .iter()
        .map(|line| {
            if line.statement.is_empty() {
                String::new()
            } else {
                format!("{}{}", indent.repeat(line.level), line.statement)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn push_comment(lines: &mut Vec<LeveledStatement>, level: usize, comment: &str) {
    if !comment.is_empty() {
        lines.push(LeveledStatement::new(level, format!("// {}", comment)));
    }
}

/// Line for a disabled command
fn disabled_line(name: &str, target: &str, value: &str) -> String {
    let parts: Vec<&str> = [name.trim_start_matches('/').trim(), target, value]
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect();
    format!("// disabled: {}", parts.join(" "))
}

/// Exports recorded tests as Codeception Cest classes
pub struct Exporter {
    table: CommandTable,
    hooks: BTreeMap<HookName, Hook>,
    env: Option<Environment<'static>>,
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new(CommandTable::new())
    }
}

impl Exporter {
    pub fn new(table: CommandTable) -> Self {
        Self {
            table,
            hooks: generate_hooks(),
            env: None,
        }
    }

    pub fn with_config(config: ExportConfig) -> Self {
        Self::new(CommandTable::with_config(config))
    }

    /// Use a template engine other than the embedded one
    pub fn with_engine(mut self, env: Environment<'static>) -> Self {
        self.env = Some(env);
        self
    }

    pub fn table(&self) -> &CommandTable {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut CommandTable {
        &mut self.table
    }

    pub fn hook_mut(&mut self, name: HookName) -> &mut Hook {
        self.hooks.entry(name).or_insert_with(|| crate::hook::generate(name))
    }

    fn hook_lines(&self, name: HookName) -> Vec<LeveledStatement> {
        self.hooks.get(&name).map(Hook::emit).unwrap_or_default()
    }

    /// Method body of one test, levels relative to the body
    pub fn render_test(&self, test: &Test) -> Result<Vec<LeveledStatement>> {
        let mut tracker = LevelTracker::new();
        let mut lines = Vec::new();
        let mut last = "";

        for command in &test.commands {
            last = command.name.as_str();
            let base = tracker.level() as usize;
            if command.is_disabled() {
                tracing::warn!(test = %test.name, command = %command.name, "skipping disabled command");
                push_comment(&mut lines, base, &command.comment);
                lines.push(LeveledStatement::new(
                    base,
                    disabled_line(&command.name, command.target(), command.value()),
                ));
                continue;
            }
            let emission = self.table.emit_at(command, base)?;
            if let Emission::None = emission {
                tracing::debug!(command = %command.name, "no output for recorder-only command");
                push_comment(&mut lines, base, &command.comment);
                continue;
            }
            let placed = tracker.place(&command.name, &emission)?;
            // Closers print their comment next to the closing line
            let level = placed.first().map_or(base, |l| l.level);
            push_comment(&mut lines, level, &command.comment);
            lines.extend(placed);
        }
        tracker.finish(last)?;
        Ok(lines)
    }

    /// A test as a class member
    fn render_method(&self, method_name: &str, test: &Test) -> Result<String> {
        let indent = &self.table.config().indent;
        let mut lines = vec![
            LeveledStatement::new(0, format!("public function {}(AcceptanceTester $I)", method_name)),
            LeveledStatement::new(0, "{"),
        ];
        lines.extend(
            self.render_test(test)?
                .into_iter()
                .map(|l| LeveledStatement::new(l.level + 1, l.statement)),
        );
        // Closing hook is written at file scope
        lines.extend(
            self.hook_lines(HookName::InEachEnd)
                .into_iter()
                .map(|l| LeveledStatement::new(l.level.saturating_sub(MEMBER_LEVEL), l.statement)),
        );
        Ok(render_lines(&lines, indent))
    }

    /// Complete Cest file for `tests`
    pub fn render_tests(
        &self,
        project: &Project,
        class_name: &str,
        tests: &[&Test],
        source: &str,
    ) -> Result<String> {
        let config = self.table.config();
        let indent = &config.indent;
        let mut members = Vec::new();

        for name in [
            HookName::BeforeAll,
            HookName::DeclareVariables,
            HookName::BeforeEach,
            HookName::AfterEach,
            HookName::AfterAll,
            HookName::DeclareMethods,
        ] {
            let lines = self.hook_lines(name);
            if !lines.is_empty() {
                members.push(render_lines(&lines, indent));
            }
        }

        // Helper and lifecycle names are taken before any test is named
        let mut seen: HashSet<String> = [extras::WAIT_FOR_WINDOW, "_before", "_after"]
            .into_iter()
            .map(String::from)
            .collect();
        for test in tests {
            let base = sanitize_name(&test.name);
            let mut method_name = base.clone();
            let mut n = 2;
            while !seen.insert(method_name.clone()) {
                method_name = format!("{}{}", base, n);
                n += 1;
            }
            tracing::info!(test = %test.name, method = %method_name, "rendering test");
            members.push(self.render_method(&method_name, test)?);
        }

        if tests.iter().any(|t| t.opens_window()) {
            members.push(render_lines(&extras::wait_for_window().statements, indent));
        }

        let begin = render_lines(&self.hook_lines(HookName::InEachBegin), indent);
        let dependencies = render_lines(&self.hook_lines(HookName::DeclareDependencies), indent);
        let ctx = CestContext {
            begin,
            provenance: config.provenance,
            source: source.to_string(),
            project_hash: project.hash(),
            generated_at: Utc::now().to_rfc3339(),
            version: crate::VERSION.to_string(),
            dependencies,
            class_name: class_name.to_string(),
            indent: indent.clone(),
            members,
        };
        let env = self.env.as_ref().unwrap_or_else(|| templates::engine());
        templates::render_cest(env, &ctx)
    }

    /// Cest file for one suite, named after it
    pub fn render_suite(&self, project: &Project, suite_name: &str, source: &str) -> Result<String> {
        let suite = project
            .suite(suite_name)
            .ok_or_else(|| format!("Suite not found: {}", suite_name))?;
        let tests = project.tests_for_suite(suite)?;
        self.render_tests(project, &self.class_name(&suite.name), &tests, source)
    }

    /// Cest file for every test in the project, named after the project
    pub fn render_project(&self, project: &Project, source: &str) -> Result<String> {
        let tests: Vec<&Test> = project.tests.iter().collect();
        self.render_tests(project, &self.class_name(&project.name), &tests, source)
    }

    fn class_name(&self, name: &str) -> String {
        let base = to_pascal_case(name);
        let base = if base.is_empty() || base.starts_with(|c: char| c.is_ascii_digit()) {
            format!("Side{}", base)
        } else {
            base
        };
        format!("{}{}", base, self.table.config().class_suffix)
    }
}
