//! Boilerplate hooks wrapping the emitted command sequence
//!
//! A hook has fixed starting and ending syntax. Statements registered with a
//! hook are placed between the two at its registration level. Optional
//! hooks that received no statements produce nothing at all.

use crate::emit::LeveledStatement;
use std::collections::BTreeMap;
use std::fmt;

/// Every hook point of a generated test file
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HookName {
    AfterAll,
    AfterEach,
    BeforeAll,
    BeforeEach,
    DeclareDependencies,
    DeclareMethods,
    DeclareVariables,
    InEachBegin,
    InEachEnd,
}

impl HookName {
    pub const ALL: [HookName; 9] = [
        HookName::AfterAll,
        HookName::AfterEach,
        HookName::BeforeAll,
        HookName::BeforeEach,
        HookName::DeclareDependencies,
        HookName::DeclareMethods,
        HookName::DeclareVariables,
        HookName::InEachBegin,
        HookName::InEachEnd,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HookName::AfterAll => "afterAll",
            HookName::AfterEach => "afterEach",
            HookName::BeforeAll => "beforeAll",
            HookName::BeforeEach => "beforeEach",
            HookName::DeclareDependencies => "declareDependencies",
            HookName::DeclareMethods => "declareMethods",
            HookName::DeclareVariables => "declareVariables",
            HookName::InEachBegin => "inEachBegin",
            HookName::InEachEnd => "inEachEnd",
        }
    }
}

impl fmt::Display for HookName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hook {
    pub name: HookName,
    pub starting_syntax: Vec<LeveledStatement>,
    pub ending_syntax: Vec<LeveledStatement>,
    /// Level for registered statements; see [`Hook::effective_registration_level`]
    pub registration_level: Option<usize>,
    /// Emitted even with nothing registered
    pub required: bool,
    registered: Vec<LeveledStatement>,
}

impl Hook {
    fn new(name: HookName) -> Self {
        Self {
            name,
            starting_syntax: Vec::new(),
            ending_syntax: Vec::new(),
            registration_level: None,
            required: false,
            registered: Vec::new(),
        }
    }

    fn starting(mut self, lines: &[(usize, &str)]) -> Self {
        self.starting_syntax = lines.iter().map(|(l, s)| LeveledStatement::new(*l, *s)).collect();
        self
    }

    fn ending(mut self, lines: &[(usize, &str)]) -> Self {
        self.ending_syntax = lines.iter().map(|(l, s)| LeveledStatement::new(*l, *s)).collect();
        self
    }

    fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// 1 when the hook closes a body, else 0, unless set explicitly
    pub fn effective_registration_level(&self) -> usize {
        self.registration_level
            .unwrap_or(if self.ending_syntax.is_empty() { 0 } else { 1 })
    }

    /// Add a statement; its level is relative to the registration level
    pub fn register(&mut self, statement: LeveledStatement) {
        self.registered.push(statement);
    }

    pub fn registered(&self) -> &[LeveledStatement] {
        &self.registered
    }

    /// Starting syntax, registered statements, ending syntax.
    /// Empty for an optional hook with nothing registered.
    pub fn emit(&self) -> Vec<LeveledStatement> {
        if !self.required && self.registered.is_empty() {
            return Vec::new();
        }
        let base = self.effective_registration_level();
        let mut lines = self.starting_syntax.clone();
        lines.extend(
            self.registered
                .iter()
                .map(|s| LeveledStatement::new(base + s.level, s.statement.clone())),
        );
        lines.extend(self.ending_syntax.iter().cloned());
        lines
    }
}

/// The Codeception definition of one hook
pub fn generate(name: HookName) -> Hook {
    let hook = Hook::new(name);
    match name {
        HookName::AfterAll
        | HookName::BeforeAll
        | HookName::DeclareMethods
        | HookName::DeclareVariables => hook,
        HookName::AfterEach => hook
            .starting(&[(0, "public function _after(AcceptanceTester $I)"), (0, "{")])
            .ending(&[(0, "}")]),
        HookName::BeforeEach => hook
            .starting(&[(0, "public function _before(AcceptanceTester $I)"), (0, "{")])
            .ending(&[(0, "}")]),
        HookName::DeclareDependencies => hook
            .starting(&[(0, "use Faker\\Factory;"), (0, "")])
            .required(),
        HookName::InEachBegin => hook.starting(&[(0, "<?php")]).required(),
        HookName::InEachEnd => hook.ending(&[(1, "}")]).required(),
    }
}

/// All hooks, keyed by name
pub fn generate_hooks() -> BTreeMap<HookName, Hook> {
    HookName::ALL.iter().map(|&name| (name, generate(name))).collect()
}
