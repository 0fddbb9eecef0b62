//! Selenium IDE `.side` project files

use crate::command::Command;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A recorded test: a named command stream
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Test {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub commands: Vec<Command>,
}

impl Test {
    /// Whether any command opens a new window
    pub fn opens_window(&self) -> bool {
        self.commands.iter().any(|c| c.opens_window)
    }
}

/// A named group of tests, referenced by id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Suite {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tests: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub id: String,
    pub name: String,
    /// Base URL the recording was made against
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub tests: Vec<Test>,
    #[serde(default)]
    pub suites: Vec<Suite>,
}

impl Project {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::Json)
    }

    /// Load a `.side` file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(Error::Io)?;
        Self::from_json(&content)
            .map_err(|e| Error::Other(format!("Failed to parse {}: {}", path.display(), e)))
    }

    pub fn suite(&self, name: &str) -> Option<&Suite> {
        self.suites.iter().find(|s| s.name == name)
    }

    pub fn test(&self, id: &str) -> Option<&Test> {
        self.tests.iter().find(|t| t.id == id)
    }

    /// Tests of a suite in suite order
    pub fn tests_for_suite(&self, suite: &Suite) -> Result<Vec<&Test>> {
        suite
            .tests
            .iter()
            .map(|id| {
                self.test(id).ok_or_else(|| {
                    Error::Other(format!(
                        "Suite `{}` references unknown test `{}`",
                        suite.name, id
                    ))
                })
            })
            .collect()
    }

    /// Hash of the recorded tests for change detection
    pub fn hash(&self) -> String {
        use sha2::{Digest, Sha256};
        let content = serde_json::to_string(&self.tests).unwrap_or_default();
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        format!("sha256:{}", hex::encode(&hasher.finalize()[..8]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIDE: &str = r#"{
      "id": "p1",
      "version": "2.0",
      "name": "Shop",
      "url": "https://shop.example",
      "tests": [
        {"id": "t1", "name": "add to cart", "commands": [
          {"id": "c1", "comment": "", "command": "open", "target": "/", "targets": [], "value": ""}
        ]},
        {"id": "t2", "name": "checkout", "commands": []}
      ],
      "suites": [
        {"id": "s1", "name": "Default Suite", "persistSession": false, "tests": ["t2", "t1"]}
      ],
      "plugins": []
    }"#;

    #[test]
    fn test_from_json() {
        let project = Project::from_json(SIDE).unwrap();
        assert_eq!(project.name, "Shop");
        assert_eq!(project.tests.len(), 2);
        assert_eq!(project.tests[0].commands[0].name, "open");
    }

    #[test]
    fn test_tests_for_suite_keeps_suite_order() {
        let project = Project::from_json(SIDE).unwrap();
        let suite = project.suite("Default Suite").unwrap();
        let names: Vec<&str> = project
            .tests_for_suite(suite)
            .unwrap()
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, vec!["checkout", "add to cart"]);
    }

    #[test]
    fn test_unknown_test_reference() {
        let mut project = Project::from_json(SIDE).unwrap();
        project.suites[0].tests.push("missing".into());
        let suite = project.suites[0].clone();
        assert!(project.tests_for_suite(&suite).is_err());
    }

    #[test]
    fn test_hash_is_stable() {
        let a = Project::from_json(SIDE).unwrap();
        let b = Project::from_json(SIDE).unwrap();
        assert_eq!(a.hash(), b.hash());
        assert!(a.hash().starts_with("sha256:"));
    }

    #[test]
    fn test_load_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.side");
        std::fs::write(&path, "{ not json").unwrap();
        let err = Project::load(&path).unwrap_err().to_string();
        assert!(err.contains("broken.side"));
    }
}
