//! Recorded commands and their parameter preprocessing
//!
//! A [`Command`] is one recorded step as stored in a `.side` project.
//! Script parameters are preprocessed into a [`Script`] and `sendKeys`
//! values into [`KeyPart`]s before an emitter formats them.

use crate::format::variable_pattern;
use serde::{Deserialize, Serialize};

/// One recorded automation step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Command {
    #[serde(default)]
    pub id: String,

    /// Free-form note attached in the recorder
    #[serde(default)]
    pub comment: String,

    /// Command name, e.g. `click`
    #[serde(rename = "command")]
    pub name: String,

    #[serde(default)]
    pub target: Option<String>,

    /// Alternative locators offered by the recorder: `(locator, strategy)`
    #[serde(default)]
    pub targets: Vec<(String, String)>,

    #[serde(default)]
    pub value: Option<String>,

    /// The command opens a new browser window
    #[serde(default)]
    pub opens_window: bool,

    /// Variable receiving the new window's handle
    #[serde(default)]
    pub window_handle_name: String,

    /// Milliseconds to wait for the new window
    #[serde(default)]
    pub window_timeout: Option<u64>,
}

impl Command {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Mark the command as opening a window bound to `handle_name`
    pub fn opening_window(mut self, handle_name: impl Into<String>, timeout: Option<u64>) -> Self {
        self.opens_window = true;
        self.window_handle_name = handle_name.into();
        self.window_timeout = timeout;
        self
    }

    /// Target parameter; empty when absent
    pub fn target(&self) -> &str {
        self.target.as_deref().unwrap_or("")
    }

    /// Value parameter; empty when absent
    pub fn value(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }

    /// Commands commented out in the recorder start with `//`
    pub fn is_disabled(&self) -> bool {
        self.name.starts_with("//")
    }
}

/// A recorded script with its `${name}` references lifted into arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    pub script: String,
    pub argv: Vec<String>,
}

impl Script {
    /// Trim the script and replace each distinct `${name}` with
    /// `arguments[i]`, collecting names in first-appearance order.
    pub fn interpolate(raw: &str) -> Self {
        let mut argv: Vec<String> = Vec::new();
        let script = variable_pattern()
            .replace_all(raw.trim(), |caps: &regex::Captures<'_>| {
                let name = &caps[1];
                let index = match argv.iter().position(|a| a == name) {
                    Some(i) => i,
                    None => {
                        argv.push(name.to_string());
                        argv.len() - 1
                    }
                };
                format!("arguments[{}]", index)
            })
            .into_owned();
        Self { script, argv }
    }
}

/// One piece of a `sendKeys` value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyPart {
    Text(String),
    /// Special key such as `ENTER` from `${KEY_ENTER}`
    Key(String),
    Variable(String),
}

impl KeyPart {
    pub fn parse(raw: &str) -> Vec<KeyPart> {
        let mut parts = Vec::new();
        let mut last = 0;
        for caps in variable_pattern().captures_iter(raw) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            if whole.start() > last {
                parts.push(KeyPart::Text(raw[last..whole.start()].to_string()));
            }
            let name = name.as_str();
            match name.strip_prefix("KEY_") {
                Some(key) => parts.push(KeyPart::Key(key.to_string())),
                None => parts.push(KeyPart::Variable(name.to_string())),
            }
            last = whole.end();
        }
        if last < raw.len() {
            parts.push(KeyPart::Text(raw[last..].to_string()));
        }
        parts
    }
}
