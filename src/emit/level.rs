//! Running indentation level across an emitted command stream

use super::{Emission, LeveledStatement};
use crate::error::{Error, Result};

/// Applies level adjustments in stream order.
///
/// The level starts at zero, never goes negative, and must be back at zero
/// when the stream is finished.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelTracker {
    level: i32,
}

impl LevelTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    /// Place one emission and return its lines at absolute levels
    pub fn place(&mut self, command: &str, emission: &Emission) -> Result<Vec<LeveledStatement>> {
        let (starting, ending) = emission.level_adjustments();
        self.adjust(command, starting)?;
        let base = self.level as usize;
        let lines = emission
            .lines()
            .into_iter()
            .map(|line| LeveledStatement::new(base + line.level, line.statement))
            .collect();
        self.adjust(command, ending)?;
        Ok(lines)
    }

    /// Error unless every opened block was closed
    pub fn finish(&self, command: &str) -> Result<()> {
        if self.level != 0 {
            return Err(Error::UnbalancedControlFlow {
                command: command.to_string(),
                level: self.level,
            });
        }
        Ok(())
    }

    fn adjust(&mut self, command: &str, delta: i32) -> Result<()> {
        let next = self.level + delta;
        if next < 0 {
            return Err(Error::UnbalancedControlFlow {
                command: command.to_string(),
                level: next,
            });
        }
        self.level = next;
        Ok(())
    }
}
