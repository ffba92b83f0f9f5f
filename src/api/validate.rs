//! Argument checks run before any request is made.

use crate::error::{Result, SleeperError};
use crate::types::{Season, Week};

/// Largest `limit` the trending endpoint accepts.
pub const MAX_TRENDING_LIMIT: u32 = 50;

/// Collects every problem with a call's arguments so they are reported together.
#[derive(Debug, Default)]
pub(crate) struct Validator {
    problems: Vec<String>,
}

impl Validator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Trim `value`, recording a problem when nothing is left.
    pub(crate) fn required<'a>(&mut self, name: &str, value: &'a str) -> &'a str {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.problems.push(format!("{name} is required"));
        }
        trimmed
    }

    pub(crate) fn week(&mut self, week: Week) {
        if week.as_u16() < 1 {
            self.problems
                .push("week must be greater than or equal to 1".to_string());
        }
    }

    pub(crate) fn season(&mut self, season: Season) {
        if season.as_u16() == 0 {
            self.problems.push("season is required".to_string());
        }
    }

    pub(crate) fn check(&mut self, ok: bool, problem: impl Into<String>) {
        if !ok {
            self.problems.push(problem.into());
        }
    }

    pub(crate) fn finish(self) -> Result<()> {
        if self.problems.is_empty() {
            Ok(())
        } else {
            Err(SleeperError::InvalidInput {
                message: self.problems.join("\n"),
            })
        }
    }
}

/// Validate a single identifier and return it trimmed.
pub(crate) fn required<'a>(name: &str, value: &'a str) -> Result<&'a str> {
    let mut validator = Validator::new();
    let value = validator.required(name, value);
    validator.finish()?;
    Ok(value)
}
