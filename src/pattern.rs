use regex_automata::meta::{BuildError, Regex};
use std::time::{Duration, Instant};
use thiserror::Error;

const PATTERN_COMPILE_BUDGET: Duration = Duration::from_millis(100);
const MAX_PATTERN_LENGTH: usize = 50_000;

/// Errors raised while compiling an admission pattern.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("failed to compile pattern `{pattern}`")]
    Build {
        pattern: String,
        #[source]
        source: Box<BuildError>,
    },
    #[error("compiling pattern took {elapsed:?}, exceeding the {budget:?} budget")]
    Timeout { elapsed: Duration, budget: Duration },
    #[error("pattern length {length} exceeds maximum allowed {max}")]
    TooLong { length: usize, max: usize },
}

/// A single compiled admission pattern.
///
/// Matching uses regex *search* semantics: the pattern may hit anywhere
/// inside the candidate, case-insensitively. Anchor explicitly (`^...$`)
/// for a full match.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    source: String,
}

impl Pattern {
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        Self::compile(pattern, PATTERN_COMPILE_BUDGET)
    }

    fn compile(pattern: &str, budget: Duration) -> Result<Self, PatternError> {
        if pattern.len() > MAX_PATTERN_LENGTH {
            return Err(PatternError::TooLong {
                length: pattern.len(),
                max: MAX_PATTERN_LENGTH,
            });
        }

        let started = Instant::now();
        let regex = Regex::new(&format!("(?i:{pattern})")).map_err(|err| PatternError::Build {
            pattern: pattern.to_owned(),
            source: Box::new(err),
        })?;
        let elapsed = started.elapsed();
        if elapsed > budget {
            return Err(PatternError::Timeout { elapsed, budget });
        }

        Ok(Self {
            regex,
            source: pattern.to_owned(),
        })
    }

    #[cfg(test)]
    pub(crate) fn with_budget(pattern: &str, budget: Duration) -> Result<Self, PatternError> {
        Self::compile(pattern, budget)
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate.as_bytes())
    }
}

/// An ordered set of patterns; a candidate is listed when any member matches.
#[derive(Debug, Clone, Default)]
pub struct PatternList {
    patterns: Vec<Pattern>,
}

impl PatternList {
    pub fn compile<I, S>(values: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = values
            .into_iter()
            .map(|value| Pattern::new(value.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { patterns })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.patterns
            .iter()
            .any(|pattern| pattern.is_match(candidate))
    }
}

#[cfg(test)]
#[path = "pattern_test.rs"]
mod pattern_test;
