use crate::error::{Result, SnippetError};
use crate::types::{Budget, Limit};
use serde::{Deserialize, Serialize};

/// Default opening highlight marker
pub const OPENTAG: &str = "[[HIGHLIGHT]]";

/// Default closing highlight marker
pub const CLOSETAG: &str = "[[ENDHIGHLIGHT]]";

/// Configuration for snippet rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnippetConfig {
    /// Marker inserted before each highlighted span
    pub open_tag: String,

    /// Marker inserted after each highlighted span
    pub close_tag: String,

    /// Character and sentence caps
    pub budget: Budget,

    /// How the caps are enforced during selection
    pub policy: BudgetPolicy,
}

impl Default for SnippetConfig {
    fn default() -> Self {
        Self {
            open_tag: OPENTAG.to_string(),
            close_tag: CLOSETAG.to_string(),
            budget: Budget::unbounded(),
            policy: BudgetPolicy::default(),
        }
    }
}

impl SnippetConfig {
    /// Create config for short search-result previews (two sentences, 200 chars)
    pub fn preview() -> Self {
        Self {
            budget: Budget::new(Limit::AtMost(200), Limit::AtMost(2)),
            ..Default::default()
        }
    }

    /// Create config that keeps every sentence
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Builder: set the budget
    #[must_use]
    pub fn with_budget(mut self, max_chars: impl Into<Limit>, max_sents: impl Into<Limit>) -> Self {
        self.budget = Budget::new(max_chars, max_sents);
        self
    }

    /// Builder: set the markers
    #[must_use]
    pub fn with_tags(mut self, open_tag: impl Into<String>, close_tag: impl Into<String>) -> Self {
        self.open_tag = open_tag.into();
        self.close_tag = close_tag.into();
        self
    }

    /// Builder: set the budget policy
    #[must_use]
    pub const fn with_policy(mut self, policy: BudgetPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.open_tag.is_empty() || self.close_tag.is_empty() {
            return Err(SnippetError::invalid_config(
                "open_tag and close_tag must not be empty",
            ));
        }

        if self.open_tag == self.close_tag {
            return Err(SnippetError::invalid_config(format!(
                "open_tag and close_tag must differ (both are {:?})",
                self.open_tag
            )));
        }

        Ok(())
    }
}

/// Strategy for enforcing the budget while accepting ranked sentences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPolicy {
    /// Accept a sentence only if it fits: stop at `max_sents`, skip any
    /// sentence whose highlighted text would overflow `max_chars`.
    /// The snippet never exceeds either cap.
    #[default]
    Strict,

    /// Check `count > cap` before each sentence and stop on the first
    /// overflow. Admits one over-long sentence and up to `max_sents + 1`
    /// sentences.
    Legacy,
}

impl BudgetPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Legacy => "legacy",
        }
    }
}

impl std::str::FromStr for BudgetPolicy {
    type Err = SnippetError;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "legacy" => Ok(Self::Legacy),
            other => Err(SnippetError::invalid_config(format!(
                "unknown budget policy {other:?} (expected strict|legacy)"
            ))),
        }
    }
}
