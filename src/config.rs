//! Keyword configuration
//!
//! Two independently configurable strings mark definition and expansion
//! sites. The host persists them as a flat camelCase JSON object; missing
//! keys fall back to defaults (shallow merge), unreadable data falls back
//! entirely. Keywords may contain regex metacharacters; they are escaped at
//! the point of pattern construction, never validated here.

use serde::{Deserialize, Serialize};

use crate::utils::error::{ExpanderError, ExpanderResult};

/// Default marker for a definition site: `$!!A = ...$`.
pub const DEFAULT_DEFINE_KEYWORD: &str = "!!";

/// Default marker for an expansion site: `@A`.
pub const DEFAULT_TRANSLATE_KEYWORD: &str = "@";

/// Process-wide keyword settings.
///
/// Loaded once, mutable via the host settings UI; a change takes effect on
/// the next scan or trigger without rebuilding the table. An empty keyword
/// is accepted as-is and produces degenerate (match-everywhere) patterns;
/// configuration correctness is the user's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordConfig {
    #[serde(default = "default_define_keyword")]
    pub define_keyword: String,
    #[serde(default = "default_translate_keyword")]
    pub translate_keyword: String,
}

fn default_define_keyword() -> String {
    DEFAULT_DEFINE_KEYWORD.to_string()
}

fn default_translate_keyword() -> String {
    DEFAULT_TRANSLATE_KEYWORD.to_string()
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            define_keyword: default_define_keyword(),
            translate_keyword: default_translate_keyword(),
        }
    }
}

impl KeywordConfig {
    /// Load from a saved settings object, falling back to defaults on any
    /// parse failure. This is the host-facing, never-fails entry point.
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }

    /// Strict variant for explicit settings files (CLI `--settings`), where
    /// silently ignoring a typo would be worse than an error.
    pub fn from_json_strict(raw: &str) -> ExpanderResult<Self> {
        serde_json::from_str(raw).map_err(|e| ExpanderError::config(e.to_string()))
    }

    /// Serialize for persistence.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
