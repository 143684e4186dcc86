//! # mathvar
//!
//! In-editor math variable expander: define named variables inside math
//! blocks and expand them at the cursor.
//!
//! A definition is written directly into a math block, `$!!A = [x \in a]$`
//! with the default keywords; typing `@A` inside any math span later expands
//! to the recorded expression, either on the space key or through an
//! autocomplete popup.
//!
//! ## Features
//!
//! - **Definition scanning**: full-document scan into a name → expression
//!   table, with change detection against the previous scan
//! - **Math-context detection**: inline (`$...$`) and display (`$$...$$`)
//!   spans located by delimiter parity over the prefix text
//! - **Two trigger forms**: space-key replacement (exact name) and
//!   autocomplete (prefix filter), sharing one token-extraction core
//! - **Configurable keywords**: both markers are arbitrary strings, escaped
//!   before pattern use
//! - **Host-agnostic**: the core sees plain text and byte offsets only;
//!   editor integration stays in thin adapters (CLI, WASM)
//!
//! ## Usage Examples
//!
//! ### Scanning and a single expansion
//!
//! ```rust
//! use mathvar::{scan, try_space_expand};
//!
//! let doc = "$!!A = x + 1$ and later";
//! let table = scan(doc, "!!");
//! assert_eq!(table.get("A").map(String::as_str), Some("x + 1"));
//!
//! // Cursor right after "@A" in an open math span.
//! let hit = try_space_expand("$@A", 3, &table, "@").unwrap();
//! assert_eq!(hit.insert_text, "x + 1");
//! assert_eq!((hit.replace_from, hit.replace_to), (1, 3));
//! ```
//!
//! ### Session-driven use (the shape an editor host wants)
//!
//! ```rust
//! use mathvar::{Expander, KeywordConfig};
//!
//! let mut expander = Expander::new(KeywordConfig::default());
//! let report = expander.rescan(Some("$!!E = mc^2$"));
//! assert!(report.changed());
//!
//! let set = expander.completions("$@E", 3).unwrap();
//! assert_eq!(set.options[0].expression, "mc^2");
//! ```

/// Core expander modules
pub mod core;

/// Keyword configuration and settings persistence
pub mod config;

/// Long-lived session state (table ownership, rescan reporting)
pub mod session;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export the core API
pub use core::document::expand_document;
pub use core::mathmode::is_in_math;
pub use core::scanner::{scan, tables_differ, SymbolTable};
pub use core::trigger::{
    suggest_completions, try_space_expand, Completion, CompletionSet, SpaceExpansion,
};

pub use config::{KeywordConfig, DEFAULT_DEFINE_KEYWORD, DEFAULT_TRANSLATE_KEYWORD};
pub use session::{Expander, ScanReport};
pub use utils::debounce::{Debouncer, DEFAULT_RESCAN_DELAY};
pub use utils::error::{ExpanderError, ExpanderResult};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_and_expand_round() {
        let doc = "$!!A = x + 1$";
        let table = scan(doc, "!!");
        let hit = try_space_expand("$@A", 3, &table, "@").expect("should consume");
        assert_eq!(hit.insert_text, "x + 1");
    }

    #[test]
    fn test_is_in_math_reexport() {
        assert!(is_in_math("$x", 2));
        assert!(!is_in_math("x", 1));
    }

    #[test]
    fn test_defaults_match_config() {
        let config = KeywordConfig::default();
        assert_eq!(config.define_keyword, DEFAULT_DEFINE_KEYWORD);
        assert_eq!(config.translate_keyword, DEFAULT_TRANSLATE_KEYWORD);
    }
}
