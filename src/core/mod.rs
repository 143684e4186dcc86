//! Core expander modules
//!
//! Pure functions over document text and byte offsets:
//! - `scanner`: definition extraction into the symbol table
//! - `mathmode`: inline/display math-context detection
//! - `trigger`: space-key and autocomplete expansion decisions
//! - `document`: whole-document batch expansion

pub mod document;
pub mod mathmode;
pub mod scanner;
pub mod trigger;

// Re-export the main types and functions
pub use document::expand_document;
pub use mathmode::is_in_math;
pub use scanner::{scan, tables_differ, SymbolTable};
pub use trigger::{
    suggest_completions, try_space_expand, Completion, CompletionSet, SpaceExpansion,
};
