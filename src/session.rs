//! Long-lived expander state
//!
//! The host keeps one [`Expander`] for its lifetime: the current keyword
//! configuration plus the symbol table produced by the most recent scan. The
//! table is only ever replaced wholesale at the end of a scan, never edited
//! in place, so a lookup can never observe a partially rebuilt table. All
//! operations are synchronous and run on the host's event thread.

use crate::config::KeywordConfig;
use crate::core::document::expand_document;
use crate::core::scanner::{scan, tables_differ, SymbolTable};
use crate::core::trigger::{
    suggest_completions, try_space_expand, CompletionSet, SpaceExpansion,
};

/// Outcome of a rescan, for user-visible notification.
///
/// Change detection governs signaling only; expansion correctness never
/// depends on which variant came back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanReport {
    /// No document was available; the table is left untouched, not cleared.
    NoActiveDocument,
    /// The scan produced the same table as before.
    Unchanged { count: usize },
    /// The table was replaced.
    Updated { count: usize, names: Vec<String> },
}

impl ScanReport {
    /// Human-readable notification text. Presentation only; no format
    /// contract beyond being readable.
    pub fn message(&self) -> String {
        match self {
            ScanReport::NoActiveDocument => "No active document to scan".to_string(),
            ScanReport::Unchanged { count } => {
                format!("No changes ({} variable(s))", count)
            }
            ScanReport::Updated { count, names } => {
                format!("Parsed {} math variable(s): {}", count, names.join(", "))
            }
        }
    }

    /// Whether the table was replaced by this scan.
    pub fn changed(&self) -> bool {
        matches!(self, ScanReport::Updated { .. })
    }
}

/// Process-wide expander state.
#[derive(Debug, Default)]
pub struct Expander {
    config: KeywordConfig,
    table: SymbolTable,
}

impl Expander {
    pub fn new(config: KeywordConfig) -> Self {
        Self {
            config,
            table: SymbolTable::new(),
        }
    }

    pub fn config(&self) -> &KeywordConfig {
        &self.config
    }

    /// Apply a settings change. Takes effect on the next scan or trigger;
    /// the current table stays valid until then.
    pub fn set_config(&mut self, config: KeywordConfig) {
        self.config = config;
    }

    /// Current symbol table, for the "show all variables" command.
    pub fn variables(&self) -> &SymbolTable {
        &self.table
    }

    /// Rescan the active document, if any.
    ///
    /// `None` means no active document: reported as such, table untouched.
    /// Otherwise the document is scanned in full; when the result differs
    /// from the held table it replaces it in one assignment.
    pub fn rescan(&mut self, document: Option<&str>) -> ScanReport {
        let text = match document {
            Some(text) => text,
            None => return ScanReport::NoActiveDocument,
        };

        let new_table = scan(text, &self.config.define_keyword);
        if !tables_differ(&self.table, &new_table) {
            return ScanReport::Unchanged {
                count: self.table.len(),
            };
        }

        let count = new_table.len();
        let names = new_table.keys().cloned().collect();
        self.table = new_table;
        ScanReport::Updated { count, names }
    }

    /// Space-key trigger against the held table and keywords.
    pub fn handle_space(&self, text: &str, cursor: usize) -> Option<SpaceExpansion> {
        try_space_expand(text, cursor, &self.table, &self.config.translate_keyword)
    }

    /// Autocomplete trigger against the held table and keywords.
    pub fn completions(&self, text: &str, cursor: usize) -> Option<CompletionSet> {
        suggest_completions(text, cursor, &self.table, &self.config.translate_keyword)
    }

    /// Expand every known expansion site in a document.
    pub fn expand_all(&self, text: &str) -> String {
        expand_document(text, &self.table, &self.config.translate_keyword)
    }
}
