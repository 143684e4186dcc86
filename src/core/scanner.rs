//! Definition scanner
//!
//! Extracts `$<defineKeyword><name> = <expr>$` occurrences from full document
//! text into a name → expression table. The scan is a pure function; the
//! session layer owns the resulting table and decides whether anything
//! changed since the previous scan.

use indexmap::IndexMap;
use regex::Regex;

/// Name → expression mapping rebuilt wholesale on every scan.
///
/// Keys are identifier-like tokens (word characters); expressions are opaque
/// strings with surrounding whitespace trimmed. Insertion order follows
/// document order of first definition, which keeps notification and
/// completion listings deterministic, but table equality is decided by
/// (name, expression) pairs only.
pub type SymbolTable = IndexMap<String, String>;

/// Scan full document text for variable definitions.
///
/// A definition looks like `$!!A = x + 1$` with the default `!!` keyword:
/// a `$`, the define keyword, a word-character name, `=` with optional
/// whitespace, then everything up to the next `$` as the expression. The
/// first `$` after the expression terminates it; no nesting or escaping is
/// supported. On duplicate names the later occurrence in document order wins.
///
/// The keyword is escaped before being embedded in the pattern, so keywords
/// containing regex metacharacters (`$`, `*`, ...) are matched literally.
pub fn scan(text: &str, define_keyword: &str) -> SymbolTable {
    let pattern = format!(
        r"\${}(\w+)\s*=\s*([^$]+)\$",
        regex::escape(define_keyword)
    );

    let mut table = SymbolTable::new();
    let re = match Regex::new(&pattern) {
        Ok(re) => re,
        // Unreachable after escaping, but a bad pattern must not take the
        // host down with it.
        Err(_) => return table,
    };

    for caps in re.captures_iter(text) {
        if let (Some(name), Some(expr)) = (caps.get(1), caps.get(2)) {
            table.insert(name.as_str().to_string(), expr.as_str().trim().to_string());
        }
    }

    table
}

/// Symmetric difference check between two scan results.
///
/// True when the sizes differ, any name's expression differs, or a
/// previously known name is absent from the new table. Governs user-visible
/// "changed" signaling only; expansion correctness never depends on it.
pub fn tables_differ(old: &SymbolTable, new: &SymbolTable) -> bool {
    if old.len() != new.len() {
        return true;
    }
    if new
        .iter()
        .any(|(name, expr)| old.get(name) != Some(expr))
    {
        return true;
    }
    old.keys().any(|name| !new.contains_key(name))
}
