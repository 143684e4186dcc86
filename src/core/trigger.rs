//! Expansion triggers
//!
//! Composes the math-context locator and the symbol table into the two
//! user-facing trigger forms: the space-key replacement and the autocomplete
//! popup. Both forms share one token extractor parameterized by whether an
//! empty partial name is acceptable, so they cannot drift apart.
//!
//! Every "failure" here is an inert non-action: the trigger returns `None`
//! and the host falls back to its default behavior.

use regex::Regex;

use super::mathmode::{is_in_math, prefix_at};
use super::scanner::SymbolTable;

/// A committed space-trigger replacement.
///
/// Offsets are byte offsets into the document the decision was made against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceExpansion {
    /// Start of the replaced `<keyword><name>` token.
    pub replace_from: usize,
    /// End of the replaced token (the cursor position).
    pub replace_to: usize,
    /// The stored expression, inserted verbatim.
    pub insert_text: String,
    /// Cursor position after the edit: span start + inserted length.
    pub new_cursor: usize,
}

/// One autocomplete candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub name: String,
    pub expression: String,
}

/// Autocomplete response: span to replace plus pre-filtered candidates.
///
/// Selecting an option replaces the whole `[from, to)` span (keyword plus
/// whatever partial name was typed) with the option's expression, cursor
/// collapsed after the inserted text. Filtering has already been applied;
/// the display layer must not filter again. Option order follows table
/// iteration order and is a presentation detail, not a contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionSet {
    pub from: usize,
    pub to: usize,
    pub options: Vec<Completion>,
}

/// Trailing `<keyword><partial-name>` token found right before the cursor.
struct ExpansionSite {
    /// Document offset of the keyword start.
    from: usize,
    /// Document offset of the cursor.
    to: usize,
    /// Captured word characters after the keyword (may be empty).
    name: String,
}

/// Extract the expansion site immediately before the cursor, if any.
///
/// Matches `escaped(keyword)` followed by word characters, anchored at the
/// end of the current line's pre-cursor text. `allow_empty` distinguishes
/// the autocomplete form (`\w*`, fires right after the keyword) from the
/// space form (`\w+`, needs at least one typed character).
fn expansion_site(
    text: &str,
    cursor: usize,
    translate_keyword: &str,
    allow_empty: bool,
) -> Option<ExpansionSite> {
    let prefix = prefix_at(text, cursor);
    let line_start = prefix.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let line_before = &prefix[line_start..];

    let pattern = format!(
        r"{}(\w{})$",
        regex::escape(translate_keyword),
        if allow_empty { "*" } else { "+" }
    );
    let re = Regex::new(&pattern).ok()?;
    let caps = re.captures(line_before)?;
    let token = caps.get(0)?;

    Some(ExpansionSite {
        from: line_start + token.start(),
        to: line_start + token.end(),
        name: caps
            .get(1)
            .map(|g| g.as_str().to_string())
            .unwrap_or_default(),
    })
}

/// Space-key trigger: single-shot decision for one keystroke.
///
/// Returns `None` ("not consumed", let the space insert normally) unless the
/// cursor is in math context, a `<keyword><name>` token ends at the cursor,
/// and the name has an exact entry in the table.
pub fn try_space_expand(
    text: &str,
    cursor: usize,
    table: &SymbolTable,
    translate_keyword: &str,
) -> Option<SpaceExpansion> {
    if !is_in_math(text, cursor) {
        return None;
    }

    let site = expansion_site(text, cursor, translate_keyword, false)?;
    let expression = table.get(&site.name)?;

    Some(SpaceExpansion {
        replace_from: site.from,
        replace_to: site.to,
        insert_text: expression.clone(),
        new_cursor: site.from + expression.len(),
    })
}

/// Autocomplete trigger.
///
/// Returns `None` (no opinion, defer to other completion sources) outside
/// math context, without a keyword token before the cursor, or when no table
/// entry starts with the typed prefix. The prefix match is case-sensitive
/// and an empty prefix matches every entry.
pub fn suggest_completions(
    text: &str,
    cursor: usize,
    table: &SymbolTable,
    translate_keyword: &str,
) -> Option<CompletionSet> {
    if !is_in_math(text, cursor) {
        return None;
    }

    let site = expansion_site(text, cursor, translate_keyword, true)?;

    let options: Vec<Completion> = table
        .iter()
        .filter(|(name, _)| name.starts_with(&site.name))
        .map(|(name, expression)| Completion {
            name: name.clone(),
            expression: expression.clone(),
        })
        .collect();

    if options.is_empty() {
        return None;
    }

    Some(CompletionSet {
        from: site.from,
        to: site.to,
        options,
    })
}
