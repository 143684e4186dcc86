//! Whole-document expansion
//!
//! Batch counterpart of the cursor triggers: rewrite every expansion site in
//! a document in one pass. Used by the CLI and useful for "expand all"
//! commands in a host.

use regex::Regex;

use super::mathmode::is_in_math;
use super::scanner::SymbolTable;

/// Replace every `<keyword><name>` token that sits inside math context and
/// names a known variable with its stored expression.
///
/// Everything else passes through verbatim: tokens outside math, unknown
/// names, and malformed keyword patterns all leave the text untouched. Math
/// context is judged against the original text at each token's own position,
/// so earlier replacements cannot shift later decisions.
pub fn expand_document(text: &str, table: &SymbolTable, translate_keyword: &str) -> String {
    let pattern = format!(r"{}(\w+)", regex::escape(translate_keyword));
    let re = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(_) => return text.to_string(),
    };

    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for caps in re.captures_iter(text) {
        let (token, name) = match (caps.get(0), caps.get(1)) {
            (Some(t), Some(n)) => (t, n),
            _ => continue,
        };
        if !is_in_math(text, token.start()) {
            continue;
        }
        if let Some(expression) = table.get(name.as_str()) {
            out.push_str(&text[last..token.start()]);
            out.push_str(expression);
            last = token.end();
        }
    }

    out.push_str(&text[last..]);
    out
}
