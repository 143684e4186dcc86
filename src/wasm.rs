//! WASM bindings for mathvar
//!
//! This module exposes the expander to a JavaScript editor host. The host
//! keeps one `MathVarExpander` instance, feeds it document text and cursor
//! offsets, and applies the returned replacement decisions through its own
//! editor API.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use crate::{Expander, KeywordConfig, ScanReport};

/// One symbol-table entry (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct VariableEntry {
    pub name: String,
    pub expression: String,
}

/// Rescan outcome (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanSummary {
    /// Whether the table was replaced
    pub changed: bool,
    /// Number of variables after the scan
    pub count: usize,
    /// Variable names, in document order
    pub names: Vec<String>,
    /// Notification text for the host's message channel
    pub message: String,
}

/// Space-trigger decision (exposed to WASM); `null` means "not consumed"
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceExpansionResult {
    pub replace_from: usize,
    pub replace_to: usize,
    pub insert_text: String,
    pub new_cursor: usize,
}

/// Autocomplete response (exposed to WASM); `null` means "no opinion"
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionResult {
    pub from: usize,
    pub to: usize,
    pub options: Vec<VariableEntry>,
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Stateful expander handle for a JS host
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "MathVarExpander")]
pub struct WasmExpander {
    inner: Expander,
}

#[cfg(feature = "wasm")]
#[wasm_bindgen(js_class = "MathVarExpander")]
impl WasmExpander {
    /// Create an expander from a saved settings object.
    ///
    /// `settings` is the flat `{ defineKeyword, translateKeyword }` object;
    /// missing keys and unreadable values fall back to defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(settings: JsValue) -> WasmExpander {
        let config: KeywordConfig =
            serde_wasm_bindgen::from_value(settings).unwrap_or_default();
        WasmExpander {
            inner: Expander::new(config),
        }
    }

    /// Apply a settings change; takes effect on the next scan or trigger.
    #[wasm_bindgen(js_name = "setSettings")]
    pub fn set_settings(&mut self, settings: JsValue) {
        let config: KeywordConfig =
            serde_wasm_bindgen::from_value(settings).unwrap_or_default();
        self.inner.set_config(config);
    }

    /// Rescan the active document. Pass `undefined` when no document is open.
    #[wasm_bindgen(js_name = "rescan")]
    pub fn rescan(&mut self, document: Option<String>) -> JsValue {
        let report = self.inner.rescan(document.as_deref());
        let (changed, count, names) = match &report {
            ScanReport::NoActiveDocument => (false, self.inner.variables().len(), vec![]),
            ScanReport::Unchanged { count } => (false, *count, vec![]),
            ScanReport::Updated { count, names } => (true, *count, names.clone()),
        };
        let summary = ScanSummary {
            changed,
            count,
            names,
            message: report.message(),
        };
        serde_wasm_bindgen::to_value(&summary).unwrap_or(JsValue::NULL)
    }

    /// Current variables, in document order.
    #[wasm_bindgen(js_name = "variables")]
    pub fn variables(&self) -> JsValue {
        let entries: Vec<VariableEntry> = self
            .inner
            .variables()
            .iter()
            .map(|(name, expression)| VariableEntry {
                name: name.clone(),
                expression: expression.clone(),
            })
            .collect();
        serde_wasm_bindgen::to_value(&entries).unwrap_or(JsValue::NULL)
    }

    /// Whether `offset` lies inside inline or display math.
    #[wasm_bindgen(js_name = "isInMath")]
    pub fn is_in_math(&self, text: &str, offset: usize) -> bool {
        crate::is_in_math(text, offset)
    }

    /// Space-key trigger. Returns `null` when the keystroke is not consumed.
    #[wasm_bindgen(js_name = "trySpaceExpand")]
    pub fn try_space_expand(&self, text: &str, cursor: usize) -> JsValue {
        match self.inner.handle_space(text, cursor) {
            Some(hit) => serde_wasm_bindgen::to_value(&SpaceExpansionResult {
                replace_from: hit.replace_from,
                replace_to: hit.replace_to,
                insert_text: hit.insert_text,
                new_cursor: hit.new_cursor,
            })
            .unwrap_or(JsValue::NULL),
            None => JsValue::NULL,
        }
    }

    /// Autocomplete trigger. Returns `null` (not an empty list) when this
    /// source has no opinion, so other completion sources still run.
    #[wasm_bindgen(js_name = "suggestCompletions")]
    pub fn suggest_completions(&self, text: &str, cursor: usize) -> JsValue {
        match self.inner.completions(text, cursor) {
            Some(set) => serde_wasm_bindgen::to_value(&CompletionResult {
                from: set.from,
                to: set.to,
                options: set
                    .options
                    .into_iter()
                    .map(|o| VariableEntry {
                        name: o.name,
                        expression: o.expression,
                    })
                    .collect(),
            })
            .unwrap_or(JsValue::NULL),
            None => JsValue::NULL,
        }
    }

    /// Expand every known expansion site in a document.
    #[wasm_bindgen(js_name = "expandDocument")]
    pub fn expand_document(&self, text: &str) -> String {
        self.inner.expand_all(text)
    }
}

/// Stateless scan, for hosts that manage their own table
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "scanVariables")]
pub fn scan_variables_wasm(text: &str, define_keyword: &str) -> JsValue {
    let entries: Vec<VariableEntry> = crate::scan(text, define_keyword)
        .into_iter()
        .map(|(name, expression)| VariableEntry { name, expression })
        .collect();
    serde_wasm_bindgen::to_value(&entries).unwrap_or(JsValue::NULL)
}

/// Stateless math-context check
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "isInMath")]
pub fn is_in_math_wasm(text: &str, offset: usize) -> bool {
    crate::is_in_math(text, offset)
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
