//! VariantValidator payload parsing.
//!
//! VariantValidator keys its response objects by the submitted HGVS
//! expression, with warning entries under synthetic keys like
//! `validation_warning_1`. Acceptance is signaled by the top-level `flag`
//! field, not by HTTP status.

use serde_json::Value;

/// True when the payload signals an accepted variant.
///
/// A payload is accepted when it carries a `flag` whose value is not
/// `"error"` and not an `empty_result`-style rejection.
pub fn payload_accepted(payload: &Value) -> bool {
    match payload.get("flag").and_then(Value::as_str) {
        Some(flag) => flag != "error" && flag != "empty_result",
        None => false,
    }
}

/// Extract the gene symbol from a validation payload.
///
/// Scans top-level objects for a non-empty `gene_symbol` (the usual case,
/// where the key is the HGVS string itself), then falls back to the
/// `validation_warning_1` block. Missing and empty both yield `None`.
pub fn extract_gene_symbol(payload: &Value) -> Option<String> {
    let obj = payload.as_object()?;

    for value in obj.values() {
        if let Some(symbol) = gene_symbol_of(value) {
            return Some(symbol);
        }
    }

    obj.get("validation_warning_1").and_then(gene_symbol_of)
}

fn gene_symbol_of(value: &Value) -> Option<String> {
    value
        .get("gene_symbol")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Surface the validator's own rejection reason verbatim.
///
/// Joins every `validation_warnings` entry found in the payload's top-level
/// objects; falls back to naming the flag when no warnings are present.
pub fn rejection_reason(payload: &Value) -> String {
    let mut reasons: Vec<String> = Vec::new();
    if let Some(obj) = payload.as_object() {
        for value in obj.values() {
            if let Some(warnings) = value.get("validation_warnings").and_then(Value::as_array) {
                reasons.extend(
                    warnings
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::to_string),
                );
            }
        }
    }
    if !reasons.is_empty() {
        return reasons.join("; ");
    }
    match payload.get("flag").and_then(Value::as_str) {
        Some(flag) => format!("validator returned flag '{}'", flag),
        None => "validator response carried no status flag".to_string(),
    }
}
