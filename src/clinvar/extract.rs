//! Classification extraction from raw eSummary payloads.
//!
//! The eSummary schema is not contractually guaranteed field-by-field, so
//! extraction is total: any node or field that is missing, null, empty, or
//! of an unexpected type degrades to `None` for that field. Nothing in this
//! module returns an error or panics on malformed input.

use chrono::NaiveDate;
use serde_json::Value;

use super::types::{ClassificationDetail, ClassificationKind, Classifications};

/// Date-time layouts observed in eSummary `last_evaluated` fields.
const DATE_FORMATS: [&str; 4] = ["%Y/%m/%d %H:%M", "%Y/%m/%d", "%Y-%m-%d %H:%M", "%Y-%m-%d"];

/// Extract all three classification sections from a record payload.
///
/// The returned [`Classifications`] always answers for every
/// [`ClassificationKind`]; kinds without a usable node hold `None`.
pub fn extract_classifications(record_payload: &Value) -> Classifications {
    let mut classifications = Classifications::default();
    for kind in ClassificationKind::ALL {
        let detail = record_payload
            .get(kind.payload_key())
            .and_then(|node| extract_classification(node, kind));
        classifications.set(kind, detail);
    }
    classifications
}

/// Extract a single classification section.
///
/// Returns `None` when the node is not a JSON object (the category was never
/// assessed for this record). A present-but-sparse object yields a detail
/// whose unavailable fields are `None`.
pub fn extract_classification(node: &Value, _kind: ClassificationKind) -> Option<ClassificationDetail> {
    let obj = node.as_object()?;
    Some(ClassificationDetail {
        description: opt_string(obj.get("description")),
        last_evaluated: obj.get("last_evaluated").and_then(parse_date),
        review_status: opt_string(obj.get("review_status")),
        fda_recognized_database: opt_string(obj.get("fda_recognized_database")),
        trait_set: extract_trait_set(obj.get("trait_set")),
    })
}

/// Extract the gene symbol from a record payload.
///
/// eSummary lists genes under `genes[].symbol`, with `gene_sort` as a flat
/// fallback. Missing or empty values are `None`, never `Some("")`.
pub fn extract_record_gene(record_payload: &Value) -> Option<String> {
    let from_genes = record_payload
        .get("genes")
        .and_then(Value::as_array)
        .and_then(|genes| genes.iter().find_map(|g| opt_string(g.get("symbol"))));
    from_genes.or_else(|| opt_string(record_payload.get("gene_sort")))
}

/// Normalize a string-typed field: missing, null, and empty all map to `None`.
fn opt_string(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Parse an eSummary date-time value; unparsable values map to `None`.
fn parse_date(value: &Value) -> Option<NaiveDate> {
    let s = value.as_str()?.trim();
    if s.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// Extract trait names in order, duplicates preserved.
///
/// Entries are either `{"trait_name": ...}` objects or plain strings;
/// anything else is skipped. Extraction is lossless: summarizing long lists
/// is the display layer's choice.
fn extract_trait_set(value: Option<&Value>) -> Vec<String> {
    let Some(entries) = value.and_then(Value::as_array) else {
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(|entry| match entry {
            Value::Object(_) => opt_string(entry.get("trait_name")),
            Value::String(_) => opt_string(Some(entry)),
            _ => None,
        })
        .collect()
}
