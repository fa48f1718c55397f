//! Report rendering.
//!
//! The rendered layout is a user-facing contract: section ordering,
//! indentation, and the fallback sentences are fixed. `format_report` is a
//! pure function of its inputs, so identical inputs yield byte-identical
//! output.

use crate::clinvar::{ClassificationDetail, ClassificationKind, ClinicalRecord};
use crate::error::LookupError;
use crate::variant::{ValidationResult, VariantQuery};

/// Width of the rule under the summary header.
const RULE_WIDTH: usize = 40;

/// Render the final report for a lookup.
///
/// Exactly one of four fixed shapes is produced:
/// 1. validation failed: a single failure line;
/// 2. validated, no record, gene known: the two-line "no results" text;
/// 3. validated, no record, gene unknown: success line plus the
///    gene-not-available sentence;
/// 4. validated with a record: the full clinical variant summary.
pub fn format_report(
    query: &VariantQuery,
    validation: &ValidationResult,
    record: Option<&ClinicalRecord>,
) -> String {
    if !validation.is_valid {
        return format!(
            "HGVS variant '{}' failed validation for {}: {}.",
            query.hgvs, query.build, validation.raw_message
        );
    }

    match record {
        Some(record) => format_summary(query, validation, record),
        None if validation.gene_symbol.is_none() => format!(
            "{}\nGene Symbol: Not available — the variant may be intronic or unrecognized by transcript.",
            success_line(query)
        ),
        None => format!(
            "No results found for HGVS variant '{}' in ClinVar.\nThis variant may not be clinically annotated yet.",
            query.hgvs
        ),
    }
}

/// Render the generic failure line used when a lookup call errors out.
pub fn format_failure(query: &VariantQuery, err: &LookupError) -> String {
    format!(
        "Error: ClinVar lookup failed for HGVS variant '{}': {}.",
        query.hgvs, err
    )
}

fn success_line(query: &VariantQuery) -> String {
    format!(
        "HGVS variant '{}' validated successfully for {}.",
        query.hgvs, query.build
    )
}

fn format_summary(
    query: &VariantQuery,
    validation: &ValidationResult,
    record: &ClinicalRecord,
) -> String {
    let gene = validation
        .gene_symbol
        .as_deref()
        .or(record.gene.as_deref())
        .unwrap_or("N/A");

    let mut lines: Vec<String> = vec![
        success_line(query),
        String::new(),
        "Clinical Variant Summary".to_string(),
        "=".repeat(RULE_WIDTH),
        format!("Gene: {}", gene),
        format!("Variant UID: {}", record.uid),
    ];

    for kind in ClassificationKind::ALL {
        lines.push(String::new());
        lines.push(kind.title().to_string());
        match record.classifications.get(kind) {
            Some(detail) => lines.extend(section_lines(detail)),
            None => lines.push("  No data available.".to_string()),
        }
    }

    lines.join("\n")
}

/// Field lines for a populated section.
///
/// Every field is printed even when blank, so a sparse section still shows
/// its full shape.
fn section_lines(detail: &ClassificationDetail) -> Vec<String> {
    vec![
        field_line("Description", detail.description.as_deref().unwrap_or("")),
        field_line(
            "Last evaluated",
            &detail
                .last_evaluated
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        ),
        field_line(
            "Review status",
            detail.review_status.as_deref().unwrap_or(""),
        ),
        field_line(
            "Fda recognized database",
            detail.fda_recognized_database.as_deref().unwrap_or(""),
        ),
        field_line("Trait set", &detail.trait_set.join("; ")),
    ]
}

fn field_line(label: &str, value: &str) -> String {
    format!("  {}: {}", label, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clinvar::Classifications;
    use crate::variant::GenomeBuild;
    use chrono::NaiveDate;

    fn query() -> VariantQuery {
        VariantQuery::new("NM_000518.5:c.92+1G>A", GenomeBuild::GRCh38).unwrap()
    }

    #[test]
    fn test_failed_validation_is_single_line() {
        let validation = ValidationResult::invalid("syntactically invalid");
        let report = format_report(&query(), &validation, None);
        assert_eq!(
            report,
            "HGVS variant 'NM_000518.5:c.92+1G>A' failed validation for GRCh38: syntactically invalid."
        );
        assert_eq!(report.lines().count(), 1);
    }

    #[test]
    fn test_no_results_two_lines() {
        let validation = ValidationResult::valid(Some("HBB".to_string()), "gene_variant");
        let report = format_report(&query(), &validation, None);
        assert_eq!(
            report,
            "No results found for HGVS variant 'NM_000518.5:c.92+1G>A' in ClinVar.\n\
             This variant may not be clinically annotated yet."
        );
    }

    #[test]
    fn test_gene_symbol_not_available() {
        let validation = ValidationResult::valid(None, "warning");
        let report = format_report(&query(), &validation, None);
        assert_eq!(
            report,
            "HGVS variant 'NM_000518.5:c.92+1G>A' validated successfully for GRCh38.\n\
             Gene Symbol: Not available — the variant may be intronic or unrecognized by transcript."
        );
    }

    #[test]
    fn test_summary_gene_falls_back_to_record() {
        let validation = ValidationResult::valid(None, "warning");
        let record = ClinicalRecord {
            uid: "15436".to_string(),
            gene: Some("HBB".to_string()),
            classifications: Classifications::default(),
        };
        let report = format_report(&query(), &validation, Some(&record));
        assert!(report.contains("Gene: HBB"));
        assert!(report.contains("Variant UID: 15436"));
    }

    #[test]
    fn test_blank_fields_still_render_their_lines() {
        let validation = ValidationResult::valid(Some("HBB".to_string()), "gene_variant");
        let mut classifications = Classifications::default();
        classifications.set(
            ClassificationKind::Germline,
            Some(ClassificationDetail::default()),
        );
        let record = ClinicalRecord {
            uid: "15436".to_string(),
            gene: None,
            classifications,
        };
        let report = format_report(&query(), &validation, Some(&record));
        assert!(report.contains("  Description: \n"));
        assert!(report.contains("  Last evaluated: \n"));
        assert!(report.contains("  Review status: \n"));
        assert!(report.contains("  Fda recognized database: \n"));
        assert!(report.contains("  Trait set: "));
    }

    #[test]
    fn test_last_evaluated_renders_normalized_date() {
        let mut classifications = Classifications::default();
        classifications.set(
            ClassificationKind::Germline,
            Some(ClassificationDetail {
                last_evaluated: NaiveDate::from_ymd_opt(2025, 3, 4),
                ..Default::default()
            }),
        );
        let record = ClinicalRecord {
            uid: "15436".to_string(),
            gene: None,
            classifications,
        };
        let validation = ValidationResult::valid(Some("HBB".to_string()), "gene_variant");
        let report = format_report(&query(), &validation, Some(&record));
        assert!(report.contains("  Last evaluated: 2025-03-04"));
    }

    #[test]
    fn test_format_failure_line() {
        let err = LookupError::transport("connection refused");
        assert_eq!(
            format_failure(&query(), &err),
            "Error: ClinVar lookup failed for HGVS variant 'NM_000518.5:c.92+1G>A': \
             transport failure: connection refused."
        );
    }
}
