//! Report layout tests.
//!
//! The rendered report is a user-facing contract, so these tests pin the
//! exact byte-for-byte output of every report state, including the fixed
//! wording of the fallback sentences.

use chrono::NaiveDate;
use clinvar_lookup::{
    format_report, ClassificationDetail, ClassificationKind, Classifications, ClinicalRecord,
    GenomeBuild, ValidationResult, VariantQuery,
};

fn hbb_query() -> VariantQuery {
    VariantQuery::new("NM_000518.5:c.92+1G>A", GenomeBuild::GRCh38).unwrap()
}

fn germline_only_record() -> ClinicalRecord {
    let mut classifications = Classifications::default();
    classifications.set(
        ClassificationKind::Germline,
        Some(ClassificationDetail {
            description: Some("Pathogenic".to_string()),
            last_evaluated: NaiveDate::from_ymd_opt(2025, 3, 4),
            review_status: Some(
                "criteria provided, multiple submitters, no conflicts".to_string(),
            ),
            fda_recognized_database: None,
            trait_set: vec!["beta Thalassemia".to_string()],
        }),
    );
    ClinicalRecord {
        uid: "15436".to_string(),
        gene: Some("HBB".to_string()),
        classifications,
    }
}

/// Scenario 1: full summary with a germline-only record.
#[test]
fn test_germline_only_summary_layout() {
    let validation = ValidationResult::valid(Some("HBB".to_string()), "gene_variant");
    let report = format_report(&hbb_query(), &validation, Some(&germline_only_record()));

    let expected = concat!(
        "HGVS variant 'NM_000518.5:c.92+1G>A' validated successfully for GRCh38.\n",
        "\n",
        "Clinical Variant Summary\n",
        "========================================\n",
        "Gene: HBB\n",
        "Variant UID: 15436\n",
        "\n",
        "Germline Classification\n",
        "  Description: Pathogenic\n",
        "  Last evaluated: 2025-03-04\n",
        "  Review status: criteria provided, multiple submitters, no conflicts\n",
        "  Fda recognized database: \n",
        "  Trait set: beta Thalassemia\n",
        "\n",
        "Clinical Impact Classification\n",
        "  No data available.\n",
        "\n",
        "Oncogenicity Classification\n",
        "  No data available.",
    );
    assert_eq!(report, expected);
}

/// Scenario 2: validated variant with zero ClinVar hits.
#[test]
fn test_no_results_exact_two_lines() {
    let query = VariantQuery::new("NM_000314.4:c.850-2A>G", GenomeBuild::GRCh38).unwrap();
    let validation = ValidationResult::valid(Some("PTEN".to_string()), "gene_variant");
    let report = format_report(&query, &validation, None);
    assert_eq!(
        report,
        "No results found for HGVS variant 'NM_000314.4:c.850-2A>G' in ClinVar.\n\
         This variant may not be clinically annotated yet."
    );
}

/// Scenario 3: validated but no gene symbol resolved.
#[test]
fn test_gene_symbol_not_available_sentence() {
    let validation = ValidationResult::valid(None, "warning");
    let report = format_report(&hbb_query(), &validation, None);
    assert_eq!(
        report,
        "HGVS variant 'NM_000518.5:c.92+1G>A' validated successfully for GRCh38.\n\
         Gene Symbol: Not available — the variant may be intronic or unrecognized by transcript."
    );
}

/// Scenario 4: validator rejection renders one line carrying the reason.
#[test]
fn test_rejection_single_line_with_reason() {
    let validation = ValidationResult::invalid(
        "Variant description NM_000518.5:c.92+1G>X is syntactically invalid",
    );
    let report = format_report(&hbb_query(), &validation, None);
    assert_eq!(
        report,
        "HGVS variant 'NM_000518.5:c.92+1G>A' failed validation for GRCh38: \
         Variant description NM_000518.5:c.92+1G>X is syntactically invalid."
    );
    assert_eq!(report.lines().count(), 1);
}

#[test]
fn test_format_is_idempotent() {
    let validation = ValidationResult::valid(Some("HBB".to_string()), "gene_variant");
    let record = germline_only_record();
    let first = format_report(&hbb_query(), &validation, Some(&record));
    let second = format_report(&hbb_query(), &validation, Some(&record));
    assert_eq!(first, second);
}

/// A record with all three kinds present renders exactly three populated
/// blocks, in the fixed order.
#[test]
fn test_three_kinds_fixed_order() {
    let mut classifications = Classifications::default();
    for kind in ClassificationKind::ALL {
        classifications.set(
            kind,
            Some(ClassificationDetail {
                description: Some(format!("{} description", kind.title())),
                ..Default::default()
            }),
        );
    }
    let record = ClinicalRecord {
        uid: "7890".to_string(),
        gene: Some("TP53".to_string()),
        classifications,
    };
    let validation = ValidationResult::valid(Some("TP53".to_string()), "gene_variant");
    let report = format_report(&hbb_query(), &validation, Some(&record));

    assert!(!report.contains("No data available."));

    let germline = report.find("Germline Classification").unwrap();
    let impact = report.find("Clinical Impact Classification").unwrap();
    let onco = report.find("Oncogenicity Classification").unwrap();
    assert!(germline < impact);
    assert!(impact < onco);
}

/// GRCh37 queries render the build they were validated against.
#[test]
fn test_build_appears_in_failure_line() {
    let query = VariantQuery::new("NM_000518.5:c.92+1G>A", GenomeBuild::GRCh37).unwrap();
    let validation = ValidationResult::invalid("unsupported");
    let report = format_report(&query, &validation, None);
    assert!(report.contains("for GRCh37:"));
}
