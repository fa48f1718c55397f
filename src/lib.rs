// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! clinvar-lookup: HGVS variant validation and ClinVar classification lookup
//!
//! Part of the ferro bioinformatics toolkit.
//!
//! Validates an HGVS variant against the VariantValidator service, resolves
//! its gene symbol, queries NCBI ClinVar for the matching record, and renders
//! the germline, clinical impact, and oncogenicity classifications as a
//! fixed-layout text report.
//!
//! # Example
//!
//! ```
//! use clinvar_lookup::{format_report, GenomeBuild, ValidationResult, VariantQuery};
//!
//! let query = VariantQuery::new("NM_000518.5:c.92+1G>A", GenomeBuild::GRCh38).unwrap();
//! let validation = ValidationResult::valid(Some("HBB".to_string()), "gene_variant");
//!
//! // No ClinVar record yet: the report is the fixed two-line "no results" text.
//! let report = format_report(&query, &validation, None);
//! assert!(report.starts_with("No results found"));
//! ```

pub mod clinvar;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod validator;
pub mod variant;

// Re-export commonly used types
pub use clinvar::{
    ClassificationDetail, ClassificationKind, Classifications, ClinVarClient, ClinicalRecord,
    RecordRef,
};
pub use error::LookupError;
pub use pipeline::{run_lookup, ClinicalLookup, ValidateVariant};
pub use report::{format_failure, format_report};
pub use validator::VariantValidatorClient;
pub use variant::{GenomeBuild, ValidationResult, VariantQuery};

/// Result type alias for clinvar-lookup operations
pub type Result<T> = std::result::Result<T, LookupError>;
