//! ClinVar query and classification extraction.
//!
//! This module wraps the two NCBI E-utilities endpoints ClinVar exposes for
//! JSON access (eSearch, eSummary) and normalizes the heterogeneous record
//! payloads into [`ClinicalRecord`] values the report layer can render.
//!
//! # Examples
//!
//! ```
//! use clinvar_lookup::clinvar::{extract_classifications, ClassificationKind};
//! use serde_json::json;
//!
//! let payload = json!({
//!     "germline_classification": {
//!         "description": "Pathogenic",
//!         "review_status": "criteria provided, multiple submitters, no conflicts"
//!     }
//! });
//! let classifications = extract_classifications(&payload);
//! assert!(classifications.get(ClassificationKind::Germline).is_some());
//! assert!(classifications.get(ClassificationKind::Oncogenicity).is_none());
//! ```
//!
//! # References
//!
//! - [E-utilities](https://www.ncbi.nlm.nih.gov/books/NBK25501/)
//! - [ClinVar API](https://www.ncbi.nlm.nih.gov/clinvar/docs/maintenance_use/)

mod client;
mod extract;
mod types;

pub use client::{ClinVarClient, EUTILS_BASE_URL};
pub use extract::{extract_classification, extract_classifications, extract_record_gene};
pub use types::{
    ClassificationDetail, ClassificationKind, Classifications, ClinicalRecord, RecordRef,
};
