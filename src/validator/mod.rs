//! HGVS variant validation via the VariantValidator service.
//!
//! Validation is the gatekeeper of the pipeline: a variant that fails here
//! never reaches ClinVar. Besides the accept/reject verdict the validator is
//! also the source of the gene symbol used as the ClinVar search term.
//!
//! # References
//!
//! - [VariantValidator REST API](https://rest.variantvalidator.org/)

mod client;
mod response;

pub use client::{VariantValidatorClient, VALIDATOR_BASE_URL};
pub use response::{extract_gene_symbol, payload_accepted, rejection_reason};
