//! Lookup orchestration.
//!
//! Sequences the pipeline: validate, resolve the search term, search ClinVar,
//! fetch the first matching summary, render. This is the only layer that
//! catches lookup errors; every failure path collapses into one of the fixed
//! report shapes, so no partial report ever reaches the user.

use tracing::{error, info};

use crate::clinvar::{ClinVarClient, ClinicalRecord, RecordRef};
use crate::error::LookupError;
use crate::report::{format_failure, format_report};
use crate::validator::VariantValidatorClient;
use crate::variant::{ValidationResult, VariantQuery};

/// Variant validation seam.
pub trait ValidateVariant {
    /// Validate a query, absorbing transport and parse failures into the result.
    fn validate(&self, query: &VariantQuery) -> ValidationResult;
}

/// Clinical database seam.
pub trait ClinicalLookup {
    /// Search for record references matching a term. Zero hits is `Ok(vec![])`.
    fn search(&self, term: &str) -> Result<Vec<RecordRef>, LookupError>;

    /// Fetch full records for a set of references.
    fn fetch_summaries(&self, refs: &[RecordRef]) -> Result<Vec<ClinicalRecord>, LookupError>;
}

impl ValidateVariant for VariantValidatorClient {
    fn validate(&self, query: &VariantQuery) -> ValidationResult {
        VariantValidatorClient::validate(self, query)
    }
}

impl ClinicalLookup for ClinVarClient {
    fn search(&self, term: &str) -> Result<Vec<RecordRef>, LookupError> {
        ClinVarClient::search(self, term)
    }

    fn fetch_summaries(&self, refs: &[RecordRef]) -> Result<Vec<ClinicalRecord>, LookupError> {
        ClinVarClient::fetch_summaries(self, refs)
    }
}

/// Run one variant lookup end to end and return the rendered report.
///
/// An invalid variant never triggers a ClinVar call. When a search returns
/// multiple references only the first is fetched; there is no merge or
/// disambiguation logic.
pub fn run_lookup<V, C>(validator: &V, clinvar: &C, query: &VariantQuery) -> String
where
    V: ValidateVariant,
    C: ClinicalLookup,
{
    info!(variant = %query.hgvs, build = %query.build, "starting lookup");

    let validation = validator.validate(query);
    if !validation.is_valid {
        info!(variant = %query.hgvs, reason = %validation.raw_message, "validation failed");
        return format_report(query, &validation, None);
    }

    let term = validation.gene_symbol.as_deref().unwrap_or(&query.hgvs);
    let record = match lookup_first_record(clinvar, term) {
        Ok(record) => record,
        Err(e) => {
            error!(variant = %query.hgvs, term, error = %e, "ClinVar lookup failed");
            return format_failure(query, &e);
        }
    };

    match &record {
        Some(r) => info!(variant = %query.hgvs, uid = %r.uid, "rendering summary"),
        None => info!(variant = %query.hgvs, term, "no ClinVar results"),
    }
    format_report(query, &validation, record.as_ref())
}

/// Search and fetch the first matching record, if any.
fn lookup_first_record<C: ClinicalLookup>(
    clinvar: &C,
    term: &str,
) -> Result<Option<ClinicalRecord>, LookupError> {
    let refs = clinvar.search(term)?;
    let Some(first) = refs.into_iter().next() else {
        return Ok(None);
    };
    let records = clinvar.fetch_summaries(std::slice::from_ref(&first))?;
    Ok(records.into_iter().next())
}
