//! ClinVar API client.
//!
//! Thin wrapper over the NCBI E-utilities JSON endpoints: `esearch.fcgi` to
//! resolve a free-text term to record UIDs and `esummary.fcgi` to fetch the
//! full record payloads. Zero search hits are a normal outcome and come back
//! as an empty `Vec`; only transport and malformed-body failures are errors.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::extract::{extract_classifications, extract_record_gene};
use super::types::{ClinicalRecord, RecordRef};
use crate::error::LookupError;

/// Default E-utilities base URL.
pub const EUTILS_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

/// Request timeout for both endpoints.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Upper bound on search hits requested per query.
const SEARCH_RETMAX: u32 = 20;

/// eSearch response envelope.
#[derive(Debug, Deserialize)]
struct EsearchResponse {
    esearchresult: EsearchResult,
}

#[derive(Debug, Deserialize)]
struct EsearchResult {
    #[serde(default)]
    count: String,
    #[serde(default)]
    idlist: Vec<String>,
}

/// HTTP client for the ClinVar database.
pub struct ClinVarClient {
    client: Client,
    base_url: String,
}

impl ClinVarClient {
    /// Create a client against the public NCBI E-utilities service.
    pub fn new() -> Result<Self, LookupError> {
        Self::with_base_url(EUTILS_BASE_URL)
    }

    /// Create a client against a specific base URL (used by tests).
    pub fn with_base_url(base_url: &str) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| LookupError::Io {
                msg: format!("Failed to create HTTP client: {}", e),
            })?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Search ClinVar for records matching a term.
    ///
    /// The term is the gene symbol when one is known, otherwise the raw HGVS
    /// expression. Zero matches yield `Ok(vec![])`.
    pub fn search(&self, term: &str) -> Result<Vec<RecordRef>, LookupError> {
        let url = format!("{}/esearch.fcgi", self.base_url);
        info!(term, "searching ClinVar");

        let retmax = SEARCH_RETMAX.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("db", "clinvar"),
                ("term", term),
                ("retmode", "json"),
                ("retmax", retmax.as_str()),
            ])
            .send()
            .map_err(|e| {
                warn!(term, error = %e, "ClinVar search transport failure");
                LookupError::transport(e)
            })?
            .error_for_status()
            .map_err(LookupError::transport)?;

        let body: EsearchResponse = response.json().map_err(|e| {
            warn!(term, error = %e, "ClinVar search returned unexpected body");
            LookupError::unexpected(format!("eSearch body: {}", e))
        })?;

        let refs: Vec<RecordRef> = body
            .esearchresult
            .idlist
            .into_iter()
            .map(RecordRef::new)
            .collect();
        info!(term, count = %body.esearchresult.count, hits = refs.len(), "ClinVar search complete");
        Ok(refs)
    }

    /// Fetch full summary records for a set of references in one batched call.
    ///
    /// An empty input short-circuits to an empty result without touching the
    /// network.
    pub fn fetch_summaries(&self, refs: &[RecordRef]) -> Result<Vec<ClinicalRecord>, LookupError> {
        if refs.is_empty() {
            return Ok(Vec::new());
        }

        let ids = refs
            .iter()
            .map(|r| r.uid.as_str())
            .collect::<Vec<_>>()
            .join(",");
        let url = format!("{}/esummary.fcgi", self.base_url);
        info!(ids = %ids, "fetching ClinVar summaries");

        let response = self
            .client
            .get(&url)
            .query(&[("db", "clinvar"), ("id", ids.as_str()), ("retmode", "json")])
            .send()
            .map_err(|e| {
                warn!(ids = %ids, error = %e, "ClinVar summary transport failure");
                LookupError::transport(e)
            })?
            .error_for_status()
            .map_err(LookupError::transport)?;

        let body: Value = response
            .json()
            .map_err(|e| LookupError::unexpected(format!("eSummary body: {}", e)))?;

        let result = body
            .get("result")
            .ok_or_else(|| LookupError::unexpected("eSummary body missing 'result'"))?;

        let mut records = Vec::with_capacity(refs.len());
        for r in refs {
            match result.get(&r.uid) {
                Some(payload) => records.push(parse_record(&r.uid, payload)),
                // The service occasionally omits an id it returned from
                // search; skip rather than fail the whole fetch.
                None => warn!(uid = %r.uid, "eSummary result missing requested uid"),
            }
        }
        debug!(fetched = records.len(), "ClinVar summaries parsed");
        Ok(records)
    }
}

/// Build a [`ClinicalRecord`] from one eSummary record payload.
///
/// Classification parsing is delegated to the extractor, which degrades any
/// field-level anomaly to `None` rather than failing the record.
fn parse_record(uid: &str, payload: &Value) -> ClinicalRecord {
    ClinicalRecord {
        uid: uid.to_string(),
        gene: extract_record_gene(payload),
        classifications: extract_classifications(payload),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clinvar::types::ClassificationKind;
    use serde_json::json;

    #[test]
    fn test_parse_record_delegates_to_extractor() {
        let payload = json!({
            "genes": [{"symbol": "HBB"}],
            "germline_classification": {"description": "Pathogenic"}
        });
        let record = parse_record("15436", &payload);
        assert_eq!(record.uid, "15436");
        assert_eq!(record.gene.as_deref(), Some("HBB"));
        assert!(record
            .classifications
            .get(ClassificationKind::Germline)
            .is_some());
        assert!(record
            .classifications
            .get(ClassificationKind::Oncogenicity)
            .is_none());
    }

    #[test]
    fn test_fetch_summaries_empty_input_is_offline() {
        // Unroutable base URL: any network attempt would error.
        let client = ClinVarClient::with_base_url("http://127.0.0.1:1").unwrap();
        let records = client.fetch_summaries(&[]).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_search_transport_error_is_distinct_from_no_results() {
        let client = ClinVarClient::with_base_url("http://127.0.0.1:1").unwrap();
        let err = client.search("HBB").unwrap_err();
        assert!(matches!(err, LookupError::Transport { .. }));
    }
}
