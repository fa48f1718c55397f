//! VariantValidator API client.
//!
//! Validation always tries the RefSeq endpoint first; the Ensembl endpoint is
//! tried only when RefSeq explicitly rejects the variant or the expression
//! carries an Ensembl transcript prefix. All failures are absorbed into the
//! returned [`ValidationResult`] so the pipeline sees exactly one shape.

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;
use tracing::{info, warn};

use super::response::{extract_gene_symbol, payload_accepted, rejection_reason};
use crate::error::LookupError;
use crate::variant::{ValidationResult, VariantQuery};

/// Default VariantValidator base URL.
pub const VALIDATOR_BASE_URL: &str = "https://rest.variantvalidator.org";

/// Request timeout per endpoint attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// The two nomenclature-specific endpoint variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Endpoint {
    RefSeq,
    Ensembl,
}

impl Endpoint {
    fn path(&self) -> &'static str {
        match self {
            Endpoint::RefSeq => "VariantValidator/variantvalidator",
            Endpoint::Ensembl => "VariantValidator/variantvalidator_ensembl",
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Endpoint::RefSeq => "RefSeq",
            Endpoint::Ensembl => "Ensembl",
        }
    }
}

/// Outcome of one endpoint attempt.
enum Attempt {
    Accepted(Value),
    Rejected(Value),
    Failed(LookupError),
}

/// HTTP client for the VariantValidator service.
pub struct VariantValidatorClient {
    client: Client,
    base_url: String,
}

impl VariantValidatorClient {
    /// Create a client against the public VariantValidator service.
    pub fn new() -> Result<Self, LookupError> {
        Self::with_base_url(VALIDATOR_BASE_URL)
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

    /// Validate a variant, resolving its gene symbol when possible.
    ///
    /// Never returns an error: transport failures, malformed bodies, and
    /// explicit rejections all become an invalid [`ValidationResult`] with a
    /// descriptive message.
    pub fn validate(&self, query: &VariantQuery) -> ValidationResult {
        match self.attempt(Endpoint::RefSeq, query) {
            Attempt::Accepted(payload) => accepted_result(&payload),
            Attempt::Rejected(payload) => {
                // Explicit rejection: give the Ensembl endpoint one chance.
                match self.attempt(Endpoint::Ensembl, query) {
                    Attempt::Accepted(ensembl) => accepted_result(&ensembl),
                    Attempt::Rejected(ensembl) => {
                        // Prefer the RefSeq reason unless only Ensembl said
                        // anything concrete.
                        let reason = rejection_reason(&payload);
                        let reason = if reason.starts_with("validator returned flag") {
                            rejection_reason(&ensembl)
                        } else {
                            reason
                        };
                        ValidationResult::invalid(reason)
                    }
                    Attempt::Failed(e) => ValidationResult::invalid(e.to_string()),
                }
            }
            Attempt::Failed(e) => {
                // Transport or body failure on RefSeq. An Ensembl-prefixed
                // expression may still validate against its own endpoint.
                if query.has_ensembl_prefix() {
                    match self.attempt(Endpoint::Ensembl, query) {
                        Attempt::Accepted(payload) => accepted_result(&payload),
                        Attempt::Rejected(payload) => {
                            ValidationResult::invalid(rejection_reason(&payload))
                        }
                        Attempt::Failed(e) => ValidationResult::invalid(e.to_string()),
                    }
                } else {
                    ValidationResult::invalid(e.to_string())
                }
            }
        }
    }

    /// Issue one GET against an endpoint and classify the outcome.
    fn attempt(&self, endpoint: Endpoint, query: &VariantQuery) -> Attempt {
        let url = format!(
            "{}/{}/{}/{}/all?content-type=application%2Fjson",
            self.base_url,
            endpoint.path(),
            query.build,
            urlencoding::encode(&query.hgvs),
        );
        info!(endpoint = endpoint.name(), variant = %query.hgvs, build = %query.build, "validating variant");

        let response = match self.client.get(&url).send() {
            Ok(r) => r,
            Err(e) => {
                warn!(endpoint = endpoint.name(), error = %e, "validator transport failure");
                return Attempt::Failed(LookupError::transport(e));
            }
        };
        let response = match response.error_for_status() {
            Ok(r) => r,
            Err(e) => {
                warn!(endpoint = endpoint.name(), error = %e, "validator HTTP error status");
                return Attempt::Failed(LookupError::transport(e));
            }
        };
        let payload: Value = match response.json() {
            Ok(v) => v,
            Err(e) => {
                warn!(endpoint = endpoint.name(), error = %e, "validator body was not JSON");
                return Attempt::Failed(LookupError::unexpected(format!(
                    "validator body: {}",
                    e
                )));
            }
        };

        if payload_accepted(&payload) {
            info!(endpoint = endpoint.name(), variant = %query.hgvs, "variant accepted");
            Attempt::Accepted(payload)
        } else {
            info!(endpoint = endpoint.name(), variant = %query.hgvs, "variant rejected");
            Attempt::Rejected(payload)
        }
    }
}

fn accepted_result(payload: &Value) -> ValidationResult {
    let flag = payload
        .get("flag")
        .and_then(Value::as_str)
        .unwrap_or("accepted");
    ValidationResult::valid(extract_gene_symbol(payload), flag.to_string())
}
