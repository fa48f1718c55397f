//! Variant query types.
//!
//! A [`VariantQuery`] pairs the user's HGVS expression with the genome build
//! it should be validated against. Queries are immutable once built.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Genome assembly build accepted by VariantValidator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GenomeBuild {
    /// GRCh38 / hg38
    #[default]
    GRCh38,
    /// GRCh37 / hg19
    GRCh37,
}

impl std::fmt::Display for GenomeBuild {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenomeBuild::GRCh38 => write!(f, "GRCh38"),
            GenomeBuild::GRCh37 => write!(f, "GRCh37"),
        }
    }
}

impl FromStr for GenomeBuild {
    type Err = String;

    /// Parse a build name case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use clinvar_lookup::GenomeBuild;
    ///
    /// assert_eq!("grch37".parse::<GenomeBuild>().unwrap(), GenomeBuild::GRCh37);
    /// assert_eq!("GRCH38".parse::<GenomeBuild>().unwrap(), GenomeBuild::GRCh38);
    /// assert!("hg19".parse::<GenomeBuild>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "GRCH38" => Ok(GenomeBuild::GRCh38),
            "GRCH37" => Ok(GenomeBuild::GRCh37),
            other => Err(format!(
                "Genome build must be GRCh38 or GRCh37, got '{}'",
                other
            )),
        }
    }
}

/// A single variant lookup request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantQuery {
    /// HGVS expression, e.g. `NM_000518.5:c.92+1G>A`.
    pub hgvs: String,
    /// Genome build to validate against.
    pub build: GenomeBuild,
}

impl VariantQuery {
    /// Build a query from raw user input.
    ///
    /// The expression is trimmed; an empty expression is rejected before any
    /// network activity can happen.
    pub fn new(hgvs: impl Into<String>, build: GenomeBuild) -> Result<Self, String> {
        let hgvs = hgvs.into().trim().to_string();
        if hgvs.is_empty() {
            return Err("No HGVS variant provided".to_string());
        }
        Ok(Self { hgvs, build })
    }

    /// True when the transcript accession uses Ensembl nomenclature.
    pub fn has_ensembl_prefix(&self) -> bool {
        self.hgvs.starts_with("ENST") || self.hgvs.starts_with("ENSG")
    }
}

/// Outcome of validating a query against VariantValidator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the validator accepted the variant.
    pub is_valid: bool,
    /// Resolved gene symbol. Never `Some("")`; absent for intronic or
    /// unrecognized variants and for failed validations.
    pub gene_symbol: Option<String>,
    /// Validator message: the rejection reason verbatim on failure, a short
    /// status note on success.
    pub raw_message: String,
}

impl ValidationResult {
    /// A successful validation with an optional gene symbol.
    pub fn valid(gene_symbol: Option<String>, message: impl Into<String>) -> Self {
        // Empty gene symbols collapse to None at construction so downstream
        // code only ever checks one absence encoding.
        let gene_symbol = gene_symbol.filter(|g| !g.trim().is_empty());
        Self {
            is_valid: true,
            gene_symbol,
            raw_message: message.into(),
        }
    }

    /// A failed validation carrying the reason.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            gene_symbol: None,
            raw_message: reason.into(),
        }
    }
}
