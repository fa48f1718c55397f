//! ClinVar data types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Reference to a ClinVar record, as returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordRef {
    /// ClinVar UID.
    pub uid: String,
}

impl RecordRef {
    /// Create a reference from a UID.
    pub fn new(uid: impl Into<String>) -> Self {
        Self { uid: uid.into() }
    }
}

/// The three classification categories ClinVar tracks per variant.
///
/// The order of [`ClassificationKind::ALL`] is the order sections appear in
/// the rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassificationKind {
    /// Germline pathogenicity.
    Germline,
    /// Clinical impact (somatic, therapeutic relevance).
    ClinicalImpact,
    /// Oncogenicity.
    Oncogenicity,
}

impl ClassificationKind {
    /// All kinds in report order.
    pub const ALL: [ClassificationKind; 3] = [
        ClassificationKind::Germline,
        ClassificationKind::ClinicalImpact,
        ClassificationKind::Oncogenicity,
    ];

    /// Key of this kind's node in the eSummary payload.
    pub fn payload_key(&self) -> &'static str {
        match self {
            ClassificationKind::Germline => "germline_classification",
            ClassificationKind::ClinicalImpact => "clinical_impact_classification",
            ClassificationKind::Oncogenicity => "oncogenicity_classification",
        }
    }

    /// Section title used in the report.
    pub fn title(&self) -> &'static str {
        match self {
            ClassificationKind::Germline => "Germline Classification",
            ClassificationKind::ClinicalImpact => "Clinical Impact Classification",
            ClassificationKind::Oncogenicity => "Oncogenicity Classification",
        }
    }
}

impl std::fmt::Display for ClassificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// One classification section of a ClinVar record.
///
/// Every field is independently optional: missing, null, and empty-string
/// source values all normalize to `None` at extraction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ClassificationDetail {
    /// Classification description, e.g. "Pathogenic".
    pub description: Option<String>,
    /// Date the classification was last evaluated.
    pub last_evaluated: Option<NaiveDate>,
    /// Review status, e.g. "criteria provided, multiple submitters, no conflicts".
    pub review_status: Option<String>,
    /// FDA-recognized database designation.
    pub fda_recognized_database: Option<String>,
    /// Associated trait names, in source order, duplicates preserved.
    pub trait_set: Vec<String>,
}

/// The classification sections of a record, one slot per kind.
///
/// All three kinds are always answerable; a kind the source never assessed
/// holds `None`. Callers never probe a mapping for key absence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Classifications {
    /// Germline section, if assessed.
    pub germline: Option<ClassificationDetail>,
    /// Clinical impact section, if assessed.
    pub clinical_impact: Option<ClassificationDetail>,
    /// Oncogenicity section, if assessed.
    pub oncogenicity: Option<ClassificationDetail>,
}

impl Classifications {
    /// Get the section for a kind.
    pub fn get(&self, kind: ClassificationKind) -> Option<&ClassificationDetail> {
        match kind {
            ClassificationKind::Germline => self.germline.as_ref(),
            ClassificationKind::ClinicalImpact => self.clinical_impact.as_ref(),
            ClassificationKind::Oncogenicity => self.oncogenicity.as_ref(),
        }
    }

    /// Set the section for a kind.
    pub fn set(&mut self, kind: ClassificationKind, detail: Option<ClassificationDetail>) {
        match kind {
            ClassificationKind::Germline => self.germline = detail,
            ClassificationKind::ClinicalImpact => self.clinical_impact = detail,
            ClassificationKind::Oncogenicity => self.oncogenicity = detail,
        }
    }

    /// Number of kinds with an assessed section.
    pub fn assessed_count(&self) -> usize {
        ClassificationKind::ALL
            .iter()
            .filter(|k| self.get(**k).is_some())
            .count()
    }
}

/// A ClinVar variant record as consumed by the report layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ClinicalRecord {
    /// ClinVar UID.
    pub uid: String,
    /// Gene symbol, when the record carries one.
    pub gene: Option<String>,
    /// Classification sections.
    pub classifications: Classifications,
}

impl ClinicalRecord {
    /// Create a record with no classification data.
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            ..Default::default()
        }
    }
}
