use serde::{Deserialize, Serialize};

/// One fully structured CSAF advisory record (an erratum).
///
/// Created per successful detail fetch and persisted verbatim into the
/// year collection; severity and CVSS data are stored as-is, without
/// interpretation. Unknown upstream fields are ignored and missing
/// fields default, since CSAF documents vary in completeness.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Errata {
    #[serde(default)]
    pub document: Document,
    #[serde(default)]
    pub product_tree: ProductTree,
    #[serde(default)]
    pub vulnerabilities: Vec<Vulnerability>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub aggregate_severity: AggregateSeverity,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub csaf_version: String,
    #[serde(default)]
    pub distribution: Distribution,
    #[serde(default)]
    pub lang: String,
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub publisher: Publisher,
    #[serde(default)]
    pub references: Vec<DocumentReference>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tracking: Tracking,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AggregateSeverity {
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Distribution {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub tlp: Tlp,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tlp {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Note {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Publisher {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub contact_details: String,
    #[serde(default)]
    pub issuing_authority: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub namespace: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentReference {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tracking {
    #[serde(default)]
    pub current_release_date: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub initial_release_date: String,
    #[serde(default)]
    pub revision_history: Vec<RevisionHistory>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RevisionHistory {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductTree {
    #[serde(default)]
    pub branches: Vec<Branch>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

/// Recursive product-tree branch; leaves carry a concrete product.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Branch {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub branches: Vec<Branch>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub product_id: String,
    #[serde(default)]
    pub product_identification_helper: ProductIdentificationHelper,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductIdentificationHelper {
    #[serde(default)]
    pub cpe: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Relationship {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub full_product_name: FullProductName,
    #[serde(default)]
    pub product_reference: String,
    #[serde(default)]
    pub relates_to_product_reference: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FullProductName {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub product_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vulnerability {
    #[serde(default)]
    pub cve: String,
    #[serde(default)]
    pub ids: Vec<VulnerabilityId>,
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub product_status: ProductStatus,
    #[serde(default)]
    pub references: Vec<DocumentReference>,
    #[serde(default)]
    pub remediations: Vec<Remediation>,
    #[serde(default)]
    pub scores: Vec<Score>,
    #[serde(default)]
    pub threats: Vec<Threat>,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VulnerabilityId {
    #[serde(default)]
    pub system_name: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductStatus {
    #[serde(default)]
    pub fixed: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Remediation {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub product_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Score {
    #[serde(default)]
    pub cvss_v3: CvssV3,
}

/// CVSS v3 score block, stored passthrough. Field names follow the
/// CSAF wire format, which uses camelCase for the CVSS metrics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvssV3 {
    #[serde(default)]
    pub attack_complexity: String,
    #[serde(default)]
    pub attack_vector: String,
    #[serde(default)]
    pub availability_impact: String,
    #[serde(default)]
    pub base_score: f64,
    #[serde(default)]
    pub base_severity: String,
    #[serde(default)]
    pub confidentiality_impact: String,
    #[serde(default)]
    pub integrity_impact: String,
    #[serde(default)]
    pub privileges_required: String,
    #[serde(default)]
    pub scope: String,
    #[serde(default)]
    pub user_interaction: String,
    #[serde(default)]
    pub vector_string: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub products: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Threat {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub details: String,
}
