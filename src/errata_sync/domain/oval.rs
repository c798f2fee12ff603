use crate::shared::error::SyncError;
use quick_xml::events::Event;
use serde::Deserialize;

const ROOT_ELEMENT: &str = "oval_definitions";

/// Root of the aggregate OVAL definitions document.
///
/// One document enumerates every known vulnerability definition for a
/// distribution release. Only the issue dates and primary reference IDs
/// are consumed downstream; the rest of the structure (including the
/// recursive criteria tree) is parsed for fidelity with the source schema.
#[derive(Debug, Deserialize)]
pub struct OvalDefinitions {
    #[serde(default)]
    pub generator: Generator,
    pub definitions: DefinitionList,
}

#[derive(Debug, Default, Deserialize)]
pub struct Generator {
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub product_version: String,
    #[serde(default)]
    pub schema_version: String,
    #[serde(default)]
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
pub struct DefinitionList {
    #[serde(rename = "definition", default)]
    pub definitions: Vec<Definition>,
}

/// One vulnerability entry from the aggregate document.
#[derive(Debug, Deserialize)]
pub struct Definition {
    #[serde(rename = "@class", default)]
    pub class: String,
    #[serde(rename = "@id", default)]
    pub id: String,
    #[serde(rename = "@version", default)]
    pub version: String,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub criteria: Criteria,
}

#[derive(Debug, Default, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub affected: Affected,
    /// Primary advisory reference; its ref_id is what locates the CSAF record.
    #[serde(default)]
    pub reference: Reference,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub advisory: Advisory,
}

#[derive(Debug, Default, Deserialize)]
pub struct Affected {
    #[serde(rename = "@family", default)]
    pub family: String,
    #[serde(default)]
    pub platform: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct Reference {
    #[serde(rename = "@ref_id", default)]
    pub ref_id: String,
    #[serde(rename = "@ref_url", default)]
    pub ref_url: String,
    #[serde(rename = "@source", default)]
    pub source: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct Advisory {
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub rights: String,
    #[serde(default)]
    pub issued: Issued,
    #[serde(default)]
    pub updated: Updated,
    #[serde(rename = "cve", default)]
    pub cves: Vec<Cve>,
    #[serde(default)]
    pub affected_cpe_list: AffectedCpeList,
}

/// Issue date of the advisory, expected as `YYYY-MM-DD`.
/// Definitions without a parseable date are dropped from the year index.
#[derive(Debug, Default, Deserialize)]
pub struct Issued {
    #[serde(rename = "@date", default)]
    pub date: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct Updated {
    #[serde(rename = "@date", default)]
    pub date: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct Cve {
    #[serde(rename = "@cvss3", default)]
    pub cvss3: String,
    #[serde(rename = "@cwe", default)]
    pub cwe: String,
    #[serde(rename = "@href", default)]
    pub href: String,
    #[serde(rename = "@impact", default)]
    pub impact: String,
    #[serde(rename = "@public", default)]
    pub public: String,
    #[serde(rename = "$text", default)]
    pub id: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct AffectedCpeList {
    #[serde(rename = "cpe", default)]
    pub cpes: Vec<String>,
}

/// Recursive platform-applicability tree. Unbounded depth.
#[derive(Debug, Default, Deserialize)]
pub struct Criteria {
    #[serde(rename = "@operator", default)]
    pub operator: String,
    #[serde(rename = "criterion", default)]
    pub criterions: Vec<Criterion>,
    #[serde(rename = "criteria", default)]
    pub criterias: Vec<Criteria>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Criterion {
    #[serde(rename = "@comment", default)]
    pub comment: String,
    #[serde(rename = "@test_ref", default)]
    pub test_ref: String,
}

/// Parses the raw bytes of the aggregate OVAL document.
///
/// A document with zero definitions is valid and yields an empty list.
/// Byte streams that are not well-formed XML, whose root element is not
/// `oval_definitions`, or whose root carries no `definitions` block,
/// fail with [`SyncError::MalformedDocument`].
pub fn parse(raw: &[u8]) -> Result<OvalDefinitions, SyncError> {
    validate_root_element(raw)?;
    quick_xml::de::from_reader(raw).map_err(|e| SyncError::MalformedDocument {
        details: e.to_string(),
    })
}

// The serde deserializer does not check the root element's name, so a
// well-formed document of a different vocabulary would otherwise slip
// through whenever its shape happens to satisfy the struct fields.
fn validate_root_element(raw: &[u8]) -> Result<(), SyncError> {
    let mut reader = quick_xml::Reader::from_reader(raw);
    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) | Ok(Event::Empty(start)) => {
                let name = start.local_name();
                if name.as_ref() == ROOT_ELEMENT.as_bytes() {
                    return Ok(());
                }
                return Err(SyncError::MalformedDocument {
                    details: format!(
                        "unexpected root element `{}`, expected `{}`",
                        String::from_utf8_lossy(name.as_ref()),
                        ROOT_ELEMENT
                    ),
                });
            }
            Ok(Event::Eof) => {
                return Err(SyncError::MalformedDocument {
                    details: "document has no root element".to_string(),
                });
            }
            Ok(_) => continue,
            Err(e) => {
                return Err(SyncError::MalformedDocument {
                    details: e.to_string(),
                });
            }
        }
    }
}
