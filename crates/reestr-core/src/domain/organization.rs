//! Organization record as stored in the cached dataset.

use serde::{Deserialize, Serialize};

/// The full, unordered collection of organizations, cached as one unit.
pub type Dataset = Vec<Organization>;

/// One organization from the state registry.
///
/// `name_parts` holds the hierarchical display name from the outermost unit
/// to the innermost one. Every other attribute is independently nullable.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Business identification number.
    pub bin: Option<String>,
    /// Name hierarchy, outermost first.
    pub name_parts: Vec<String>,
    /// Organizational-legal form.
    pub organizational_form: Option<String>,
    /// Ownership classification, level 0.
    pub ownership_level0: Option<String>,
    /// Ownership classification, level 1.
    pub ownership_level1: Option<String>,
    /// Ownership classification, level 2.
    pub ownership_level2: Option<String>,
    /// Economic activity code.
    pub economic_activity_code: Option<String>,
    /// State involvement indicator.
    pub state_involvement: Option<String>,
    /// Registry status.
    pub status: Option<String>,
    /// BIN of the owning organization.
    pub owner_bin: Option<String>,
    /// BIN of the supervising government agency.
    pub government_agency_bin: Option<String>,
}

impl Organization {
    /// Creates an organization with only a name hierarchy set.
    #[must_use]
    pub fn with_name_parts(name_parts: Vec<String>) -> Self {
        Self {
            name_parts,
            ..Self::default()
        }
    }

    /// Attribute values the directory search looks at, in a fixed order.
    ///
    /// Absent values are kept as `None` so callers decide how to treat them.
    #[must_use]
    pub fn searchable_attributes(&self) -> [Option<&str>; 10] {
        [
            self.bin.as_deref(),
            self.organizational_form.as_deref(),
            self.ownership_level0.as_deref(),
            self.ownership_level1.as_deref(),
            self.ownership_level2.as_deref(),
            self.economic_activity_code.as_deref(),
            self.state_involvement.as_deref(),
            self.status.as_deref(),
            self.owner_bin.as_deref(),
            self.government_agency_bin.as_deref(),
        ]
    }
}
