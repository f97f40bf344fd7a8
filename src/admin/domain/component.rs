use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Format-specific coordinates of a component (e.g. groupId/artifactId/version)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentIdentifier {
    pub format: String,
    #[serde(default)]
    pub coordinates: BTreeMap<String, String>,
}

impl ComponentIdentifier {
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            coordinates: BTreeMap::new(),
        }
    }

    pub fn with_coordinate(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.coordinates.insert(key.into(), value.into());
        self
    }
}

/// Component value object describing a software artifact
///
/// The policy server identifies a component by any of its hash, its package
/// URL or its format coordinates. Fields that are not set are left out of the
/// serialized request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_identifier: Option<ComponentIdentifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl Component {
    /// Creates a component identified only by its package URL
    pub fn from_package_url(purl: impl Into<String>) -> Self {
        Self {
            package_url: Some(purl.into()),
            ..Self::default()
        }
    }

    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }

    pub fn with_identifier(mut self, identifier: ComponentIdentifier) -> Self {
        self.component_identifier = Some(identifier);
        self
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }
}
