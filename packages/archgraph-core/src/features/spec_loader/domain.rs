use serde::{Deserialize, Serialize};

/// Architecture attributes attached to one component name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentAttributes {
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(rename = "contextGroup", default)]
    pub context_group: Option<String>,
    #[serde(rename = "abstractionLayer", default, skip_serializing_if = "Option::is_none")]
    pub abstraction_layer: Option<String>,
    #[serde(rename = "hardwareGroup", default, skip_serializing_if = "Option::is_none")]
    pub hardware_group: Option<String>,
}

/// One flattened specification entry.
///
/// `name` doubles as a match pattern (`App&CD;Pie`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRecord {
    pub name: String,
    #[serde(flatten)]
    pub attributes: ComponentAttributes,
}

impl ComponentRecord {
    pub fn new(name: impl Into<String>, attributes: ComponentAttributes) -> Self {
        Self {
            name: name.into(),
            attributes,
        }
    }

    pub fn category(&self, category: Category) -> Option<&str> {
        let value = match category {
            Category::Domain => &self.attributes.domain,
            Category::ContextGroup => &self.attributes.context_group,
            Category::AbstractionLayer => &self.attributes.abstraction_layer,
        };
        value.as_deref()
    }
}

/// Grouping axis of the architecture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Domain,
    ContextGroup,
    AbstractionLayer,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::ContextGroup,
        Category::Domain,
        Category::AbstractionLayer,
    ];

    /// Attribute key in the JSON schema
    pub fn json_key(self) -> &'static str {
        match self {
            Category::Domain => "domain",
            Category::ContextGroup => "contextGroup",
            Category::AbstractionLayer => "abstractionLayer",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.json_key())
    }
}
