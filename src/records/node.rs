use std::fmt;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Attribute key to the set of values accumulated for it
pub type NodeMetadata = IndexMap<String, IndexSet<AttributeValue>>;

/// Node identity to entity node
pub type NodeMap = IndexMap<String, EntityNode>;

/// Unique process name to process node
pub type ProcessMap = IndexMap<String, ProcessNode>;

/// Build the identity key of an entity: `type-name`.
///
/// Qualifying by type keeps a `Source Name` and a `Sample Name` that share a
/// string apart.
pub fn node_identity(node_type: &str, name: &str) -> String {
    format!("{node_type}-{name}")
}

/// One named component of a qualified attribute value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeField {
    /// Identifier-safe column name (e.g. `Term_Source_REF`)
    pub name: String,
    /// Cell value
    pub value: String,
}

/// Value recorded for one attribute of an entity node
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Bare cell value of a column without qualifiers
    Text(String),
    /// Representative value followed by its qualifier values
    Qualified(Vec<AttributeField>),
}

impl AttributeValue {
    /// Cell value of a bare value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(text) => Some(text),
            AttributeValue::Qualified(_) => None,
        }
    }

    /// Representative cell value, ignoring qualifiers
    pub fn primary(&self) -> &str {
        match self {
            AttributeValue::Text(text) => text,
            AttributeValue::Qualified(fields) => {
                fields.first().map(|f| f.value.as_str()).unwrap_or("")
            }
        }
    }

    /// Value of a named field of a qualified value
    pub fn field(&self, name: &str) -> Option<&str> {
        match self {
            AttributeValue::Text(_) => None,
            AttributeValue::Qualified(fields) => fields
                .iter()
                .find(|f| f.name == name)
                .map(|f| f.value.as_str()),
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Text(text) => write!(f, "{text}"),
            AttributeValue::Qualified(fields) => {
                write!(f, "(")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}={}", field.name, field.value)?;
                }
                write!(f, ")")
            }
        }
    }
}

/// A material or data entity named in a study or assay file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityNode {
    /// Cell value naming the entity
    pub name: String,
    /// Identity column the entity was found under (e.g. `Sample Name`)
    #[serde(rename = "type")]
    pub node_type: String,
    /// Attribute values collected from the row the entity was first seen on
    pub metadata: NodeMetadata,
}

impl EntityNode {
    /// Create a node with no metadata
    pub fn new(name: impl Into<String>, node_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            node_type: node_type.into(),
            metadata: NodeMetadata::new(),
        }
    }

    /// Identity key of this node
    pub fn identity(&self) -> String {
        node_identity(&self.node_type, &self.name)
    }

    /// Add a value to the set kept under `key`; returns false if already present
    pub fn add_value(&mut self, key: impl Into<String>, value: AttributeValue) -> bool {
        self.metadata.entry(key.into()).or_default().insert(value)
    }

    /// Values recorded under `key`
    pub fn values(&self, key: &str) -> impl Iterator<Item = &AttributeValue> {
        self.metadata.get(key).into_iter().flatten()
    }
}

/// One application of a protocol, linking input entities to output entities
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessNode {
    /// Unique name: protocol cell value followed by a file-scoped number
    pub name: String,
    /// Header of the processing column (e.g. `Protocol REF`)
    #[serde(rename = "type")]
    pub process_type: String,
    /// Identities of consumed entities
    pub inputs: IndexSet<String>,
    /// Identities of produced entities
    pub outputs: IndexSet<String>,
}

impl ProcessNode {
    /// Create a process node with no inputs or outputs
    pub fn new(name: impl Into<String>, process_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            process_type: process_type.into(),
            inputs: IndexSet::new(),
            outputs: IndexSet::new(),
        }
    }

    /// Record an input identity; returns false if it was already linked
    pub fn add_input(&mut self, identity: impl Into<String>) -> bool {
        self.inputs.insert(identity.into())
    }

    /// Record an output identity; returns false if it was already linked
    pub fn add_output(&mut self, identity: impl Into<String>) -> bool {
        self.outputs.insert(identity.into())
    }
}
