//! JSON description of the types and retained fields of a build.
//!
//! ```json
//! {
//!   "types": [
//!     { "name": "com.example.BaseScreen", "superclass": "android.app.Activity" },
//!     { "name": "com.example.MainScreen", "superclass": "com.example.BaseScreen" }
//!   ],
//!   "fields": [
//!     { "host": "com.example.MainScreen", "name": "counter", "type": "int", "access": "public" }
//!   ]
//! }
//! ```

use std::sync::Arc;

use indexmap::IndexMap;
use memento_codegen::{AccessLevel, AnnotatedField, ClassifyError, FieldRef, HostType, TypeTable};
use serde::{Deserialize, Deserializer, de};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub types: Vec<TypeEntry>,
    #[serde(default)]
    pub fields: Vec<FieldEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeEntry {
    pub name: String,
    /// Missing means the type extends `java.lang.Object`.
    #[serde(default)]
    pub superclass: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldEntry {
    pub host: String,
    pub name: String,
    #[serde(rename = "type")]
    pub declared_type: String,
    #[serde(default, deserialize_with = "deserialize_access")]
    pub access: AccessLevel,
}

/// Reads `public`, `protected`, `package` (or `package-private`) and `private`.
fn deserialize_access<'de, D>(deserializer: D) -> Result<AccessLevel, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    name.parse::<AccessLevel>().map_err(de::Error::custom)
}

impl Manifest {
    pub fn parse(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn type_table(&self) -> TypeTable {
        let mut table = TypeTable::new();
        for entry in &self.types {
            table.declare(entry.name.as_str(), entry.superclass.as_deref());
        }
        table
    }

    /// Resolves every field's host and returns the fields in manifest order.
    pub fn annotated_fields(&self) -> Result<Vec<AnnotatedField>, ClassifyError> {
        let table = self.type_table();
        let mut hosts: IndexMap<&str, Arc<HostType>> = IndexMap::new();
        let mut fields = Vec::with_capacity(self.fields.len());
        for entry in &self.fields {
            let host = match hosts.get(entry.host.as_str()) {
                Some(host) => host.clone(),
                None => {
                    let host = Arc::new(table.host_type(&entry.host)?);
                    hosts.insert(entry.host.as_str(), host.clone());
                    host
                }
            };
            fields.push(AnnotatedField::new(
                host,
                FieldRef::new(
                    entry.name.as_str(),
                    entry.declared_type.as_str(),
                    entry.access,
                ),
            ));
        }
        Ok(fields)
    }
}
