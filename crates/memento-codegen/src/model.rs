//! Input snapshots handed over by the host metadata source.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Declared visibility of an annotated field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AccessLevel {
    Public,
    Protected,
    /// No modifier; visible within the package.
    #[default]
    Package,
    Private,
}

impl AccessLevel {
    /// Whether a class in the same package, but another compilation unit, can
    /// read and assign the field by simple name.
    pub fn is_reachable_from_package(self) -> bool {
        !matches!(self, AccessLevel::Private)
    }
}

/// Error returned when an access level name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown access level `{0}` (expected public, protected, package or private)")]
pub struct ParseAccessLevelError(pub String);

impl FromStr for AccessLevel {
    type Err = ParseAccessLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(AccessLevel::Public),
            "protected" => Ok(AccessLevel::Protected),
            "package" | "package-private" => Ok(AccessLevel::Package),
            "private" => Ok(AccessLevel::Private),
            other => Err(ParseAccessLevelError(other.to_string())),
        }
    }
}

/// One field marked for retention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRef {
    /// Simple name, unique within the host type.
    pub name: String,
    /// Declared type as displayable text. Copied into the output verbatim.
    pub declared_type: String,
    pub access: AccessLevel,
}

impl FieldRef {
    pub fn new(
        name: impl Into<String>,
        declared_type: impl Into<String>,
        access: AccessLevel,
    ) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            access,
        }
    }
}

/// The activity class whose fields are retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostType {
    pub simple_name: String,
    pub qualified_name: String,
    /// Empty for the unnamed package.
    pub package_name: String,
    /// Ancestors from the direct superclass upwards, ending at a framework
    /// activity type or at [`ROOT_TYPE`](crate::names::ROOT_TYPE).
    pub superclass_chain: Vec<String>,
}

impl HostType {
    /// Builds a top-level host type, deriving the package and simple name from
    /// the last `.` of `qualified_name`.
    ///
    /// Nested classes need their fields set explicitly, since `Outer.Inner`
    /// cannot be told apart from a package by the name alone.
    pub fn new<S: Into<String>>(
        qualified_name: impl Into<String>,
        superclass_chain: impl IntoIterator<Item = S>,
    ) -> Self {
        let qualified_name = qualified_name.into();
        let (package_name, simple_name) = match qualified_name.rsplit_once('.') {
            Some((package, simple)) => (package.to_string(), simple.to_string()),
            None => (String::new(), qualified_name.clone()),
        };
        Self {
            simple_name,
            qualified_name,
            package_name,
            superclass_chain: superclass_chain.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for HostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified_name)
    }
}

/// A retained field together with its enclosing type, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedField {
    pub host: Arc<HostType>,
    pub field: FieldRef,
}

impl AnnotatedField {
    pub fn new(host: Arc<HostType>, field: FieldRef) -> Self {
        Self { host, field }
    }
}
