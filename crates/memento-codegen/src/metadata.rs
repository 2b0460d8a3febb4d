//! The seam to the host compiler's type metadata.

use indexmap::{IndexMap, IndexSet};

use crate::error::ClassifyError;
use crate::model::HostType;
use crate::names::{COMPAT_ACTIVITY, LEGACY_ACTIVITY, ROOT_TYPE, is_framework_type};

/// Looks up the direct superclass of a type by qualified name.
///
/// `Ok(None)` means the type is the universal root and has no supertype.
pub trait TypeResolver {
    fn superclass(&self, qualified_name: &str) -> Result<Option<String>, ClassifyError>;
}

impl<F> TypeResolver for F
where
    F: Fn(&str) -> Result<Option<String>, ClassifyError>,
{
    fn superclass(&self, qualified_name: &str) -> Result<Option<String>, ClassifyError> {
        self(qualified_name)
    }
}

/// Type declarations known to the current build, in declaration order.
///
/// The framework activity types and the root type are built in and never
/// need declaring; a declared type without a superclass extends the root.
#[derive(Debug, Clone, Default)]
pub struct TypeTable {
    types: IndexMap<String, Option<String>>,
}

impl TypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a type. Re-declaring a name replaces its superclass.
    pub fn declare(
        &mut self,
        qualified_name: impl Into<String>,
        superclass: Option<impl Into<String>>,
    ) -> &mut Self {
        self.types
            .insert(qualified_name.into(), superclass.map(Into::into));
        self
    }

    pub fn contains(&self, qualified_name: &str) -> bool {
        self.types.contains_key(qualified_name)
    }

    /// Resolves a declared type into a [`HostType`] whose ancestor chain runs
    /// up to the first framework type it reaches.
    pub fn host_type(&self, qualified_name: &str) -> Result<HostType, ClassifyError> {
        if !self.contains(qualified_name) {
            return Err(ClassifyError::UnresolvedType {
                name: qualified_name.to_string(),
            });
        }

        let mut chain = Vec::new();
        let mut visited = IndexSet::new();
        visited.insert(qualified_name.to_string());
        let mut current = qualified_name.to_string();
        loop {
            let next = self
                .superclass(&current)?
                .unwrap_or_else(|| ROOT_TYPE.to_string());
            chain.push(next.clone());
            if is_framework_type(&next) {
                break;
            }
            if !visited.insert(next.clone()) {
                return Err(ClassifyError::CyclicHierarchy {
                    host: qualified_name.to_string(),
                });
            }
            current = next;
        }

        Ok(HostType::new(qualified_name, chain))
    }
}

impl TypeResolver for TypeTable {
    fn superclass(&self, qualified_name: &str) -> Result<Option<String>, ClassifyError> {
        if let Some(superclass) = self.types.get(qualified_name) {
            return Ok(Some(
                superclass.clone().unwrap_or_else(|| ROOT_TYPE.to_string()),
            ));
        }
        match qualified_name {
            ROOT_TYPE => Ok(None),
            COMPAT_ACTIVITY => Ok(Some(LEGACY_ACTIVITY.to_string())),
            LEGACY_ACTIVITY => Ok(Some(ROOT_TYPE.to_string())),
            other => Err(ClassifyError::UnresolvedType {
                name: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screens() -> TypeTable {
        let mut table = TypeTable::new();
        table
            .declare("com.example.BaseScreen", Some(LEGACY_ACTIVITY))
            .declare("com.example.MainScreen", Some("com.example.BaseScreen"));
        table
    }

    #[test]
    fn test_host_type_resolves_chain_to_framework_type() {
        let host = screens().host_type("com.example.MainScreen").unwrap();
        assert_eq!(host.simple_name, "MainScreen");
        assert_eq!(
            host.superclass_chain,
            vec!["com.example.BaseScreen", LEGACY_ACTIVITY]
        );
    }

    #[test]
    fn test_undeclared_superclass_extends_root() {
        let mut table = TypeTable::new();
        table.declare("com.example.Plain", None::<String>);
        let host = table.host_type("com.example.Plain").unwrap();
        assert_eq!(host.superclass_chain, vec![ROOT_TYPE]);
    }

    #[test]
    fn test_unknown_host_is_unresolved() {
        assert_eq!(
            screens().host_type("com.example.Missing"),
            Err(ClassifyError::UnresolvedType {
                name: "com.example.Missing".to_string()
            })
        );
    }

    #[test]
    fn test_unknown_superclass_is_unresolved() {
        let mut table = TypeTable::new();
        table.declare("com.example.Orphan", Some("com.vendor.Base"));
        assert_eq!(
            table.host_type("com.example.Orphan"),
            Err(ClassifyError::UnresolvedType {
                name: "com.vendor.Base".to_string()
            })
        );
    }

    #[test]
    fn test_cyclic_declarations_are_reported() {
        let mut table = TypeTable::new();
        table
            .declare("com.example.A", Some("com.example.B"))
            .declare("com.example.B", Some("com.example.A"));
        assert_eq!(
            table.host_type("com.example.A"),
            Err(ClassifyError::CyclicHierarchy {
                host: "com.example.A".to_string()
            })
        );
    }

    #[test]
    fn test_framework_types_resolve_without_declaration() {
        let table = TypeTable::new();
        assert_eq!(
            table.superclass(COMPAT_ACTIVITY),
            Ok(Some(LEGACY_ACTIVITY.to_string()))
        );
        assert_eq!(table.superclass(ROOT_TYPE), Ok(None));
    }
}
