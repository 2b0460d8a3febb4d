//! Rejecting retained fields the companion cannot reach.

use crate::error::AccessError;
use crate::model::AnnotatedField;

/// Checks that every field can be read and assigned from the companion.
///
/// Fails on the first private field; the caller must not emit anything for
/// the batch in that case.
pub fn verify_accessible<'a, I>(fields: I) -> Result<(), AccessError>
where
    I: IntoIterator<Item = &'a AnnotatedField>,
{
    for annotated in fields {
        if !annotated.field.access.is_reachable_from_package() {
            return Err(AccessError::Private {
                host: annotated.host.qualified_name.clone(),
                field: annotated.field.name.clone(),
                declared_type: annotated.field.declared_type.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::model::{AccessLevel, FieldRef, HostType};

    fn field(host: &Arc<HostType>, name: &str, access: AccessLevel) -> AnnotatedField {
        AnnotatedField::new(host.clone(), FieldRef::new(name, "int", access))
    }

    #[test]
    fn test_non_private_fields_pass() {
        let host = Arc::new(HostType::new("com.example.Main", ["android.app.Activity"]));
        let fields = [
            field(&host, "a", AccessLevel::Public),
            field(&host, "b", AccessLevel::Protected),
            field(&host, "c", AccessLevel::Package),
        ];
        assert_eq!(verify_accessible(&fields), Ok(()));
    }

    #[test]
    fn test_first_private_field_is_reported() {
        let host = Arc::new(HostType::new("com.example.Main", ["android.app.Activity"]));
        let fields = [
            field(&host, "ok", AccessLevel::Public),
            field(&host, "hidden", AccessLevel::Private),
            field(&host, "secret", AccessLevel::Private),
        ];
        let err = verify_accessible(&fields).unwrap_err();
        assert_eq!(
            err,
            AccessError::Private {
                host: "com.example.Main".to_string(),
                field: "hidden".to_string(),
                declared_type: "int".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "annotated fields cannot be private: com.example.Main#hidden (int)"
        );
    }
}
