//! Running a whole generation request.

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{debug, info};

use crate::classify::classify;
use crate::config::GenerationConfig;
use crate::emit::{GeneratedUnit, emit};
use crate::error::{EmitError, GenerateError};
use crate::filer::Filer;
use crate::model::{AnnotatedField, FieldRef, HostType};
use crate::verify::verify_accessible;

/// Retained fields of a single host type, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostGroup {
    pub host: Arc<HostType>,
    pub fields: Vec<FieldRef>,
}

/// Groups fields by enclosing type. Groups keep the order in which their host
/// was first seen.
pub fn group_by_host(fields: &[AnnotatedField]) -> Vec<HostGroup> {
    let mut groups: IndexMap<&str, HostGroup> = IndexMap::new();
    for annotated in fields {
        groups
            .entry(annotated.host.qualified_name.as_str())
            .or_insert_with(|| HostGroup {
                host: annotated.host.clone(),
                fields: Vec::new(),
            })
            .fields
            .push(annotated.field.clone());
    }
    groups.into_values().collect()
}

/// Generates one companion per host type found among the retained fields.
#[derive(Debug, Clone, Default)]
pub struct Processor {
    config: GenerationConfig,
}

impl Processor {
    pub fn new(config: GenerationConfig) -> Self {
        Self { config }
    }

    /// Runs the request and returns the units committed to `filer`.
    ///
    /// All checks happen before the first sink is opened, and nothing is
    /// committed until every unit has been written. An empty batch produces
    /// nothing and is not an error.
    pub fn process<F: Filer>(
        &self,
        fields: &[AnnotatedField],
        filer: &mut F,
    ) -> Result<Vec<GeneratedUnit>, GenerateError> {
        if fields.is_empty() {
            debug!("no retained fields, skipping generation");
            return Ok(Vec::new());
        }

        verify_accessible(fields)?;
        info!("processing {} fields", fields.len());

        let mut planned = Vec::new();
        for group in group_by_host(fields) {
            let classification = classify(&group.host)?;
            debug!(host = %group.host, ?classification, "classified host");
            planned.push((group, classification));
        }

        let mut staged = Vec::with_capacity(planned.len());
        for (group, classification) in planned {
            let class_name = format!("{}{}", group.host.qualified_name, self.config.class_suffix);
            info!("writing class {class_name}");
            let sink = filer
                .create_source(&class_name)
                .map_err(|source| EmitError::Filer {
                    class_name: class_name.clone(),
                    source,
                })?;
            let (unit, sink) = emit(sink, &group.host, classification, &group.fields, &self.config)?;
            staged.push((unit, sink));
        }

        let mut units = Vec::with_capacity(staged.len());
        for (unit, sink) in staged {
            filer
                .commit(&unit.qualified_class_name, sink)
                .map_err(|source| EmitError::Filer {
                    class_name: unit.qualified_class_name.clone(),
                    source,
                })?;
            units.push(unit);
        }
        Ok(units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AccessLevel;

    #[test]
    fn test_group_by_host_keeps_discovery_order() {
        let first = Arc::new(HostType::new("com.example.B", ["android.app.Activity"]));
        let second = Arc::new(HostType::new("com.example.A", ["android.app.Activity"]));
        let field = |host: &Arc<HostType>, name: &str| {
            AnnotatedField::new(host.clone(), FieldRef::new(name, "int", AccessLevel::Package))
        };
        let fields = [
            field(&first, "x"),
            field(&second, "y"),
            field(&first, "z"),
        ];

        let groups = group_by_host(&fields);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].host.qualified_name, "com.example.B");
        let names: Vec<_> = groups[0].fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["x", "z"]);
        assert_eq!(groups[1].host.qualified_name, "com.example.A");
    }
}
