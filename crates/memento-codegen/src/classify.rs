//! Finding which activity base class a host ultimately extends.

use crate::error::ClassifyError;
use crate::metadata::TypeResolver;
use crate::model::HostType;
use crate::names::{COMPAT_ACTIVITY, COMPAT_FRAGMENT, LEGACY_ACTIVITY, LEGACY_FRAGMENT, ROOT_TYPE};

/// The activity family a host belongs to.
///
/// Only selects which fragment class the companion imports; the generated
/// declaration is the same for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Extends `android.app.Activity`.
    LegacyHost,
    /// Extends the support library's `FragmentActivity`.
    CompatHost,
}

impl Classification {
    /// Fully qualified name of the fragment class the companion extends.
    pub fn fragment_import(self) -> &'static str {
        match self {
            Classification::LegacyHost => LEGACY_FRAGMENT,
            Classification::CompatHost => COMPAT_FRAGMENT,
        }
    }

    fn step(qualified_name: &str) -> Step {
        match qualified_name {
            ROOT_TYPE => Step::Root,
            LEGACY_ACTIVITY => Step::Found(Classification::LegacyHost),
            COMPAT_ACTIVITY => Step::Found(Classification::CompatHost),
            _ => Step::Continue,
        }
    }
}

enum Step {
    Root,
    Found(Classification),
    Continue,
}

/// Classifies a host by walking its resolved ancestor chain, starting with
/// the host type itself.
pub fn classify(host: &HostType) -> Result<Classification, ClassifyError> {
    let names = std::iter::once(host.qualified_name.as_str())
        .chain(host.superclass_chain.iter().map(String::as_str));
    for name in names {
        match Classification::step(name) {
            Step::Root => break,
            Step::Found(classification) => return Ok(classification),
            Step::Continue => {}
        }
    }
    Err(ClassifyError::Unclassified {
        host: host.qualified_name.clone(),
    })
}

/// Classifies `qualified_name` by asking `resolver` for one superclass at a
/// time.
///
/// The resolver must describe a finite hierarchy ending at the root type.
pub fn classify_with<R>(qualified_name: &str, resolver: &R) -> Result<Classification, ClassifyError>
where
    R: TypeResolver + ?Sized,
{
    let mut current = qualified_name.to_string();
    loop {
        match Classification::step(&current) {
            Step::Root => break,
            Step::Found(classification) => return Ok(classification),
            Step::Continue => {}
        }
        match resolver.superclass(&current)? {
            Some(superclass) => current = superclass,
            None => break,
        }
    }
    Err(ClassifyError::Unclassified {
        host: qualified_name.to_string(),
    })
}
