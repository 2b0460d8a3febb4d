//! Configuration for code generation.

use crate::names::{LIB_PACKAGE, MEMENTO_METHODS, MEMENTO_SUFFIX};
use crate::writer::WriterConfig;

/// Configuration for code generation.
///
/// Use the builder pattern to construct:
/// ```
/// let config = memento_codegen::GenerationConfig::builder()
///     .indent_width(4)
///     .build();
/// assert_eq!(config.class_suffix, "$Memento");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct GenerationConfig {
    /// Package of the runtime library that defines the copy contract.
    #[builder(into, default = LIB_PACKAGE.to_string())]
    pub library_package: String,

    /// Appended to the host's name to name the companion.
    #[builder(into, default = MEMENTO_SUFFIX.to_string())]
    pub class_suffix: String,

    /// Spaces per indentation level in the generated source.
    #[builder(default = 2)]
    pub indent_width: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl GenerationConfig {
    /// Fully qualified name of the interface every companion implements.
    pub fn contract_name(&self) -> String {
        if self.library_package.is_empty() {
            MEMENTO_METHODS.to_string()
        } else {
            format!("{}.{}", self.library_package, MEMENTO_METHODS)
        }
    }

    pub fn writer_config(&self) -> WriterConfig {
        WriterConfig::new().with_indent_width(self.indent_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GenerationConfig::default();
        assert_eq!(config.library_package, "com.github.mttkay.memento");
        assert_eq!(config.class_suffix, "$Memento");
        assert_eq!(config.indent_width, 2);
        assert_eq!(
            config.contract_name(),
            "com.github.mttkay.memento.MementoMethods"
        );
    }

    #[test]
    fn test_custom_library_package() {
        let config = GenerationConfig::builder()
            .library_package("org.acme.retain")
            .build();
        assert_eq!(config.contract_name(), "org.acme.retain.MementoMethods");
    }
}
