//! Error types. Every error is fatal to the generation request it came from.

use std::io;

/// An annotated field the companion could not reach.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    #[error("annotated fields cannot be private: {host}#{field} ({declared_type})")]
    Private {
        host: String,
        field: String,
        declared_type: String,
    },
}

/// Failure to place a host type under a supported activity base class.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyError {
    #[error("annotated type does not seem to be an activity: {host}")]
    Unclassified { host: String },

    #[error("type `{name}` is not known to the metadata source")]
    UnresolvedType { name: String },

    #[error("superclass hierarchy of `{host}` is cyclic")]
    CyclicHierarchy { host: String },
}

/// Errors raised by [`JavaWriter`](crate::JavaWriter).
#[derive(Debug, thiserror::Error)]
pub enum WriterError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("expected to be inside {expected}, but was inside {found}")]
    Scope {
        expected: &'static str,
        found: &'static str,
    },

    #[error("{depth} scope(s) still open when closing the writer")]
    UnclosedScopes { depth: usize },

    #[error("package declaration must be the first thing written")]
    PackageAfterContent,
}

/// Failure while writing a single generated unit.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("failed writing source file for {class_name}: {source}")]
    Writer {
        class_name: String,
        #[source]
        source: WriterError,
    },

    #[error("failed creating or committing source file for {class_name}: {source}")]
    Filer {
        class_name: String,
        #[source]
        source: io::Error,
    },
}

/// Any failure of a generation request.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Access(#[from] AccessError),

    #[error(transparent)]
    Classify(#[from] ClassifyError),

    #[error(transparent)]
    Emit(#[from] EmitError),
}
