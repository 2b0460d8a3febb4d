//! Source generation for state-retaining activity companions.
//!
//! Given the fields of an activity marked for retention, this crate writes a
//! `<Host>$Memento` Java class that copies those fields out of a live activity
//! before it is destroyed and back into the new instance after recreation.
//!
//! # Pipeline
//!
//! - [`verify_accessible`] rejects private fields for the whole batch.
//! - [`classify`] walks the host's ancestors to pick the fragment flavour.
//! - [`emit`] streams the companion through a [`JavaWriter`].
//! - [`Processor`] ties these together per host type and hands the
//!   finished sources to a [`Filer`].

mod classify;
mod config;
mod emit;
mod error;
mod filer;
mod metadata;
mod model;
pub mod names;
mod processor;
mod verify;
pub mod writer;

pub use classify::*;
pub use config::*;
pub use emit::*;
pub use error::*;
pub use filer::*;
pub use metadata::*;
pub use model::*;
pub use processor::*;
pub use verify::*;
pub use writer::{JavaWriter, Modifier, WriterConfig};
