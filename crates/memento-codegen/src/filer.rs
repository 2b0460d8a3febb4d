//! Destinations for generated sources.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use indexmap::IndexMap;
use tempfile::NamedTempFile;

/// Hands out sinks for generated sources and commits them once complete.
///
/// A sink that is dropped without being committed must leave nothing behind.
pub trait Filer {
    type Sink: Write;

    fn create_source(&mut self, qualified_class_name: &str) -> io::Result<Self::Sink>;

    fn commit(&mut self, qualified_class_name: &str, sink: Self::Sink) -> io::Result<()>;
}

/// Keeps committed sources in memory, in commit order.
#[derive(Debug, Clone, Default)]
pub struct MemoryFiler {
    sources: IndexMap<String, String>,
}

impl MemoryFiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, qualified_class_name: &str) -> Option<&str> {
        self.sources.get(qualified_class_name).map(String::as_str)
    }

    pub fn sources(&self) -> impl Iterator<Item = (&str, &str)> {
        self.sources
            .iter()
            .map(|(name, source)| (name.as_str(), source.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl Filer for MemoryFiler {
    type Sink = Vec<u8>;

    fn create_source(&mut self, _qualified_class_name: &str) -> io::Result<Self::Sink> {
        Ok(Vec::new())
    }

    fn commit(&mut self, qualified_class_name: &str, sink: Self::Sink) -> io::Result<()> {
        let source = String::from_utf8(sink)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        self.sources.insert(qualified_class_name.to_string(), source);
        Ok(())
    }
}

/// Writes `<out_dir>/<package dirs>/<Class>.java`.
///
/// Each source is staged in a temporary file next to its destination and
/// renamed into place on commit.
#[derive(Debug, Clone)]
pub struct FsFiler {
    out_dir: PathBuf,
}

impl FsFiler {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// Destination path of a top-level class.
    pub fn path_for(&self, qualified_class_name: &str) -> PathBuf {
        match qualified_class_name.rsplit_once('.') {
            Some((package, simple)) => self
                .out_dir
                .join(package.replace('.', "/"))
                .join(format!("{simple}.java")),
            None => self.out_dir.join(format!("{qualified_class_name}.java")),
        }
    }
}

impl Filer for FsFiler {
    type Sink = NamedTempFile;

    fn create_source(&mut self, qualified_class_name: &str) -> io::Result<Self::Sink> {
        let path = self.path_for(qualified_class_name);
        let dir = path.parent().unwrap_or(&self.out_dir);
        fs::create_dir_all(dir)?;
        NamedTempFile::new_in(dir)
    }

    fn commit(&mut self, qualified_class_name: &str, sink: Self::Sink) -> io::Result<()> {
        let path = self.path_for(qualified_class_name);
        sink.persist(&path).map_err(|err| err.error)?;
        Ok(())
    }
}
