//! A streaming writer for Java source files.
//!
//! Structural calls (`begin_type`, `emit_field`, `begin_method`, ...) are
//! turned into text as soon as they are made. The writer keeps only a stack
//! of open scopes so that mismatched `end_*` calls are caught, and the set
//! of imported names so that type references can be shortened.

use std::fmt;
use std::io::Write;

use indexmap::IndexSet;

use crate::error::WriterError;

/// Layout options for [`JavaWriter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterConfig {
    /// Number of spaces per scope level. Continuation lines use twice this.
    /// Default: 2
    pub indent_width: usize,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self { indent_width: 2 }
    }
}

impl WriterConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set indent width.
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }
}

/// Java declaration modifiers, ordered the way `javac` style guides print them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Abstract,
    Static,
    Final,
    Transient,
    Volatile,
    Synchronized,
    Native,
}

impl Modifier {
    pub fn as_str(self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Protected => "protected",
            Modifier::Private => "private",
            Modifier::Abstract => "abstract",
            Modifier::Static => "static",
            Modifier::Final => "final",
            Modifier::Transient => "transient",
            Modifier::Volatile => "volatile",
            Modifier::Synchronized => "synchronized",
            Modifier::Native => "native",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    TypeDeclaration,
    Method,
}

impl Scope {
    fn describe(scope: Option<Scope>) -> &'static str {
        match scope {
            None => "the compilation unit",
            Some(Scope::TypeDeclaration) => "a type declaration",
            Some(Scope::Method) => "a method",
        }
    }
}

/// Writes Java source text to `W` one structural element at a time.
pub struct JavaWriter<W: Write> {
    out: W,
    config: WriterConfig,
    package: String,
    imports: IndexSet<String>,
    scopes: Vec<Scope>,
    has_content: bool,
}

impl<W: Write> JavaWriter<W> {
    pub fn new(out: W, config: WriterConfig) -> Self {
        Self {
            out,
            config,
            package: String::new(),
            imports: IndexSet::new(),
            scopes: Vec::new(),
            has_content: false,
        }
    }

    /// Emits `package <name>;` followed by a blank line. An empty name stands
    /// for the unnamed package and emits nothing.
    pub fn emit_package(&mut self, name: &str) -> Result<&mut Self, WriterError> {
        if self.has_content {
            return Err(WriterError::PackageAfterContent);
        }
        self.has_content = true;
        self.package = name.to_string();
        if !name.is_empty() {
            writeln!(self.out, "package {name};")?;
            writeln!(self.out)?;
        }
        Ok(self)
    }

    /// Emits one import per entry, in the given order.
    pub fn emit_imports(&mut self, names: &[&str]) -> Result<&mut Self, WriterError> {
        self.has_content = true;
        for name in names {
            writeln!(self.out, "import {name};")?;
            self.imports.insert((*name).to_string());
        }
        Ok(self)
    }

    pub fn emit_empty_line(&mut self) -> Result<&mut Self, WriterError> {
        self.has_content = true;
        writeln!(self.out)?;
        Ok(self)
    }

    /// Opens a type declaration such as
    /// `public final class Foo extends Bar implements Baz {`.
    ///
    /// The type name and supertypes are shortened to their simple names when
    /// they live in the current package or were imported.
    pub fn begin_type(
        &mut self,
        name: &str,
        kind: &str,
        modifiers: &[Modifier],
        extends: Option<&str>,
        implements: &[&str],
    ) -> Result<&mut Self, WriterError> {
        self.has_content = true;
        let mut line = self.indent(self.scopes.len());
        line.push_str(&modifier_prefix(modifiers));
        line.push_str(kind);
        line.push(' ');
        line.push_str(&self.compress_type(name));
        if let Some(extends) = extends {
            line.push_str(" extends ");
            line.push_str(&self.compress_type(extends));
        }
        if !implements.is_empty() {
            let implements = implements
                .iter()
                .map(|name| self.compress_type(name))
                .collect::<Vec<_>>()
                .join(", ");
            line.push('\n');
            line.push_str(&self.indent(self.scopes.len() + 2));
            line.push_str("implements ");
            line.push_str(&implements);
        }
        writeln!(self.out, "{line} {{")?;
        self.scopes.push(Scope::TypeDeclaration);
        Ok(self)
    }

    pub fn end_type(&mut self) -> Result<&mut Self, WriterError> {
        self.pop_scope(Scope::TypeDeclaration)?;
        let indent = self.indent(self.scopes.len());
        writeln!(self.out, "{indent}}}")?;
        Ok(self)
    }

    /// Emits a field declaration without initializer. `ty` is printed as given.
    pub fn emit_field(
        &mut self,
        ty: &str,
        name: &str,
        modifiers: &[Modifier],
    ) -> Result<&mut Self, WriterError> {
        self.expect_scope(Scope::TypeDeclaration)?;
        let indent = self.indent(self.scopes.len());
        let modifiers = modifier_prefix(modifiers);
        writeln!(self.out, "{indent}{modifiers}{ty} {name};")?;
        Ok(self)
    }

    /// Opens a method. `return_type` of `None` declares a constructor.
    /// Parameters are `(type, name)` pairs.
    pub fn begin_method(
        &mut self,
        return_type: Option<&str>,
        name: &str,
        modifiers: &[Modifier],
        parameters: &[(&str, &str)],
    ) -> Result<&mut Self, WriterError> {
        self.expect_scope(Scope::TypeDeclaration)?;
        let indent = self.indent(self.scopes.len());
        let modifiers = modifier_prefix(modifiers);
        let return_type = return_type.map(|ty| format!("{ty} ")).unwrap_or_default();
        let parameters = parameters
            .iter()
            .map(|(ty, name)| format!("{ty} {name}"))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(
            self.out,
            "{indent}{modifiers}{return_type}{name}({parameters}) {{"
        )?;
        self.scopes.push(Scope::Method);
        Ok(self)
    }

    pub fn end_method(&mut self) -> Result<&mut Self, WriterError> {
        self.pop_scope(Scope::Method)?;
        let indent = self.indent(self.scopes.len());
        writeln!(self.out, "{indent}}}")?;
        Ok(self)
    }

    /// Emits `<statement>;` inside the current method.
    pub fn emit_statement(&mut self, statement: &str) -> Result<&mut Self, WriterError> {
        self.expect_scope(Scope::Method)?;
        let indent = self.indent(self.scopes.len());
        writeln!(self.out, "{indent}{statement};")?;
        Ok(self)
    }

    /// Emits `@<name>` on its own line.
    pub fn emit_annotation(&mut self, name: &str) -> Result<&mut Self, WriterError> {
        if self.scopes.last() == Some(&Scope::Method) {
            return Err(WriterError::Scope {
                expected: Scope::describe(Some(Scope::TypeDeclaration)),
                found: Scope::describe(Some(Scope::Method)),
            });
        }
        self.has_content = true;
        let indent = self.indent(self.scopes.len());
        writeln!(self.out, "{indent}@{name}")?;
        Ok(self)
    }

    /// Finishes the file and hands back the underlying writer.
    pub fn close(mut self) -> Result<W, WriterError> {
        if !self.scopes.is_empty() {
            return Err(WriterError::UnclosedScopes {
                depth: self.scopes.len(),
            });
        }
        self.out.flush()?;
        Ok(self.out)
    }

    /// Shortens `name` to its simple form if it was imported or lives directly
    /// in the current package.
    pub fn compress_type(&self, name: &str) -> String {
        if self.imports.contains(name) {
            if let Some((_, simple)) = name.rsplit_once('.') {
                return simple.to_string();
            }
        }
        if !self.package.is_empty() {
            if let Some(rest) = name
                .strip_prefix(self.package.as_str())
                .and_then(|rest| rest.strip_prefix('.'))
            {
                if !rest.contains('.') {
                    return rest.to_string();
                }
            }
        }
        name.to_string()
    }

    fn indent(&self, level: usize) -> String {
        " ".repeat(level * self.config.indent_width)
    }

    fn expect_scope(&self, expected: Scope) -> Result<(), WriterError> {
        let found = self.scopes.last().copied();
        if found == Some(expected) {
            Ok(())
        } else {
            Err(WriterError::Scope {
                expected: Scope::describe(Some(expected)),
                found: Scope::describe(found),
            })
        }
    }

    fn pop_scope(&mut self, expected: Scope) -> Result<(), WriterError> {
        self.expect_scope(expected)?;
        self.scopes.pop();
        Ok(())
    }
}

fn modifier_prefix(modifiers: &[Modifier]) -> String {
    let mut modifiers = modifiers.to_vec();
    modifiers.sort();
    modifiers.dedup();
    modifiers
        .iter()
        .map(|modifier| format!("{modifier} "))
        .collect()
}
