//! Writing the companion class for one host type.

use std::io::Write;

use crate::classify::Classification;
use crate::config::GenerationConfig;
use crate::error::{EmitError, WriterError};
use crate::model::{FieldRef, HostType};
use crate::names::{ACTIVITY, ACTIVITY_IMPORT, FRAGMENT, NARROWED_LOCAL, RETAIN_INSTANCE_STATEMENT};
use crate::writer::{JavaWriter, Modifier};

/// Description of a companion class that was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    /// `<host qualified name><suffix>`, e.g. `com.example.MainScreen$Memento`.
    pub qualified_class_name: String,
    pub simple_class_name: String,
    pub package_name: String,
    pub classification: Classification,
    /// Retained fields in declaration and copy order.
    pub fields: Vec<FieldRef>,
}

impl GeneratedUnit {
    pub fn new(
        host: &HostType,
        classification: Classification,
        fields: &[FieldRef],
        config: &GenerationConfig,
    ) -> Self {
        Self {
            qualified_class_name: format!("{}{}", host.qualified_name, config.class_suffix),
            simple_class_name: format!("{}{}", host.simple_name, config.class_suffix),
            package_name: host.package_name.clone(),
            classification,
            fields: fields.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CopyDirection {
    /// Host to companion.
    Retain,
    /// Companion to host.
    Restore,
}

impl CopyDirection {
    fn method_name(self) -> &'static str {
        match self {
            CopyDirection::Retain => "retain",
            CopyDirection::Restore => "restore",
        }
    }

    fn parameter_name(self) -> &'static str {
        match self {
            CopyDirection::Retain => "source",
            CopyDirection::Restore => "target",
        }
    }

    fn assignment(self, field: &str) -> String {
        match self {
            CopyDirection::Retain => format!("this.{field} = {NARROWED_LOCAL}.{field}"),
            CopyDirection::Restore => format!("{NARROWED_LOCAL}.{field} = this.{field}"),
        }
    }
}

/// Writes the companion for `host` to `out` and returns the flushed writer.
///
/// `out` receives the text strictly in order: header, declaration, fields,
/// constructor, `retain`, `restore`.
pub fn emit<W: Write>(
    out: W,
    host: &HostType,
    classification: Classification,
    fields: &[FieldRef],
    config: &GenerationConfig,
) -> Result<(GeneratedUnit, W), EmitError> {
    let unit = GeneratedUnit::new(host, classification, fields, config);
    let mut writer = JavaWriter::new(out, config.writer_config());
    let result = write_unit(&mut writer, host, &unit, config).and_then(|()| writer.close());
    match result {
        Ok(out) => Ok((unit, out)),
        Err(source) => Err(EmitError::Writer {
            class_name: unit.qualified_class_name,
            source,
        }),
    }
}

/// Like [`emit`], collecting the source into a string.
pub fn render(
    host: &HostType,
    classification: Classification,
    fields: &[FieldRef],
    config: &GenerationConfig,
) -> Result<(GeneratedUnit, String), EmitError> {
    let (unit, bytes) = emit(Vec::new(), host, classification, fields, config)?;
    Ok((unit, String::from_utf8_lossy(&bytes).into_owned()))
}

fn write_unit<W: Write>(
    writer: &mut JavaWriter<W>,
    host: &HostType,
    unit: &GeneratedUnit,
    config: &GenerationConfig,
) -> Result<(), WriterError> {
    writer
        .emit_package(&host.package_name)?
        .emit_imports(&[unit.classification.fragment_import()])?
        .emit_imports(&[ACTIVITY_IMPORT])?
        .emit_empty_line()?;

    let contract = config.contract_name();
    writer.begin_type(
        &unit.qualified_class_name,
        "class",
        &[Modifier::Public, Modifier::Final],
        Some(FRAGMENT),
        &[contract.as_str()],
    )?;

    writer.emit_empty_line()?;
    for field in &unit.fields {
        writer.emit_field(&field.declared_type, &field.name, &[])?;
    }

    writer
        .emit_empty_line()?
        .begin_method(None, &unit.simple_class_name, &[Modifier::Public], &[])?
        .emit_statement(RETAIN_INSTANCE_STATEMENT)?
        .end_method()?;

    emit_copy_method(writer, CopyDirection::Retain, &host.simple_name, &unit.fields)?;
    emit_copy_method(writer, CopyDirection::Restore, &host.simple_name, &unit.fields)?;

    writer.end_type()?;
    Ok(())
}

fn emit_copy_method<W: Write>(
    writer: &mut JavaWriter<W>,
    direction: CopyDirection,
    host_simple_name: &str,
    fields: &[FieldRef],
) -> Result<(), WriterError> {
    let parameter = direction.parameter_name();
    writer
        .emit_empty_line()?
        .emit_annotation("Override")?
        .begin_method(
            Some("void"),
            direction.method_name(),
            &[Modifier::Public],
            &[(ACTIVITY, parameter)],
        )?
        .emit_statement(&format!(
            "{host_simple_name} {NARROWED_LOCAL} = ({host_simple_name}) {parameter}"
        ))?;
    for field in fields {
        writer.emit_statement(&direction.assignment(&field.name))?;
    }
    writer.end_method()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AccessLevel;
    use pretty_assertions::assert_eq;

    fn main_screen() -> HostType {
        HostType::new(
            "com.example.MainScreen",
            ["com.example.BaseScreen", "android.app.Activity"],
        )
    }

    fn fields() -> Vec<FieldRef> {
        vec![
            FieldRef::new("counter", "int", AccessLevel::Public),
            FieldRef::new("label", "java.lang.String", AccessLevel::Public),
        ]
    }

    #[test]
    fn test_render_legacy_host() {
        let (unit, source) = render(
            &main_screen(),
            Classification::LegacyHost,
            &fields(),
            &GenerationConfig::default(),
        )
        .unwrap();

        assert_eq!(unit.qualified_class_name, "com.example.MainScreen$Memento");
        assert_eq!(unit.simple_class_name, "MainScreen$Memento");
        assert_eq!(
            source,
            r#"package com.example;

import android.app.Fragment;
import android.app.Activity;

public final class MainScreen$Memento extends Fragment
    implements com.github.mttkay.memento.MementoMethods {

  int counter;
  java.lang.String label;

  public MainScreen$Memento() {
    setRetainInstance(true);
  }

  @Override
  public void retain(Activity source) {
    MainScreen activity = (MainScreen) source;
    this.counter = activity.counter;
    this.label = activity.label;
  }

  @Override
  public void restore(Activity target) {
    MainScreen activity = (MainScreen) target;
    activity.counter = this.counter;
    activity.label = this.label;
  }
}
"#
        );
    }

    #[test]
    fn test_compat_host_changes_only_the_fragment_import() {
        let config = GenerationConfig::default();
        let (_, legacy) =
            render(&main_screen(), Classification::LegacyHost, &fields(), &config).unwrap();
        let (_, compat) =
            render(&main_screen(), Classification::CompatHost, &fields(), &config).unwrap();

        assert!(compat.contains("import android.support.v4.app.Fragment;\n"));
        assert!(!compat.contains("import android.app.Fragment;\n"));
        assert!(compat.contains("import android.app.Activity;\n"));
        assert_eq!(
            legacy.replace("android.app.Fragment;", "android.support.v4.app.Fragment;"),
            compat
        );
    }

    #[test]
    fn test_zero_fields_still_retains_instance() {
        let (unit, source) = render(
            &main_screen(),
            Classification::LegacyHost,
            &[],
            &GenerationConfig::default(),
        )
        .unwrap();

        assert!(unit.fields.is_empty());
        assert!(source.contains("    setRetainInstance(true);\n"));
        assert!(source.contains(
            "  public void retain(Activity source) {\n    MainScreen activity = (MainScreen) source;\n  }\n"
        ));
    }

    #[test]
    fn test_unnamed_package_has_no_package_line() {
        let host = HostType::new("Main", ["android.app.Activity"]);
        let (unit, source) = render(
            &host,
            Classification::LegacyHost,
            &fields(),
            &GenerationConfig::default(),
        )
        .unwrap();

        assert_eq!(unit.qualified_class_name, "Main$Memento");
        assert!(source.starts_with("import android.app.Fragment;\n"));
        assert!(source.contains("public final class Main$Memento extends Fragment\n"));
    }

    #[test]
    fn test_custom_suffix_and_indent() {
        let config = GenerationConfig::builder()
            .class_suffix("_State")
            .indent_width(4)
            .build();
        let (unit, source) =
            render(&main_screen(), Classification::LegacyHost, &fields(), &config).unwrap();

        assert_eq!(unit.qualified_class_name, "com.example.MainScreen_State");
        assert!(source.contains("        implements com.github.mttkay.memento.MementoMethods {\n"));
        assert!(source.contains("    public MainScreen_State() {\n        setRetainInstance(true);\n"));
    }

    #[derive(Debug)]
    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk full"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_io_failure_names_the_class() {
        let err = emit(
            FailingSink,
            &main_screen(),
            Classification::LegacyHost,
            &fields(),
            &GenerationConfig::default(),
        )
        .unwrap_err();

        let EmitError::Writer { class_name, source } = err else {
            panic!("expected a writer error");
        };
        assert_eq!(class_name, "com.example.MainScreen$Memento");
        assert!(matches!(source, WriterError::Io(_)));
    }
}
