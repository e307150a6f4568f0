//! Diagnostic reporting using ariadne for readable build errors
use crate::error::{ConfigError, ConfigurationError, Error, LoadError};
use crate::plugin::VIRTUAL_ID_PREFIX;
use ariadne::{Color, Label, Report, ReportKind, Source};
use std::ops::Range;

/// Char index of a 1-based line/column position, clamped to the source
///
/// serde_json counts columns in bytes; ariadne spans count chars.
fn position_to_offset(source: &str, line: usize, column: usize) -> usize {
    let line_start: usize = source
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    let byte = (line_start + column.saturating_sub(1)).min(source.len());
    source.char_indices().take_while(|(i, _)| *i < byte).count()
}

/// One-char range at `offset`, or an empty range at the end of input
fn point(source: &str, offset: usize) -> Range<usize> {
    let len = source.chars().count();
    if offset < len {
        offset..offset + 1
    } else {
        len..len
    }
}

fn render<'a>(
    report: Report<'_, (&'a str, Range<usize>)>,
    source_name: &'a str,
    source: &str,
) -> String {
    let mut output = Vec::new();
    report
        .write((source_name, Source::from(source)), &mut output)
        .expect("writing a diagnostic into memory cannot fail");
    String::from_utf8_lossy(&output).into_owned()
}

/// Report a problem with the plugin options file
pub fn report_config_error(source_name: &str, source: &str, error: &ConfigError) -> String {
    let report = match error {
        ConfigError::Io { path, source: io } => Report::build(ReportKind::Error, source_name, 0)
            .with_message(format!("Cannot read '{}': {}", path.display(), io))
            .finish(),
        ConfigError::Parse(e) => {
            let offset = position_to_offset(source, e.line(), e.column());
            Report::build(ReportKind::Error, source_name, offset)
                .with_message("Invalid plugin options")
                .with_label(
                    Label::new((source_name, point(source, offset)))
                        .with_message(e.to_string())
                        .with_color(Color::Red),
                )
                .with_help(
                    "'directives' and 'labComponents' take true, false, or an array of names",
                )
                .finish()
        }
    };

    render(report, source_name, source)
}

/// Report failure to serialize the Vuetify options
pub fn report_configuration_error(
    source_name: &str,
    source: &str,
    error: &ConfigurationError,
) -> String {
    let report = match error {
        ConfigurationError::Serialize(e) => Report::build(ReportKind::Error, source_name, 0)
            .with_message(format!(
                "Vuetify options cannot be embedded in the generated module: {}",
                e
            ))
            .finish(),
    };

    render(report, source_name, source)
}

/// Report a module id no plugin could load
pub fn report_load_error(error: &LoadError) -> String {
    match error {
        LoadError::NotFound(id) => {
            let source_name = "<import>";
            let report = Report::build(ReportKind::Error, source_name, 0)
                .with_message("Module not found")
                .with_label(
                    Label::new((source_name, 0..id.chars().count()))
                        .with_message("no plugin resolved or loaded this id")
                        .with_color(Color::Red),
                )
                .with_help(format!(
                    "virtual modules are imported by their public name, without the '{}' marker",
                    VIRTUAL_ID_PREFIX.escape_default()
                ))
                .finish();
            render(report, source_name, id)
        }
    }
}

/// Combined error reporting for any crate error
pub fn report_error(source_name: &str, source: &str, error: &Error) -> String {
    match error {
        Error::Config(e) => report_config_error(source_name, source, e),
        Error::Configuration(e) => report_configuration_error(source_name, source, e),
        Error::Load(e) => report_load_error(e),
    }
}
