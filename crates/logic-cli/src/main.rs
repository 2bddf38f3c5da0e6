use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use logic_spec::{FormDefinition, resolve_hidden, resolve_visibility};
use serde_json::{Map, Value, json};
use thiserror::Error;

type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Conditional field-visibility resolver for form definitions",
    long_about = "Loads a form definition (fields + logic rules) and a value snapshot, then reports which fields the renderer should suppress."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Print the set of field ids hidden for the given value snapshot.
    Resolve {
        /// Path to the form definition JSON (fields + rules).
        #[arg(long, value_name = "FORM")]
        form: PathBuf,
        /// Optional JSON file holding the current value snapshot; omitted
        /// means an empty snapshot.
        #[arg(long, value_name = "VALUES")]
        values: Option<PathBuf>,
        /// Output mode.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the per-field visibility map.
    Visibility {
        /// Path to the form definition JSON (fields + rules).
        #[arg(long, value_name = "FORM")]
        form: PathBuf,
        /// Optional JSON file holding the current value snapshot.
        #[arg(long, value_name = "VALUES")]
        values: Option<PathBuf>,
        /// Output mode.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the JSON Schema for form definition documents.
    Schema,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("json encode error: {0}")]
    Encode(#[source] serde_json::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli.command) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> CliResult<String> {
    match command {
        Command::Resolve {
            form,
            values,
            format,
        } => {
            let form = load_form(&form)?;
            let snapshot = load_values(values.as_deref())?;
            let hidden = resolve_hidden(&form.fields, &form.rules, &snapshot);
            match format {
                OutputFormat::Json => encode(&json!({ "hidden": hidden })),
                OutputFormat::Text => {
                    if hidden.is_empty() {
                        Ok("all fields visible".into())
                    } else {
                        Ok(hidden.into_iter().collect::<Vec<_>>().join("\n"))
                    }
                }
            }
        }
        Command::Visibility {
            form,
            values,
            format,
        } => {
            let form = load_form(&form)?;
            let snapshot = load_values(values.as_deref())?;
            let visibility = resolve_visibility(&form.fields, &form.rules, &snapshot);
            match format {
                OutputFormat::Json => encode(&json!(visibility)),
                OutputFormat::Text => {
                    let lines = visibility
                        .iter()
                        .map(|(id, visible)| {
                            let state = if *visible { "visible" } else { "hidden" };
                            format!(" - {}: {}", id, state)
                        })
                        .collect::<Vec<_>>();
                    Ok(lines.join("\n"))
                }
            }
        }
        Command::Schema => encode(&json!(schemars::schema_for!(FormDefinition))),
    }
}

fn encode(value: &Value) -> CliResult<String> {
    serde_json::to_string_pretty(value).map_err(CliError::Encode)
}

fn load_form(path: &Path) -> CliResult<FormDefinition> {
    let raw = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn load_values(path: Option<&Path>) -> CliResult<Value> {
    let Some(path) = path else {
        return Ok(Value::Object(Map::new()));
    };
    let raw = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::{CliError, load_form, load_values};

    #[test]
    fn load_form_reads_a_definition() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("form.json");
        std::fs::write(
            &path,
            r#"{ "id": "f", "fields": [{ "id": "a", "type": "text" }] }"#,
        )
        .expect("write form");

        let form = load_form(&path).expect("load form");
        assert_eq!(form.id, "f");
        assert_eq!(form.fields.len(), 1);
    }

    #[test]
    fn load_values_defaults_to_an_empty_snapshot() {
        let values = load_values(None).expect("load values");
        assert_eq!(values, serde_json::json!({}));
    }

    #[test]
    fn unparsable_form_reports_the_path() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("form.json");
        std::fs::write(&path, "not json").expect("write form");

        let error = load_form(&path).expect_err("parse failure");
        assert!(matches!(error, CliError::Parse { .. }));
        assert!(error.to_string().contains("form.json"));
    }
}
