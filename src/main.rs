use clap::Parser;
use dynamic_record::{DynamicRecord, RecordError, record};
use std::process::ExitCode;
use tracing::{error, info};

/// Increment an integer field of a dynamic record and print the result.
#[derive(Debug, Parser)]
#[command(name = "dynamic-record", version)]
struct Cli {
    /// Start from this JSON object instead of the built-in sample record.
    #[arg(long)]
    json: Option<String>,

    /// Field to increment.
    #[arg(long, default_value = "age")]
    field: String,

    /// Log level used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("dynamic_record={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn sample_record() -> DynamicRecord {
    record! {
        "name" => "Alice",
        "age" => 21i64,
        "height" => 167.64f64,
    }
}

/// Load the starting record and increment `cli.field` in it.
fn run(cli: &Cli) -> Result<DynamicRecord, RecordError> {
    let mut person = match cli.json.as_deref() {
        Some(json) => DynamicRecord::from_json_str(json)?,
        None => sample_record(),
    };
    let value = person.increment_int_field(&cli.field)?;
    info!(field = %cli.field, value, "field incremented");
    Ok(person)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match run(&cli) {
        Ok(person) => {
            println!("{person}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "could not increment field");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dynamic_record::{FieldError, ValueKind};

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("dynamic-record").chain(args.iter().copied()))
    }

    #[test]
    fn test_run_default_sample() {
        let person = run(&parse(&[])).unwrap();
        assert_eq!(person.to_string(), "map[age:22 height:167.64 name:Alice]");
    }

    #[test]
    fn test_run_json_and_field() {
        let person = run(&parse(&["--json", r#"{"count": 9, "label": "x"}"#, "--field", "count"]))
            .unwrap();
        assert_eq!(person.get_i64("count"), Some(10));
        assert_eq!(person.get_str("label"), Some("x"));
    }

    #[test]
    fn test_run_missing_field_fails() {
        let err = run(&parse(&["--field", "weight"])).unwrap_err();
        assert!(matches!(
            err,
            RecordError::Field(FieldError::Missing { ref key }) if key.as_str() == "weight"
        ));
    }

    #[test]
    fn test_run_string_field_fails() {
        let err = run(&parse(&["--json", r#"{"age": "21"}"#])).unwrap_err();
        assert!(matches!(
            err,
            RecordError::Field(FieldError::TypeMismatch {
                expected: ValueKind::Int,
                actual: ValueKind::Str,
                ..
            })
        ));
        assert_eq!(
            err.to_string(),
            "field `age`: type mismatch, expected int, got string"
        );
    }

    #[test]
    fn test_run_invalid_json_fails() {
        let err = run(&parse(&["--json", "{nope"])).unwrap_err();
        assert!(matches!(err, RecordError::Json(_)));

        let err = run(&parse(&["--json", "42"])).unwrap_err();
        assert!(matches!(err, RecordError::NotObject(ValueKind::Int)));
    }
}
