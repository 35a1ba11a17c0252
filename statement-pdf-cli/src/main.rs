use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use statement_pdf::statement::{
    parse_date, sample_transactions, StatementRenderer, DEFAULT_OUTPUT_FILE,
};
use statement_pdf::StatementError;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "sample-statement",
    about = "Generate the ZKB sample account statement PDF for January 2026",
    version,
    author
)]
struct Cli {
    /// Output file path
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Generation date printed in the header (DD.MM.YYYY), defaults to today
    #[arg(long, value_parser = parse_created)]
    created: Option<NaiveDate>,

    /// Write uncompressed content streams
    #[arg(long)]
    no_compress: bool,

    /// Log page breaks and layout details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn parse_created(value: &str) -> std::result::Result<NaiveDate, String> {
    parse_date(value).map_err(|e| e.to_string())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "statement_pdf=debug,sample_statement=debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: &Cli) -> std::result::Result<(), StatementError> {
    let mut renderer = StatementRenderer::new()?.with_compression(!cli.no_compress);
    if let Some(date) = cli.created {
        renderer = renderer.with_generated_on(date);
    }

    let records = sample_transactions()?;
    tracing::debug!("Rendering {} transactions", records.len());
    let totals = renderer.render(&records, &cli.output)?;

    println!("Created: {}", cli.output.display());
    println!();
    println!("{}", totals.summary(renderer.profile()));
    println!();
    println!("Use this PDF to test the ZüriBudget app!");

    Ok(())
}

/// Exit code and stderr text for errors the CLI reports itself. Anything
/// else propagates through `anyhow`.
fn report_error(error: &StatementError) -> Option<(i32, String)> {
    match error {
        StatementError::DependencyMissing { dependency, remedy } => Some((
            1,
            format!("Error: {dependency} is not available\n\n{remedy}"),
        )),
        _ => None,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Err(error) = run(&cli) else {
        return Ok(());
    };
    match report_error(&error) {
        Some((code, message)) => {
            eprintln!("{message}");
            std::process::exit(code);
        }
        None => Err(error.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["sample-statement"]);
        assert_eq!(cli.output, PathBuf::from("ZKB_Sample_Statement_January_2026.pdf"));
        assert!(cli.created.is_none());
        assert!(!cli.no_compress);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_created_flag() {
        let cli = Cli::parse_from(["sample-statement", "--created", "31.01.2026"]);
        assert_eq!(cli.created, NaiveDate::from_ymd_opt(2026, 1, 31));
    }

    #[test]
    fn test_created_rejects_iso_date() {
        let result = Cli::try_parse_from(["sample-statement", "--created", "2026-01-31"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_dependency_exits_with_remedy() {
        let error = StatementError::DependencyMissing {
            dependency: "font metrics for Frutiger-Bold".to_string(),
            remedy: "Use Helvetica or Helvetica-Bold for the statement layout.".to_string(),
        };

        let (code, message) = report_error(&error).unwrap();
        assert_eq!(code, 1);
        assert!(message.starts_with("Error: font metrics for Frutiger-Bold is not available"));
        assert!(message.ends_with("Use Helvetica or Helvetica-Bold for the statement layout."));
    }

    #[test]
    fn test_other_errors_propagate() {
        let error = StatementError::InvalidDate("2026-01-31".to_string());
        assert!(report_error(&error).is_none());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
