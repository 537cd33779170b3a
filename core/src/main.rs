use clap::Parser;
use log::{error, info};
use mammolink_core::cli::{Cli, OutputFormat};
use mammolink_core::io::{to_output_rows, write_csv, write_csv_file, OutputRow};
use mammolink_core::{LinkageOutcome, Result, StudyLinker, TextReport};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process;

fn main() {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.linkage_config();
    info!(
        "Linking {} with {} biopsy table(s) and {} (window {} days)",
        cli.imaging.display(),
        cli.biopsy.len(),
        cli.radiology.display(),
        config.biopsy_window_days
    );

    let linker = StudyLinker::new(config);
    let outcome = linker.link_files(&cli.imaging, &cli.biopsy, &cli.radiology)?;

    write_outcome(&outcome, &cli.format, cli.output.as_deref())
}

fn setup_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn write_outcome(outcome: &LinkageOutcome, format: &OutputFormat, output: Option<&Path>) -> Result<()> {
    match format {
        OutputFormat::Csv => {
            let rows = to_output_rows(&outcome.studies);
            match output {
                Some(path) => write_csv_file(&rows, path),
                None => write_csv(&rows, io::stdout().lock()),
            }
        }
        OutputFormat::Json => {
            let rows = to_output_rows(&outcome.studies);
            write_json_output(&rows, output)
        }
        OutputFormat::Text => {
            let report = TextReport::new(outcome).to_string();
            match output {
                Some(path) => {
                    let mut writer = BufWriter::new(File::create(path)?);
                    writer.write_all(report.as_bytes())?;
                    writer.flush()?;
                    Ok(())
                }
                None => {
                    print!("{}", report);
                    Ok(())
                }
            }
        }
    }
}

#[cfg(feature = "json")]
fn write_json_output(rows: &[OutputRow], output: Option<&Path>) -> Result<()> {
    use mammolink_core::io::write_json;

    match output {
        Some(path) => write_json(rows, BufWriter::new(File::create(path)?)),
        None => {
            write_json(rows, io::stdout().lock())?;
            println!();
            Ok(())
        }
    }
}

#[cfg(not(feature = "json"))]
fn write_json_output(_rows: &[OutputRow], _output: Option<&Path>) -> Result<()> {
    Err(mammolink_core::MammolinkError::OutputError(
        "JSON output not available. Rebuild with --features json".to_string(),
    ))
}
