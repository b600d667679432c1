//! sarview CLI — non-interactive inspection of a `sar -A` text report.
//!
//! Commands:
//! - `sections` — list sections with record counts and columns
//! - `series` — dump one column as a time series (text, CSV or JSON)
//! - `table` — dump a whole section as CSV

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use sarview_core::{parse_file, Report, Section, Series};

#[derive(Parser)]
#[command(
    name = "sarview-cli",
    version,
    about = "Inspect a sar -A text report without the terminal UI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the sections found in the report.
    Sections {
        /// sar text report.
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Print one column of a section as a time series.
    Series {
        /// sar text report.
        #[arg(short, long)]
        file: PathBuf,

        /// Section label as shown in the menu (e.g. "CPU util").
        #[arg(short, long)]
        section: String,

        /// Column name from the section header (e.g. %usr).
        #[arg(short, long)]
        column: String,

        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Print every record of a section as CSV.
    Table {
        /// sar text report.
        #[arg(short, long)]
        file: PathBuf,

        /// Section label as shown in the menu.
        #[arg(short, long)]
        section: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Csv,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Sections { file } => {
            let report = load(&file)?;
            write_sections(&mut out, &report)?;
        }
        Commands::Series {
            file,
            section,
            column,
            format,
        } => {
            let report = load(&file)?;
            let series = find_section(&report, &section)?.series(&column)?;
            write_series(&mut out, &series, format)?;
        }
        Commands::Table { file, section } => {
            let report = load(&file)?;
            write_table(&mut out, find_section(&report, &section)?)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn load(path: &Path) -> Result<Report> {
    let report =
        parse_file(path).with_context(|| format!("failed to load {}", path.display()))?;
    debug!(
        sections = report.len(),
        records = report.record_count(),
        "report loaded"
    );
    Ok(report)
}

fn find_section<'a>(report: &'a Report, label: &str) -> Result<&'a Section> {
    report.section_by_label(label).ok_or_else(|| {
        let known: Vec<&str> = report.sections().map(|s| s.label()).collect();
        anyhow!(
            "section \"{label}\" not in report (available: {})",
            known.join(", ")
        )
    })
}

fn write_sections(out: &mut impl Write, report: &Report) -> Result<()> {
    for section in report.sections() {
        writeln!(
            out,
            "{}\t{}\t{}",
            section.label(),
            section.len(),
            section.columns().join(" ")
        )?;
    }
    Ok(())
}

fn write_series(out: &mut impl Write, series: &Series, format: Format) -> Result<()> {
    match format {
        Format::Text => {
            for point in &series.points {
                writeln!(out, "{}\t{}", point.label, point.value)?;
            }
        }
        Format::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            writer.write_record(["time", series.column.as_str()])?;
            for point in &series.points {
                let value = point.value.to_string();
                writer.write_record([point.label.as_str(), value.as_str()])?;
            }
            writer.flush()?;
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, series)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn write_table(out: &mut impl Write, section: &Section) -> Result<()> {
    let table = section.table();
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(&table.columns)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
