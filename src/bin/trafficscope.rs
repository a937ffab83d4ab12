use clap::{Parser, ValueEnum};
use std::fs;
use std::io;
use std::path::PathBuf;
use trafficscope::geo::GeoDatabase;
use trafficscope::{pipeline, report};

#[derive(Parser, Debug)]
#[command(name = "trafficscope", version, about = "Access-log origin and client statistics")]
struct Cli {
    /// Access log to analyze
    #[arg(long = "input", default_value = "./apache_log.txt")]
    input: PathBuf,

    /// GeoLite2 city database used for offline IP-to-country lookups
    #[arg(long = "geo-db", default_value = "./libs/GeoLite2-City.mmdb")]
    geo_db: PathBuf,

    /// Report destination (overwritten on each run)
    #[arg(long = "output", default_value = "output/log_report.txt")]
    output: PathBuf,

    /// Report format
    #[arg(long = "format", value_enum, default_value = "text")]
    format: ReportFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let content = match fs::read_to_string(&cli.input) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            eprintln!("error: the file '{}' was not found", cli.input.display());
            return Ok(());
        }
        Err(e) => {
            return Err(anyhow::Error::new(e)
                .context(format!("failed to read '{}'", cli.input.display())));
        }
    };

    let trimmed = content.trim();
    if trimmed.is_empty() {
        eprintln!("'{}' contains no log lines; no report written", cli.input.display());
        return Ok(());
    }
    let lines: Vec<&str> = trimmed.split('\n').collect();

    let geo = GeoDatabase::open(&cli.geo_db)?;
    let Some(summary) = pipeline::analyze(&lines, &geo)? else {
        return Ok(());
    };

    match cli.format {
        ReportFormat::Json => {
            if let Some(parent) = cli.output.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(&cli.output, serde_json::to_string_pretty(&summary)?)?;
        }
        ReportFormat::Text => report::write_report(&summary, &cli.output)?,
    }

    println!("Log saved to {}", cli.output.display());
    Ok(())
}
