use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use reqwest::header::{HeaderValue, ACCEPT};
use serde_json::Value;
use sysfas::data::{DataSource, Resource};

#[derive(Parser)]
#[command(name = "sysfas-cli")]
#[command(about = "Inspect the organization data files and server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load every data file and report what parsed
    Check {
        #[arg(short, long, default_value = "data")]
        data_dir: PathBuf,
    },
    /// Print the JSON served at a path, read straight from disk
    Show {
        /// Request path, e.g. /teams
        path: String,
        #[arg(short, long, default_value = "data")]
        data_dir: PathBuf,
    },
    /// Fetch the JSON served at a path from a running server
    Fetch {
        /// Request path, e.g. /teams
        path: String,
        #[arg(short, long, default_value = "http://localhost:8080")]
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { data_dir } => {
            if check(&DataSource::new(data_dir), &mut io::stdout())? {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Commands::Show { path, data_dir } => {
            show(&DataSource::new(data_dir), &path, &mut io::stdout())?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Fetch { path, url } => fetch(&url, &path).await,
    }
}

/// Loads every resource and reports each one. Returns false if any failed.
fn check(source: &DataSource, out: &mut impl Write) -> io::Result<bool> {
    let mut ok = true;
    for resource in Resource::ALL {
        match source.load(resource) {
            Ok(data) => writeln!(out, "{}: ok ({} items)", resource.name(), data.item_count())?,
            Err(e) => {
                ok = false;
                writeln!(out, "{}: error: {}", resource.name(), e)?;
            }
        }
    }
    Ok(ok)
}

fn show(source: &DataSource, path: &str, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    let data = source.load_for_path(path)?;
    writeln!(out, "{}", serde_json::to_string_pretty(&data)?)?;
    Ok(())
}

async fn fetch(url: &str, path: &str) -> Result<ExitCode, Box<dyn Error>> {
    let res = reqwest::Client::new()
        .get(format!("{}{}", url.trim_end_matches('/'), path))
        .header(ACCEPT, HeaderValue::from_static("application/json"))
        .send()
        .await?;

    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: server returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(ExitCode::FAILURE);
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(ExitCode::SUCCESS)
}
