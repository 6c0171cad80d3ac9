//! Praxis CLI - Command-line interface for the Praxis course server

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Deserialize;
use tabled::{Table, Tabled};

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";

#[derive(Parser)]
#[command(name = "praxis")]
#[command(about = "Praxis course CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Course server URL
    #[arg(long, env = "PRAXIS_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    server_url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// List all chapters in the course
    Chapters,

    /// Show a chapter's document
    Show {
        /// Chapter slug (e.g. "hello-world")
        chapter: String,
    },

    /// List a chapter's source files
    Files {
        /// Chapter slug
        chapter: String,
    },

    /// Run a chapter's test suite
    Run {
        /// Chapter slug
        chapter: String,
    },

    /// Show server status
    Status,
}

#[derive(Deserialize)]
struct CourseResponse {
    sections: Vec<SectionResponse>,
}

#[derive(Deserialize)]
struct SectionResponse {
    title: String,
    chapters: Vec<ChapterMetaResponse>,
}

#[derive(Deserialize, Tabled)]
struct ChapterMetaResponse {
    #[tabled(rename = "Chapter")]
    slug: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Description")]
    description: String,
}

#[derive(Deserialize)]
struct ChapterResponse {
    content: String,
}

#[derive(Deserialize)]
struct FileListResponse {
    files: Vec<FileInfoResponse>,
}

#[derive(Deserialize, Tabled)]
struct FileInfoResponse {
    #[tabled(rename = "File")]
    name: String,
    #[tabled(rename = "Size (bytes)")]
    size_bytes: u64,
}

#[derive(Deserialize)]
struct RunTestsResponse {
    run_id: String,
    success: bool,
    exit_code: Option<i32>,
    duration_ms: i64,
    stdout: String,
    stderr: String,
}

#[derive(Deserialize)]
struct HealthResponse {
    status: String,
    version: String,
    uptime_seconds: u64,
    cpu_usage_percent: f32,
    memory_used_mb: u64,
    memory_total_mb: u64,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

async fn get<T: serde::de::DeserializeOwned>(client: &reqwest::Client, url: &str) -> Result<T> {
    let response = client
        .get(url)
        .send()
        .await
        .context("Failed to connect to course server")?;
    parse_response(response).await
}

async fn post<T: serde::de::DeserializeOwned>(client: &reqwest::Client, url: &str) -> Result<T> {
    let response = client
        .post(url)
        .send()
        .await
        .context("Failed to connect to course server")?;
    parse_response(response).await
}

async fn parse_response<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    if response.status().is_success() {
        response.json().await.context("Failed to parse response")
    } else {
        let status = response.status();
        let error = response
            .json::<ErrorResponse>()
            .await
            .map(|e| e.error)
            .unwrap_or_else(|_| "unknown error".to_string());
        anyhow::bail!("Server error ({}): {}", status, error);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.server_url.trim_end_matches('/');

    match cli.command {
        Commands::Chapters => {
            let course: CourseResponse = get(&client, &format!("{}/course", base)).await?;

            for section in course.sections {
                println!("{}", section.title.cyan().bold());
                println!("{}", Table::new(section.chapters));
                println!();
            }
        }

        Commands::Show { chapter } => {
            let doc: ChapterResponse =
                get(&client, &format!("{}/chapter/{}", base, chapter)).await?;
            println!("{}", doc.content);
        }

        Commands::Files { chapter } => {
            let listing: FileListResponse =
                get(&client, &format!("{}/files/{}", base, chapter)).await?;

            println!("{}", format!("Files in '{}':", chapter).cyan().bold());
            println!("{}", Table::new(listing.files));
        }

        Commands::Run { chapter } => {
            println!("{}", format!("Running tests for '{}'...", chapter).cyan());

            let report: RunTestsResponse =
                post(&client, &format!("{}/run-tests/{}", base, chapter)).await?;

            if report.success {
                println!("{}", "✓ Tests passed".green().bold());
            } else {
                println!(
                    "{}",
                    format!("✗ Tests failed (exit code {:?})", report.exit_code)
                        .red()
                        .bold()
                );
            }
            println!(
                "  {} {} | {} {} ms",
                "Run:".bold(),
                report.run_id,
                "Duration:".bold(),
                report.duration_ms
            );

            if !report.stdout.is_empty() {
                println!();
                println!("{}", "stdout:".bold());
                println!("{}", report.stdout);
            }
            if !report.stderr.is_empty() {
                println!();
                println!("{}", "stderr:".bold());
                println!("{}", report.stderr);
            }

            if !report.success {
                std::process::exit(1);
            }
        }

        Commands::Status => {
            println!("{}", "Server Status".cyan().bold());
            println!();

            match get::<HealthResponse>(&client, &format!("{}/health", base)).await {
                Ok(health) => {
                    println!("  {} {}", "URL:".bold(), cli.server_url);
                    println!("  {} {}", "Status:".bold(), health.status.to_uppercase().green());
                    println!("  {} {}", "Version:".bold(), health.version);
                    println!("  {} {} seconds", "Uptime:".bold(), health.uptime_seconds);
                    println!("  {} {:.1}%", "CPU:".bold(), health.cpu_usage_percent);
                    println!(
                        "  {} {} / {} MB",
                        "Memory:".bold(),
                        health.memory_used_mb,
                        health.memory_total_mb
                    );
                }
                Err(e) => {
                    println!("  {} {}", "Status:".bold(), "OFFLINE".red());
                    println!("  {} {}", "Error:".bold(), e);
                }
            }
        }
    }

    Ok(())
}
