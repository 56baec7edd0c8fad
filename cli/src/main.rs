//! courserank CLI - survey spreadsheet analysis tool
//!
//! A command-line tool for extracting a course survey XLSX export,
//! ranking the courses, and writing the report set.

use clap::{Parser, Subcommand};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

use courserank::analyze::{analyze, AnalyzeOptions};
use courserank::report::{self, JsonFormat, ReportOptions};
use courserank::XlsxParser;

/// Survey spreadsheet extraction and course ranking
#[derive(Parser)]
#[command(
    name = "courserank",
    version,
    about = "Analyze and rank survey courses",
    long_about = "courserank - survey spreadsheet analysis tool.\n\n\
                  Parses an XLSX survey export, normalizes responses to 0-100 scores,\n\
                  ranks courses, and writes CSV, SVG, and Markdown reports."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline and write the report set
    Analyze {
        /// Input XLSX file path
        #[arg(short, long, default_value = "Grad Program Exit Survey Data 2024.xlsx")]
        input: PathBuf,

        /// Directory for generated outputs (created if absent)
        #[arg(short, long, default_value = "outputs")]
        output_dir: PathBuf,

        /// Worksheet to read (1-based)
        #[arg(long, default_value = "1")]
        sheet: usize,

        /// Report title stem
        #[arg(long)]
        title: Option<String>,

        /// Number of courses in the summary table
        #[arg(long, default_value = "5")]
        top: usize,
    },

    /// Show table shape, columns, and question text
    Info {
        /// Input XLSX file path
        input: PathBuf,

        /// Worksheet to read (1-based)
        #[arg(long, default_value = "1")]
        sheet: usize,
    },

    /// Print the course ranking to stdout
    Rank {
        /// Input XLSX file path
        input: PathBuf,

        /// Worksheet to read (1-based)
        #[arg(long, default_value = "1")]
        sheet: usize,

        /// Emit the full analysis as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Analyze {
            input,
            output_dir,
            sheet,
            title,
            top,
        } => {
            let pb = create_spinner("Parsing workbook...");

            let table = XlsxParser::open(&input)?.with_sheet_index(sheet).parse()?;
            pb.set_message("Scoring and ranking...");

            let analyze_options = AnalyzeOptions::default();
            let analysis = analyze(&table, &analyze_options);

            pb.set_message("Writing reports...");
            let mut report_options = ReportOptions::default().with_top_n(top);
            if let Some(title) = title {
                report_options = report_options.with_title(title);
            }
            let written =
                report::write_reports(&analysis, &output_dir, &report_options, &analyze_options)?;

            pb.finish_and_clear();

            println!(
                "{} Analyzed {} responses across {} courses",
                "✓".green().bold(),
                table.records.len(),
                analysis.ranking.len()
            );
            for path in written {
                println!("{} Wrote {}", "✓".green().bold(), path.display());
            }
        }

        Commands::Info { input, sheet } => {
            let pb = create_spinner("Parsing workbook...");

            let table = XlsxParser::open(&input)?.with_sheet_index(sheet).parse()?;

            pb.finish_and_clear();

            println!("{}", "Survey Table".cyan().bold());
            println!("{}", "─".repeat(40));
            println!(
                "{}: {}",
                "File".bold(),
                input.file_name().unwrap_or_default().to_string_lossy()
            );
            println!("{}: {}", "Columns".bold(), table.columns.len());
            println!("{}: {}", "Records".bold(), table.records.len());

            println!("\n{}", "Questions".cyan().bold());
            println!("{}", "─".repeat(40));
            for column in &table.columns {
                let question = table.question(column);
                if question.is_empty() {
                    println!("{}", column.bold());
                } else {
                    println!("{}: {}", column.bold(), question);
                }
            }
        }

        Commands::Rank { input, sheet, json } => {
            let pb = create_spinner("Parsing workbook...");

            let table = XlsxParser::open(&input)?.with_sheet_index(sheet).parse()?;
            let analysis = analyze(&table, &AnalyzeOptions::default());

            pb.finish_and_clear();

            if json {
                println!("{}", report::to_json(&analysis, JsonFormat::Pretty)?);
            } else {
                println!("{}", "Course Ranking".cyan().bold());
                println!("{}", "─".repeat(40));
                for row in &analysis.ranking {
                    println!(
                        "{:>3}. {} {} (n={})",
                        row.rank,
                        format!("{:6.2}", row.overall_score).bold(),
                        row.course,
                        row.num_responses
                    );
                }
                if analysis.ranking.is_empty() {
                    println!("{} No courses with valid responses", "!".yellow().bold());
                }
            }
        }
    }

    Ok(())
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.blue} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
