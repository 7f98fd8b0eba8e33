#![allow(clippy::print_stdout, clippy::print_stderr)]
use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "jsonmorph", version, about = "Local JSON formatting, conversion, and diffing")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Pretty-print a document with 2-space indentation
    Format {
        /// Input file; reads stdin when omitted
        file: Option<PathBuf>,
        /// Report line / character / byte counts on stderr
        #[arg(long)]
        stats: bool,
    },
    /// Remove all insignificant whitespace
    Minify {
        file: Option<PathBuf>,
        #[arg(long)]
        stats: bool,
    },
    /// Check whether the input parses as JSON
    Check { file: Option<PathBuf> },
    /// Convert to YAML
    Yaml { file: Option<PathBuf> },
    /// Convert to XML
    Xml { file: Option<PathBuf> },
    /// Convert an array of objects to CSV
    Csv { file: Option<PathBuf> },
    /// Generate a PySpark schema declaration
    SparkPython { file: Option<PathBuf> },
    /// Generate a Scala Spark schema declaration
    SparkScala { file: Option<PathBuf> },
    /// Compare two documents line by line
    Diff { left: PathBuf, right: PathBuf },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli.command) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match command {
        Command::Format { file, stats } => {
            let output = jsonmorph::format(&load(file.as_deref())?);
            print_with_stats(&output, stats);
        }
        Command::Minify { file, stats } => {
            let output = jsonmorph::minify(&load(file.as_deref())?);
            print_with_stats(&output, stats);
        }
        Command::Check { file } => {
            let text = read_input(file.as_deref())?;
            return Ok(match check(&text) {
                Ok(()) => {
                    println!("Valid");
                    ExitCode::SUCCESS
                }
                Err(reason) => {
                    println!("Invalid: {reason}");
                    ExitCode::FAILURE
                }
            });
        }
        Command::Yaml { file } => {
            println!("{}", jsonmorph::convert::to_yaml(&load(file.as_deref())?));
        }
        Command::Xml { file } => {
            println!("{}", jsonmorph::convert::to_xml(&load(file.as_deref())?));
        }
        Command::Csv { file } => {
            println!("{}", jsonmorph::convert::to_csv(&load(file.as_deref())?)?);
        }
        Command::SparkPython { file } => {
            println!(
                "{}",
                jsonmorph::convert::to_spark_python(&load(file.as_deref())?)
            );
        }
        Command::SparkScala { file } => {
            println!(
                "{}",
                jsonmorph::convert::to_spark_scala(&load(file.as_deref())?)
            );
        }
        Command::Diff { left, right } => {
            let session = jsonmorph::DiffSession::compare(
                &load(Some(left.as_path()))?,
                &load(Some(right.as_path()))?,
            );
            if session.is_empty() {
                println!("No differences found");
            } else {
                for record in session.records() {
                    println!("line {}:", record.line_number);
                    println!("  - {}", record.left);
                    println!("  + {}", record.right);
                }
                let plural = if session.len() == 1 { "" } else { "s" };
                println!("{} line{plural} different", session.len());
                return Ok(ExitCode::FAILURE);
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn read_input(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn load(path: Option<&Path>) -> Result<Value, Box<dyn std::error::Error>> {
    let text = read_input(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn check(text: &str) -> Result<(), String> {
    if text.trim().is_empty() {
        return Err("Empty input".to_string());
    }
    serde_json::from_str::<Value>(text)
        .map(|_| ())
        .map_err(|error| error.to_string())
}

fn print_with_stats(output: &str, stats: bool) {
    println!("{output}");
    if stats {
        let report = jsonmorph::stats(output);
        eprintln!(
            "{} lines, {} chars, {} bytes",
            report.lines, report.chars, report.bytes
        );
    }
}
