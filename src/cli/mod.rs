//! CLI module for the Easel constant tooling
//!
//! ## Commands
//!
//! - `get <NAME>` - Print the value bound to one constant
//! - `list [--category <SLUG>]` - List public constants in table order
//! - `check` - Rebuild and validate the constant table
//! - `reference [--out <PATH>]` - Generate the Markdown constant reference
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::reference::DEFAULT_REFERENCE_PATH;
use crate::version::EASEL_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Inspect the Easel symbolic-constant registry
#[derive(Parser, Debug)]
#[command(name = "easel")]
#[command(version = EASEL_VERSION)]
#[command(about = "Inspect the Easel symbolic-constant registry", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the value bound to a constant
    Get {
        /// Constant name (case-sensitive, e.g. RADIANS)
        #[arg(value_name = "NAME")]
        name: String,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List public constants in table order
    List {
        /// Only list one category (e.g. blend-mode)
        #[arg(short, long, value_name = "SLUG")]
        category: Option<String>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Rebuild the constant table and report any defect
    Check,

    /// Generate the Markdown constant reference
    Reference {
        /// Output file
        #[arg(short, long, value_name = "PATH", default_value = DEFAULT_REFERENCE_PATH)]
        out: PathBuf,
        /// Only render these categories, in the given order
        #[arg(short, long = "category", value_name = "SLUG")]
        categories: Vec<String>,
        /// Omit the description column
        #[arg(long)]
        no_descriptions: bool,
        /// Omit the alias table
        #[arg(long)]
        no_aliases: bool,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Get { name, json } => commands::get_constant(&name, json),
        Command::List { category, json } => commands::list_constants(category.as_deref(), json),
        Command::Check => commands::check_registry(),
        Command::Reference {
            out,
            categories,
            no_descriptions,
            no_aliases,
        } => commands::generate_reference(&out, &categories, !no_descriptions, !no_aliases),
    }
}

// ============================================================================
// Tests
// ============================================================================
