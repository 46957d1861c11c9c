//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{
    cell::CellCommands, incident::IncidentCommands, medical::MedicalCommands,
    prisoner::PrisonerCommands, staff::StaffCommands, visitor::VisitorCommands,
};

#[derive(Parser)]
#[command(name = "warden")]
#[command(author, version, about = "Prison facility records manager")]
#[command(
    long_about = "A CLI for managing prison facility records (prisoners, cells, visitors, staff, incident reports, medical records) in a local SQLite database."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Database file (default: ./warden.db)
    #[arg(long, global = true, env = "WARDEN_DB")]
    pub db: Option<PathBuf>,

    /// Output format for list commands
    #[arg(long, short = 'f', global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Prisoner records
    #[command(subcommand)]
    Prisoner(PrisonerCommands),

    /// Cell records
    #[command(subcommand)]
    Cell(CellCommands),

    /// Visitor records
    #[command(subcommand)]
    Visitor(VisitorCommands),

    /// Staff records
    #[command(subcommand)]
    Staff(StaffCommands),

    /// Incident report records
    #[command(subcommand)]
    Incident(IncidentCommands),

    /// Medical records
    #[command(subcommand)]
    Medical(MedicalCommands),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// CSV (for spreadsheets)
    Csv,
    /// JSON (for programming)
    Json,
}
