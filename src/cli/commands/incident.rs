//! `warden incident` command - incident report records

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::{output, GlobalOpts};
use crate::core::fields;
use crate::core::Config;
use crate::entities::IncidentReportFields;
use crate::store::{RecordStore, StoreError};

#[derive(Subcommand, Debug)]
pub enum IncidentCommands {
    /// Add a new incident report
    Add(FieldArgs),

    /// Update an existing incident report
    Update(UpdateArgs),

    /// Delete an incident report
    Delete(DeleteArgs),

    /// Show one incident report's full record
    Show(ShowArgs),

    /// List all incident reports
    List,
}

#[derive(clap::Args, Debug)]
pub struct FieldArgs {
    /// Prisoner ID involved
    #[arg(long)]
    pub prisoner: String,

    /// Staff ID reporting
    #[arg(long)]
    pub staff: String,

    /// Incident date (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,

    /// Incident description
    #[arg(long)]
    pub description: String,
}

impl FieldArgs {
    fn to_fields(&self) -> Result<IncidentReportFields, StoreError> {
        Ok(IncidentReportFields {
            prisoner_id: fields::parse_int("prisoner_id", &self.prisoner)?,
            staff_id: fields::parse_int("staff_id", &self.staff)?,
            incident_date: fields::parse_date("incident_date", &self.date)?,
            incident_description: fields::normalize_text(&self.description),
        })
    }
}

#[derive(clap::Args, Debug)]
pub struct UpdateArgs {
    /// Incident report ID
    pub id: i64,

    #[command(flatten)]
    pub fields: FieldArgs,
}

#[derive(clap::Args, Debug)]
pub struct DeleteArgs {
    /// Incident report ID
    pub id: i64,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Incident report ID
    pub id: i64,
}

pub fn run(cmd: IncidentCommands, global: &GlobalOpts) -> Result<()> {
    let config = Config::resolve(global.db.clone());
    let store = RecordStore::open(&config.db_path).into_diagnostic()?;

    match cmd {
        IncidentCommands::Add(args) => {
            let fields = args.to_fields().into_diagnostic()?;
            let id = store.add_incident(&fields).into_diagnostic()?;
            if !global.quiet {
                println!("{} Added incident report {}", style("✓").green(), style(id).cyan());
            }
        }
        IncidentCommands::Update(args) => {
            let fields = args.fields.to_fields().into_diagnostic()?;
            store.update_incident(args.id, &fields).into_diagnostic()?;
            if !global.quiet {
                println!("{} Updated incident report {}", style("✓").green(), style(args.id).cyan());
            }
        }
        IncidentCommands::Delete(args) => {
            if output::confirm_delete("incident report", args.id, args.yes)? {
                store.delete_incident(args.id).into_diagnostic()?;
                if !global.quiet {
                    println!("{} Deleted incident report {}", style("✓").green(), style(args.id).cyan());
                }
            }
        }
        IncidentCommands::Show(args) => {
            let incident = store.get_incident(args.id).into_diagnostic()?;
            output::emit_record(&incident);
        }
        IncidentCommands::List => {
            let incidents = store.list_incidents().into_diagnostic()?;
            output::emit_list(&incidents, global.format, global.quiet)?;
        }
    }

    Ok(())
}
