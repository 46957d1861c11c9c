//! `warden prisoner` command - prisoner records

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::{output, GlobalOpts};
use crate::core::fields;
use crate::core::Config;
use crate::entities::PrisonerFields;
use crate::store::{RecordStore, StoreError};

#[derive(Subcommand, Debug)]
pub enum PrisonerCommands {
    /// Add a new prisoner
    Add(FieldArgs),

    /// Update an existing prisoner
    Update(UpdateArgs),

    /// Delete a prisoner
    Delete(DeleteArgs),

    /// Show one prisoner's full record
    Show(ShowArgs),

    /// List all prisoners
    List,
}

#[derive(clap::Args, Debug)]
pub struct FieldArgs {
    /// First name
    #[arg(long)]
    pub first_name: String,

    /// Last name
    #[arg(long)]
    pub last_name: String,

    /// Gender (Male, Female, Other)
    #[arg(long)]
    pub gender: String,

    /// Date of birth (YYYY-MM-DD)
    #[arg(long)]
    pub date_of_birth: String,

    /// Date of incarceration (YYYY-MM-DD)
    #[arg(long)]
    pub date_of_incarceration: String,

    /// Date of release (YYYY-MM-DD; omit if not set)
    #[arg(long)]
    pub date_of_release: Option<String>,

    /// Crime committed
    #[arg(long)]
    pub crime: String,

    /// Status (Incarcerated, Released, Paroled)
    #[arg(long)]
    pub status: String,

    /// Cell ID (omit if unassigned)
    #[arg(long)]
    pub cell: Option<String>,
}

impl FieldArgs {
    fn to_fields(&self) -> Result<PrisonerFields, StoreError> {
        Ok(PrisonerFields {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            gender: fields::parse_choice("gender", &self.gender)?,
            date_of_birth: fields::parse_date("date_of_birth", &self.date_of_birth)?,
            date_of_incarceration: fields::parse_date(
                "date_of_incarceration",
                &self.date_of_incarceration,
            )?,
            date_of_release: fields::parse_date_opt(
                "date_of_release",
                self.date_of_release.as_deref(),
            )?,
            crime_committed: fields::normalize_text(&self.crime),
            status: fields::parse_choice("status", &self.status)?,
            cell_id: fields::parse_ref_opt("cell_id", self.cell.as_deref())?,
        })
    }
}

#[derive(clap::Args, Debug)]
pub struct UpdateArgs {
    /// Prisoner ID
    pub id: i64,

    #[command(flatten)]
    pub fields: FieldArgs,
}

#[derive(clap::Args, Debug)]
pub struct DeleteArgs {
    /// Prisoner ID
    pub id: i64,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Prisoner ID
    pub id: i64,
}

pub fn run(cmd: PrisonerCommands, global: &GlobalOpts) -> Result<()> {
    let config = Config::resolve(global.db.clone());
    let store = RecordStore::open(&config.db_path).into_diagnostic()?;

    match cmd {
        PrisonerCommands::Add(args) => {
            let fields = args.to_fields().into_diagnostic()?;
            let id = store.add_prisoner(&fields).into_diagnostic()?;
            if !global.quiet {
                println!("{} Added prisoner {}", style("✓").green(), style(id).cyan());
            }
        }
        PrisonerCommands::Update(args) => {
            let fields = args.fields.to_fields().into_diagnostic()?;
            store.update_prisoner(args.id, &fields).into_diagnostic()?;
            if !global.quiet {
                println!("{} Updated prisoner {}", style("✓").green(), style(args.id).cyan());
            }
        }
        PrisonerCommands::Delete(args) => {
            if output::confirm_delete("prisoner", args.id, args.yes)? {
                store.delete_prisoner(args.id).into_diagnostic()?;
                if !global.quiet {
                    println!("{} Deleted prisoner {}", style("✓").green(), style(args.id).cyan());
                }
            }
        }
        PrisonerCommands::Show(args) => {
            let prisoner = store.get_prisoner(args.id).into_diagnostic()?;
            output::emit_record(&prisoner);
        }
        PrisonerCommands::List => {
            let prisoners = store.list_prisoners().into_diagnostic()?;
            output::emit_list(&prisoners, global.format, global.quiet)?;
        }
    }

    Ok(())
}
