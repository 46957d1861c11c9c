//! `warden medical` command - medical records

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::{output, GlobalOpts};
use crate::core::fields;
use crate::core::Config;
use crate::entities::MedicalRecordFields;
use crate::store::{RecordStore, StoreError};

#[derive(Subcommand, Debug)]
pub enum MedicalCommands {
    /// Add a new medical record
    Add(FieldArgs),

    /// Update an existing medical record
    Update(UpdateArgs),

    /// Delete a medical record
    Delete(DeleteArgs),

    /// Show one medical record in full
    Show(ShowArgs),

    /// List all medical records
    List,
}

#[derive(clap::Args, Debug)]
pub struct FieldArgs {
    /// Prisoner ID examined
    #[arg(long)]
    pub prisoner: String,

    /// Doctor's staff ID
    #[arg(long)]
    pub doctor: String,

    /// Examination date (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,

    /// Diagnosis
    #[arg(long)]
    pub diagnosis: String,

    /// Treatment
    #[arg(long)]
    pub treatment: String,
}

impl FieldArgs {
    fn to_fields(&self) -> Result<MedicalRecordFields, StoreError> {
        Ok(MedicalRecordFields {
            prisoner_id: fields::parse_int("prisoner_id", &self.prisoner)?,
            doctor_id: fields::parse_int("doctor_id", &self.doctor)?,
            date_of_examination: fields::parse_date("date_of_examination", &self.date)?,
            diagnosis: fields::normalize_text(&self.diagnosis),
            treatment: fields::normalize_text(&self.treatment),
        })
    }
}

#[derive(clap::Args, Debug)]
pub struct UpdateArgs {
    /// Medical record ID
    pub id: i64,

    #[command(flatten)]
    pub fields: FieldArgs,
}

#[derive(clap::Args, Debug)]
pub struct DeleteArgs {
    /// Medical record ID
    pub id: i64,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Medical record ID
    pub id: i64,
}

pub fn run(cmd: MedicalCommands, global: &GlobalOpts) -> Result<()> {
    let config = Config::resolve(global.db.clone());
    let store = RecordStore::open(&config.db_path).into_diagnostic()?;

    match cmd {
        MedicalCommands::Add(args) => {
            let fields = args.to_fields().into_diagnostic()?;
            let id = store.add_medical(&fields).into_diagnostic()?;
            if !global.quiet {
                println!("{} Added medical record {}", style("✓").green(), style(id).cyan());
            }
        }
        MedicalCommands::Update(args) => {
            let fields = args.fields.to_fields().into_diagnostic()?;
            store.update_medical(args.id, &fields).into_diagnostic()?;
            if !global.quiet {
                println!("{} Updated medical record {}", style("✓").green(), style(args.id).cyan());
            }
        }
        MedicalCommands::Delete(args) => {
            if output::confirm_delete("medical record", args.id, args.yes)? {
                store.delete_medical(args.id).into_diagnostic()?;
                if !global.quiet {
                    println!("{} Deleted medical record {}", style("✓").green(), style(args.id).cyan());
                }
            }
        }
        MedicalCommands::Show(args) => {
            let record = store.get_medical(args.id).into_diagnostic()?;
            output::emit_record(&record);
        }
        MedicalCommands::List => {
            let records = store.list_medical().into_diagnostic()?;
            output::emit_list(&records, global.format, global.quiet)?;
        }
    }

    Ok(())
}
