//! `warden visitor` command - visitor records

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::{output, GlobalOpts};
use crate::core::fields;
use crate::core::Config;
use crate::entities::VisitorFields;
use crate::store::{RecordStore, StoreError};

#[derive(Subcommand, Debug)]
pub enum VisitorCommands {
    /// Add a new visitor
    Add(FieldArgs),

    /// Update an existing visitor
    Update(UpdateArgs),

    /// Delete a visitor
    Delete(DeleteArgs),

    /// Show one visitor's full record
    Show(ShowArgs),

    /// List all visitors
    List,
}

#[derive(clap::Args, Debug)]
pub struct FieldArgs {
    /// Prisoner ID being visited
    #[arg(long)]
    pub prisoner: String,

    /// First name
    #[arg(long)]
    pub first_name: String,

    /// Last name
    #[arg(long)]
    pub last_name: String,

    /// Relationship to the prisoner
    #[arg(long)]
    pub relationship: String,

    /// Visit date (YYYY-MM-DD)
    #[arg(long)]
    pub visit_date: String,

    /// Visit time (e.g. 14:30)
    #[arg(long)]
    pub visit_time: String,
}

impl FieldArgs {
    fn to_fields(&self) -> Result<VisitorFields, StoreError> {
        Ok(VisitorFields {
            prisoner_id: fields::parse_int("prisoner_id", &self.prisoner)?,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            relationship: self.relationship.clone(),
            visit_date: fields::parse_date("visit_date", &self.visit_date)?,
            visit_time: self.visit_time.clone(),
        })
    }
}

#[derive(clap::Args, Debug)]
pub struct UpdateArgs {
    /// Visitor ID
    pub id: i64,

    #[command(flatten)]
    pub fields: FieldArgs,
}

#[derive(clap::Args, Debug)]
pub struct DeleteArgs {
    /// Visitor ID
    pub id: i64,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Visitor ID
    pub id: i64,
}

pub fn run(cmd: VisitorCommands, global: &GlobalOpts) -> Result<()> {
    let config = Config::resolve(global.db.clone());
    let store = RecordStore::open(&config.db_path).into_diagnostic()?;

    match cmd {
        VisitorCommands::Add(args) => {
            let fields = args.to_fields().into_diagnostic()?;
            let id = store.add_visitor(&fields).into_diagnostic()?;
            if !global.quiet {
                println!("{} Added visitor {}", style("✓").green(), style(id).cyan());
            }
        }
        VisitorCommands::Update(args) => {
            let fields = args.fields.to_fields().into_diagnostic()?;
            store.update_visitor(args.id, &fields).into_diagnostic()?;
            if !global.quiet {
                println!("{} Updated visitor {}", style("✓").green(), style(args.id).cyan());
            }
        }
        VisitorCommands::Delete(args) => {
            if output::confirm_delete("visitor", args.id, args.yes)? {
                store.delete_visitor(args.id).into_diagnostic()?;
                if !global.quiet {
                    println!("{} Deleted visitor {}", style("✓").green(), style(args.id).cyan());
                }
            }
        }
        VisitorCommands::Show(args) => {
            let visitor = store.get_visitor(args.id).into_diagnostic()?;
            output::emit_record(&visitor);
        }
        VisitorCommands::List => {
            let visitors = store.list_visitors().into_diagnostic()?;
            output::emit_list(&visitors, global.format, global.quiet)?;
        }
    }

    Ok(())
}
