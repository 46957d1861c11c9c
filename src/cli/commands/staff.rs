//! `warden staff` command - staff records

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::{output, GlobalOpts};
use crate::core::fields;
use crate::core::Config;
use crate::entities::StaffFields;
use crate::store::{RecordStore, StoreError};

#[derive(Subcommand, Debug)]
pub enum StaffCommands {
    /// Add a new staff member
    Add(FieldArgs),

    /// Update an existing staff member
    Update(UpdateArgs),

    /// Delete a staff member (refused while incidents or medical records reference them)
    Delete(DeleteArgs),

    /// Show one staff member's full record
    Show(ShowArgs),

    /// List all staff members
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

    /// Role (e.g. Guard, Doctor, Clerk)
    #[arg(long)]
    pub role: String,

    /// Salary
    #[arg(long)]
    pub salary: String,

    /// Hire date (YYYY-MM-DD)
    #[arg(long)]
    pub hire_date: String,
}

impl FieldArgs {
    fn to_fields(&self) -> Result<StaffFields, StoreError> {
        Ok(StaffFields {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            gender: fields::parse_choice("gender", &self.gender)?,
            date_of_birth: fields::parse_date("date_of_birth", &self.date_of_birth)?,
            role: self.role.clone(),
            salary: fields::parse_decimal("salary", &self.salary)?,
            hire_date: fields::parse_date("hire_date", &self.hire_date)?,
        })
    }
}

#[derive(clap::Args, Debug)]
pub struct UpdateArgs {
    /// Staff ID
    pub id: i64,

    #[command(flatten)]
    pub fields: FieldArgs,
}

#[derive(clap::Args, Debug)]
pub struct DeleteArgs {
    /// Staff ID
    pub id: i64,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Staff ID
    pub id: i64,
}

pub fn run(cmd: StaffCommands, global: &GlobalOpts) -> Result<()> {
    let config = Config::resolve(global.db.clone());
    let store = RecordStore::open(&config.db_path).into_diagnostic()?;

    match cmd {
        StaffCommands::Add(args) => {
            let fields = args.to_fields().into_diagnostic()?;
            let id = store.add_staff(&fields).into_diagnostic()?;
            if !global.quiet {
                println!("{} Added staff member {}", style("✓").green(), style(id).cyan());
            }
        }
        StaffCommands::Update(args) => {
            let fields = args.fields.to_fields().into_diagnostic()?;
            store.update_staff(args.id, &fields).into_diagnostic()?;
            if !global.quiet {
                println!("{} Updated staff member {}", style("✓").green(), style(args.id).cyan());
            }
        }
        StaffCommands::Delete(args) => {
            if output::confirm_delete("staff member", args.id, args.yes)? {
                store.delete_staff(args.id).into_diagnostic()?;
                if !global.quiet {
                    println!("{} Deleted staff member {}", style("✓").green(), style(args.id).cyan());
                }
            }
        }
        StaffCommands::Show(args) => {
            let staff = store.get_staff(args.id).into_diagnostic()?;
            output::emit_record(&staff);
        }
        StaffCommands::List => {
            let staff = store.list_staff().into_diagnostic()?;
            output::emit_list(&staff, global.format, global.quiet)?;
        }
    }

    Ok(())
}
