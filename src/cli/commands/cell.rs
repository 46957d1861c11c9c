//! `warden cell` command - cell records

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::{output, GlobalOpts};
use crate::core::fields;
use crate::core::Config;
use crate::entities::CellFields;
use crate::store::{RecordStore, StoreError};

#[derive(Subcommand, Debug)]
pub enum CellCommands {
    /// Add a new cell
    Add(FieldArgs),

    /// Update an existing cell
    Update(UpdateArgs),

    /// Delete a cell (refused while prisoners are assigned to it)
    Delete(DeleteArgs),

    /// Show one cell's full record
    Show(ShowArgs),

    /// List all cells
    List,
}

#[derive(clap::Args, Debug)]
pub struct FieldArgs {
    /// Cell number (e.g. A1)
    #[arg(long)]
    pub cell_number: String,

    /// Capacity
    #[arg(long)]
    pub capacity: String,

    /// Current occupancy
    #[arg(long)]
    pub current_occupancy: String,

    /// Block number
    #[arg(long)]
    pub block_number: String,
}

impl FieldArgs {
    fn to_fields(&self) -> Result<CellFields, StoreError> {
        Ok(CellFields {
            cell_number: self.cell_number.clone(),
            capacity: fields::parse_int("capacity", &self.capacity)?,
            current_occupancy: fields::parse_int("current_occupancy", &self.current_occupancy)?,
            block_number: self.block_number.clone(),
        })
    }
}

#[derive(clap::Args, Debug)]
pub struct UpdateArgs {
    /// Cell ID
    pub id: i64,

    #[command(flatten)]
    pub fields: FieldArgs,
}

#[derive(clap::Args, Debug)]
pub struct DeleteArgs {
    /// Cell ID
    pub id: i64,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Cell ID
    pub id: i64,
}

pub fn run(cmd: CellCommands, global: &GlobalOpts) -> Result<()> {
    let config = Config::resolve(global.db.clone());
    let store = RecordStore::open(&config.db_path).into_diagnostic()?;

    match cmd {
        CellCommands::Add(args) => {
            let fields = args.to_fields().into_diagnostic()?;
            let id = store.add_cell(&fields).into_diagnostic()?;
            if !global.quiet {
                println!("{} Added cell {}", style("✓").green(), style(id).cyan());
            }
        }
        CellCommands::Update(args) => {
            let fields = args.fields.to_fields().into_diagnostic()?;
            store.update_cell(args.id, &fields).into_diagnostic()?;
            if !global.quiet {
                println!("{} Updated cell {}", style("✓").green(), style(args.id).cyan());
            }
        }
        CellCommands::Delete(args) => {
            if output::confirm_delete("cell", args.id, args.yes)? {
                store.delete_cell(args.id).into_diagnostic()?;
                if !global.quiet {
                    println!("{} Deleted cell {}", style("✓").green(), style(args.id).cyan());
                }
            }
        }
        CellCommands::Show(args) => {
            let cell = store.get_cell(args.id).into_diagnostic()?;
            output::emit_record(&cell);
        }
        CellCommands::List => {
            let cells = store.list_cells().into_diagnostic()?;
            output::emit_list(&cells, global.format, global.quiet)?;
        }
    }

    Ok(())
}
