//! Output rendering shared by all entity commands
//!
//! List and show output is driven entirely by each record type's field
//! schema, so every entity renders the same way without per-entity
//! formatting code.

use console::style;
use dialoguer::Confirm;
use miette::{IntoDiagnostic, Result};
use tabled::{builder::Builder, settings::Style};

use crate::cli::OutputFormat;
use crate::core::entity::Record;

/// Render a list of records in the requested format
pub fn emit_list<R: Record>(records: &[R], format: OutputFormat, quiet: bool) -> Result<()> {
    match format {
        OutputFormat::Table => {
            if records.is_empty() {
                println!("No {} records found.", R::ENTITY);
                return Ok(());
            }

            let mut builder = Builder::default();
            let mut header = vec!["ID".to_string()];
            header.extend(R::schema().iter().map(|f| f.label.to_string()));
            builder.push_record(header);

            for record in records {
                let mut row = vec![record.id().to_string()];
                row.extend(record.display_values());
                builder.push_record(row);
            }

            println!("{}", builder.build().with(Style::sharp()));

            if !quiet {
                println!("{} record(s) found.", style(records.len()).cyan());
            }
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            let mut header = vec!["id".to_string()];
            header.extend(R::schema().iter().map(|f| f.name.to_string()));
            writer.write_record(&header).into_diagnostic()?;

            for record in records {
                let mut row = vec![record.id().to_string()];
                row.extend(record.display_values());
                writer.write_record(&row).into_diagnostic()?;
            }
            writer.flush().into_diagnostic()?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(records).into_diagnostic()?;
            println!("{}", json);
        }
    }

    Ok(())
}

/// Render a single record as label/value pairs
pub fn emit_record<R: Record>(record: &R) {
    println!("{:<22} {}", style("ID:").bold(), record.id());
    for (spec, value) in R::schema().iter().zip(record.display_values()) {
        let rendered = if value.is_empty() { "-".to_string() } else { value };
        println!("{:<22} {}", style(format!("{}:", spec.label)).bold(), rendered);
    }
}

/// Ask before a delete unless --yes was passed
pub fn confirm_delete(entity: &str, id: i64, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }

    Confirm::new()
        .with_prompt(format!("Delete {} {}?", entity, id))
        .default(false)
        .interact()
        .into_diagnostic()
}
