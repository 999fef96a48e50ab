//! One-shot commands: load the data file, apply one operation, save if it mutated.

use std::io::Write;

use anyhow::{bail, Result};
use clap::Subcommand;

use crate::codec::{DataFile, LoadStatus, Loaded};
use crate::models::Planet;
use crate::report;

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Add a planet and save
    Add {
        name: String,
        /// Diameter in kilometers
        #[arg(allow_negative_numbers = true)]
        diameter: f64,
        /// Mass in kilograms, e.g. 5.972e24
        #[arg(allow_negative_numbers = true)]
        mass: f64,
    },
    /// Delete the first planet with this name and save
    Delete { name: String },
    /// Show the first planet with this name
    Find { name: String },
    /// List all planets in stored order
    List {
        /// Print records as JSON instead of the report format
        #[arg(long)]
        json: bool,
    },
    /// Sort planets by name and save
    Sort,
}

impl Command {
    fn mutates(&self) -> bool {
        matches!(self, Self::Add { .. } | Self::Delete { .. } | Self::Sort)
    }
}

/// Names must be a single non-empty token to survive the data file.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        bail!("Planet name must not be empty");
    }
    if name.chars().any(char::is_whitespace) {
        bail!("Planet name must not contain whitespace: {:?}", name);
    }
    Ok(())
}

/// Run `command` against `data_file`, writing user-facing output to `out`.
///
/// Mutating commands refuse to run when the file only partly decoded, since
/// saving would drop every record after the malformed one.
pub fn execute<W: Write>(command: Command, data_file: &DataFile, out: &mut W) -> Result<()> {
    if let Command::Add { name, .. } = &command {
        validate_name(name)?;
    }

    let Loaded { mut store, status } = data_file.load()?;
    if let LoadStatus::Read {
        malformed: Some(_), ..
    } = &status
    {
        if command.mutates() {
            bail!(
                "Refusing to modify {}: {}",
                data_file.path().display(),
                report::load_summary(&status)
            );
        }
        writeln!(out, "{}", report::load_summary(&status))?;
    }

    match command {
        Command::Add {
            name,
            diameter,
            mass,
        } => {
            store.insert(Planet::new(name.as_str(), diameter, mass));
            data_file.save(&store)?;
            writeln!(out, "Planet {} Was Added Successfully.", name)?;
        }
        Command::Delete { name } => {
            if !store.delete_by_name(&name) {
                bail!("Planet not found: {}", name);
            }
            data_file.save(&store)?;
            writeln!(out, "Planet {} Was Deleted Successfully.", name)?;
        }
        Command::Find { name } => {
            let Some(planet) = store.find_by_name(&name) else {
                bail!("Planet not found: {}", name);
            };
            write!(out, "{}", report::planet_details(planet))?;
        }
        Command::List { json } => {
            if json {
                let planets = store.list_all().unwrap_or_default();
                writeln!(out, "{}", serde_json::to_string_pretty(planets)?)?;
            } else {
                write!(out, "{}", report::planet_listing(&store))?;
            }
        }
        Command::Sort => {
            store.sort_by_name();
            data_file.save(&store)?;
            writeln!(out, "Planets Sorted Alphabetically.")?;
        }
    }

    Ok(())
}
