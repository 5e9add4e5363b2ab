//! Command-line arguments

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use classgrid_domain::{codec, CellCoord, ClassGridError, Day, EntityId, Role, Shift, Slot};

#[derive(Debug, Parser)]
#[command(name = "classgrid")]
#[command(version)]
#[command(about = "View and edit the weekly timetable of a class", long_about = None)]
pub struct Cli {
    /// Config file (JSON or TOML). Without it the environment and the
    /// standard locations are tried.
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(long, env = "CLASSGRID_API_BASE_URL", global = true)]
    pub base_url: Option<String>,

    #[clap(long, env = "CLASSGRID_API_TIMEOUT_MS", global = true)]
    pub timeout_ms: Option<u64>,

    #[clap(long, env = "CLASSGRID_API_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    #[clap(long, env = "CLASSGRID_ROLE", global = true)]
    pub role: Option<Role>,

    #[clap(long, env = "CLASSGRID_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show class details, the three shift tables and the hours summary
    Show {
        #[clap(long = "class", value_parser = parse_entity_id)]
        class_id: EntityId,
    },
    /// Assign a subject and teacher to an empty cell
    Assign {
        #[command(flatten)]
        cell: CellArgs,

        /// Subject id
        #[clap(long, value_parser = parse_entity_id)]
        subject: Option<EntityId>,

        /// Teacher id
        #[clap(long, value_parser = parse_entity_id)]
        teacher: Option<EntityId>,
    },
    /// Remove the assignment of a cell
    Remove {
        #[command(flatten)]
        cell: CellArgs,
    },
}

impl Command {
    /// Class the command targets.
    pub const fn class_id(&self) -> &EntityId {
        match self {
            Self::Show { class_id } => class_id,
            Self::Assign { cell, .. } | Self::Remove { cell } => &cell.class_id,
        }
    }
}

/// A class and one of its 30 cells.
#[derive(Debug, Args)]
pub struct CellArgs {
    #[clap(long = "class", value_parser = parse_entity_id)]
    pub class_id: EntityId,

    /// Weekday, e.g. `segunda` or `Terça-feira`
    #[clap(long, value_parser = parse_day)]
    pub day: Day,

    /// `M`, `T`, `N` or a label such as `manhã`
    #[clap(long, value_parser = parse_shift)]
    pub shift: Shift,

    /// `AB` or `CD`
    #[clap(long, value_parser = parse_slot)]
    pub slot: Slot,
}

impl CellArgs {
    /// Cell named by the day, shift and slot flags.
    pub const fn coord(&self) -> CellCoord {
        CellCoord::new(self.day, self.shift, self.slot)
    }
}

fn parse_entity_id(raw: &str) -> Result<EntityId, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("id must not be empty".to_string());
    }
    Ok(EntityId::parse(trimmed))
}

fn parse_day(raw: &str) -> Result<Day, ClassGridError> {
    codec::decode_day(raw)
}

fn parse_shift(raw: &str) -> Result<Shift, ClassGridError> {
    codec::decode_shift(raw)
}

fn parse_slot(raw: &str) -> Result<Slot, ClassGridError> {
    codec::decode_slot(&raw.trim().to_ascii_uppercase())
}
