//! `classgrid` command-line entry point

mod args;
mod render;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use classgrid_core::{shift_tables, Notice, Operation, TimetableManager};
use classgrid_domain::constants::DEFAULT_LOG_LEVEL;
use classgrid_domain::{ApiConfig, CellCoord, Config, EntityId, SelectOption, SessionConfig};
use classgrid_infra::{config, init_tracing, ApiClient, ApiClientConfig};
use classgrid_infra::{RestReferenceDataApi, RestSchedulingApi};

use crate::args::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    init_tracing(&config.log_level);
    tracing::debug!(
        base_url = %config.api.base_url,
        role = %config.session.role,
        "Starting classgrid"
    );

    let session = config.session.to_session();
    let client = ApiClient::new(ApiClientConfig::from(&config.api), session.clone())
        .context("failed to build API client")?;
    let client = Arc::new(client);

    let manager = TimetableManager::new(
        cli.command.class_id().clone(),
        session.role,
        Arc::new(RestSchedulingApi::new(client.clone())),
        Arc::new(RestReferenceDataApi::new(client)),
    );

    let mut notices = manager.load().await;

    match &cli.command {
        Command::Show { .. } => {}
        Command::Assign { cell, subject, teacher } => {
            let coord = cell.coord();
            let subject = subject.as_ref().map(|id| selection(manager.find_subject(id), id));
            let teacher = teacher.as_ref().map(|id| selection(manager.find_teacher(id), id));
            tracing::info!(%coord, "Assigning cell");

            let result = manager.assign(coord, subject.as_ref(), teacher.as_ref()).await;
            notices.extend(Notice::from_result(Operation::Create, &result));
        }
        Command::Remove { cell } => {
            let coord = cell.coord();
            if !manager.grid().is_occupied(coord) {
                tracing::warn!(%coord, "Cell is already empty");
            }

            let result = manager.remove(coord).await;
            notices.extend(Notice::from_result(Operation::Delete, &result));
        }
    }

    print_screen(&manager, &notices, edited_cell(&cli.command));

    if notices.iter().any(Notice::is_error) {
        anyhow::bail!("one or more requests failed");
    }
    Ok(())
}

/// Config from file or environment, then command-line overrides.
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let loaded = match &cli.config {
        Some(path) => config::load_from_file(Some(path.clone())),
        None => config::load(),
    };

    let mut resolved = match (loaded, &cli.token, cli.role) {
        (Ok(config), _, _) => config,
        (Err(_), Some(token), Some(role)) if cli.config.is_none() => Config {
            api: ApiConfig::default(),
            session: SessionConfig { token: token.clone(), role },
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        },
        (Err(err), _, _) => {
            return Err(err).context("no usable configuration: pass --token and --role or a config file");
        }
    };

    if let Some(base_url) = &cli.base_url {
        resolved.api.base_url = base_url.clone();
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        resolved.api.timeout_ms = timeout_ms;
    }
    if let Some(token) = &cli.token {
        resolved.session.token = token.clone();
    }
    if let Some(role) = cli.role {
        resolved.session.role = role;
    }
    if let Some(level) = &cli.log_level {
        resolved.log_level = level.clone();
    }

    Ok(resolved)
}

/// Known choice for an id, or a bare option the backend will validate.
fn selection(known: Option<SelectOption>, id: &EntityId) -> SelectOption {
    known.unwrap_or_else(|| SelectOption::new(id.clone(), id.to_string()))
}

fn edited_cell(command: &Command) -> Option<CellCoord> {
    match command {
        Command::Show { .. } => None,
        Command::Assign { cell, .. } | Command::Remove { cell } => Some(cell.coord()),
    }
}

/// Screen output goes to stdout; logs stay on stderr.
#[allow(clippy::print_stdout)]
fn print_screen(manager: &TimetableManager, notices: &[Notice], edited: Option<CellCoord>) {
    if let Some(info) = manager.class_info() {
        println!("{}", render::class_info(&info));
    }

    println!("Horário da Turma\n");
    for table in shift_tables(&manager.grid()) {
        println!("{}", render::shift_table(&table));
    }

    if let Some(hours) = render::hours(&manager.hours()) {
        println!("{hours}");
    }

    if let Some(coord) = edited {
        println!("{}", classgrid_domain::cell_caption(coord));
    }
    for notice in notices {
        println!("{}", render::notice(notice));
    }
}
