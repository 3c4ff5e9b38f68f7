//! Subcommand handlers.

use crate::cli::{Args, Command};
use anyhow::{Context, Result};
use muawin_api::{AppState, Server};
use muawin_core::{AppConfig, PatientId, PatientRecord};
use muawin_store::{PatientStore, SqliteStore};
use std::io::Write;
use std::sync::Arc;

/// Layers the configuration: flags (or their environment variables) over
/// the `--config` file over the built-in defaults.
pub fn resolve_config(args: &Args) -> Result<AppConfig> {
    let (host, port) = match &args.command {
        Some(Command::Serve { host, port }) => (host.clone(), *port),
        _ => (None, None),
    };
    let config = AppConfig::load(args.config.as_deref())?.with_overrides(
        args.database.clone(),
        host,
        port,
    );
    Ok(config)
}

/// Opens the store named by the configuration.
pub async fn open_store(config: &AppConfig) -> Result<SqliteStore> {
    SqliteStore::open(&config.database.path)
        .await
        .with_context(|| format!("opening {}", config.database.path.display()))
}

/// Runs the web server until Ctrl-C.
pub async fn cmd_serve(config: &AppConfig) -> Result<()> {
    let addr = config.socket_addr()?;
    let store = open_store(config).await?;
    let state = AppState::new(Arc::new(store));
    Server::bind(addr, state)
        .await
        .with_context(|| format!("binding {addr}"))?
        .run()
        .await?;
    Ok(())
}

/// Writes every patient as a table.
pub async fn cmd_list(store: &dyn PatientStore, out: &mut impl Write) -> Result<()> {
    let records = store.list_all().await?;
    out.write_all(format_table(&records).as_bytes())?;
    Ok(())
}

/// Writes one patient as pretty JSON, or a not-found line.
pub async fn cmd_show(store: &dyn PatientStore, raw_id: &str, out: &mut impl Write) -> Result<()> {
    let id = PatientId::new(raw_id)?;
    match store.lookup(&id).await? {
        Some(record) => writeln!(out, "{}", serde_json::to_string_pretty(&record)?)?,
        None => writeln!(out, "Patient with ID {id} not found.")?,
    }
    Ok(())
}

/// Writes the resolved configuration as TOML.
pub fn cmd_config(config: &AppConfig, out: &mut impl Write) -> Result<()> {
    out.write_all(config.to_toml_string()?.as_bytes())?;
    Ok(())
}

/// Formats the sidebar columns as a plain-text table.
pub fn format_table(records: &[PatientRecord]) -> String {
    let headers = ["id", "name", "age", "gender", "language"];
    let rows: Vec<[String; 5]> = records
        .iter()
        .map(|r| {
            [
                r.id.to_string(),
                r.name.clone(),
                r.age.to_string(),
                r.gender.to_string(),
                r.language.to_string(),
            ]
        })
        .collect();

    let mut widths = headers.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let mut push_line = |cells: &[&str]| {
        let line: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    };
    push_line(&headers);
    for row in &rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        push_line(&cells);
    }
    if rows.is_empty() {
        out.push_str("(no patients)\n");
    }
    out
}
