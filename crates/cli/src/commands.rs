use std::io::Write;
use std::time::Duration;

use anyhow::Context;
use serde::Serialize;

use playersearch_core::csv;
use playersearch_core::player::PlayerRecord;
use playersearch_lookup::{HttpPlayerLookup, PlayerLookup};
use playersearch_store::{ArtifactStore, StoreConfig};

use crate::args::{Cli, Command, ExportArgs, SearchArgs, ShowArgs};
use crate::table;

/// Summary printed after an export, for scripts that parse the output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSummary {
    pub search_term: String,
    pub player_count: usize,
    pub filepath: Option<String>,
    pub csv_content: String,
    pub players: Vec<PlayerRecord>,
}

pub async fn dispatch(cli: Cli) -> anyhow::Result<()> {
    let store = ArtifactStore::new(StoreConfig::new(cli.global.data_dir.clone()));

    match cli.cmd {
        Command::Search(args) => {
            let lookup = build_lookup(&cli.global.lookup_url, cli.global.timeout_secs)?;
            let out = run_search(&lookup, &args).await?;
            print_stdout(&out)
        }
        Command::Export(args) => {
            let lookup = build_lookup(&cli.global.lookup_url, cli.global.timeout_secs)?;
            let out = run_export(&lookup, &store, &args).await?;
            print_stdout(&out)
        }
        Command::Files => print_stdout(&run_files(&store).await?),
        Command::Show(args) => print_stdout(&run_show(&store, &args).await?),
    }
}

fn build_lookup(url: &str, timeout_secs: u64) -> anyhow::Result<HttpPlayerLookup> {
    HttpPlayerLookup::new(url, Duration::from_secs(timeout_secs))
        .context("failed to build lookup client")
}

fn print_stdout(text: &str) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

pub async fn run_search(lookup: &dyn PlayerLookup, args: &SearchArgs) -> anyhow::Result<String> {
    tracing::info!(query = %args.name, max = args.max, "Searching players");
    let players = lookup
        .search(&args.name, args.max)
        .await
        .with_context(|| format!("search for {:?} failed", args.name))?;

    let mut out = table::render(&players);
    if args.verbose {
        for (i, player) in players.iter().enumerate() {
            out.push_str(&format!("\n--- Player {} ---\n", i + 1));
            out.push_str(&serde_json::to_string_pretty(player)?);
            out.push('\n');
        }
    }
    Ok(out)
}

pub async fn run_export(
    lookup: &dyn PlayerLookup,
    store: &ArtifactStore,
    args: &ExportArgs,
) -> anyhow::Result<String> {
    tracing::info!(query = %args.name, max = args.max, "Exporting players");
    let players = lookup
        .search(&args.name, args.max)
        .await
        .with_context(|| format!("search for {:?} failed", args.name))?;

    let csv_content = csv::encode(Some(&players));
    let mut out = String::new();
    out.push_str(&csv_content);
    if !csv_content.ends_with('\n') {
        out.push('\n');
    }

    let filepath = if args.no_save {
        None
    } else {
        let artifact = store
            .persist(&csv_content, &args.name)
            .await
            .context("failed to save CSV")?;
        let path = artifact.path.display().to_string();
        out.push_str(&format!("\nCSV saved to: {path}\n"));
        Some(path)
    };

    let summary = ExportSummary {
        search_term: args.name.clone(),
        player_count: players.len(),
        filepath,
        csv_content,
        players,
    };
    out.push('\n');
    out.push_str(&serde_json::to_string_pretty(&summary)?);
    out.push('\n');
    Ok(out)
}

pub async fn run_files(store: &ArtifactStore) -> anyhow::Result<String> {
    let entries = store.list().await?;
    if entries.is_empty() {
        return Ok(format!(
            "No saved files in {}\n",
            store.root().display()
        ));
    }

    let mut out = String::new();
    for entry in &entries {
        out.push_str(&format!("{:<40} {:>10} bytes\n", entry.name, entry.size_bytes));
    }
    Ok(out)
}

pub async fn run_show(store: &ArtifactStore, args: &ShowArgs) -> anyhow::Result<String> {
    let mut text = store.retrieve(&args.file).await?;
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}
