mod cli;
mod render;

use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use coin_dashboard_core::models::query::ListQuery;
use coin_dashboard_core::models::settings::Settings;
use coin_dashboard_core::models::view::ViewKind;
use coin_dashboard_core::CoinDashboard;

use cli::{Cli, Command};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "coin_dashboard_core={default_level},coindash={default_level},warn"
        ))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .init();
}

fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    match &cli.config {
        Some(path) => Settings::load_from_file(path)
            .with_context(|| format!("failed to load settings from {}", path.display())),
        None => Ok(Settings::default()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = load_settings(&cli)?;
    debug!(?settings, "settings loaded");
    let vs_currency = settings.vs_currency.clone();
    let dashboard = CoinDashboard::new(settings).context("failed to start dashboard")?;

    let (kind, result) = match cli.command {
        Command::List {
            search,
            sort,
            order,
        } => {
            let query = ListQuery::default()
                .with_search(search)
                .sorted_by(sort, order);
            let result = dashboard.list_view(&query).await.map(|v| render::list(&v));
            (ViewKind::List, result)
        }
        Command::Gallery { filter } => {
            let result = dashboard
                .gallery_view(filter)
                .await
                .map(|v| render::gallery(&v));
            (ViewKind::Gallery, result)
        }
        Command::Detail { id, days } => {
            let result = dashboard
                .detail_view(&id, days)
                .await
                .map(|v| render::detail(&v, &vs_currency));
            (ViewKind::Detail, result)
        }
        Command::Categories => {
            let categories = dashboard.categories().await;
            println!("{}", categories.join("\n"));
            return Ok(ExitCode::SUCCESS);
        }
    };

    match result {
        Ok(text) => {
            print!("{text}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!("{e}");
            eprintln!("{}", kind.error_message());
            Ok(ExitCode::FAILURE)
        }
    }
}
