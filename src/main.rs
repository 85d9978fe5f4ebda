mod app;
mod cli;
mod clipboard;
mod color;
mod config;
mod event;
mod gradient;
mod logging;
mod tui;
mod ui;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli_opts = cli::Cli::parse();
    let config = config::Config::from_cli(&cli_opts);

    let log_path = config::default_log_path();
    if let Err(err) = logging::init(&log_path) {
        eprintln!("Logging disabled: {err:#}");
    }

    if let Some(command) = cli_opts.command {
        return cli::run(command, &config);
    }

    tracing::info!(?config, "starting interactive session");
    let mut app = app::App::new(&config, Box::new(clipboard::SystemClipboard::default()));
    let mut terminal = tui::init()?;
    let result = event::run(&mut app, &mut terminal);

    tui::restore()?;

    result
}
