use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use sysmon::app::App;
use sysmon::config::{self, Config, load_config, load_config_from_path};
use sysmon::event::TerminalInput;
use sysmon::logging::init_file_logging;
use sysmon::scheduler;
use sysmon::system::kill::SignalTerminator;
use sysmon::system::users::UserTable;

#[derive(Parser)]
#[command(
    name = "sysmon",
    about = "Terminal process monitor driven by /proc counters"
)]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Refresh rate in milliseconds
    #[arg(long)]
    refresh_rate: Option<u64>,

    /// Initial sort: cpu, memory, pid
    #[arg(long)]
    sort: Option<String>,

    /// Mount point of the proc filesystem
    #[arg(long)]
    proc_root: Option<PathBuf>,

    /// Write diagnostics to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Emit log lines as JSON
    #[arg(long, default_value_t = false)]
    log_json: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        init_file_logging(path, cli.log_json)?;
    }
    let config = load_config_for_cli(&cli);
    tracing::info!(
        refresh_rate_ms = config.general.refresh_rate_ms,
        proc_root = %config.general.proc_root.display(),
        "starting"
    );

    let users = UserTable::load();
    let mut app = App::new(config, users);
    scheduler::warm_up(&mut app).await;

    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    let mut input = TerminalInput::new();
    let mut terminator = SignalTerminator::new();
    let result = scheduler::run(&mut terminal, &mut app, &mut input, &mut terminator).await;

    ratatui::restore();
    tracing::info!("exiting");

    result
}

fn load_config_for_cli(cli: &Cli) -> Config {
    let mut config = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };

    if let Some(rate) = cli.refresh_rate {
        config.general.refresh_rate_ms = rate;
    }
    if let Some(ref sort) = cli.sort {
        config.general.default_sort = sort.clone();
    }
    if let Some(ref root) = cli.proc_root {
        config.general.proc_root = root.clone();
    }
    if config.general.refresh_rate_ms == 0 {
        tracing::warn!("refresh rate of 0 ms requested, using default");
        config.general.refresh_rate_ms = config::GeneralConfig::default().refresh_rate_ms;
    }

    config
}
