use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process;

mod config;
mod menu;
mod prompt;
mod state;

use state::AppState;

#[derive(Parser, Debug)]
#[command(name = "tally", version, about = "Track expenses and summarize them by month or category")]
struct Cli {
    /// Expense file to read and write (overrides the config file)
    #[arg(long)]
    file: Option<PathBuf>,

    /// Config file (default: ~/.tally/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        log::error!("{:#}", err);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let cfg = config::select_config(cli.config, state::tally_home())?;
    let store_path = config::resolve_store_path(cli.file, &cfg);
    log::debug!("using store {}", store_path.display());

    let mut app = AppState::open(&store_path)?;
    log::info!(
        "loaded {} expenses from {}",
        app.expenses().len(),
        app.path().display()
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    menu::run(&mut app, &mut input, &mut output)
}
