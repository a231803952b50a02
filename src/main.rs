use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use keyanneal::corpus::FrequencyModel;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Raw text file, one sample per line. Replaces --folder.
    #[arg(global = true, short, long, conflicts_with = "folder")]
    text: Option<String>,

    /// Folder holding monograms.txt, bigrams.txt and trigrams.txt
    #[arg(global = true, short, long, default_value = "CharFreqData/mt-quotes")]
    folder: String,

    #[arg(global = true, short, long, default_value = "layouts.json")]
    layouts: String,

    #[arg(global = true, long, default_value = "stats.json")]
    stats: String,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Search(cmd::search::SearchArgs),
    Validate(cmd::validate::ValidateArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    info!("🚀 Initializing keyanneal...");

    let loaded = match &cli.text {
        Some(path) => FrequencyModel::load_text(path),
        None => FrequencyModel::load_folder(&cli.folder),
    };
    let cf = loaded.unwrap_or_else(|e| {
        error!("❌ Could not load character frequencies: {}", e);
        process::exit(1);
    });

    let ctx = cmd::Context {
        cf,
        layouts_path: cli.layouts.clone(),
        stats_path: cli.stats.clone(),
    };

    // Flags like --seed live in the subcommand's matches, not the root.
    let sub_matches = matches.subcommand().map_or(&matches, |(_, m)| m);

    let result = match &cli.command {
        Commands::Search(args) => cmd::search::run(args, sub_matches, &ctx),
        Commands::Validate(args) => cmd::validate::run(args, &ctx),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
