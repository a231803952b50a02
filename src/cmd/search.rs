use super::Context;
use crate::reports;
use clap::{ArgMatches, Args};
use keyanneal::config::SearchParams;
use keyanneal::error::KaResult;
use keyanneal::layouts::LayoutStore;
use keyanneal::optimizer::{
    iteration_budget, AnnealProgress, OptimizationOptions, Optimizer, ProgressCallback,
};
use keyanneal::scorer::MetricKind;
use keyanneal::stats::StatsReport;
use std::time::Instant;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub params: SearchParams,

    /// Metrics to optimize, comma separated
    #[arg(
        long,
        value_delimiter = ',',
        default_values = ["sfb", "alternate", "roll", "3roll", "combined"]
    )]
    pub targets: Vec<MetricKind>,

    /// JSON file with search parameters. Flags given on the command line win.
    #[arg(long)]
    pub config: Option<String>,

    /// Print results without writing them to the layout file
    #[arg(long, default_value_t = false)]
    pub no_save: bool,
}

struct LogProgress;

impl ProgressCallback for LogProgress {
    fn on_progress(&self, label: &str, p: &AnnealProgress) {
        info!(
            "[{}] Score: {}, Temp: {:.2}, Epochs Left: {}",
            label, p.score, p.temperature, p.remaining
        );
    }
}

pub fn run(args: &SearchArgs, matches: &ArgMatches, ctx: &Context) -> KaResult<()> {
    let params = match &args.config {
        Some(path) => {
            info!("⚙️  Loading search config from: {}", path);
            let mut from_file = SearchParams::load_from_file(path)?;
            from_file.merge_from_cli(&args.params, matches);
            from_file
        }
        None => args.params.clone(),
    };

    let mut store = LayoutStore::load_or_default(&ctx.layouts_path)?;

    info!(
        "🔥 Finding optimal keyboards: {} targets, T0={}, ~{} iterations each",
        args.targets.len(),
        params.start_temp,
        iteration_budget(params.start_temp, params.cool_rate)
    );

    let start = Instant::now();
    let optimizer = Optimizer::new(&ctx.cf, OptimizationOptions::from(&params));
    let results = optimizer.run_all(&args.targets, &LogProgress)?;
    info!("✅ Search finished in {:.1}s", start.elapsed().as_secs_f32());

    for r in &results {
        store.insert(r.name(), &r.keyboard);
    }

    let report = StatsReport::compute(&store.keyboards()?, &ctx.cf);
    reports::print_stats_table(&report);
    report.save_to_json(&ctx.stats_path)?;

    for r in &results {
        reports::print_layout_grid(&r.name(), &r.keyboard);
        println!("Layout: {}", r.keyboard.layout());
        println!(
            "Score: {} ({} iterations, {} accepted)",
            r.annealed.score, r.annealed.iterations, r.annealed.accepted
        );
    }

    if args.no_save {
        info!("Layouts not saved (--no-save).");
    } else {
        store.save(&ctx.layouts_path)?;
        info!("💾 {} layouts written to {}", store.len(), ctx.layouts_path);
    }

    Ok(())
}
