use super::Context;
use crate::reports;
use clap::Args;
use keyanneal::error::{KaResult, KeyAnnealError};
use keyanneal::layouts::LayoutStore;
use keyanneal::stats::StatsReport;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Only report layouts whose name contains this text
    #[arg(long)]
    pub layout: Option<String>,

    /// Also draw each layout
    #[arg(long, default_value_t = false)]
    pub grid: bool,
}

pub fn run(args: &ValidateArgs, ctx: &Context) -> KaResult<()> {
    let store = LayoutStore::load_or_default(&ctx.layouts_path)?;
    let mut keyboards = store.keyboards()?;

    if let Some(filter) = &args.layout {
        let filter = filter.to_lowercase();
        keyboards.retain(|(name, _)| name.to_lowercase().contains(&filter));
        if keyboards.is_empty() {
            return Err(KeyAnnealError::Config(format!(
                "No stored layout matches '{}'",
                filter
            )));
        }
    }

    println!("\n🔎 === LAYOUT AUDIT === 🔎");
    if args.grid {
        for (name, kb) in &keyboards {
            reports::print_layout_grid(name, kb);
        }
    }

    let report = StatsReport::compute(&keyboards, &ctx.cf);
    reports::print_stats_table(&report);

    report.save_to_json(&ctx.stats_path)?;
    info!("💾 Stats written to {}", ctx.stats_path);
    Ok(())
}
