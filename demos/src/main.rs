//! Runs every puzzle sample through the gridwalk engines and prints the
//! answers. Set `RUST_LOG=debug` to watch the searches.

use anyhow::{Context, Result};
use gridwalk_demos::RUNS;

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    log::info!("solving {} puzzle samples", RUNS.len());
    let mut last_day = 0;
    for run in RUNS {
        if run.day != last_day {
            log::info!("day {}", run.day);
            last_day = run.day;
        }
        let value = run
            .answer()
            .with_context(|| format!("day {} part {} on sample {:?}", run.day, run.part, run.sample))?;
        println!("part {} ({}) {}", run.part, run.sample, value);
    }
    Ok(())
}
