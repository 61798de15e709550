//! `run` command implementation.

use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing::info;

use contracts::{ChannelTag, ConversionPlan, EventSink, LegGeometry};
use event_log::LcmLogSink;
use mux_engine::{MuxStats, Multiplexer};

use crate::cli::RunArgs;

/// Execute the `run` command
pub async fn run_convert(args: &RunArgs) -> Result<()> {
    info!(config = %args.config.display(), "Loading configuration");

    if !args.config.exists() {
        anyhow::bail!("Configuration file not found: {}", args.config.display());
    }

    let mut plan = config_loader::ConfigLoader::load_from_path(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;

    // Apply CLI overrides
    if let Some(ref source) = args.source {
        info!(source = %source.display(), "Overriding source path from CLI");
        plan.source.path = source.clone();
    }
    if let Some(ref output) = args.output {
        info!(output = %output.display(), "Overriding output path from CLI");
        plan.output.path = output.clone();
    }

    let geometry = LegGeometry::new(plan.geometry.num_legs)?;

    info!(
        source = %plan.source.path.display(),
        output = %plan.output.path.display(),
        num_legs = geometry.num_legs,
        num_joints = geometry.num_joints,
        "Configuration loaded"
    );

    let recording = ingestion::load_recording(&plan.source.path)
        .with_context(|| format!("Failed to load recording {}", plan.source.path.display()))?;
    let sequences = ingestion::build_sequences(recording, &geometry)
        .context("Recording failed input-integrity checks")?;

    if args.dry_run {
        info!("Dry run mode - configuration and recording are valid, exiting");
        print_plan_summary(&plan, &sequences.iter().map(|s| (s.tag(), s.len())).collect::<Vec<_>>());
        return Ok(());
    }

    // Epoch captured once, before any event is emitted
    let epoch_micros = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("System clock before Unix epoch")?
        .as_micros() as i64;

    let mut sink = LcmLogSink::create(&plan.output.path, plan.output.overwrite)
        .with_context(|| format!("Failed to create log {}", plan.output.path.display()))?;

    let mux = Multiplexer::new(sequences, geometry, epoch_micros)?
        .with_completion_observer(Arc::new(|tag| {
            info!(channel = %tag, "channel complete");
        }));

    info!("Starting conversion...");
    let started = Instant::now();

    let result = mux.run(&mut sink).await;
    // Close even when the pass failed; a partial log must still be flushed.
    sink.close().await?;

    let stats = result.context("Conversion failed; the output log is incomplete")?;

    info!(
        events = stats.total_events(),
        timeline_entries = stats.timeline_entries,
        duration_secs = started.elapsed().as_secs_f64(),
        "Conversion completed successfully"
    );
    print_stats_summary(&stats);

    Ok(())
}

fn print_plan_summary(plan: &ConversionPlan, counts: &[(ChannelTag, usize)]) {
    println!("Conversion plan:");
    println!("  source: {}", plan.source.path.display());
    println!("  output: {}", plan.output.path.display());
    println!("  legs: {}", plan.geometry.num_legs);
    println!("  samples:");
    for (tag, count) in counts {
        println!("    {tag}: {count}");
    }
}

fn print_stats_summary(stats: &MuxStats) {
    println!("\nConversion summary");
    println!("==================");
    for tag in ChannelTag::ALL {
        println!("  {:<18} {:>10} events", tag.as_str(), stats.events_for(tag));
    }
    println!("  {:<18} {:>10} events", "total", stats.total_events());
    println!("  {:<18} {:>10} entries", "timeline", stats.timeline_entries);
}
