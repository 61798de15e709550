//! `info` command implementation.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::cli::InfoArgs;

/// Configuration info for JSON output
#[derive(Serialize)]
struct ConfigInfo {
    source: String,
    output: String,
    overwrite: bool,
    num_legs: u8,
    num_joints: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    channels: Option<Vec<ChannelInfo>>,
}

#[derive(Serialize)]
struct ChannelInfo {
    channel: String,
    samples: usize,
}

/// Execute the `info` command
pub fn run_info(args: &InfoArgs) -> Result<()> {
    info!(config = %args.config.display(), "Reading configuration");

    let plan = config_loader::ConfigLoader::load_from_path(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;

    let channels = if args.samples {
        let recording = ingestion::load_recording(&plan.source.path).with_context(|| {
            format!("Failed to load recording {}", plan.source.path.display())
        })?;
        Some(
            recording
                .sample_counts()
                .into_iter()
                .map(|(tag, samples)| ChannelInfo {
                    channel: tag.as_str().to_string(),
                    samples,
                })
                .collect(),
        )
    } else {
        None
    };

    let config_info = ConfigInfo {
        source: plan.source.path.display().to_string(),
        output: plan.output.path.display().to_string(),
        overwrite: plan.output.overwrite,
        num_legs: plan.geometry.num_legs,
        num_joints: plan.geometry.num_legs.saturating_mul(3),
        channels,
    };

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&config_info).context("Failed to serialize info")?
        );
    } else {
        print_info(&config_info);
    }

    Ok(())
}

fn print_info(config_info: &ConfigInfo) {
    println!("Conversion plan");
    println!("===============");
    println!("  source: {}", config_info.source);
    println!(
        "  output: {} (overwrite: {})",
        config_info.output, config_info.overwrite
    );
    println!(
        "  geometry: {} legs, {} joints",
        config_info.num_legs, config_info.num_joints
    );
    if let Some(channels) = &config_info.channels {
        println!("  channels:");
        for channel in channels {
            println!("    {:<18} {:>10} samples", channel.channel, channel.samples);
        }
    }
}
