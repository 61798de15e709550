//! `validate` command implementation.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::cli::ValidateArgs;

/// Validation result for JSON output
#[derive(Serialize)]
struct ValidationResult {
    valid: bool,
    config_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<PlanSummary>,
}

#[derive(Serialize)]
struct PlanSummary {
    source: String,
    output: String,
    overwrite: bool,
    num_legs: u8,
    num_joints: u8,
}

/// Execute the `validate` command
pub fn run_validate(args: &ValidateArgs) -> Result<()> {
    info!(config = %args.config.display(), "Validating configuration");

    let result = validate_config(args);

    if args.json {
        let json = serde_json::to_string_pretty(&result)
            .context("Failed to serialize validation result")?;
        println!("{}", json);
    } else {
        print_validation_result(&result);
    }

    if result.valid {
        Ok(())
    } else {
        anyhow::bail!("Configuration validation failed")
    }
}

fn validate_config(args: &ValidateArgs) -> ValidationResult {
    let config_path = args.config.display().to_string();

    if !args.config.exists() {
        return ValidationResult {
            valid: false,
            config_path,
            error: Some(format!("File not found: {}", args.config.display())),
            summary: None,
        };
    }

    match config_loader::ConfigLoader::load_from_path(&args.config) {
        Ok(plan) => ValidationResult {
            valid: true,
            config_path,
            error: None,
            summary: Some(PlanSummary {
                source: plan.source.path.display().to_string(),
                output: plan.output.path.display().to_string(),
                overwrite: plan.output.overwrite,
                num_legs: plan.geometry.num_legs,
                num_joints: plan.geometry.num_legs.saturating_mul(3),
            }),
        },
        Err(e) => ValidationResult {
            valid: false,
            config_path,
            error: Some(e.to_string()),
            summary: None,
        },
    }
}

fn print_validation_result(result: &ValidationResult) {
    if result.valid {
        println!("Configuration is valid: {}", result.config_path);
        if let Some(summary) = &result.summary {
            println!("  source: {}", summary.source);
            println!("  output: {} (overwrite: {})", summary.output, summary.overwrite);
            println!("  legs: {} joints: {}", summary.num_legs, summary.num_joints);
        }
    } else {
        println!("Configuration is INVALID: {}", result.config_path);
        if let Some(error) = &result.error {
            println!("  error: {error}");
        }
    }
}
