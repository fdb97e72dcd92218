//! # Tensor Inspection Commands
//!
//! `esc classify` prints the most specific Laue class a tensor conforms to.
//! `esc compliance` prints the compliance tensor `S = C⁻¹`.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde_json::json;

use esc_criteria::classify;

use crate::config::{EscConfig, OutputFormat};
use crate::input::load_tensor;

/// A single tensor file.
#[derive(Args, Debug)]
pub struct FileArgs {
    /// Tensor file (.json, .yaml/.yml, or plain text).
    pub file: PathBuf,
}

pub fn run_classify(args: &FileArgs, config: &EscConfig) -> Result<u8> {
    run_classify_with(args, config, &mut std::io::stdout().lock())
}

pub fn run_classify_with<W: Write>(args: &FileArgs, config: &EscConfig, out: &mut W) -> Result<u8> {
    let tensor = load_tensor(&args.file)?;
    let comparison = config.comparison()?;
    let class = classify(&tensor, &comparison);
    match config.format {
        OutputFormat::Text => writeln!(out, "{class} ({})", class.system())?,
        OutputFormat::Json => writeln!(
            out,
            "{}",
            json!({ "class": class, "system": class.system(), "comparison": comparison })
        )?,
    }
    Ok(0)
}

pub fn run_compliance(args: &FileArgs, config: &EscConfig) -> Result<u8> {
    run_compliance_with(args, config, &mut std::io::stdout().lock())
}

pub fn run_compliance_with<W: Write>(
    args: &FileArgs,
    config: &EscConfig,
    out: &mut W,
) -> Result<u8> {
    let tensor = load_tensor(&args.file)?;
    let compliance = tensor
        .compliance()
        .with_context(|| format!("no compliance tensor for {}", args.file.display()))?;
    match config.format {
        OutputFormat::Text => write!(out, "{compliance}")?,
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&compliance).context("failed to encode compliance")?;
            writeln!(out, "{json}")?;
        }
    }
    Ok(0)
}
