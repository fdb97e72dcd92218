//! # Criteria Commands
//!
//! `esc symmetry`, `esc stability` and `esc check` evaluate a tensor file
//! against a crystal system.
//!
//! ```bash
//! esc symmetry cij.txt --system hexagonal
//! esc check cij.json --system trigonal --exact --format json
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use esc_core::Comparison;
use esc_criteria::{ConditionSet, Criterion, CrystalSystem, Reporter, Validator};

use crate::config::{EscConfig, OutputFormat};
use crate::input::load_tensor;

/// Arguments shared by the criteria commands.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Tensor file (.json, .yaml/.yml, or plain text).
    pub file: PathBuf,

    /// Crystal system to check against (cubic, hexagonal, tetragonal,
    /// rhombohedral/trigonal, orthorhombic, monoclinic, triclinic).
    #[arg(long, short)]
    pub system: CrystalSystem,
}

/// JSON report for one file.
#[derive(Debug, Serialize)]
pub struct CheckReport<'a> {
    pub file: &'a Path,
    pub system: CrystalSystem,
    pub comparison: Comparison,
    pub passed: bool,
    pub results: &'a [ConditionSet],
}

/// Evaluate `criteria` and write to stdout/stderr. Returns the exit code.
pub fn run_check(args: &CheckArgs, criteria: &[Criterion], config: &EscConfig) -> Result<u8> {
    let stdout = std::io::stdout();
    run_check_with(
        args,
        criteria,
        config,
        &mut stdout.lock(),
        &mut Reporter::stderr(),
    )
}

/// Evaluate `criteria`, writing summaries to `out` and failure lines
/// through `reporter`.
pub fn run_check_with<W: Write, E: Write>(
    args: &CheckArgs,
    criteria: &[Criterion],
    config: &EscConfig,
    out: &mut W,
    reporter: &mut Reporter<E>,
) -> Result<u8> {
    let tensor = load_tensor(&args.file)?;
    let comparison = config.comparison()?;
    if !tensor.is_symmetric(&comparison) {
        tracing::warn!(file = %args.file.display(), "tensor is not symmetric");
    }

    let results: Vec<ConditionSet> = criteria
        .iter()
        .map(|&criterion| {
            Validator::new(criterion, args.system)
                .with_comparison(comparison)
                .conditions(&tensor)
        })
        .collect();
    let passed = results.iter().all(ConditionSet::all_hold);

    match config.format {
        OutputFormat::Text => {
            for set in &results {
                reporter.evaluate(set);
                let held = set.iter().filter(|c| c.holds).count();
                writeln!(
                    out,
                    "{} ({}): {held}/{} conditions hold",
                    set.criterion(),
                    set.class(),
                    set.len()
                )?;
            }
            writeln!(out, "{}", if passed { "PASS" } else { "FAIL" })?;
        }
        OutputFormat::Json => {
            let report = CheckReport {
                file: &args.file,
                system: args.system,
                comparison,
                passed,
                results: &results,
            };
            let json = serde_json::to_string_pretty(&report).context("failed to encode report")?;
            writeln!(out, "{json}")?;
        }
    }

    tracing::info!(file = %args.file.display(), system = %args.system, passed, "check finished");
    Ok(if passed { 0 } else { 1 })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEXAGONAL: &str = "\
297.85 126.9  104.5  0 0 0
126.9  297.85 104.5  0 0 0
104.5  104.5  286.9  0 0 0
0 0 0 59.225 0 0
0 0 0 0 59.225 0
0 0 0 0 0 85.475
";

    fn run(
        content: &str,
        system: CrystalSystem,
        criteria: &[Criterion],
        config: &EscConfig,
    ) -> (u8, String, String) {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("cij.txt");
        std::fs::write(&file, content).unwrap();
        let args = CheckArgs { file, system };
        let mut out = Vec::new();
        let mut reporter = Reporter::new(Vec::new());
        let code = run_check_with(&args, criteria, config, &mut out, &mut reporter).unwrap();
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(reporter.into_inner()).unwrap(),
        )
    }

    #[test]
    fn hexagonal_passes_both_criteria() {
        let (code, out, err) = run(
            HEXAGONAL,
            CrystalSystem::Hexagonal,
            &[Criterion::Symmetry, Criterion::Stability],
            &EscConfig::default(),
        );
        assert_eq!(code, 0);
        assert!(err.is_empty());
        assert_eq!(
            out,
            "symmetry (hexagonal): 4/4 conditions hold\n\
             stability (hexagonal): 4/4 conditions hold\n\
             PASS\n"
        );
    }

    #[test]
    fn wrong_system_fails_with_lines() {
        let (code, out, err) = run(
            HEXAGONAL,
            CrystalSystem::Cubic,
            &[Criterion::Symmetry],
            &EscConfig::default(),
        );
        assert_eq!(code, 1);
        assert!(out.ends_with("FAIL\n"));
        assert_eq!(
            err,
            "Criterion C_{11} = C_{22} = C_{33} is not satisfied!\n\
             Criterion C_{44} = C_{55} = C_{66} is not satisfied!\n\
             Criterion C_{12} = C_{13} = C_{23} = C_{21} = C_{31} = C_{32} is not satisfied!\n"
        );
    }

    #[test]
    fn exact_mode_flags_rounding() {
        let config = EscConfig {
            exact: true,
            ..EscConfig::default()
        };
        let (code, _, err) = run(HEXAGONAL, CrystalSystem::Hexagonal, &[Criterion::Symmetry], &config);
        assert_eq!(code, 1);
        assert!(err.contains("C_{66} = 1/2 (C_{11} - C_{12})"));
    }

    #[test]
    fn json_report_shape() {
        let config = EscConfig {
            format: OutputFormat::Json,
            ..EscConfig::default()
        };
        let (code, out, err) = run(
            HEXAGONAL,
            CrystalSystem::Hexagonal,
            &[Criterion::Stability],
            &config,
        );
        assert_eq!(code, 0);
        assert!(err.is_empty());
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["passed"], true);
        assert_eq!(value["system"], "hexagonal");
        assert_eq!(value["comparison"]["mode"], "tolerant");
        assert_eq!(value["results"][0]["criterion"], "stability");
        assert_eq!(value["results"][0]["conditions"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn unreadable_tensor_is_an_error() {
        let args = CheckArgs {
            file: PathBuf::from("/nonexistent/cij.txt"),
            system: CrystalSystem::Cubic,
        };
        let mut out = Vec::new();
        let mut reporter = Reporter::new(Vec::new());
        let result = run_check_with(
            &args,
            &[Criterion::Symmetry],
            &EscConfig::default(),
            &mut out,
            &mut reporter,
        );
        assert!(result.is_err());
    }
}
