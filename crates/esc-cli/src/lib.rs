//! # esc-cli: Command-Line Interface for Elastic Stability Checks
//!
//! Provides the `esc` binary over `esc-core` and `esc-criteria`.
//!
//! ## Subcommands
//!
//! - `esc symmetry`: Symmetry conformance for a crystal system.
//! - `esc stability`: Born mechanical stability for a crystal system.
//! - `esc check`: Both of the above.
//! - `esc classify`: Infer the most specific Laue class.
//! - `esc compliance`: Print the compliance tensor.
//!
//! ```bash
//! esc check cij.txt --system hexagonal
//! esc -v --config esc.yaml stability cij.json --system monoclinic
//! esc classify cij.yaml --tolerance 1e-6
//! ```
//!
//! Exit status is 0 when every evaluated condition holds and 1 otherwise,
//! including on input or configuration errors.

pub mod check;
pub mod config;
pub mod input;
pub mod inspect;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_modules_are_accessible() {
        let _ = std::any::type_name::<check::CheckArgs>();
        let _ = std::any::type_name::<config::EscConfig>();
        let _ = std::any::type_name::<input::TensorFormat>();
        let _ = std::any::type_name::<inspect::FileArgs>();
    }
}
