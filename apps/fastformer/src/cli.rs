//! Command line interface definition

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// fastformer - Build transformer encoder specifications
#[derive(Parser)]
#[command(name = "fastformer")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Build transformer encoder specifications from flags and parameter files")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Global arguments available for all commands
#[derive(Parser)]
pub struct GlobalArgs {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging to stderr
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Build an encoder from a parameter file and flags
    #[command(alias = "enc")]
    Encoder(EncoderArgs),

    /// List the encoder parameters and their defaults
    Params,
}

/// Encoder flags
///
/// The serialized form of this struct is the namespace the encoder builder is
/// bound from. Control flags are skipped; unset parameter flags are omitted
/// so they do not override the parameter file.
#[derive(Args, Serialize, Debug)]
pub struct EncoderArgs {
    /// Parameter file (.toml or .json)
    #[arg(long, value_name = "PATH")]
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Table of the parameter file holding the encoder parameters
    #[arg(long, value_name = "NAME", requires = "config")]
    #[serde(skip)]
    pub section: Option<String>,

    /// Fail on flags that are not encoder parameters
    #[arg(long)]
    #[serde(skip)]
    pub strict: bool,

    /// Number of encoder layers
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n_layers: Option<usize>,

    /// Attention heads per layer
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n_heads: Option<usize>,

    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_dimensions: Option<usize>,

    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_dimensions: Option<usize>,

    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed_forward_dimensions: Option<usize>,

    /// Attention mechanism (full, linear, causal-linear)
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attention_type: Option<String>,

    /// Feed-forward activation (relu, gelu)
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activation: Option<String>,

    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropout: Option<f64>,

    #[arg(long, value_name = "BOOL")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_normalization: Option<bool>,

    /// Random seed for the training run
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Device to place the model on
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_encoder_flags_parse() {
        let cli = Cli::parse_from([
            "fastformer",
            "encoder",
            "--n-layers",
            "6",
            "--final-normalization",
            "false",
            "--seed",
            "7",
        ]);
        let Commands::Encoder(args) = cli.command else {
            panic!("expected the encoder command");
        };
        assert_eq!(args.n_layers, Some(6));
        assert_eq!(args.final_normalization, Some(false));
        assert_eq!(args.seed, Some(7));
        assert!(!args.strict);
    }
}
