//! fastformer - Build transformer encoder specifications
//!
//! Binds the encoder builder from a parameter file and the command line, in
//! that order, and prints what it constructs.

mod cli;
mod display;
mod encoder;
mod error;

use crate::cli::{Cli, Commands, EncoderArgs};
use crate::display::OutputRenderer;
use crate::encoder::{EncoderBuilder, EncoderSpec};
use crate::error::CliError;
use clap::Parser;
use fastformer_builder::{
    load_dictionary, namespace_fields, ConfigurableBuilder, Parameterized,
    DICTIONARY_STRICT_DEFAULT,
};
use std::process;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.global.json, cli.global.debug);

    if let Err(e) = run(cli) {
        error!("Application error: {}", e);
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Main application logic
fn run(cli: Cli) -> Result<(), CliError> {
    debug!("Starting fastformer v{}", env!("CARGO_PKG_VERSION"));
    let renderer = OutputRenderer::new(cli.global.json);

    match cli.command {
        Commands::Encoder(args) => {
            let spec = build_encoder(&args)?;
            renderer.render_encoder(&spec)?;
        }
        Commands::Params => {
            renderer.render_parameters(&EncoderBuilder::new().parameters())?;
        }
    }

    Ok(())
}

/// Bind defaults, then the parameter file, then the flags
fn build_encoder(args: &EncoderArgs) -> Result<EncoderSpec, CliError> {
    let mut builder = EncoderBuilder::new();

    if let Some(path) = &args.config {
        let parameters = load_dictionary(path, args.section.as_deref())?;
        builder.bind(parameters, DICTIONARY_STRICT_DEFAULT)?;
    }

    let report = builder.bind(namespace_fields(args)?, args.strict)?;
    for name in &report.ignored {
        info!(parameter = %name, "flag is not an encoder parameter");
    }

    Ok(builder.get()?)
}

fn init_tracing(json_mode: bool, debug_enabled: bool) {
    let default_filter = if debug_enabled {
        "warn,fastformer=debug,fastformer_builder=trace"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    if json_mode {
        tracing_subscriber::fmt()
            .json()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .init();
    }
}
