use std::io;

use clap::CommandFactory;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tobitmap::api::convert_file;

use super::args::CliArgs;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        // stdout carries the literal, so logs go to stderr
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_writer(io::stderr)
            .init();
    }

    let params = match args.to_params() {
        Ok(params) => params,
        Err(e) => CliArgs::command().error(e.kind(), e).exit(),
    };

    info!(
        "Converting {:?} (channel={}, level={}, resize={:?})",
        args.input, params.channel, params.level, params.resize
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let converted = convert_file(&args.input, &args.output, &params, &mut out)?;

    info!(
        "Successfully converted: {:?} -> {:?} ({} bytes)",
        args.input,
        args.output,
        converted.packed.bytes.len()
    );
    Ok(())
}
