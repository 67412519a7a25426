#![forbid(unsafe_code)]

//! refsheet binary entry point.

use anyhow::Result;
use clap::Parser;
use refsheet_cli::cli::{CliArgs, Command};
use refsheet_cli::{handlers, init_logging};

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose, args.quiet);

    match args.command {
        Command::Single {
            file,
            output,
            format,
        } => {
            handlers::handle_single(
                &file,
                output.as_deref(),
                &format.parse_options(),
                format.indent(),
            )
            .await?;
        }
        Command::Batch {
            pattern,
            output_dir,
            format,
        } => {
            handlers::handle_batch(
                &pattern,
                &output_dir,
                &format.parse_options(),
                format.indent(),
            )
            .await?;
        }
    }

    Ok(())
}
