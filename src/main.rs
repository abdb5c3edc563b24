use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use meterframe_rs::{
    decode_frame_with, init_logger, log_error, log_info, report, table_number,
    util::hex::decode_hex, DecodeOptions, ResultCodeRule,
};

#[derive(Parser)]
#[command(name = "meterframe-cli")]
#[command(about = "CLI tool for decoding metering protocol frames")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode one frame given as hex text
    Decode {
        hex: String,
        /// Print JSON instead of the text report
        #[arg(long)]
        json: bool,
        /// Bound the data-unit scan by the declared length field
        #[arg(long)]
        strict_length: bool,
        /// Gate result codes on the AFN without its direction bit
        #[arg(long)]
        masked_result_code: bool,
    },
    /// Print the table number for a 2-byte DA given as hex
    Table { da: String },
}

fn main() -> Result<()> {
    init_logger();

    let cli = Cli::parse();

    match cli.command {
        Commands::Decode {
            hex,
            json,
            strict_length,
            masked_result_code,
        } => {
            let rule = if masked_result_code {
                ResultCodeRule::Masked
            } else {
                ResultCodeRule::Raw
            };
            let options = DecodeOptions::new()
                .strict_length(strict_length)
                .result_code_rule(rule);
            let bytes = decode_hex(&hex).context("invalid hex frame")?;
            let frame = match decode_frame_with(&bytes, &options) {
                Ok(frame) => frame,
                Err(e) => {
                    log_error(&format!("Failed to decode {} byte frame: {e}", bytes.len()));
                    return Err(e).context("failed to decode frame");
                }
            };
            log_info(&format!(
                "Decoded {} data units, {} of {} bytes",
                frame.data_units.len(),
                frame.consumed,
                bytes.len()
            ));
            if json {
                println!("{}", report::render_json(&frame)?);
            } else {
                println!("{}", report::render(&frame));
            }
        }
        Commands::Table { da } => {
            let bytes = decode_hex(&da).context("invalid DA")?;
            let &[da_h, da_l] = bytes.as_slice() else {
                bail!("DA must be exactly 2 bytes, got {}", bytes.len());
            };
            println!("{}", table_number(da_h, da_l));
        }
    }

    Ok(())
}
