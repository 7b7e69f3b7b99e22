use crate::format::Format;
use anyhow::bail;
use clap::{Parser, Subcommand};

/// Upper bound on `generate --count`.
pub const MAX_COUNT: usize = 1_000_000;

/// Command-line arguments for the `flakebase` binary.
///
/// Options can also be set through environment variables, and a `.env` file
/// in the working directory is loaded before parsing.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "flakebase",
    version,
    about = "Generate, inspect and convert Snowflake-style 64-bit IDs"
)]
pub struct CliArgs {
    /// Machine ID stamped into generated IDs.
    ///
    /// Must fit the 10-bit machine field (0 to 1023). Only `generate` needs
    /// it.
    ///
    /// Environment variable: `MACHINE_ID`
    #[arg(long, env = "MACHINE_ID", global = true)]
    pub machine_id: Option<i64>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CliCommand {
    /// Generate new IDs, one per line.
    Generate {
        /// Number of IDs to generate.
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Output encoding.
        #[arg(short, long, value_enum, default_value_t = Format::Decimal)]
        format: Format,
    },
    /// Print the fields of an ID.
    Inspect {
        /// The ID to inspect.
        id: String,

        /// Encoding of the given ID.
        #[arg(short, long, value_enum, default_value_t = Format::Decimal)]
        format: Format,
    },
    /// Re-encode an ID.
    Convert {
        /// The ID to convert.
        id: String,

        /// Encoding of the given ID.
        #[arg(long, value_enum, default_value_t = Format::Decimal)]
        from: Format,

        /// Encoding to print.
        #[arg(long, value_enum)]
        to: Format,
    },
}

/// A validated invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliConfig {
    Generate {
        machine_id: i64,
        count: usize,
        format: Format,
    },
    Inspect {
        id: String,
        format: Format,
    },
    Convert {
        id: String,
        from: Format,
        to: Format,
    },
}

impl TryFrom<CliArgs> for CliConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        match args.command {
            CliCommand::Generate { count, format } => {
                let Some(machine_id) = args.machine_id else {
                    bail!("MACHINE_ID must be set to generate IDs");
                };
                if count == 0 {
                    bail!("count must be greater than 0");
                }
                if count > MAX_COUNT {
                    bail!("count ({count}) exceeds the maximum of {MAX_COUNT}");
                }
                Ok(Self::Generate {
                    machine_id,
                    count,
                    format,
                })
            }
            CliCommand::Inspect { id, format } => Ok(Self::Inspect {
                id: id.trim().to_owned(),
                format,
            }),
            CliCommand::Convert { id, from, to } => Ok(Self::Convert {
                id: id.trim().to_owned(),
                from,
                to,
            }),
        }
    }
}
