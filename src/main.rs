/*!
Main binary for jsonmask.
*/

use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::generate;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use log::debug;
use serde_json::Value;
use std::io::stdout;
use std::io::{self};
use std::{
    fs::{self},
    io::{IsTerminal, Read},
    path::PathBuf,
};

use jsonmask::{Comparison, JsonMask, commands, utils};

/// Filter an input JSON document down to the properties a field mask selects.
#[derive(Parser)]
#[command(name = "jmask", version, about, arg_required_else_help = true, long_about = None, disable_help_subcommand = true)]
struct Args {
    /// Optional subcommands
    #[command(subcommand)]
    command: Option<Commands>,
    /// Field mask string (e.g., "a,b(c,d),e/f")
    mask: Option<String>,
    #[arg(value_name = "FILE")]
    /// Optional path to JSON file. If omitted, reads from STDIN
    input: Option<PathBuf>,
    /// Do not pretty-print the JSON output, instead use compact
    #[arg(long, action = ArgAction::SetTrue)]
    compact: bool,
    /// Match property names case-insensitively
    #[arg(short = 'i', long, action = ArgAction::SetTrue)]
    ignore_case: bool,
    /// Do not colorize output even when writing to a terminal
    #[arg(long, action = ArgAction::SetTrue)]
    no_color: bool,
    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

/// Available subcommands for `jmask`
#[derive(Subcommand)]
enum Commands {
    #[command(subcommand)]
    /// Generate additional documentation and/or completions
    Generate(GenerateCommand),
}

/// Generate shell completions and man page
#[derive(Subcommand)]
enum GenerateCommand {
    /// Generate shell completions for the given shell to stdout.
    Shell { shell: clap_complete::Shell },
    /// Generate a man page for jmask to output directory if specified, else
    /// the current directory.
    Man {
        /// The output directory to write the man pages.
        #[clap(short, long)]
        output_dir: Option<PathBuf>,
    },
}

/// Entry point for main binary.
///
/// This parses the command line arguments and applies the mask. If the input
/// is piped in, it reads from STDIN. The filtered document is printed to
/// STDOUT, with formatting determined by the command line arguments.
fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbosity.log_level_filter())
        .init();

    match args.command {
        Some(Commands::Generate(cmd)) => match cmd {
            GenerateCommand::Shell { shell } => {
                let mut cmd = Args::command();
                generate(shell, &mut cmd, "jmask", &mut stdout().lock())
            }
            GenerateCommand::Man { output_dir } => {
                commands::generate::generate_man_pages(
                    &Args::command(),
                    output_dir,
                )?
            }
        },
        None => {
            // Compile the mask; mask parsing is best-effort and never fails.
            let comparison = if args.ignore_case {
                Comparison::IgnoreCase
            } else {
                Comparison::Exact
            };
            let mask_str = args.mask.ok_or_else(|| {
                anyhow::anyhow!("Mask string required unless using subcommand")
            })?;
            let mask = JsonMask::with_comparison(&mask_str, comparison);
            debug!("compiled mask {mask_str:?} to selector {mask}");

            // Parse input content
            let input_content = if let Some(path) = args.input {
                fs::read_to_string(&path).with_context(|| {
                    format!("Failed to read file {:?}", path)
                })?
            } else {
                if io::stdin().is_terminal() {
                    // No piped input and no file specified
                    let mut cmd = Args::command();
                    return Ok(cmd.print_help()?);
                }
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                buffer
            };
            let json: Value = serde_json::from_str(&input_content)
                .with_context(|| "Failed to parse JSON")?;

            // Apply the mask
            let filtered = mask.apply(&json);

            // Display output
            if args.compact {
                println!("{}", serde_json::to_string(&filtered)?);
            } else if stdout().is_terminal() && !args.no_color {
                utils::write_colored_result(
                    &mut stdout().lock(),
                    &filtered,
                    true,
                )?;
            } else {
                println!("{}", serde_json::to_string_pretty(&filtered)?);
            }
        }
    }

    Ok(())
}
