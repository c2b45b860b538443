//! CLI definition and parameter extraction.
//!
//! Single command, no required arguments: running `tonewire` regenerates the
//! constant listing on stdout. Callers conventionally redirect it into the
//! header consumed by the encoder/decoder runtime.

use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};

use crate::commands::generate::GenerateArgs;


/// Build the CLI.
pub fn build_cli() -> Command {
    Command::new("tonewire")
        .about("Generate opcode span constants for the tonewire audio-event encoding")
        .after_help(
            r#"EXAMPLES:
  tonewire                      # listing on stdout
  tonewire > tonewire_fmt.h     # regenerate the runtime header
  tonewire -o tonewire_fmt.h    # same, without shell redirection
  tonewire --strict             # fail if the table overflows 256 opcodes"#,
        )
        .arg(output_arg())
        .arg(strict_arg())
}

/// Output file (-o/--output).
fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write the listing to FILE instead of stdout")
}

/// Treat table overflow as fatal (--strict).
fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat opcode-space overflow as a fatal error")
}

pub struct GenerateParams {
    pub output: Option<PathBuf>,
    pub strict: bool,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            output: m.get_one::<PathBuf>("output").cloned(),
            strict: m.get_flag("strict"),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            output: p.output,
            strict: p.strict,
        }
    }
}
