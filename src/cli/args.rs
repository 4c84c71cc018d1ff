//! Defines the command-line arguments and subcommands for the Kaleido CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::session::VariantOptions;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "kaleido",
    version,
    about = "Parse variant specifications into parametrized test variants."
)]
pub struct KaleidoArgs {
    /// Variant specification. Can be repeated.
    /// Format: <attr1>:<attr2>:...:<variant>[,<...>]. Colons and commas can be escaped with \.
    #[arg(long = "variant", value_name = "SPEC", global = true)]
    pub variants: Vec<String>,

    /// Setup string for variant discovery (e.g. directory, server location).
    /// Same syntax as --variant, but cannot be repeated.
    #[arg(long, value_name = "SPEC", global = true)]
    pub variant_setup: Option<String>,

    /// YAML file with default `variants` and `variant_setup` strings.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Print JSON instead of plain text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides this.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: ArgsCommand,
}

impl KaleidoArgs {
    /// The variant options given on the command line.
    pub fn options(&self) -> VariantOptions {
        VariantOptions {
            variants: self.variants.clone(),
            variant_setup: self.variant_setup.clone(),
        }
    }
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum ArgsCommand {
    /// List every variant by its parametrization id.
    List,
    /// List all distinct attributes.
    Attributes,
    /// Select variants carrying any of the given attributes.
    /// Without attributes, select the variants that have none.
    Select {
        #[arg(value_name = "ATTR")]
        attributes: Vec<String>,
    },
    /// Show the parsed setup string.
    Setup,
    /// Show the raw attribute lists before merging.
    Tokenize,
    /// Print the report header line.
    Header,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_flag_repeats() {
        let args = KaleidoArgs::try_parse_from([
            "kaleido",
            "--variant=a:1.0,1.1",
            "--variant",
            "b:1.0",
            "list",
        ])
        .unwrap();
        assert_eq!(args.variants, ["a:1.0,1.1", "b:1.0"]);
        assert!(matches!(args.command, ArgsCommand::List));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args = KaleidoArgs::try_parse_from([
            "kaleido",
            "select",
            "router",
            "switch",
            "--variant-setup",
            r"win:C\:\App",
            "--json",
            "-vv",
        ])
        .unwrap();
        assert_eq!(args.variant_setup.as_deref(), Some(r"win:C\:\App"));
        assert!(args.json);
        assert_eq!(args.verbose, 2);
        match args.command {
            ArgsCommand::Select { attributes } => assert_eq!(attributes, ["router", "switch"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn options_carry_raw_strings() {
        let args =
            KaleidoArgs::try_parse_from(["kaleido", "--variant", "x:y", "header"]).unwrap();
        let options = args.options();
        assert_eq!(options.variants, ["x:y"]);
        assert_eq!(options.variant_setup, None);
    }

    #[test]
    fn subcommand_is_required() {
        assert!(KaleidoArgs::try_parse_from(["kaleido"]).is_err());
    }
}
