//! The Kaleido Command-Line Interface.
//!
//! This module is the main entry point for all CLI commands. It resolves the
//! session from flags and the optional config file, then dispatches to the
//! library.

use std::io::Write;
use std::process;

use clap::Parser;
use miette::Report;
use termcolor::WriteColor;

use crate::{
    config::KaleidoConfig,
    errors::{KaleidoError, Result},
    logging::init_tracing,
    select_by_attributes,
    session::VariantSession,
    syntax::{join_escaped, tokenize, ATTRIBUTE_SEPARATOR},
    Variant,
};

pub mod args;
pub mod output;

use args::{ArgsCommand, KaleidoArgs};

// ============================================================================
// MAIN ENTRY POINT
// ============================================================================

/// The main entry point for the CLI.
pub fn run() {
    let args = KaleidoArgs::parse();
    init_tracing(args.verbose);

    let mut stdout = output::stdout_stream();
    if let Err(e) = execute(&args, &mut stdout) {
        print_error(e);
        process::exit(1);
    }
}

/// Runs one parsed command, writing its plain or JSON output to `out`.
///
/// Only the plain `header` output uses colour, and only if `out` supports it.
pub fn execute<W: WriteColor>(args: &KaleidoArgs, out: &mut W) -> Result<()> {
    let config = match &args.config {
        Some(path) => KaleidoConfig::load(path)?,
        None => KaleidoConfig::default(),
    };
    let session = VariantSession::resolve(&args.options(), &config);

    match &args.command {
        ArgsCommand::List => {
            if args.json {
                output::write_json(out, &session.parametrize())
            } else {
                let ids = session.parametrize().into_iter().map(|p| p.id);
                write_plain(out, ids)
            }
        }

        ArgsCommand::Attributes => {
            let attributes = session.filter().all_variant_attributes();
            if args.json {
                output::write_json(out, &attributes)
            } else {
                write_plain(out, attributes)
            }
        }

        ArgsCommand::Select { attributes } => {
            let selected = select_by_attributes(&session.variants(), attributes.as_slice());
            print_variants(out, &selected, args.json)
        }

        ArgsCommand::Setup => print_variants(out, &session.setup(), args.json),

        ArgsCommand::Tokenize => {
            let lists = tokenize(session.variant_args());
            if args.json {
                output::write_json(out, &lists)
            } else {
                let lines = lists
                    .iter()
                    .map(|list| join_escaped(list.as_slice(), ATTRIBUTE_SEPARATOR));
                write_plain(out, lines)
            }
        }

        ArgsCommand::Header => {
            let header = session.report_header_fields();
            if args.json {
                output::write_json(out, &header.to_string())
            } else {
                output::write_header(out, &header)?;
                Ok(())
            }
        }
    }
}

/// Renders an error through miette on stderr.
pub fn print_error(error: KaleidoError) {
    let report = Report::new(error);
    eprintln!("{report:?}");
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn print_variants<W: Write>(out: &mut W, variants: &[Variant], json: bool) -> Result<()> {
    if json {
        output::write_json(out, variants)
    } else {
        write_plain(out, variants.iter().map(Variant::id))
    }
}

fn write_plain<W, I, S>(out: &mut W, items: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    output::write_lines(out, items)?;
    Ok(())
}
