//! NDF CLI entry point.

use ndf_language::pretty::pretty_print;
use ndf_language::sexp::to_sexp;
use ndf_runtime::{FileReport, Repl, check_file, init_tracing, save_to_file};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

/// CLI configuration parsed from arguments.
#[derive(Debug, Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    quiet: bool,
    // Output flags
    print_tree: bool,
    print_fmt: bool,
    emit: Option<PathBuf>,
}

fn main() -> ExitCode {
    init_tracing();
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::from(2)
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "-q" | "--quiet" => config.quiet = true,
            "--tree" => config.print_tree = true,
            "--fmt" => config.print_fmt = true,
            "--emit" => {
                let Some(path) = args.next() else {
                    return Err("--emit requires a path".into());
                };
                config.emit = Some(PathBuf::from(path));
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => config.files.push(PathBuf::from(path)),
        }
    }

    if config.emit.is_some() && config.files.len() != 1 {
        return Err("--emit needs exactly one input file".into());
    }

    Ok(config)
}

/// Returns `Ok(false)` if any checked file had diagnostics.
fn run(args: Vec<String>) -> Result<bool, Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(true);
    }

    if config.show_version {
        println!("ndf {}", env!("CARGO_PKG_VERSION"));
        return Ok(true);
    }

    let mut clean = true;
    for file in &config.files {
        let report = check_file(file)?;
        clean &= !report.has_errors();
        print_report(&config, &report);
        if let Some(emit) = &config.emit {
            save_to_file(&report.parse, emit)?;
        }
    }

    if config.batch_mode || !config.files.is_empty() {
        return Ok(clean);
    }

    let mut repl = Repl::new()?;
    if config.quiet {
        repl = repl.without_banner();
    }
    repl.run()?;
    Ok(true)
}

fn print_report(config: &CliConfig, report: &FileReport) {
    eprint!("{}", report.render());
    if config.print_tree {
        println!("{}", to_sexp(&report.parse.document));
    }
    if config.print_fmt {
        print!("{}", pretty_print(&report.parse.document));
    }
    if !config.quiet {
        eprintln!("{}", report.summary());
    }
}

fn print_help() {
    println!(
        "\x1b[1mndf\x1b[0m - NDF parser and checker

\x1b[1mUSAGE:\x1b[0m
    ndf [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Files to check; with none, the REPL starts

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    -b, --batch        Never start the REPL
    -q, --quiet        No summary lines and no REPL banner
    --tree             Print each file's syntax tree
    --fmt              Print each file in canonical form
    --emit PATH        Export the parse of the single input file as MessagePack

\x1b[1mENVIRONMENT:\x1b[0m
    NDF_LOG            Log filter, e.g. debug or ndf_language::parser=trace
    NDF_LOG_FORMAT     text (default) or json

\x1b[1mEXIT STATUS:\x1b[0m
    0 all files parsed cleanly, 1 diagnostics were reported, 2 fatal error

\x1b[1mEXAMPLES:\x1b[0m
    ndf                           Start interactive REPL
    ndf units.ndf                 Check units.ndf
    ndf --fmt units.ndf           Print units.ndf in canonical form
    ndf --emit out.msgpack a.ndf  Check a.ndf and export its tree"
    );
}
