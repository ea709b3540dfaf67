use std::{path::PathBuf, process};

use clap::Parser as ArgParser;
use log::{debug, LevelFilter};

use natded::{
    catalogue::Catalogue,
    session::ProofSession,
    shell::{render_problems, ProofShell, ShellError},
};

#[derive(ArgParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// TOML catalogue to use instead of the built-in problems
    #[arg(long, short = 'c')]
    catalogue: Option<PathBuf>,

    /// Problem to start proving
    #[arg(long, short = 'p')]
    problem: Option<String>,

    /// List the problems in the catalogue and exit
    #[arg(long, short = 'l')]
    list: bool,

    /// Run `;`-separated commands (e.g. "intro; exact H1") instead of the interactive shell
    #[arg(long, short = 's')]
    script: Option<String>,

    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn run(args: Args) -> Result<(), ShellError> {
    let catalogue = match &args.catalogue {
        Some(path) => Catalogue::load(path)?,
        None => Catalogue::builtin(),
    };

    if args.list {
        println!("{}", render_problems(&catalogue));
        return Ok(());
    }

    let mut shell = ProofShell::new(ProofSession::new(catalogue));
    if let Some(id) = &args.problem {
        shell.begin(id)?;
    }

    match &args.script {
        Some(script) => shell.run_script(script),
        None => shell.interact(),
    }
}

fn main() {
    let args = Args::parse();

    let mut logger = pretty_env_logger::formatted_builder();
    logger.filter_level(if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });
    logger.parse_default_env();
    logger.init();

    if let Err(err) = run(args) {
        debug!("{:?}", err);
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
