use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process;

use clap::{Args as ClapArgs, Parser, Subcommand};
use cusp_core::{CuspError, ErrorInfo};
use cusp_verify::driver::{run_certificate, DriverOptions, MAX_DEPTH};
use cusp_verify::{exit_code, stitch};

#[derive(Parser, Debug)]
#[command(name = "cusp-verify", about = "Certified parameter-space elimination verifier")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a certificate stream against the elimination predicates.
    Verify(VerifyArgs),
    /// Stitch a directory of certificate fragments into one stream.
    Cat(CatArgs),
}

#[derive(ClapArgs, Debug)]
struct VerifyArgs {
    /// Certificate file to replay (defaults to stdin).
    #[arg(long)]
    cert: Option<PathBuf>,
    /// Boxcode of the subtree root the certificate describes.
    #[arg(long, default_value = "")]
    root: String,
    /// Maximum accepted subdivision depth.
    #[arg(long, default_value_t = MAX_DEPTH)]
    max_depth: usize,
    /// Write the JSON run summary here instead of stdout.
    #[arg(long)]
    summary: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
struct CatArgs {
    /// Directory holding the certificate fragments.
    tree: PathBuf,
    /// Boxcode to start stitching from (the root fragment if empty).
    #[arg(long, default_value = "")]
    root: String,
    /// Write the stitched stream here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Command::Verify(args) => run_verify(&args),
        Command::Cat(args) => run_cat(&args),
    };
    if let Err(err) = result {
        eprintln!("Fatal: {err}");
        process::exit(exit_code(&err));
    }
}

fn io_error(err: io::Error, what: &str) -> CuspError {
    CuspError::Io(ErrorInfo::new("io", err.to_string()).with_context("file", what))
}

fn run_verify(args: &VerifyArgs) -> Result<(), CuspError> {
    let options = DriverOptions {
        root: args.root.clone(),
        max_depth: args.max_depth,
    };
    let summary = match &args.cert {
        Some(path) => {
            let file = File::open(path)
                .map_err(|err| io_error(err, &path.display().to_string()))?;
            run_certificate(BufReader::new(file), &options)?
        }
        None => {
            let stdin = io::stdin();
            run_certificate(stdin.lock(), &options)?
        }
    };
    let json = serde_json::to_string_pretty(&summary).map_err(|err| {
        CuspError::Io(ErrorInfo::new("summary-serialize", err.to_string()))
    })?;
    match &args.summary {
        Some(path) => {
            std::fs::write(path, json)
                .map_err(|err| io_error(err, &path.display().to_string()))?;
        }
        None => println!("{json}"),
    }
    println!("Successfully verified all {} leaf nodes", summary.verified_leaves);
    Ok(())
}

fn run_cat(args: &CatArgs) -> Result<(), CuspError> {
    match &args.out {
        Some(path) => {
            let mut file = File::create(path)
                .map_err(|err| io_error(err, &path.display().to_string()))?;
            stitch::stitch_tree(&args.tree, &args.root, &mut file)?;
            file.flush()
                .map_err(|err| io_error(err, &path.display().to_string()))?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            stitch::stitch_tree(&args.tree, &args.root, &mut handle)?;
        }
    }
    Ok(())
}
