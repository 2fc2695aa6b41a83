//! Command-line front end: load two matrices, then add, subtract or
//! multiply them interactively (or once, with `--operation`).

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use sparsemat::{Operation, Session, SessionConfig};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "Add, subtract and multiply sparse integer matrices stored as text files")]
struct Cli {
    /// First operand (left-hand side)
    matrix1: PathBuf,

    /// Second operand (right-hand side)
    matrix2: PathBuf,

    /// Existing directory that receives result files
    result_dir: PathBuf,

    /// Run a single operation instead of the interactive menu
    #[arg(long, value_enum)]
    operation: Option<OperationArg>,

    /// Print a JSON report of the single operation on stdout
    #[arg(long, requires = "operation")]
    json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OperationArg {
    Add,
    Subtract,
    Multiply,
}

impl From<OperationArg> for Operation {
    fn from(arg: OperationArg) -> Self {
        match arg {
            OperationArg::Add => Operation::Addition,
            OperationArg::Subtract => Operation::Subtraction,
            OperationArg::Multiply => Operation::Multiplication,
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize)]
struct Report {
    operation: String,
    shape: sparsemat::Shape,
    nnz: usize,
    output: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = SessionConfig::new(&cli.result_dir);
    if let Err(e) = config.validate() {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    let session: Session = match Session::load(&cli.matrix1, &cli.matrix2, config) {
        Ok(session) => session,
        Err(e) => {
            error!(error = %e, "failed to load matrices");
            eprintln!("Error loading matrices: {e}");
            return ExitCode::FAILURE;
        }
    };

    let outcome = match cli.operation {
        Some(op) => run_once(&session, op.into(), cli.json),
        None => session.run(io::stdin().lock(), io::stdout().lock()),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_once(session: &Session, op: Operation, json: bool) -> sparsemat::Result<()> {
    let (result, path) = session.execute(op)?;

    if json {
        print_report(op, &result, path);
    } else {
        println!("The {op} operation results are saved in {}", path.display());
    }
    Ok(())
}

#[cfg(feature = "serde")]
fn print_report(op: Operation, result: &sparsemat::Matrix, output: PathBuf) {
    let report = Report {
        operation: op.to_string(),
        shape: result.shape(),
        nnz: result.nnz(),
        output,
    };
    match serde_json::to_string_pretty(&report) {
        Ok(text) => println!("{text}"),
        Err(e) => eprintln!("Error: failed to encode report: {e}"),
    }
}

#[cfg(not(feature = "serde"))]
fn print_report(op: Operation, result: &sparsemat::Matrix, output: PathBuf) {
    eprintln!("JSON reports require the 'serde' feature; printing plain output.");
    println!(
        "{op}: {} with {} non-zero entries saved in {}",
        result.shape(),
        result.nnz(),
        output.display()
    );
}
