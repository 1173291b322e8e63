use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use sparsemat::{json, IoConfig, LogProgress, MatrixFile, Operation, Session, SparseMatrix};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "sparsemat - add, subtract and multiply sparse integer matrices stored as text")]
struct Cli {
    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add two matrices of equal shape
    Add(OperandArgs),
    /// Subtract the second matrix from the first
    Subtract(OperandArgs),
    /// Multiply the first matrix by the second
    Multiply(OperandArgs),
    /// Ask interactively which operation to run
    Prompt(OperandArgs),
    /// Print a matrix file in canonical form
    Show {
        /// Matrix file
        file: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args)]
struct OperandArgs {
    /// Left operand file
    left: PathBuf,

    /// Right operand file
    right: PathBuf,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args)]
struct OutputArgs {
    /// Write the result here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit JSON instead of the text format
    #[arg(long)]
    json: bool,

    /// Reject entries outside the declared shape when loading
    #[arg(long)]
    check_bounds: bool,

    /// Create missing directories for the output file
    #[arg(long)]
    create_dirs: bool,
}

impl OutputArgs {
    fn io_config(&self) -> IoConfig {
        IoConfig::default()
            .with_bounds_check(self.check_bounds)
            .with_create_dirs(self.create_dirs)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&cli.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let start_time = std::time::Instant::now();

    match &cli.command {
        Commands::Add(args) => run_operation(Operation::Add, args)?,
        Commands::Subtract(args) => run_operation(Operation::Subtract, args)?,
        Commands::Multiply(args) => run_operation(Operation::Multiply, args)?,
        Commands::Prompt(args) => run_prompt(args)?,
        Commands::Show { file, output } => {
            let matrix = MatrixFile::read_matrix_with_config::<i64, _>(file, &output.io_config())?;
            emit(&matrix, output)?;
        }
    }

    let elapsed = start_time.elapsed();
    info!("completed in {elapsed:.2?}");

    Ok(())
}

fn load_operands(args: &OperandArgs) -> sparsemat::Result<(SparseMatrix, SparseMatrix)> {
    let config = args.output.io_config();
    let left = MatrixFile::read_matrix_with_config(&args.left, &config)?;
    let right = MatrixFile::read_matrix_with_config(&args.right, &config)?;
    Ok((left, right))
}

fn run_operation(op: Operation, args: &OperandArgs) -> sparsemat::Result<()> {
    let (left, right) = load_operands(args)?;

    let span = tracing::info_span!("operation", %op);
    let _guard = span.enter();

    let mut progress = LogProgress::new(op.name());
    let result = op.apply_with_progress(&left, &right, &mut progress)?;
    info!(
        rows = result.rows(),
        cols = result.cols(),
        nnz = result.nnz(),
        "operation complete"
    );

    emit(&result, &args.output)
}

fn run_prompt(args: &OperandArgs) -> sparsemat::Result<()> {
    let (left, right) = load_operands(args)?;

    let stdin = std::io::stdin();
    let mut session = Session::new(stdin.lock(), std::io::stdout());
    let mut progress = LogProgress::new(Operation::Multiply.name());

    if let Some((op, result)) = session.run_with_progress(&left, &right, &mut progress)? {
        // The session already echoed the result; only persist it when asked
        if let Some(path) = &args.output.output {
            info!(%op, "saving result");
            save(path, &result, &args.output)?;
        }
    }
    Ok(())
}

fn emit(matrix: &SparseMatrix, output: &OutputArgs) -> sparsemat::Result<()> {
    match &output.output {
        Some(path) => save(path, matrix, output),
        None if output.json => {
            println!("{}", json::to_json(matrix)?);
            Ok(())
        }
        None => {
            println!("{matrix}");
            Ok(())
        }
    }
}

fn save(path: &Path, matrix: &SparseMatrix, output: &OutputArgs) -> sparsemat::Result<()> {
    let config = output.io_config();
    if output.json {
        json::write_json(path, matrix, &config)
    } else {
        MatrixFile::write_matrix_with_config(path, matrix, &config)
    }
}
