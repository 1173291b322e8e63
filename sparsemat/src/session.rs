//! Interactive operation prompt
//!
//! A session asks which operation to run on two loaded operands, reprompts
//! on unknown commands or rejected operands, and stops after the first
//! successful operation or when the user quits.

use std::io::{BufRead, Write};

use sparsemat_core::{MatrixElement, NoProgress, Operation, ProgressObserver, SparseMatrix};
use tracing::{info, warn};

use crate::Result;

const PROMPT: &str = "operation [add|subtract|multiply|quit]> ";
const QUIT_COMMANDS: [&str; 3] = ["quit", "exit", "q"];

/// Prompt loop over a line-oriented input and an output stream
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the session, returning the output stream
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the prompt until an operation succeeds
    ///
    /// Returns `None` when the user quits or the input ends.
    pub fn run<T: MatrixElement>(
        &mut self,
        left: &SparseMatrix<T>,
        right: &SparseMatrix<T>,
    ) -> Result<Option<(Operation, SparseMatrix<T>)>> {
        self.run_with_progress(left, right, &mut NoProgress)
    }

    /// Run the prompt, forwarding multiplication progress to `observer`
    pub fn run_with_progress<T, O>(
        &mut self,
        left: &SparseMatrix<T>,
        right: &SparseMatrix<T>,
        observer: &mut O,
    ) -> Result<Option<(Operation, SparseMatrix<T>)>>
    where
        T: MatrixElement,
        O: ProgressObserver + ?Sized,
    {
        let mut line = String::new();
        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(None);
            }

            let command = line.trim();
            if command.is_empty() {
                continue;
            }
            if QUIT_COMMANDS.iter().any(|q| command.eq_ignore_ascii_case(q)) {
                return Ok(None);
            }

            let op = match command.parse::<Operation>() {
                Ok(op) => op,
                Err(e) => {
                    warn!(command, "unrecognised command");
                    writeln!(self.output, "Unrecognised command `{command}`: {e}")?;
                    continue;
                }
            };

            match op.apply_with_progress(left, right, observer) {
                Ok(result) => {
                    info!(%op, nnz = result.nnz(), "operation complete");
                    writeln!(self.output, "{result}")?;
                    return Ok(Some((op, result)));
                }
                Err(e) => {
                    warn!(%op, error = %e, "operation rejected");
                    writeln!(self.output, "{e}")?;
                }
            }
        }
    }
}
