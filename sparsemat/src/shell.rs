//! Interactive arithmetic shell
//!
//! A thin adapter over the core: it reads menu choices, runs the chosen
//! operation on the two loaded operands and writes the result file. It is
//! generic over its input and output so it can be driven from tests.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use sparsemat_core::{add, multiply, subtract, Matrix, MatrixElement, Operation};
use tracing::{info, warn};

use crate::config::SessionConfig;
use crate::error::{Error, Result};
use crate::file_io::{load_matrix, save_matrix};

/// A parsed menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Operate(Operation),
    Exit,
}

impl MenuChoice {
    /// Parse a menu answer ("1".."4"); surrounding whitespace is ignored
    pub fn parse(answer: &str) -> Option<Self> {
        match answer.trim() {
            "1" => Some(MenuChoice::Operate(Operation::Addition)),
            "2" => Some(MenuChoice::Operate(Operation::Subtraction)),
            "3" => Some(MenuChoice::Operate(Operation::Multiplication)),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

const MENU: &str = "\nChoose an arithmetic operation or exit the program:\n\
1. Addition (+)\n\
2. Subtraction (-)\n\
3. Multiplication (*)\n\
4. Exit\n";

const PROMPT: &str = "Choose one option: 1, 2, 3 or 4: ";

/// Two operands plus where to put results
#[derive(Debug, Clone)]
pub struct Session<T: MatrixElement = i64> {
    lhs: Matrix<T>,
    rhs: Matrix<T>,
    config: SessionConfig,
}

impl<T: MatrixElement> Session<T> {
    pub fn new(lhs: Matrix<T>, rhs: Matrix<T>, config: SessionConfig) -> Self {
        Self { lhs, rhs, config }
    }

    /// Load both operands; either failing aborts the session
    pub fn load(
        lhs_path: impl AsRef<Path>,
        rhs_path: impl AsRef<Path>,
        config: SessionConfig,
    ) -> Result<Self> {
        let lhs = load_matrix(lhs_path)?;
        let rhs = load_matrix(rhs_path)?;
        Ok(Self::new(lhs, rhs, config))
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Apply `op` to the operands
    pub fn compute(&self, op: Operation) -> Result<Matrix<T>> {
        let result = match op {
            Operation::Addition => add(&self.lhs, &self.rhs),
            Operation::Subtraction => subtract(&self.lhs, &self.rhs),
            Operation::Multiplication => multiply(&self.lhs, &self.rhs),
        }?;
        Ok(result)
    }

    /// Apply `op` and write the result to its configured file
    pub fn execute(&self, op: Operation) -> Result<(Matrix<T>, PathBuf)> {
        let result = self.compute(op)?;
        let path = self.config.output_path(op);
        save_matrix(&result, &path)?;
        info!(%op, path = %path.display(), nnz = result.nnz(), "operation complete");
        Ok((result, path))
    }

    /// Run the menu loop until the user exits or input ends
    ///
    /// Operation failures are reported on `output` and the loop continues.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<()> {
        let mut answer = String::new();
        loop {
            write!(output, "{MENU}\n{PROMPT}").map_err(Error::Console)?;
            output.flush().map_err(Error::Console)?;

            answer.clear();
            if input.read_line(&mut answer).map_err(Error::Console)? == 0 {
                writeln!(output).map_err(Error::Console)?;
                return Ok(());
            }

            match MenuChoice::parse(&answer) {
                Some(MenuChoice::Operate(op)) => match self.execute(op) {
                    Ok((_, path)) => {
                        writeln!(
                            output,
                            "The {op} operation results are saved in {}",
                            path.display()
                        )
                        .map_err(Error::Console)?;
                    }
                    Err(e) => {
                        warn!(%op, error = %e, "operation failed");
                        writeln!(output, "Error: {e}").map_err(Error::Console)?;
                    }
                },
                Some(MenuChoice::Exit) => {
                    writeln!(output, "You exited the program. Thank you!")
                        .map_err(Error::Console)?;
                    return Ok(());
                }
                None => {
                    writeln!(output, "Your choice is invalid, please try again.")
                        .map_err(Error::Console)?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(
            MenuChoice::parse("1\n"),
            Some(MenuChoice::Operate(Operation::Addition))
        );
        assert_eq!(
            MenuChoice::parse(" 2 "),
            Some(MenuChoice::Operate(Operation::Subtraction))
        );
        assert_eq!(
            MenuChoice::parse("3"),
            Some(MenuChoice::Operate(Operation::Multiplication))
        );
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("5"), None);
        assert_eq!(MenuChoice::parse(""), None);
        assert_eq!(MenuChoice::parse("add"), None);
    }

    #[test]
    fn test_compute_reports_dimension_errors() {
        let session: Session =
            Session::new(Matrix::new(2, 3), Matrix::new(2, 3), SessionConfig::default());

        assert!(session.compute(Operation::Addition).is_ok());
        assert!(matches!(
            session.compute(Operation::Multiplication),
            Err(Error::Matrix(sparsemat_core::MatrixError::DimensionIncompatible { .. }))
        ));
    }
}
