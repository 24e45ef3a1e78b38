//! Command line configuration
//!
//! Every value the driver needs can come from a flag. Whatever is missing is
//! asked for interactively, in the order: first matrix, second matrix,
//! operation, output path.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use spmat_core::DataType;

use crate::{Error, Operation, Result};

/// Element width accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ElementType {
    I32,
    I64,
}

impl From<ElementType> for DataType {
    fn from(value: ElementType) -> Self {
        match value {
            ElementType::I32 => DataType::I32,
            ElementType::I64 => DataType::I64,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "spmat", version)]
#[command(about = "Add, subtract or multiply sparse integer matrices stored as coordinate lists")]
pub struct Cli {
    /// Path of the first matrix
    pub lhs: Option<PathBuf>,

    /// Path of the second matrix
    pub rhs: Option<PathBuf>,

    /// Operation: 1/add, 2/subtract, 3/multiply
    #[arg(short = 'p', long = "op")]
    pub op: Option<Operation>,

    /// Path of the result file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Element type used for all three matrices
    #[arg(long, value_enum, default_value_t = ElementType::I64)]
    pub dtype: ElementType,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Fully resolved inputs of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub lhs: PathBuf,
    pub rhs: PathBuf,
    pub op: Operation,
    pub output: PathBuf,
    pub data_type: DataType,
}

impl Cli {
    /// Default log filter for the verbosity count, used when `RUST_LOG` is unset
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Fill in missing values by prompting on `output` and reading `input`
    pub fn resolve<R: BufRead, W: Write>(self, input: &mut R, output: &mut W) -> Result<RunConfig> {
        let lhs = match self.lhs {
            Some(path) => path,
            None => prompt(input, output, "Enter the path for the first matrix: ")?.into(),
        };
        let rhs = match self.rhs {
            Some(path) => path,
            None => prompt(input, output, "Enter the path for the second matrix: ")?.into(),
        };
        let op = match self.op {
            Some(op) => op,
            None => {
                writeln!(output, "Select operation:")?;
                for op in Operation::ALL {
                    writeln!(output, "{}: {}", op.selector(), op.label())?;
                }
                prompt(input, output, "Enter the operation (1/2/3): ")?.parse()?
            }
        };
        let result_path = match self.output {
            Some(path) => path,
            None => prompt(input, output, "Enter the output file path: ")?.into(),
        };

        Ok(RunConfig {
            lhs,
            rhs,
            op,
            output: result_path,
            data_type: self.dtype.into(),
        })
    }
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<String> {
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::Stream(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input ended before a value was entered",
        )));
    }
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn resolve(args: &[&str], answers: &str) -> (Result<RunConfig>, String) {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        let mut input = Cursor::new(answers.as_bytes().to_vec());
        let mut output = Vec::new();
        let config = cli.resolve(&mut input, &mut output);
        (config, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_all_from_flags() {
        let (config, printed) = resolve(
            &["spmat", "a.txt", "b.txt", "--op", "3", "-o", "c.txt", "--dtype", "i32"],
            "",
        );
        assert_eq!(
            config.unwrap(),
            RunConfig {
                lhs: "a.txt".into(),
                rhs: "b.txt".into(),
                op: Operation::Multiply,
                output: "c.txt".into(),
                data_type: DataType::I32,
            }
        );
        assert!(printed.is_empty());
    }

    #[test]
    fn test_all_from_prompts() {
        let (config, printed) = resolve(&["spmat"], "a.txt\n b.txt \n2\nout.txt\n");
        let config = config.unwrap();
        assert_eq!(config.lhs, PathBuf::from("a.txt"));
        assert_eq!(config.rhs, PathBuf::from("b.txt"));
        assert_eq!(config.op, Operation::Subtract);
        assert_eq!(config.output, PathBuf::from("out.txt"));
        assert_eq!(config.data_type, DataType::I64);

        assert!(printed.starts_with("Enter the path for the first matrix: "));
        let menu = "Select operation:\n1: Addition\n2: Subtraction\n3: Multiplication\n";
        assert!(printed.contains(menu));
        assert!(printed.ends_with("Enter the output file path: "));
    }

    #[test]
    fn test_mixed_flags_and_prompts() {
        let (config, printed) = resolve(&["spmat", "a.txt", "--op", "add"], "b.txt\nout.txt\n");
        let config = config.unwrap();
        assert_eq!(config.op, Operation::Add);
        assert_eq!(config.rhs, PathBuf::from("b.txt"));
        assert!(!printed.contains("first matrix"));
        assert!(!printed.contains("Select operation"));
    }

    #[test]
    fn test_invalid_prompted_operation() {
        let (config, _) = resolve(&["spmat", "a.txt", "b.txt"], "7\nout.txt\n");
        assert!(matches!(config, Err(Error::InvalidOperation { .. })));
    }

    #[test]
    fn test_invalid_flag_operation_rejected_by_parser() {
        assert!(Cli::try_parse_from(["spmat", "--op", "9"]).is_err());
    }

    #[test]
    fn test_input_ends_early() {
        let (config, _) = resolve(&["spmat"], "a.txt\n");
        assert!(matches!(config, Err(Error::Stream(_))));
    }

    #[test]
    fn test_log_filter() {
        let cli = Cli::try_parse_from(["spmat", "-vv"]).unwrap();
        assert_eq!(cli.log_filter(), "debug");
        let cli = Cli::try_parse_from(["spmat"]).unwrap();
        assert_eq!(cli.log_filter(), "warn");
    }
}
