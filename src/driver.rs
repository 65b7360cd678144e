//! Front end for evaluating formulas from text, files, and stdin.
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::parser::parse_text;
use crate::result::{FormulaErr, FormulaResult};
use crate::scanner::scan_text;
use crate::solve;

/// Result type used by the top level driver. Ok values are process
/// exit codes.
pub type DriverResult = Result<u8, DriverErr>;

/// The result of evaluating one line of a multi-line source: 1-based
/// line number and the formula's result.
pub type LineResult = (usize, FormulaResult);

#[derive(Debug)]
pub struct DriverErr {
    pub kind: DriverErrKind,
}

impl DriverErr {
    pub fn new(kind: DriverErrKind) -> Self {
        Self { kind }
    }

    pub fn exit_code(&self) -> u8 {
        match &self.kind {
            DriverErrKind::FormulaErr(err) => err.exit_code(),
            _ => 5,
        }
    }
}

#[derive(Debug)]
pub enum DriverErrKind {
    CouldNotReadSourceFile(String),
    CouldNotReadLine(String),
    ReplErr(String),
    FormulaErr(FormulaErr),
}

impl From<FormulaErr> for DriverErr {
    fn from(err: FormulaErr) -> Self {
        Self::new(DriverErrKind::FormulaErr(err))
    }
}

impl fmt::Display for DriverErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl fmt::Display for DriverErrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::CouldNotReadSourceFile(msg) => {
                format!("Could not read source file: {msg}")
            }
            Self::CouldNotReadLine(msg) => format!("Could not read line: {msg}"),
            Self::ReplErr(msg) => format!("REPL error: {msg}"),
            Self::FormulaErr(err) => format!("{err}"),
        };
        write!(f, "{msg}")
    }
}

pub struct Driver {
    debug: bool,
}

impl Driver {
    pub fn new(debug: bool) -> Self {
        Self { debug }
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    /// Evaluate a single formula.
    pub fn execute_text(&self, text: &str) -> FormulaResult {
        log::debug!("EXECUTE: {text:?}");
        if self.debug {
            self.display_debug_info(text);
        }
        let result = solve(text);
        log::debug!("RESULT: {result:?}");
        result
    }

    /// Evaluate each non-blank line of the specified file.
    pub fn execute_file(&self, file_path: &Path) -> Result<Vec<LineResult>, DriverErr> {
        log::debug!("READ: {}", file_path.display());
        let file = File::open(file_path).map_err(|err| {
            let msg = format!("{}: {err}", file_path.display());
            DriverErr::new(DriverErrKind::CouldNotReadSourceFile(msg))
        })?;
        self.execute_reader(BufReader::new(file))
    }

    /// Evaluate each non-blank line read from stdin.
    pub fn execute_stdin(&self) -> Result<Vec<LineResult>, DriverErr> {
        let stdin = io::stdin();
        self.execute_reader(stdin.lock())
    }

    /// Evaluate each non-blank line read from the specified reader.
    /// Reading stops at the first I/O error, but an invalid formula
    /// only affects its own line.
    pub fn execute_reader<T: BufRead>(
        &self,
        reader: T,
    ) -> Result<Vec<LineResult>, DriverErr> {
        let mut results = vec![];
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|err| {
                DriverErr::new(DriverErrKind::CouldNotReadLine(err.to_string()))
            })?;
            if line.trim().is_empty() {
                continue;
            }
            results.push((index + 1, self.execute_text(line.as_str())));
        }
        Ok(results)
    }

    /// Show tokens and expression tree on stderr.
    fn display_debug_info(&self, text: &str) {
        eprintln!("{:=>72}", "");
        eprintln!("FORMULA: {text}");
        eprintln!("{:->72}", "");
        match scan_text(text) {
            Ok(tokens) => {
                for token in tokens.iter() {
                    eprintln!("{token}");
                }
            }
            Err(err) => eprintln!("{err}"),
        }
        eprintln!("{:->72}", "");
        if let Ok(expr) = parse_text(text) {
            eprintln!("TREE ({} nodes, depth {}):", expr.size(), expr.depth());
            eprintln!("{expr:?}");
        }
        eprintln!("{:=>72}", "");
    }
}
