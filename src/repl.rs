//! # Formula REPL
use std::fs;
use std::path::PathBuf;

use rustyline::error::ReadlineError;

use crate::driver::{Driver, DriverErr, DriverErrKind, DriverResult};
use crate::parser::ParseErrKind;
use crate::result::{FormulaErrKind, FormulaResult};

pub struct Repl {
    reader: rustyline::Editor<()>,
    history_path: Option<PathBuf>,
    driver: Driver,
}

impl Repl {
    pub fn new(history_path: Option<PathBuf>, driver: Driver) -> Result<Self, DriverErr> {
        let reader = rustyline::Editor::<()>::new().map_err(|err| {
            let msg = format!("Could not initialize readline: {err}");
            DriverErr::new(DriverErrKind::ReplErr(msg))
        })?;
        Ok(Repl { reader, history_path, driver })
    }

    pub fn driver(&self) -> &Driver {
        &self.driver
    }

    pub fn run(&mut self) -> DriverResult {
        println!("Welcome to the Formula REPL (read/eval/print loop)");
        println!("Type a formula, then hit Enter to evaluate it");
        self.load_history();
        println!("Type .help for help or .exit to exit");

        loop {
            match self.read_line("→ ", true) {
                Ok(None) => {
                    // Blank or all-whitespace line.
                }
                Ok(Some(input)) => {
                    // Evaluate the input. If eval returns a result,
                    // shut down the REPL.
                    if let Some(result) = self.eval(input.as_str()) {
                        break result;
                    }
                }
                // User hit Ctrl-C
                Err(ReadlineError::Interrupted) => {
                    println!("Use Ctrl-D or .exit to exit");
                }
                // User hit Ctrl-D
                Err(ReadlineError::Eof) => {
                    break Ok(0);
                }
                // Unexpected error encountered while attempting to read
                // a line.
                Err(err) => {
                    let msg = format!("Could not read line: {err}");
                    break Err(DriverErr::new(DriverErrKind::ReplErr(msg)));
                }
            }
        }
    }

    /// Get a line of input from the user. If the line comprises only
    /// whitespace *and* `trim_blank` is set, `None` will be returned.
    fn read_line(
        &mut self,
        prompt: &str,
        trim_blank: bool,
    ) -> Result<Option<String>, ReadlineError> {
        match self.reader.readline(prompt) {
            Ok(input) if trim_blank && input.trim().is_empty() => Ok(None),
            Ok(input) => Ok(Some(input)),
            Err(err) => Err(err),
        }
    }

    /// Evaluate text. Returns `None` to indicate to the main loop to
    /// continue reading and evaluating input. Returns a `DriverResult`
    /// to indicate to the main loop to exit.
    pub fn eval(&mut self, text: &str) -> Option<DriverResult> {
        self.add_history_entry(text);

        if matches!(text.trim(), ".exit" | ".quit") {
            return Some(Ok(0));
        } else if self.handle_command(text) {
            return None;
        }

        let mut input = text.to_owned();

        // Keep reading while a paren is open so a formula can span
        // multiple lines. A blank line gives up and shows the error.
        let result = loop {
            let result = self.driver.execute_text(input.as_str());
            if !is_unclosed(&result) {
                break result;
            }
            match self.read_line("+ ", true) {
                Ok(Some(more)) => {
                    self.add_history_entry(more.as_str());
                    input.push(' ');
                    input.push_str(more.trim_end());
                }
                Ok(None) | Err(ReadlineError::Interrupted) => break result,
                Err(ReadlineError::Eof) => return Some(Ok(0)),
                Err(err) => {
                    let msg = format!("Could not read line: {err}");
                    return Some(Err(DriverErr::new(DriverErrKind::ReplErr(msg))));
                }
            }
        };

        match result {
            Ok(value) => println!("{value}"),
            Err(err) => eprintln!("{err}"),
        }

        None
    }

    fn handle_command(&mut self, text: &str) -> bool {
        match text.trim() {
            "?" | ".help" => {
                eprintln!("{:=>72}", "");
                eprintln!("Formula Help");
                eprintln!("{:->72}", "");
                eprintln!("Operators: * / + - (* and / bind tighter than + and -)");
                eprintln!("Group with parentheses: (1 + 2) * 3");
                eprintln!("{:->72}", "");
                eprintln!(".help      -> show this help");
                eprintln!(".exit      -> exit");
                eprintln!(".debug     -> toggle display of tokens and tree");
                eprintln!("{:=>72}", "");
            }
            ".debug" => {
                let debug = !self.driver.debug();
                self.driver.set_debug(debug);
                eprintln!("Debug {}", if debug { "on" } else { "off" });
            }
            _ => return false,
        }
        true
    }

    fn load_history(&mut self) {
        match &self.history_path {
            Some(path) => {
                println!("REPL history will be saved to {}", path.to_string_lossy());
                if let Some(dir) = path.parent() {
                    if let Err(err) = fs::create_dir_all(dir) {
                        log::warn!("Could not create REPL history directory: {err}");
                    }
                }
                match self.reader.load_history(path.as_path()) {
                    Ok(_) => (),
                    Err(err) => log::debug!("Could not load REPL history: {err}"),
                }
            }
            None => (),
        }
    }

    fn add_history_entry(&mut self, input: &str) {
        match &self.history_path {
            Some(path) => {
                self.reader.add_history_entry(input);
                match self.reader.save_history(path.as_path()) {
                    Ok(_) => (),
                    Err(err) => {
                        eprintln!("WARNING: Could not save REPL history: {err}")
                    }
                }
            }
            None => (),
        }
    }
}

/// Return true if the formula failed only because a paren was left
/// open, meaning more input could complete it.
pub(crate) fn is_unclosed(result: &FormulaResult) -> bool {
    match result {
        Err(err) => matches!(
            &err.kind,
            FormulaErrKind::MalformedFormula(parse_err)
                if parse_err.kind == ParseErrKind::UnclosedParen
        ),
        Ok(_) => false,
    }
}
