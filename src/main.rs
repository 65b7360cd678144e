use std::path::{Path, PathBuf};
use std::process::exit;

use formula::driver::{Driver, DriverErr, DriverResult, LineResult};
use formula::repl::Repl;

mod cli;

fn main() {
    env_logger::init();

    let matches = cli::build_cli().get_matches();
    let debug = matches.get_flag("debug");
    let driver = Driver::new(debug);

    let result = if let Some(code) = matches.get_one::<String>("code") {
        execute_text(&driver, code)
    } else if let Some(words) = matches.get_many::<String>("expression") {
        let text = words.map(String::as_str).collect::<Vec<_>>().join(" ");
        execute_text(&driver, &text)
    } else if let Some(file_name) = matches.get_one::<String>("file") {
        if file_name == "-" {
            print_line_results(driver.execute_stdin())
        } else {
            print_line_results(driver.execute_file(Path::new(file_name)))
        }
    } else {
        let history_path = if matches.get_flag("no_history") {
            None
        } else {
            matches.get_one::<String>("history_path").map(|path| expand_home(path))
        };
        Repl::new(history_path, driver).and_then(|mut repl| repl.run())
    };

    match result {
        Ok(code) => exit(i32::from(code)),
        Err(err) => {
            eprintln!("{err}");
            exit(i32::from(err.exit_code()));
        }
    }
}

fn execute_text(driver: &Driver, text: &str) -> DriverResult {
    let value = driver.execute_text(text)?;
    println!("{value}");
    Ok(0)
}

/// Print one result per line. The exit code is that of the last failed
/// line or 0 if every line succeeded.
fn print_line_results(results: Result<Vec<LineResult>, DriverErr>) -> DriverResult {
    let mut exit_code = 0;
    for (line_no, result) in results? {
        match result {
            Ok(value) => println!("{value}"),
            Err(err) => {
                eprintln!("Line {line_no}: {err}");
                exit_code = err.exit_code();
            }
        }
    }
    Ok(exit_code)
}

/// Expand a leading `~/` to the user's home directory.
fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
