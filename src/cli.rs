use clap::builder::FalseyValueParser;
use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    let expression_help = concat!(
        "Formula to evaluate. Multiple args are joined with spaces, so\n",
        "quoting is optional: formula 1 + 2 '*' 3"
    );

    let file_help = concat!(
        "Evaluate each non-blank line of a file and print one result\n",
        "per line. Use a single dash to read from stdin."
    );

    Command::new("formula")
        .version("0.0.0")
        .about("Evaluate integer arithmetic formulas")
        .arg(
            Arg::new("expression")
                .index(1)
                .required(false)
                .num_args(1..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true)
                .conflicts_with_all(["code", "file"])
                .help(expression_help),
        )
        .arg(
            Arg::new("code")
                .short('c')
                .long("code")
                .required(false)
                .num_args(1)
                .conflicts_with("file")
                .help("Evaluate a single formula"),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .required(false)
                .num_args(1)
                .help(file_help),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .action(ArgAction::SetTrue)
                .value_parser(FalseyValueParser::new())
                .env("FORMULA_DEBUG")
                .help("Show tokens and expression tree?"),
        )
        .arg(
            Arg::new("history_path")
                .long("history-path")
                .required(false)
                .num_args(1)
                .default_value("~/.config/formula/repl-history")
                .help("Path to REPL history file"),
        )
        .arg(
            Arg::new("no_history")
                .long("no-history")
                .action(ArgAction::SetTrue)
                .help("Disable REPL history? [default: history enabled]"),
        )
}
