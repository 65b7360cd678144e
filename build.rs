use std::env;
use std::fs;
use std::io::{self, Error, ErrorKind};
use std::path::{Path, PathBuf};

use clap_complete::shells::{Bash, Fish};

include!("src/cli.rs");

const BIN_NAME: &str = "formula";

fn main() -> Result<(), Error> {
    println!("cargo:rerun-if-changed=src/cli.rs");

    let out_dir = env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| Error::new(ErrorKind::NotFound, "OUT_DIR env var not set"))?;

    write_stamp(&out_dir)?;
    write_completions(&out_dir)
}

/// Write `formula.stamp` into OUT_DIR. Its mtime marks the most recent
/// build, and its contents name the package version that was built.
fn write_stamp(out_dir: &Path) -> io::Result<()> {
    let version = env::var("CARGO_PKG_VERSION").unwrap_or_default();
    fs::write(out_dir.join(format!("{BIN_NAME}.stamp")), format!("{version}\n"))
}

fn write_completions(out_dir: &Path) -> io::Result<()> {
    let mut cmd = build_cli();
    clap_complete::generate_to(Bash, &mut cmd, BIN_NAME, out_dir)?;
    clap_complete::generate_to(Fish, &mut cmd, BIN_NAME, out_dir)?;
    Ok(())
}
