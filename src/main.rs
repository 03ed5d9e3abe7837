use std::process;

use minard::cli;
use minard::run;

fn main() {
    let args = cli::parse();
    if let Err(e) = run::cmd(args) {
        eprintln!("Application error: {e}");
        process::exit(1);
    }
}
