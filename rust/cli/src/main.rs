use std::io::{stderr, stdout};

fn main() {
    let mut out = stdout();
    let mut err = stderr();
    std::process::exit(trunfo_cli::run(std::env::args(), &mut out, &mut err));
}
