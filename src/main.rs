use std::io;

use chess_rules::frontend::{self, options::SessionOptions};

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    frontend::run(stdin.lock(), stdout.lock(), SessionOptions::default())
}
