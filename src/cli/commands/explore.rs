use crate::config::Config;
use crate::core::session;
use crate::errors::AppResult;
use std::io;

/// Handle the interactive session (default command)
pub fn handle(cfg: &Config) -> AppResult<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();
    session::run(&mut input, &mut out, cfg)
}
