use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{get::get, init::init, keys::keys, resolve::resolve, scan::scan, tree::tree},
    exit_status::ExitStatus,
};

/// Dispatch to the command handler for the parsed arguments.
///
/// # Returns
/// - `Ok(ExitStatus)` describing whether the command found what it looked for
/// - `Err` if the command fails (e.g., invalid config, unreadable root)
pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Init(cmd)) => init(cmd),
        Some(Command::Scan(cmd)) => scan(cmd),
        Some(Command::Keys(cmd)) => keys(cmd),
        Some(Command::Get(cmd)) => get(cmd),
        Some(Command::Resolve(cmd)) => resolve(cmd),
        Some(Command::Tree(cmd)) => tree(cmd),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
