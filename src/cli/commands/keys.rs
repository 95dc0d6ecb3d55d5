use std::io::{self, Write};

use anyhow::Result;

use super::super::{args::KeysCommand, exit_status::ExitStatus};
use super::helper::open_index;

pub fn keys(cmd: KeysCommand) -> Result<ExitStatus> {
    let index = open_index(&cmd.common)?;
    let keys = index.complete(cmd.prefix.as_deref().unwrap_or_default());

    let mut stdout = io::stdout().lock();
    for key in &keys {
        writeln!(stdout, "{}", key)?;
    }
    Ok(ExitStatus::found(!keys.is_empty()))
}
