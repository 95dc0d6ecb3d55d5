use anyhow::Result;

use super::super::{args::GetCommand, exit_status::ExitStatus, report::print_key_not_found};
use super::helper::open_index;
use crate::core::display::truncate_value;

pub fn get(cmd: GetCommand) -> Result<ExitStatus> {
    let index = open_index(&cmd.common)?;

    let Some(value) = index.get_value(&cmd.key) else {
        print_key_not_found(&cmd.key);
        return Ok(ExitStatus::Failure);
    };

    if cmd.truncate {
        let max_width = index.config().inlay_hint_length;
        println!("{}", truncate_value(&value, max_width));
    } else {
        println!("{}", value);
    }
    Ok(ExitStatus::Success)
}
