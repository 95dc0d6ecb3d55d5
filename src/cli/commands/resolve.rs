use anyhow::Result;

use super::super::{
    args::ResolveCommand,
    exit_status::ExitStatus,
    report::{print_key_not_found, print_location},
};
use super::helper::{key_segments, open_index};

pub fn resolve(cmd: ResolveCommand) -> Result<ExitStatus> {
    let index = open_index(&cmd.common)?;
    let segments = key_segments(&cmd.key);

    let locations = if cmd.all {
        index.resolve_key_locations(&segments)
    } else {
        index.resolve_key_path(&segments).into_iter().collect()
    };

    if locations.is_empty() {
        print_key_not_found(&cmd.key);
        return Ok(ExitStatus::Failure);
    }

    for location in &locations {
        print_location(index.project_root(), location);
    }
    Ok(ExitStatus::Success)
}
