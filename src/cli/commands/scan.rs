use anyhow::Result;

use super::super::{
    args::ScanCommand,
    exit_status::ExitStatus,
    report::{print_no_directories, print_scan},
};
use super::helper::open_index;

/// Run discovery regardless of the auto-discovery setting and summarize the
/// resulting index.
pub fn scan(cmd: ScanCommand) -> Result<ExitStatus> {
    let index = open_index(&cmd.common)?;

    if index.rescan().is_empty() {
        print_no_directories();
        return Ok(ExitStatus::Failure);
    }

    let key_count = index.snapshot().len();
    print_scan(index.project_root(), &index.directory_listing(), key_count);
    Ok(ExitStatus::Success)
}
