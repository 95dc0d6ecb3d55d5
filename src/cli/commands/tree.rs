use anyhow::Result;

use super::super::{
    args::TreeCommand,
    exit_status::ExitStatus,
    report::{print_no_directories, print_tree},
};
use super::helper::open_index;

pub fn tree(cmd: TreeCommand) -> Result<ExitStatus> {
    let index = open_index(&cmd.common)?;
    let listings = index.directory_listing();

    if listings.is_empty() {
        print_no_directories();
        return Ok(ExitStatus::Failure);
    }

    print_tree(index.project_root(), &listings);
    Ok(ExitStatus::Success)
}
