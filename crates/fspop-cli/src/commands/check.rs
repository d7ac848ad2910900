//! Handler for `--check`: compare the tree on disk with its plan.

use fspop_core::config::PopulationConfig;
use fspop_ops::ops_check::check;
use fspop_util::progress::{status, status_info, status_warn};
use miette::Result;

pub fn exec(config: &PopulationConfig) -> Result<()> {
    let report = check(config)?;

    if report.is_complete() {
        status(
            "Complete",
            &format!(
                "{} files match the plan",
                report.complete + report.oversized
            ),
        );
    } else {
        status_info(
            "Incomplete",
            &format!(
                "{} complete, {} short, {} missing, {} bytes to write",
                report.complete, report.short, report.missing, report.missing_bytes
            ),
        );
        if let Some(path) = &report.first_incomplete {
            status_info("Resume at", &path.display().to_string());
        }
    }
    if report.blocked > 0 {
        status_warn(
            "Blocked",
            &format!("{} planned paths are not regular files", report.blocked),
        );
    }
    if report.oversized > 0 {
        status_warn(
            "Oversized",
            &format!("{} files are larger than planned", report.oversized),
        );
    }
    Ok(())
}
