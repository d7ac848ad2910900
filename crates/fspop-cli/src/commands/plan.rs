//! Handler for `--dry-run`: show what a run would produce.

use fspop_core::config::PopulationConfig;
use fspop_ops::ops_plan::plan_summary;
use fspop_util::progress::status_info;
use miette::Result;

pub fn exec(config: &PopulationConfig) -> Result<()> {
    let summary = plan_summary(config);

    status_info(
        "Plan",
        &format!(
            "{} files ({} bulk, {} standard) in {} directories, {} bytes",
            summary.files,
            summary.bulk_files,
            summary.standard_files,
            summary.directories,
            summary.total_bytes
        ),
    );
    if let Some(last) = summary.last {
        status_info(
            "Last",
            &format!(
                "{} at {} bytes",
                last.relative_path().display(),
                last.expected_size
            ),
        );
    }
    Ok(())
}
