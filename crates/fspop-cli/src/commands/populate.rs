//! Handler for a regular population run.

use fspop_core::config::PopulationConfig;
use fspop_core::fill::FillBuffer;
use fspop_ops::ops_populate::{populate, Progress};
use fspop_util::progress::{bytes_bar, status, status_warn};
use miette::Result;

pub fn exec(config: &PopulationConfig) -> Result<()> {
    let fill = FillBuffer::new();
    let pb = bytes_bar(config.total_size(), "Populating");

    let result = populate(config, &fill, |progress| {
        pb.set_position(progress.planned_bytes);
        pb.suspend(|| eprintln!("{}", progress_line(progress)));
    });
    pb.finish_and_clear();
    let report = result?;

    status(
        "Populated",
        &format!(
            "{} files ({} bytes), appended {} bytes to {} files",
            report.files, report.planned_bytes, report.bytes_written, report.files_extended
        ),
    );
    if report.files_oversized > 0 {
        status_warn(
            "Warning",
            &format!(
                "{} files are larger than planned and were left as is",
                report.files_oversized
            ),
        );
    }
    Ok(())
}

fn progress_line(progress: &Progress<'_>) -> String {
    format!(
        "completed {} bytes after {} files\n    (last: \"{}\" at {} bytes)",
        progress.planned_bytes,
        progress.files,
        progress.last_path.display(),
        progress.last_size
    )
}
