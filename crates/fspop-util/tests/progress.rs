use fspop_util::progress::{bytes_bar, summary_line};

#[test]
fn test_summary_line_pads_label() {
    assert_eq!(summary_line("path:", "/data"), "path:             /data");
    assert_eq!(
        summary_line("large file size:", "1024 bytes"),
        "large file size:  1024 bytes"
    );
}

#[test]
fn test_summary_line_long_label_not_truncated() {
    let line = summary_line("a label longer than sixteen", "v");
    assert_eq!(line, "a label longer than sixteen  v");
}

#[test]
fn test_bytes_bar_length() {
    let pb = bytes_bar(4096, "Populating");
    assert_eq!(pb.length(), Some(4096));
    pb.inc(1024);
    assert_eq!(pb.position(), 1024);
    pb.finish_and_clear();
}
