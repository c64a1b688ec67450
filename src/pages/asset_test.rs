use super::*;

#[test]
fn format_size_renders_bytes_below_one_kib() {
    assert_eq!(format_size(0), "0 B");
    assert_eq!(format_size(512), "512 B");
}

#[test]
fn format_size_renders_kib_and_mib() {
    assert_eq!(format_size(2048), "2.0 KiB");
    assert_eq!(format_size(1_572_864), "1.5 MiB");
}
