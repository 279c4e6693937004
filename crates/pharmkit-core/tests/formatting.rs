use pharmkit_core::format;

#[test]
fn fixed_point_rendering() {
    assert_eq!(format::fixed(11.025, 1), "11.0");
    assert_eq!(format::fixed(-20.0, 2), "-20.00");
    assert_eq!(format::fixed(0.55, 2), "0.55");
    assert_eq!(format::fixed(39.99999999999999, 0), "40");
}

#[test]
fn plain_echoes_whole_values_without_fraction() {
    assert_eq!(format::plain(300.0), "300");
    assert_eq!(format::plain(2.5), "2.5");
    assert_eq!(format::plain(0.05), "0.05");
}

#[test]
fn thousands_grouping() {
    assert_eq!(format::group_thousands(0), "0");
    assert_eq!(format::group_thousands(999), "999");
    assert_eq!(format::group_thousands(11_000), "11,000");
    assert_eq!(format::group_thousands(1_234_567), "1,234,567");
    assert_eq!(format::group_thousands(-5_000), "-5,000");
}
