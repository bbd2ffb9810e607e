use super::*;

#[test]
fn ring_dasharray_formats_percentage() {
    assert_eq!(ring_dasharray(75), "75, 100");
}

#[test]
fn ring_dasharray_clamps_above_hundred() {
    assert_eq!(ring_dasharray(140), "100, 100");
}
