use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_from_range() {
    let span = Span::from_range(2..5);
    assert_eq!(span, Span::new(2, 5));
    assert_eq!(span.len(), 3);
    assert!(!span.is_empty());
    assert_eq!(span.to_range(), 2..5);
}

#[test]
fn test_point_is_empty() {
    let span = Span::point(7);
    assert!(span.is_empty());
    assert_eq!(span.len(), 0);
    assert_eq!(span.to_string(), "7..7");
}

#[test]
fn test_from_range_clamps_huge_offsets() {
    let huge = u32::MAX as usize + 10;
    let span = Span::from_range(huge..huge + 1);
    assert_eq!(span, Span::new(u32::MAX, u32::MAX));
}
