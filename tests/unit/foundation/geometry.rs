use super::*;

#[test]
fn default_is_zero() {
    let e = EdgeInsets::default();
    assert!(e.is_zero());
    assert_eq!(e, EdgeInsets::ZERO);
    assert_eq!(e.horizontal(), 0.0);
    assert_eq!(e.vertical(), 0.0);
}

#[test]
fn sums_per_axis() {
    let e = EdgeInsets::new(10.0, 1.0, 4.0, 2.0);
    assert_eq!(e.vertical(), 14.0);
    assert_eq!(e.horizontal(), 3.0);
    assert!(!e.is_zero());
}

#[test]
fn kurbo_mapping_preserves_edges() {
    let k = EdgeInsets::new(10.0, 1.0, 4.0, 2.0).to_kurbo();
    assert_eq!(k.x0, 1.0);
    assert_eq!(k.y0, 10.0);
    assert_eq!(k.x1, 2.0);
    assert_eq!(k.y1, 4.0);
}

#[cfg(feature = "single-precision")]
#[test]
fn single_precision_edges_widen_exactly() {
    let top: f32 = 0.1;
    let e = EdgeInsets::new(top, 0.0, 0.0, 0.0);
    assert_eq!(std::mem::size_of_val(&e.top), 4);
    assert_eq!(e.to_kurbo().y0, f64::from(top));
}

#[test]
fn missing_json_fields_default_to_zero() {
    let e: EdgeInsets = serde_json::from_str(r#"{"top":10}"#).unwrap();
    assert_eq!(e, EdgeInsets::new(10.0, 0.0, 0.0, 0.0));
}
