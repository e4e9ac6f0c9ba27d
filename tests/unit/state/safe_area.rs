use super::*;

#[test]
fn default_state_has_zero_padding() {
    let s = SafeAreaViewState::default();
    assert_eq!(s.padding(), EdgeInsets::ZERO);
    assert!(s.padding().is_zero());
}

#[test]
fn padding_is_reported_as_constructed() {
    let s = SafeAreaViewState::new(EdgeInsets::new(10.0, 0.0, 0.0, 0.0));
    assert_eq!(s.padding().top, 10.0);
    assert_eq!(s.padding().vertical(), 10.0);
    assert_eq!(s.padding().horizontal(), 0.0);
}

#[test]
fn serializes_padding_edges() {
    let s = SafeAreaViewState::new(EdgeInsets::new(10.0, 0.0, 34.0, 0.0));
    let v = serde_json::to_value(s).unwrap();
    assert_eq!(v["padding"]["top"], 10.0);
    assert_eq!(v["padding"]["bottom"], 34.0);
}
