use super::*;

/// Evaluate a rendered `A-on/duration*B` expression the way zoompan would.
fn eval_rendered(expr: &str, on: f64, duration: f64) -> f64 {
    let (a, rest) = expr.split_once("-on/duration*").unwrap();
    let a: f64 = a.parse().unwrap();
    let b: f64 = rest.parse().unwrap();
    a - on / duration * b
}

#[test]
fn crop_must_be_in_unit_interval() {
    assert!(ZoomExpr::new(0.0).is_err());
    assert!(ZoomExpr::new(-0.5).is_err());
    assert!(ZoomExpr::new(1.01).is_err());
    assert!(ZoomExpr::new(f64::NAN).is_err());
    assert!(ZoomExpr::new(1.0).is_ok());
}

#[test]
fn starts_at_inverse_crop_and_ends_at_one() {
    for crop in [0.1, 0.3, 0.5, 0.7, 1.0] {
        let z = ZoomExpr::new(crop).unwrap();
        assert!((z.at(0.0) - 1.0 / crop).abs() < 1e-12);
        assert!((z.at(1.0) - 1.0).abs() < 1e-12);
    }
}

#[test]
fn renders_zoompan_expression() {
    let z = ZoomExpr::new(0.5).unwrap();
    assert_eq!(z.factor(), 2.0);
    assert_eq!(z.to_string(), "2.000000-on/duration*1.000000");
}

#[test]
fn rendered_expression_matches_numeric_evaluation() {
    let z = ZoomExpr::new(0.7).unwrap();
    let rendered = z.to_string();
    for on in [0.0, 5.0, 12.5, 25.0] {
        let got = eval_rendered(&rendered, on, 25.0);
        assert!((got - z.at(on / 25.0)).abs() < 1e-5, "on={on}");
    }
    assert!((eval_rendered(&rendered, 25.0, 25.0) - 1.0).abs() < 1e-5);
}

#[test]
fn full_crop_holds_still() {
    let z = ZoomExpr::new(1.0).unwrap();
    assert_eq!(z.to_string(), "1.000000-on/duration*0.000000");
    assert_eq!(z.at(0.5), 1.0);
}
