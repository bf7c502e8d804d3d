use super::*;

#[test]
fn endpoints_are_exact_for_every_mode() {
    for mode in EasingMode::ALL {
        assert_eq!(mode.apply(0.0), 0.0, "{mode} at 0");
        assert_eq!(mode.apply(1.0), 1.0, "{mode} at 1");
    }
}

#[test]
fn input_is_clamped() {
    for mode in EasingMode::ALL {
        assert_eq!(mode.apply(-0.5), 0.0);
        assert_eq!(mode.apply(1.5), 1.0);
    }
}

#[test]
fn curves_approach_their_endpoints() {
    for mode in EasingMode::ALL {
        let curve = mode.curve();
        assert!(curve(1e-9).abs() < 1e-3, "{mode} near 0");
        assert!((curve(1.0 - 1e-9) - 1.0).abs() < 1e-3, "{mode} near 1");
    }
}

#[test]
fn monotonic_modes_never_decrease() {
    for mode in EasingMode::ALL.into_iter().filter(|m| m.is_monotonic()) {
        let mut prev = mode.apply(0.0);
        for i in 1..=200 {
            let v = mode.apply(f64::from(i) / 200.0);
            assert!(v + 1e-12 >= prev, "{mode} decreased at step {i}");
            assert!((0.0..=1.0).contains(&v), "{mode} left [0, 1] at step {i}");
            prev = v;
        }
    }
}

#[test]
fn in_out_modes_pass_through_midpoint() {
    for mode in EasingMode::ALL
        .into_iter()
        .filter(|m| m.id().starts_with("inout"))
    {
        assert!((mode.apply(0.5) - 0.5).abs() < 1e-9, "{mode}");
    }
}

#[test]
fn back_and_elastic_overshoot() {
    assert!(EasingMode::InBack.apply(0.2) < 0.0);
    assert!(EasingMode::OutBack.apply(0.5) > 1.0);

    let peak = (1..100)
        .map(|i| EasingMode::OutElastic.apply(f64::from(i) / 100.0))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.0);

    for mode in EasingMode::ALL {
        if !mode.overshoots() {
            for i in 0..=100 {
                let v = mode.apply(f64::from(i) / 100.0);
                assert!((-1e-12..=1.0 + 1e-12).contains(&v), "{mode} overshot");
            }
        }
    }
}

#[test]
fn ids_round_trip_through_from_str() {
    for mode in EasingMode::ALL {
        assert_eq!(mode.id().parse::<EasingMode>().unwrap(), mode);
    }
    assert_eq!(
        "InOutBounce".parse::<EasingMode>().unwrap(),
        EasingMode::InOutBounce
    );
    assert_eq!(EasingMode::default(), EasingMode::Linear);
}

#[test]
fn unknown_id_fails_with_usage_error() {
    let err = "wobble".parse::<EasingMode>().unwrap_err();
    assert!(matches!(err, ZoomError::Usage(_)));
    assert!(err.to_string().contains("inoutbounce"));
}

#[test]
fn serde_uses_lowercase_ids() {
    let json = serde_json::to_string(&EasingMode::OutElastic).unwrap();
    assert_eq!(json, "\"outelastic\"");
    let back: EasingMode = serde_json::from_str("\"inoutsine\"").unwrap();
    assert_eq!(back, EasingMode::InOutSine);
}

#[test]
fn all_lists_distinct_modes() {
    let mut ids: Vec<&str> = EasingMode::ALL.iter().map(|m| m.id()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 31);
}

#[test]
fn elastic_curves_use_half_unit_period() {
    assert!((EasingMode::OutElastic.apply(0.5) - 0.96875).abs() < 1e-12);
    assert!((EasingMode::InElastic.apply(0.5) - 0.03125).abs() < 1e-12);
    assert!((EasingMode::InOutElastic.apply(0.25) - 0.015625).abs() < 1e-12);
    assert!((EasingMode::InOutElastic.apply(0.75) - 0.984375).abs() < 1e-12);
}
