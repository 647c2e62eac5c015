use storyboard_commands::keyframed::{distance_1d, distance_2d, distance_3d};
use storyboard_commands::{interp, KeyframedValue, Vec2, Vec3, Vec4};

fn channel(values: &[(f64, f64)]) -> KeyframedValue<f64> {
    let mut channel = KeyframedValue::with_interpolator(interp::scalar, 0.0);
    for &(time, value) in values {
        channel.add_value(time, value);
    }
    channel
}

fn times<V>(channel: &KeyframedValue<V>) -> Vec<f64> {
    channel.iter().map(|k| k.time).collect()
}

#[test]
fn collinear_points_collapse_to_endpoints() {
    let samples: Vec<(f64, f64)> = (0..=10).map(|i| (i as f64 * 100.0, i as f64 * 3.0)).collect();
    let mut ch = channel(&samples);
    ch.simplify_1d_keyframes(0.5, |v| *v);
    assert_eq!(times(&ch), vec![0.0, 1000.0]);
}

#[test]
fn peak_above_tolerance_is_kept() {
    let mut ch = channel(&[(0.0, 0.0), (50.0, 2.0), (100.0, 40.0), (150.0, 2.0), (200.0, 0.0)]);
    ch.simplify_1d_keyframes(5.0, |v| *v);
    assert!(times(&ch).contains(&100.0), "peak dropped: {:?}", times(&ch));
    assert_eq!(ch.start_time(), Some(0.0));
    assert_eq!(ch.end_time(), Some(200.0));
}

#[test]
fn deviation_below_tolerance_is_dropped() {
    let mut ch = channel(&[(0.0, 0.0), (100.0, 0.4), (200.0, 0.0)]);
    ch.simplify_1d_keyframes(1.0, |v| *v);
    assert_eq!(times(&ch), vec![0.0, 200.0]);
}

#[test]
fn short_sequences_are_untouched() {
    let mut ch = channel(&[(0.0, 0.0), (100.0, 50.0)]);
    ch.simplify_1d_keyframes(1000.0, |v| *v);
    assert_eq!(ch.len(), 2);

    let mut empty = channel(&[]);
    empty.simplify_1d_keyframes(1.0, |v| *v);
    assert!(empty.is_empty());
}

#[test]
fn zero_tolerance_only_removes_equal_run_interiors() {
    let mut ch = channel(&[
        (0.0, 1.0),
        (10.0, 1.0),
        (20.0, 1.0),
        (30.0, 2.0),
        (40.0, 3.0),
        (50.0, 3.0),
        (60.0, 3.0),
    ]);
    let before: Vec<f64> = (0..=60).map(|t| ch.value_at(t as f64).unwrap()).collect();

    ch.simplify_1d_keyframes(0.0, |v| *v);
    assert_eq!(times(&ch), vec![0.0, 20.0, 30.0, 40.0, 60.0]);

    let after: Vec<f64> = (0..=60).map(|t| ch.value_at(t as f64).unwrap()).collect();
    assert_eq!(before, after);
}

#[test]
fn simplification_is_idempotent() {
    let samples: Vec<(f64, f64)> = (0..200)
        .map(|i| {
            let t = i as f64 * 10.0;
            (t, (t / 150.0).sin() * 80.0)
        })
        .collect();
    let mut ch = channel(&samples);
    ch.simplify_1d_keyframes(1.0, |v| *v);
    let once = times(&ch);
    ch.simplify_1d_keyframes(1.0, |v| *v);
    assert_eq!(once, times(&ch));
    assert!(once.len() < samples.len());
}

#[test]
fn simplified_curve_stays_within_tolerance() {
    let samples: Vec<(f64, f64)> = (0..=100)
        .map(|i| {
            let t = i as f64 * 20.0;
            (t, (t / 300.0).sin() * 120.0)
        })
        .collect();
    let original = channel(&samples);
    let mut ch = original.clone();
    let tolerance = 2.0;
    ch.simplify_1d_keyframes(tolerance, |v| *v);

    // Perpendicular distance bounds the vertical error only loosely; check
    // against a generous multiple on the steepest part of the curve.
    for &(t, v) in &samples {
        let sampled = ch.value_at(t).unwrap();
        assert!(
            (sampled - v).abs() <= tolerance * 10.0,
            "t={t} original={v} simplified={sampled}"
        );
    }
    for keyframe in &ch {
        assert_eq!(keyframe.value, original.value_at(keyframe.time).unwrap());
    }
}

#[test]
fn two_dimensional_path_keeps_corner() {
    let mut ch = KeyframedValue::with_interpolator(interp::vec2, Vec2::zeros());
    for i in 0..=10 {
        ch.add_value(i as f64 * 10.0, Vec2::new(i as f64 * 10.0, 0.0));
    }
    for i in 1..=10 {
        ch.add_value(100.0 + i as f64 * 10.0, Vec2::new(100.0, i as f64 * 10.0));
    }
    ch.simplify_2d_keyframes(1.0, |p| *p);
    assert_eq!(times(&ch), vec![0.0, 100.0, 200.0]);
    assert_eq!(ch.keyframes()[1].value, Vec2::new(100.0, 0.0));
}

#[test]
fn three_dimensional_projection_is_used() {
    let mut ch = KeyframedValue::with_interpolator(interp::vec3, Vec3::zeros());
    ch.add_value(0.0, Vec3::new(0.0, 0.0, 0.0));
    ch.add_value(50.0, Vec3::new(0.0, 0.0, 0.3));
    ch.add_value(100.0, Vec3::new(0.0, 0.0, 0.0));

    let mut coarse = ch.clone();
    coarse.simplify_3d_keyframes(1.0, |c| *c);
    assert_eq!(coarse.len(), 2);

    // Scaling the projection into a larger space makes the bump significant.
    ch.simplify_3d_keyframes(1.0, |c| c * 255.0);
    assert_eq!(ch.len(), 3);
}

#[test]
fn alternating_values_split_down_to_every_point() {
    let mut ch = KeyframedValue::with_interpolator(interp::scalar, 0.0);
    for i in 0..4_000 {
        ch.add_value(i as f64, if i % 2 == 0 { 0.0 } else { 10.0 });
    }
    ch.simplify_1d_keyframes(1.0, |v| *v);
    assert_eq!(ch.len(), 4_000);
}

#[test]
fn distance_functions() {
    let d = distance_1d(Vec2::new(0.0, 0.0), Vec2::new(5.0, 3.0), Vec2::new(10.0, 0.0));
    assert!((d - 3.0).abs() < 1e-12);

    let d = distance_2d(
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(5.0, 3.0, 4.0),
        Vec3::new(10.0, 0.0, 0.0),
    );
    assert!((d - 5.0).abs() < 1e-12);

    let d = distance_3d(
        Vec4::new(0.0, 0.0, 0.0, 0.0),
        Vec4::new(5.0, 1.0, 2.0, 2.0),
        Vec4::new(10.0, 0.0, 0.0, 0.0),
    );
    assert!((d - 3.0).abs() < 1e-12);
}

#[test]
fn degenerate_base_measures_from_start() {
    let d = distance_1d(Vec2::new(1.0, 1.0), Vec2::new(4.0, 5.0), Vec2::new(1.0, 1.0));
    assert!((d - 5.0).abs() < 1e-12);

    let d = distance_2d(Vec3::zeros(), Vec3::new(0.0, 3.0, 4.0), Vec3::zeros());
    assert!((d - 5.0).abs() < 1e-12);
}
