use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use approx::assert_relative_eq;
use storyboard_commands::interp::{self, functions};
use storyboard_commands::{unwrap_angle, Color, Easing, KeyframedValue, Quat, Vec2, Vec3};

#[test]
fn angle_lerp_crosses_zero_on_the_short_arc() {
    let from = 350f64.to_radians();
    let to = 10f64.to_radians();

    let quarter = interp::angle(&from, &to, 0.25);
    assert_relative_eq!(quarter.to_degrees(), 355.0, epsilon = 1e-9);

    let half = interp::angle(&from, &to, 0.5);
    assert_relative_eq!(half.sin(), 0.0, epsilon = 1e-9);
    assert_relative_eq!(half.cos(), 1.0, epsilon = 1e-9);

    let back = interp::angle(&to, &from, 0.5);
    assert_relative_eq!(back.sin(), 0.0, epsilon = 1e-9);
}

#[test]
fn angle_delta_wraps_into_half_open_range() {
    assert_relative_eq!(functions::angle_delta(0.0, 3.0 * PI), PI, epsilon = 1e-12);
    assert_relative_eq!(functions::angle_delta(0.0, -PI), PI, epsilon = 1e-12);
    assert_relative_eq!(
        functions::angle_delta(0.1, 0.1 + 2.0 * PI + 0.2),
        0.2,
        epsilon = 1e-12
    );
}

#[test]
fn unwrap_angle_keeps_rotation_continuous() {
    assert_eq!(unwrap_angle(None, 2.5), 2.5);

    let previous = 3.1;
    let next = unwrap_angle(Some(previous), -3.1);
    assert!(next > previous);
    assert_relative_eq!(next, 2.0 * PI - 3.1, epsilon = 1e-12);

    // A full sweep of atan2 output stays monotonic once unwrapped.
    let mut last: Option<f64> = None;
    let mut values = Vec::new();
    for i in 0..=40 {
        let theta = i as f64 * PI / 10.0;
        let raw = theta.sin().atan2(theta.cos());
        let unwrapped = unwrap_angle(last, raw);
        values.push(unwrapped);
        last = Some(unwrapped);
    }
    assert!(values.windows(2).all(|w| w[1] > w[0]));
    assert_relative_eq!(values[40], 4.0 * PI, epsilon = 1e-9);
}

#[test]
fn vector_and_color_lerp() {
    let v = interp::vec2(&Vec2::new(0.0, 10.0), &Vec2::new(10.0, 30.0), 0.25);
    assert_relative_eq!(v, Vec2::new(2.5, 15.0), epsilon = 1e-12);

    let v = interp::vec3(&Vec3::zeros(), &Vec3::new(2.0, 4.0, 6.0), 0.5);
    assert_relative_eq!(v, Vec3::new(1.0, 2.0, 3.0), epsilon = 1e-12);

    let c = interp::color(&Color::BLACK, &Color::WHITE, 0.5);
    assert_eq!(c, Color::new(0.5, 0.5, 0.5));
}

#[test]
fn quaternion_slerp_halfway() {
    let a = Quat::identity();
    let b = Quat::from_euler_angles(0.0, 0.0, FRAC_PI_2);
    let mid = interp::quaternion(&a, &b, 0.5);
    assert_relative_eq!(mid.angle(), FRAC_PI_4, epsilon = 1e-9);
    assert_relative_eq!(interp::quaternion(&a, &b, 1.0).angle(), FRAC_PI_2, epsilon = 1e-9);
}

#[test]
fn quaternion_channel_samples_through_slerp() {
    let mut channel = KeyframedValue::with_interpolator(interp::quaternion, Quat::identity());
    channel.add_value(0.0, Quat::identity());
    channel.add_value(100.0, Quat::from_euler_angles(0.0, 0.0, FRAC_PI_2));
    let sampled = channel.value_at(50.0).unwrap();
    assert_relative_eq!(sampled.angle(), FRAC_PI_4, epsilon = 1e-9);
}

#[test]
fn boolean_policies() {
    assert!(interp::bool_from(&true, &false, 0.9));
    assert!(!interp::bool_to(&true, &false, 0.1));
    assert!(interp::bool_or(&false, &true, 0.0));
    assert!(!interp::bool_and(&false, &true, 1.0));
    assert!(interp::bool_and(&true, &true, 0.5));
}

#[test]
fn flag_channel_holds_left_value_until_next_keyframe() {
    let mut channel = KeyframedValue::with_interpolator(interp::bool_from, false);
    channel.add_value(0.0, false);
    channel.add_value(100.0, true);
    assert!(!channel.value_at(99.0).unwrap());
    assert!(channel.value_at(100.0).unwrap());
}

#[test]
fn step_easing_jumps_at_the_end() {
    let mut channel = KeyframedValue::with_interpolator(interp::scalar, 0.0);
    channel.add_value(0.0, 0.0);
    channel.add_eased(100.0, 10.0, Easing::Step, false);
    assert_eq!(channel.value_at(99.0).unwrap(), 0.0);
    assert_eq!(channel.value_at(100.0).unwrap(), 10.0);
}

#[test]
fn out_and_in_out_easings_mirror_the_in_curve() {
    for x in [0.1, 0.3, 0.7, 0.9] {
        assert_relative_eq!(
            Easing::CubicOut.apply(x),
            1.0 - Easing::CubicIn.apply(1.0 - x),
            epsilon = 1e-12
        );
    }
    assert_relative_eq!(Easing::SineInOut.apply(0.5), 0.5, epsilon = 1e-12);
    assert_relative_eq!(Easing::QuadInOut.apply(0.25), 0.125, epsilon = 1e-12);
    assert!(Easing::BackIn.apply(0.2) < 0.0);
    assert!(Easing::ElasticOut.apply(0.2) > 1.0);
    assert_relative_eq!(Easing::BounceOut.apply(1.0), 1.0, epsilon = 1e-12);
}
