//! Keyframe reduction by maximum deviation (Douglas–Peucker).
//!
//! Each keyframe becomes a point `(time, projected value...)`. The interior
//! point farthest from the chord between the current endpoints is kept when
//! its distance exceeds the tolerance, and both halves are processed again.
//! Ranges are processed from an explicit stack so long sampled spans cannot
//! exhaust the call stack.

use log::trace;

use super::KeyframedValue;
use crate::keyframe::Keyframe;
use crate::value::{Vec2, Vec3, Vec4};

impl<V: Clone + PartialEq> KeyframedValue<V> {
    /// Simplify on `(time, project(value))` points.
    pub fn simplify_1d_keyframes(&mut self, tolerance: f64, project: impl Fn(&V) -> f64) {
        self.simplify_keyframes(tolerance, |start, middle, end| {
            distance_1d(
                Vec2::new(start.time, project(&start.value)),
                Vec2::new(middle.time, project(&middle.value)),
                Vec2::new(end.time, project(&end.value)),
            )
        });
    }

    /// Simplify on `(time, x, y)` points.
    pub fn simplify_2d_keyframes(&mut self, tolerance: f64, project: impl Fn(&V) -> Vec2) {
        let lift = |k: &Keyframe<V>| {
            let v = project(&k.value);
            Vec3::new(k.time, v.x, v.y)
        };
        self.simplify_keyframes(tolerance, |start, middle, end| {
            distance_2d(lift(start), lift(middle), lift(end))
        });
    }

    /// Simplify on `(time, x, y, z)` points.
    pub fn simplify_3d_keyframes(&mut self, tolerance: f64, project: impl Fn(&V) -> Vec3) {
        let lift = |k: &Keyframe<V>| {
            let v = project(&k.value);
            Vec4::new(k.time, v.x, v.y, v.z)
        };
        self.simplify_keyframes(tolerance, |start, middle, end| {
            distance_3d(lift(start), lift(middle), lift(end))
        });
    }

    /// Drop keyframes the curve does not need.
    ///
    /// A tolerance of zero or less only removes the interior of runs of equal
    /// values, which never changes the sampled curve.
    pub fn simplify_keyframes<D>(&mut self, tolerance: f64, distance: D)
    where
        D: Fn(&Keyframe<V>, &Keyframe<V>, &Keyframe<V>) -> f64,
    {
        let before = self.keyframes.len();
        if before < 3 {
            return;
        }

        let keep = if tolerance <= 0.0 {
            self.equal_run_boundaries()
        } else {
            self.maximum_deviation(tolerance, &distance)
        };

        let mut flags = keep.into_iter();
        self.keyframes.retain(|_| flags.next().unwrap_or(true));
        trace!(
            "simplified keyframes {} -> {} (tolerance {})",
            before,
            self.keyframes.len(),
            tolerance
        );
    }

    fn equal_run_boundaries(&self) -> Vec<bool> {
        let keyframes = &self.keyframes;
        let n = keyframes.len();
        (0..n)
            .map(|i| {
                i == 0
                    || i + 1 == n
                    || keyframes[i - 1].value != keyframes[i].value
                    || keyframes[i + 1].value != keyframes[i].value
            })
            .collect()
    }

    fn maximum_deviation<D>(&self, tolerance: f64, distance: &D) -> Vec<bool>
    where
        D: Fn(&Keyframe<V>, &Keyframe<V>, &Keyframe<V>) -> f64,
    {
        let keyframes = &self.keyframes;
        let n = keyframes.len();
        let mut keep = vec![false; n];
        keep[0] = true;
        keep[n - 1] = true;

        let mut ranges = vec![(0usize, n - 1)];
        while let Some((first, last)) = ranges.pop() {
            if last <= first + 1 {
                continue;
            }

            let mut max_distance = 0.0;
            let mut farthest = first;
            for middle in first + 1..last {
                let d = distance(&keyframes[first], &keyframes[middle], &keyframes[last]);
                if d > max_distance {
                    max_distance = d;
                    farthest = middle;
                }
            }

            if max_distance > tolerance {
                keep[farthest] = true;
                ranges.push((farthest, last));
                ranges.push((first, farthest));
            }
        }
        keep
    }
}

/// Perpendicular distance from `middle` to the line through `start` and
/// `end`, from the triangle area. Falls back to the distance to `start` when
/// the two coincide.
pub fn distance_1d(start: Vec2, middle: Vec2, end: Vec2) -> f64 {
    let base = end - start;
    let length = base.norm();
    if length == 0.0 {
        return (middle - start).norm();
    }
    let offset = middle - start;
    (base.x * offset.y - base.y * offset.x).abs() / length
}

/// Perpendicular distance in 3-space using vector rejection.
pub fn distance_2d(start: Vec3, middle: Vec3, end: Vec3) -> f64 {
    let base = end - start;
    let offset = middle - start;
    let length_squared = base.norm_squared();
    if length_squared == 0.0 {
        return offset.norm();
    }
    (offset - base * (offset.dot(&base) / length_squared)).norm()
}

/// Perpendicular distance in 4-space using vector rejection.
pub fn distance_3d(start: Vec4, middle: Vec4, end: Vec4) -> f64 {
    let base = end - start;
    let offset = middle - start;
    let length_squared = base.norm_squared();
    if length_squared == 0.0 {
        return offset.norm();
    }
    (offset - base * (offset.dot(&base) / length_squared)).norm()
}
