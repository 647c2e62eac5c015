//! Single timed value with the easing used to reach it.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::easing::Easing;

/// A (time, value, easing) anchor.
///
/// Equality compares time and value only; easing and the `until` marker do
/// not take part. Ordering is by time alone, see [`Keyframe::compare_time`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Keyframe<V> {
    pub time: f64,
    pub value: V,
    #[serde(default)]
    pub ease: Easing,
    /// Set on keyframes that only hold the previous value up to `time`.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub until: bool,
}

impl<V> Keyframe<V> {
    #[inline]
    pub fn new(time: f64, value: V) -> Self {
        Self::eased(time, value, Easing::Linear)
    }

    #[inline]
    pub fn eased(time: f64, value: V, ease: Easing) -> Self {
        Self {
            time,
            value,
            ease,
            until: false,
        }
    }

    /// Hold marker produced by `KeyframedValue::until`.
    #[inline]
    pub(crate) fn hold(time: f64, value: V) -> Self {
        Self {
            time,
            value,
            ease: Easing::Linear,
            until: true,
        }
    }

    /// Sign of `self.time - other.time`.
    #[inline]
    pub fn compare_time(&self, other: &Self) -> Ordering {
        self.time.total_cmp(&other.time)
    }
}

impl<V: Clone> Keyframe<V> {
    /// Copy at another time, keeping value and easing.
    #[inline]
    pub fn with_time(&self, time: f64) -> Self {
        Self {
            time,
            value: self.value.clone(),
            ease: self.ease,
            until: self.until,
        }
    }

    /// Copy with another value, keeping time and easing.
    #[inline]
    pub fn with_value(&self, value: V) -> Self {
        Self {
            time: self.time,
            value,
            ease: self.ease,
            until: self.until,
        }
    }
}

impl<V: PartialEq> PartialEq for Keyframe<V> {
    fn eq(&self, other: &Self) -> bool {
        self.time == other.time && self.value == other.value
    }
}
