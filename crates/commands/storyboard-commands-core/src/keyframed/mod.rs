//! Time-ordered keyframe collections with sampling, simplification and
//! pairwise command emission.

mod pairs;
mod simplify;

pub use pairs::PairOptions;
pub use simplify::{distance_1d, distance_2d, distance_3d};

use crate::easing::Easing;
use crate::error::{CommandError, Result};
use crate::interp::Interpolator;
use crate::keyframe::Keyframe;

/// Ordered, mutable keyframes for one channel.
///
/// Keyframe times never decrease along the stored sequence. Several keyframes
/// may share a time; they describe an instantaneous step and their relative
/// order is decided by the `before` flag at insertion.
#[derive(Clone, Debug)]
pub struct KeyframedValue<V> {
    keyframes: Vec<Keyframe<V>>,
    interpolate: Option<Interpolator<V>>,
    default_value: V,
}

impl<V: Default> Default for KeyframedValue<V> {
    fn default() -> Self {
        Self::new(None, V::default())
    }
}

impl<V> KeyframedValue<V> {
    /// `interpolate` is only needed for sampling (`value_at`, `add_sampled`).
    pub fn new(interpolate: Option<Interpolator<V>>, default_value: V) -> Self {
        Self {
            keyframes: Vec::new(),
            interpolate,
            default_value,
        }
    }

    pub fn with_interpolator(interpolate: Interpolator<V>, default_value: V) -> Self {
        Self::new(Some(interpolate), default_value)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    #[inline]
    pub fn keyframes(&self) -> &[Keyframe<V>] {
        &self.keyframes
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Keyframe<V>> {
        self.keyframes.iter()
    }

    #[inline]
    pub fn first(&self) -> Option<&Keyframe<V>> {
        self.keyframes.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&Keyframe<V>> {
        self.keyframes.last()
    }

    #[inline]
    pub fn default_value(&self) -> &V {
        &self.default_value
    }

    /// `None` when empty.
    #[inline]
    pub fn start_time(&self) -> Option<f64> {
        self.keyframes.first().map(|k| k.time)
    }

    /// `None` when empty.
    #[inline]
    pub fn end_time(&self) -> Option<f64> {
        self.keyframes.last().map(|k| k.time)
    }

    /// Insert keeping time order. Among keyframes sharing `keyframe.time`,
    /// `before` places the new one first, otherwise last.
    pub fn add(&mut self, keyframe: Keyframe<V>, before: bool) -> &mut Self {
        let append = match self.keyframes.last() {
            None => true,
            Some(last) => keyframe.time > last.time || (keyframe.time == last.time && !before),
        };
        if append {
            self.keyframes.push(keyframe);
        } else {
            let index = self.insertion_index(keyframe.time, before);
            self.keyframes.insert(index, keyframe);
        }
        self
    }

    #[inline]
    pub fn add_value(&mut self, time: f64, value: V) -> &mut Self {
        self.add(Keyframe::new(time, value), false)
    }

    #[inline]
    pub fn add_eased(&mut self, time: f64, value: V, ease: Easing, before: bool) -> &mut Self {
        self.add(Keyframe::eased(time, value, ease), before)
    }

    /// Move every keyframe into `target`. `clear` empties this collection.
    pub fn transfer_keyframes(&mut self, target: &mut KeyframedValue<V>, clear: bool)
    where
        V: Clone,
    {
        if self.keyframes.is_empty() {
            return;
        }
        if clear {
            for keyframe in self.keyframes.drain(..) {
                target.add(keyframe, false);
            }
        } else {
            for keyframe in &self.keyframes {
                target.add(keyframe.clone(), false);
            }
        }
    }

    /// Drop all keyframes. `trim` also releases the backing allocation.
    pub fn clear(&mut self, trim: bool) {
        self.keyframes.clear();
        if trim {
            self.keyframes.shrink_to_fit();
        }
    }

    /// Lower bound (`before`) or upper bound of `time` in the stored order.
    #[inline]
    fn insertion_index(&self, time: f64, before: bool) -> usize {
        if before {
            self.keyframes.partition_point(|k| k.time < time)
        } else {
            self.keyframes.partition_point(|k| k.time <= time)
        }
    }
}

impl<V: Clone> KeyframedValue<V> {
    /// Value of the first keyframe, or the default when empty.
    pub fn start_value(&self) -> V {
        self.keyframes
            .first()
            .map(|k| k.value.clone())
            .unwrap_or_else(|| self.default_value.clone())
    }

    /// Value of the last keyframe, or the default when empty.
    pub fn end_value(&self) -> V {
        self.keyframes
            .last()
            .map(|k| k.value.clone())
            .unwrap_or_else(|| self.default_value.clone())
    }

    /// Hold the current end value until `time`. `None` when empty.
    pub fn until(&mut self, time: f64) -> Option<&mut Self> {
        let value = self.keyframes.last()?.value.clone();
        Some(self.add(Keyframe::hold(time, value), false))
    }

    /// Sample the channel at `time`.
    ///
    /// Before the first keyframe the first value holds, after the last the
    /// last value holds. Between two keyframes the upper one's easing shapes
    /// the progress handed to the interpolator.
    pub fn value_at(&self, time: f64) -> Result<V> {
        let interpolate = self.interpolate.ok_or_else(|| {
            CommandError::configuration("value_at requires an interpolator on this channel")
        })?;

        match self.keyframes.len() {
            0 => return Ok(self.default_value.clone()),
            1 => return Ok(self.keyframes[0].value.clone()),
            _ => {}
        }

        let index = self.insertion_index(time, false);
        if index == 0 {
            return Ok(self.keyframes[0].value.clone());
        }
        if index == self.keyframes.len() {
            return Ok(self.keyframes[index - 1].value.clone());
        }

        let from = &self.keyframes[index - 1];
        let to = &self.keyframes[index];
        if to.time == from.time {
            return Ok(to.value.clone());
        }
        let progress = (time - from.time) / (to.time - from.time);
        Ok(interpolate(&from.value, &to.value, to.ease.apply(progress)))
    }

    /// Add a keyframe holding the value currently sampled at `time`.
    pub fn add_sampled(&mut self, time: f64, before: bool) -> Result<&mut Self> {
        let value = self.value_at(time)?;
        Ok(self.add(Keyframe::new(time, value), before))
    }
}

impl<'a, V> IntoIterator for &'a KeyframedValue<V> {
    type Item = &'a Keyframe<V>;
    type IntoIter = std::slice::Iter<'a, Keyframe<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.keyframes.iter()
    }
}
