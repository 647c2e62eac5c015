//! Decomposition of a keyframe curve into "from A to B over [t0, t1]" pairs.

use super::KeyframedValue;
use crate::keyframe::Keyframe;

/// Options for [`KeyframedValue::for_each_pair`].
pub struct PairOptions<'a, V> {
    /// Value the target already has without any command.
    pub default_value: V,
    /// Applied to every value before comparing or emitting it.
    pub edit: Option<&'a dyn Fn(&V) -> V>,
    /// Emitted pairs must reach back to this time.
    pub start_time: Option<f64>,
    /// Emitted pairs must reach forward to this time.
    pub end_time: Option<f64>,
    /// Force the first transition out even when flat, and hold values across
    /// the window instead of at single points.
    pub loopable: bool,
}

impl<'a, V> PairOptions<'a, V> {
    pub fn new(default_value: V) -> Self {
        Self {
            default_value,
            edit: None,
            start_time: None,
            end_time: None,
            loopable: false,
        }
    }

    pub fn with_edit(mut self, edit: &'a dyn Fn(&V) -> V) -> Self {
        self.edit = Some(edit);
        self
    }

    pub fn with_window(mut self, start_time: Option<f64>, end_time: Option<f64>) -> Self {
        self.start_time = start_time;
        self.end_time = end_time;
        self
    }

    pub fn with_loopable(mut self, loopable: bool) -> Self {
        self.loopable = loopable;
        self
    }
}

/// Walk state shared by the loop body and the closing steps.
struct PairWalk<'o, 'a, V, F> {
    options: &'o PairOptions<'a, V>,
    emit: F,
    has_pair: bool,
    last_end: Option<Keyframe<V>>,
}

impl<V, F> PairWalk<'_, '_, V, F>
where
    V: Clone,
    F: FnMut(&Keyframe<V>, &Keyframe<V>),
{
    /// Emit a pair, first covering the explicit start time if nothing has.
    fn pair(&mut self, start: &Keyframe<V>, end: &Keyframe<V>) {
        if !self.has_pair {
            if let Some(start_time) = self.options.start_time {
                if start_time < start.time {
                    let initial = start.with_time(start_time);
                    if self.options.loopable {
                        (self.emit)(&initial, start);
                    } else {
                        (self.emit)(&initial, &initial);
                    }
                }
            }
        }
        (self.emit)(start, end);
        self.has_pair = true;
        self.last_end = Some(end.clone());
    }
}

impl<V: Clone + PartialEq> KeyframedValue<V> {
    /// Call `emit(start, end)` for every pair of keyframes a command is needed
    /// for.
    ///
    /// Flat transitions are skipped, runs of same-time keyframes collapse into
    /// one zero-duration step pair, and synthetic pairs hold the first and
    /// last values out to the explicit window in `options`.
    pub fn for_each_pair<F>(&self, emit: F, options: &PairOptions<'_, V>)
    where
        F: FnMut(&Keyframe<V>, &Keyframe<V>),
    {
        let (Some(first), Some(last)) = (self.keyframes.first(), self.keyframes.last()) else {
            return;
        };
        let start_time = options.start_time.unwrap_or(first.time);
        let end_time = options.end_time.unwrap_or(last.time);

        let edited = |keyframe: &Keyframe<V>| match options.edit {
            Some(edit) => keyframe.with_value(edit(&keyframe.value)),
            None => keyframe.clone(),
        };

        let mut walk = PairWalk {
            options,
            emit,
            has_pair: false,
            last_end: None,
        };
        let mut force_next_flat = options.loopable;
        let mut previous: Option<Keyframe<V>> = None;
        let mut step_start: Option<Keyframe<V>> = None;

        for keyframe in &self.keyframes {
            let end = edited(keyframe);
            if let Some(start) = previous.take() {
                let is_flat = start.value == end.value;
                let is_step = !is_flat && start.time == end.time;
                let emits_transition = !is_step && (!is_flat || force_next_flat);

                if is_step {
                    if step_start.is_none() {
                        step_start = Some(start.clone());
                    }
                } else if let Some(step) = step_start.take() {
                    // A hold marker's step is restated by the transition that follows it.
                    if !(step.until && emits_transition) {
                        walk.pair(&step, &start);
                    }
                }

                if emits_transition {
                    walk.pair(&start, &end);
                    force_next_flat = false;
                }
            }
            previous = Some(end);
        }

        if let (Some(step), Some(previous)) = (step_start, previous.as_ref()) {
            walk.pair(&step, previous);
        }

        if !walk.has_pair {
            let held = edited(first).with_time(start_time);
            if held.value != options.default_value {
                let has_window = options.start_time.is_some() || options.end_time.is_some();
                let until = if has_window {
                    held.with_time(end_time)
                } else {
                    held.clone()
                };
                (walk.emit)(&held, &until);
                walk.has_pair = true;
                walk.last_end = Some(until);
            }
        }

        if let (Some(explicit_end), Some(last_end)) = (options.end_time, walk.last_end.take()) {
            if last_end.time < explicit_end {
                (walk.emit)(&last_end, &last_end.with_time(explicit_end));
            }
        }
    }
}
