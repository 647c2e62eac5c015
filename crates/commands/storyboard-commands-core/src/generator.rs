//! Per-object command generation.
//!
//! A [`CommandGenerator`] collects [`State`] samples for one object, splits
//! them into visible spans, simplifies each span per channel and finally
//! emits the smallest command set that replays the motion on a
//! [`CommandSink`]. After a pass all buffers are reset, so one generator can
//! be reused for the next object.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::interp;
use crate::keyframe::Keyframe;
use crate::keyframed::{KeyframedValue, PairOptions};
use crate::sink::{BitmapSizes, CommandSink};
use crate::state::State;
use crate::value::{default_initial_position, Color, Vec2};

/// Optional arguments of one generation pass.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Commands must cover the object from this time on.
    pub start_time: Option<f64>,
    /// Commands must cover the object up to this time.
    pub end_time: Option<f64>,
    /// Added to every state time.
    pub time_offset: f64,
    /// The emitted commands will be replayed in a loop.
    pub loopable: bool,
}

/// One keyframed value per animated channel.
#[derive(Clone, Debug)]
struct Channels {
    positions: KeyframedValue<Vec2>,
    scales: KeyframedValue<Vec2>,
    rotations: KeyframedValue<f64>,
    colors: KeyframedValue<Color>,
    opacities: KeyframedValue<f64>,
    flip_h: KeyframedValue<bool>,
    flip_v: KeyframedValue<bool>,
    additive: KeyframedValue<bool>,
}

impl Channels {
    fn new() -> Self {
        Self {
            positions: KeyframedValue::with_interpolator(interp::vec2, default_initial_position()),
            scales: KeyframedValue::with_interpolator(interp::vec2, Vec2::new(1.0, 1.0)),
            rotations: KeyframedValue::with_interpolator(interp::angle, 0.0),
            colors: KeyframedValue::with_interpolator(interp::color, Color::WHITE),
            opacities: KeyframedValue::with_interpolator(interp::scalar, 1.0),
            flip_h: KeyframedValue::with_interpolator(interp::bool_from, false),
            flip_v: KeyframedValue::with_interpolator(interp::bool_from, false),
            additive: KeyframedValue::with_interpolator(interp::bool_from, false),
        }
    }

    fn record(&mut self, state: &State, time: f64) {
        self.positions.add_value(time, state.position);
        self.scales.add_value(time, state.scale);
        self.rotations.add_value(time, state.rotation);
        self.colors.add_value(time, state.color);
        self.opacities.add_value(time, state.opacity);
        self.flip_h.add_value(time, state.flip_h);
        self.flip_v.add_value(time, state.flip_v);
        self.additive.add_value(time, state.additive);
    }

    fn until(&mut self, time: f64) {
        self.positions.until(time);
        self.scales.until(time);
        self.rotations.until(time);
        self.colors.until(time);
        self.opacities.until(time);
        self.flip_h.until(time);
        self.flip_v.until(time);
        self.additive.until(time);
    }

    fn transfer_into(&mut self, target: &mut Channels) {
        self.positions.transfer_keyframes(&mut target.positions, true);
        self.scales.transfer_keyframes(&mut target.scales, true);
        self.rotations.transfer_keyframes(&mut target.rotations, true);
        self.colors.transfer_keyframes(&mut target.colors, true);
        self.opacities.transfer_keyframes(&mut target.opacities, true);
        self.flip_h.transfer_keyframes(&mut target.flip_h, true);
        self.flip_v.transfer_keyframes(&mut target.flip_v, true);
        self.additive.transfer_keyframes(&mut target.additive, true);
    }

    fn clear(&mut self, trim: bool) {
        self.positions.clear(trim);
        self.scales.clear(trim);
        self.rotations.clear(trim);
        self.colors.clear(trim);
        self.opacities.clear(trim);
        self.flip_h.clear(trim);
        self.flip_v.clear(trim);
        self.additive.clear(trim);
    }
}

/// Turns one object's sampled states into timed commands.
#[derive(Clone, Debug)]
pub struct CommandGenerator {
    config: GeneratorConfig,
    states: Vec<State>,
    /// Keyframes of the visible span being captured.
    pending: Channels,
    /// Committed spans, across the object's whole lifetime.
    finals: Channels,
}

impl Default for CommandGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandGenerator {
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            config,
            states: Vec::new(),
            pending: Channels::new(),
            finals: Channels::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    #[inline]
    pub fn config_mut(&mut self) -> &mut GeneratorConfig {
        &mut self.config
    }

    #[inline]
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Earliest buffered state.
    #[inline]
    pub fn start_state(&self) -> Option<&State> {
        self.states.first()
    }

    /// Latest buffered state. Producers wanting rotation continuity should
    /// keep their own previous rotation and use [`interp::unwrap_angle`].
    #[inline]
    pub fn end_state(&self) -> Option<&State> {
        self.states.last()
    }

    /// Buffer a state. States may arrive out of order; they are kept sorted
    /// by time, after any already buffered state with the same time.
    pub fn add(&mut self, state: State) -> Result<()> {
        let state = state.validated()?;
        let append = self
            .states
            .last()
            .map_or(true, |last| state.time >= last.time);
        if append {
            self.states.push(state);
        } else {
            let index = self.states.partition_point(|s| s.time <= state.time);
            self.states.insert(index, state);
        }
        Ok(())
    }

    /// Emit commands for the buffered states onto `sink`.
    ///
    /// Returns whether the object was visible at any point, i.e. whether any
    /// commands were needed.
    pub fn generate_commands<S>(
        &mut self,
        sink: &mut S,
        bitmaps: &dyn BitmapSizes,
        options: &GenerateOptions,
    ) -> bool
    where
        S: CommandSink + ?Sized,
    {
        self.generate_commands_with(sink, bitmaps, options, |emit, sink| emit(sink))
    }

    /// Like [`generate_commands`](Self::generate_commands), but hands the
    /// emission to `wrapper` instead of running it.
    ///
    /// `wrapper` is called exactly once when the object was ever visible. It
    /// receives the emission closure and the sink, and decides when to run it
    /// (for instance inside a loop group the caller opens).
    pub fn generate_commands_with<S, W>(
        &mut self,
        sink: &mut S,
        bitmaps: &dyn BitmapSizes,
        options: &GenerateOptions,
        wrapper: W,
    ) -> bool
    where
        S: CommandSink + ?Sized,
        W: FnOnce(&mut dyn FnMut(&mut S), &mut S),
    {
        let image_size = match bitmaps.bitmap_size(sink.texture_path()) {
            Some(size) => size,
            None => {
                warn!(
                    "no bitmap size for '{}'; using a 1x1 reference size",
                    sink.texture_path()
                );
                Vec2::new(1.0, 1.0)
            }
        };
        let origin = sink.origin();

        let Self {
            config,
            states,
            pending,
            finals,
        } = self;

        let mut previous: Option<&State> = None;
        let mut was_visible = false;
        let mut ever_visible = false;
        let mut spans = 0usize;

        for state in states.iter() {
            let time = state.time + options.time_offset;
            let visible = state.is_visible(image_size, origin, config);

            if visible && !was_visible {
                if !ever_visible {
                    if let Some(previous) = previous {
                        pending.record(previous, previous.time + options.time_offset);
                    }
                }
                pending.record(state, time);
                ever_visible = true;
            } else if visible {
                pending.record(state, time);
            } else if was_visible {
                pending.record(state, time);
                commit_keyframes(config, pending, finals, image_size);
                spans += 1;
            }

            previous = Some(state);
            was_visible = visible;
        }

        if was_visible {
            commit_keyframes(config, pending, finals, image_size);
            spans += 1;
        }

        if ever_visible {
            let (settings, committed) = (&*config, &*finals);
            let mut emit = |sink: &mut S| {
                convert_to_commands(settings, committed, sink, image_size, options);
            };
            wrapper(&mut emit, &mut *sink);
        }

        debug!(
            "generated commands for '{}': {} states, {} visible spans, emitted={}",
            sink.texture_path(),
            states.len(),
            spans,
            ever_visible
        );

        pending.clear(true);
        finals.clear(true);
        states.clear();
        states.shrink_to_fit();

        ever_visible
    }
}

/// Simplify the pending span and append it to the lifetime accumulators.
fn commit_keyframes(
    config: &GeneratorConfig,
    pending: &mut Channels,
    finals: &mut Channels,
    image_size: Vec2,
) {
    let Some(span_start) = pending.positions.start_time() else {
        return;
    };

    pending
        .positions
        .simplify_2d_keyframes(config.position_tolerance, |p| *p);
    pending
        .scales
        .simplify_2d_keyframes(config.scale_tolerance, |s| s.component_mul(&image_size));
    pending
        .rotations
        .simplify_1d_keyframes(config.rotation_tolerance, |r| r.to_degrees());
    pending
        .colors
        .simplify_3d_keyframes(config.color_tolerance, |c| c.to_byte_space());
    pending
        .opacities
        .simplify_1d_keyframes(config.opacity_tolerance, |o| o * 100.0);
    for flags in [
        &mut pending.flip_h,
        &mut pending.flip_v,
        &mut pending.additive,
    ] {
        flags.simplify_keyframes(0.0, |_, _, _| 0.0);
    }

    // A span fades in from and out to nothing unless it already does.
    if let (Some(start), Some(end)) = (pending.opacities.start_time(), pending.opacities.end_time())
    {
        let adjoins_previous = finals.opacities.end_time() == Some(start);
        if config.round_opacity(pending.opacities.start_value()) > 0.0 && !adjoins_previous {
            pending.opacities.add(Keyframe::new(start, 0.0), true);
        }
        if config.round_opacity(pending.opacities.end_value()) > 0.0 {
            pending.opacities.add(Keyframe::new(end, 0.0), false);
        }
    }

    finals.until(span_start);
    pending.transfer_into(finals);
}

fn convert_to_commands<S>(
    config: &GeneratorConfig,
    finals: &Channels,
    sink: &mut S,
    image_size: Vec2,
    options: &GenerateOptions,
) where
    S: CommandSink + ?Sized,
{
    // Position: single-axis moves when the other axis never leaves its
    // initial value.
    let initial = sink.initial_position();
    let rounded = |p: &Vec2| config.round_position(*p);
    let keeps_y = finals.positions.iter().all(|k| rounded(&k.value).y == initial.y);
    let keeps_x = finals.positions.iter().all(|k| rounded(&k.value).x == initial.x);
    if keeps_y && !keeps_x {
        let edit = |p: &Vec2| Vec2::new(rounded(p).x, initial.y);
        finals.positions.for_each_pair(
            |s, e| sink.move_x(s.time, e.time, s.value.x, e.value.x),
            &pair_options(options, initial).with_edit(&edit),
        );
    } else if keeps_x && !keeps_y {
        let edit = |p: &Vec2| Vec2::new(initial.x, rounded(p).y);
        finals.positions.for_each_pair(
            |s, e| sink.move_y(s.time, e.time, s.value.y, e.value.y),
            &pair_options(options, initial).with_edit(&edit),
        );
    } else {
        finals.positions.for_each_pair(
            |s, e| sink.move_position(s.time, e.time, s.value, e.value),
            &pair_options(options, initial).with_edit(&rounded),
        );
    }

    // Scale: vector scale only when the axes ever differ by more than a pixel.
    let pixel_span = image_size.x.max(image_size.y);
    let uses_vector_scale = finals.scales.iter().any(|k| {
        let s = config.round_scale(k.value);
        (s.x - s.y).abs() * pixel_span > 1.0
    });
    let unit_scale = Vec2::new(1.0, 1.0);
    if uses_vector_scale {
        let edit = |s: &Vec2| config.round_scale(*s);
        finals.scales.for_each_pair(
            |s, e| sink.scale_vec(s.time, e.time, s.value, e.value),
            &pair_options(options, unit_scale).with_edit(&edit),
        );
    } else {
        let edit = |s: &Vec2| {
            let x = config.round_scale(*s).x;
            Vec2::new(x, x)
        };
        finals.scales.for_each_pair(
            |s, e| sink.scale(s.time, e.time, s.value.x, e.value.x),
            &pair_options(options, unit_scale).with_edit(&edit),
        );
    }

    let edit = |r: &f64| config.round_rotation(*r);
    finals.rotations.for_each_pair(
        |s, e| sink.rotate(s.time, e.time, s.value, e.value),
        &pair_options(options, 0.0).with_edit(&edit),
    );

    let edit = |c: &Color| config.round_color(*c);
    finals.colors.for_each_pair(
        |s, e| sink.color(s.time, e.time, s.value, e.value),
        &pair_options(options, Color::WHITE).with_edit(&edit),
    );

    let edit = |o: &f64| config.round_opacity(*o);
    finals.opacities.for_each_pair(
        |s, e| {
            if !fade_is_redundant(s, e, sink.start_time(), sink.end_time()) {
                sink.fade(s.time, e.time, s.value, e.value);
            }
        },
        &pair_options(options, 1.0).with_edit(&edit),
    );

    emit_flag_runs(&finals.flip_h, |s, e| sink.flip_h(s, e));
    emit_flag_runs(&finals.flip_v, |s, e| sink.flip_v(s, e));
    emit_flag_runs(&finals.additive, |s, e| sink.additive(s, e));
}

/// Fades that change nothing on screen given the sink's own lifetime.
///
/// Two cases: a constant fade lying entirely outside the commands already on
/// the sink, and an instant drop to zero exactly at the sink's end time. The
/// second case also drops a genuine instant fade-out when another channel
/// happens to end at the same time.
fn fade_is_redundant(
    start: &Keyframe<f64>,
    end: &Keyframe<f64>,
    sink_start: Option<f64>,
    sink_end: Option<f64>,
) -> bool {
    let (Some(sink_start), Some(sink_end)) = (sink_start, sink_end) else {
        return false;
    };
    let outside = end.time < sink_start || start.time > sink_end;
    if outside && start.value == end.value {
        return true;
    }
    start.time == end.time && start.time == sink_end && end.value == 0.0
}

fn pair_options<'a, V>(options: &GenerateOptions, default_value: V) -> PairOptions<'a, V> {
    PairOptions::new(default_value)
        .with_window(options.start_time, options.end_time)
        .with_loopable(options.loopable)
}

/// One enable command per contiguous run of `true`. A run still open at the
/// last keyframe closes there.
fn emit_flag_runs(flags: &KeyframedValue<bool>, mut emit: impl FnMut(f64, f64)) {
    let mut run_start: Option<f64> = None;
    for keyframe in flags {
        match (keyframe.value, run_start) {
            (true, None) => run_start = Some(keyframe.time),
            (false, Some(start)) => {
                emit(start, keyframe.time);
                run_start = None;
            }
            _ => {}
        }
    }
    if let (Some(start), Some(last)) = (run_start, flags.last()) {
        emit(start, last.time);
    }
}
