//! Single-slot numeric tweens.
//!
//! A [`TweenSlot`] owns one animated value and at most one in-flight
//! [`Tween`]. Starting a new tween replaces the old one in the same call and
//! bumps the slot generation, so any [`TweenHandle`] issued earlier is stale
//! from that point on. There is no queue: the value always chases the most
//! recent target.

use bevy::prelude::*;

use crate::math;

/// Named easing curve applied to tween progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Reflect)]
pub enum Ease {
    /// Constant speed.
    Linear,
    /// Slow start, fast finish.
    QuadIn,
    /// Fast start, slow finish.
    #[default]
    QuadOut,
}

impl Ease {
    /// Maps linear progress `t` in `[0, 1]` through the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::QuadIn => math::ease_in_quad(t),
            Ease::QuadOut => math::ease_out_quad(t),
        }
    }
}

/// Identifies one tween started on a [`TweenSlot`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Reflect)]
pub struct TweenHandle(u32);

/// An animation from `from` to `to` over `duration` seconds.
#[derive(Clone, Copy, Debug, PartialEq, Reflect)]
pub struct Tween {
    /// Value at the moment the tween started.
    pub from: f32,
    /// Value the tween settles on.
    pub to: f32,
    /// Length in seconds.
    pub duration: f32,
    /// Timing curve.
    pub ease: Ease,
    elapsed: f32,
}

impl Tween {
    fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).min(1.0)
        }
    }

    fn sample(&self) -> f32 {
        math::lerp(self.from, self.to, self.ease.apply(self.progress()))
    }
}

/// One animatable channel holding at most one tween.
#[derive(Clone, Debug, Default, Reflect)]
pub struct TweenSlot {
    value: f32,
    generation: u32,
    tween: Option<Tween>,
}

impl TweenSlot {
    /// A resting slot at `value`.
    pub fn new(value: f32) -> Self {
        Self {
            value,
            ..default()
        }
    }

    /// Current sampled value.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Where the slot is heading: the in-flight tween's end, or the resting value.
    pub fn target(&self) -> f32 {
        self.tween.map_or(self.value, |t| t.to)
    }

    /// The tween currently driving this slot, if any.
    pub fn in_flight(&self) -> Option<&Tween> {
        self.tween.as_ref()
    }

    /// Replaces any in-flight tween with one from the current value to `to`.
    ///
    /// The previous handle is invalidated before the new tween is installed.
    pub fn start(&mut self, to: f32, duration: f32, ease: Ease) -> TweenHandle {
        self.generation = self.generation.wrapping_add(1);
        self.tween = Some(Tween {
            from: self.value,
            to,
            duration,
            ease,
            elapsed: 0.0,
        });
        TweenHandle(self.generation)
    }

    /// `true` while `handle` names the tween still driving this slot.
    pub fn is_current(&self, handle: TweenHandle) -> bool {
        self.tween.is_some() && handle.0 == self.generation
    }

    /// Advances the in-flight tween by `dt` seconds and returns the new value.
    ///
    /// A finished tween is dropped and the value snaps exactly to its end.
    pub fn tick(&mut self, dt: f32) -> f32 {
        if let Some(tween) = self.tween.as_mut() {
            tween.elapsed += dt;
            if tween.progress() >= 1.0 {
                self.value = tween.to;
                self.tween = None;
            } else {
                self.value = tween.sample();
            }
        }
        self.value
    }
}
