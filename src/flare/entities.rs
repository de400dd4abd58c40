use bevy::prelude::*;

use super::FlareConfig;
use crate::menu::EntryId;
use crate::tween::{TweenHandle, TweenSlot};

/// Glow billboard pinned to the vertex of one menu entry.
#[derive(Component, Reflect)]
pub struct VertexFlare {
    /// The entry whose hover drives this flare.
    pub entry: EntryId,
}

/// Which resting state a flare is heading for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Reflect)]
pub enum FlareTarget {
    /// Scale 0, opacity 0.
    #[default]
    Inactive,
    /// Scale and opacity at their bloom values.
    Active,
}

/// Handles of the tweens installed by one [`FlareChannels::retarget`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlareTweens {
    /// Scale channel tween.
    pub scale: TweenHandle,
    /// Opacity channel tween.
    pub opacity: TweenHandle,
}

/// Animated scale and opacity of a flare, one tween slot each.
#[derive(Component, Clone, Debug, Default, Reflect)]
pub struct FlareChannels {
    /// Billboard scale.
    pub scale: TweenSlot,
    /// Material alpha.
    pub opacity: TweenSlot,
    target: FlareTarget,
}

impl FlareChannels {
    /// The state the channels are heading for.
    pub fn target(&self) -> FlareTarget {
        self.target
    }

    /// Points both channels at `target`, replacing any in-flight tweens.
    ///
    /// Returns `None` and leaves the tweens untouched when already heading
    /// for `target`.
    pub fn retarget(&mut self, target: FlareTarget, cfg: &FlareConfig) -> Option<FlareTweens> {
        if self.target == target {
            return None;
        }
        self.target = target;
        let (scale, opacity, duration, ease) = match target {
            FlareTarget::Active => (
                cfg.bloom_scale,
                cfg.bloom_opacity,
                cfg.bloom_duration,
                cfg.bloom_ease,
            ),
            FlareTarget::Inactive => (0.0, 0.0, cfg.vanish_duration, cfg.vanish_ease),
        };
        Some(FlareTweens {
            scale: self.scale.start(scale, duration, ease),
            opacity: self.opacity.start(opacity, duration, ease),
        })
    }

    /// Advances both channels by `dt` seconds; returns `(scale, opacity)`.
    pub fn tick(&mut self, dt: f32) -> (f32, f32) {
        (self.scale.tick(dt), self.opacity.tick(dt))
    }
}
