//! Per-vertex glow flares that bloom in when their entry is hovered.
//!
//! Each menu entry gets one [`VertexFlare`] billboard at its cube corner. Its
//! scale and opacity are two [`TweenSlot`](crate::tween::TweenSlot)s held in
//! [`FlareChannels`]; a hover change retargets both slots in place, replacing
//! any tween still running, so the glow always chases the latest hover.

mod entities;
mod systems;

pub use entities::{FlareChannels, FlareTarget, FlareTweens, VertexFlare};
pub use systems::{animate_flares, billboard_flares, retarget_flares, spawn_flares};

use bevy::prelude::*;

use crate::menu::MenuSet;
use crate::tween::Ease;

/// Timing and look of the vertex flares.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct FlareConfig {
    /// Billboard scale when active (rig-local units).
    pub bloom_scale: f32,
    /// Material alpha when active.
    pub bloom_opacity: f32,
    /// Seconds to bloom in.
    pub bloom_duration: f32,
    /// Seconds to vanish.
    pub vanish_duration: f32,
    /// Curve used while blooming in.
    pub bloom_ease: Ease,
    /// Curve used while vanishing.
    pub vanish_ease: Ease,
    /// Side length in pixels of the generated glow texture.
    pub texture_size: u32,
    /// HDR multiplier on the white glow, so bloom picks it up.
    pub intensity: f32,
}

impl Default for FlareConfig {
    fn default() -> Self {
        Self {
            bloom_scale: 0.8,
            bloom_opacity: 0.6,
            bloom_duration: 0.4,
            vanish_duration: 0.3,
            bloom_ease: Ease::QuadOut,
            vanish_ease: Ease::QuadIn,
            texture_size: 64,
            intensity: 2.0,
        }
    }
}

/// Spawns and animates the vertex flares.
pub struct FlarePlugin(pub FlareConfig);

impl Plugin for FlarePlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<FlareConfig>()
            .register_type::<VertexFlare>()
            .register_type::<FlareChannels>()
            .insert_resource(self.0.clone())
            .add_systems(Startup, spawn_flares.after(crate::cube::spawn_cube))
            .add_systems(
                Update,
                (
                    retarget_flares.run_if(resource_changed::<crate::menu::HoverState>),
                    animate_flares,
                    billboard_flares.after(crate::cube::follow_pointer),
                )
                    .chain()
                    .after(MenuSet::ApplyHover),
            );
    }
}
