//! Decorative motion driven purely by time: breathing background orbs and
//! constant-rate [`Spin`] on the cube ornaments.

mod entities;
mod systems;

pub use entities::{PulseOrb, Spin};

use bevy::prelude::*;

/// Background orb layout and pulse settings.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct AmbientConfig {
    /// Number of background orbs.
    pub orb_count: usize,
    /// Seed for orb placement.
    pub seed: u32,
    /// Half extent of the X/Y spread (orbs land in `[-x, x] × [-y, y]`).
    pub spread: Vec2,
    /// Depth range (world Z) behind the cube.
    pub depth: Vec2,
    /// Range of orb base scales.
    pub scale_range: Vec2,
    /// Upper bound of the per-orb time offset.
    pub max_time_offset: f32,
}

impl Default for AmbientConfig {
    fn default() -> Self {
        Self {
            orb_count: 8,
            seed: 42,
            spread: Vec2::new(30.0, 20.0),
            depth: Vec2::new(-50.0, -20.0),
            scale_range: Vec2::new(5.0, 15.0),
            max_time_offset: 100.0,
        }
    }
}

/// Background pulse orbs and ornament spin.
pub struct AmbientPlugin(pub AmbientConfig);

impl Plugin for AmbientPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<AmbientConfig>()
            .register_type::<PulseOrb>()
            .register_type::<Spin>()
            .insert_resource(self.0.clone())
            .add_systems(Startup, systems::spawn_orbs)
            .add_systems(Update, (systems::pulse_orbs, systems::spin));
    }
}
