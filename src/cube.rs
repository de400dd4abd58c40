//! The cube rig: wireframe frame, corner brackets, inner core, data
//! particles, and the pointer-driven parallax tilt.
//!
//! Everything hangs off a single [`CubeRig`] entity so the flares spawned by
//! [`crate::flare`] inherit the same orientation and scale.

mod entities;
mod systems;

pub use entities::{CornerBracket, CubeEdge, CubeOrientation, CubeRig, DataParticles, InnerCore};
pub use systems::{follow_pointer, spawn_cube};

use bevy::prelude::*;

/// Geometry, ornament and parallax settings for the cube.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct CubeConfig {
    /// Uniform scale of the rig (the cube spans `[-scale, scale]`).
    pub scale: f32,
    /// Resting pitch (rotation about X), isometric by default.
    pub base_pitch: f32,
    /// Resting yaw (rotation about Y).
    pub base_yaw: f32,
    /// Pitch/yaw offset in radians at the pointer's extreme.
    pub parallax_deflection: f32,
    /// Per-frame blend factor toward the parallax target.
    pub parallax_blend: f32,
    /// Thickness of the frame edge cuboids.
    pub edge_thickness: f32,
    /// Side length of the corner bracket cubes.
    pub bracket_size: f32,
    /// Inner core ornament settings.
    pub core: CoreSettings,
    /// Floating data particle settings.
    pub particles: ParticleSettings,
}

/// Rotating icosahedron at the centre of the cube.
#[derive(Clone, Debug, Reflect)]
pub struct CoreSettings {
    /// Circumradius of the wireframe icosahedron.
    pub wire_radius: f32,
    /// Circumradius of the ghost solid inside it.
    pub ghost_radius: f32,
    /// Thickness of the wireframe line cuboids.
    pub wire_thickness: f32,
    /// Angular velocity (radians/s) about X, Y, Z.
    pub spin: Vec3,
}

/// Point cloud drifting inside the cube.
#[derive(Clone, Debug, Reflect)]
pub struct ParticleSettings {
    /// Number of particles.
    pub count: usize,
    /// Side length of the box particles are scattered in.
    pub spread: f32,
    /// Particle sphere radius.
    pub radius: f32,
    /// Seed for the particle scatter.
    pub seed: u32,
    /// Angular velocity (radians/s) about X, Y, Z.
    pub spin: Vec3,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            scale: 1.6,
            base_pitch: (1.0 / 2.0_f32.sqrt()).atan(),
            base_yaw: std::f32::consts::FRAC_PI_4,
            parallax_deflection: 0.2,
            parallax_blend: 0.05,
            edge_thickness: 0.02,
            bracket_size: 0.1,
            core: CoreSettings {
                wire_radius: 0.55,
                ghost_radius: 0.4,
                wire_thickness: 0.008,
                spin: Vec3::new(-0.2, -0.3, 0.0),
            },
            particles: ParticleSettings {
                count: 40,
                spread: 1.6,
                radius: 0.015,
                seed: 42,
                spin: Vec3::new(0.0, 0.05, 0.0),
            },
        }
    }
}

/// Cube rig spawning and parallax.
pub struct CubePlugin(pub CubeConfig);

impl Plugin for CubePlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<CubeConfig>()
            .register_type::<CubeRig>()
            .register_type::<CubeOrientation>()
            .register_type::<CubeEdge>()
            .register_type::<CornerBracket>()
            .register_type::<InnerCore>()
            .register_type::<DataParticles>()
            .insert_resource(self.0.clone())
            .add_systems(Startup, spawn_cube.after(crate::visuals::setup_visuals))
            .add_systems(Update, follow_pointer);
    }
}
