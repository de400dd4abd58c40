use bevy::camera::ScalingMode;
use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::post_process::bloom::{Bloom, BloomCompositeMode};
use bevy::prelude::*;
use bevy::render::view::Hdr;

use super::VisualsConfig;
use super::entities::{MenuCamera, NeonMaterials};
use crate::NEON_GREEN;

/// Spawns the camera entity and inserts [`NeonMaterials`].
pub fn setup_visuals(
    mut commands: Commands,
    mut materials: ResMut<Assets<StandardMaterial>>,
    cfg: Res<VisualsConfig>,
) {
    // Orthographic camera with bloom and tonemapping
    commands.spawn((
        Name::new("Camera"),
        Camera3d::default(),
        Projection::Orthographic(OrthographicProjection {
            scaling_mode: ScalingMode::FixedVertical {
                viewport_height: cfg.viewport_height,
            },
            near: 0.1,
            far: 1000.0,
            ..OrthographicProjection::default_3d()
        }),
        Hdr,
        Tonemapping::TonyMcMapface,
        Bloom {
            intensity: cfg.bloom_intensity,
            composite_mode: BloomCompositeMode::Additive,
            ..Bloom::NATURAL
        },
        Transform::from_xyz(0.0, 0.0, cfg.camera_distance).looking_at(Vec3::ZERO, Vec3::Y),
        MenuCamera,
    ));

    let glow = LinearRgba::from(NEON_GREEN) * cfg.neon_emissive;
    let neon = |alpha: f32, alpha_mode: AlphaMode, emissive: LinearRgba| StandardMaterial {
        base_color: NEON_GREEN.with_alpha(alpha),
        emissive,
        unlit: true,
        alpha_mode,
        ..default()
    };

    commands.insert_resource(NeonMaterials {
        edge: materials.add(neon(0.8, AlphaMode::Blend, glow)),
        bracket: materials.add(neon(0.8, AlphaMode::Blend, glow)),
        core_wire: materials.add(neon(0.3, AlphaMode::Blend, glow * 0.5)),
        core_ghost: materials.add(neon(0.05, AlphaMode::Add, LinearRgba::BLACK)),
        particle: materials.add(neon(0.6, AlphaMode::Blend, glow * 0.5)),
    });
}
