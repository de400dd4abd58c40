use bevy::prelude::*;

use super::AmbientConfig;
use super::entities::{PulseOrb, Spin};
use crate::{NEON_GREEN, math};

/// Spawns the background orbs at seeded positions behind the cube.
pub fn spawn_orbs(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    cfg: Res<AmbientConfig>,
) {
    let scatter = math::Scatter::new(cfg.seed);
    let mesh = meshes.add(Sphere::new(1.0).mesh().uv(32, 32));

    for i in 0..cfg.orb_count {
        let origin = Vec3::new(
            scatter.sample(i, 0, -cfg.spread.x, cfg.spread.x),
            scatter.sample(i, 1, -cfg.spread.y, cfg.spread.y),
            scatter.sample(i, 2, cfg.depth.x, cfg.depth.y),
        );
        let orb = PulseOrb {
            origin,
            base_scale: scatter.sample(i, 3, cfg.scale_range.x, cfg.scale_range.y),
            time_offset: scatter.sample(i, 4, 0.0, cfg.max_time_offset),
        };
        // Each orb pulses its own alpha, so each needs its own material.
        let material = materials.add(StandardMaterial {
            base_color: NEON_GREEN.with_alpha(0.0),
            unlit: true,
            alpha_mode: AlphaMode::Add,
            ..default()
        });
        commands.spawn((
            Name::new(format!("PulseOrb{i}")),
            orb,
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material),
            Transform::from_translation(origin).with_scale(Vec3::splat(orb.base_scale)),
        ));
    }
}

/// Applies [`math::orb_pulse`] to every orb's scale, height and alpha.
pub fn pulse_orbs(
    time: Res<Time>,
    mut orbs: Query<(&PulseOrb, &mut Transform, &MeshMaterial3d<StandardMaterial>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (orb, mut transform, mat_handle) in &mut orbs {
        let t = time.elapsed_secs() + orb.time_offset;
        let pulse = math::orb_pulse(t, orb.base_scale, orb.origin.x);

        transform.scale = Vec3::splat(pulse.scale);
        transform.translation.y = orb.origin.y + pulse.y_offset;
        if let Some(mat) = materials.get_mut(&mat_handle.0) {
            mat.base_color.set_alpha(pulse.opacity);
        }
    }
}

/// Advances every [`Spin`] and writes its rotation.
pub fn spin(time: Res<Time>, mut q: Query<(&mut Spin, &mut Transform)>) {
    let dt = time.delta_secs();
    for (mut spin, mut transform) in &mut q {
        transform.rotation = spin.advance(dt);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn spin_system_rotates_ornaments() {
        let mut world = World::new();
        let mut time = Time::<()>::default();
        time.advance_by(Duration::from_secs_f32(0.5));
        world.insert_resource(time);
        let e = world
            .spawn((Spin::new(Vec3::new(0.0, 0.05, 0.0)), Transform::default()))
            .id();

        let system = world.register_system(spin);
        world.run_system(system).expect("spin runs");

        let rot = world.get::<Transform>(e).expect("transform").rotation;
        let expected = Quat::from_rotation_y(0.025);
        assert!(rot.abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn orbs_stay_within_pulse_bounds() {
        let mut world = World::new();
        let mut time = Time::<()>::default();
        time.advance_by(Duration::from_secs_f32(12.3));
        world.insert_resource(time);
        world.init_resource::<Assets<StandardMaterial>>();
        let handle = world
            .resource_mut::<Assets<StandardMaterial>>()
            .add(StandardMaterial::default());
        let orb = PulseOrb {
            origin: Vec3::new(3.0, 2.0, -30.0),
            base_scale: 10.0,
            time_offset: 4.0,
        };
        let e = world
            .spawn((orb, Transform::default(), MeshMaterial3d(handle.clone())))
            .id();

        let system = world.register_system(pulse_orbs);
        world.run_system(system).expect("pulse_orbs runs");

        let tf = world.get::<Transform>(e).expect("transform");
        assert!(tf.scale.x >= 8.0 - 1e-4 && tf.scale.x <= 12.0 + 1e-4);
        assert!((tf.translation.y - orb.origin.y).abs() <= 1.0);
        let alpha = world
            .resource::<Assets<StandardMaterial>>()
            .get(&handle)
            .expect("material")
            .base_color
            .alpha();
        assert!((0.005..=0.015 + 1e-6).contains(&alpha));
    }
}
