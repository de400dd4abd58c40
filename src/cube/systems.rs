use bevy::prelude::*;

use super::CubeConfig;
use super::entities::{
    CornerBracket, CubeEdge, CubeOrientation, CubeRig, DataParticles, InnerCore,
};
use crate::ambient::Spin;
use crate::math;
use crate::pointer::PointerPosition;
use crate::visuals::NeonMaterials;

// ── Startup ─────────────────────────────────────────────────────────

/// Spawns the [`CubeRig`] with its frame, brackets, core and particles.
pub fn spawn_cube(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    neon: Res<NeonMaterials>,
    cfg: Res<CubeConfig>,
) {
    let orientation = CubeOrientation {
        pitch: cfg.base_pitch,
        yaw: cfg.base_yaw,
    };
    let rig = commands
        .spawn((
            Name::new("CubeRig"),
            CubeRig,
            orientation,
            Transform::from_rotation(orientation.to_quat()).with_scale(Vec3::splat(cfg.scale)),
            Visibility::default(),
        ))
        .id();

    // Outer frame
    for (a, b) in math::cube_edges() {
        let edge = spawn_edge_line(
            &mut commands,
            &mut meshes,
            &neon.edge,
            cfg.edge_thickness,
            a.as_vec3(),
            b.as_vec3(),
        );
        commands.entity(edge).insert(CubeEdge);
        commands.entity(rig).add_child(edge);
    }

    // Corner brackets
    let bracket_mesh = meshes.add(Cuboid::from_length(cfg.bracket_size));
    for corner in math::cube_corners() {
        let bracket = commands
            .spawn((
                CornerBracket,
                Name::new(format!("Bracket({},{},{})", corner.x, corner.y, corner.z)),
                Mesh3d(bracket_mesh.clone()),
                MeshMaterial3d(neon.bracket.clone()),
                Transform::from_translation(corner.as_vec3()),
            ))
            .id();
        commands.entity(rig).add_child(bracket);
    }

    spawn_inner_core(&mut commands, &mut meshes, &neon, &cfg, rig);
    spawn_particles(&mut commands, &mut meshes, &neon, &cfg, rig);
}

fn spawn_inner_core(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    neon: &NeonMaterials,
    cfg: &CubeConfig,
    rig: Entity,
) {
    let core_cfg = &cfg.core;
    let core = commands
        .spawn((
            Name::new("InnerCore"),
            InnerCore,
            Spin::new(core_cfg.spin),
            Transform::default(),
            Visibility::default(),
        ))
        .id();
    commands.entity(rig).add_child(core);

    let verts = math::icosahedron_vertices(core_cfg.wire_radius);
    for (i, j) in math::icosahedron_edges(&verts) {
        let line = spawn_edge_line(
            commands,
            meshes,
            &neon.core_wire,
            core_cfg.wire_thickness,
            verts[i],
            verts[j],
        );
        commands.entity(core).add_child(line);
    }

    // Ghost solid does not rotate with the wireframe
    match Sphere::new(core_cfg.ghost_radius).mesh().ico(0) {
        Ok(mesh) => {
            let ghost = commands
                .spawn((
                    Name::new("CoreGhost"),
                    Mesh3d(meshes.add(mesh)),
                    MeshMaterial3d(neon.core_ghost.clone()),
                    Transform::default(),
                ))
                .id();
            commands.entity(rig).add_child(ghost);
        }
        Err(err) => warn!("skipping core ghost: {err}"),
    }
}

fn spawn_particles(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    neon: &NeonMaterials,
    cfg: &CubeConfig,
    rig: Entity,
) {
    let p = &cfg.particles;
    let cloud = commands
        .spawn((
            Name::new("DataParticles"),
            DataParticles,
            Spin::new(p.spin),
            Transform::default(),
            Visibility::default(),
        ))
        .id();
    commands.entity(rig).add_child(cloud);

    let scatter = math::Scatter::new(p.seed);
    let half = p.spread / 2.0;
    let mesh = meshes.add(Sphere::new(p.radius));
    for i in 0..p.count {
        let pos = Vec3::new(
            scatter.sample(i, 0, -half, half),
            scatter.sample(i, 1, -half, half),
            scatter.sample(i, 2, -half, half),
        );
        let particle = commands
            .spawn((
                Mesh3d(mesh.clone()),
                MeshMaterial3d(neon.particle.clone()),
                Transform::from_translation(pos),
            ))
            .id();
        commands.entity(cloud).add_child(particle);
    }
}

// ── Update: parallax ────────────────────────────────────────────────

/// Blends the rig orientation toward the pointer-derived parallax target.
pub fn follow_pointer(
    pointer: Res<PointerPosition>,
    cfg: Res<CubeConfig>,
    mut rig_q: Query<(&mut CubeOrientation, &mut Transform), With<CubeRig>>,
) {
    let Ok((mut orientation, mut transform)) = rig_q.single_mut() else {
        return;
    };

    let (pitch, yaw) = math::parallax_target(
        cfg.base_pitch,
        cfg.base_yaw,
        pointer.0,
        cfg.parallax_deflection,
    );
    orientation.pitch = math::lerp(orientation.pitch, pitch, cfg.parallax_blend);
    orientation.yaw = math::lerp(orientation.yaw, yaw, cfg.parallax_blend);
    transform.rotation = orientation.to_quat();
}

// ── Mesh spawn helpers ─────────────────────────────────────────────

fn spawn_edge_line(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    material: &Handle<StandardMaterial>,
    thickness: f32,
    from: Vec3,
    to: Vec3,
) -> Entity {
    let midpoint = (from + to) / 2.0;
    let diff = to - from;
    let length = diff.length();

    let mesh = meshes.add(Cuboid::new(length, thickness, thickness));
    let rotation = Quat::from_rotation_arc(Vec3::X, diff.normalize());

    commands
        .spawn((
            Mesh3d(mesh),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(midpoint).with_rotation(rotation),
        ))
        .id()
}

#[cfg(test)]
mod tests {
    use bevy::ecs::system::SystemId;

    use super::*;

    fn setup(pointer: Vec2) -> (World, SystemId, Entity) {
        let mut world = World::new();
        let cfg = CubeConfig::default();
        let orientation = CubeOrientation {
            pitch: cfg.base_pitch,
            yaw: cfg.base_yaw,
        };
        world.insert_resource(cfg);
        world.insert_resource(PointerPosition(pointer));
        let rig = world
            .spawn((CubeRig, orientation, Transform::default()))
            .id();
        let system = world.register_system(follow_pointer);
        (world, system, rig)
    }

    #[test]
    fn centred_pointer_holds_base_orientation() {
        let (mut world, system, rig) = setup(Vec2::ZERO);
        for _ in 0..50 {
            world.run_system(system).expect("follow_pointer runs");
        }
        let cfg = CubeConfig::default();
        let o = *world.get::<CubeOrientation>(rig).expect("rig orientation");
        assert!((o.pitch - cfg.base_pitch).abs() < 1e-6);
        assert!((o.yaw - cfg.base_yaw).abs() < 1e-6);
    }

    #[test]
    fn extreme_pointer_converges_without_overshoot() {
        let cfg = CubeConfig::default();
        let k = cfg.parallax_deflection;
        for (px, py) in [(1.0, 1.0), (-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0)] {
            let (mut world, system, rig) = setup(Vec2::new(px, py));
            let target_pitch = cfg.base_pitch - py * k;
            let target_yaw = cfg.base_yaw + px * k;

            for _ in 0..600 {
                world.run_system(system).expect("follow_pointer runs");
                let o = *world.get::<CubeOrientation>(rig).expect("rig orientation");
                // Never past the target, always between base and target.
                assert!((o.pitch - cfg.base_pitch).abs() <= k + 1e-5);
                assert!((o.yaw - cfg.base_yaw).abs() <= k + 1e-5);
                assert!((o.pitch - target_pitch) * (cfg.base_pitch - target_pitch) >= -1e-9);
                assert!((o.yaw - target_yaw) * (cfg.base_yaw - target_yaw) >= -1e-9);
            }

            let o = *world.get::<CubeOrientation>(rig).expect("rig orientation");
            assert!((o.pitch - target_pitch).abs() < 1e-4);
            assert!((o.yaw - target_yaw).abs() < 1e-4);
            let transform = world.get::<Transform>(rig).expect("rig transform");
            assert!(transform.rotation.abs_diff_eq(o.to_quat(), 1e-6));
        }
    }

    #[test]
    fn missing_rig_is_skipped() {
        let mut world = World::new();
        world.insert_resource(CubeConfig::default());
        world.insert_resource(PointerPosition(Vec2::ONE));
        let system = world.register_system(follow_pointer);
        world.run_system(system).expect("follow_pointer tolerates no rig");
    }
}
