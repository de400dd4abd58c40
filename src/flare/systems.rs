use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

use super::FlareConfig;
use super::entities::{FlareChannels, FlareTarget, VertexFlare};
use crate::cube::CubeRig;
use crate::math;
use crate::menu::{HoverState, MenuCatalog};
use crate::visuals::MenuCamera;

// ── Startup ─────────────────────────────────────────────────────────

/// Spawns one invisible [`VertexFlare`] per menu entry under the cube rig.
pub fn spawn_flares(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
    cfg: Res<FlareConfig>,
    catalog: Res<MenuCatalog>,
    rig_q: Query<Entity, With<CubeRig>>,
) {
    let Ok(rig) = rig_q.single() else {
        warn!("no cube rig; vertex flares not spawned");
        return;
    };

    let glow = images.add(glow_image(cfg.texture_size));
    let quad = meshes.add(Rectangle::new(1.0, 1.0));
    let tint = LinearRgba::WHITE * cfg.intensity;

    for entry in catalog.iter() {
        // Opacity animates per flare, so each gets its own material.
        let material = materials.add(StandardMaterial {
            base_color: Color::LinearRgba(tint.with_alpha(0.0)),
            base_color_texture: Some(glow.clone()),
            unlit: true,
            alpha_mode: AlphaMode::Add,
            ..default()
        });
        let flare = commands
            .spawn((
                VertexFlare { entry: entry.id },
                FlareChannels::default(),
                Name::new(format!("Flare{}", entry.id.0)),
                Mesh3d(quad.clone()),
                MeshMaterial3d(material),
                Transform::from_translation(entry.position.as_vec3()).with_scale(Vec3::ZERO),
                Visibility::Hidden,
            ))
            .id();
        commands.entity(rig).add_child(flare);
    }
}

/// Soft white radial gradient; alpha follows [`math::radial_glow_alpha`].
fn glow_image(size: u32) -> Image {
    let half = size as f32 / 2.0;
    let mut data = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let d = Vec2::new(x as f32 + 0.5 - half, y as f32 + 0.5 - half).length() / half;
            let alpha = (math::radial_glow_alpha(d) * 255.0).round() as u8;
            data.extend_from_slice(&[255, 255, 255, alpha]);
        }
    }
    Image::new(
        Extent3d {
            width: size,
            height: size,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        data,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD,
    )
}

// ── Update ──────────────────────────────────────────────────────────

/// Points each flare at `Active` or `Inactive` to match [`HoverState`].
///
/// Runs only when the hover slot changed. Flares already heading for the
/// right state keep their in-flight tweens.
pub fn retarget_flares(
    hover: Res<HoverState>,
    cfg: Res<FlareConfig>,
    mut flares: Query<(&VertexFlare, &mut FlareChannels)>,
) {
    for (flare, mut channels) in &mut flares {
        let target = if hover.current() == Some(flare.entry) {
            FlareTarget::Active
        } else {
            FlareTarget::Inactive
        };
        // Reading through `Mut` does not flag the component as changed.
        if channels.target() == target {
            continue;
        }
        channels.retarget(target, &cfg);
        debug!("flare {} -> {:?}", flare.entry, target);
    }
}

/// Ticks flare tweens and writes scale, visibility and material alpha.
pub fn animate_flares(
    time: Res<Time>,
    mut flares: Query<(
        &mut FlareChannels,
        &mut Transform,
        &mut Visibility,
        &MeshMaterial3d<StandardMaterial>,
    )>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let dt = time.delta_secs();
    for (mut channels, mut transform, mut visibility, mat_handle) in &mut flares {
        let (scale, opacity) = channels.tick(dt);

        transform.scale = Vec3::splat(scale);
        visibility.set_if_neq(if scale > f32::EPSILON {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        });
        if let Some(mat) = materials.get_mut(&mat_handle.0) {
            mat.base_color.set_alpha(opacity);
        }
    }
}

/// Turns every flare quad to face the camera despite the rig's rotation.
pub fn billboard_flares(
    rig_q: Query<&Transform, (With<CubeRig>, Without<VertexFlare>)>,
    cam_q: Query<&GlobalTransform, With<MenuCamera>>,
    mut flares: Query<&mut Transform, With<VertexFlare>>,
) {
    let Ok(rig) = rig_q.single() else { return };
    let Ok(cam) = cam_q.single() else { return };

    let facing = rig.rotation.inverse() * cam.rotation();
    for mut transform in &mut flares {
        transform.rotation = facing;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use bevy::ecs::system::SystemId;

    use super::*;
    use crate::menu::{EntryId, HoverIntent, apply_hover_intents};
    use crate::tween::Ease;

    struct Harness {
        world: World,
        apply: SystemId,
        retarget: SystemId,
    }

    impl Harness {
        fn new() -> Self {
            let mut world = World::new();
            world.init_resource::<MenuCatalog>();
            world.init_resource::<HoverState>();
            world.init_resource::<Messages<HoverIntent>>();
            world.insert_resource(FlareConfig::default());
            let entries: Vec<EntryId> = MenuCatalog::default().iter().map(|e| e.id).collect();
            for entry in entries {
                world.spawn((VertexFlare { entry }, FlareChannels::default()));
            }
            let apply = world.register_system(apply_hover_intents);
            let retarget = world.register_system(retarget_flares);
            Self {
                world,
                apply,
                retarget,
            }
        }

        fn send(&mut self, intent: HoverIntent) {
            self.world.write_message(intent);
            self.world.run_system(self.apply).expect("apply runs");
            self.world.run_system(self.retarget).expect("retarget runs");
        }

        fn channels(&mut self, id: u8) -> FlareChannels {
            let mut q = self.world.query::<(&VertexFlare, &FlareChannels)>();
            q.iter(&self.world)
                .find(|(f, _)| f.entry == EntryId(id))
                .map(|(_, ch)| ch.clone())
                .expect("flare exists")
        }

        fn active_ids(&mut self) -> Vec<u8> {
            let mut q = self.world.query::<(&VertexFlare, &FlareChannels)>();
            q.iter(&self.world)
                .filter(|(_, ch)| ch.target() == FlareTarget::Active)
                .map(|(f, _)| f.entry.0)
                .collect()
        }

        fn active_label(&self) -> Option<&'static str> {
            let catalog = self.world.resource::<MenuCatalog>();
            self.world
                .resource::<HoverState>()
                .active_entry(catalog)
                .map(|e| e.label)
        }
    }

    #[test]
    fn switching_entries_keeps_a_single_active_flare() {
        let mut h = Harness::new();
        h.send(HoverIntent::Enter(EntryId(3)));
        assert_eq!(h.active_ids(), vec![3]);

        h.send(HoverIntent::Enter(EntryId(5)));
        assert_eq!(h.active_ids(), vec![5]);
        assert_eq!(h.channels(3).target(), FlareTarget::Inactive);
        assert_eq!(h.channels(5).target(), FlareTarget::Active);
    }

    #[test]
    fn hover_walkthrough_blooms_and_vanishes() {
        let mut h = Harness::new();
        assert_eq!(h.active_label(), None);

        h.send(HoverIntent::Enter(EntryId(1)));
        assert_eq!(h.active_label(), Some("1. Extent"));
        let one = h.channels(1);
        let bloom = one.scale.in_flight().expect("flare 1 blooming");
        assert_eq!((bloom.from, bloom.to, bloom.duration), (0.0, 0.8, 0.4));
        assert_eq!(bloom.ease, Ease::QuadOut);

        // Let flare 1 finish blooming before switching.
        let mut q = h.world.query::<&mut FlareChannels>();
        for mut ch in q.iter_mut(&mut h.world) {
            ch.tick(1.0);
        }

        h.send(HoverIntent::Enter(EntryId(2)));
        assert_eq!(h.active_label(), Some("2. Condition"));
        let one = h.channels(1);
        let vanish = one.scale.in_flight().expect("flare 1 vanishing");
        assert_eq!((vanish.from, vanish.to, vanish.duration), (0.8, 0.0, 0.3));
        assert_eq!(vanish.ease, Ease::QuadIn);
        let two = h.channels(2);
        let bloom = two.scale.in_flight().expect("flare 2 blooming");
        assert_eq!((bloom.from, bloom.to, bloom.duration), (0.0, 0.8, 0.4));
        assert_eq!(bloom.ease, Ease::QuadOut);
    }

    #[test]
    fn duplicate_enter_keeps_running_tween() {
        let mut h = Harness::new();
        h.send(HoverIntent::Enter(EntryId(4)));
        let before = *h.channels(4).scale.in_flight().expect("blooming");
        h.send(HoverIntent::Enter(EntryId(4)));
        assert_eq!(*h.channels(4).scale.in_flight().expect("blooming"), before);
    }

    #[test]
    fn leave_while_idle_changes_nothing() {
        let mut h = Harness::new();
        h.send(HoverIntent::Leave);
        assert!(h.active_ids().is_empty());
        assert!(h.channels(1).scale.in_flight().is_none());
    }

    #[test]
    fn animate_writes_scale_visibility_and_alpha() {
        let mut world = World::new();
        let mut time = Time::<()>::default();
        time.advance_by(Duration::from_secs_f32(1.0));
        world.insert_resource(time);
        world.init_resource::<Assets<StandardMaterial>>();
        let handle = world
            .resource_mut::<Assets<StandardMaterial>>()
            .add(StandardMaterial::default());

        let mut channels = FlareChannels::default();
        channels.retarget(FlareTarget::Active, &FlareConfig::default());
        let e = world
            .spawn((
                channels,
                Transform::default(),
                Visibility::Hidden,
                MeshMaterial3d(handle.clone()),
            ))
            .id();

        let system = world.register_system(animate_flares);
        world.run_system(system).expect("animate runs");

        assert_eq!(world.get::<Transform>(e).expect("transform").scale, Vec3::splat(0.8));
        assert_eq!(
            *world.get::<Visibility>(e).expect("visibility"),
            Visibility::Inherited
        );
        let alpha = world
            .resource::<Assets<StandardMaterial>>()
            .get(&handle)
            .expect("material")
            .base_color
            .alpha();
        assert!((alpha - 0.6).abs() < 1e-6);
    }

    #[test]
    fn glow_texture_is_bright_centre_dark_rim() {
        let image = glow_image(64);
        let data = image.data.expect("pixel data");
        let alpha_at = |x: usize, y: usize| data[(y * 64 + x) * 4 + 3];
        assert!(alpha_at(32, 32) > 100);
        assert_eq!(alpha_at(0, 0), 0);
    }
}
