//! Neon menu cube viewer.

#[cfg(feature = "native")]
mod cli;

use bevy::app::AppExit;
use bevy::prelude::*;
#[cfg(feature = "native")]
use bevy::remote::{RemotePlugin, http::RemoteHttpPlugin};
use bevy_inspector_egui::quick::WorldInspectorPlugin;

use menu_cube::ViewState;
use menu_cube::ambient::{AmbientConfig, AmbientPlugin};
use menu_cube::cube::{CubeConfig, CubePlugin};
use menu_cube::flare::{FlareConfig, FlarePlugin};
use menu_cube::menu::MenuPlugin;
use menu_cube::overlay::{OverlayConfig, OverlayPlugin};
use menu_cube::pointer::PointerPlugin;
use menu_cube::visuals::{VisualsConfig, VisualsPlugin};

/// Plugin configs plus the state the app starts in.
#[derive(Default)]
pub struct Settings {
    visuals: VisualsConfig,
    cube: CubeConfig,
    ambient: AmbientConfig,
    initial_state: ViewState,
}

fn main() {
    #[cfg(feature = "native")]
    let settings = <cli::Args as clap::Parser>::parse().into_settings();
    #[cfg(not(feature = "native"))]
    let settings = Settings::default();

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Menu Cube".into(),
            fit_canvas_to_parent: true,
            ..default()
        }),
        ..default()
    }))
    .register_type::<ViewState>()
    .insert_state(settings.initial_state)
    .add_plugins(bevy_egui::EguiPlugin::default())
    .add_plugins(MenuPlugin)
    .add_plugins(PointerPlugin)
    .add_plugins(VisualsPlugin(settings.visuals))
    .add_plugins(CubePlugin(settings.cube))
    .add_plugins(FlarePlugin(FlareConfig::default()))
    .add_plugins(AmbientPlugin(settings.ambient))
    .add_plugins(OverlayPlugin(OverlayConfig::default()))
    .add_systems(Update, exit_on_esc)
    .add_systems(Update, toggle_inspector)
    .add_plugins(WorldInspectorPlugin::new().run_if(in_state(ViewState::Inspecting)));

    #[cfg(feature = "native")]
    app.add_plugins(RemotePlugin::default())
        .add_plugins(RemoteHttpPlugin::default());

    app.run();
}

fn toggle_inspector(
    keys: Res<ButtonInput<KeyCode>>,
    state: Res<State<ViewState>>,
    mut next: ResMut<NextState<ViewState>>,
) {
    if keys.just_pressed(KeyCode::Tab) {
        let new_state = match state.get() {
            ViewState::Running => ViewState::Inspecting,
            ViewState::Inspecting => ViewState::Running,
        };
        info!("view state -> {:?}", new_state);
        next.set(new_state);
    }
}

fn exit_on_esc(keys: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}
