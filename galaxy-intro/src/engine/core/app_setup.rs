use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy::window::WindowResized;

// Crate engine modules
use crate::engine::animation::fly_through::FlyThrough;
use crate::engine::animation::transition::{TransitionController, TransitionPhase};
use crate::engine::core::app_state::{
    notify_phase_change, retire_galaxy_scene, sync_transition_phase,
};
use crate::engine::core::window_config::create_window_config;
use crate::engine::render::particle_material::ParticleMaterial;
use crate::engine::scene::scene_builder::build_scenes;
use crate::engine::scene::surfaces::RenderSurfacePlugin;
use crate::engine::systems::{
    animation_driver::{advance_fly_through, spin_particle_fields},
    fps_tracking::fps_notification_system,
    resize::handle_viewport_resize,
    transition_driver::drive_transition,
};
// Page and host notifications
use crate::page::Page;
use crate::rpc::web_rpc::{WebRpcInterface, WebRpcPlugin};

pub fn create_app() -> App {
    let mut app = App::new();

    // Canvases must exist before winit looks them up.
    app.add_plugins(create_default_plugins())
        .add_plugins(RenderSurfacePlugin)
        .add_plugins(MaterialPlugin::<ParticleMaterial> {
            prepass_enabled: false,
            shadows_enabled: false,
            ..default()
        })
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(WebRpcPlugin)
        .add_plugins(IntroPlugin);

    app.add_systems(Startup, build_scenes)
        .add_systems(Update, fps_notification_system);

    app
}

/// Intro state and per-frame systems. Independent of rendering, so it runs
/// under `MinimalPlugins` as well.
pub struct IntroPlugin;

impl Plugin for IntroPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<TransitionPhase>()
            .init_resource::<FlyThrough>()
            .init_resource::<TransitionController>()
            .init_resource::<Page>()
            .init_resource::<WebRpcInterface>()
            .add_event::<WindowResized>();

        // One frame of the intro, in order.
        app.add_systems(
            Update,
            (
                spin_particle_fields,
                advance_fly_through,
                drive_transition,
                sync_transition_phase,
            )
                .chain(),
        )
        .add_systems(Update, handle_viewport_resize);

        app.add_systems(OnEnter(TransitionPhase::Flashing), notify_phase_change)
            .add_systems(
                OnEnter(TransitionPhase::Revealed),
                (retire_galaxy_scene, notify_phase_change),
            );
    }
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
