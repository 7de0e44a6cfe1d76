// Standard library and external crates
use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

// Crate engine modules
use crate::engine::assets::typeface::Typeface;
use crate::engine::camera::scanner_camera::{log_viewport_resize, spawn_scanner_camera};
use crate::engine::core::app_state::{
    AppState, clear_status_text, init_glyph_cycle, show_failure_status, spawn_status_text,
};
use crate::engine::core::window_config::create_window_config;
use crate::engine::interaction::controller::InteractionController;
use crate::engine::interaction::input::PointerEvent;
use crate::engine::loading::typeface_loader::{
    TypefaceLoader, check_typeface_loading, start_loading,
};
use crate::engine::scene::display::spawn_displayed_glyph;
use crate::engine::shaders::GlyphScannerShader;
use crate::engine::systems::frame::FrameOrchestratorPlugin;

// Native-only overlays
#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::fps_tracking::{fps_text_update_system, spawn_fps_overlay};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        // The scanner material is unlit and never casts shadows.
        .add_plugins(MaterialPlugin::<GlyphScannerShader> {
            prepass_enabled: false,
            shadows_enabled: false,
            ..default()
        })
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers Typeface as a loadable asset type from .typeface.json files.
        .add_plugins(JsonAssetPlugin::<Typeface>::new(&["typeface.json"]))
        .add_plugins(FrameOrchestratorPlugin);

    app.init_resource::<TypefaceLoader>()
        .init_resource::<InteractionController>()
        .add_event::<PointerEvent>()
        .insert_resource(ClearColor(Color::BLACK));

    app.add_systems(Startup, (init_glyph_cycle, setup, start_loading).chain())
        .add_systems(
            Update,
            check_typeface_loading.run_if(in_state(AppState::Loading)),
        )
        .add_systems(
            OnEnter(AppState::Running),
            (spawn_displayed_glyph, clear_status_text),
        )
        .add_systems(OnEnter(AppState::Failed), show_failure_status)
        .add_systems(Update, log_viewport_resize);

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Update, fps_text_update_system);
    }

    app
}

fn setup(mut commands: Commands) {
    println!("=== GLYPH SCANNER ===");
    spawn_scanner_camera(&mut commands);
    spawn_status_text(&mut commands);

    #[cfg(not(target_arch = "wasm32"))]
    {
        spawn_fps_overlay(&mut commands);
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
