use bevy::prelude::*;
use constants::cycle::{CYCLE_DURATION_SECS, GLYPH_SEQUENCE};

use crate::engine::scene::glyph_cycle::GlyphCycle;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
    Failed,
}

/// Why the app ended up in `AppState::Failed`.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct LoadFailure {
    pub reason: String,
}

#[derive(Component)]
pub struct FpsText;

/// Centre-screen status line: loading notice, then error text on failure.
#[derive(Component)]
pub struct StatusText;

/// Build the cycle controller from the fixed glyph sequence.
pub fn init_glyph_cycle(mut commands: Commands, mut next_state: ResMut<NextState<AppState>>) {
    match GlyphCycle::new(GLYPH_SEQUENCE, CYCLE_DURATION_SECS) {
        Ok(cycle) => {
            info!(
                "Glyph cycle: {} every {:.1}s",
                cycle.characters().iter().collect::<String>(),
                cycle.duration()
            );
            commands.insert_resource(cycle);
        }
        Err(err) => {
            error!("Invalid glyph cycle: {}", err);
            commands.insert_resource(LoadFailure {
                reason: err.to_string(),
            });
            next_state.set(AppState::Failed);
        }
    }
}

pub fn spawn_status_text(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("Loading typeface..."),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.6)),
                StatusText,
            ));
        });
}

pub fn clear_status_text(mut query: Query<&mut Text, With<StatusText>>) {
    println!("→ Typeface ready, transitioning to Running state");
    for mut text in &mut query {
        text.0.clear();
    }
}

/// Replace the status line with the failure reason.
pub fn show_failure_status(
    failure: Option<Res<LoadFailure>>,
    mut query: Query<(&mut Text, &mut TextColor), With<StatusText>>,
) {
    let reason = failure
        .map(|failure| failure.reason.clone())
        .unwrap_or_else(|| String::from("unknown error"));
    println!("→ Transitioning to Failed state: {}", reason);

    for (mut text, mut colour) in &mut query {
        text.0 = format!("Glyph scanner failed to start\n{}", reason);
        colour.0 = Color::srgb(1.0, 0.25, 0.2);
    }
}
