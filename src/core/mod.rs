//! Core domain: run configuration and the exhibition bout lifecycle.

mod resources;
mod systems;

pub use resources::RunConfig;

use bevy::prelude::*;

use crate::core::systems::{enforce_time_limit, exit_on_outcome, start_exhibition_bout};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RunConfig>()
            .add_systems(Startup, start_exhibition_bout)
            .add_systems(PostUpdate, (exit_on_outcome, enforce_time_limit));
    }
}
