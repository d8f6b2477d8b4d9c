//! Content domain: stat presets loaded once at startup.
//!
//! Fighters are built from these immutable bundles; nothing here is patched
//! after load. A new bout rebuilds its fighters from the registry.

mod data;
mod loader;
mod registry;
#[cfg(test)]
mod tests;
mod validation;

pub use data::{
    AiProfile, ArenaDef, CharacterDef, DataFile, EnemyDef, EnemyTier, FighterStats,
};
pub use loader::{ContentLoadError, load_all_content, load_data_file, load_single_file};
pub use registry::ContentRegistry;
pub use validation::{ValidationError, validate_content, validate_stats};

use bevy::prelude::*;

use crate::core::RunConfig;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<FighterStats>()
            .register_type::<AiProfile>()
            .register_type::<ArenaDef>()
            .add_systems(PreStartup, setup_content_registry);
    }
}

fn setup_content_registry(mut commands: Commands, config: Res<RunConfig>) {
    let registry = match load_all_content(&config.content_dir) {
        Ok(registry) => {
            info!("{}", registry.summary());
            registry
        }
        Err(errors) => {
            for error in &errors {
                warn!("{}", error);
            }
            warn!("Falling back to built-in fighter presets");
            ContentRegistry::builtin()
        }
    };

    for problem in validate_content(&registry) {
        warn!("Content validation: {}", problem);
    }

    commands.insert_resource(registry);
}
