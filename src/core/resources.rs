//! Core domain: run configuration.

use std::path::PathBuf;

use bevy::prelude::*;
use rand::Rng;

/// Settings for one run of the simulator. Read once at startup.
#[derive(Resource, Debug, Clone)]
pub struct RunConfig {
    /// Seed for every AI roll in the bout
    pub seed: u64,
    pub content_dir: PathBuf,
    pub character_id: String,
    pub enemy_id: String,
    /// Stop the app once the bout has a winner
    pub exit_on_outcome: bool,
    /// Give up on a bout that runs longer than this (simulation seconds)
    pub time_limit: f32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: rand::rng().random(),
            content_dir: PathBuf::from("assets/data"),
            character_id: "wanderer".to_string(),
            enemy_id: "bandit".to_string(),
            exit_on_outcome: true,
            time_limit: 180.0,
        }
    }
}

impl RunConfig {
    /// Defaults overridden by `DUEL_SEED`, `DUEL_CONTENT_DIR`,
    /// `DUEL_CHARACTER` and `DUEL_ENEMY` when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var("DUEL_SEED") {
            match raw.parse() {
                Ok(seed) => config.seed = seed,
                Err(_) => warn!("Ignoring DUEL_SEED={:?}: not an unsigned integer", raw),
            }
        }
        if let Ok(dir) = std::env::var("DUEL_CONTENT_DIR") {
            config.content_dir = PathBuf::from(dir);
        }
        if let Ok(id) = std::env::var("DUEL_CHARACTER") {
            config.character_id = id;
        }
        if let Ok(id) = std::env::var("DUEL_ENEMY") {
            config.enemy_id = id;
        }

        config
    }
}
