//! ContentRegistry resource providing HashMap lookups for all loaded content.

use bevy::prelude::*;
use std::collections::HashMap;

use super::data::*;

/// Central registry for all loaded game content.
/// Provides O(1) lookup by id for any content type.
#[derive(Resource, Debug, Default, Clone)]
pub struct ContentRegistry {
    pub characters: HashMap<String, CharacterDef>,
    pub enemies: HashMap<String, EnemyDef>,
    pub arena: ArenaDef,
}

impl ContentRegistry {
    /// Built-in presets used when assets/data cannot be read.
    pub fn builtin() -> Self {
        let mut registry = Self::default();

        registry.characters.insert(
            "wanderer".to_string(),
            CharacterDef {
                id: "wanderer".to_string(),
                name: "Wanderer".to_string(),
                description: "Balanced swordsman".to_string(),
                stats: FighterStats::default(),
            },
        );

        // (id, name, tier, health, damage, posture)
        let enemies = [
            ("bandit", "Bandit", EnemyTier::Battle, 90.0, 10.0, 100.0),
            ("duelist", "Duelist", EnemyTier::Elite, 130.0, 14.0, 120.0),
            ("warlord", "Warlord", EnemyTier::Boss, 220.0, 18.0, 160.0),
        ];
        for (id, name, tier, health, damage, posture) in enemies {
            registry.enemies.insert(
                id.to_string(),
                EnemyDef {
                    id: id.to_string(),
                    name: name.to_string(),
                    description: String::new(),
                    tier,
                    stats: FighterStats {
                        move_speed: 380.0,
                        jump_force: 700.0,
                        health_max: health,
                        posture_max: posture,
                        posture_recovery_rate: 10.0,
                        attack_damage: damage,
                        attack_posture_damage: 24.0,
                        attack_range: 68.0,
                        ..default()
                    },
                    ai: AiProfile::default(),
                },
            );
        }

        registry
    }

    /// Returns a summary of loaded content counts for logging.
    pub fn summary(&self) -> String {
        format!(
            "ContentRegistry loaded:\n\
             - Characters: {}\n\
             - Enemies: {}\n\
             - Arena: ground_y={} bounds=[{}, {}]",
            self.characters.len(),
            self.enemies.len(),
            self.arena.ground_y,
            self.arena.bounds_left,
            self.arena.bounds_right,
        )
    }

    /// Returns total count of all loaded items.
    pub fn total_count(&self) -> usize {
        self.characters.len() + self.enemies.len()
    }

    pub fn character(&self, id: &str) -> Option<&CharacterDef> {
        self.characters.get(id)
    }

    pub fn enemy(&self, id: &str) -> Option<&EnemyDef> {
        self.enemies.get(id)
    }

    /// First enemy of the given tier, by id order so the pick is stable.
    pub fn enemy_for_tier(&self, tier: EnemyTier) -> Option<&EnemyDef> {
        let mut candidates: Vec<&EnemyDef> =
            self.enemies.values().filter(|e| e.tier == tier).collect();
        candidates.sort_by(|a, b| a.id.cmp(&b.id));
        candidates.into_iter().next()
    }
}
