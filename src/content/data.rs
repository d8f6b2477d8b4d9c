//! Data definitions for all RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization. The ContentRegistry provides lookup by id.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Fighter stat bundle (shared by characters and enemies)
// ============================================================================

/// Fully-resolved numeric stats for one combatant.
///
/// Immutable for the fighter's lifetime. Missing fields in a preset fall back
/// to the baseline values below.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct FighterStats {
    // Movement
    pub move_speed: f32,
    pub jump_force: f32,
    pub gravity: f32,
    pub dash_speed: f32,
    pub air_dash_speed: f32,

    // Resources
    pub health_max: f32,
    pub posture_max: f32,
    pub rage_max: f32,
    /// Posture regained per second while not stunned
    pub posture_recovery_rate: f32,

    // Attack
    pub attack_damage: f32,
    pub attack_posture_damage: f32,
    pub attack_range: f32,
    pub attack_duration: f32,
    /// Seconds into the swing when the hit becomes live
    pub attack_active_start: f32,
    /// Seconds into the swing when the hit stops being live
    pub attack_active_end: f32,

    // Timing
    pub dash_duration: f32,
    pub dash_cooldown: f32,
    pub parry_window: f32,
    pub stun_duration: f32,
    pub combo_window: f32,
    pub telegraph_duration: f32,

    // Dimensions
    pub half_width: f32,
    pub height: f32,
}

impl Default for FighterStats {
    fn default() -> Self {
        Self {
            move_speed: 420.0,
            jump_force: 750.0,
            gravity: 2800.0,
            dash_speed: 1100.0,
            air_dash_speed: 950.0,
            health_max: 100.0,
            posture_max: 100.0,
            rage_max: 100.0,
            posture_recovery_rate: 12.0,
            attack_damage: 12.0,
            attack_posture_damage: 22.0,
            attack_range: 72.0,
            attack_duration: 0.35,
            attack_active_start: 0.10,
            attack_active_end: 0.18,
            dash_duration: 0.16,
            dash_cooldown: 0.60,
            parry_window: 0.12,
            stun_duration: 0.7,
            combo_window: 0.5,
            telegraph_duration: 0.35,
            half_width: 22.0,
            height: 88.0,
        }
    }
}

// ============================================================================
// Characters (characters.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct CharacterDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub stats: FighterStats,
}

// ============================================================================
// Enemies (enemies.ron)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Reflect, Default)]
pub enum EnemyTier {
    #[default]
    Battle,
    Elite,
    Boss,
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct EnemyDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tier: EnemyTier,
    #[serde(default)]
    pub stats: FighterStats,
    #[serde(default)]
    pub ai: AiProfile,
}

/// Behaviour knobs for a computer-controlled fighter.
///
/// Chances are per decision point, decisions are taken every `reaction_time`
/// seconds (blocks are rolled once per incoming swing instead).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct AiProfile {
    pub aggression: f32,
    pub reaction_time: f32,
    pub block_chance: f32,
    pub dodge_chance: f32,
    pub jump_chance: f32,
    pub combo_chance: f32,
    pub pursue_speed_factor: f32,
}

impl Default for AiProfile {
    fn default() -> Self {
        Self {
            aggression: 0.5,
            reaction_time: 0.3,
            block_chance: 0.25,
            dodge_chance: 0.15,
            jump_chance: 0.3,
            combo_chance: 0.35,
            pursue_speed_factor: 0.6,
        }
    }
}

// ============================================================================
// Arena (arena.ron)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct ArenaDef {
    pub ground_y: f32,
    pub bounds_left: f32,
    pub bounds_right: f32,
    pub spawn_left_x: f32,
    pub spawn_right_x: f32,
}

impl Default for ArenaDef {
    fn default() -> Self {
        Self {
            ground_y: 580.0,
            bounds_left: 80.0,
            bounds_right: 1200.0,
            spawn_left_x: 360.0,
            spawn_right_x: 920.0,
        }
    }
}
