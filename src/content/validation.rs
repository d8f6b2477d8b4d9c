//! Validation for stat bundles and arena geometry.

use super::data::*;
use super::registry::ContentRegistry;

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub source_id: String,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} '{}' has invalid '{}': {}",
            self.source_type, self.source_id, self.field, self.message
        )
    }
}

impl std::error::Error for ValidationError {}

/// Helper macro for checking a numeric field against a predicate
macro_rules! check_field {
    ($errors:expr, $source_type:expr, $source_id:expr, $owner:expr, $field:ident, $ok:expr, $what:expr) => {
        let value = $owner.$field;
        if !($ok)(value) {
            $errors.push(ValidationError {
                source_type: $source_type,
                source_id: $source_id.to_string(),
                field: stringify!($field),
                message: format!("{} (got {})", $what, value),
            });
        }
    };
}

fn positive(v: f32) -> bool {
    v > 0.0
}

fn non_negative(v: f32) -> bool {
    v >= 0.0
}

fn probability(v: f32) -> bool {
    (0.0..=1.0).contains(&v)
}

/// Validate one stat bundle.
pub fn validate_stats(
    source_type: &'static str,
    source_id: &str,
    stats: &FighterStats,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check_field!(errors, source_type, source_id, stats, health_max, positive, "must be > 0");
    check_field!(errors, source_type, source_id, stats, posture_max, positive, "must be > 0");
    check_field!(errors, source_type, source_id, stats, rage_max, positive, "must be > 0");
    check_field!(errors, source_type, source_id, stats, half_width, positive, "must be > 0");
    check_field!(errors, source_type, source_id, stats, height, positive, "must be > 0");
    check_field!(errors, source_type, source_id, stats, attack_duration, positive, "must be > 0");
    check_field!(errors, source_type, source_id, stats, dash_duration, positive, "must be > 0");

    for (field, value) in [
        ("move_speed", stats.move_speed),
        ("jump_force", stats.jump_force),
        ("gravity", stats.gravity),
        ("dash_speed", stats.dash_speed),
        ("air_dash_speed", stats.air_dash_speed),
        ("posture_recovery_rate", stats.posture_recovery_rate),
        ("attack_damage", stats.attack_damage),
        ("attack_posture_damage", stats.attack_posture_damage),
        ("attack_range", stats.attack_range),
        ("dash_cooldown", stats.dash_cooldown),
        ("parry_window", stats.parry_window),
        ("stun_duration", stats.stun_duration),
        ("combo_window", stats.combo_window),
        ("telegraph_duration", stats.telegraph_duration),
    ] {
        if !non_negative(value) {
            errors.push(ValidationError {
                source_type,
                source_id: source_id.to_string(),
                field,
                message: format!("must be >= 0 (got {})", value),
            });
        }
    }

    let window_ok = stats.attack_active_start >= 0.0
        && stats.attack_active_start <= stats.attack_active_end
        && stats.attack_active_end <= stats.attack_duration;
    if !window_ok {
        errors.push(ValidationError {
            source_type,
            source_id: source_id.to_string(),
            field: "attack_active_start..attack_active_end",
            message: format!(
                "active window [{}, {}] must lie inside [0, {}]",
                stats.attack_active_start, stats.attack_active_end, stats.attack_duration
            ),
        });
    }

    errors
}

fn validate_ai(source_id: &str, ai: &AiProfile) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let source_type = "EnemyAi";

    check_field!(errors, source_type, source_id, ai, aggression, probability, "must be in [0, 1]");
    check_field!(errors, source_type, source_id, ai, block_chance, probability, "must be in [0, 1]");
    check_field!(errors, source_type, source_id, ai, dodge_chance, probability, "must be in [0, 1]");
    check_field!(errors, source_type, source_id, ai, jump_chance, probability, "must be in [0, 1]");
    check_field!(errors, source_type, source_id, ai, combo_chance, probability, "must be in [0, 1]");
    check_field!(errors, source_type, source_id, ai, reaction_time, positive, "must be > 0");
    check_field!(
        errors,
        source_type,
        source_id,
        ai,
        pursue_speed_factor,
        non_negative,
        "must be >= 0"
    );

    errors
}

/// Validate every definition in the registry.
/// Returns a list of validation errors, empty if all content is usable.
pub fn validate_content(registry: &ContentRegistry) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (id, character) in &registry.characters {
        errors.extend(validate_stats("Character", id, &character.stats));
    }

    for (id, enemy) in &registry.enemies {
        errors.extend(validate_stats("Enemy", id, &enemy.stats));
        errors.extend(validate_ai(id, &enemy.ai));
    }

    let arena = &registry.arena;
    if arena.bounds_left >= arena.bounds_right {
        errors.push(ValidationError {
            source_type: "Arena",
            source_id: "arena".to_string(),
            field: "bounds_left..bounds_right",
            message: format!(
                "left bound {} must be below right bound {}",
                arena.bounds_left, arena.bounds_right
            ),
        });
    }

    errors
}
