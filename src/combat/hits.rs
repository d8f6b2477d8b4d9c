//! Combat domain: hit resolution between an attacker and a defender.

use std::f32::consts::TAU;

use bevy::prelude::*;

use crate::combat::components::Fighter;
use crate::combat::events::CombatEvent;
use crate::sprites::AnimationState;

/// Posture damage dealt back to a parried attacker
pub const PARRY_POSTURE_DAMAGE: f32 = 55.0;
pub const PARRY_STUN: f32 = 0.6;
pub const PARRY_RAGE: f32 = 12.0;
pub const BLOCK_HEALTH_SCALE: f32 = 0.2;
pub const BLOCK_POSTURE_SCALE: f32 = 1.6;
pub const BLOCK_RAGE: f32 = 6.0;
/// Damage bonus per combo step beyond the first
pub const COMBO_STEP_BONUS: f32 = 0.15;
pub const ATTACKER_RAGE_PER_HIT: f32 = 10.0;
pub const DEFENDER_RAGE_PER_HIT: f32 = 4.0;
pub const KNOCKBACK_CLEAN: f32 = 320.0;
pub const KNOCKBACK_BLOCKED: f32 = 140.0;
pub const KNOCKBACK_AIRBORNE_SCALE: f32 = 1.3;
pub const KNOCKBACK_POP: f32 = -220.0;

const PARRY_SPARKS: u32 = 24;
const PARRY_SPARK_RADIUS: f32 = 30.0;

/// How a connecting swing was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitKind {
    Parried,
    Blocked,
    Clean,
}

/// `1 + (combo - 1) * 0.15`, with combo counted from at least one.
pub fn combo_multiplier(combo_count: u32) -> f32 {
    1.0 + (combo_count.max(1) - 1) as f32 * COMBO_STEP_BONUS
}

/// Horizontal reach, facing and vertical overlap. A defender standing at
/// the attacker's exact x is on neither side and cannot be struck.
pub fn in_striking_position(attacker: &Fighter, defender: &Fighter) -> bool {
    let dx = defender.position.x - attacker.position.x;
    let dy = defender.position.y - attacker.position.y;
    let reach = attacker.stats.attack_range + defender.stats.half_width;

    dx.abs() <= reach && dx * attacker.facing.sign() > 0.0 && dy.abs() <= defender.stats.height
}

/// Resolve one attacker against one defender for this tick.
///
/// No-op unless the attacker's swing is in its active window and has not
/// connected yet. At most one hit lands per swing. Returns what happened,
/// or `None` when nothing connected (no state touched, no events).
pub fn resolve_hit(
    attacker: &mut Fighter,
    defender: &mut Fighter,
    events: &mut Vec<CombatEvent>,
) -> Option<HitKind> {
    if !attacker.is_hit_active() || attacker.landed_hit_this_swing {
        return None;
    }
    if defender.invulnerable {
        return None;
    }
    if !in_striking_position(attacker, defender) {
        return None;
    }

    attacker.landed_hit_this_swing = true;

    if defender.consume_parry_if_active() {
        resolve_parry(attacker, defender, events);
        return Some(HitKind::Parried);
    }

    let multiplier = combo_multiplier(attacker.combo_count);
    let mut health_damage = attacker.stats.attack_damage * multiplier;
    let mut posture_damage = attacker.stats.attack_posture_damage * multiplier;

    let kind = if defender.blocking {
        health_damage *= BLOCK_HEALTH_SCALE;
        posture_damage *= BLOCK_POSTURE_SCALE;
        defender.gain_rage(BLOCK_RAGE);
        events.push(CombatEvent::feedback("BLOCKED", 0.5));
        HitKind::Blocked
    } else {
        events.push(CombatEvent::feedback("HIT", 0.3));
        HitKind::Clean
    };

    defender.health.sub(health_damage);
    defender.apply_posture_damage(posture_damage);

    events.push(CombatEvent::DamageDealt {
        position: Vec2::new(defender.position.x, defender.position.y - defender.stats.height),
        amount: health_damage,
        is_critical: attacker.combo_count > 2,
    });

    let mut knockback = match kind {
        HitKind::Blocked => KNOCKBACK_BLOCKED,
        _ => KNOCKBACK_CLEAN,
    };
    if !defender.grounded {
        knockback *= KNOCKBACK_AIRBORNE_SCALE;
    }
    defender.velocity.x = attacker.facing.sign() * knockback;
    if defender.grounded {
        defender.velocity.y = KNOCKBACK_POP;
        defender.grounded = false;
    }

    attacker.gain_rage(ATTACKER_RAGE_PER_HIT * multiplier);
    defender.gain_rage(DEFENDER_RAGE_PER_HIT);

    if !defender.stunned && !defender.is_attacking() {
        defender.animation.set_state(AnimationState::HitReaction);
    }

    events.push(CombatEvent::CameraShake(6.0));
    events.push(CombatEvent::particles(
        defender.position
            + Vec2::new(
                defender.facing.sign() * -4.0,
                -defender.stats.height + 28.0,
            ),
        10,
        Color::srgb_u8(255, 190, 160),
    ));

    debug!(
        "{} hit {} ({:?}) for {:.1} health, {:.1} posture",
        attacker.name, defender.name, kind, health_damage, posture_damage
    );
    Some(kind)
}

fn resolve_parry(attacker: &mut Fighter, defender: &mut Fighter, events: &mut Vec<CombatEvent>) {
    attacker.apply_posture_damage(PARRY_POSTURE_DAMAGE);
    attacker.apply_stun(PARRY_STUN);
    defender.gain_rage(PARRY_RAGE);

    events.push(CombatEvent::CameraShake(12.0));

    let center = defender.position
        + Vec2::new(
            defender.facing.sign() * -6.0,
            -defender.stats.height + 24.0,
        );
    let spark_color = Color::srgb_u8(255, 230, 90);
    for i in 0..PARRY_SPARKS {
        let angle = i as f32 / PARRY_SPARKS as f32 * TAU;
        let offset = Vec2::new(angle.cos(), angle.sin()) * PARRY_SPARK_RADIUS;
        events.push(CombatEvent::particles(center + offset, 2, spark_color));
    }

    events.push(CombatEvent::SlowMotion {
        factor: 0.55,
        duration: 0.30,
    });
    events.push(CombatEvent::feedback("PARRY!", 0.8));

    info!("{} parried {}", defender.name, attacker.name);
}
