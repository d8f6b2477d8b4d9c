//! Movement domain: ground contact and arena walls.

use bevy::prelude::*;

use crate::combat::components::LANDING_RECOVERY;
use crate::combat::{CombatEvent, Fighter};
use crate::movement::Arena;
use crate::sprites::AnimationState;

/// Downward speed a touchdown needs before it counts as a hard landing
pub const LANDING_SPEED_THRESHOLD: f32 = 120.0;

/// Snap an airborne, falling fighter onto the floor. Hard landings lock
/// actions out briefly and kick up dust. Returns true on touchdown.
pub fn resolve_ground(fighter: &mut Fighter, arena: &Arena, events: &mut Vec<CombatEvent>) -> bool {
    if fighter.grounded {
        if fighter.position.y > arena.ground_y {
            fighter.position.y = arena.ground_y;
        }
        return false;
    }

    if fighter.position.y < arena.ground_y || fighter.velocity.y < 0.0 {
        return false;
    }

    let impact = fighter.velocity.y;
    fighter.position.y = arena.ground_y;
    fighter.velocity.y = 0.0;
    fighter.grounded = true;
    fighter.has_double_jump = false;

    if impact > LANDING_SPEED_THRESHOLD {
        fighter.timers.landing_recovery = LANDING_RECOVERY;
        if !fighter.stunned && !fighter.is_attacking() && !fighter.is_dashing() {
            fighter.animation.set_state(AnimationState::Landing);
        }
        events.push(CombatEvent::particles(
            Vec2::new(fighter.position.x, arena.ground_y),
            6,
            Color::srgb_u8(180, 170, 150),
        ));
        debug!("{} landed at {:.0} px/s", fighter.name, impact);
    }
    true
}

/// Keep the fighter between the arena walls.
pub fn clamp_to_bounds(fighter: &mut Fighter, arena: &Arena) {
    fighter.position.x = fighter.position.x.clamp(arena.bounds_left, arena.bounds_right);
}
