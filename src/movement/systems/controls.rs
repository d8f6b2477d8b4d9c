//! Movement domain: turning held/pressed intents into fighter actions.

use crate::combat::{CombatEvent, Fighter};
use crate::movement::FighterControls;
use crate::sprites::AnimationState;

/// Per-tick velocity smoothing toward the target while grounded
pub const GROUND_SMOOTHING: f32 = 0.25;
/// Airborne control is weaker
pub const AIR_SMOOTHING: f32 = 0.10;
/// Easing toward zero while swinging or stunned
pub const LOCKED_SMOOTHING: f32 = 0.2;

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Apply one tick of human intent to a fighter.
///
/// `opponent_x` steers neutral dashes toward the other fighter. With `windup`
/// an attack press arms a telegraph instead of swinging straight away.
pub fn apply_controls(
    fighter: &mut Fighter,
    controls: &FighterControls,
    opponent_x: Option<f32>,
    windup: bool,
    events: &mut Vec<CombatEvent>,
) {
    let direction = controls.horizontal();

    fighter.blocking = controls.block.held;
    if controls.block.just_pressed {
        fighter.trigger_parry_window();
        if !fighter.is_attacking() && !fighter.stunned {
            fighter.animation.set_state(AnimationState::Blocking);
        }
    }

    // Dashes keep their launch velocity until the dash timer ends
    if !fighter.is_dashing() {
        if fighter.is_attacking() || fighter.stunned {
            fighter.velocity.x = lerp(fighter.velocity.x, 0.0, LOCKED_SMOOTHING);
        } else {
            let target = direction * fighter.stats.move_speed;
            let smoothing = if fighter.grounded {
                GROUND_SMOOTHING
            } else {
                AIR_SMOOTHING
            };
            fighter.velocity.x = lerp(fighter.velocity.x, target, smoothing);
        }
    }

    if controls.jump.just_pressed && fighter.can_jump() {
        fighter.start_jump();
    }

    if controls.dash.just_pressed && fighter.can_dash() {
        let dash_direction = if direction != 0.0 {
            direction
        } else if let Some(x) = opponent_x.filter(|x| *x != fighter.position.x) {
            (x - fighter.position.x).signum()
        } else {
            fighter.facing.sign()
        };
        fighter.start_dash(dash_direction, events);
    }

    if controls.attack.just_pressed && fighter.can_attack() {
        if windup {
            fighter.start_telegraph();
        } else {
            fighter.start_attack(events);
        }
    }

    if fighter.telegraph_ready() {
        fighter.release_telegraph(events);
    }
}
