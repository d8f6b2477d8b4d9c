//! Combat domain: decision policy for computer-controlled fighters.

use bevy::prelude::*;
use rand::Rng;

use crate::combat::components::Fighter;
use crate::combat::events::CombatEvent;
use crate::content::AiProfile;
use crate::sprites::AnimationState;

/// Pursue once the target is beyond this share of attack range
pub const PURSUE_RANGE_SHARE: f32 = 0.9;
/// Target this far above counts as worth jumping for
pub const JUMP_HEIGHT_GAP: f32 = 60.0;
/// Gaps over this many attack ranges are closed with a dash
pub const DASH_GAP_RANGES: f32 = 3.0;
/// How long a reactive block is held
pub const BLOCK_HOLD: f32 = 0.3;

const RECOVERY_DECAY: f32 = 0.2;
const PURSUE_SMOOTHING: f32 = 0.2;
const HOLD_SMOOTHING: f32 = 0.3;

/// What the AI is currently trying to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AiIntent {
    #[default]
    Hold,
    Pursue,
    Retreat,
    Windup,
    Guard,
    Recover,
}

/// Per-fighter AI memory between ticks.
#[derive(Debug, Clone)]
pub struct AiBrain {
    pub profile: AiProfile,
    pub intent: AiIntent,
    /// Counts down to the next probabilistic decision
    pub decision_timer: f32,
    /// Remaining time to hold a reactive block
    pub block_timer: f32,
    /// Set once the current incoming swing has been rolled against
    pub reacted_to_swing: bool,
    /// A follow-up swing is queued for when the current one recovers
    pub chain_pending: bool,
}

impl AiBrain {
    pub fn new(profile: AiProfile) -> Self {
        Self {
            profile,
            intent: AiIntent::Hold,
            decision_timer: 0.0,
            block_timer: 0.0,
            reacted_to_swing: false,
            chain_pending: false,
        }
    }

    /// Forget everything but the profile.
    pub fn reset(&mut self) {
        *self = Self::new(self.profile.clone());
    }

    fn set_intent(&mut self, intent: AiIntent, name: &str) {
        if self.intent != intent {
            debug!("{} AI: {:?} -> {:?}", name, self.intent, intent);
            self.intent = intent;
        }
    }
}

/// `1 + (1 - health ratio) * 0.5`: hurt fighters press harder.
pub fn aggression_multiplier(fighter: &Fighter) -> f32 {
    1.0 + (1.0 - fighter.health.ratio()) * 0.5
}

fn roll(rng: &mut impl Rng, chance: f32) -> bool {
    let value: f32 = rng.random();
    value < chance
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Drive one AI fighter for one tick against `target`.
///
/// Attacks always go through the telegraph; an expired telegraph swings
/// unconditionally. Every chance is an independent draw from `rng`.
pub fn drive_ai(
    fighter: &mut Fighter,
    brain: &mut AiBrain,
    target: &Fighter,
    rng: &mut impl Rng,
    dt: f32,
    events: &mut Vec<CombatEvent>,
) {
    let dx = target.position.x - fighter.position.x;
    let distance = dx.abs();
    let direction = if dx == 0.0 {
        fighter.facing.sign()
    } else {
        dx.signum()
    };
    let aggression = aggression_multiplier(fighter);

    brain.decision_timer -= dt;

    if fighter.telegraph_ready() && fighter.release_telegraph(events) {
        brain.chain_pending = roll(rng, brain.profile.combo_chance);
        if brain.chain_pending {
            debug!("{} AI queued a chain (combo {})", fighter.name, fighter.combo_count);
        }
        brain.set_intent(AiIntent::Recover, &fighter.name);
    }

    if !target.is_attacking() {
        brain.reacted_to_swing = false;
    }

    if brain.block_timer > 0.0 {
        brain.block_timer -= dt;
        fighter.blocking = brain.block_timer > 0.0;
    }

    if fighter.stunned {
        brain.chain_pending = false;
    }

    if fighter.stunned || fighter.is_in_recovery() {
        fighter.blocking = false;
        brain.block_timer = 0.0;
        fighter.velocity.x = lerp(fighter.velocity.x, 0.0, RECOVERY_DECAY);
        brain.set_intent(AiIntent::Recover, &fighter.name);
        return;
    }

    // Dash velocity stays as launched
    if fighter.is_dashing() {
        return;
    }

    if brain.chain_pending && fighter.can_attack() {
        brain.chain_pending = false;
        let window_open = fighter.timers.combo_window > 0.0;
        if window_open && distance <= fighter.stats.attack_range && fighter.start_telegraph() {
            // Re-arm so the follow-up lands inside the window after its windup
            fighter.timers.combo_window = fighter.stats.combo_window;
            brain.decision_timer = brain.profile.reaction_time;
            brain.set_intent(AiIntent::Windup, &fighter.name);
            return;
        }
    }

    if target.is_hit_active() && !brain.reacted_to_swing && !fighter.telegraphing {
        brain.reacted_to_swing = true;
        if roll(rng, brain.profile.block_chance) {
            fighter.blocking = true;
            brain.block_timer = BLOCK_HOLD;
            fighter.trigger_parry_window();
            fighter.animation.set_state(AnimationState::Blocking);
            brain.set_intent(AiIntent::Guard, &fighter.name);
        }
    }

    if fighter.telegraphing || fighter.blocking {
        fighter.velocity.x = lerp(fighter.velocity.x, 0.0, HOLD_SMOOTHING);
        return;
    }

    let range = fighter.stats.attack_range;

    if distance > range * PURSUE_RANGE_SHARE {
        let speed = fighter.stats.move_speed * brain.profile.pursue_speed_factor * aggression;
        fighter.velocity.x = lerp(fighter.velocity.x, direction * speed, PURSUE_SMOOTHING);
        brain.set_intent(AiIntent::Pursue, &fighter.name);

        if brain.decision_timer <= 0.0 {
            brain.decision_timer = brain.profile.reaction_time;

            let target_above = fighter.position.y - target.position.y > JUMP_HEIGHT_GAP;
            if target_above && fighter.can_jump() && roll(rng, brain.profile.jump_chance) {
                fighter.start_jump();
            } else if distance > range * DASH_GAP_RANGES
                && fighter.can_dash()
                && roll(rng, brain.profile.dodge_chance)
            {
                fighter.start_dash(direction, events);
            }
        }
        return;
    }

    fighter.velocity.x = lerp(fighter.velocity.x, 0.0, HOLD_SMOOTHING);

    if brain.decision_timer > 0.0 {
        return;
    }
    brain.decision_timer = brain.profile.reaction_time;

    if fighter.can_dash() && roll(rng, brain.profile.dodge_chance) {
        fighter.start_dash(-direction, events);
        brain.set_intent(AiIntent::Retreat, &fighter.name);
    } else if fighter.can_attack() && roll(rng, brain.profile.aggression * aggression) {
        fighter.start_telegraph();
        brain.set_intent(AiIntent::Windup, &fighter.name);
    } else {
        brain.set_intent(AiIntent::Hold, &fighter.name);
    }
}
