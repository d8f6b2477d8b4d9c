//! Combat domain: the per-tick timer advancer.

use bevy::prelude::*;

use crate::combat::components::{DASH_IFRAME_TAIL, Fighter, VELOCITY_DAMPING};
use crate::sprites::{AnimationCues, AnimationState};

/// Telegraphs still armed this far past zero are force-cancelled
pub const TELEGRAPH_TIMEOUT: f32 = -1.0;

fn tick_down(timer: &mut f32, dt: f32) {
    if *timer > 0.0 {
        *timer -= dt;
    }
}

impl Fighter {
    /// Advance every timer by `dt` and flip the flags that depend on them.
    /// Runs once per tick, after intent and before hit resolution.
    /// The step order matters: later steps read flags set by earlier ones.
    pub fn advance_timers(&mut self, dt: f32) {
        let dt = dt.max(0.0);

        if !self.stunned {
            self.posture.add(self.stats.posture_recovery_rate * dt);
        }

        tick_down(&mut self.timers.attack_cooldown, dt);
        tick_down(&mut self.timers.dash_cooldown, dt);
        tick_down(&mut self.timers.parry, dt);
        tick_down(&mut self.timers.jump_cooldown, dt);
        tick_down(&mut self.timers.landing_recovery, dt);
        tick_down(&mut self.timers.iframes, dt);

        if self.timers.combo_window > 0.0 {
            self.timers.combo_window -= dt;
            if self.timers.combo_window <= 0.0 {
                self.combo_count = 0;
            }
        }

        self.invulnerable = self.timers.iframes > 0.0
            || (self.timers.dash > 0.0
                && self.timers.dash > DASH_IFRAME_TAIL * self.stats.dash_duration);

        self.animation.advance(dt);

        if self.stunned {
            self.timers.stun -= dt;
            if self.timers.stun <= 0.0 {
                self.stunned = false;
                self.animation.set_state(AnimationState::Idle);
            }
        }

        if self.timers.attack > 0.0 {
            self.timers.attack -= dt;
            if self.timers.attack <= 0.0 {
                self.timers.attack = 0.0;
                self.landed_hit_this_swing = false;
                self.animation.set_state(AnimationState::Idle);
            }
        }

        if self.timers.dash > 0.0 {
            self.timers.dash -= dt;
            if self.timers.dash <= 0.0 {
                self.timers.dash = 0.0;
                self.velocity.x *= VELOCITY_DAMPING;
                if !self.stunned && !self.is_attacking() {
                    self.animation.set_state(AnimationState::Idle);
                }
            }
        }

        if self.telegraphing {
            self.timers.telegraph -= dt;
            if self.timers.telegraph < TELEGRAPH_TIMEOUT {
                warn!(
                    "{} telegraph never released, cancelling after {:.2}s overrun",
                    self.name, -self.timers.telegraph
                );
                self.telegraphing = false;
                self.timers.telegraph = 0.0;
            }
        }

        let cues = AnimationCues {
            facing: self.facing.sign(),
            speed_x: self.velocity.x,
            grounded: self.grounded,
            blocking: self.blocking,
            attack_progress: self.attack_progress(),
        };
        self.animation.update_offset(&cues);
    }
}
