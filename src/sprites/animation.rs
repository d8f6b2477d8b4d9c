//! Animation state tag and cosmetic offset track.
//!
//! The tag is a projection of combat timers and flags. Combat logic sets it
//! as a side effect and never reads it back to make decisions.

use std::f32::consts::PI;

use bevy::prelude::*;

/// Animation states for a fighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
pub enum AnimationState {
    #[default]
    Idle,
    Walking,
    Attacking,
    HitReaction,
    Blocking,
    Stunned,
    Dashing,
    Jumping,
    Falling,
    Landing,
}

const HIT_REACTION_TIME: f32 = 0.3;
const LANDING_TIME: f32 = 0.2;
const WALK_THRESHOLD: f32 = 10.0;
const OFFSET_SETTLE: f32 = 0.15;

/// What the offset calculation needs to know about its fighter this frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnimationCues {
    pub facing: f32,
    pub speed_x: f32,
    pub grounded: bool,
    pub blocking: bool,
    /// 0..1 through the current swing, 0 when not attacking
    pub attack_progress: f32,
}

/// Current tag, time spent in it, and the cosmetic draw offset.
#[derive(Debug, Clone, Default)]
pub struct AnimationTrack {
    pub state: AnimationState,
    pub timer: f32,
    pub offset: Vec2,
}

impl AnimationTrack {
    /// Set the animation state, resetting the timer if the state changed.
    pub fn set_state(&mut self, state: AnimationState) {
        if self.state != state {
            debug!("Animation {:?} -> {:?}", self.state, state);
            self.state = state;
            self.timer = 0.0;
        }
    }

    pub fn is(&self, state: AnimationState) -> bool {
        self.state == state
    }

    /// Advance the time spent in the current state.
    pub fn advance(&mut self, dt: f32) {
        self.timer += dt;
    }

    /// Recompute the draw offset and apply the self-timed transitions
    /// (reactions and landings settle back to Idle).
    pub fn update_offset(&mut self, cues: &AnimationCues) {
        let mut target = Vec2::ZERO;

        match self.state {
            AnimationState::Attacking => {
                target.x = (cues.attack_progress * PI).sin() * cues.facing * 10.0;
                self.offset = target;
                return;
            }
            AnimationState::HitReaction => {
                if self.timer >= HIT_REACTION_TIME {
                    self.set_state(AnimationState::Idle);
                } else {
                    target.x = -cues.facing * 6.0 * (1.0 - self.timer / HIT_REACTION_TIME);
                }
            }
            AnimationState::Blocking => {
                if cues.blocking {
                    target.x = -cues.facing * 3.0;
                } else {
                    self.set_state(AnimationState::Idle);
                }
            }
            AnimationState::Landing => {
                if self.timer >= LANDING_TIME {
                    self.set_state(AnimationState::Idle);
                } else {
                    target.y = 4.0 * (1.0 - self.timer / LANDING_TIME);
                }
            }
            AnimationState::Walking => {
                if cues.speed_x.abs() < WALK_THRESHOLD || !cues.grounded {
                    self.set_state(AnimationState::Idle);
                } else {
                    target.y = (self.timer * 18.0).sin() * 2.0;
                }
            }
            AnimationState::Stunned => {
                target.x = (self.timer * 40.0).sin() * 3.0;
            }
            AnimationState::Idle => {
                if cues.grounded && cues.speed_x.abs() >= WALK_THRESHOLD {
                    self.set_state(AnimationState::Walking);
                }
            }
            AnimationState::Dashing | AnimationState::Jumping | AnimationState::Falling => {}
        }

        self.offset = self.offset.lerp(target, OFFSET_SETTLE);
    }
}
