//! Combat domain: fighter state and the status operations that mutate it.

use bevy::prelude::*;

use crate::combat::events::CombatEvent;
use crate::content::FighterStats;
use crate::sprites::{AnimationState, AnimationTrack};

/// Posture after a break, as a fraction of max
pub const POSTURE_BREAK_REFILL: f32 = 0.4;
/// Attack cooldown forced by any stun
pub const STUN_ATTACK_COOLDOWN: f32 = 0.25;
pub const JUMP_COOLDOWN: f32 = 0.1;
pub const DOUBLE_JUMP_FACTOR: f32 = 0.85;
pub const LANDING_RECOVERY: f32 = 0.1;
/// Share of the dash duration covered by the explicit i-frame timer
pub const DASH_IFRAME_SHARE: f32 = 0.7;
/// Dash i-frames end once the dash timer falls to this share of its duration
pub const DASH_IFRAME_TAIL: f32 = 0.2;
/// Horizontal velocity kept when a dash ends or a stun lands
pub const VELOCITY_DAMPING: f32 = 0.3;
/// Attack cooldown scale once a combo passes two hits
pub const COMBO_COOLDOWN_SCALE: f32 = 0.8;

/// A clamped resource meter (health, posture, rage).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Meter {
    pub current: f32,
    pub max: f32,
}

impl Meter {
    pub fn full(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn empty(max: f32) -> Self {
        Self { current: 0.0, max }
    }

    /// Add up to the max. Returns the amount actually gained.
    pub fn add(&mut self, amount: f32) -> f32 {
        let before = self.current;
        self.set(self.current + amount);
        self.current - before
    }

    /// Subtract down to zero. Returns the amount actually lost.
    pub fn sub(&mut self, amount: f32) -> f32 {
        let before = self.current;
        self.set(self.current - amount);
        before - self.current
    }

    pub fn set(&mut self, value: f32) {
        self.current = value.clamp(0.0, self.max.max(0.0));
    }

    pub fn is_empty(&self) -> bool {
        self.current <= 0.0
    }

    pub fn ratio(&self) -> f32 {
        if self.max <= 0.0 {
            0.0
        } else {
            self.current / self.max
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }

    /// Facing from `from_x` toward `to_x`. Ties face right.
    pub fn toward(from_x: f32, to_x: f32) -> Self {
        if from_x <= to_x {
            Facing::Right
        } else {
            Facing::Left
        }
    }
}

/// Countdown timers, in simulation seconds. Anything `<= 0` is inactive.
#[derive(Debug, Clone, Default)]
pub struct CombatTimers {
    pub attack: f32,
    pub attack_cooldown: f32,
    pub dash: f32,
    pub dash_cooldown: f32,
    pub parry: f32,
    pub stun: f32,
    pub jump_cooldown: f32,
    pub landing_recovery: f32,
    pub iframes: f32,
    pub telegraph: f32,
    pub combo_window: f32,
}

/// One combatant. Owned by the bout for its whole life.
#[derive(Debug, Clone)]
pub struct Fighter {
    pub name: String,
    pub is_ai: bool,
    pub stats: FighterStats,

    pub health: Meter,
    pub posture: Meter,
    pub rage: Meter,

    pub position: Vec2,
    pub velocity: Vec2,
    pub facing: Facing,
    pub grounded: bool,
    pub has_double_jump: bool,

    pub blocking: bool,
    pub stunned: bool,
    pub telegraphing: bool,
    pub invulnerable: bool,
    /// Latched when this fighter's current swing connects
    pub landed_hit_this_swing: bool,
    pub combo_count: u32,

    pub timers: CombatTimers,
    pub animation: AnimationTrack,
}

impl Fighter {
    /// Build a fresh fighter standing on the ground at `position`.
    pub fn new(name: impl Into<String>, stats: FighterStats, position: Vec2, is_ai: bool) -> Self {
        Self {
            name: name.into(),
            is_ai,
            health: Meter::full(stats.health_max),
            posture: Meter::full(stats.posture_max),
            rage: Meter::empty(stats.rage_max),
            stats,
            position,
            velocity: Vec2::ZERO,
            facing: Facing::Right,
            grounded: true,
            has_double_jump: false,
            blocking: false,
            stunned: false,
            telegraphing: false,
            invulnerable: false,
            landed_hit_this_swing: false,
            combo_count: 0,
            timers: CombatTimers::default(),
            animation: AnimationTrack::default(),
        }
    }

    pub fn is_defeated(&self) -> bool {
        self.health.is_empty()
    }

    pub fn is_attacking(&self) -> bool {
        self.timers.attack > 0.0
    }

    pub fn is_dashing(&self) -> bool {
        self.timers.dash > 0.0
    }

    /// Attack timer sits inside `[duration - active_end, duration - active_start]`.
    pub fn is_hit_active(&self) -> bool {
        let t = self.timers.attack;
        let duration = self.stats.attack_duration;
        t > 0.0
            && t >= duration - self.stats.attack_active_end
            && t <= duration - self.stats.attack_active_start
    }

    /// Swinging or still locked out by a landing.
    pub fn is_in_recovery(&self) -> bool {
        self.is_attacking() || self.timers.landing_recovery > 0.0
    }

    /// 0..1 through the current swing.
    pub fn attack_progress(&self) -> f32 {
        if !self.is_attacking() || self.stats.attack_duration <= 0.0 {
            return 0.0;
        }
        (1.0 - self.timers.attack / self.stats.attack_duration).clamp(0.0, 1.0)
    }

    pub fn face_toward(&mut self, x: f32) {
        self.facing = Facing::toward(self.position.x, x);
    }

    // ------------------------------------------------------------------
    // Predicates
    // ------------------------------------------------------------------

    pub fn can_attack(&self) -> bool {
        self.timers.attack <= 0.0
            && self.timers.attack_cooldown <= 0.0
            && !self.stunned
            && !self.telegraphing
            && self.timers.landing_recovery <= 0.0
    }

    pub fn can_jump(&self) -> bool {
        (self.grounded || self.has_double_jump) && self.timers.jump_cooldown <= 0.0 && !self.stunned
    }

    pub fn can_dash(&self) -> bool {
        self.timers.dash <= 0.0 && self.timers.dash_cooldown <= 0.0 && !self.stunned
    }

    // ------------------------------------------------------------------
    // Resource and status operations
    // ------------------------------------------------------------------

    /// Drain posture. A break stuns, then refills posture partway.
    /// Returns true if this call broke posture.
    pub fn apply_posture_damage(&mut self, amount: f32) -> bool {
        self.posture.sub(amount);
        if self.posture.current > 0.0 {
            return false;
        }

        self.posture.current = 0.0;
        self.apply_stun(self.stats.stun_duration);
        let refill = (POSTURE_BREAK_REFILL * self.posture.max).min(self.posture.max);
        self.posture.set(refill);
        info!("{} posture broken, stunned for {:.2}s", self.name, self.stats.stun_duration);
        true
    }

    pub fn apply_stun(&mut self, duration: f32) {
        self.stunned = true;
        self.timers.stun = duration;
        self.timers.attack = 0.0;
        self.timers.attack_cooldown = STUN_ATTACK_COOLDOWN;
        self.landed_hit_this_swing = false;
        self.telegraphing = false;
        self.timers.telegraph = 0.0;
        self.velocity.x *= VELOCITY_DAMPING;
        self.animation.set_state(AnimationState::Stunned);
    }

    pub fn gain_rage(&mut self, amount: f32) {
        self.rage.add(amount);
    }

    /// Arm the parry window, overwriting one already in progress.
    pub fn trigger_parry_window(&mut self) {
        self.timers.parry = self.stats.parry_window;
    }

    /// Read-and-clear of the parry window.
    pub fn consume_parry_if_active(&mut self) -> bool {
        if self.timers.parry > 0.0 {
            self.timers.parry = 0.0;
            debug!("{} consumed parry window", self.name);
            true
        } else {
            false
        }
    }

    // ------------------------------------------------------------------
    // Actions. Each re-checks its predicate and is a no-op when refused.
    // ------------------------------------------------------------------

    pub fn start_jump(&mut self) -> bool {
        if !self.can_jump() {
            warn!("{} tried to jump while not allowed", self.name);
            return false;
        }

        if self.grounded {
            self.velocity.y = -self.stats.jump_force;
            self.grounded = false;
            self.has_double_jump = true;
        } else {
            self.has_double_jump = false;
            self.velocity.y = -DOUBLE_JUMP_FACTOR * self.stats.jump_force;
        }
        self.timers.jump_cooldown = JUMP_COOLDOWN;
        if !self.is_attacking() {
            self.animation.set_state(AnimationState::Jumping);
        }
        debug!("{} jumped (double jump left: {})", self.name, self.has_double_jump);
        true
    }

    /// Dash along `direction` (its sign is used, zero means current facing).
    pub fn start_dash(&mut self, direction: f32, events: &mut Vec<CombatEvent>) -> bool {
        if !self.can_dash() {
            warn!("{} tried to dash while not allowed", self.name);
            return false;
        }

        let dir = if direction == 0.0 {
            self.facing.sign()
        } else {
            direction.signum()
        };

        self.timers.dash = self.stats.dash_duration;
        self.timers.dash_cooldown = self.stats.dash_cooldown;
        if self.grounded {
            self.velocity.x = dir * self.stats.dash_speed;
            self.velocity.y = 0.0;
        } else {
            self.velocity.x = dir * self.stats.air_dash_speed;
            self.velocity.y *= VELOCITY_DAMPING;
        }
        self.timers.iframes = self.stats.dash_duration * DASH_IFRAME_SHARE;
        self.invulnerable = true;
        if !self.is_attacking() {
            self.animation.set_state(AnimationState::Dashing);
        }

        events.push(CombatEvent::particles(
            self.position,
            8,
            Color::srgb_u8(200, 200, 255),
        ));
        events.push(CombatEvent::CameraShake(3.0));
        debug!("{} dashed {}", self.name, if dir > 0.0 { "right" } else { "left" });
        true
    }

    /// Arm the attack windup. The swing itself starts on `release_telegraph`.
    pub fn start_telegraph(&mut self) -> bool {
        if !self.can_attack() {
            warn!("{} tried to wind up while not allowed", self.name);
            return false;
        }

        self.telegraphing = true;
        self.timers.telegraph = self.stats.telegraph_duration;
        debug!("{} telegraphing attack", self.name);
        true
    }

    /// True once an armed windup has run its course.
    pub fn telegraph_ready(&self) -> bool {
        self.telegraphing && self.timers.telegraph <= 0.0
    }

    /// Swing out of an expired windup. Only a stun (which cancels the windup)
    /// or a swing already in flight can stop it.
    pub fn release_telegraph(&mut self, events: &mut Vec<CombatEvent>) -> bool {
        if !self.telegraphing || self.stunned || self.is_attacking() {
            return false;
        }
        self.telegraphing = false;
        self.timers.telegraph = 0.0;
        self.begin_swing(events);
        true
    }

    pub fn start_attack(&mut self, events: &mut Vec<CombatEvent>) -> bool {
        if !self.can_attack() {
            warn!("{} tried to attack while not allowed", self.name);
            return false;
        }
        self.begin_swing(events);
        true
    }

    fn begin_swing(&mut self, events: &mut Vec<CombatEvent>) {
        self.combo_count = if self.timers.combo_window > 0.0 {
            self.combo_count + 1
        } else {
            1
        };
        self.timers.combo_window = self.stats.combo_window;

        let duration = self.stats.attack_duration;
        self.timers.attack = duration;
        self.timers.attack_cooldown = if self.combo_count > 2 {
            duration * COMBO_COOLDOWN_SCALE
        } else {
            duration
        };
        self.landed_hit_this_swing = false;
        self.telegraphing = false;
        self.timers.telegraph = 0.0;
        self.animation.set_state(AnimationState::Attacking);

        if !self.grounded {
            self.velocity.y *= 0.5;
        }

        let edge = Vec2::new(
            self.position.x + self.facing.sign() * self.stats.half_width,
            self.position.y - self.stats.height * 0.4,
        );
        events.push(CombatEvent::particles(edge, 6, Color::srgb_u8(255, 255, 200)));
        events.push(CombatEvent::CameraShake(2.0));
        debug!("{} attacks (combo {})", self.name, self.combo_count);
    }
}
