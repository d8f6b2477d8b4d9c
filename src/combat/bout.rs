//! Combat domain: the bout, which owns both fighters and runs the tick.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::combat::ai::{AiBrain, drive_ai};
use crate::combat::components::Fighter;
use crate::combat::events::{BoutOutcome, CombatEvent};
use crate::combat::hits::resolve_hit;
use crate::content::{AiProfile, ContentRegistry};
use crate::movement::{Arena, FighterControls, apply_controls, clamp_to_bounds, physics_step};

/// Per-tick easing of the time scale back toward normal speed
pub const TIME_SCALE_RECOVERY: f32 = 0.08;
/// Slowest the simulation may run
pub const MIN_TIME_SCALE: f32 = 0.3;

/// Who drives a fighter slot.
#[derive(Debug, Clone)]
pub enum Controller {
    /// Read from `FighterControls`. With `windup`, attacks telegraph first.
    Human { windup: bool },
    Ai(AiBrain),
}

impl Controller {
    pub fn ai(profile: AiProfile) -> Self {
        Controller::Ai(AiBrain::new(profile))
    }

    pub fn is_ai(&self) -> bool {
        matches!(self, Controller::Ai(_))
    }
}

/// Slow-motion state. The factor scales simulation dt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    pub factor: f32,
    pub timer: f32,
}

impl Default for TimeScale {
    fn default() -> Self {
        Self {
            factor: 1.0,
            timer: 0.0,
        }
    }
}

impl TimeScale {
    /// Factor is clamped to `[MIN_TIME_SCALE, 1]`. A shorter trigger never
    /// cuts a running slowdown short.
    pub fn trigger(&mut self, factor: f32, duration: f32) {
        self.factor = factor.clamp(MIN_TIME_SCALE, 1.0);
        self.timer = self.timer.max(duration);
    }

    /// Ease back toward 1 while the timer runs, snap to 1 when it expires.
    pub fn recover(&mut self, real_dt: f32) {
        if self.timer <= 0.0 {
            return;
        }
        self.timer -= real_dt;
        if self.timer <= 0.0 {
            self.timer = 0.0;
            self.factor = 1.0;
        } else {
            self.factor += (1.0 - self.factor) * TIME_SCALE_RECOVERY;
        }
    }
}

/// Both fighters as `(index, other)` mutable borrows.
fn pair_mut(fighters: &mut [Fighter; 2], index: usize) -> (&mut Fighter, &mut Fighter) {
    let [first, second] = fighters;
    if index == 0 {
        (first, second)
    } else {
        (second, first)
    }
}

/// A two-fighter bout. Slot 0 is the home side for victory and defeat.
#[derive(Resource, Debug, Clone)]
pub struct Bout {
    pub fighters: [Fighter; 2],
    pub controllers: [Controller; 2],
    pub arena: Arena,
    pub rng: ChaCha8Rng,
    pub time_scale: TimeScale,
    pub paused: bool,
    pub outcome: Option<BoutOutcome>,
    /// Simulation seconds elapsed
    pub elapsed: f32,
    initial: [Fighter; 2],
}

impl Bout {
    pub fn new(
        fighters: [Fighter; 2],
        controllers: [Controller; 2],
        arena: Arena,
        seed: u64,
    ) -> Self {
        Self {
            initial: fighters.clone(),
            fighters,
            controllers,
            arena,
            rng: ChaCha8Rng::seed_from_u64(seed),
            time_scale: TimeScale::default(),
            paused: false,
            outcome: None,
            elapsed: 0.0,
        }
    }

    /// Build a bout from registry presets: a character in slot 0 against an
    /// enemy in slot 1. Returns `None` if either id is unknown.
    pub fn from_registry(
        registry: &ContentRegistry,
        character_id: &str,
        enemy_id: &str,
        home: Controller,
        seed: u64,
    ) -> Option<Self> {
        let character = registry.character(character_id)?;
        let enemy = registry.enemy(enemy_id)?;
        let def = &registry.arena;
        let arena = Arena::from(def);

        let fighters = [
            Fighter::new(
                character.name.clone(),
                character.stats.clone(),
                Vec2::new(def.spawn_left_x, arena.ground_y),
                home.is_ai(),
            ),
            Fighter::new(
                enemy.name.clone(),
                enemy.stats.clone(),
                Vec2::new(def.spawn_right_x, arena.ground_y),
                true,
            ),
        ];
        let controllers = [home, Controller::ai(enemy.ai.clone())];
        Some(Self::new(fighters, controllers, arena, seed))
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        info!("Bout {}", if self.paused { "paused" } else { "resumed" });
    }

    /// Put both fighters back to their starting state. The rng keeps running.
    pub fn reset(&mut self) {
        self.fighters = self.initial.clone();
        for controller in &mut self.controllers {
            if let Controller::Ai(brain) = controller {
                brain.reset();
            }
        }
        self.time_scale = TimeScale::default();
        self.paused = false;
        self.outcome = None;
        self.elapsed = 0.0;
        info!("Bout reset");
    }

    /// Each fighter turns toward the other.
    fn update_facing(&mut self) {
        let [home, away] = &mut self.fighters;
        home.face_toward(away.position.x);
        away.facing = home.facing.opposite();
    }

    /// Advance the bout by `real_dt` wall seconds (scaled by slow motion).
    /// Returns everything the tick emitted; empty while paused or finished.
    pub fn tick(&mut self, real_dt: f32, controls: &[FighterControls; 2]) -> Vec<CombatEvent> {
        let mut events = Vec::new();
        if self.paused || self.outcome.is_some() {
            return events;
        }

        self.time_scale.recover(real_dt.max(0.0));
        let dt = real_dt.max(0.0) * self.time_scale.factor;
        self.elapsed += dt;

        self.update_facing();

        for index in 0..2 {
            let (fighter, other) = pair_mut(&mut self.fighters, index);
            match &mut self.controllers[index] {
                Controller::Human { windup } => {
                    apply_controls(
                        fighter,
                        &controls[index],
                        Some(other.position.x),
                        *windup,
                        &mut events,
                    );
                    fighter.advance_timers(dt);
                }
                // AI reads this tick's timers
                Controller::Ai(brain) => {
                    fighter.advance_timers(dt);
                    drive_ai(fighter, brain, other, &mut self.rng, dt, &mut events);
                }
            }
            physics_step(fighter, &self.arena, dt, &mut events);
        }

        {
            let [home, away] = &mut self.fighters;
            resolve_hit(home, away, &mut events);
            resolve_hit(away, home, &mut events);
        }

        for fighter in &mut self.fighters {
            clamp_to_bounds(fighter, &self.arena);
        }

        self.check_outcome();

        for event in &events {
            if let CombatEvent::SlowMotion { factor, duration } = event {
                self.time_scale.trigger(*factor, *duration);
            }
        }

        events
    }

    fn check_outcome(&mut self) {
        let outcome = if self.fighters[0].is_defeated() {
            BoutOutcome::Defeat
        } else if self.fighters[1].is_defeated() {
            BoutOutcome::Victory
        } else {
            return;
        };

        info!(
            "Bout over after {:.1}s: {:?} ({} wins)",
            self.elapsed,
            outcome,
            self.winner_name(outcome)
        );
        self.outcome = Some(outcome);
    }

    pub fn winner_name(&self, outcome: BoutOutcome) -> &str {
        match outcome {
            BoutOutcome::Victory => &self.fighters[0].name,
            BoutOutcome::Defeat => &self.fighters[1].name,
        }
    }
}
