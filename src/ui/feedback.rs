//! UI domain: sinks for combat events (shake, banner text, damage numbers).

use std::collections::VecDeque;

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::{CombatEvent, CombatEventMessage};

/// Shake decays this much per second
pub const SHAKE_DECAY: f32 = 20.0;
pub const DAMAGE_NUMBER_LIFETIME: f32 = 1.2;
/// Pixels per second at spawn, easing out over the lifetime
pub const DAMAGE_NUMBER_RISE: f32 = 60.0;
pub const MAX_DAMAGE_NUMBERS: usize = 50;

/// Accumulated screen shake.
#[derive(Resource, Debug, Default)]
pub struct CameraShake {
    pub amount: f32,
}

impl CameraShake {
    pub fn add(&mut self, amount: f32) {
        self.amount = (self.amount + amount).max(0.0);
    }

    pub fn decay(&mut self, dt: f32) {
        self.amount = (self.amount - SHAKE_DECAY * dt).max(0.0);
    }
}

/// Latest feedback line ("HIT", "BLOCKED", "PARRY!") and its remaining time.
#[derive(Resource, Debug, Default)]
pub struct FeedbackBanner {
    pub message: Option<String>,
    pub remaining: f32,
}

impl FeedbackBanner {
    pub fn show(&mut self, message: &str, duration: f32) {
        self.message = Some(message.to_string());
        self.remaining = duration;
    }

    pub fn tick(&mut self, dt: f32) {
        if self.message.is_none() {
            return;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.message = None;
            self.remaining = 0.0;
        }
    }
}

#[derive(Debug, Clone)]
pub struct DamageNumber {
    pub position: Vec2,
    pub amount: f32,
    pub is_critical: bool,
    pub age: f32,
}

impl DamageNumber {
    pub fn is_expired(&self) -> bool {
        self.age >= DAMAGE_NUMBER_LIFETIME
    }

    /// Fades out linearly over the lifetime.
    pub fn alpha(&self) -> f32 {
        (1.0 - self.age / DAMAGE_NUMBER_LIFETIME).clamp(0.0, 1.0)
    }
}

/// Floating damage numbers. Oldest are dropped past the cap.
#[derive(Resource, Debug, Default)]
pub struct DamageNumbers {
    pub numbers: VecDeque<DamageNumber>,
}

impl DamageNumbers {
    pub fn spawn(&mut self, position: Vec2, amount: f32, is_critical: bool) {
        if self.numbers.len() >= MAX_DAMAGE_NUMBERS {
            self.numbers.pop_front();
        }
        self.numbers.push_back(DamageNumber {
            position,
            amount,
            is_critical,
            age: 0.0,
        });
    }

    pub fn tick(&mut self, dt: f32) {
        for number in &mut self.numbers {
            let ease = 1.0 - (number.age / DAMAGE_NUMBER_LIFETIME).clamp(0.0, 1.0);
            number.position.y -= DAMAGE_NUMBER_RISE * ease * dt;
            number.age += dt;
        }
        self.numbers.retain(|n| !n.is_expired());
    }
}

/// Hand every combat event to the sink that owns it.
pub(crate) fn collect_combat_events(
    mut combat_events: MessageReader<CombatEventMessage>,
    mut shake: ResMut<CameraShake>,
    mut banner: ResMut<FeedbackBanner>,
    mut numbers: ResMut<DamageNumbers>,
) {
    for CombatEventMessage(event) in combat_events.read() {
        match event {
            CombatEvent::CameraShake(amount) => shake.add(*amount),
            CombatEvent::FeedbackText { message, duration } => banner.show(message, *duration),
            CombatEvent::DamageDealt {
                position,
                amount,
                is_critical,
            } => numbers.spawn(*position, *amount, *is_critical),
            CombatEvent::ParticleBurst { .. } | CombatEvent::SlowMotion { .. } => {}
        }
    }
}

pub(crate) fn decay_feedback(
    time: Res<Time>,
    mut shake: ResMut<CameraShake>,
    mut banner: ResMut<FeedbackBanner>,
    mut numbers: ResMut<DamageNumbers>,
) {
    let dt = time.delta_secs();
    shake.decay(dt);
    banner.tick(dt);
    numbers.tick(dt);
}
