//! Combat domain: events emitted by a tick for the presentation side.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// One notification from the simulation. Produced during a tick, handed to
/// the caller afterwards; the simulation keeps no queue of its own.
#[derive(Debug, Clone, PartialEq)]
pub enum CombatEvent {
    ParticleBurst {
        position: Vec2,
        count: u32,
        color: Color,
    },
    CameraShake(f32),
    SlowMotion {
        factor: f32,
        duration: f32,
    },
    FeedbackText {
        message: String,
        duration: f32,
    },
    DamageDealt {
        position: Vec2,
        amount: f32,
        is_critical: bool,
    },
}

impl CombatEvent {
    pub fn particles(position: Vec2, count: u32, color: Color) -> Self {
        Self::ParticleBurst {
            position,
            count,
            color,
        }
    }

    pub fn feedback(message: impl Into<String>, duration: f32) -> Self {
        Self::FeedbackText {
            message: message.into(),
            duration,
        }
    }
}

/// Bevy-side wrapper so sinks can read combat events with a `MessageReader`.
#[derive(Debug, Clone)]
pub struct CombatEventMessage(pub CombatEvent);

impl Message for CombatEventMessage {}

/// Result of a finished bout, seen from the home fighter (slot 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoutOutcome {
    Victory,
    Defeat,
}

/// Event emitted once when a bout reaches its outcome
#[derive(Debug)]
pub struct BoutEndedEvent {
    pub outcome: BoutOutcome,
    pub winner: String,
}

impl Message for BoutEndedEvent {}
