//! Movement domain: control intents, arena geometry, and the physics tail
//! shared by human and AI fighters.

mod components;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{ActionInput, Arena, FighterControls};
pub use systems::{
    LANDING_SPEED_THRESHOLD, apply_controls, clamp_to_bounds, integrate, resolve_ground,
};

use crate::combat::{CombatEvent, Fighter};

/// Gravity, integration and ground contact, in that order.
pub fn physics_step(fighter: &mut Fighter, arena: &Arena, dt: f32, events: &mut Vec<CombatEvent>) {
    integrate(fighter, dt);
    resolve_ground(fighter, arena, events);
}
