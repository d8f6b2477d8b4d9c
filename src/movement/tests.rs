//! Movement domain: controls, physics tail and collision tests.

use bevy::prelude::*;

use super::{
    Arena, FighterControls, apply_controls, clamp_to_bounds, integrate, physics_step,
    resolve_ground,
};
use crate::combat::{CombatEvent, Facing, Fighter};
use crate::content::FighterStats;
use crate::sprites::AnimationState;

fn fighter_at(x: f32) -> Fighter {
    Fighter::new("Tester", FighterStats::default(), Vec2::new(x, 580.0), false)
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn test_action_input_press_edge() {
    let mut controls = FighterControls::default();
    controls.jump.press();
    assert!(controls.jump.held && controls.jump.just_pressed);

    controls.jump.press();
    assert!(controls.jump.held && !controls.jump.just_pressed);

    controls.jump.press();
    controls.clear_edges();
    assert!(controls.jump.held && !controls.jump.just_pressed);

    controls.jump.release();
    assert!(!controls.jump.held);
}

#[test]
fn test_ground_movement_is_smoothed() {
    let mut fighter = fighter_at(400.0);
    let mut controls = FighterControls::default();
    controls.move_right.press();
    let mut events = Vec::new();

    apply_controls(&mut fighter, &controls, None, false, &mut events);
    assert!(approx(fighter.velocity.x, 105.0));

    apply_controls(&mut fighter, &controls, None, false, &mut events);
    assert!(approx(fighter.velocity.x, 105.0 + (420.0 - 105.0) * 0.25));
}

#[test]
fn test_air_control_is_weaker() {
    let mut fighter = fighter_at(400.0);
    fighter.grounded = false;
    let mut controls = FighterControls::default();
    controls.move_left.press();

    apply_controls(&mut fighter, &controls, None, false, &mut Vec::new());
    assert!(approx(fighter.velocity.x, -42.0));
}

#[test]
fn test_opposite_directions_cancel() {
    let mut controls = FighterControls::default();
    controls.move_left.press();
    controls.move_right.press();
    assert_eq!(controls.horizontal(), 0.0);
}

#[test]
fn test_movement_suppressed_while_attacking() {
    let mut fighter = fighter_at(400.0);
    fighter.velocity.x = 100.0;
    fighter.start_attack(&mut Vec::new());

    let mut controls = FighterControls::default();
    controls.move_right.press();
    apply_controls(&mut fighter, &controls, None, false, &mut Vec::new());
    assert!(approx(fighter.velocity.x, 80.0));
}

#[test]
fn test_dash_velocity_is_frozen() {
    let mut fighter = fighter_at(400.0);
    fighter.start_dash(1.0, &mut Vec::new());

    let mut controls = FighterControls::default();
    controls.move_left.press();
    apply_controls(&mut fighter, &controls, None, false, &mut Vec::new());
    assert_eq!(fighter.velocity.x, 1100.0);
}

#[test]
fn test_ground_jump_then_double_jump() {
    let mut fighter = fighter_at(400.0);
    assert!(fighter.start_jump());
    assert_eq!(fighter.velocity.y, -750.0);
    assert!(!fighter.grounded);
    assert!(fighter.has_double_jump);
    assert!(fighter.animation.is(AnimationState::Jumping));

    // Jump cooldown still running
    assert!(!fighter.can_jump());
    fighter.advance_timers(0.11);

    assert!(fighter.start_jump());
    assert!(approx(fighter.velocity.y, -0.85 * 750.0));
    assert!(!fighter.has_double_jump);

    fighter.advance_timers(0.11);
    assert!(!fighter.can_jump());
    assert!(!fighter.start_jump());
}

#[test]
fn test_stunned_fighter_cannot_jump_or_dash() {
    let mut fighter = fighter_at(400.0);
    fighter.apply_stun(0.5);
    assert!(!fighter.can_jump());
    assert!(!fighter.can_dash());
    assert!(!fighter.start_dash(1.0, &mut Vec::new()));
    assert_eq!(fighter.timers.dash, 0.0);
}

#[test]
fn test_dash_speeds_and_iframes() {
    let mut grounded = fighter_at(400.0);
    let mut events = Vec::new();
    assert!(grounded.start_dash(-1.0, &mut events));
    assert_eq!(grounded.velocity.x, -1100.0);
    assert!(approx(grounded.timers.iframes, 0.16 * 0.7));
    assert!(grounded.invulnerable);
    assert!(grounded.animation.is(AnimationState::Dashing));
    assert!(events.contains(&CombatEvent::CameraShake(3.0)));

    let mut airborne = fighter_at(400.0);
    airborne.grounded = false;
    airborne.velocity.y = -400.0;
    airborne.start_dash(1.0, &mut Vec::new());
    assert_eq!(airborne.velocity.x, 950.0);
    assert!(approx(airborne.velocity.y, -120.0));
}

#[test]
fn test_dash_direction_priority() {
    let mut controls = FighterControls::default();
    controls.dash.press();

    // Held direction wins
    let mut fighter = fighter_at(400.0);
    let mut held = controls.clone();
    held.move_left.press();
    apply_controls(&mut fighter, &held, Some(800.0), false, &mut Vec::new());
    assert!(fighter.velocity.x < 0.0);

    // Then the opponent
    let mut fighter = fighter_at(400.0);
    fighter.facing = Facing::Right;
    apply_controls(&mut fighter, &controls, Some(100.0), false, &mut Vec::new());
    assert!(fighter.velocity.x < 0.0);

    // Then facing
    let mut fighter = fighter_at(400.0);
    fighter.facing = Facing::Left;
    apply_controls(&mut fighter, &controls, None, false, &mut Vec::new());
    assert!(fighter.velocity.x < 0.0);
}

#[test]
fn test_block_mirrors_input_and_press_arms_parry() {
    let mut fighter = fighter_at(400.0);
    let mut controls = FighterControls::default();
    controls.block.press();

    apply_controls(&mut fighter, &controls, None, false, &mut Vec::new());
    assert!(fighter.blocking);
    assert!(approx(fighter.timers.parry, 0.12));
    assert!(fighter.animation.is(AnimationState::Blocking));

    // Still held, no new edge: window is not re-armed
    controls.clear_edges();
    fighter.advance_timers(0.05);
    apply_controls(&mut fighter, &controls, None, false, &mut Vec::new());
    assert!(fighter.blocking);
    assert!(approx(fighter.timers.parry, 0.07));

    controls.block.release();
    apply_controls(&mut fighter, &controls, None, false, &mut Vec::new());
    assert!(!fighter.blocking);
}

#[test]
fn test_block_press_arms_parry_while_stunned() {
    let mut fighter = fighter_at(400.0);
    fighter.apply_stun(0.5);
    let mut controls = FighterControls::default();
    controls.block.press();

    apply_controls(&mut fighter, &controls, None, false, &mut Vec::new());
    assert!(fighter.blocking);
    assert!(approx(fighter.timers.parry, 0.12));
    assert!(fighter.animation.is(AnimationState::Stunned));
}

#[test]
fn test_windup_attack_goes_through_telegraph() {
    let mut fighter = fighter_at(400.0);
    let mut controls = FighterControls::default();
    controls.attack.press();
    let mut events = Vec::new();

    apply_controls(&mut fighter, &controls, None, true, &mut events);
    assert!(fighter.telegraphing);
    assert!(!fighter.is_attacking());

    controls.clear_edges();
    fighter.advance_timers(0.36);
    apply_controls(&mut fighter, &controls, None, true, &mut events);
    assert!(!fighter.telegraphing);
    assert!(fighter.is_attacking());
}

#[test]
fn test_gravity_only_when_airborne() {
    let mut fighter = fighter_at(400.0);
    integrate(&mut fighter, 0.1);
    assert_eq!(fighter.velocity.y, 0.0);
    assert_eq!(fighter.position.y, 580.0);

    fighter.grounded = false;
    fighter.velocity = Vec2::new(100.0, -500.0);
    integrate(&mut fighter, 0.1);
    assert!(approx(fighter.velocity.y, -220.0));
    assert!(approx(fighter.position.x, 410.0));
    assert!(approx(fighter.position.y, 580.0 - 22.0));
}

#[test]
fn test_jump_apex_switches_to_falling() {
    let mut fighter = fighter_at(400.0);
    fighter.start_jump();
    fighter.velocity.y = -10.0;
    integrate(&mut fighter, 1.0 / 60.0);
    assert!(fighter.animation.is(AnimationState::Falling));
}

#[test]
fn test_hard_landing_locks_out_briefly() {
    let arena = Arena::default();
    let mut fighter = fighter_at(400.0);
    fighter.grounded = false;
    fighter.position.y = 590.0;
    fighter.velocity.y = 400.0;
    let mut events = Vec::new();

    assert!(resolve_ground(&mut fighter, &arena, &mut events));
    assert!(fighter.grounded);
    assert_eq!(fighter.position.y, 580.0);
    assert_eq!(fighter.velocity.y, 0.0);
    assert!(approx(fighter.timers.landing_recovery, 0.1));
    assert!(fighter.animation.is(AnimationState::Landing));
    assert!(!fighter.can_attack());
    assert_eq!(events.len(), 1);
}

#[test]
fn test_soft_touchdown_regrounds_quietly() {
    let arena = Arena::default();
    let mut fighter = fighter_at(400.0);
    fighter.grounded = false;
    fighter.position.y = 580.5;
    fighter.velocity.y = 60.0;
    let mut events = Vec::new();

    assert!(resolve_ground(&mut fighter, &arena, &mut events));
    assert!(fighter.grounded);
    assert_eq!(fighter.timers.landing_recovery, 0.0);
    assert!(events.is_empty());
}

#[test]
fn test_rising_fighter_passes_ground_line() {
    let arena = Arena::default();
    let mut fighter = fighter_at(400.0);
    fighter.grounded = false;
    fighter.velocity.y = -200.0;
    assert!(!resolve_ground(&mut fighter, &arena, &mut Vec::new()));
    assert!(!fighter.grounded);
}

#[test]
fn test_full_jump_arc_lands() {
    let arena = Arena::default();
    let mut fighter = fighter_at(400.0);
    fighter.start_jump();

    let mut events = Vec::new();
    let mut ticks = 0;
    while !fighter.grounded && ticks < 600 {
        physics_step(&mut fighter, &arena, 1.0 / 60.0, &mut events);
        ticks += 1;
    }

    assert!(fighter.grounded);
    assert_eq!(fighter.position.y, 580.0);
    assert!(fighter.timers.landing_recovery > 0.0);
}

#[test]
fn test_bounds_clamp() {
    let arena = Arena::default();
    let mut fighter = fighter_at(40.0);
    clamp_to_bounds(&mut fighter, &arena);
    assert_eq!(fighter.position.x, 80.0);

    fighter.position.x = 1500.0;
    clamp_to_bounds(&mut fighter, &arena);
    assert_eq!(fighter.position.x, 1200.0);
}
