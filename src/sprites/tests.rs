//! Sprites domain: animation track transitions.

use super::{AnimationCues, AnimationState, AnimationTrack};

fn cues() -> AnimationCues {
    AnimationCues {
        facing: 1.0,
        grounded: true,
        ..Default::default()
    }
}

#[test]
fn test_set_state_resets_timer_only_on_change() {
    let mut track = AnimationTrack::default();
    track.set_state(AnimationState::Blocking);
    track.advance(0.2);

    track.set_state(AnimationState::Blocking);
    assert!((track.timer - 0.2).abs() < 1e-6);

    track.set_state(AnimationState::Idle);
    assert_eq!(track.timer, 0.0);
}

#[test]
fn test_hit_reaction_settles_to_idle() {
    let mut track = AnimationTrack::default();
    track.set_state(AnimationState::HitReaction);

    track.advance(0.1);
    track.update_offset(&cues());
    assert!(track.is(AnimationState::HitReaction));

    track.advance(0.25);
    track.update_offset(&cues());
    assert!(track.is(AnimationState::Idle));
}

#[test]
fn test_blocking_ends_when_guard_drops() {
    let mut track = AnimationTrack::default();
    track.set_state(AnimationState::Blocking);

    let mut guarding = cues();
    guarding.blocking = true;
    track.update_offset(&guarding);
    assert!(track.is(AnimationState::Blocking));
    assert!(track.offset.x < 0.0);

    track.update_offset(&cues());
    assert!(track.is(AnimationState::Idle));
}

#[test]
fn test_walking_follows_horizontal_speed() {
    let mut track = AnimationTrack::default();

    let mut moving = cues();
    moving.speed_x = 200.0;
    track.update_offset(&moving);
    assert!(track.is(AnimationState::Walking));

    moving.speed_x = 5.0;
    track.update_offset(&moving);
    assert!(track.is(AnimationState::Idle));
}

#[test]
fn test_landing_settles_after_its_window() {
    let mut track = AnimationTrack::default();
    track.set_state(AnimationState::Landing);
    track.advance(0.21);
    track.update_offset(&cues());
    assert!(track.is(AnimationState::Idle));
}
