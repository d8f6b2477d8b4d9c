//! UI domain: combat feedback sink tests.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use super::{CameraShake, DamageNumbers, FeedbackBanner, UiPlugin};
use crate::combat::{CombatEvent, CombatEventMessage};

#[test]
fn test_camera_shake_accumulates_and_decays() {
    let mut shake = CameraShake::default();
    shake.add(6.0);
    shake.add(2.0);
    assert_eq!(shake.amount, 8.0);

    shake.decay(0.1);
    assert!((shake.amount - 6.0).abs() < 1e-4);

    shake.decay(1.0);
    assert_eq!(shake.amount, 0.0);
}

#[test]
fn test_feedback_banner_expires() {
    let mut banner = FeedbackBanner::default();
    banner.show("BLOCKED", 0.5);
    banner.tick(0.3);
    assert_eq!(banner.message.as_deref(), Some("BLOCKED"));

    banner.show("PARRY!", 0.8);
    banner.tick(0.5);
    assert_eq!(banner.message.as_deref(), Some("PARRY!"));

    banner.tick(0.31);
    assert!(banner.message.is_none());
}

#[test]
fn test_damage_numbers_rise_and_expire() {
    let mut numbers = DamageNumbers::default();
    numbers.spawn(Vec2::new(100.0, 500.0), 12.0, false);

    numbers.tick(0.5);
    let number = &numbers.numbers[0];
    assert!(number.position.y < 500.0);
    assert!(number.alpha() < 1.0);

    numbers.tick(0.8);
    assert!(numbers.numbers.is_empty());
}

#[test]
fn test_damage_numbers_cap_drops_oldest() {
    let mut numbers = DamageNumbers::default();
    for i in 0..55 {
        numbers.spawn(Vec2::ZERO, i as f32, i % 2 == 0);
    }
    assert_eq!(numbers.numbers.len(), 50);
    assert_eq!(numbers.numbers[0].amount, 5.0);
    assert!(!numbers.numbers[0].is_critical);
}

fn emit_feedback(mut writer: MessageWriter<CombatEventMessage>) {
    writer.write(CombatEventMessage(CombatEvent::CameraShake(6.0)));
    writer.write(CombatEventMessage(CombatEvent::feedback("HIT", 0.3)));
    writer.write(CombatEventMessage(CombatEvent::DamageDealt {
        position: Vec2::new(640.0, 492.0),
        amount: 12.0,
        is_critical: true,
    }));
}

#[test]
fn test_plugin_routes_events_to_sinks() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_message::<CombatEventMessage>()
        .add_plugins(UiPlugin)
        .add_systems(Update, emit_feedback);

    app.update();

    let world = app.world();
    assert!(world.resource::<CameraShake>().amount >= 6.0);
    assert_eq!(
        world.resource::<FeedbackBanner>().message.as_deref(),
        Some("HIT")
    );
    let numbers = world.resource::<DamageNumbers>();
    assert_eq!(numbers.numbers.len(), 1);
    assert!(numbers.numbers[0].is_critical);
}
