mod combat;
mod content;
mod core;
mod movement;
mod sprites;
mod ui;

use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;

/// Simulation ticks per second in the headless runner
const TICK_RATE: f64 = 60.0;

fn main() {
    App::new()
        .add_plugins(
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
                1.0 / TICK_RATE,
            ))),
        )
        .add_plugins(LogPlugin::default())
        .insert_resource(core::RunConfig::from_env())
        .add_plugins((
            core::CorePlugin,
            content::ContentPlugin,
            combat::CombatPlugin,
            ui::UiPlugin,
        ))
        .run();
}
