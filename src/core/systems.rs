//! Core domain: bout setup and shutdown for the exhibition runner.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::{Bout, BoutEndedEvent, Controller};
use crate::content::ContentRegistry;
use crate::core::RunConfig;

/// Build the configured matchup. Both slots are AI-driven since nothing
/// feeds controls in headless mode.
pub(crate) fn start_exhibition_bout(
    mut commands: Commands,
    config: Res<RunConfig>,
    registry: Res<ContentRegistry>,
) {
    let home = Controller::ai(default());
    let Some(bout) = Bout::from_registry(
        &registry,
        &config.character_id,
        &config.enemy_id,
        home,
        config.seed,
    ) else {
        error!(
            "Cannot build bout: unknown character '{}' or enemy '{}'",
            config.character_id, config.enemy_id
        );
        return;
    };

    info!(
        "Bout start: {} vs {} (seed {})",
        bout.fighters[0].name, bout.fighters[1].name, config.seed
    );
    commands.insert_resource(bout);
}

pub(crate) fn exit_on_outcome(
    config: Res<RunConfig>,
    mut ended_events: MessageReader<BoutEndedEvent>,
    mut exit: MessageWriter<AppExit>,
) {
    if ended_events.read().next().is_some() && config.exit_on_outcome {
        exit.write(AppExit::Success);
    }
}

/// Stop bouts that never finish, and stop the app if no bout could be built.
pub(crate) fn enforce_time_limit(
    config: Res<RunConfig>,
    bout: Option<Res<Bout>>,
    mut exit: MessageWriter<AppExit>,
) {
    if !config.exit_on_outcome {
        return;
    }

    match bout {
        None => {
            exit.write(AppExit::error());
        }
        Some(bout) if bout.outcome.is_none() && bout.elapsed > config.time_limit => {
            warn!(
                "Bout hit the {:.0}s limit: {} {:.0} hp, {} {:.0} hp",
                config.time_limit,
                bout.fighters[0].name,
                bout.fighters[0].health.current,
                bout.fighters[1].name,
                bout.fighters[1].health.current,
            );
            exit.write(AppExit::Success);
        }
        Some(_) => {}
    }
}
