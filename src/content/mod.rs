//! Content domain: data-driven tuning loaded from `assets/data`.

mod loader;

pub use loader::{ContentLoadError, load_movement_tuning, parse_movement_tuning};

use bevy::prelude::*;
use std::path::Path;

const MOVEMENT_TUNING_PATH: &str = "assets/data/movement.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        // Loaded synchronously so bad tuning is rejected before the first tick.
        match load_movement_tuning(Path::new(MOVEMENT_TUNING_PATH)) {
            Ok((tuning, params)) => {
                info!(
                    "Loaded movement tuning: jump_height={}, time_to_jump_apex={}, gravity={}, jump_velocity={}",
                    tuning.jump_height, tuning.time_to_jump_apex, params.gravity, params.jump_velocity
                );
                app.insert_resource(tuning).insert_resource(params);
            }
            // MovementPlugin fills in pixel-scale defaults.
            Err(e) => error!("{}", e),
        }
    }
}
