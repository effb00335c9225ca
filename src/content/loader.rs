//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::movement::{MotionParams, MovementTuning, TuningError};

/// Error type for content loading failures.
#[derive(Debug, Error)]
pub enum ContentLoadError {
    #[error("Failed to load {file}: IO error: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to load {file}: Parse error: {source}")]
    Parse {
        file: String,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("Failed to load {file}: {source}")]
    Invalid {
        file: String,
        #[source]
        source: TuningError,
    },
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse movement tuning from RON text and derive its motion parameters.
/// Invalid tuning is rejected here. `file` only labels errors.
pub fn parse_movement_tuning(
    file: &str,
    contents: &str,
) -> Result<(MovementTuning, MotionParams), ContentLoadError> {
    let tuning: MovementTuning = ron_options()
        .from_str(contents)
        .map_err(|source| ContentLoadError::Parse {
            file: file.to_string(),
            source,
        })?;

    let params =
        MotionParams::from_tuning(&tuning).map_err(|source| ContentLoadError::Invalid {
            file: file.to_string(),
            source,
        })?;

    Ok((tuning, params))
}

/// Load movement tuning from a RON file on disk.
pub fn load_movement_tuning(
    path: &Path,
) -> Result<(MovementTuning, MotionParams), ContentLoadError> {
    let file = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|source| ContentLoadError::Io {
        file: file.clone(),
        source,
    })?;

    parse_movement_tuning(&file, &contents)
}
