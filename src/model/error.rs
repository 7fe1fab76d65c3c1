use thiserror::Error;

/// Errors surfaced by the simulation engine. All of these are recoverable:
/// the shell decides whether to reprompt or abort, the engine never exits.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("seed density {0} is outside [0.0, 1.0]")]
    InvalidDensity(f64),

    #[error("unknown preset '{0}'")]
    UnknownPreset(String),

    #[error("grid {height}x{width} has no interior cells")]
    DegenerateGrid { height: u16, width: u16 },
}
