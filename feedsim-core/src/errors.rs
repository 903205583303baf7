/// Simulation errors.
///
/// The pipeline itself never fails: numeric inputs are clamped into their
/// documented bounds and short inputs narrow the output instead of erroring.
/// Errors only arise at the configuration boundary.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("config parse failed: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("invalid config value: {reason}")]
    InvalidConfig { reason: String },
}

pub type SimResult<T> = Result<T, SimError>;
