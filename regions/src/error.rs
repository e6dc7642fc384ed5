use thiserror::Error;

/// Errors raised by the region picker components.
#[derive(Debug, Error)]
pub enum RegionsError {
    /// A caller asked for a region id that is not part of the list.
    #[error("unknown region id {0}")]
    UnknownRegion(u32),
    #[error("duplicate region id {0}")]
    DuplicateRegion(u32),
    #[error("region list is empty")]
    EmptyRegionList,
    #[error("unknown indicator variant '{0}' (expected 'radiobutton' or 'checkbox')")]
    UnknownVariant(String),
    #[error("unknown indicator style '{0}' (expected 'outlined' or 'filled')")]
    UnknownStyle(String),
    #[error("unknown mount behavior '{0}' (expected 'animate' or 'snap')")]
    UnknownMount(String),
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RegionsError>;
