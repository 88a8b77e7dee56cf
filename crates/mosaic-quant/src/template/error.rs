use std::fmt;

/// Error type for template generation.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateError {
    /// A tile count of zero was requested.
    ZeroTiles,
    /// More tiles were requested than the long side has pixels.
    TileTooSmall {
        /// Requested tiles along the long side
        tiles: u32,
        /// Long side of the image in pixels
        long_side: u32,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::ZeroTiles => write!(f, "tile count must be at least 1"),
            TemplateError::TileTooSmall { tiles, long_side } => write!(
                f,
                "{} tiles do not fit on a long side of {} pixels",
                tiles, long_side
            ),
        }
    }
}

impl std::error::Error for TemplateError {}
