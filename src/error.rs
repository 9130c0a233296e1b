//! Typed error types for icon requests.

use par_icon_legend::LegendError;
use thiserror::Error;

/// Errors surfaced while building or rendering an icon request.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The icon key (or an inline tag's key) could not be resolved.
    #[error(transparent)]
    Legend(#[from] LegendError),

    /// The host rendering context reported a failure.
    #[error("Host rendering failed: {0}")]
    Host(String),
}
