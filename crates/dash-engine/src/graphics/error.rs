use std::convert::Infallible;
use std::fmt;

use crate::coords::Rect;

/// Failure reported by a [`Graphics`](super::Graphics) or
/// [`Sprite`](crate::sprite::Sprite) call.
///
/// Every variant is raised at the offending call; nothing here is retried or
/// papered over with a fallback image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphicsError {
    /// The asset store has nothing under `name`.
    ResourceNotFound { name: String },

    /// The asset exists but is not a decodable image.
    DecodeError { name: String, reason: String },

    /// A source rect is empty or reaches outside its image.
    InvalidRegion {
        rect: Rect,
        image_width: u32,
        image_height: u32,
    },

    /// A raw axis selector outside `{0 => X, 1 => Y}`.
    InvalidAxis(i32),
}

impl GraphicsError {
    pub(crate) fn not_found(name: impl Into<String>) -> Self {
        Self::ResourceNotFound { name: name.into() }
    }

    pub(crate) fn decode(name: impl Into<String>, reason: impl fmt::Display) -> Self {
        Self::DecodeError { name: name.into(), reason: reason.to_string() }
    }
}

impl fmt::Display for GraphicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResourceNotFound { name } => write!(f, "resource not found: {name:?}"),
            Self::DecodeError { name, reason } => {
                write!(f, "failed to decode image {name:?}: {reason}")
            }
            Self::InvalidRegion { rect, image_width, image_height } => write!(
                f,
                "source rect ({}, {}, {}x{}) is not inside a {image_width}x{image_height} image",
                rect.x, rect.y, rect.width, rect.height,
            ),
            Self::InvalidAxis(axis) => {
                write!(f, "invalid centering axis {axis} (expected 0 for X or 1 for Y)")
            }
        }
    }
}

impl std::error::Error for GraphicsError {}

// Lets `Axis` itself flow through `TryInto<Axis>` bounds.
impl From<Infallible> for GraphicsError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
