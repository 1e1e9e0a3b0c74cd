//! Crate-level error types.

use std::fmt;

use crate::gpu::RenderContextError;
use crate::scene::EntityKind;

/// Errors produced by the glint crate.
///
/// The per-frame pipeline itself is total — these all arise at
/// initialization/startup or in the windowing shell.
#[derive(Debug)]
pub enum GlintError {
    /// GPU context initialization failure.
    Gpu(RenderContextError),
    /// Scene construction requested more entities than the shader-side
    /// array for that kind can hold.
    SceneCapacity {
        /// Which entity kind overflowed.
        kind: EntityKind,
        /// Number of entities requested.
        requested: usize,
        /// The kind's compiled-in maximum.
        max: usize,
    },
    /// The embedded shader's compiled-in constants disagree with the
    /// crate's. Proceeding would write out of bounds in the uniform
    /// arrays, so this is fatal at startup.
    ShaderContract(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for GlintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::SceneCapacity {
                kind,
                requested,
                max,
            } => {
                write!(
                    f,
                    "scene capacity exceeded: {requested} {kind} requested, \
                     shader arrays hold {max}"
                )
            }
            Self::ShaderContract(msg) => {
                write!(f, "shader contract mismatch: {msg}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for GlintError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RenderContextError> for GlintError {
    fn from(e: RenderContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<std::io::Error> for GlintError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
