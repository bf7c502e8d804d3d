/// Convenience result type used across infinizoom.
pub type ZoomResult<T> = Result<T, ZoomError>;

/// Steps of a zoom render run, used to report where a run failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunStage {
    /// Clearing the segments directory and creating the renders directory.
    Init,
    /// Rendering one segment per input frame.
    Render,
    /// Writing the ordered segment manifest.
    Manifest,
    /// Concatenating segments into the final video.
    Concat,
}

impl std::fmt::Display for RunStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Init => "init",
            Self::Render => "render",
            Self::Manifest => "manifest",
            Self::Concat => "concat",
        };
        f.write_str(name)
    }
}

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum ZoomError {
    /// Missing or invalid arguments. Raised before any I/O happens.
    #[error("usage error: {0}")]
    Usage(String),

    /// File open/create/remove failures.
    #[error("io error: {0}")]
    Io(String),

    /// Image extension is not one of png, jpg, jpeg or webp.
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// Raster decode failures.
    #[error("decode error: {0}")]
    Decode(String),

    /// Raster encode failures.
    #[error("encode error: {0}")]
    Encode(String),

    /// The external encoder could not be spawned or exited unsuccessfully.
    #[error("external tool error: {0}")]
    ExternalTool(String),

    /// Clearing or creating working directories failed.
    #[error("directory error: {0}")]
    Directory(String),

    /// A render run step failed.
    #[error("{stage} step failed for {subject}: {source}")]
    Stage {
        /// Step that was executing.
        stage: RunStage,
        /// Frame, segment or file the step was working on.
        subject: String,
        /// Underlying failure.
        #[source]
        source: Box<ZoomError>,
    },

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ZoomError {
    /// Build a [`ZoomError::Usage`] value.
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    /// Build a [`ZoomError::Io`] value.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Build a [`ZoomError::UnsupportedFormat`] value.
    pub fn unsupported_format(msg: impl Into<String>) -> Self {
        Self::UnsupportedFormat(msg.into())
    }

    /// Build a [`ZoomError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`ZoomError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`ZoomError::ExternalTool`] value.
    pub fn external_tool(msg: impl Into<String>) -> Self {
        Self::ExternalTool(msg.into())
    }

    /// Build a [`ZoomError::Directory`] value.
    pub fn directory(msg: impl Into<String>) -> Self {
        Self::Directory(msg.into())
    }

    /// Attribute this error to a run step working on `subject`.
    pub fn at(self, stage: RunStage, subject: impl Into<String>) -> Self {
        Self::Stage {
            stage,
            subject: subject.into(),
            source: Box::new(self),
        }
    }

    /// Run step this error was attributed to, if any.
    pub fn stage(&self) -> Option<RunStage> {
        match self {
            Self::Stage { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
