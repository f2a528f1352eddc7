use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("transformed name for {original:?} grew to {transformed:?}, more than twice its length")]
    Runaway {
        original: String,
        transformed: String,
    },
}

/// Conditions that stop a walk outright. Everything else is recorded in the
/// report and the walk moves on.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("could not resolve starting directory {}", path.display())]
    StartDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not list files in {}", path.display())]
    ListRoot {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("refusing to continue after transforming {}", path.display())]
    Transform {
        path: PathBuf,
        #[source]
        source: TransformError,
    },
}
