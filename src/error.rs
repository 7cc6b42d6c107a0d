//! Errors that can happen while grabbing a comic.

use std::{io, path::PathBuf};
use thiserror::Error;

use crate::extract::ExtractError;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum GrabError {
    /// The expected HTML structure was not found in the page.
    #[error("couldn't find the {fragment} in {url}")]
    MissingFragment { fragment: &'static str, url: String },
    /// The chapter list had a different number of ids and names.
    #[error("found {ids} chapter ids but {names} chapter names in {url}")]
    CountMismatch { ids: usize, names: usize, url: String },
    #[error("directory `{}` already exists", .path.display())]
    DirectoryExists { path: PathBuf },
    #[error("filesystem operation on `{}` failed", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Network(#[from] reqwest::Error),
    #[error(transparent)]
    MalformedUrl(#[from] url::ParseError),
}

impl GrabError {
    /// Attaches the url of the page the extraction ran against.
    pub(crate) fn extraction(err: ExtractError, url: &str) -> Self {
        match err {
            ExtractError::MissingFragment(fragment) => Self::MissingFragment {
                fragment,
                url: url.to_owned(),
            },
            ExtractError::CountMismatch { ids, names } => Self::CountMismatch {
                ids,
                names,
                url: url.to_owned(),
            },
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::AlreadyExists {
            Self::DirectoryExists { path }
        } else {
            Self::Io { path, source }
        }
    }
}
