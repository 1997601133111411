use std::io;

use thiserror::Error;

/// Failures that stop a responder process. Request handling itself cannot fail.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] io::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
