use opencl3::error_codes::ClError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VecAddError {
    #[error("no OpenCL platform available")]
    NoPlatform,

    #[error("no OpenCL device available on the selected platform")]
    NoDevice,

    #[error("OpenCL error {status} during {call}")]
    Api { call: &'static str, status: ClError },

    #[error("failed to allocate a {bytes}-byte device buffer: {status}")]
    Allocation { bytes: usize, status: ClError },

    #[error("kernel build failed:\n{log}")]
    BuildFailure { log: String },

    #[error("Failed to open {}: {}", .path.display(), .source)]
    KernelImage {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, VecAddError>;

/// Tag an OpenCL status with the API call that produced it
pub fn api_err(call: &'static str) -> impl FnOnce(ClError) -> VecAddError {
    move |status| VecAddError::Api { call, status }
}
