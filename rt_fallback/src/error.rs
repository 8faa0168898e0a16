// Possible validation failures
use thiserror::Error;

/// `E_INVALIDARG`
const INVALID_ARGUMENT_CODE: u32 = 0x8007_0057;
/// `E_NOTIMPL`
const NOT_IMPLEMENTED_CODE: u32 = 0x8000_4001;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input violates a documented precondition
    InvalidArgument,
    /// Input uses a feature the fallback layer does not support
    NotImplemented,
}

#[derive(Debug, Error, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FallbackError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),
}

pub type Result<T, E = FallbackError> = std::result::Result<T, E>;

impl FallbackError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FallbackError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            FallbackError::NotImplemented(_) => ErrorKind::NotImplemented,
        }
    }

    pub fn message(&self) -> &'static str {
        match *self {
            FallbackError::InvalidArgument(message) | FallbackError::NotImplemented(message) => {
                message
            }
        }
    }

    /// COM-style result code for C-shaped callers
    pub fn code(&self) -> i32 {
        let code = match self.kind() {
            ErrorKind::InvalidArgument => INVALID_ARGUMENT_CODE,
            ErrorKind::NotImplemented => NOT_IMPLEMENTED_CODE,
        };
        code as i32
    }

    /// Emits the failure to the diagnostic log and hands it back untouched.
    ///
    /// Meant for `.map_err(FallbackError::report)` at the boundary where a build
    /// gets rejected; validation routines themselves never log failures.
    pub fn report(self) -> Self {
        tracing::error!("Raytracing fallback error: {}", self.message());
        self
    }
}
