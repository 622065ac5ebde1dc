//! The uniform result envelope returned by every remote operation.
//!
//! An envelope is either a success carrying the typed payload and the
//! generic [`ResultCode::Ok`] code, or a failure carrying an empty (default)
//! payload and a specific failure code. The constructors make any other
//! combination unrepresentable.

use std::fmt;

use http::StatusCode;

/// Result code reported by a remote operation.
///
/// Mirrors the share-relevant subset of the remote server's operation
/// result codes. `Ok` is the only success code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultCode {
    /// The operation completed successfully.
    Ok,
    /// The referenced share does not exist on the server.
    ShareNotFound,
    /// The server refused the share operation (e.g. public upload disabled).
    ShareForbidden,
    /// The server rejected a share parameter.
    ShareWrongParameter,
    /// The session is not authenticated.
    Unauthorized,
    /// The authenticated user may not perform the operation.
    Forbidden,
    /// The referenced file or folder does not exist on the server.
    FileNotFound,
    /// The server reported an internal error.
    ServerError,
    /// The server response could not be parsed.
    WrongServerResponse,
    /// The failure did not map to any known code.
    UnknownError,
}

impl ResultCode {
    /// Whether this code denotes success.
    pub fn is_success(self) -> bool {
        self == Self::Ok
    }

    /// Map an OCS meta status code to a result code.
    ///
    /// The share API reports 100/200 for success, 400 for a bad share
    /// parameter, 403 for a forbidden share action, 404 for a missing file
    /// or share, and 997 for a missing authentication.
    pub fn from_status(status: u16) -> Self {
        match status {
            100 | 200 => Self::Ok,
            400 => Self::ShareWrongParameter,
            401 | 997 => Self::Unauthorized,
            403 => Self::ShareForbidden,
            404 => Self::ShareNotFound,
            500..=599 => Self::ServerError,
            _ => Self::UnknownError,
        }
    }

    /// Map a bare HTTP status to a result code.
    ///
    /// Used when the server answered without an OCS document, so the status
    /// speaks about the route or resource itself rather than a share:
    /// 403 and 404 map to [`Self::Forbidden`] and [`Self::FileNotFound`]
    /// instead of the share-level codes [`Self::from_status`] produces.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            200..=299 => Self::Ok,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::FileNotFound,
            500..=599 => Self::ServerError,
            _ => Self::UnknownError,
        }
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::ShareNotFound => write!(f, "SHARE_NOT_FOUND"),
            Self::ShareForbidden => write!(f, "SHARE_FORBIDDEN"),
            Self::ShareWrongParameter => write!(f, "SHARE_WRONG_PARAMETER"),
            Self::Unauthorized => write!(f, "UNAUTHORIZED"),
            Self::Forbidden => write!(f, "FORBIDDEN"),
            Self::FileNotFound => write!(f, "FILE_NOT_FOUND"),
            Self::ServerError => write!(f, "SERVER_ERROR"),
            Self::WrongServerResponse => write!(f, "WRONG_SERVER_RESPONSE"),
            Self::UnknownError => write!(f, "UNKNOWN_ERROR"),
        }
    }
}

/// The envelope returned by every remote operation.
///
/// Fields are private so the success/payload invariant cannot be broken
/// from outside: failures always carry `T::default()` as payload.
#[derive(Debug, Clone)]
pub struct RemoteOperationResult<T> {
    code: ResultCode,
    http_status: Option<StatusCode>,
    http_phrase: Option<String>,
    data: T,
}

impl<T: Default> RemoteOperationResult<T> {
    /// Build a success envelope carrying `data`.
    pub fn success(data: T) -> Self {
        Self {
            code: ResultCode::Ok,
            http_status: None,
            http_phrase: None,
            data,
        }
    }

    /// Build a success envelope that also records the HTTP status.
    pub fn success_with_status(data: T, status: StatusCode) -> Self {
        Self {
            http_status: Some(status),
            ..Self::success(data)
        }
    }

    /// Build a failure envelope with an empty payload.
    ///
    /// `code` must not be [`ResultCode::Ok`]; a generic code on a failure
    /// would hide the cause from the caller.
    pub fn failure(code: ResultCode, phrase: Option<String>) -> Self {
        debug_assert!(!code.is_success(), "failure envelope with Ok code");
        Self {
            code,
            http_status: None,
            http_phrase: phrase,
            data: T::default(),
        }
    }

    /// Build a failure envelope that also records the HTTP status.
    pub fn failure_with_status(
        code: ResultCode,
        status: StatusCode,
        phrase: Option<String>,
    ) -> Self {
        Self {
            http_status: Some(status),
            ..Self::failure(code, phrase)
        }
    }
}

impl<T> RemoteOperationResult<T> {
    /// Whether the operation succeeded.
    pub fn is_success(&self) -> bool {
        self.code.is_success()
    }

    /// The result code.
    pub fn code(&self) -> ResultCode {
        self.code
    }

    /// The HTTP status, when the operation reached the server.
    pub fn http_status(&self) -> Option<StatusCode> {
        self.http_status
    }

    /// The HTTP reason phrase reported by the server, if any.
    pub fn http_phrase(&self) -> Option<&str> {
        self.http_phrase.as_deref()
    }

    /// Borrow the payload. Empty (default) for failures.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Consume the envelope and return the payload.
    pub fn into_data(self) -> T {
        self.data
    }
}
