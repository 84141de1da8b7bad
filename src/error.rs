//! Error taxonomy and the alert each error surfaces as.
//!
//! Every failure ends in exactly one modal alert. Validation failures abort
//! before any state or network is touched; backend failures are logged at
//! the call site and leave the list unchanged (or empty after a failed load).

use crate::backend::BackendError;
use crate::constants::{ALERT_ERROR, ALERT_MISSING_INFO, ALERT_PLEASE_WAIT, ERROR_REQUEST_IN_FLIGHT};
use crate::repositories::RepositoryError;
use crate::status::TransitionError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CrmError {
    /// A required field was left empty
    #[error("Please provide {field}")]
    Validation { field: &'static str },

    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error("{message}")]
    Backend {
        /// User-facing summary of the failed action
        message: &'static str,
        #[source]
        source: BackendError,
    },

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("{}", ERROR_REQUEST_IN_FLIGHT)]
    RequestInFlight,
}

impl CrmError {
    pub fn validation(field: &'static str) -> Self {
        CrmError::Validation { field }
    }

    pub fn backend(message: &'static str, source: BackendError) -> Self {
        CrmError::Backend { message, source }
    }

    /// Blocking alert shown for this error
    pub fn alert(&self) -> Alert {
        match self {
            CrmError::Validation { .. } => Alert::new(ALERT_MISSING_INFO, self.to_string()),
            CrmError::RequestInFlight => Alert::new(ALERT_PLEASE_WAIT, self.to_string()),
            _ => Alert::new(ALERT_ERROR, self.to_string()),
        }
    }
}

pub type CrmResult<T> = Result<T, CrmError>;

/// Modal dialog content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

impl From<&CrmError> for Alert {
    fn from(err: &CrmError) -> Self {
        err.alert()
    }
}
