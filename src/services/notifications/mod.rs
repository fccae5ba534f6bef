//! Push notification dispatch.
//!
//! [`PushDispatcher`] turns a validated [`NotificationRequest`] and the
//! resolved plugin entry into one POST against the configured backend,
//! delivered through a pluggable [`PushTransport`].

mod dispatcher;
mod payload;
mod request;
mod result;
mod transport;

pub use dispatcher::{
    DISABLED_MESSAGE, FAILURE_PREFIX, NOT_CONFIGURED_MESSAGE, PushDispatcher, SEND_PATH,
    delivery_url,
};
pub use payload::{AGENT_ID_ENV_VARS, CorrelationIds, DispatchPayload, JOB_ID_ENV_VARS, UNKNOWN_ID};
pub use request::{NotificationRequest, Priority};
pub use result::{CANCELLED_CODE, DispatchResult, NETWORK_ERROR_CODE, http_error_code};
pub use transport::{HttpTransport, PushTransport, TransportError, TransportResponse};
