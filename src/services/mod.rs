//! Service layer.

pub mod notifications;

pub use notifications::PushDispatcher;
