//! Platform-agnostic core: configuration, storage, session and authentication.
//!
//! Nothing in here renders. Views under `crate::views` drive these types and
//! translate their errors into localized messages.

pub mod auth;
pub mod config;
pub mod phone;
pub mod session;
pub mod storage;
pub mod timing;
