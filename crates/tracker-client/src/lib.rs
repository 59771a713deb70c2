//! Client side of the job application tracker.
//!
//! [`HttpApplicationGateway`] wraps the five network calls behind the
//! [`ApplicationGateway`] trait. [`ApplicationsCache`] keeps the full list in
//! memory and re-reads it after every successful write. The [`view`] module
//! holds the filtering, statistics and link helpers list views need.

pub mod cache;
pub mod gateway;
pub mod model;
pub mod view;

pub use cache::{ApplicationsCache, CacheSnapshot};
pub use gateway::{ApplicationGateway, GatewayError, HttpApplicationGateway, Operation};
pub use model::{ApplicationInput, ApplicationStatus, JobApplication};
