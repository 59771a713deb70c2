//! Job application tracker backend.
//!
//! Layout follows ports and adapters: `domain` holds records, validation,
//! ports and the service; `inbound::http` is the actix-web adapter;
//! `outbound` provides record store implementations.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

pub use middleware::Trace;
