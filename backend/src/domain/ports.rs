//! Domain ports defining the edges of the hexagon.
//!
//! Driven ports describe how the domain expects to reach storage; driving
//! ports describe the use-cases inbound adapters may call. Each trait exposes
//! strongly typed errors so adapters map their failures into predictable
//! variants.

mod application_store;
mod job_applications;

#[cfg(test)]
pub use application_store::MockApplicationStore;
pub use application_store::{ApplicationStore, ApplicationStoreError};
#[cfg(test)]
pub use job_applications::{MockJobApplicationsCommand, MockJobApplicationsQuery};
pub use job_applications::{
    FixtureJobApplicationsCommand, FixtureJobApplicationsQuery, JobApplicationsCommand,
    JobApplicationsQuery,
};
