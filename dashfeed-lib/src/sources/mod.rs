//! Read-only collaborators that fetch raw records from external APIs.

pub mod hosting;
pub(crate) mod http;
mod repo_spec;
pub mod stats;

pub use repo_spec::RepoSpec;
