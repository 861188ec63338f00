pub mod airport;
pub mod airport_query;
pub mod clients;
pub mod config;
pub mod dumper;
pub mod entity;
pub mod extractor;
pub mod known_entities;
pub mod log;

pub use airport::{Airport, Schema};
pub use config::Config;
pub use dumper::{AirportDumper, KnowledgeBase, WikidataClient};

pub const GIT_VERSION: &str =
    git_version::git_version!(args = ["--always", "--dirty=-modified"], fallback = "unknown");
