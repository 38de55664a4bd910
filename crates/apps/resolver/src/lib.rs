//! Offline member location resolver.
//!
//! Fetches an organization's members from the GitHub GraphQL API, geocodes each
//! member's free-text location through the Google Geocoding API and writes the
//! enriched list to `members.json` for the globe to load.

pub mod config;
pub mod directory;
pub mod error;
pub mod geocode;
pub mod http;
pub mod output;
pub mod pipeline;

pub use config::ResolverConfig;
pub use directory::{DirectoryMember, GithubDirectory, MemberDirectory};
pub use error::ResolveError;
pub use geocode::{GeocodeCache, Geocoder, GoogleGeocoder};
pub use output::{render_members, write_members};
pub use pipeline::{resolve_members, run};
