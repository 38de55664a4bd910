use std::sync::Arc;

use futures_util::future::try_join_all;
use reqwest::Client;
use roster::{Member, normalize_location};
use tracing::{info, warn};

use crate::config::ResolverConfig;
use crate::directory::{DirectoryMember, GithubDirectory, MEMBERS_PAGE_SIZE, MemberDirectory};
use crate::error::ResolveError;
use crate::geocode::{GeocodeCache, GoogleGeocoder};
use crate::output::write_members;

/// Fetch `org`'s members and resolve every reported location.
///
/// Lookups run concurrently; member order is preserved. The first failure
/// aborts the whole batch.
pub async fn resolve_members(
    directory: &dyn MemberDirectory,
    cache: &GeocodeCache,
    org: &str,
) -> Result<Vec<Member>, ResolveError> {
    let fetched = directory.fetch_members(org).await?;
    info!(org, count = fetched.len(), "fetched members");
    if fetched.len() >= MEMBERS_PAGE_SIZE {
        warn!(
            org,
            "member list hit the page size; members beyond {MEMBERS_PAGE_SIZE} are not fetched"
        );
    }

    let members = try_join_all(fetched.into_iter().map(|m| resolve_member(m, cache))).await?;
    info!(
        addresses = cache.len(),
        located = members.iter().filter(|m| m.location.is_some()).count(),
        "resolved locations"
    );
    Ok(members)
}

async fn resolve_member(
    member: DirectoryMember,
    cache: &GeocodeCache,
) -> Result<Member, ResolveError> {
    let location = match member.location.as_deref().and_then(normalize_location) {
        Some(address) => cache.lookup(&address).await?,
        None => None,
    };

    Ok(Member {
        login: member.login,
        name: member.name,
        location,
    })
}

/// One full resolver run against the live APIs. Returns the number of members
/// written.
pub async fn run(config: &ResolverConfig) -> Result<usize, ResolveError> {
    let client = Client::new();
    let directory = GithubDirectory::new(
        client.clone(),
        config.graphql_url.clone(),
        config.github_token.clone(),
    );
    let geocoder = GoogleGeocoder::new(client, config.geocode_url.clone(), config.gmap_key.clone());
    let cache = GeocodeCache::new(Arc::new(geocoder));

    let members = resolve_members(&directory, &cache, &config.org).await?;
    write_members(&config.output, &members).await?;
    info!(
        count = members.len(),
        path = %config.output.display(),
        "wrote members"
    );
    Ok(members.len())
}
