//! Organization member directory (GitHub GraphQL API).

use futures_util::future::BoxFuture;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::error::ResolveError;
use crate::http::send_json;

/// Members fetched per run. Larger organizations are truncated: pagination is
/// not implemented.
pub const MEMBERS_PAGE_SIZE: usize = 100;

const MEMBERS_QUERY: &str = r#"query ($org: String!, $first: Int!) {
  organization(login: $org) {
    membersWithRole(first: $first) {
      nodes {
        login
        name
        location
      }
    }
  }
}"#;

/// Member as the directory reports it, location still free text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DirectoryMember {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl DirectoryMember {
    pub fn new(login: impl Into<String>, name: Option<&str>, location: Option<&str>) -> Self {
        Self {
            login: login.into(),
            name: name.map(str::to_string),
            location: location.map(str::to_string),
        }
    }
}

/// Source of organization members.
///
/// Returns boxed futures so implementations can be used as trait objects.
pub trait MemberDirectory: Send + Sync {
    fn fetch_members<'a>(
        &'a self,
        org: &'a str,
    ) -> BoxFuture<'a, Result<Vec<DirectoryMember>, ResolveError>>;
}

#[derive(Debug, Deserialize)]
pub struct GraphqlResponse {
    #[serde(default)]
    data: Option<GraphqlData>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
struct GraphqlData {
    organization: Option<Organization>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Organization {
    members_with_role: MemberConnection,
}

#[derive(Debug, Deserialize)]
struct MemberConnection {
    nodes: Vec<DirectoryMember>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

impl GraphqlResponse {
    pub fn into_members(self, org: &str) -> Result<Vec<DirectoryMember>, ResolveError> {
        if !self.errors.is_empty() {
            let messages: Vec<_> = self.errors.into_iter().map(|e| e.message).collect();
            return Err(ResolveError::Directory(messages.join("; ")));
        }

        self.data
            .and_then(|d| d.organization)
            .map(|o| o.members_with_role.nodes)
            .ok_or_else(|| ResolveError::Directory(format!("organization {org} not found")))
    }
}

pub struct GithubDirectory {
    client: Client,
    url: String,
    token: String,
}

impl GithubDirectory {
    pub fn new(client: Client, url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            token: token.into(),
        }
    }
}

impl MemberDirectory for GithubDirectory {
    fn fetch_members<'a>(
        &'a self,
        org: &'a str,
    ) -> BoxFuture<'a, Result<Vec<DirectoryMember>, ResolveError>> {
        Box::pin(async move {
            debug!(org, url = %self.url, "querying organization members");
            let body = json!({
                "query": MEMBERS_QUERY,
                "variables": { "org": org, "first": MEMBERS_PAGE_SIZE },
            });
            let request = self
                .client
                .post(&self.url)
                .bearer_auth(&self.token)
                .json(&body);

            let resp: GraphqlResponse = send_json(request, &self.url).await?;
            resp.into_members(org)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{DirectoryMember, GraphqlResponse};
    use crate::error::ResolveError;
    use pretty_assertions::assert_eq;

    fn parse(body: &str) -> GraphqlResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn extracts_member_nodes() {
        let resp = parse(
            r#"{
              "data": {
                "organization": {
                  "membersWithRole": {
                    "nodes": [
                      { "login": "a", "name": "Ann", "location": "Madrid / Berlin" },
                      { "login": "b", "name": null, "location": null }
                    ]
                  }
                }
              }
            }"#,
        );

        assert_eq!(
            resp.into_members("src-d").unwrap(),
            vec![
                DirectoryMember::new("a", Some("Ann"), Some("Madrid / Berlin")),
                DirectoryMember::new("b", None, None),
            ]
        );
    }

    #[test]
    fn graphql_errors_abort() {
        let resp = parse(
            r#"{ "data": null, "errors": [ { "message": "Bad credentials" }, { "message": "again" } ] }"#,
        );
        assert_eq!(
            resp.into_members("src-d").unwrap_err(),
            ResolveError::Directory("Bad credentials; again".to_string())
        );
    }

    #[test]
    fn unknown_organization_aborts() {
        let resp = parse(r#"{ "data": { "organization": null } }"#);
        assert_eq!(
            resp.into_members("nope").unwrap_err(),
            ResolveError::Directory("organization nope not found".to_string())
        );
    }
}
