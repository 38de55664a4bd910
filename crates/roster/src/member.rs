use serde::{Deserialize, Serialize};

/// Resolved place a member reported, as stored in `members.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Formatted address returned by the geocoder.
    pub name: String,
    pub lat: f64,
    pub long: f64,
}

impl Location {
    pub fn new(name: impl Into<String>, lat: f64, long: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            long,
        }
    }
}

/// Organization member with an optional resolved location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<Location>,
}

impl Member {
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            name: None,
            location: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Name shown in lists; falls back to the login.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.login,
        }
    }

    pub fn profile_url(&self) -> String {
        format!("https://github.com/{}", self.login)
    }
}

/// Parse a `members.json` document.
pub fn parse_members(json: &str) -> Result<Vec<Member>, serde_json::Error> {
    serde_json::from_str(json)
}
