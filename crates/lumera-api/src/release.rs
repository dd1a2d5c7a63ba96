//! GitHub release lookup for the startup update check.

use serde::Deserialize;
use thiserror::Error;

const RELEASES_URL: &str = "https://api.github.com/repos/lumera-app/lumera/releases/latest";
const USER_AGENT: &str = concat!("lumera/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum ReleaseError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {0})")]
    Api(u16),

    #[error("parse error: {0}")]
    Parse(String),
}

/// The subset of a GitHub release the update check reads.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubRelease {
    pub tag_name: String,
    pub html_url: String,
    #[serde(default)]
    pub prerelease: bool,
}

/// Fetch the latest published release. Best-effort: callers log and move on.
pub async fn latest_release() -> Result<GitHubRelease, ReleaseError> {
    tracing::debug!("Checking latest release");

    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(std::time::Duration::from_secs(10))
        .build()?;

    let resp = client.get(RELEASES_URL).send().await?;
    if !resp.status().is_success() {
        return Err(ReleaseError::Api(resp.status().as_u16()));
    }

    resp.json::<GitHubRelease>()
        .await
        .map_err(|e| ReleaseError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_deserializes() {
        let json = r#"{
            "tag_name": "v0.2.0",
            "html_url": "https://github.com/lumera-app/lumera/releases/tag/v0.2.0",
            "prerelease": false,
            "assets": []
        }"#;
        let release: GitHubRelease = serde_json::from_str(json).unwrap();
        assert_eq!(release.tag_name, "v0.2.0");
        assert!(!release.prerelease);
    }
}
