//! Configuration for GitHub connections.
use secrecy::SecretString;

/// Public GitHub host.
pub const DEFAULT_HOST: &str = "github.com";
/// REST API base for the public GitHub host.
pub const DEFAULT_API_URL: &str = "https://api.github.com";
/// Default page size for paginated list queries
pub const DEFAULT_PAGE_SIZE: u8 = 100;

/// Remote repository connection configuration for authenticating and
/// interacting with GitHub.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Remote forge host (e.g., "github.com").
    pub host: String,
    /// Base URL of the REST API for `host`.
    pub api_url: String,
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Access token. Requests are unauthenticated (and heavily rate
    /// limited) without one.
    pub token: Option<SecretString>,
    /// Base URL for release links in changelog headings.
    pub release_link_base_url: String,
}

impl RemoteConfig {
    /// Build a config for `owner/repo` on `host`, deriving the API and
    /// link URLs. Hosts other than github.com are treated as GitHub
    /// Enterprise instances.
    pub fn new(
        host: &str,
        owner: &str,
        repo: &str,
        token: Option<SecretString>,
    ) -> Self {
        let api_url = if host == DEFAULT_HOST {
            DEFAULT_API_URL.to_string()
        } else {
            format!("https://{host}/api/v3")
        };

        Self {
            host: host.to_string(),
            api_url,
            owner: owner.to_string(),
            repo: repo.to_string(),
            token,
            release_link_base_url: format!(
                "https://{host}/{owner}/{repo}/releases"
            ),
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            owner: "".to_string(),
            repo: "".to_string(),
            token: None,
            release_link_base_url: "".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_remote_config() {
        let remote = RemoteConfig::default();
        assert!(remote.token.is_none());
        assert_eq!(remote.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn derives_public_github_urls() {
        let remote = RemoteConfig::new("github.com", "acme", "rocket", None);
        assert_eq!(remote.api_url, "https://api.github.com");
        assert_eq!(
            remote.release_link_base_url,
            "https://github.com/acme/rocket/releases"
        );
    }

    #[test]
    fn derives_enterprise_urls() {
        let remote =
            RemoteConfig::new("git.example.com", "acme", "rocket", None);
        assert_eq!(remote.api_url, "https://git.example.com/api/v3");
        assert_eq!(
            remote.release_link_base_url,
            "https://git.example.com/acme/rocket/releases"
        );
    }
}
