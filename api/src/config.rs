use anyhow::{Context, Result, anyhow, bail};
use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Where the employee backend lives. Handed to
/// [`EmployeeClient::new`](crate::EmployeeClient::new); nothing reads it globally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: Url,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url =
            Url::parse(base_url).with_context(|| format!("invalid API base URL: {base_url}"))?;
        if base_url.cannot_be_a_base() {
            bail!("API base URL cannot have paths appended: {base_url}");
        }

        Ok(Self { base_url })
    }

    /// Uses `EMPMANAGE_API_URL` as it was set at compile time.
    pub fn from_build_env() -> Result<Self> {
        Self::new(option_env!("EMPMANAGE_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| anyhow!("API base URL cannot have paths appended: {}", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
