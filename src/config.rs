use gloo_storage::Storage;

/// Where the guides card reads its guides from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideSource {
    /// The fixed in-memory catalog
    Local,
    /// `GET /api/guides` on the backend
    Remote,
}

/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Backend base URL used when nothing overrides it
    pub const DEFAULT_API_BASE: &'static str = "http://127.0.0.1:5000/api";

    /// localStorage key that overrides the backend base URL at runtime
    pub const API_BASE_STORAGE_KEY: &'static str = "agrismart.api_base";

    /// Horizon for market predictions, in days
    pub const PREDICTION_DAYS: u32 = 7;

    /// Simulated latency of the local guide catalog in milliseconds
    pub const LOCAL_GUIDES_DELAY_MS: u32 = 800;

    pub const GUIDE_SOURCE: GuideSource = GuideSource::Local;

    /// Resolves the backend base URL.
    ///
    /// Order: localStorage override, then the `AGRISMART_API_BASE` build-time
    /// variable, then [`Config::DEFAULT_API_BASE`].
    pub fn api_base() -> String {
        resolve_api_base(load_api_base_override(), option_env!("AGRISMART_API_BASE"))
    }
}

/// First non-blank of the stored override and the build-time value,
/// otherwise the default.
fn resolve_api_base(stored: Option<String>, build_time: Option<&str>) -> String {
    stored
        .filter(|base| !base.trim().is_empty())
        .or_else(|| {
            build_time
                .filter(|base| !base.trim().is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| Config::DEFAULT_API_BASE.to_string())
}

fn load_api_base_override() -> Option<String> {
    let stored: Result<String, _> = gloo_storage::LocalStorage::get(Config::API_BASE_STORAGE_KEY);

    match stored {
        Ok(base) => Some(base),
        Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => None,
        Err(e) => {
            gloo::console::warn!(format!("Ignoring API base override: {e}"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_override_wins() {
        assert_eq!(
            resolve_api_base(
                Some("https://agri.example.com/api".to_string()),
                Some("http://build.example.com/api")
            ),
            "https://agri.example.com/api"
        );
    }

    #[test]
    fn test_blank_override_falls_back_to_build_time_value() {
        assert_eq!(
            resolve_api_base(Some("   ".to_string()), Some("http://build.example.com/api")),
            "http://build.example.com/api"
        );
    }

    #[test]
    fn test_default_when_nothing_set() {
        assert_eq!(resolve_api_base(None, None), Config::DEFAULT_API_BASE);
        assert_eq!(
            resolve_api_base(Some(String::new()), Some(" ")),
            Config::DEFAULT_API_BASE
        );
    }
}
