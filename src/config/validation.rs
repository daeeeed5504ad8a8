use url::Url;

use super::schema::Config;

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if !(1..=100).contains(&config.celebrate_at) {
        errors.push(format!(
            "celebrate_at: must be between 1 and 100, got {}",
            config.celebrate_at
        ));
    }

    if config.history.limit == 0 {
        errors.push("history.limit: must be at least 1".to_string());
    }

    match Url::parse(&config.share.base_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(format!(
            "share.base_url: unsupported scheme '{}' in '{}'",
            url.scheme(),
            config.share.base_url
        )),
        Err(e) => errors.push(format!(
            "share.base_url: invalid '{}' - {}",
            config.share.base_url, e
        )),
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
