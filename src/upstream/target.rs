use crate::error::{ProxyError, Result};
use url::{form_urlencoded, Url};

/// Query parameter carrying the UMLS credential
pub const API_KEY_PARAM: &str = "apiKey";

/// Build `<base>/<remainder>` carrying every inbound query parameter.
///
/// Duplicate keys follow URL `set` semantics: the first occurrence keeps its
/// position and takes the last value. `overrides` are applied after the
/// inbound parameters, so they always win.
pub fn build_target_url(
    base: &str,
    remainder: &str,
    raw_query: Option<&str>,
    overrides: &[(&str, &str)],
) -> Result<Url> {
    let mut url = Url::parse(&format!("{}/{}", base, remainder))
        .map_err(|e| ProxyError::InvalidTarget(format!("{}: {}", remainder, e)))?;

    let mut params: Vec<(String, String)> = Vec::new();
    if let Some(query) = raw_query {
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            set_param(&mut params, &key, &value);
        }
    }
    for (key, value) in overrides {
        set_param(&mut params, key, value);
    }

    if !params.is_empty() {
        url.query_pairs_mut().extend_pairs(params.iter());
    }

    Ok(url)
}

fn set_param(params: &mut Vec<(String, String)>, key: &str, value: &str) {
    match params.iter().position(|(existing, _)| existing == key) {
        Some(index) => params[index].1 = value.to_string(),
        None => params.push((key.to_string(), value.to_string())),
    }
}

/// Render a target URL for logging with the credential masked
pub fn redact_api_key(url: &Url) -> String {
    if !url.query_pairs().any(|(key, _)| key == API_KEY_PARAM) {
        return url.to_string();
    }

    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if key == API_KEY_PARAM {
                "REDACTED".to_string()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs.iter());
    redacted.to_string()
}
