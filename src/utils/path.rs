//! Resolution of `:name` placeholders in endpoint path templates

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::BTreeMap;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i):([a-z0-9_-]+)\b").expect("placeholder pattern is valid"));

/// Substitutes every `:name` placeholder of `template` with the matching value of `params`
///
/// Placeholders without a matching parameter are left untouched so that the
/// unresolved path can still be reported in validation errors.
///
/// # Example
/// ```
/// use std::collections::BTreeMap;
/// use digitalocean_client::utils::resolve_path;
///
/// let mut params = BTreeMap::new();
/// params.insert("droplet_id".to_string(), "42".to_string());
/// assert_eq!(resolve_path("droplets/:droplet_id/actions", &params), "droplets/42/actions");
/// ```
pub fn resolve_path(template: &str, params: &BTreeMap<String, String>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| match params.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Lists the placeholder names of a path template, in order of appearance
pub fn path_placeholders(template: &str) -> Vec<&str> {
    PLACEHOLDER
        .captures_iter(template)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}
