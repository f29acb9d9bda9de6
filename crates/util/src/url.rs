//! URL building.

use serde_json::Value;
use spx_dereference::{get, PathStep};

use crate::query::obj_to_url_params;

/// Key of the request parameters inside a data store.
pub const RES_PARAMS_KEY: &str = "resParams";

fn param_separator(url: &str) -> char {
    if url.contains('?') {
        '&'
    } else {
        '?'
    }
}

/// Append `params` (see [`obj_to_url_params`]) to `url`, starting a query
/// string or extending the existing one.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use spx_util::append_query_params;
///
/// let params = json!({"a": 1});
/// assert_eq!(append_query_params("http://swoop.com", &params), "http://swoop.com?a=1");
/// assert_eq!(append_query_params("http://swoop.com?0=1", &params), "http://swoop.com?0=1&a=1");
/// ```
pub fn append_query_params(url: &str, params: &Value) -> String {
    format!(
        "{url}{}{}",
        param_separator(url),
        obj_to_url_params(params)
    )
}

/// Append the `resParams` member of a data store to `url`.
///
/// A store without `resParams` contributes no parameters.
pub fn append_res_params(url: &str, store: &Value) -> String {
    let path = [PathStep::Key(RES_PARAMS_KEY.to_string())];
    match get(store, &path[..]) {
        Some(params) => append_query_params(url, params),
        None => append_query_params(url, &Value::Null),
    }
}

/// Resolve `uri` against `base`.
///
/// `base` always gains a trailing `/`. Absolute `http://` and `https://` uris
/// are returned unchanged; relative ones lose one leading `/` and are
/// appended to `base`. A missing or empty uri yields `base`.
///
/// # Examples
///
/// ```
/// use spx_util::resolve_url;
///
/// assert_eq!(resolve_url("http://hobo.swoop.com", Some("/path/to")), "http://hobo.swoop.com/path/to");
/// assert_eq!(resolve_url("http://hobo.swoop.com/", Some("https://www.swoop.com")), "https://www.swoop.com");
/// assert_eq!(resolve_url("http://www.swoop.com", None), "http://www.swoop.com/");
/// ```
pub fn resolve_url(base: &str, uri: Option<&str>) -> String {
    let mut base = base.to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    let uri = match uri {
        Some(uri) if !uri.is_empty() => uri,
        _ => return base,
    };
    if uri.starts_with("http://") || uri.starts_with("https://") {
        return uri.to_string();
    }
    base.push_str(uri.strip_prefix('/').unwrap_or(uri));
    base
}
