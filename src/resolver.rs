//! URL to filesystem path resolution.
//!
//! A derivative request names its source by public URL. The path component
//! of that URL, appended to the configured document root, is the source
//! file's location on disk — the same rule the web server uses to serve it.
//! Multi-tenant installs additionally remap the tenant-scoped upload prefix
//! to the shared storage tree (see [`TenantConfig`](crate::config::TenantConfig)).

use crate::config::AppConfig;
use std::path::PathBuf;
use url::Url;

/// Extract the path component of a URL.
///
/// Absolute URLs go through the `url` crate. Scheme-less input (`/uploads/a.jpg`)
/// is taken as a raw path with any query string or fragment stripped.
pub fn url_path(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => raw
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .to_string(),
    }
}

/// Resolve a public URL to the source file's absolute path on disk.
///
/// The URL path is concatenated onto the document root (not `Path::join`ed —
/// URL paths are root-relative and joining would discard the document root),
/// then the tenant remap is applied to the resulting string.
pub fn resolve_source_path(raw_url: &str, config: &AppConfig) -> PathBuf {
    let path = url_path(raw_url);
    let mut full = format!("{}{}", config.document_root.display(), path);

    if let Some(tenant) = &config.tenant {
        let scoped = format!("{}files/", tenant.url_prefix);
        let shared = format!(
            "{}/{}/files/",
            tenant.storage_root.trim_end_matches('/'),
            tenant.id
        );
        full = full.replace(&scoped, &shared);
    }

    PathBuf::from(full)
}

/// Replace the final path segment of a URL with a new file name.
///
/// Used to publish a derivative next to its source: same directory, new
/// basename. Anything after the last `/` is replaced wholesale, so a query
/// string on the source URL does not survive into the derivative URL.
pub fn swap_url_basename(raw_url: &str, file_name: &str) -> String {
    match raw_url.rfind('/') {
        Some(pos) => format!("{}/{}", &raw_url[..pos], file_name),
        None => file_name.to_string(),
    }
}
