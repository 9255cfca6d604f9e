//! Video platform recognition

use url::Url;

/// Canonical platform domains (subdomains match too)
const PLATFORM_DOMAINS: &[&str] = &["youtube.com", "youtu.be", "youtube-nocookie.com"];

/// Path prefixes that carry the content id as the next segment
const ID_PATH_PREFIXES: &[&str] = &["shorts", "embed", "live", "v"];

/// Length of a canonical content id
const ID_LEN: usize = 11;

fn host_matches(url: &Url, domain: &str) -> bool {
    url.host_str().is_some_and(|host| {
        let host = host.to_ascii_lowercase();
        host == domain || host.ends_with(&format!(".{domain}"))
    })
}

/// Whether the URL points at the canonical video platform
#[must_use]
pub fn is_platform_url(url: &Url) -> bool {
    PLATFORM_DOMAINS.iter().any(|d| host_matches(url, d))
}

fn is_valid_id(candidate: &str) -> bool {
    candidate.len() == ID_LEN
        && candidate
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// Parse the canonical content id from a platform URL
///
/// Handles `youtu.be/<id>`, `watch?v=<id>`, and `/shorts|embed|live|v/<id>`.
#[must_use]
pub fn video_id(url: &Url) -> Option<String> {
    if !is_platform_url(url) {
        return None;
    }

    let mut segments = url.path_segments()?.filter(|s| !s.is_empty());

    if host_matches(url, "youtu.be") {
        return segments
            .next()
            .filter(|id| is_valid_id(id))
            .map(ToString::to_string);
    }

    if let Some((_, v)) = url.query_pairs().find(|(k, _)| k == "v")
        && is_valid_id(&v)
    {
        return Some(v.into_owned());
    }

    let first = segments.next()?;
    if ID_PATH_PREFIXES.contains(&first) {
        return segments
            .next()
            .filter(|id| is_valid_id(id))
            .map(ToString::to_string);
    }

    None
}
