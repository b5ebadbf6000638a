//! Remote image origin rules.
//!
//! Content images are either root-relative paths served from the site itself
//! (`/images/conseil.jpg`) or absolute URLs on a remote host. Remote URLs are
//! only accepted when they match one of the configured
//! `[[images.remote_patterns]]`:
//!
//! | Field | Semantics |
//! |-------|-----------|
//! | `protocol` | must equal the URL scheme; omitted = any |
//! | `hostname` | dot-separated glob: `*` is one label, a leading `**` one or more labels |
//! | `port` | must equal the URL port; `""` = no explicit port; omitted = any |
//! | `pathname` | slash-separated glob: `*` is one non-empty segment, `**` zero or more; omitted = any |
//!
//! URLs are read the way a browser reads them (WHATWG rules, via `url`), so
//! `\` acts as a path separator and `..` segments are resolved before any
//! pattern sees the path. Hostnames compare case-insensitively, pathnames
//! case-sensitively. Query strings and fragments are ignored.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    #[error("invalid image URL {0:?}")]
    InvalidUrl(String),
    #[error("image {0:?} is not covered by any images.remote_patterns entry")]
    Disallowed(String),
}

/// One `[[images.remote_patterns]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RemotePattern {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    pub hostname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pathname: Option<String>,
}

/// Components of an absolute image URL relevant to origin matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteUrl {
    pub protocol: String,
    /// Lowercased. IPv6 literals keep their brackets.
    pub hostname: String,
    /// Empty when the URL has no explicit port or uses the scheme default.
    pub port: String,
    /// Normalized: dot segments resolved, percent-encoded as a browser would.
    pub pathname: String,
}

/// Where an image reference points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource<'a> {
    Local(&'a str),
    Remote(RemoteUrl),
}

impl<'a> ImageSource<'a> {
    pub fn parse(src: &'a str) -> Result<Self, ImageError> {
        // `//host` and `/\host` are scheme-relative to a browser, not local.
        if src.starts_with('/') && !src[1..].starts_with(['/', '\\']) {
            return Ok(ImageSource::Local(src));
        }
        parse_remote(src).map(ImageSource::Remote)
    }
}

fn parse_remote(src: &str) -> Result<RemoteUrl, ImageError> {
    let invalid = || ImageError::InvalidUrl(src.to_string());

    let url = Url::parse(src).map_err(|_| invalid())?;
    let hostname = url.host_str().filter(|h| !h.is_empty()).ok_or_else(invalid)?;

    Ok(RemoteUrl {
        protocol: url.scheme().to_string(),
        hostname: hostname.to_ascii_lowercase(),
        port: url.port().map(|p| p.to_string()).unwrap_or_default(),
        pathname: url.path().to_string(),
    })
}

impl RemotePattern {
    pub fn matches(&self, url: &RemoteUrl) -> bool {
        if self.protocol.as_deref().is_some_and(|p| p != url.protocol) {
            return false;
        }
        if self.port.as_deref().is_some_and(|p| p != url.port) {
            return false;
        }
        let host_pattern = self.hostname.to_ascii_lowercase();
        let host_pat: Vec<&str> = host_pattern.split('.').collect();
        let host: Vec<&str> = url.hostname.split('.').collect();
        if !glob_segments(&host_pat, &host, 1) {
            return false;
        }
        match &self.pathname {
            None => true,
            Some(pattern) => {
                let path_pat: Vec<&str> = pattern.split('/').collect();
                let path: Vec<&str> = url.pathname.split('/').collect();
                glob_segments(&path_pat, &path, 0)
            }
        }
    }
}

/// Segment-wise glob. `**` swallows at least `double_star_min` segments.
fn glob_segments(pattern: &[&str], segments: &[&str], double_star_min: usize) -> bool {
    match pattern.split_first() {
        None => segments.is_empty(),
        Some((&"**", rest)) => (double_star_min..=segments.len())
            .any(|n| glob_segments(rest, &segments[n..], double_star_min)),
        Some((&"*", rest)) => segments.split_first().is_some_and(|(seg, tail)| {
            !seg.is_empty() && glob_segments(rest, tail, double_star_min)
        }),
        Some((literal, rest)) => segments.split_first().is_some_and(|(seg, tail)| {
            seg == literal && glob_segments(rest, tail, double_star_min)
        }),
    }
}

/// Accept a local path or a remote URL matching one of `patterns`.
pub fn check_image(src: &str, patterns: &[RemotePattern]) -> Result<(), ImageError> {
    match ImageSource::parse(src)? {
        ImageSource::Local(_) => Ok(()),
        ImageSource::Remote(url) if patterns.iter().any(|p| p.matches(&url)) => Ok(()),
        ImageSource::Remote(_) => Err(ImageError::Disallowed(src.to_string())),
    }
}

/// Every rejected image among `srcs`, in input order.
pub fn rejected_images<'a>(
    srcs: impl IntoIterator<Item = &'a str>,
    patterns: &[RemotePattern],
) -> Vec<ImageError> {
    srcs.into_iter()
        .filter_map(|src| check_image(src, patterns).err())
        .collect()
}
