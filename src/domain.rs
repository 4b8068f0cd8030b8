//! Hostname extraction and the common-domain denylist.
//!
//! Links are caller-gathered raw strings and are frequently malformed;
//! a link that fails to parse is simply not a signal. Hostnames are
//! lowercased with any leading `www.` stripped before comparison.

use url::Url;

/// Platform domains shared too widely to carry grouping signal.
///
/// Code hosts, social platforms, messaging platforms, link-aggregators,
/// and video platforms: two actors both linking to `github.com` says
/// nothing about common control.
pub const COMMON_DOMAINS: &[&str] = &[
    // code hosts
    "github.com",
    "gitlab.com",
    "bitbucket.org",
    // social platforms
    "twitter.com",
    "x.com",
    "facebook.com",
    "instagram.com",
    "tiktok.com",
    "linkedin.com",
    "reddit.com",
    "medium.com",
    // messaging platforms
    "t.me",
    "telegram.me",
    "discord.gg",
    "discord.com",
    "wa.me",
    // link aggregators
    "linktr.ee",
    "linkin.bio",
    "bio.link",
    "carrd.co",
    // video platforms
    "youtube.com",
    "youtu.be",
    "twitch.tv",
    "vimeo.com",
];

/// Returns true if `domain` is on the common-platform denylist.
#[must_use]
pub fn is_common_domain(domain: &str) -> bool {
    COMMON_DOMAINS.contains(&domain)
}

/// Extracts the normalized hostname from a link string.
///
/// Returns `None` for anything `Url::parse` rejects (including
/// scheme-less strings) and for URLs without a host. A leading `www.` is
/// stripped and the result lowercased.
///
/// # Examples
///
/// ```
/// use syndic::domain::extract_domain;
///
/// assert_eq!(
///     extract_domain("https://www.Example.COM/page").as_deref(),
///     Some("example.com")
/// );
/// assert_eq!(extract_domain("not a url"), None);
/// ```
#[must_use]
pub fn extract_domain(link: &str) -> Option<String> {
    let url = Url::parse(link).ok()?;
    let host = url.host_str()?.to_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host);
    if host.is_empty() {
        return None;
    }
    Some(host.to_string())
}
