//! Access-spec parsing into candidate grants.

use crate::permission::normalize_permission;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Pattern for a team token that names its owning organization explicitly,
/// e.g. `@acme/platform`.
static TEAM_OWNER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@(.*)/(.*)").expect("Invalid regex"));

/// One parsed line of the access specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateGrant {
    /// Organization owning the team.
    pub org: String,
    /// Team slug within the organization.
    pub team_slug: String,
    /// Normalized permission, if one was requested.
    pub permission: Option<String>,
}

/// Parse a URL-encoded, newline-delimited access specification.
///
/// Each non-blank line is `team-token[,permission]`. A token of the form
/// `@org/slug` targets a team in another organization; a bare slug targets
/// a team under `default_org`. Grants keep their input order.
pub fn parse_access_spec(access_spec: &str, default_org: &str) -> Vec<CandidateGrant> {
    decode(access_spec)
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| parse_line(line, default_org))
        .collect()
}

fn parse_line(line: &str, default_org: &str) -> CandidateGrant {
    let (team_token, raw_permission) = match line.split_once(',') {
        Some((team, permission)) => (team.trim(), Some(permission.trim())),
        None => (line, None),
    };

    let (org, team_slug) = match TEAM_OWNER_REGEX.captures(team_token) {
        Some(captures) => (captures[1].to_string(), captures[2].to_string()),
        None => (default_org.to_string(), team_token.to_string()),
    };

    CandidateGrant {
        org,
        team_slug,
        permission: normalize_permission(raw_permission.filter(|p| !p.is_empty())),
    }
}

// Percent-decoding helper; the access spec arrives URL-encoded. Decodes
// `%XX` byte sequences, leaving malformed escapes in place.
fn decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let Some(byte) = s
                .get(i + 1..i + 3)
                .and_then(|hex| u8::from_str_radix(hex, 16).ok())
            {
                out.push(byte);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&out).into_owned()
}
