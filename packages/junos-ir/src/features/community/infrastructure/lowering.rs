//! Community and AS-path lowering
//!
//! Vendor community regexes use `*` loosely; they are rewritten into
//! proper regex syntax and compiled once to reject malformed patterns
//! before they reach the target IR.

use crate::features::community::domain::{AsPath, CommunityDefinition, CommunityMember};
use crate::shared::diagnostics::Warnings;
use crate::shared::models::StandardCommunity;
use crate::target::CommunityMatch;
use regex::Regex;

/// Rewrite vendor wildcard forms: `:*` becomes `:.*` and a leading `*`
/// becomes `.*`
pub fn normalize_community_regex(text: &str) -> String {
    let replaced = text.replace(":*", ":.*");
    match replaced.strip_prefix('*') {
        Some(rest) => format!(".*{}", rest),
        None => replaced,
    }
}

/// `Some(pattern)` when it compiles; otherwise a red flag naming `site`
pub fn checked_regex(pattern: &str, site: &str, warnings: &mut Warnings) -> Option<String> {
    match Regex::new(pattern) {
        Ok(_) => Some(pattern.to_string()),
        Err(err) => {
            warnings.red_flag(format!("invalid regex '{}' in {}: {}", pattern, site, err));
            None
        }
    }
}

/// Match conditions for every usable member, in declaration order
pub fn community_matches(
    community: &CommunityDefinition,
    site: &str,
    warnings: &mut Warnings,
) -> Vec<CommunityMatch> {
    community
        .members
        .iter()
        .filter_map(|member| match member {
            CommunityMember::Literal(c) => Some(CommunityMatch::Literal(*c)),
            CommunityMember::Regex(text) => {
                checked_regex(&normalize_community_regex(text), site, warnings)
                    .map(CommunityMatch::Regex)
            }
        })
        .collect()
}

/// Literal members only; regex members cannot be attached to a route
pub fn literal_communities(
    community: &CommunityDefinition,
    site: &str,
    warnings: &mut Warnings,
) -> Vec<StandardCommunity> {
    let mut literals = Vec::with_capacity(community.members.len());
    for member in &community.members {
        match member {
            CommunityMember::Literal(c) => literals.push(*c),
            CommunityMember::Regex(text) => warnings.red_flag(format!(
                "regex member '{}' of community '{}' cannot be added to a route ({})",
                text, community.name, site
            )),
        }
    }
    literals
}

/// Valid regexes of the given AS-path definitions
pub fn as_path_regexes<'a>(
    as_paths: impl IntoIterator<Item = &'a AsPath>,
    site: &str,
    warnings: &mut Warnings,
) -> Vec<String> {
    as_paths
        .into_iter()
        .filter_map(|as_path| checked_regex(&as_path.regex, site, warnings))
        .collect()
}
