//! Route-filter and prefix-list lowering

use crate::features::route_filter::domain::{
    PrefixList, RouteFilter, RouteFilterLineKey, RouteFilterLineKind,
};
use crate::shared::diagnostics::Warnings;
use crate::shared::models::{IpWildcard, Prefix, SubRange};
use crate::target::{PrefixRange, RouteFilterList, RouteFilterListLine};

const MAX_LENGTH: u32 = Prefix::MAX_LENGTH as u32;

fn length_range(start: u32, end: u32) -> SubRange {
    SubRange { start, end }
}

/// Lower one line to route-filter-list lines
///
/// Invalid bounds emit a red flag naming `site` and produce nothing.
pub fn lower_route_filter_line(
    key: &RouteFilterLineKey,
    site: &str,
    warnings: &mut Warnings,
) -> Vec<RouteFilterListLine> {
    let prefix = key.prefix;
    let length = u32::from(prefix.length());
    let invalid = |warnings: &mut Warnings, reason: &str| {
        warnings.red_flag(format!(
            "invalid route-filter line '{}' in {}: {}",
            key, site, reason
        ));
        Vec::new()
    };

    match key.kind {
        RouteFilterLineKind::Exact => vec![RouteFilterListLine::permit(
            prefix.into(),
            length_range(length, length),
        )],
        RouteFilterLineKind::Longer => {
            if length == MAX_LENGTH {
                return invalid(warnings, "no prefix is longer than a /32");
            }
            vec![RouteFilterListLine::permit(
                prefix.into(),
                length_range(length + 1, MAX_LENGTH),
            )]
        }
        RouteFilterLineKind::OrLonger => vec![RouteFilterListLine::permit(
            prefix.into(),
            length_range(length, MAX_LENGTH),
        )],
        RouteFilterLineKind::Upto(max) => {
            let max = u32::from(max);
            if max < length || max > MAX_LENGTH {
                return invalid(warnings, "upto bound outside the prefix length..=32");
            }
            vec![RouteFilterListLine::permit(
                prefix.into(),
                length_range(length, max),
            )]
        }
        RouteFilterLineKind::LengthRange { min, max } => {
            let (min, max) = (u32::from(min), u32::from(max));
            if min < length || min > max || max > MAX_LENGTH {
                return invalid(warnings, "length range outside the prefix length..=32");
            }
            vec![RouteFilterListLine::permit(
                prefix.into(),
                length_range(min, max),
            )]
        }
        RouteFilterLineKind::Through(end) => {
            if !prefix.contains_prefix(&end) {
                return invalid(warnings, "through prefix is not inside the line prefix");
            }
            (prefix.length()..=end.length())
                .filter_map(|len| end.truncate(len))
                .map(|p| {
                    let len = u32::from(p.length());
                    RouteFilterListLine::permit(p.into(), length_range(len, len))
                })
                .collect()
        }
        RouteFilterLineKind::AddressMask(mask) => vec![RouteFilterListLine::permit(
            IpWildcard::from_address_mask(prefix.network(), mask),
            length_range(length, length),
        )],
    }
}

/// Named list holding the lines that carry no then-actions
///
/// Lines with then-actions are lowered per line by the policy pass.
pub fn lower_route_filter(filter: &RouteFilter, warnings: &mut Warnings) -> RouteFilterList {
    let site = format!("route-filter '{}'", filter.name);
    let mut list = RouteFilterList::new(filter.name.clone());
    for line in filter.lines().filter(|l| l.thens.is_empty()) {
        for lowered in lower_route_filter_line(&line.key, &site, warnings) {
            list.add_line(lowered);
        }
    }
    tracing::debug!(filter = %filter.name, lines = list.lines.len(), "lowered route-filter");
    list
}

/// Exact-match list with one line per prefix
pub fn lower_prefix_list(list: &PrefixList) -> RouteFilterList {
    let mut lowered = RouteFilterList::new(list.name.clone());
    for prefix in &list.prefixes {
        let length = u32::from(prefix.length());
        lowered.add_line(RouteFilterListLine::permit(
            (*prefix).into(),
            length_range(length, length),
        ));
    }
    lowered
}

/// Prefix ranges for a `prefix-list-filter` match
///
/// Address-mask lines cannot be expressed as prefix ranges unless the mask
/// is contiguous; others are reported and dropped.
pub fn prefix_ranges_for(
    list: &PrefixList,
    kind: RouteFilterLineKind,
    site: &str,
    warnings: &mut Warnings,
) -> Vec<PrefixRange> {
    let mut ranges = Vec::new();
    for prefix in &list.prefixes {
        let key = RouteFilterLineKey::new(*prefix, kind);
        for line in lower_route_filter_line(&key, site, warnings) {
            match line.ip_wildcard.as_prefix() {
                Some(prefix) => ranges.push(PrefixRange {
                    prefix,
                    length_range: line.length_range,
                }),
                None => warnings.unimplemented(format!(
                    "non-contiguous mask {} in {} cannot be a prefix range",
                    line.ip_wildcard, site
                )),
            }
        }
    }
    ranges
}

/// Name of the single-line list emitted for a line that carries thens.
///
/// The route-filter name keeps equal keys of different filters in one term apart.
pub fn per_line_list_name(
    policy: &str,
    term: &str,
    route_filter: &str,
    key: &RouteFilterLineKey,
) -> String {
    format!("~{}~{}~{}~{}~", policy, term, route_filter, key)
}
