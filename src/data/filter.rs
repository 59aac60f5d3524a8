use super::zones::ALL_TRAININGS;

// ---------------------------------------------------------------------------
// Tab resolution: requested tab string → known zone
// ---------------------------------------------------------------------------

/// Resolve a requested tab (e.g. the `tab` URL parameter) to a known zone.
///
/// Tie-break order:
/// 1. exact match
/// 2. case-insensitive match, returned in the zone's own casing
/// 3. substring match in either direction, ignoring case, first in `known` order
/// 4. the first known zone
///
/// Never fails. With no known zones at all the aggregate name is returned.
/// Resolving an already-resolved name returns it unchanged.
pub fn resolve_zone(requested: Option<&str>, known: &[String]) -> String {
    let Some(default) = known.first() else {
        return ALL_TRAININGS.to_string();
    };
    let tab = match requested {
        Some(tab) if !tab.is_empty() => tab,
        _ => return default.clone(),
    };

    if let Some(exact) = known.iter().find(|zone| zone.as_str() == tab) {
        return exact.clone();
    }

    let tab_lower = tab.to_lowercase();
    if let Some(folded) = known.iter().find(|zone| zone.to_lowercase() == tab_lower) {
        return folded.clone();
    }

    known
        .iter()
        .find(|zone| {
            let zone_lower = zone.to_lowercase();
            zone_lower.contains(&tab_lower) || tab_lower.contains(&zone_lower)
        })
        .unwrap_or(default)
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zones(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn known() -> Vec<String> {
        zones(&[
            "All Trainings",
            "AI",
            "Analytics Framework",
            "Media Analytics",
            "Pricing",
            "Trade & Promotion",
        ])
    }

    #[test]
    fn exact_match_wins() {
        assert_eq!(resolve_zone(Some("Pricing"), &known()), "Pricing");
    }

    #[test]
    fn case_insensitive_match_keeps_canonical_casing() {
        assert_eq!(resolve_zone(Some("pricing"), &known()), "Pricing");
        assert_eq!(resolve_zone(Some("ai"), &known()), "AI");
    }

    #[test]
    fn case_insensitive_beats_substring() {
        // "ai" also occurs inside "All Trainings", which precedes "AI".
        assert_eq!(resolve_zone(Some("aI"), &known()), "AI");
    }

    #[test]
    fn substring_match_in_either_direction() {
        assert_eq!(resolve_zone(Some("Trade"), &known()), "Trade & Promotion");
        assert_eq!(resolve_zone(Some("Pricing Strategy"), &known()), "Pricing");
    }

    #[test]
    fn substring_match_takes_first_in_known_order() {
        assert_eq!(resolve_zone(Some("Analytics"), &known()), "Analytics Framework");
    }

    #[test]
    fn no_match_falls_back_to_first_zone() {
        assert_eq!(resolve_zone(Some("Quantum"), &known()), "All Trainings");
        assert_eq!(resolve_zone(None, &known()), "All Trainings");
        assert_eq!(resolve_zone(Some(""), &known()), "All Trainings");
    }

    #[test]
    fn empty_known_zones_yield_the_aggregate_sentinel() {
        assert_eq!(resolve_zone(Some(""), &[]), ALL_TRAININGS);
        assert_eq!(resolve_zone(Some("Pricing"), &[]), ALL_TRAININGS);
        assert_eq!(resolve_zone(None, &[]), ALL_TRAININGS);
    }

    #[test]
    fn resolving_is_idempotent() {
        let known = known();
        for input in ["", "ai", "AI", "trade", "x", "media analytics!", "Pricing", "all"] {
            let once = resolve_zone(Some(input), &known);
            let twice = resolve_zone(Some(once.as_str()), &known);
            assert_eq!(once, twice, "input {input:?}");
        }
        let once = resolve_zone(Some("x"), &[]);
        assert_eq!(resolve_zone(Some(once.as_str()), &[]), once);
    }
}
