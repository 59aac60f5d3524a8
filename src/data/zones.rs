use std::collections::BTreeMap;

use super::model::Course;
use super::sections::{classify_sections, SectionGroups};

/// Synthetic zone holding every course.
pub const ALL_TRAININGS: &str = "All Trainings";

/// Zone for courses without a knowledge zone.
pub const OTHER_ZONE: &str = "Other";

const ALL_TRAININGS_DESCRIPTION: &str =
    "Browse our complete catalog of analytics training courses across all knowledge areas.";

// ---------------------------------------------------------------------------
// ZoneRegistry – courses partitioned by knowledge zone
// ---------------------------------------------------------------------------

/// Courses grouped by knowledge zone, plus the display order of zones.
///
/// The aggregate zone is always present and always first; the remaining
/// zones follow in byte-wise order. Within a zone, courses keep input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneRegistry {
    zones: Vec<String>,
    courses_by_zone: BTreeMap<String, Vec<Course>>,
    descriptions: BTreeMap<String, String>,
}

impl Default for ZoneRegistry {
    fn default() -> Self {
        group_by_zone(&[])
    }
}

impl ZoneRegistry {
    /// Zone names in display order.
    pub fn zones(&self) -> &[String] {
        &self.zones
    }

    pub fn contains(&self, zone: &str) -> bool {
        self.courses_by_zone.contains_key(zone)
    }

    /// Courses in `zone`, empty for an unknown zone.
    pub fn courses_in(&self, zone: &str) -> &[Course] {
        self.courses_by_zone
            .get(zone)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Blurb shown above a zone's listing.
    pub fn description(&self, zone: &str) -> &str {
        self.descriptions.get(zone).map(String::as_str).unwrap_or("")
    }

    /// Section buckets of one zone, in first-seen order.
    pub fn sections(&self, zone: &str) -> SectionGroups {
        classify_sections(self.courses_in(zone))
    }

    /// Number of zones including the aggregate.
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

/// Partition courses by knowledge zone.
pub fn group_by_zone(courses: &[Course]) -> ZoneRegistry {
    let mut courses_by_zone: BTreeMap<String, Vec<Course>> = BTreeMap::new();
    for course in courses {
        let zone = if course.knowledge_zone.is_empty() {
            OTHER_ZONE
        } else {
            course.knowledge_zone.as_str()
        };
        courses_by_zone
            .entry(zone.to_string())
            .or_default()
            .push(course.clone());
    }

    let mut descriptions: BTreeMap<String, String> = courses_by_zone
        .iter()
        .filter(|(zone, _)| zone.as_str() != ALL_TRAININGS)
        .map(|(zone, list)| {
            let text = format!(
                "Explore {} training courses in the {zone} knowledge area.",
                list.len()
            );
            (zone.clone(), text)
        })
        .collect();
    descriptions.insert(ALL_TRAININGS.to_string(), ALL_TRAININGS_DESCRIPTION.to_string());

    // BTreeMap keys come out sorted byte-wise, which is the order we want.
    let zones: Vec<String> = std::iter::once(ALL_TRAININGS.to_string())
        .chain(
            courses_by_zone
                .keys()
                .filter(|zone| zone.as_str() != ALL_TRAININGS)
                .cloned(),
        )
        .collect();

    // A source zone literally named like the aggregate is shadowed by it.
    courses_by_zone.insert(ALL_TRAININGS.to_string(), courses.to_vec());

    ZoneRegistry {
        zones,
        courses_by_zone,
        descriptions,
    }
}
