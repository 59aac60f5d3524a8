use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use super::model::Course;

/// Standard level tiers, in display order.
pub const SECTION_ORDER: [&str; 3] = ["Professional", "Specialty", "Expert"];

/// Bucket for courses with no section text.
pub const OTHER_SECTION: &str = "Other";

// ---------------------------------------------------------------------------
// SectionFilter – the active level filter
// ---------------------------------------------------------------------------

/// Level filter chosen by the user. `All` shows every bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SectionFilter {
    #[default]
    All,
    Only(String),
}

impl SectionFilter {
    /// Parse a filter value as sent by a client. Only the exact value `"All"`
    /// means no filtering; anything else is matched as a section label.
    pub fn parse(value: &str) -> Self {
        if value == "All" {
            SectionFilter::All
        } else {
            SectionFilter::Only(value.to_string())
        }
    }

    /// Options offered by the level selector: `All` followed by the standard tiers.
    pub fn options() -> Vec<SectionFilter> {
        std::iter::once(SectionFilter::All)
            .chain(SECTION_ORDER.iter().map(|s| SectionFilter::Only(s.to_string())))
            .collect()
    }

    /// Human label for the selector.
    pub fn label(&self) -> &str {
        match self {
            SectionFilter::All => "All Levels",
            SectionFilter::Only(section) => section,
        }
    }
}

impl fmt::Display for SectionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionFilter::All => write!(f, "All"),
            SectionFilter::Only(section) => write!(f, "{section}"),
        }
    }
}

// ---------------------------------------------------------------------------
// SectionGroups – courses bucketed by canonical section label
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionBucket {
    pub label: String,
    pub courses: Vec<Course>,
}

/// Section buckets of one zone. Buckets are kept in first-seen order until
/// [`SectionGroups::sorted_for_display`] is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionGroups {
    pub buckets: Vec<SectionBucket>,
}

impl SectionGroups {
    pub fn get(&self, label: &str) -> Option<&SectionBucket> {
        self.buckets.iter().find(|b| b.label == label)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.buckets.iter().map(|b| b.label.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of courses across buckets.
    pub fn course_count(&self) -> usize {
        self.buckets.iter().map(|b| b.courses.len()).sum()
    }

    /// Standard tiers first in [`SECTION_ORDER`], the rest alphabetically
    /// ignoring case and common accents.
    pub fn sorted_for_display(mut self) -> Self {
        self.buckets.sort_by(|a, b| display_order(&a.label, &b.label));
        self
    }

    /// Apply a level filter.
    ///
    /// A bucket whose label matches the filter is kept whole. Other buckets
    /// keep only courses whose own section matches; buckets left empty are
    /// dropped.
    pub fn filtered(&self, filter: &SectionFilter) -> SectionGroups {
        let wanted = match filter {
            SectionFilter::All => return self.clone(),
            SectionFilter::Only(section) => section.to_lowercase(),
        };

        let buckets = self
            .buckets
            .iter()
            .filter_map(|bucket| {
                if bucket.label.to_lowercase() == wanted {
                    return Some(bucket.clone());
                }
                let courses: Vec<Course> = bucket
                    .courses
                    .iter()
                    .filter(|c| !c.section.is_empty() && c.section.to_lowercase() == wanted)
                    .cloned()
                    .collect();
                (!courses.is_empty()).then(|| SectionBucket {
                    label: bucket.label.clone(),
                    courses,
                })
            })
            .collect();

        SectionGroups { buckets }
    }
}

fn display_order(a: &str, b: &str) -> Ordering {
    let rank = |label: &str| SECTION_ORDER.iter().position(|s| *s == label);
    match (rank(a), rank(b)) {
        (Some(ra), Some(rb)) => ra.cmp(&rb),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => sort_key(a)
            .cmp(&sort_key(b))
            .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
            .then_with(|| a.cmp(b)),
    }
}

/// Lowercase with common Latin accents folded onto their base letter, so
/// "Ärger" sorts among the A's.
fn sort_key(label: &str) -> String {
    label.to_lowercase().chars().map(fold_accent).collect()
}

fn fold_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'ď' | 'đ' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => 'e',
        'ğ' => 'g',
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' | 'ı' => 'i',
        'ł' | 'ľ' => 'l',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => 'o',
        'ŕ' | 'ř' => 'r',
        'ś' | 'š' | 'ş' => 's',
        'ť' | 'ţ' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Upper-case the first character, leave the rest untouched.
fn capitalize_first(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Group a zone's courses by canonical section label.
///
/// Labels are matched case-insensitively after trimming. The standard tiers
/// keep their canonical spelling; any other label is spelled the way its
/// first occurrence was, with the first letter capitalized.
pub fn classify_sections(courses: &[Course]) -> SectionGroups {
    let mut aliases: HashMap<String, String> = SECTION_ORDER
        .iter()
        .map(|s| (s.to_lowercase(), s.to_string()))
        .collect();
    let mut groups = SectionGroups::default();

    for course in courses {
        let raw = if course.section.is_empty() {
            OTHER_SECTION
        } else {
            course.section.trim()
        };
        let key = raw.to_lowercase();

        let label = aliases
            .entry(key)
            .or_insert_with(|| capitalize_first(raw))
            .clone();

        match groups.buckets.iter_mut().find(|b| b.label == label) {
            Some(bucket) => bucket.courses.push(course.clone()),
            None => groups.buckets.push(SectionBucket {
                label,
                courses: vec![course.clone()],
            }),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(title: &str, section: &str) -> Course {
        Course {
            id: title.to_string(),
            title: title.to_string(),
            section: section.to_string(),
            ..Course::default()
        }
    }

    fn titles(bucket: &SectionBucket) -> Vec<&str> {
        bucket.courses.iter().map(|c| c.title.as_str()).collect()
    }

    #[test]
    fn standard_labels_absorb_case_and_whitespace_variants() {
        let courses = [
            course("a", "Professional"),
            course("b", "professional "),
            course("c", "PROFESSIONAL"),
        ];
        let groups = classify_sections(&courses);
        assert_eq!(groups.labels(), ["Professional"]);
        assert_eq!(titles(&groups.buckets[0]), ["a", "b", "c"]);
    }

    #[test]
    fn first_seen_casing_wins_for_custom_labels() {
        let courses = [course("a", "beta"), course("b", "Beta"), course("c", "BETA")];
        let groups = classify_sections(&courses);
        assert_eq!(groups.labels(), ["Beta"]);
        assert_eq!(groups.course_count(), 3);
    }

    #[test]
    fn first_seen_keeps_inner_casing() {
        let courses = [course("a", "dataOps"), course("b", "DATAOPS")];
        assert_eq!(classify_sections(&courses).labels(), ["DataOps"]);
    }

    #[test]
    fn empty_section_lands_in_other() {
        let courses = [course("a", ""), course("b", "other")];
        let groups = classify_sections(&courses);
        assert_eq!(groups.labels(), ["Other"]);
        assert_eq!(titles(&groups.buckets[0]), ["a", "b"]);
    }

    #[test]
    fn whitespace_only_section_is_its_own_blank_bucket() {
        let groups = classify_sections(&[course("a", "   ")]);
        assert_eq!(groups.labels(), [""]);
    }

    #[test]
    fn display_order_puts_standard_tiers_first() {
        let courses = [
            course("a", "zeta"),
            course("b", "Expert"),
            course("c", "alpha"),
            course("d", "Professional"),
            course("e", "Beta"),
            course("f", "specialty"),
        ];
        let groups = classify_sections(&courses).sorted_for_display();
        assert_eq!(
            groups.labels(),
            ["Professional", "Specialty", "Expert", "Alpha", "Beta", "Zeta"]
        );
    }

    #[test]
    fn filter_all_is_identity() {
        let groups = classify_sections(&[course("a", "Expert"), course("b", "x")]);
        assert_eq!(groups.filtered(&SectionFilter::All), groups);
    }

    #[test]
    fn filter_drops_non_matching_buckets() {
        let courses = [
            course("a", "Professional"),
            course("b", "Expert"),
            course("c", "professional"),
        ];
        let groups = classify_sections(&courses).filtered(&SectionFilter::parse("Professional"));
        assert_eq!(groups.labels(), ["Professional"]);
        assert_eq!(titles(&groups.buckets[0]), ["a", "c"]);
        assert!(groups.get("Expert").is_none());
    }

    #[test]
    fn filter_with_no_match_is_empty() {
        let groups = classify_sections(&[course("a", "Expert")]);
        assert!(groups.filtered(&SectionFilter::parse("Specialty")).is_empty());
    }

    #[test]
    fn accented_labels_sort_with_their_base_letter() {
        let courses = [
            course("a", "Zeta"),
            course("b", "Ärger"),
            course("c", "beta"),
            course("d", "Alpha"),
            course("e", "Expert"),
        ];
        let groups = classify_sections(&courses).sorted_for_display();
        assert_eq!(groups.labels(), ["Expert", "Alpha", "Ärger", "Beta", "Zeta"]);
    }

    #[test]
    fn filter_parse_recognises_all() {
        assert_eq!(SectionFilter::parse("All"), SectionFilter::All);
        assert_eq!(SectionFilter::parse("all"), SectionFilter::Only("all".into()));
        assert_eq!(
            SectionFilter::parse(" Expert"),
            SectionFilter::Only(" Expert".into())
        );
        assert_eq!(
            SectionFilter::parse("Expert"),
            SectionFilter::Only("Expert".into())
        );
        assert_eq!(SectionFilter::options().len(), 4);
    }
}
