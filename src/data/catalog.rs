use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::filter::resolve_zone;
use super::loader::{load_file, LoadError};
use super::model::Course;
use super::normalize::normalize_rows;
use super::sections::{SectionBucket, SectionFilter};
use super::zones::{group_by_zone, ZoneRegistry};

/// Related trainings shown under a course, unless configured otherwise.
pub const DEFAULT_RELATED_LIMIT: usize = 4;

// ---------------------------------------------------------------------------
// HeroContent – banner copy sent alongside the course list
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub title: String,
    pub description: String,
    pub primary_button_text: String,
    pub secondary_button_text: String,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            title: "Master Data Analytics at Your Own Pace".to_string(),
            description: "Join our comprehensive learning platform designed to transform \
                beginners into data analytics professionals through structured courses, \
                hands-on projects, and expert mentorship."
                .to_string(),
            primary_button_text: "Browse Courses".to_string(),
            secondary_button_text: "Free Trial".to_string(),
        }
    }
}

impl HeroContent {
    /// Default copy, with title and description taken from the first course
    /// when it has a title.
    pub fn from_first_course(courses: &[Course]) -> Self {
        let mut hero = HeroContent::default();
        if let Some(first) = courses.first().filter(|c| !c.title.is_empty()) {
            hero.title = first.title.clone();
            if !first.description.is_empty() {
                hero.description = first.description.clone();
            }
        }
        hero
    }
}

// ---------------------------------------------------------------------------
// ZoneView – one zone's listing after tab and level filter resolution
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneView {
    pub zones: Vec<String>,
    pub selected_zone: String,
    pub description: String,
    pub section_filter: String,
    /// Filtered buckets in display order.
    pub sections: Vec<SectionBucket>,
}

// ---------------------------------------------------------------------------
// Catalog – everything derived from one load
// ---------------------------------------------------------------------------

/// The result of one data load. Rebuilt from scratch on every load.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub courses: Vec<Course>,
    pub hero: HeroContent,
    pub registry: ZoneRegistry,
    /// Set when the source could not be loaded and defaults were substituted.
    pub fallback: bool,
}

impl Catalog {
    pub fn from_courses(courses: Vec<Course>) -> Self {
        let registry = group_by_zone(&courses);
        Catalog {
            courses,
            hero: HeroContent::default(),
            registry,
            fallback: false,
        }
    }

    /// Load, normalize and group the courses of one source file.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let rows = load_file(path)?;
        let catalog = Catalog::from_courses(normalize_rows(rows));
        log::info!(
            "Loaded {} courses in {} zones from {}",
            catalog.courses.len(),
            catalog.registry.len() - 1,
            path.display()
        );
        for (slug, ids) in catalog.slug_collisions() {
            log::warn!("Courses {ids:?} share the slug {slug:?}; only the first is reachable");
        }
        Ok(catalog)
    }

    /// Like [`Catalog::load`], but a failed load yields an empty catalog
    /// with the default hero copy.
    pub fn load_or_default(path: &Path) -> Self {
        match Catalog::load(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                log::error!("Error loading academy data: {e}");
                Catalog {
                    fallback: true,
                    ..Catalog::default()
                }
            }
        }
    }

    /// Replace the hero copy with the first course's title and description.
    pub fn with_hero_from_first_course(mut self) -> Self {
        self.hero = HeroContent::from_first_course(&self.courses);
        self
    }

    /// First course whose title slug equals `slug`.
    pub fn find_by_slug(&self, slug: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.slug() == slug)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Slugs shared by more than one course, with the ids sharing them.
    pub fn slug_collisions(&self) -> Vec<(String, Vec<String>)> {
        let mut by_slug: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for course in &self.courses {
            by_slug.entry(course.slug()).or_default().push(course.id.clone());
        }
        by_slug.into_iter().filter(|(_, ids)| ids.len() > 1).collect()
    }

    /// Other courses in the same knowledge zone or the same section, in
    /// catalog order, at most `limit`.
    pub fn related(&self, course: &Course, limit: usize) -> Vec<&Course> {
        self.courses
            .iter()
            .filter(|c| c.id != course.id)
            .filter(|c| {
                (!c.knowledge_zone.is_empty() && c.knowledge_zone == course.knowledge_zone)
                    || (!c.section.is_empty() && c.section == course.section)
            })
            .take(limit)
            .collect()
    }

    /// Resolve a requested tab and build the filtered, ordered listing.
    pub fn zone_view(&self, tab: Option<&str>, filter: &SectionFilter) -> ZoneView {
        let zones = self.registry.zones().to_vec();
        let selected_zone = resolve_zone(tab, &zones);
        self.view_of(&selected_zone, filter)
    }

    /// Listing of a zone that is already resolved.
    pub fn view_of(&self, zone: &str, filter: &SectionFilter) -> ZoneView {
        let sections = self
            .registry
            .sections(zone)
            .filtered(filter)
            .sorted_for_display();
        ZoneView {
            zones: self.registry.zones().to_vec(),
            selected_zone: zone.to_string(),
            description: self.registry.description(zone).to_string(),
            section_filter: filter.to_string(),
            sections: sections.buckets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: &str, title: &str, zone: &str, section: &str) -> Course {
        Course {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            knowledge_zone: zone.to_string(),
            section: section.to_string(),
        }
    }

    fn sample() -> Catalog {
        Catalog::from_courses(vec![
            course("0", "Pricing 101", "Pricing", "Professional"),
            course("1", "Promo Lift", "Trade", "Expert"),
            course("2", "Pricing Deep Dive", "Pricing", "Expert"),
            course("3", "Prompting", "AI", "Professional"),
            course("4", "Pricing 101", "Pricing", "Specialty"),
        ])
    }

    #[test]
    fn slug_lookup_returns_first_match() {
        let catalog = sample();
        assert_eq!(catalog.find_by_slug("pricing-101").unwrap().id, "0");
        assert!(catalog.find_by_slug("missing").is_none());
    }

    #[test]
    fn collisions_are_reported() {
        let collisions = sample().slug_collisions();
        assert_eq!(
            collisions,
            vec![("pricing-101".to_string(), vec!["0".to_string(), "4".to_string()])]
        );
    }

    #[test]
    fn related_shares_zone_or_section() {
        let catalog = sample();
        let base = catalog.find_by_id("2").unwrap();
        let related: Vec<&str> = catalog
            .related(base, DEFAULT_RELATED_LIMIT)
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(related, ["0", "1", "4"]);
    }

    #[test]
    fn related_respects_limit_and_ignores_blank_fields() {
        let catalog = Catalog::from_courses(vec![
            course("0", "A", "", ""),
            course("1", "B", "", ""),
            course("2", "C", "X", "Expert"),
            course("3", "D", "X", "Expert"),
            course("4", "E", "X", "Expert"),
        ]);
        assert!(catalog.related(&catalog.courses[0], 4).is_empty());
        assert_eq!(catalog.related(&catalog.courses[2], 1).len(), 1);
    }

    #[test]
    fn hero_from_first_course_needs_a_title() {
        let hero = HeroContent::from_first_course(&[course("0", "", "", "")]);
        assert_eq!(hero, HeroContent::default());

        let mut first = course("0", "Forecasting", "", "");
        let hero = HeroContent::from_first_course(&[first.clone()]);
        assert_eq!(hero.title, "Forecasting");
        assert_eq!(hero.description, HeroContent::default().description);

        first.description = "Predict demand".into();
        let hero = HeroContent::from_first_course(&[first]);
        assert_eq!(hero.description, "Predict demand");
    }

    #[test]
    fn zone_view_resolves_tab_and_filters() {
        let view = sample().zone_view(Some("pricing"), &SectionFilter::parse("Expert"));
        assert_eq!(view.selected_zone, "Pricing");
        assert_eq!(view.section_filter, "Expert");
        assert_eq!(view.sections.len(), 1);
        assert_eq!(view.sections[0].label, "Expert");
        assert_eq!(view.sections[0].courses[0].id, "2");
    }

    #[test]
    fn missing_source_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::load_or_default(&dir.path().join("academy.xlsx"));
        assert!(catalog.fallback);
        assert!(catalog.courses.is_empty());
        assert_eq!(catalog.hero, HeroContent::default());
        assert_eq!(catalog.registry.zones(), ["All Trainings"]);
    }
}
