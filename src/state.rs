use crate::color::ZoneColors;
use crate::data::catalog::{Catalog, ZoneView, DEFAULT_RELATED_LIMIT};
use crate::data::filter::resolve_zone;
use crate::data::model::Course;
use crate::data::sections::SectionFilter;
use crate::data::zones::{ZoneRegistry, ALL_TRAININGS};
use crate::progress::ViewedTrainings;

// ---------------------------------------------------------------------------
// Selection – which zone tab and level filter are active
// ---------------------------------------------------------------------------

/// User actions that change the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionAction {
    /// A zone tab was clicked.
    SelectZone(String),
    /// The `tab` URL parameter was read (on load or history navigation).
    ApplyTabParam(Option<String>),
    SetSectionFilter(SectionFilter),
    /// The catalog was rebuilt from a fresh load.
    Reloaded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub selected_zone: String,
    pub section_filter: SectionFilter,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            selected_zone: ALL_TRAININGS.to_string(),
            section_filter: SectionFilter::All,
        }
    }
}

impl Selection {
    /// Apply one action against the current registry.
    pub fn apply(self, action: SelectionAction, registry: &ZoneRegistry) -> Selection {
        match action {
            SelectionAction::SelectZone(zone) if registry.contains(&zone) => Selection {
                selected_zone: zone,
                ..self
            },
            SelectionAction::SelectZone(_) => self,
            SelectionAction::ApplyTabParam(tab) => Selection {
                selected_zone: resolve_zone(tab.as_deref(), registry.zones()),
                ..self
            },
            SelectionAction::SetSectionFilter(section_filter) => Selection {
                section_filter,
                ..self
            },
            // A selection only outlives a reload if its zone still exists.
            SelectionAction::Reloaded if registry.contains(&self.selected_zone) => self,
            SelectionAction::Reloaded => Selection {
                selected_zone: resolve_zone(None, registry.zones()),
                section_filter: SectionFilter::All,
            },
        }
    }

    /// Value of the `tab` URL parameter for this selection; the aggregate
    /// zone has none.
    pub fn tab_param(&self) -> Option<&str> {
        (self.selected_zone != ALL_TRAININGS).then_some(self.selected_zone.as_str())
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Current catalog; empty until a source loads.
    pub catalog: Catalog,

    pub selection: Selection,

    /// Listing for the current selection (cached).
    pub view: ZoneView,

    /// Course opened in the detail view.
    pub open_course: Option<Course>,

    pub progress: ViewedTrainings,

    /// Accent colour per zone tab.
    pub zone_colors: ZoneColors,

    pub related_limit: usize,

    /// Take the hero copy from the first course on every load.
    pub hero_from_first_course: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        let catalog = Catalog::default();
        let selection = Selection::default();
        let view = catalog.view_of(&selection.selected_zone, &selection.section_filter);
        let zone_colors = ZoneColors::new(catalog.registry.zones());
        Self {
            catalog,
            selection,
            view,
            open_course: None,
            progress: ViewedTrainings::in_memory(),
            zone_colors,
            related_limit: DEFAULT_RELATED_LIMIT,
            hero_from_first_course: false,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a freshly loaded catalog, keeping the selection when possible.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        let catalog = if self.hero_from_first_course {
            catalog.with_hero_from_first_course()
        } else {
            catalog
        };

        self.status_message = catalog
            .fallback
            .then(|| "No course data could be loaded.".to_string());
        self.zone_colors = ZoneColors::new(catalog.registry.zones());

        // Ids are only stable within one load.
        self.open_course = None;
        self.catalog = catalog;
        self.dispatch(SelectionAction::Reloaded);
    }

    /// Apply a selection action and refresh the cached view.
    pub fn dispatch(&mut self, action: SelectionAction) {
        let selection = std::mem::take(&mut self.selection);
        self.selection = selection.apply(action, &self.catalog.registry);
        self.refresh_view();
    }

    fn refresh_view(&mut self) {
        self.view = self
            .catalog
            .view_of(&self.selection.selected_zone, &self.selection.section_filter);
    }

    /// Open a course's detail view and record it as viewed.
    pub fn open_course(&mut self, course: Course) {
        if let Err(e) = self.progress.mark_viewed(&course.id) {
            log::error!("Failed to record viewed training: {e}");
            self.status_message = Some(format!("Error: {e}"));
        }
        self.open_course = Some(course);
    }

    pub fn close_course(&mut self) {
        self.open_course = None;
    }

    /// Related trainings of the open course.
    pub fn related_to_open(&self) -> Vec<&Course> {
        match &self.open_course {
            Some(course) => self.catalog.related(course, self.related_limit),
            None => Vec::new(),
        }
    }

    pub fn clear_progress(&mut self) {
        if let Err(e) = self.progress.clear() {
            log::error!("Failed to clear viewed trainings: {e}");
            self.status_message = Some(format!("Error: {e}"));
        }
    }
}
