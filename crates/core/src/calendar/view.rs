use crate::cache::{LayoutCache, LayoutKey};

use super::filter::EventFilter;
use super::layout::{select_layout, Layout, LayoutOptions};
use super::types::{Event, ViewMode};

/// The calendar page state: current events plus the filter and view-mode
/// surfaces.
///
/// Every call to [`CalendarView::layout`] reflects the current inputs.
/// With a cache attached, unchanged inputs are served from the memo
/// instead of being recomputed.
#[derive(Debug, Default)]
pub struct CalendarView {
    events: Vec<Event>,
    filter: EventFilter,
    view: ViewMode,
    options: LayoutOptions,
    cache: Option<LayoutCache>,
}

impl CalendarView {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events,
            ..Self::default()
        }
    }

    pub fn with_view_mode(mut self, view: ViewMode) -> Self {
        self.view = view;
        self
    }

    pub fn with_filter(mut self, filter: EventFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_options(mut self, options: LayoutOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_cache(mut self, cache: LayoutCache) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn filter(&self) -> EventFilter {
        self.filter
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view
    }

    /// Replaces the events, e.g. after the source fetched a new window.
    pub fn set_events(&mut self, events: Vec<Event>) {
        self.events = events;
    }

    pub fn set_view_mode(&mut self, view: ViewMode) {
        self.view = view;
    }

    pub fn set_filter(&mut self, filter: EventFilter) {
        self.filter = filter;
    }

    pub fn set_show_tasks(&mut self, show: bool) {
        self.filter.show_tasks = show;
    }

    pub fn set_show_meetings(&mut self, show: bool) {
        self.filter.show_meetings = show;
    }

    /// Returns the display list for the current state.
    pub fn layout(&mut self) -> Layout {
        let visible = self.filter.apply(&self.events);

        let Some(cache) = self.cache.as_mut() else {
            return select_layout(&visible, self.view, &self.options);
        };

        let key = LayoutKey::new(&visible, self.view, self.options);
        if let Some(layout) = cache.get(&key) {
            tracing::trace!(view = %self.view, "Layout served from cache");
            return layout;
        }

        let layout = select_layout(&visible, self.view, &self.options);
        cache.insert(key, layout.clone());
        layout
    }
}
