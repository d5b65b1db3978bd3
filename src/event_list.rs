// File: ./src/event_list.rs
// Sorted, filtered and paginated view over the full event collection
use crate::model::{DataSnapshot, DataState, EventRecord};
use std::collections::HashSet;
use std::sync::{Arc, Weak};

pub const PAGE_SIZE: usize = 9;

/// Events in ascending date order. Equal dates keep their input order.
pub fn sort_by_date(events: &[EventRecord]) -> Vec<&EventRecord> {
    let mut sorted: Vec<&EventRecord> = events.iter().collect();
    sorted.sort_by_key(|e| e.date);
    sorted
}

pub fn filter_by_type<'a>(
    sorted: &[&'a EventRecord],
    selected_type: Option<&str>,
) -> Vec<&'a EventRecord> {
    sorted
        .iter()
        .copied()
        .filter(|e| selected_type.is_none_or(|t| e.event_type == t))
        .collect()
}

pub fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE)
}

/// The 1-based `page` of `items`. Pages past the end are empty.
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE);
    if page == 0 || start >= items.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}

/// Distinct categories across the unfiltered collection, in order of first appearance.
pub fn available_types(events: &[EventRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    events
        .iter()
        .filter(|e| seen.insert(e.event_type.as_str()))
        .map(|e| e.event_type.clone())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListViewState {
    pub selected_type: Option<String>,
    pub current_page: usize,
}

impl Default for ListViewState {
    fn default() -> Self {
        Self {
            selected_type: None,
            current_page: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventCard<'a> {
    pub event: &'a EventRecord,
    pub detail_open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControl {
    pub number: usize,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventPage<'a> {
    pub cards: Vec<EventCard<'a>>,
    pub pages: Vec<PageControl>,
    pub available_types: Vec<String>,
    pub selected_type: Option<&'a str>,
    pub current_page: usize,
    pub total_filtered: usize,
}

impl EventPage<'_> {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EventListView<'a> {
    Error,
    Loading,
    Ready(EventPage<'a>),
}

/// View state of the event list plus the per-card detail overlays.
///
/// The component never reads shared state: callers hand it the current
/// [`DataState`] on every derive, and call [`EventList::sync`] whenever the
/// source pushes a new value so a new collection starts from page 1.
#[derive(Debug, Default)]
pub struct EventList {
    state: ListViewState,
    open_details: HashSet<String>,
    seen: Option<Weak<DataSnapshot>>,
}

impl EventList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ListViewState {
        &self.state
    }

    /// Resets view state when `data` carries a different collection than the
    /// last one seen. Returns whether a reset happened.
    pub fn sync(&mut self, data: &DataState) -> bool {
        let Some(snapshot) = data.snapshot() else {
            return false;
        };
        let same = self
            .seen
            .as_ref()
            .is_some_and(|w| Weak::ptr_eq(w, &Arc::downgrade(snapshot)));
        if same {
            return false;
        }

        let first = self.seen.is_none();
        self.seen = Some(Arc::downgrade(snapshot));
        if !first {
            log::debug!("Event collection replaced, resetting list view state");
        }
        self.state = ListViewState::default();
        self.open_details.clear();
        true
    }

    pub fn derive<'a>(&'a self, data: &'a DataState) -> EventListView<'a> {
        let events = match data {
            DataState::Error(_) => return EventListView::Error,
            DataState::Loading => return EventListView::Loading,
            DataState::Ready(snapshot) => match snapshot.events.as_deref() {
                Some(events) => events,
                None => return EventListView::Loading,
            },
        };

        let sorted = sort_by_date(events);
        let filtered = filter_by_type(&sorted, self.state.selected_type.as_deref());
        let current_page = self.state.current_page;

        let cards = page_slice(&filtered, current_page)
            .iter()
            .map(|&event| EventCard {
                event,
                detail_open: self.open_details.contains(&event.id),
            })
            .collect();

        let pages = (1..=page_count(filtered.len()))
            .map(|number| PageControl {
                number,
                active: number == current_page,
            })
            .collect();

        EventListView::Ready(EventPage {
            cards,
            pages,
            available_types: available_types(events),
            selected_type: self.state.selected_type.as_deref(),
            current_page,
            total_filtered: filtered.len(),
        })
    }

    /// Category selector callback. `None` is the "no filter" entry.
    pub fn select_type(&mut self, selected_type: Option<String>) {
        log::debug!("Category selected: {:?}", selected_type);
        self.state.selected_type = selected_type;
        self.state.current_page = 1;
    }

    /// Page control callback. Page numbers start at 1; 0 is ignored.
    pub fn set_page(&mut self, page: usize) {
        if page >= 1 {
            self.state.current_page = page;
        }
    }

    pub fn next_page(&mut self, data: &DataState) {
        let count = self.filtered_page_count(data);
        if self.state.current_page < count {
            self.state.current_page += 1;
        }
    }

    pub fn previous_page(&mut self, data: &DataState) {
        let count = self.filtered_page_count(data);
        if count > 0 && self.state.current_page > 1 {
            self.state.current_page = (self.state.current_page - 1).min(count);
        }
    }

    /// Steps the selector through "no filter" and every available category.
    pub fn cycle_type(&mut self, data: &DataState) {
        let types = data
            .snapshot()
            .and_then(|s| s.events.as_deref())
            .map(available_types)
            .unwrap_or_default();

        let next = match &self.state.selected_type {
            None => types.first().cloned(),
            Some(current) => types
                .iter()
                .position(|t| t == current)
                .and_then(|idx| types.get(idx + 1))
                .cloned(),
        };
        self.select_type(next);
    }

    pub fn open_detail(&mut self, id: &str) {
        self.open_details.insert(id.to_string());
    }

    pub fn close_detail(&mut self, id: &str) {
        self.open_details.remove(id);
    }

    pub fn is_detail_open(&self, id: &str) -> bool {
        self.open_details.contains(id)
    }

    fn filtered_page_count(&self, data: &DataState) -> usize {
        let Some(events) = data.snapshot().and_then(|s| s.events.as_deref()) else {
            return 0;
        };
        let sorted = sort_by_date(events);
        page_count(filter_by_type(&sorted, self.state.selected_type.as_deref()).len())
    }
}
