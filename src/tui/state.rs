// File: ./src/tui/state.rs
use crate::carousel::Carousel;
use crate::event_list::{EventList, EventListView};
use crate::model::{DataState, EventRecord};
use crate::tui::action::Action;
use std::path::PathBuf;

pub struct AppState {
    // Data
    pub data: DataState,
    pub data_file: PathBuf,

    // Components
    pub event_list: EventList,
    pub carousel: Carousel,

    // UI State
    pub selected_card: usize,
    pub show_full_help: bool,
    pub message: String,
}

impl AppState {
    pub fn new(data_file: PathBuf) -> Self {
        Self {
            data: DataState::Loading,
            data_file,
            event_list: EventList::new(),
            carousel: Carousel::new(),
            selected_card: 0,
            show_full_help: false,
            message: "Chargement en cours...".to_string(),
        }
    }

    /// Takes a value pushed by the data source and lets both components
    /// pick up a changed collection.
    pub fn set_data(&mut self, data: DataState) {
        self.data = data;
        if self.event_list.sync(&self.data) {
            self.selected_card = 0;
        }
        self.carousel.sync(&self.data);

        self.message = match &self.data {
            DataState::Loading => "Chargement en cours...".to_string(),
            DataState::Error(e) => format!("Erreur: {}", e),
            DataState::Ready(s) => format!(
                "{} événements chargés",
                s.events.as_ref().map_or(0, Vec::len)
            ),
        };
    }

    /// Events on the current page, in display order.
    pub fn visible_events(&self) -> Vec<&EventRecord> {
        match self.event_list.derive(&self.data) {
            EventListView::Ready(page) => page.cards.iter().map(|c| c.event).collect(),
            _ => Vec::new(),
        }
    }

    pub fn selected_event(&self) -> Option<&EventRecord> {
        self.visible_events().get(self.selected_card).copied()
    }

    /// The visible event whose detail overlay is open, if any.
    pub fn open_detail(&self) -> Option<&EventRecord> {
        self.visible_events()
            .into_iter()
            .find(|e| self.event_list.is_detail_open(&e.id))
    }

    pub fn apply(&mut self, action: Action) {
        // An open overlay captures input until it is closed
        if let Some(id) = self.open_detail().map(|e| e.id.clone()) {
            match action {
                Action::CloseDetail => self.event_list.close_detail(&id),
                Action::ToggleHelp => self.show_full_help = !self.show_full_help,
                _ => {}
            }
            return;
        }

        match action {
            Action::NextPage => {
                self.event_list.next_page(&self.data);
                self.selected_card = 0;
            }
            Action::PreviousPage => {
                self.event_list.previous_page(&self.data);
                self.selected_card = 0;
            }
            Action::GoToPage(page) => {
                self.event_list.set_page(page);
                self.selected_card = 0;
            }
            Action::CycleCategory => {
                self.event_list.cycle_type(&self.data);
                self.selected_card = 0;
            }
            Action::ClearCategory => {
                self.event_list.select_type(None);
                self.selected_card = 0;
            }
            Action::SelectNext => {
                let len = self.visible_events().len();
                if self.selected_card + 1 < len {
                    self.selected_card += 1;
                }
            }
            Action::SelectPrevious => {
                self.selected_card = self.selected_card.saturating_sub(1);
            }
            Action::OpenDetail => {
                if let Some(id) = self.selected_event().map(|e| e.id.clone()) {
                    self.event_list.open_detail(&id);
                }
            }
            Action::CloseDetail => {}
            Action::ToggleHelp => self.show_full_help = !self.show_full_help,
            Action::Reload => self.message = "Rechargement...".to_string(),
            Action::Quit => {}
        }
    }
}
