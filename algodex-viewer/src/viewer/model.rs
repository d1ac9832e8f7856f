//! Browser state: which tab is open, which entry is selected, how far the
//! detail pane is scrolled
//!
//! The model is pure state plus transitions; it never touches the terminal.
//! Rendering reads it, the event loop mutates it.

use algodex_catalog::{Algorithm, Catalog, Pattern};

/// Which entry collection the list pane shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Algorithms,
    Patterns,
}

/// Browser state over a loaded catalogue
#[derive(Debug)]
pub struct Model {
    catalog: Catalog,
    tab: Tab,
    selected_algorithm: usize,
    selected_pattern: usize,
    detail_scroll: u16,
}

impl Model {
    pub fn new(catalog: Catalog, tab: Tab) -> Self {
        Model {
            catalog,
            tab,
            selected_algorithm: 0,
            selected_pattern: 0,
            detail_scroll: 0,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// Switch between the algorithm list and the pattern collection.
    /// The per-tab selection survives the switch; the scroll does not.
    pub fn toggle_tab(&mut self) {
        self.tab = match self.tab {
            Tab::Algorithms => Tab::Patterns,
            Tab::Patterns => Tab::Algorithms,
        };
        self.detail_scroll = 0;
    }

    /// Number of entries in the current tab
    pub fn len(&self) -> usize {
        match self.tab {
            Tab::Algorithms => self.catalog.algorithms().len(),
            Tab::Patterns => self.catalog.patterns().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index of the selected entry in the current tab
    pub fn selected(&self) -> usize {
        match self.tab {
            Tab::Algorithms => self.selected_algorithm,
            Tab::Patterns => self.selected_pattern,
        }
    }

    pub fn select_next(&mut self) {
        let len = self.len();
        if len == 0 {
            return;
        }
        let slot = self.selected_slot();
        if *slot + 1 < len {
            *slot += 1;
            self.detail_scroll = 0;
        }
    }

    pub fn select_previous(&mut self) {
        let slot = self.selected_slot();
        if *slot > 0 {
            *slot -= 1;
            self.detail_scroll = 0;
        }
    }

    fn selected_slot(&mut self) -> &mut usize {
        match self.tab {
            Tab::Algorithms => &mut self.selected_algorithm,
            Tab::Patterns => &mut self.selected_pattern,
        }
    }

    pub fn detail_scroll(&self) -> u16 {
        self.detail_scroll
    }

    pub fn scroll_down(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
    }

    /// Entry names for the list pane, in tab order
    pub fn entry_names(&self) -> Vec<String> {
        match self.tab {
            Tab::Algorithms => self
                .catalog
                .algorithms()
                .iter()
                .map(|a| a.name.clone())
                .collect(),
            Tab::Patterns => self
                .catalog
                .patterns_by_number()
                .iter()
                .map(|p| format!("{}. {}", p.number, p.title))
                .collect(),
        }
    }

    /// The selected algorithm, if the algorithms tab is open
    pub fn current_algorithm(&self) -> Option<&Algorithm> {
        match self.tab {
            Tab::Algorithms => self.catalog.algorithms().get(self.selected_algorithm),
            Tab::Patterns => None,
        }
    }

    /// The selected pattern, if the patterns tab is open
    pub fn current_pattern(&self) -> Option<&Pattern> {
        match self.tab {
            Tab::Patterns => self
                .catalog
                .patterns_by_number()
                .get(self.selected_pattern)
                .copied(),
            Tab::Algorithms => None,
        }
    }
}
