//! Wrapping list navigation for menus.

use ratatui::widgets::ListState;

/// Navigation helpers on `ListState` used by menu overlays.
pub trait ListStateExt {
    /// Select the previous row, wrapping from the first row to the last.
    fn select_previous_wrap(&mut self, total_items: usize);

    /// Select the next row, wrapping from the last row to the first.
    fn select_next_wrap(&mut self, total_items: usize);

    /// Jump to the first row.
    fn select_first_item(&mut self, total_items: usize);

    /// Jump to the last row.
    fn select_last_item(&mut self, total_items: usize);
}

impl ListStateExt for ListState {
    fn select_previous_wrap(&mut self, total_items: usize) {
        if total_items == 0 {
            return;
        }
        let current = self.selected().unwrap_or(0).min(total_items - 1);
        self.select(Some(if current == 0 { total_items - 1 } else { current - 1 }));
    }

    fn select_next_wrap(&mut self, total_items: usize) {
        if total_items == 0 {
            return;
        }
        let next = self.selected().map_or(0, |current| current + 1);
        self.select(Some(if next >= total_items { 0 } else { next }));
    }

    fn select_first_item(&mut self, total_items: usize) {
        if total_items > 0 {
            self.select(Some(0));
        }
    }

    fn select_last_item(&mut self, total_items: usize) {
        if total_items > 0 {
            self.select(Some(total_items - 1));
        }
    }
}
