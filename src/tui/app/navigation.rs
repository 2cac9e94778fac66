//! Selection movement over the loaded items.

use bubbletea_rs::Cmd;

use super::ReviewApp;
use crate::tui::messages::AppMsg;

impl ReviewApp {
    /// Dispatches navigation messages to their handlers.
    pub(super) fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::CursorUp => self.set_cursor(self.cursor.saturating_sub(1)),
            AppMsg::CursorDown => self.set_cursor(self.cursor.saturating_add(1)),
            AppMsg::Home => self.set_cursor(0),
            AppMsg::End => self.set_cursor(self.item_count().saturating_sub(1)),
            AppMsg::NextPending => self.select_next_pending(),
            _ => {}
        }
        None
    }

    fn item_count(&self) -> usize {
        self.store.snapshot().items().len()
    }

    fn set_cursor(&mut self, position: usize) {
        self.cursor = position.min(self.item_count().saturating_sub(1));
        self.notice = None;
    }

    /// Keeps the cursor inside the current item range.
    pub(super) fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.item_count().saturating_sub(1));
    }

    fn select_next_pending(&mut self) {
        let snapshot = self.store.snapshot();
        let position = snapshot
            .next_pending()
            .and_then(|item| snapshot.position_of(item.key()));

        match position {
            Some(position) => self.set_cursor(position),
            None => self.notice = Some("No pending drafts left to review".to_owned()),
        }
    }
}
