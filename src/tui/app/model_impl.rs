//! `Model` trait implementation for the review TUI application.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};

use super::ReviewApp;
use crate::review::FetchCoordinator;
use crate::tui::input::map_key_to_message;
use crate::tui::messages::AppMsg;

impl Model for ReviewApp {
    fn init() -> (Self, Option<Cmd>) {
        let (width, height) = crate::tui::storage::initial_terminal_size();
        let coordinator = FetchCoordinator::new(crate::tui::storage::review_gateway());
        let mut model = Self::new(coordinator)
            .with_telemetry(crate::tui::storage::telemetry_sink())
            .with_size(width, height);

        let cmd = model.activate();
        (model, cmd)
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            // Any key dismisses the help overlay.
            if self.show_help {
                return self.handle_message(&AppMsg::ToggleHelp);
            }
            if let Some(mapped) = map_key_to_message(key_msg) {
                return self.handle_message(&mapped);
            }
        }

        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        if self.show_help {
            let help: Vec<String> = Self::render_help_overlay()
                .lines()
                .map(str::to_owned)
                .collect();
            return self.normalise_viewport(&help);
        }

        let session = self.store.snapshot();
        let body_height = self.body_height();

        let mut lines = vec![Self::render_header(&session)];
        let mut body = self.render_body(&session, body_height);
        body.resize(body_height, String::new());
        lines.extend(body);
        lines.push(self.render_status_bar(&session));

        self.normalise_viewport(&lines)
    }
}
