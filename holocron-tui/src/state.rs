//! Application state for the gallery screen.
//!
//! `App` wraps the client's [`Gallery`] with the state only the terminal
//! cares about: cursor position in the visible list, input focus, and
//! notifications. Everything the catalog serves lives in the gallery.

use crate::config::TuiConfig;
use crate::notifications::{NotificationLevel, NotificationLog};
use crate::theme::Theme;
use holocron_client::{Character, Gallery};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Browse,
    Search,
}

pub struct App {
    pub config: TuiConfig,
    pub theme: Theme,
    pub gallery: Gallery,
    pub input_mode: InputMode,
    pub cursor: usize,
    pub notifications: NotificationLog,
}

impl App {
    pub fn new(config: TuiConfig) -> Self {
        Self {
            config,
            theme: Theme::hologram(),
            gallery: Gallery::new(),
            input_mode: InputMode::Browse,
            cursor: 0,
            notifications: NotificationLog::new(),
        }
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notifications.push(level, message);
    }

    pub fn visible_count(&self) -> usize {
        self.gallery.visible().len()
    }

    /// The character under the cursor, if the visible list has one there.
    pub fn cursor_character(&self) -> Option<Character> {
        self.gallery
            .visible()
            .get(self.cursor)
            .map(|c| (*c).clone())
    }

    pub fn move_cursor_down(&mut self) {
        let count = self.visible_count();
        if count == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = (self.cursor + 1) % count;
    }

    pub fn move_cursor_up(&mut self) {
        let count = self.visible_count();
        if count == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = if self.cursor == 0 {
            count - 1
        } else {
            self.cursor - 1
        };
    }

    /// Keep the cursor inside the visible list after a page or filter
    /// change shrinks it.
    pub fn clamp_cursor(&mut self) {
        let count = self.visible_count();
        if count == 0 {
            self.cursor = 0;
        } else if self.cursor >= count {
            self.cursor = count - 1;
        }
    }

    pub fn search_insert(&mut self, c: char) {
        let mut text = self.gallery.filters().search_text.clone();
        text.push(c);
        self.gallery.set_search_text(text);
        self.clamp_cursor();
    }

    pub fn search_backspace(&mut self) {
        let mut text = self.gallery.filters().search_text.clone();
        text.pop();
        self.gallery.set_search_text(text);
        self.clamp_cursor();
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeConfig;
    use chrono::Utc;
    use holocron_client::{Character, Page};

    fn base_config() -> TuiConfig {
        TuiConfig {
            catalog_base_url: "https://catalog.test/api".to_string(),
            request_timeout_ms: 5_000,
            page_size: 10,
            tick_interval_ms: 200,
            log_path: "tmp/holocron.log".into(),
            theme: ThemeConfig {
                name: "hologram".to_string(),
            },
        }
    }

    fn character(name: &str) -> Character {
        Character {
            name: name.to_string(),
            height: "172".to_string(),
            mass: "77".to_string(),
            created: Utc::now(),
            film_count: 4,
            birth_year: "19BBY".to_string(),
            species: Vec::new(),
            homeworld: Some("planets/1".to_string()),
        }
    }

    fn app_with_page(names: &[&str]) -> App {
        let mut app = App::new(base_config());
        let request = app.gallery.request_page(1).unwrap();
        let page = Page {
            items: names.iter().map(|n| character(n)).collect(),
            total_count: names.len() as u64,
            page_size: 10,
        };
        assert!(app.gallery.apply_page(request.page, Ok(page)));
        app
    }

    #[test]
    fn new_app_starts_in_browse_mode_with_no_selection() {
        let app = App::new(base_config());
        assert_eq!(app.input_mode, InputMode::Browse);
        assert_eq!(app.cursor, 0);
        assert!(app.gallery.session().selected().is_none());
    }

    #[test]
    fn cursor_wraps_both_directions() {
        let mut app = app_with_page(&["Luke", "Leia", "Han"]);

        app.move_cursor_up();
        assert_eq!(app.cursor, 2);
        app.move_cursor_down();
        assert_eq!(app.cursor, 0);
        app.move_cursor_down();
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn cursor_stays_at_zero_on_an_empty_list() {
        let mut app = App::new(base_config());
        app.move_cursor_down();
        app.move_cursor_up();
        assert_eq!(app.cursor, 0);
        assert!(app.cursor_character().is_none());
    }

    #[test]
    fn narrowing_the_search_clamps_the_cursor() {
        let mut app = app_with_page(&["Luke", "Leia", "Han"]);
        app.cursor = 2;

        app.search_insert('l');
        // Only Luke and Leia remain visible.
        assert_eq!(app.visible_count(), 2);
        assert!(app.cursor < 2);
    }

    #[test]
    fn backspace_restores_the_wider_list() {
        let mut app = app_with_page(&["Luke", "Leia", "Han"]);
        app.search_insert('h');
        assert_eq!(app.visible_count(), 1);

        app.search_backspace();
        assert_eq!(app.visible_count(), 3);
    }

    #[test]
    fn cursor_character_follows_the_visible_list() {
        let mut app = app_with_page(&["Luke", "Leia", "Han"]);
        app.search_insert('h');
        assert_eq!(app.cursor_character().unwrap().name, "Han");
    }
}
