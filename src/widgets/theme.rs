use std::sync::Arc;

use crate::models::{NotificationKind, ThemeView};
use crate::services::notifications::NotificationCenter;
use crate::storage::KvStore;
use crate::widgets::{write_through, Widget, WidgetStatus};

const THEME_KEY: &str = "dashboardTheme";
const WALLPAPER_KEY: &str = "dashboardWallpaper";
const DEFAULT_THEME: &str = "dark";

pub const AVAILABLE_THEMES: [&str; 3] = ["dark", "light", "anime"];

pub const WALLPAPERS: [&str; 3] = [
    "https://images.unsplash.com/photo-1578662996442-48f60103fc96?auto=format&fit=crop&w=2070&q=80",
    "https://images.unsplash.com/photo-1620641788421-7a1c342ea42e?auto=format&fit=crop&w=1974&q=80",
    "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
];

pub struct ThemeWidget {
    store: Arc<KvStore>,
    notifier: Arc<NotificationCenter>,
    theme: String,
    wallpaper: usize,
    status: WidgetStatus,
}

impl ThemeWidget {
    pub fn new(store: Arc<KvStore>, notifier: Arc<NotificationCenter>) -> Self {
        Self {
            store,
            notifier,
            theme: DEFAULT_THEME.to_string(),
            wallpaper: 0,
            status: WidgetStatus::Uninitialized,
        }
    }

    pub fn load(&mut self) {
        let theme: String = self
            .store
            .get(THEME_KEY)
            .unwrap_or_else(|| DEFAULT_THEME.to_string());
        self.theme = if AVAILABLE_THEMES.contains(&theme.as_str()) {
            theme
        } else {
            DEFAULT_THEME.to_string()
        };

        let wallpaper: usize = self.store.get(WALLPAPER_KEY).unwrap_or(0);
        self.wallpaper = if wallpaper < WALLPAPERS.len() {
            wallpaper
        } else {
            0
        };

        self.status = WidgetStatus::Ready;
    }

    /// Rejects unknown theme names without persisting.
    pub fn set_theme(&mut self, theme: &str) -> bool {
        if !AVAILABLE_THEMES.contains(&theme) {
            return false;
        }

        self.theme = theme.to_string();
        write_through(&self.store, &self.notifier, THEME_KEY, &self.theme);
        self.notifier.notify(
            NotificationKind::Success,
            "Theme Changed",
            &format!("Switched to {} theme.", theme),
            false,
        );
        true
    }

    pub fn set_wallpaper(&mut self, index: usize) -> bool {
        if index >= WALLPAPERS.len() {
            return false;
        }

        self.wallpaper = index;
        write_through(&self.store, &self.notifier, WALLPAPER_KEY, &self.wallpaper);
        self.notifier.notify(
            NotificationKind::Info,
            "Wallpaper Changed",
            "Background wallpaper updated.",
            false,
        );
        true
    }

    pub fn next_wallpaper(&mut self) {
        self.set_wallpaper((self.wallpaper + 1) % WALLPAPERS.len());
    }

    pub fn render(&self) -> ThemeView {
        let wallpaper = WALLPAPERS[self.wallpaper];
        ThemeView {
            theme: self.theme.clone(),
            wallpaper_index: self.wallpaper,
            wallpaper: wallpaper.to_string(),
            is_gradient: wallpaper.starts_with("linear-gradient"),
        }
    }
}

impl Widget for ThemeWidget {
    fn name(&self) -> &'static str {
        "theme"
    }

    fn status(&self) -> WidgetStatus {
        self.status
    }
}
