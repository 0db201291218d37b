use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeView {
    pub theme: String,
    pub wallpaper_index: usize,
    pub wallpaper: String,
    /// Gradient wallpapers are applied directly instead of as an image URL.
    pub is_gradient: bool,
}
