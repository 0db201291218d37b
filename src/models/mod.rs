pub mod analytics;
pub mod anime;
pub mod calendar;
pub mod clock;
pub mod config;
pub mod files;
pub mod music;
pub mod notes;
pub mod notification;
pub mod pomodoro;
pub mod profile;
pub mod quote;
pub mod social;
pub mod theme;
pub mod weather;

pub use analytics::*;
pub use anime::*;
pub use calendar::*;
pub use clock::*;
pub use config::*;
pub use files::*;
pub use music::*;
pub use notes::*;
pub use notification::*;
pub use pomodoro::*;
pub use profile::*;
pub use quote::*;
pub use social::*;
pub use theme::*;
pub use weather::*;
