use chrono::{DateTime, Local, NaiveDate, Timelike};
use std::sync::Arc;

use crate::models::{NotificationKind, ProfileView, UserProfile};
use crate::services::notifications::NotificationCenter;
use crate::storage::KvStore;
use crate::widgets::{write_through, Widget, WidgetStatus};

const PROFILE_KEY: &str = "userProfile";
const LAST_VISIT_KEY: &str = "lastVisit";
const STREAK_KEY: &str = "userStreak";

pub struct ProfileWidget {
    store: Arc<KvStore>,
    notifier: Arc<NotificationCenter>,
    profile: UserProfile,
    streak: u32,
    status: WidgetStatus,
}

impl ProfileWidget {
    pub fn new(store: Arc<KvStore>, notifier: Arc<NotificationCenter>) -> Self {
        Self {
            store,
            notifier,
            profile: UserProfile::default(),
            streak: 0,
            status: WidgetStatus::Uninitialized,
        }
    }

    pub fn load(&mut self) {
        self.profile = self.store.get(PROFILE_KEY).unwrap_or_default();
        self.record_visit(Local::now().date_naive());
        self.status = WidgetStatus::Ready;
    }

    /// Applies the daily-visit streak rule for `today` and persists the
    /// result: a first-ever visit starts at 1, a visit on the immediately
    /// following day increments, a gap of two or more days resets to 1, and
    /// repeat visits on the same day change nothing.
    pub fn record_visit(&mut self, today: NaiveDate) -> u32 {
        let last_visit: Option<NaiveDate> = self
            .store
            .get::<String>(LAST_VISIT_KEY)
            .and_then(|raw| raw.parse().ok());
        let mut streak: u32 = self.store.get(STREAK_KEY).unwrap_or(0);

        match last_visit {
            Some(last) if last == today => {}
            Some(last) if last.succ_opt() == Some(today) => streak += 1,
            _ => streak = 1,
        }

        if last_visit != Some(today) {
            write_through(&self.store, &self.notifier, STREAK_KEY, &streak);
            write_through(
                &self.store,
                &self.notifier,
                LAST_VISIT_KEY,
                &today.to_string(),
            );
        }

        self.streak = streak;
        streak
    }

    /// A blank name falls back to the default guest profile name.
    pub fn save_profile(&mut self, name: &str, avatar_url: &str) {
        let name = name.trim();
        self.profile = UserProfile {
            name: if name.is_empty() {
                UserProfile::default().name
            } else {
                name.to_string()
            },
            avatar_url: avatar_url.trim().to_string(),
        };
        write_through(&self.store, &self.notifier, PROFILE_KEY, &self.profile);

        self.notifier.notify(
            NotificationKind::Success,
            "Profile Updated",
            "Your profile has been successfully updated.",
            false,
        );
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn render(&self) -> ProfileView {
        self.render_at(Local::now())
    }

    pub fn render_at(&self, now: DateTime<Local>) -> ProfileView {
        ProfileView {
            greeting: format!("{}, {}!", greeting_for_hour(now.hour()), self.profile.name),
            initials: self
                .profile
                .name
                .chars()
                .next()
                .map(|c| c.to_uppercase().to_string())
                .unwrap_or_default(),
            avatar_url: self.profile.avatar_url.clone(),
            streak_days: self.streak,
            streak_label: format!(
                "{} day{}",
                self.streak,
                if self.streak == 1 { "" } else { "s" }
            ),
        }
    }
}

fn greeting_for_hour(hour: u32) -> &'static str {
    if hour < 12 {
        "Good morning"
    } else if hour < 18 {
        "Good afternoon"
    } else {
        "Good evening"
    }
}

impl Widget for ProfileWidget {
    fn name(&self) -> &'static str {
        "profile"
    }

    fn status(&self) -> WidgetStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::greeting_for_hour;

    #[test]
    fn greeting_switches_at_noon_and_six() {
        assert_eq!(greeting_for_hour(0), "Good morning");
        assert_eq!(greeting_for_hour(11), "Good morning");
        assert_eq!(greeting_for_hour(12), "Good afternoon");
        assert_eq!(greeting_for_hour(17), "Good afternoon");
        assert_eq!(greeting_for_hour(18), "Good evening");
        assert_eq!(greeting_for_hour(23), "Good evening");
    }
}
