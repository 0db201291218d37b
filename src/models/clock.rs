use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClockView {
    /// 12-hour time, e.g. "9:05:03 PM".
    pub time: String,
    /// e.g. "Wednesday, Oct 23, 2025".
    pub date: String,
}
