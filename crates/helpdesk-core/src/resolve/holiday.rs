//! Yearly holiday list PDF.

use crate::dataset::Dataset;

pub const HOLIDAY_LIST_TITLE: &str = "Yearly Holiday List (PDF)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayLink {
    pub title: String,
    pub url: String,
}

pub fn resolve_holidays(dataset: &Dataset) -> Option<HolidayLink> {
    dataset.holiday_pdf().map(|url| HolidayLink {
        title: HOLIDAY_LIST_TITLE.to_string(),
        url: url.to_string(),
    })
}
