//! Accessibility metadata
//!
//! Stable cell identities, long-form day labels, composable per-cell flags
//! and the announce-on-change live region for the month title. These are the
//! widget's machine-readable surface: tests and assistive-technology bridges
//! query them instead of scraping rendered text.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::CELL_LABEL_FORMAT;
use crate::utils::date::format_ymd;

/// Stable identity of a day cell, used as the active-descendant reference
pub fn cell_id(day: NaiveDate) -> String {
    format!("day-{}", format_ymd(day))
}

/// Long-form label announced for a day cell ("Sunday, June 18, 1995")
pub fn cell_label(day: NaiveDate) -> String {
    day.format(CELL_LABEL_FORMAT).to_string()
}

/// Per-cell state flags.
///
/// The flags are independently composable: a cell can be today, selected,
/// active and disabled all at once, and rendering layers the corresponding
/// styles and attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellFlags {
    pub selected: bool,
    pub active: bool,
    pub today: bool,
    pub disabled: bool,
    pub outside_month: bool,
}

/// Announcement urgency of the title live region
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Politeness {
    #[default]
    Polite,
    Assertive,
}

/// Announce-on-change text region for the month/year title
#[derive(Debug, Clone)]
pub struct LiveRegion {
    politeness: Politeness,
    text: String,
}

impl LiveRegion {
    pub fn new(politeness: Politeness) -> Self {
        Self {
            politeness,
            text: String::new(),
        }
    }

    pub fn politeness(&self) -> Politeness {
        self.politeness
    }

    /// Current region text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the region text. Returns true when the text changed, which is
    /// what makes the region announce.
    pub fn announce(&mut self, label: &str) -> bool {
        if self.text == label {
            return false;
        }
        self.text = label.to_string();
        log::debug!("live region ({:?}): {label}", self.politeness);
        true
    }
}
