//! Constants used throughout the application
//!
//! This module centralizes UI text and format strings so the view layer and
//! the config defaults stay consistent.

// Format strings (chrono strftime syntax)
pub const MONTH_TITLE_FORMAT: &str = "%B %Y";
pub const CELL_LABEL_FORMAT: &str = "%A, %B %d, %Y";

// Month navigation control labels; kept ASCII so their on-screen width
// matches their char count for mouse hit-testing
pub const PREV_MONTH_LABEL: &str = "< prev";
pub const NEXT_MONTH_LABEL: &str = "next >";

// Grid cell geometry (content width plus one column of spacing)
pub const CELL_WIDTH: u16 = 4;
pub const CELL_SPACING: u16 = 1;

// Status bar hints
pub const KEY_HINTS: &str = "arrows: move • Enter: select • p/n: month • ?: help • q: quit";

// Default field name for the submittable selection value
pub const DEFAULT_FORM_NAME: &str = "selected_date";
