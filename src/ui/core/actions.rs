use chrono::NaiveDate;

/// App-level actions produced by components in response to user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A new date was committed; emitted exactly once per successful commit
    Selected(NaiveDate),
    /// Toggle the help overlay
    ShowHelp(bool),
    /// Quit the application
    Quit,
    /// Nothing to propagate
    None,
}
