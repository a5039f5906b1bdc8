/// User-triggered state transitions. Every terminal event maps to exactly
/// one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleHelp,
    NavigateBack,
    DrillIn,
    MoveDown,
    MoveUp,
    PageDown,
    PageUp,
    GoTop,
    GoBottom,
    /// Save the current record's form into the table and persist.
    SaveRecord,
    /// Reject every unreviewed row sharing the current record's URL.
    SkipUrl,
    /// Jump to the next unreviewed row after the current one.
    NextUnreviewed,
    /// Write a snapshot CSV of the full working table.
    Export,
    ToggleHideReviewed,
    ToggleSummaryPanel,
    /// Cycle the form's three-way validation choice.
    CycleValidation,
    TextInput(char),
    TextConfirm,
    TextCancel,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    DeleteForward,
    Tick,
    Resize(u16, u16),
    None,
}
