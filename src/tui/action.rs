// File: ./src/tui/action.rs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Pagination
    NextPage,
    PreviousPage,
    GoToPage(usize),

    // Category selector
    CycleCategory,
    ClearCategory,

    // Cards
    SelectNext,
    SelectPrevious,
    OpenDetail,
    CloseDetail,

    // Lifecycle
    ToggleHelp,
    Reload,
    Quit,
}
