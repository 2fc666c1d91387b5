use crate::system::sort::SortMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    SortBy(SortMode),
    OpenKillPrompt,
    None,
}
