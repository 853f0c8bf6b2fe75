/// Where a quiz session currently stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppState {
    /// Questions loaded, nothing asked yet.
    #[default]
    Idle,
    /// Waiting for the answer to the question at this index.
    Asking(usize),
    /// Every question has been answered.
    Done,
}
