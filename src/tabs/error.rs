/// Errors raised by the tab model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TabsError {
    #[error("A tab set needs at least one tab")]
    Empty,

    #[error("Duplicate tab id '{0}'")]
    DuplicateId(String),

    #[error("Tab '{id}' has a blank label")]
    BlankLabel { id: String },

    #[error("Tab index {index} is out of range (0..{len})")]
    IndexOutOfRange { index: usize, len: usize },
}
