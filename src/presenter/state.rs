use crate::models::Product;

/// What the results container is showing.
#[derive(Clone, Debug, PartialEq)]
pub enum ResultsState {
    /// Request in flight
    Loading,
    /// Backend answered `success: false` with this message
    Failed(String),
    /// Transport or parse failure; shown as the generic message
    Unavailable,
    /// `success: true` with no products
    Empty,
    Products(Vec<Product>),
}

/// Shape of a [`ResultsState`] without its payload, for bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultsKind {
    /// Nothing rendered yet
    Blank,
    Loading,
    Error,
    Empty,
    Products(usize),
}

impl ResultsState {
    pub fn kind(&self) -> ResultsKind {
        match self {
            ResultsState::Loading => ResultsKind::Loading,
            ResultsState::Failed(_) | ResultsState::Unavailable => ResultsKind::Error,
            ResultsState::Empty => ResultsKind::Empty,
            ResultsState::Products(p) if p.is_empty() => ResultsKind::Empty,
            ResultsState::Products(p) => ResultsKind::Products(p.len()),
        }
    }
}

impl ResultsKind {
    /// Anything but `Blank` and `Loading`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ResultsKind::Blank | ResultsKind::Loading)
    }
}
