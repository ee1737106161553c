/// The error type for [`smallest_mining_area`](crate::smallest_mining_area).
///
/// A resource kind without any deposits can never be covered, so no mining
/// area exists for the dataset at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Infeasible {
    /// Index of the offending kind, in the caller's ordering.
    pub kind_idx: usize,
}

impl std::error::Error for Infeasible {}

impl std::fmt::Display for Infeasible {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "resource kind {} has no deposits, so no mining area can cover every kind",
            self.kind_idx
        )
    }
}
