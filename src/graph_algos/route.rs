use std::fmt::{self, Display};


/// Outcome of a single query
/// An unreachable target is a normal result, not an error
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route<C> {
    /// Path from source to target inclusive, with its total weight
    Reachable { path: Vec<String>, total: C },
    /// Source and target lie in different components
    Unreachable,
}

impl<C: Copy> Route<C> {

    /// Node labels from source to target, empty when unreachable
    pub fn path(&self) -> &[String] {
        match self {
            Route::Reachable { path, .. } => path,
            Route::Unreachable => &[],
        }
    }

    /// Total weight, `None` stands for infinity
    pub fn total(&self) -> Option<C> {
        match self {
            Route::Reachable { total, .. } => Some(*total),
            Route::Unreachable => None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, Route::Reachable { .. })
    }
}

impl<C: Display> Display for Route<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Reachable { path, total } => write!(f, "{} ({total})", path.join(" -> ")),
            Route::Unreachable => write!(f, "unreachable"),
        }
    }
}
