//! Team affiliation of a link, relative to the planning side.
//!
//! The snapshot carries raw faction codes; `sb-io` collapses them to this
//! two-valued view when the map is loaded.  Only opposing links can block.

/// Which side a link belongs to, from the planner's point of view.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Team {
    /// Our own side — never blocks a candidate link.
    Friendly,
    /// The enemy side — its links are blocking candidates.
    Opposing,
}

impl Team {
    #[inline]
    pub fn is_opposing(self) -> bool {
        matches!(self, Team::Opposing)
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Team::Friendly => write!(f, "friendly"),
            Team::Opposing => write!(f, "opposing"),
        }
    }
}
