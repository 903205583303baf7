use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Content categories for the diversity stage, arranged on a fixed ring.
///
/// "Neighboring" categories are the two ring-adjacent ones; the allocator's
/// exploration pools draw from neighbors of the user's interests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Category {
    Comedy,
    Music,
    Dance,
    Food,
    Travel,
    Sports,
    Gaming,
    Pets,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Comedy,
        Category::Music,
        Category::Dance,
        Category::Food,
        Category::Travel,
        Category::Sports,
        Category::Gaming,
        Category::Pets,
    ];

    /// Position on the ring.
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }

    /// Category at a ring position (wrapping).
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// The two ring-adjacent categories.
    pub fn neighbors(self) -> [Category; 2] {
        let n = Self::ALL.len();
        let i = self.index();
        [Self::from_index((i + n - 1) % n), Self::from_index(i + 1)]
    }
}
