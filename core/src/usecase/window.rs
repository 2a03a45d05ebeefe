use serde::{Deserialize, Serialize};

use crate::model::month::Month;

pub const WINDOW_LEN: usize = 6;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
}

/// Six consecutive months of the circular year, starting at `first`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleWindow {
    months: [Month; WINDOW_LEN],
}

impl VisibleWindow {
    pub fn initialize(current: Month) -> Self {
        Self {
            months: std::array::from_fn(|i| current.offset(i as i64)),
        }
    }

    /// New window moved one month in `direction`. `self` is left as is.
    pub fn shift(&self, direction: Direction) -> Self {
        let first = match direction {
            Direction::Left => self.first().pred(),
            Direction::Right => self.first().succ(),
        };
        Self::initialize(first)
    }

    pub fn first(&self) -> Month {
        self.months[0]
    }

    pub fn last(&self) -> Month {
        self.months[WINDOW_LEN - 1]
    }

    pub fn months(&self) -> &[Month; WINDOW_LEN] {
        &self.months
    }

    pub fn contains(&self, month: Month) -> bool {
        self.months.contains(&month)
    }

    /// True when the window runs past December into January.
    pub fn wraps(&self) -> bool {
        self.last().index() < self.first().index()
    }

    pub fn iter(&self) -> impl Iterator<Item = Month> + '_ {
        self.months.iter().copied()
    }
}
