use serde::{Deserialize, Serialize};

use crate::week_label;

/// Lessons assigned to one week of a term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekDistribution {
    /// 0-based week position within the term.
    pub week_index: usize,
    pub lesson_numbers: Vec<u32>,
    pub start_lesson: u32,
    /// Last lesson of the block; `start_lesson - 1` for an empty week.
    pub end_lesson: u32,
}

impl WeekDistribution {
    pub fn len(&self) -> usize {
        self.lesson_numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lesson_numbers.is_empty()
    }

    pub fn week_number(&self) -> u32 {
        u32::try_from(self.week_index + 1).unwrap_or(u32::MAX)
    }

    pub fn label(&self) -> String {
        week_label(self.week_number())
    }
}

/// A selectable week with its display date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekOption {
    pub label: String,
    pub date_range: String,
}

impl WeekOption {
    /// Text shown in a picker, e.g. `SEMANA 1 (03/02/2025 - 07/02/2025)`.
    pub fn display(&self) -> String {
        format!("{} ({})", self.label, self.date_range)
    }
}
