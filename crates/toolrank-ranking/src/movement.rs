//! Position movement against the previous period.

use std::collections::HashMap;

use toolrank_core::models::{Movement, MovementDirection, Ranking};

/// Previous positions keyed by tool id.
#[derive(Debug, Default)]
pub struct PreviousPositions<'p> {
    by_tool: HashMap<&'p str, &'p Ranking>,
}

impl<'p> PreviousPositions<'p> {
    pub fn new(previous: &'p [Ranking]) -> Self {
        Self {
            by_tool: previous.iter().map(|r| (r.tool_id.as_str(), r)).collect(),
        }
    }

    pub fn get(&self, tool_id: &str) -> Option<&'p Ranking> {
        self.by_tool.get(tool_id).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.by_tool.is_empty()
    }
}

/// Movement for a tool now at `current`. `None` previous means a new entry,
/// which never carries a numeric delta.
pub fn movement(previous: Option<u32>, current: u32) -> Movement {
    let Some(previous_position) = previous else {
        return Movement::new_entry();
    };
    let change = i64::from(previous_position) - i64::from(current);
    let direction = match change {
        c if c > 0 => MovementDirection::Up,
        c if c < 0 => MovementDirection::Down,
        _ => MovementDirection::Same,
    };
    Movement {
        previous_position: Some(previous_position),
        change: Some(change),
        direction,
    }
}
