//! Project filter with a per-item transition state machine.
//!
//! Selecting a filter puts every item whose visibility changes into a
//! transitional phase and hands back the timers the view must run. A timer
//! completes its transition only if no newer selection touched the item in the
//! meantime, so rapid re-filtering always ends in the latest selection's layout.

pub const ALL: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemPhase {
    /// In the layout, fully shown.
    Visible,
    /// In the layout, still transparent; fades in when settled.
    Revealing,
    /// In the layout, fading out; leaves the layout when settled.
    Hiding,
    /// Out of the layout.
    Hidden,
}

impl ItemPhase {
    /// Whether the item occupies space (`display: block`).
    pub fn in_layout(self) -> bool {
        !matches!(self, ItemPhase::Hidden)
    }

    /// Whether the item is drawn at full opacity in its resting position.
    pub fn is_shown(self) -> bool {
        matches!(self, ItemPhase::Visible)
    }
}

#[derive(Debug, Clone, PartialEq)]
struct FilterItem {
    category: String,
    phase: ItemPhase,
    generation: u64,
}

/// A timer the view should run, then report back through [`ProjectFilter::settle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub item: usize,
    pub generation: u64,
    pub wait_ms: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectFilter {
    selected: String,
    items: Vec<FilterItem>,
    stagger_ms: u64,
    hide_ms: u64,
}

impl ProjectFilter {
    /// All items start visible under the `"all"` filter.
    pub fn new<I, S>(categories: I, stagger_ms: u64, hide_ms: u64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selected: ALL.to_string(),
            items: categories
                .into_iter()
                .map(|category| FilterItem {
                    category: category.into(),
                    phase: ItemPhase::Visible,
                    generation: 0,
                })
                .collect(),
            stagger_ms,
            hide_ms,
        }
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// Active flag for the filter button carrying `value`.
    pub fn is_active(&self, value: &str) -> bool {
        self.selected == value
    }

    pub fn matches(&self, category: &str) -> bool {
        self.selected == ALL || self.selected == category
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn phase(&self, item: usize) -> Option<ItemPhase> {
        self.items.get(item).map(|entry| entry.phase)
    }

    /// Select `filter` and return the transitions to schedule. Items already
    /// resting in the right state get no timer.
    pub fn select(&mut self, filter: &str) -> Vec<Transition> {
        self.selected = filter.to_string();
        let mut transitions = Vec::new();

        for index in 0..self.items.len() {
            let wanted = self.matches(&self.items[index].category);
            let item = &mut self.items[index];
            let (next, wait_ms) = match (wanted, item.phase) {
                (true, ItemPhase::Visible) | (false, ItemPhase::Hidden) => continue,
                (true, _) => (ItemPhase::Revealing, index as u64 * self.stagger_ms),
                (false, _) => (ItemPhase::Hiding, self.hide_ms),
            };
            item.phase = next;
            item.generation = item.generation.wrapping_add(1);
            transitions.push(Transition {
                item: index,
                generation: item.generation,
                wait_ms,
            });
        }

        transitions
    }

    /// Finish a transition. Returns false (and changes nothing) when the item was
    /// re-targeted by a later selection.
    pub fn settle(&mut self, item: usize, generation: u64) -> bool {
        let Some(entry) = self.items.get_mut(item) else {
            return false;
        };
        if entry.generation != generation {
            return false;
        }
        entry.phase = match entry.phase {
            ItemPhase::Revealing => ItemPhase::Visible,
            ItemPhase::Hiding => ItemPhase::Hidden,
            ItemPhase::Visible | ItemPhase::Hidden => return false,
        };
        true
    }
}
