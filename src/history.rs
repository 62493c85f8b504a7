// Linear undo/redo history of edit snapshots.
// Two stacks: `undo_stack` holds the timeline (current state on top),
// `redo_stack` holds whatever was undone. Any fresh push throws the redo
// branch away, and the first entry (the baseline) can never be undone away.

use chrono::NaiveDateTime;

use crate::error::{Error, Result};
use crate::types::{Color, PixelBuffer};

/// Render the history timestamp: `8/24/26 3:05pm`.
/// Month/day without leading zeros, two-digit year, 12-hour clock with
/// zero-padded minutes and a lowercase am/pm suffix.
pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format("%-m/%-d/%y %-I:%M%P").to_string()
}

/// One immutable snapshot: the rendered image, the endpoint colors that
/// produced it, and when it was taken. Never mutated after creation.
#[derive(Clone, Debug)]
pub struct EditState {
    pub image: PixelBuffer,
    pub color_low: Color,
    pub color_high: Color,
    pub timestamp: String,
}

impl EditState {
    pub fn new(image: PixelBuffer, color_low: Color, color_high: Color, at: NaiveDateTime) -> Self {
        Self { image, color_low, color_high, timestamp: format_timestamp(at) }
    }
}

#[derive(Default)]
pub struct HistoryStore {
    undo_stack: Vec<EditState>,
    redo_stack: Vec<EditState>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new edit as the current state.
    /// Whatever was undone before is gone for good: redo does not survive
    /// a new edit.
    pub fn push(&mut self, state: EditState) {
        self.undo_stack.push(state);
        self.redo_stack.clear();
    }

    /// Step back one edit and return the state to restore.
    /// `None` when already at the baseline; the baseline itself is never
    /// popped, so an opened image always has a current state.
    pub fn undo(&mut self) -> Option<&EditState> {
        if self.undo_stack.len() < 2 {
            return None;
        }
        let top = self.undo_stack.pop()?;
        self.redo_stack.push(top);
        self.undo_stack.last()
    }

    /// Step forward again after an undo. `None` when there is nothing to
    /// redo.
    pub fn redo(&mut self) -> Option<&EditState> {
        let state = self.redo_stack.pop()?;
        self.undo_stack.push(state);
        self.undo_stack.last()
    }

    /// The current state. `EmptyHistory` only before the first push, which
    /// a correct caller never does (the baseline is pushed on image load).
    pub fn current(&self) -> Result<&EditState> {
        self.undo_stack.last().ok_or(Error::EmptyHistory)
    }

    /// The timeline, oldest first; the last entry is the current state.
    /// For display only; entries are immutable.
    pub fn entries(&self) -> &[EditState] {
        &self.undo_stack
    }

    /// How many states were undone and are still redoable.
    pub fn redoable(&self) -> usize {
        self.redo_stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 24).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    fn state(tag: u8) -> EditState {
        // A 1x1 image whose red byte identifies the snapshot.
        let image = PixelBuffer::from_rgba_bytes(1, 1, vec![tag, 0, 0, 255]);
        EditState::new(image, Color::new(1.0, 0.0, 0.0), Color::new(0.0, 0.0, 1.0), at(15, 5))
    }

    fn tag_of(s: &EditState) -> u8 {
        s.image.pixels[0]
    }

    #[test]
    fn timestamp_is_twelve_hour_minute_precision() {
        assert_eq!(format_timestamp(at(15, 5)), "8/24/26 3:05pm");
        assert_eq!(format_timestamp(at(9, 30)), "8/24/26 9:30am");
        assert_eq!(format_timestamp(at(0, 7)), "8/24/26 12:07am");
        assert_eq!(format_timestamp(at(12, 0)), "8/24/26 12:00pm");
        let jan = NaiveDate::from_ymd_opt(2031, 1, 2).unwrap().and_hms_opt(23, 59, 59).unwrap();
        assert_eq!(format_timestamp(jan), "1/2/31 11:59pm");
    }

    #[test]
    fn current_fails_before_first_push() {
        let history = HistoryStore::new();
        assert!(matches!(history.current(), Err(Error::EmptyHistory)));
    }

    #[test]
    fn undo_and_redo_are_noops_when_empty() {
        let mut history = HistoryStore::new();
        assert!(history.undo().is_none());
        assert!(history.redo().is_none());
        assert!(history.entries().is_empty());
    }

    #[test]
    fn push_undo_redo_walk_the_timeline() {
        let mut history = HistoryStore::new();
        history.push(state(1));
        history.push(state(2));

        // Undo lands on the previous state.
        assert_eq!(history.undo().map(tag_of), Some(1));
        assert_eq!(tag_of(history.current().unwrap()), 1);

        // Redo brings the undone state back.
        assert_eq!(history.redo().map(tag_of), Some(2));
        assert_eq!(tag_of(history.current().unwrap()), 2);
    }

    #[test]
    fn push_discards_the_redo_branch() {
        let mut history = HistoryStore::new();
        history.push(state(1));
        history.push(state(2));
        history.undo();
        assert_eq!(history.redoable(), 1);

        history.push(state(3));
        assert_eq!(history.redoable(), 0);
        assert!(history.redo().is_none());
        assert_eq!(tag_of(history.current().unwrap()), 3);
    }

    #[test]
    fn baseline_is_never_undone_away() {
        let mut history = HistoryStore::new();
        history.push(state(1));
        assert!(history.undo().is_none());
        assert_eq!(tag_of(history.current().unwrap()), 1);
        assert_eq!(history.entries().len(), 1);
    }

    #[test]
    fn entries_list_oldest_first() {
        let mut history = HistoryStore::new();
        for tag in 1..=4 {
            history.push(state(tag));
        }
        let tags: Vec<u8> = history.entries().iter().map(tag_of).collect();
        assert_eq!(tags, vec![1, 2, 3, 4]);
    }

    #[test]
    fn redo_chain_survives_multiple_undos() {
        let mut history = HistoryStore::new();
        for tag in 1..=3 {
            history.push(state(tag));
        }
        assert_eq!(history.undo().map(tag_of), Some(2));
        assert_eq!(history.undo().map(tag_of), Some(1));
        assert!(history.undo().is_none()); // at the baseline
        assert_eq!(history.redo().map(tag_of), Some(2));
        assert_eq!(history.redo().map(tag_of), Some(3));
        assert!(history.redo().is_none());
    }
}
