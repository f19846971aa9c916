use serde::{Deserialize, Serialize};

use crate::core::PlotPoint;
use crate::render::HoverTarget;

/// Identity of the hover target currently under the pointer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverKey {
    pub cause: String,
    pub year: i32,
}

impl HoverKey {
    #[must_use]
    pub fn of(target: &HoverTarget) -> Self {
        Self {
            cause: target.cause.clone(),
            year: target.year,
        }
    }
}

/// What a pointer event changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HoverTransition {
    /// The pointer stayed on the same target (or on none).
    Unchanged,
    /// The pointer entered `entered`; any previously hovered target is left
    /// implicitly, so only one tooltip ever exists.
    Entered {
        entered: HoverKey,
        left: Option<HoverKey>,
    },
    Left(HoverKey),
}

/// Pointer hover tracking with last-enter-wins semantics.
///
/// Targets are tested in reverse drawing order so the topmost target under
/// the pointer wins. A leave event for a target that is no longer active is
/// stale and ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoverState {
    active: Option<HoverKey>,
    pointer: Option<PlotPoint>,
}

impl HoverState {
    #[must_use]
    pub fn active(&self) -> Option<&HoverKey> {
        self.active.as_ref()
    }

    #[must_use]
    pub fn pointer(&self) -> Option<PlotPoint> {
        self.pointer
    }

    /// Returns the topmost target containing `point`.
    #[must_use]
    pub fn hit_test(targets: &[HoverTarget], point: PlotPoint) -> Option<&HoverTarget> {
        targets.iter().rev().find(|target| target.contains(point))
    }

    /// Handles a pointer move in plot space.
    pub fn on_pointer_move(
        &mut self,
        targets: &[HoverTarget],
        point: PlotPoint,
    ) -> HoverTransition {
        self.pointer = Some(point);
        match Self::hit_test(targets, point) {
            Some(target) => self.on_enter(HoverKey::of(target)),
            None => match self.active.take() {
                Some(previous) => HoverTransition::Left(previous),
                None => HoverTransition::Unchanged,
            },
        }
    }

    /// Pointer entered `key`; always replaces the active target.
    pub fn on_enter(&mut self, key: HoverKey) -> HoverTransition {
        if self.active.as_ref() == Some(&key) {
            return HoverTransition::Unchanged;
        }
        let left = self.active.replace(key.clone());
        HoverTransition::Entered { entered: key, left }
    }

    /// Pointer left `key`. Only clears the hover when `key` is still active.
    pub fn on_leave(&mut self, key: &HoverKey) -> HoverTransition {
        if self.active.as_ref() == Some(key) {
            self.active = None;
            HoverTransition::Left(key.clone())
        } else {
            HoverTransition::Unchanged
        }
    }

    /// Pointer left the surface entirely.
    pub fn on_pointer_leave(&mut self) -> HoverTransition {
        self.pointer = None;
        match self.active.take() {
            Some(previous) => HoverTransition::Left(previous),
            None => HoverTransition::Unchanged,
        }
    }

    /// Forgets all hover state; called whenever the scene is redrawn.
    pub fn reset(&mut self) {
        self.active = None;
        self.pointer = None;
    }
}

#[cfg(test)]
mod tests {
    use super::{HoverKey, HoverState, HoverTransition};

    fn key(cause: &str, year: i32) -> HoverKey {
        HoverKey {
            cause: cause.to_owned(),
            year,
        }
    }

    #[test]
    fn stale_leave_does_not_clear_newer_hover() {
        let mut state = HoverState::default();
        state.on_enter(key("Cancer", 1960));
        state.on_enter(key("Stroke", 1960));

        assert_eq!(state.on_leave(&key("Cancer", 1960)), HoverTransition::Unchanged);
        assert_eq!(state.active(), Some(&key("Stroke", 1960)));

        assert_eq!(
            state.on_leave(&key("Stroke", 1960)),
            HoverTransition::Left(key("Stroke", 1960))
        );
        assert!(state.active().is_none());
    }

    #[test]
    fn reentering_same_target_is_unchanged() {
        let mut state = HoverState::default();
        state.on_enter(key("Cancer", 2000));
        assert_eq!(state.on_enter(key("Cancer", 2000)), HoverTransition::Unchanged);
    }
}
