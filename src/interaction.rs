//! Single-choice "press a key" interactions.
//!
//! A [`Modal`] waits for one key press, turns it into a [`ModalChoice`] and
//! is then applied or cancelled. It knows nothing about how input arrives
//! or what the choice does; [`Toolkit`](crate::toolkit::Toolkit) drives it.

use tracing::trace;

use crate::math::Axis;
use crate::operations::image::SlotKey;
use crate::operations::uv::CubePresets;

/// Lifecycle of a modal interaction.
///
/// ```text
/// Idle -> AwaitingInput -> Applying -> Done
///               |              |
///               +--------------+-----> Cancelled
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    /// Created but not yet invoked.
    Idle,
    /// Waiting for a key press.
    AwaitingInput,
    /// A valid key arrived and the choice is being applied.
    Applying,
    /// Ended without effect.
    Cancelled,
    /// The choice was applied.
    Done,
}

/// A discrete input event delivered to a pending modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A key producing a character.
    Char(char),
    /// The cancel key.
    Escape,
    /// Anything else: mouse movement, modifier keys, timers.
    Other,
}

/// What a modal asks the user to choose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModalKind {
    /// Pick X, Y or Z to grid-snap along.
    GridAxis { on_minor: bool },
    /// Pick a cube projection preset by digit.
    CubeScale(CubePresets),
    /// Pick a slot to store the active face's image in.
    PickImage,
    /// Pick a slot whose image is assigned to the selected faces.
    AssignImage,
}

/// The value a key press resolved to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModalChoice {
    Axis(Axis),
    Scale(f64),
    Slot(SlotKey),
}

/// A pending single-key interaction.
#[derive(Debug, Clone)]
pub struct Modal {
    kind: ModalKind,
    state: ModalState,
}

impl Modal {
    /// Creates an idle modal.
    #[must_use]
    pub fn new(kind: ModalKind) -> Self {
        Self {
            kind,
            state: ModalState::Idle,
        }
    }

    /// What this modal asks for.
    #[must_use]
    pub fn kind(&self) -> ModalKind {
        self.kind
    }

    /// The current state.
    #[must_use]
    pub fn state(&self) -> ModalState {
        self.state
    }

    /// Returns `true` once the modal is done or cancelled.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.state, ModalState::Done | ModalState::Cancelled)
    }

    /// Starts waiting for input. Has no effect unless idle.
    pub fn invoke(&mut self) {
        if self.state == ModalState::Idle {
            self.transition(ModalState::AwaitingInput);
        }
    }

    /// Prompt shown to the user while waiting.
    #[must_use]
    pub fn prompt(&self) -> String {
        match self.kind {
            ModalKind::GridAxis { on_minor } => format!(
                "Select X Y or Z to snap selected vertices to the {} grid on that axis.",
                if on_minor { "minor" } else { "major" }
            ),
            ModalKind::CubeScale(presets) => presets.help_text(),
            ModalKind::PickImage => "Pick Image: Select slot (0-9) to store image in.".into(),
            ModalKind::AssignImage => {
                "Assign Image: Select slot (0-9) to assign image from.".into()
            }
        }
    }

    /// Feeds one input event.
    ///
    /// Returns the choice when the event is a valid key, moving to
    /// [`ModalState::Applying`]. Escape cancels. Anything else is ignored
    /// and the modal keeps waiting.
    pub fn feed(&mut self, event: InputEvent) -> Option<ModalChoice> {
        if self.state != ModalState::AwaitingInput {
            return None;
        }
        let key = match event {
            InputEvent::Escape => {
                self.transition(ModalState::Cancelled);
                return None;
            }
            InputEvent::Other => return None,
            InputEvent::Char(c) => c,
        };
        let choice = self.interpret(key)?;
        self.transition(ModalState::Applying);
        Some(choice)
    }

    /// Ends the applying phase.
    pub fn finish(&mut self, applied: bool) {
        if self.state == ModalState::Applying {
            self.transition(if applied {
                ModalState::Done
            } else {
                ModalState::Cancelled
            });
        }
    }

    /// Abandons the modal from any unfinished state.
    pub fn cancel(&mut self) {
        if !self.is_finished() {
            self.transition(ModalState::Cancelled);
        }
    }

    fn interpret(&self, key: char) -> Option<ModalChoice> {
        match self.kind {
            ModalKind::GridAxis { .. } => Axis::from_key(key).map(ModalChoice::Axis),
            ModalKind::CubeScale(presets) => presets.scale_for_key(key).map(ModalChoice::Scale),
            ModalKind::PickImage | ModalKind::AssignImage => {
                SlotKey::from_key(key).map(ModalChoice::Slot)
            }
        }
    }

    fn transition(&mut self, to: ModalState) {
        trace!(kind = ?self.kind, from = ?self.state, ?to, "modal transition");
        self.state = to;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn awaiting(kind: ModalKind) -> Modal {
        let mut modal = Modal::new(kind);
        modal.invoke();
        modal
    }

    #[test]
    fn starts_idle_and_ignores_input() {
        let mut modal = Modal::new(ModalKind::PickImage);
        assert_eq!(modal.state(), ModalState::Idle);
        assert_eq!(modal.feed(InputEvent::Char('1')), None);
        assert_eq!(modal.state(), ModalState::Idle);
    }

    #[test]
    fn grid_axis_accepts_either_case() {
        let mut modal = awaiting(ModalKind::GridAxis { on_minor: false });
        assert_eq!(modal.feed(InputEvent::Char('y')), Some(ModalChoice::Axis(Axis::Y)));
        assert_eq!(modal.state(), ModalState::Applying);
        modal.finish(true);
        assert_eq!(modal.state(), ModalState::Done);
    }

    #[test]
    fn irrelevant_input_keeps_waiting() {
        let mut modal = awaiting(ModalKind::GridAxis { on_minor: true });
        assert_eq!(modal.feed(InputEvent::Char('q')), None);
        assert_eq!(modal.feed(InputEvent::Other), None);
        assert_eq!(modal.feed(InputEvent::Char('5')), None);
        assert_eq!(modal.state(), ModalState::AwaitingInput);
    }

    #[test]
    fn escape_cancels() {
        let mut modal = awaiting(ModalKind::CubeScale(CubePresets::default()));
        assert_eq!(modal.feed(InputEvent::Escape), None);
        assert_eq!(modal.state(), ModalState::Cancelled);
        assert!(modal.is_finished());
        // Finished modals stay finished.
        assert_eq!(modal.feed(InputEvent::Char('1')), None);
        assert_eq!(modal.state(), ModalState::Cancelled);
    }

    #[test]
    fn cube_scale_resolves_preset() {
        let mut modal = awaiting(ModalKind::CubeScale(CubePresets::default()));
        assert_eq!(modal.feed(InputEvent::Char('0')), Some(ModalChoice::Scale(2.5)));
    }

    #[test]
    fn slots_accept_digits_only() {
        let mut modal = awaiting(ModalKind::AssignImage);
        assert_eq!(modal.feed(InputEvent::Char('x')), None);
        assert_eq!(
            modal.feed(InputEvent::Char('7')),
            Some(ModalChoice::Slot(SlotKey::from_key('7').unwrap()))
        );
    }

    #[test]
    fn failed_apply_ends_cancelled() {
        let mut modal = awaiting(ModalKind::PickImage);
        modal.feed(InputEvent::Char('2')).unwrap();
        modal.finish(false);
        assert_eq!(modal.state(), ModalState::Cancelled);
    }

    #[test]
    fn prompts_describe_the_choice() {
        assert!(Modal::new(ModalKind::GridAxis { on_minor: true })
            .prompt()
            .contains("minor grid"));
        assert!(Modal::new(ModalKind::GridAxis { on_minor: false })
            .prompt()
            .contains("major grid"));
        assert!(Modal::new(ModalKind::PickImage).prompt().starts_with("Pick Image"));
    }
}
