//! Project Card Modal Controller
//!
//! Each project card owns one [`ModalState`]: a two-state machine toggling
//! the detail overlay between closed and open. Activations are delivered as
//! explicit [`Activation`] values so that event containment (a click inside
//! the detail panel must not close the modal) is part of the state machine
//! rather than left to the rendering layer alone.

use crate::types::ProjectRecord;

/// A discrete user input event targeting one project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Click/tap anywhere on the card body
    Card,
    /// Click/tap on the explicit close control or the footer close button
    Close,
    /// Click/tap on the overlay background outside the detail panel
    OverlayBackground,
    /// Click/tap inside the detail panel; consumed without a transition
    PanelInterior,
}

/// Open/closed visibility of one project's detail overlay.
///
/// Starts closed, cycles between the two states for the component's entire
/// lifetime. Not shared: exactly one instance exists per rendered project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModalState {
    open: bool,
}

impl ModalState {
    /// New controller in the closed state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the detail overlay is currently visible.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Apply one activation. Returns `true` if the event was consumed.
    ///
    /// Activations that do not apply in the current state (closing an
    /// already-closed modal, opening an already-open one) are ignored and
    /// not consumed.
    pub fn activate(&mut self, activation: Activation) -> bool {
        match (self.open, activation) {
            (false, Activation::Card) => {
                self.open = true;
                true
            }
            (true, Activation::Close) | (true, Activation::OverlayBackground) => {
                self.open = false;
                true
            }
            // Containment: the panel swallows the click so it never reaches
            // the overlay background handler.
            (true, Activation::PanelInterior) => true,
            _ => false,
        }
    }

    /// Detail view for `record`, present only while the modal is open.
    ///
    /// Pure with respect to state and record: rendering the same state twice
    /// yields an identical view.
    pub fn detail<'a>(&self, record: &'a ProjectRecord) -> Option<ProjectDetail<'a>> {
        self.open.then(|| ProjectDetail::from_record(record))
    }
}

/// View model for the open detail overlay.
///
/// Borrowed projection of a [`ProjectRecord`]: the description becomes the
/// objectives text, technologies the tag list, and requirements the itemized
/// requirement sheet, all in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetail<'a> {
    pub title: &'a str,
    pub objectives: &'a str,
    pub technologies: &'a [String],
    pub requirements: &'a [String],
}

impl<'a> ProjectDetail<'a> {
    pub fn from_record(record: &'a ProjectRecord) -> Self {
        Self {
            title: &record.title,
            objectives: &record.description,
            technologies: &record.technologies,
            requirements: &record.requirements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ProjectRecord {
        ProjectRecord {
            title: "E-Learning Platform".to_string(),
            description: "Online course platform".to_string(),
            technologies: vec!["PHP".to_string(), "MySQL".to_string()],
            logos: vec![],
            requirements: vec![
                "Secure authentication".to_string(),
                "Course management".to_string(),
            ],
        }
    }

    #[test]
    fn test_starts_closed() {
        let state = ModalState::new();
        assert!(!state.is_open());
        assert_eq!(state.detail(&record()), None);
    }

    #[test]
    fn test_card_activation_opens() {
        let mut state = ModalState::new();
        assert!(state.activate(Activation::Card));
        assert!(state.is_open());
    }

    #[test]
    fn test_close_and_overlay_both_close() {
        for closing in [Activation::Close, Activation::OverlayBackground] {
            let mut state = ModalState::new();
            state.activate(Activation::Card);
            assert!(state.activate(closing));
            assert!(!state.is_open());
        }
    }

    #[test]
    fn test_panel_interior_is_contained() {
        let mut state = ModalState::new();
        state.activate(Activation::Card);
        // Consumed, but the modal stays open.
        assert!(state.activate(Activation::PanelInterior));
        assert!(state.is_open());
    }

    #[test]
    fn test_inapplicable_activations_ignored() {
        let mut state = ModalState::new();
        assert!(!state.activate(Activation::Close));
        assert!(!state.activate(Activation::OverlayBackground));
        assert!(!state.activate(Activation::PanelInterior));
        assert!(!state.is_open());

        state.activate(Activation::Card);
        assert!(!state.activate(Activation::Card));
        assert!(state.is_open());
    }

    #[test]
    fn test_detail_matches_record_in_order() {
        let record = record();
        let mut state = ModalState::new();
        state.activate(Activation::Card);

        let detail = state.detail(&record).unwrap();
        assert_eq!(detail.title, "E-Learning Platform");
        assert_eq!(detail.objectives, "Online course platform");
        assert_eq!(detail.technologies, &["PHP", "MySQL"]);
        assert_eq!(
            detail.requirements,
            &["Secure authentication", "Course management"]
        );
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let record = record();
        let state = ModalState::new();
        assert_eq!(state.detail(&record), state.detail(&record));

        let mut open = ModalState::new();
        open.activate(Activation::Card);
        assert_eq!(open.detail(&record), open.detail(&record));
    }
}
