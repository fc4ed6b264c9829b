//! Battle dialog box state: panels, selections and typed text

use encounter_battle::{category_for, Move, StatModifier};

use crate::config::TypewriterConfig;
use crate::error::DialogError;
use crate::menu::{
    highlights, move_slot_labels, Action, Highlight, MoveChoice, MoveDetails, MOVE_SLOTS,
};
use crate::typewriter::{RevealSink, Typewriter};

/// Visibility of each panel of the dialog box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panels {
    pub dialog_text: bool,
    pub action_selector: bool,
    pub move_selector: bool,
    pub move_details: bool,
}

impl Default for Panels {
    fn default() -> Self {
        Self {
            dialog_text: true,
            action_selector: false,
            move_selector: false,
            move_details: false,
        }
    }
}

/// Engine-independent model of the battle dialog box.
///
/// The rendering layer reads panels, highlights and labels from here and
/// forwards reveal events from the typewriter to its text widget.
#[derive(Debug)]
pub struct DialogBox {
    typewriter: Typewriter,
    panels: Panels,
    action_highlights: Vec<Highlight>,
    move_highlights: Vec<Highlight>,
    move_names: [String; MOVE_SLOTS],
    move_details: Option<MoveDetails>,
}

impl DialogBox {
    pub fn new(config: TypewriterConfig) -> Result<Self, DialogError> {
        Ok(Self {
            typewriter: Typewriter::new(config)?,
            panels: Panels::default(),
            action_highlights: vec![Highlight::Normal; Action::ALL.len()],
            move_highlights: vec![Highlight::Normal; MOVE_SLOTS],
            move_names: move_slot_labels(&[]),
            move_details: None,
        })
    }

    pub fn panels(&self) -> Panels {
        self.panels
    }

    pub fn enable_dialog_text(&mut self, enable: bool) {
        self.panels.dialog_text = enable;
    }

    pub fn enable_action_selector(&mut self, enable: bool) {
        self.panels.action_selector = enable;
    }

    /// Show or hide the move selector together with its details panel
    pub fn enable_move_selector(&mut self, enable: bool) {
        self.panels.move_selector = enable;
        self.panels.move_details = enable;
    }

    pub fn typewriter(&self) -> &Typewriter {
        &self.typewriter
    }

    pub fn typewriter_mut(&mut self) -> &mut Typewriter {
        &mut self.typewriter
    }

    /// Start typing a line into the dialog text
    pub fn type_dialog<S>(&mut self, text: &str, sink: &mut S) -> Result<(), DialogError>
    where
        S: RevealSink + ?Sized,
    {
        self.typewriter.begin_line(text, sink)
    }

    /// Classify a hit's multiplier and type its battle text, if it has one.
    ///
    /// Returns whether a line was started.
    pub fn type_effectiveness<S>(
        &mut self,
        multiplier: f32,
        sink: &mut S,
    ) -> Result<bool, DialogError>
    where
        S: RevealSink + ?Sized,
    {
        match category_for(multiplier)?.message() {
            Some(text) => {
                self.type_dialog(text, sink)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Type the battle text for a stat stage change on `target`
    pub fn type_stat_change<S>(
        &mut self,
        target: &str,
        modifier: &StatModifier,
        sink: &mut S,
    ) -> Result<(), DialogError>
    where
        S: RevealSink + ?Sized,
    {
        self.type_dialog(&modifier.describe(target), sink)
    }

    /// Fast-forward input; only applies while text is typing
    pub fn speed_up(&mut self) -> bool {
        self.typewriter.speed_up()
    }

    pub fn advance<S>(&mut self, dt: std::time::Duration, sink: &mut S)
    where
        S: RevealSink + ?Sized,
    {
        self.typewriter.advance(dt, sink);
    }

    pub fn is_typing(&self) -> bool {
        self.typewriter.is_busy()
    }

    /// Currently visible dialog text
    pub fn dialog_text(&self) -> &str {
        self.typewriter.revealed()
    }

    pub fn update_action_selection(&mut self, selected: Action) -> &[Highlight] {
        self.action_highlights = highlights(&Action::ALL, &selected);
        &self.action_highlights
    }

    pub fn action_highlights(&self) -> &[Highlight] {
        &self.action_highlights
    }

    /// Highlight the chosen slot and show the details of `selected_move`
    pub fn update_move_selection(&mut self, choice: MoveChoice, selected_move: &Move) {
        self.move_highlights = highlights(&MoveChoice::ALL, &choice);
        self.move_details = Some(MoveDetails::from(selected_move));
    }

    pub fn move_highlights(&self) -> &[Highlight] {
        &self.move_highlights
    }

    pub fn move_details(&self) -> Option<&MoveDetails> {
        self.move_details.as_ref()
    }

    pub fn set_move_names(&mut self, moves: &[Move]) {
        if moves.len() > MOVE_SLOTS {
            tracing::warn!(
                moves = moves.len(),
                "More moves than slots, extra moves are not shown"
            );
        }
        self.move_names = move_slot_labels(moves);
    }

    pub fn move_names(&self) -> &[String; MOVE_SLOTS] {
        &self.move_names
    }
}
