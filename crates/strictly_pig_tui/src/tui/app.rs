//! View model fed by render commands.

use strictly_pig::{DieFace, RenderCommand, RenderSink, Seat};
use tracing::trace;

/// What one player panel shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelView {
    /// Player name.
    pub name: String,
    /// Banked score.
    pub score: u32,
    /// Current turn total.
    pub current: u32,
    /// Highlighted as the player to move.
    pub active: bool,
    /// Highlighted as the winner.
    pub winner: bool,
}

/// Everything the terminal UI draws.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableView {
    panels: [PanelView; 2],
    dice: Option<DieFace>,
    input_enabled: bool,
    overlay: Option<String>,
}

impl TableView {
    /// Creates an empty view; the presentation fills it on start.
    pub fn new() -> Self {
        Self::default()
    }

    /// Panel for a seat.
    pub fn panel(&self, seat: Seat) -> &PanelView {
        &self.panels[seat.index()]
    }

    /// Face showing, if the die is visible.
    pub fn dice(&self) -> Option<DieFace> {
        self.dice
    }

    /// Whether roll and hold are accepted.
    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    /// Winner name while the overlay is open.
    pub fn overlay(&self) -> Option<&str> {
        self.overlay.as_deref()
    }

    /// One-line summary for the status bar.
    pub fn status_message(&self) -> String {
        if let Some(winner) = &self.overlay {
            return format!("{} wins! Press N for a new game.", winner);
        }
        if !self.input_enabled {
            return "Game over. Press N for a new game.".to_string();
        }
        match self.panels.iter().find(|p| p.active) {
            Some(panel) => format!("{}'s turn: roll or hold", panel.name),
            None => "Waiting for game to start...".to_string(),
        }
    }
}

impl RenderSink for TableView {
    fn apply(&mut self, command: RenderCommand) {
        trace!(?command, "Applying render command");
        match command {
            RenderCommand::SetName { seat, name } => self.panels[seat.index()].name = name,
            RenderCommand::SetScore { seat, score } => self.panels[seat.index()].score = score,
            RenderCommand::SetCurrent { seat, score } => {
                self.panels[seat.index()].current = score
            }
            RenderCommand::ShowDice { face } => self.dice = Some(face),
            RenderCommand::HideDice => self.dice = None,
            RenderCommand::SetActive { seat, active } => self.panels[seat.index()].active = active,
            RenderCommand::SetWinner { seat, winner } => self.panels[seat.index()].winner = winner,
            RenderCommand::SetInputEnabled { enabled } => self.input_enabled = enabled,
            RenderCommand::ShowOverlay { winner_name } => self.overlay = Some(winner_name),
            RenderCommand::HideOverlay => self.overlay = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_pig::{InputEvent, PlayerNames, Presentation, ScriptedDice};

    fn started(values: &[u32]) -> (Presentation<ScriptedDice>, TableView) {
        let mut presentation = Presentation::new(
            PlayerNames::new("Ada", "Bo"),
            ScriptedDice::from_values(values).unwrap(),
        );
        let mut view = TableView::new();
        presentation.start(&mut view);
        (presentation, view)
    }

    #[test]
    fn test_start_fills_view() {
        let (_, view) = started(&[2]);
        assert_eq!(view.panel(Seat::First).name, "Ada");
        assert!(view.panel(Seat::First).active);
        assert!(!view.panel(Seat::Second).active);
        assert!(view.input_enabled());
        assert_eq!(view.dice(), None);
        assert_eq!(view.status_message(), "Ada's turn: roll or hold");
    }

    #[test]
    fn test_view_tracks_a_turn() {
        let (mut presentation, mut view) = started(&[5, 4, 1]);
        presentation.handle(InputEvent::Roll, &mut view);
        presentation.handle(InputEvent::Roll, &mut view);
        assert_eq!(view.dice(), Some(DieFace::Four));
        assert_eq!(view.panel(Seat::First).current, 9);

        presentation.handle(InputEvent::Hold, &mut view);
        assert_eq!(view.panel(Seat::First).score, 9);
        assert_eq!(view.panel(Seat::First).current, 0);
        assert_eq!(view.dice(), None);
        assert!(view.panel(Seat::Second).active);

        presentation.handle(InputEvent::Roll, &mut view);
        assert!(view.panel(Seat::First).active);
        assert_eq!(view.dice(), None);
    }

    #[test]
    fn test_overlay_lifecycle() {
        let mut script = vec![6; 17];
        script.push(1);
        let (mut presentation, mut view) = started(&script);
        for _ in 0..17 {
            presentation.handle(InputEvent::Roll, &mut view);
        }
        presentation.handle(InputEvent::Hold, &mut view);

        assert_eq!(view.overlay(), Some("Ada"));
        assert!(view.panel(Seat::First).winner);
        assert!(!view.input_enabled());
        assert_eq!(view.dice(), Some(DieFace::Six));

        presentation.handle(InputEvent::DismissOverlay, &mut view);
        assert_eq!(view.overlay(), None);
        assert_eq!(view.status_message(), "Game over. Press N for a new game.");

        presentation.handle(InputEvent::NewGame, &mut view);
        assert!(view.input_enabled());
        assert!(!view.panel(Seat::First).winner);
        assert_eq!(view.panel(Seat::First).score, 0);
    }
}
