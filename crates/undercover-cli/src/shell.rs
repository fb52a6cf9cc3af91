//! Line-based pass-and-play shell.
//!
//! Feeds Enter presses into a [`RevealSession`] as events and renders the
//! returned actions. The screen is cleared before every pass so the next
//! player cannot scroll back.

use std::io::{BufRead, Write};

use undercover_core::{OwnedRoleView, RevealAction, RevealEvent, RevealSession};

use crate::error::CliError;

/// ANSI: clear screen, cursor home.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Terminal front-end over any line input and text output.
pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Walk every player through their reveal.
    pub fn run_session(&mut self, session: &mut RevealSession) -> Result<(), CliError> {
        let total = session.player_count();
        self.clear()?;
        self.render(&[RevealAction::PromptPass { player: 0, total }])?;

        while !session.is_finished() {
            self.wait_for_enter("Press Enter to reveal your role.")?;
            let actions = session.handle(RevealEvent::Reveal)?;
            self.render(&actions)?;

            self.wait_for_enter("Press Enter to hide and pass to the next player.")?;
            self.clear()?;
            let actions = session.handle(RevealEvent::Advance)?;
            self.render(&actions)?;
        }

        Ok(())
    }

    /// Ask a yes/no question; anything but `y`/`yes` is no.
    pub fn confirm(&mut self, question: &str) -> Result<bool, CliError> {
        write!(self.output, "{question} [y/N] ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(false);
        }

        Ok(matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
    }

    /// Consume the shell, returning the output stream.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    fn render(&mut self, actions: &[RevealAction]) -> Result<(), CliError> {
        for action in actions {
            match action {
                RevealAction::PromptPass { player, total } => {
                    writeln!(self.output, "Player {} of {}", player + 1, total)?;
                    writeln!(self.output, "Pass the device to Player {}.", player + 1)?;
                },
                RevealAction::ShowRole { view: OwnedRoleView::Spy, .. } => {
                    writeln!(self.output, "You are the SPY")?;
                    writeln!(
                        self.output,
                        "Try to guess the secret word without revealing yourself."
                    )?;
                },
                RevealAction::ShowRole { view: OwnedRoleView::Civilian { secret_word }, .. } => {
                    writeln!(self.output, "{secret_word}")?;
                    writeln!(self.output, "This is the secret word. Blend in and find the spy.")?;
                },
                RevealAction::Finished { total } => {
                    writeln!(self.output, "All {total} roles assigned.")?;
                    writeln!(
                        self.output,
                        "Everyone has seen their role. Start the discussion in real life."
                    )?;
                },
            }
        }

        Ok(())
    }

    fn wait_for_enter(&mut self, prompt: &str) -> Result<(), CliError> {
        writeln!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::InputClosed);
        }

        Ok(())
    }

    fn clear(&mut self) -> Result<(), CliError> {
        write!(self.output, "{CLEAR_SCREEN}")?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Cursor;

    use undercover_core::{GameConfig, RevealState, Role};

    use super::*;

    fn session() -> RevealSession {
        let config =
            GameConfig::from_parts(vec![Role::Civilian, Role::Spy, Role::Civilian], "Museum")
                .unwrap();
        RevealSession::new(config).unwrap()
    }

    #[test]
    fn full_session_renders_each_role_once() {
        let mut session = session();
        let mut shell = Shell::new(Cursor::new("\n".repeat(6)), Vec::new());

        shell.run_session(&mut session).unwrap();
        assert!(session.is_finished());

        let output = String::from_utf8(shell.into_output()).unwrap();
        assert_eq!(output.matches("You are the SPY").count(), 1);
        assert_eq!(output.matches("Museum\n").count(), 2);
        assert!(output.contains("Player 3 of 3"));
        assert!(output.contains("All 3 roles assigned."));
    }

    #[test]
    fn screen_cleared_before_each_pass() {
        let mut session = session();
        let mut shell = Shell::new(Cursor::new("\n".repeat(6)), Vec::new());

        shell.run_session(&mut session).unwrap();

        let output = String::from_utf8(shell.into_output()).unwrap();
        // Once at the start, once after each player hides.
        assert_eq!(output.matches(CLEAR_SCREEN).count(), 4);

        // Nothing from the spy's screen survives into the next player's.
        let after_spy = output.split(CLEAR_SCREEN).nth(3).unwrap();
        assert!(!after_spy.contains("SPY"));
    }

    #[test]
    fn closed_input_stops_mid_walk() {
        let mut session = session();
        let mut shell = Shell::new(Cursor::new("\n\n\n"), Vec::new());

        let result = shell.run_session(&mut session);
        assert!(matches!(result, Err(CliError::InputClosed)));
        assert_eq!(session.state(), RevealState::Revealed(1));
    }

    #[test]
    fn confirm_accepts_yes_only() {
        let mut shell = Shell::new(Cursor::new("y\nYES\nno\n\n"), Vec::new());

        assert!(shell.confirm("Again?").unwrap());
        assert!(shell.confirm("Again?").unwrap());
        assert!(!shell.confirm("Again?").unwrap());
        assert!(!shell.confirm("Again?").unwrap());
        assert!(!shell.confirm("Again?").unwrap());
    }
}
