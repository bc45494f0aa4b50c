//! Interactive menu driving a [`ReservationLedger`] from line-based input.
//!
//! The session is a small state machine. Each step reads at most a handful of
//! lines, writes to the transcript and returns the next state. End of input
//! in any state ends the session quietly, without the goodbye line.

pub mod transcript;

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use crate::application::ReservationLedger;
use crate::domain::validate_item;

/// Where the session currently is in the menu flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuState {
    /// Ask which item to work with
    ChooseItem,
    /// Main menu for one item: reserve, list, quit
    ItemMenu(String),
    /// After a reservation attempt: another one?
    ConfirmAnother,
    /// Menu shown when the user declines another reservation
    Options,
    Done,
}

/// Counters reported when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub attempts: usize,
    pub confirmed: usize,
}

pub struct Session<'a, R, W> {
    ledger: &'a mut ReservationLedger,
    input: R,
    output: W,
    summary: SessionSummary,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(ledger: &'a mut ReservationLedger, input: R, output: W) -> Self {
        Self {
            ledger,
            input,
            output,
            summary: SessionSummary::default(),
        }
    }

    /// Run the menu loop until the user quits or input runs out.
    pub fn run(mut self) -> Result<SessionSummary> {
        self.say(transcript::WELCOME)?;

        let mut state = MenuState::ChooseItem;
        while state != MenuState::Done {
            let next = self.step(state)?;
            debug!(state = ?next, "menu transition");
            state = next;
        }

        self.output.flush().context("Failed to flush session output")?;
        Ok(self.summary)
    }

    /// Advance the menu by one state.
    pub fn step(&mut self, state: MenuState) -> Result<MenuState> {
        match state {
            MenuState::ChooseItem => self.choose_item(),
            MenuState::ItemMenu(item) => self.item_menu(&item),
            MenuState::ConfirmAnother => self.confirm_another(),
            MenuState::Options => self.options_menu(),
            MenuState::Done => Ok(MenuState::Done),
        }
    }

    fn choose_item(&mut self) -> Result<MenuState> {
        let Some(line) = self.ask(transcript::ITEM_PROMPT)? else {
            return Ok(MenuState::Done);
        };

        match validate_item(&line) {
            Ok(item) => Ok(MenuState::ItemMenu(item.to_string())),
            Err(e) => {
                self.say(&transcript::error(&e))?;
                Ok(MenuState::ChooseItem)
            }
        }
    }

    fn item_menu(&mut self, item: &str) -> Result<MenuState> {
        self.say(&transcript::item_menu(item))?;
        let Some(choice) = self.ask(transcript::CHOICE_PROMPT)? else {
            return Ok(MenuState::Done);
        };

        match choice.as_str() {
            "1" => {
                let Some(start_date) = self.ask(transcript::START_DATE_PROMPT)? else {
                    return Ok(MenuState::Done);
                };
                let Some(duration) = self.ask(transcript::DURATION_PROMPT)? else {
                    return Ok(MenuState::Done);
                };

                let outcome = self.ledger.attempt_reservation(&start_date, &duration, item);
                self.summary.attempts += 1;
                if outcome.is_ok() {
                    self.summary.confirmed += 1;
                }
                self.say(&transcript::reservation_outcome(&outcome))?;
                Ok(MenuState::ConfirmAnother)
            }
            "2" => {
                self.print_listing()?;
                Ok(MenuState::ChooseItem)
            }
            "3" => self.quit(),
            _ => {
                self.say(transcript::INVALID_CHOICE)?;
                Ok(MenuState::ChooseItem)
            }
        }
    }

    fn confirm_another(&mut self) -> Result<MenuState> {
        loop {
            let Some(answer) = self.ask(transcript::ANOTHER_PROMPT)? else {
                return Ok(MenuState::Done);
            };
            match answer.to_lowercase().as_str() {
                "y" => return Ok(MenuState::ChooseItem),
                "n" => return Ok(MenuState::Options),
                _ => self.say(transcript::INVALID_YES_NO)?,
            }
        }
    }

    fn options_menu(&mut self) -> Result<MenuState> {
        loop {
            self.say(transcript::options_menu())?;
            let Some(choice) = self.ask(transcript::CHOICE_PROMPT)? else {
                return Ok(MenuState::Done);
            };
            match choice.as_str() {
                "1" => return Ok(MenuState::ChooseItem),
                "2" => self.print_listing()?,
                "3" => return self.quit(),
                _ => self.say(transcript::INVALID_CHOICE)?,
            }
        }
    }

    fn quit(&mut self) -> Result<MenuState> {
        self.say(transcript::GOODBYE)?;
        Ok(MenuState::Done)
    }

    fn print_listing(&mut self) -> Result<()> {
        let text = transcript::listing(self.ledger.list_reservations());
        self.say(&text)
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text).context("Failed to write to session output")
    }

    /// Print `prompt` and read one trimmed line. `None` at end of input.
    /// Bytes that are not valid UTF-8 become U+FFFD and fail validation downstream.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush prompt")?;

        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .context("Failed to read from session input")?;
        if read == 0 {
            debug!("end of input");
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }
}
