//! Text rendering and command handling for the terminal table.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use blackjack21::{Card, GameEngine, Outcome, RoundSnapshot};

/// A command typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    NewGame,
    Hit,
    Stand,
    Shuffle,
    Quit,
}

impl Command {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "n" | "new" => Some(Self::NewGame),
            "h" | "hit" => Some(Self::Hit),
            "s" | "stand" => Some(Self::Stand),
            "f" | "shuffle" => Some(Self::Shuffle),
            "q" | "quit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// The single game in play plus what the status line currently says.
pub struct Table {
    engine: GameEngine,
    min_stand_total: u8,
    color: bool,
    status: String,
}

impl Table {
    pub fn new(engine: GameEngine, min_stand_total: u8, color: bool) -> Self {
        Self {
            engine,
            min_stand_total,
            color,
            status: "Welcome to Blackjack!".to_string(),
        }
    }

    /// Deals the first round, then reads commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        self.apply(Command::NewGame);

        loop {
            writeln!(output, "{}", self.render()).context("writing table")?;
            write!(output, "> ").context("writing prompt")?;
            output.flush().context("flushing output")?;

            let mut line = String::new();
            let read = input.read_line(&mut line).context("reading command")?;
            if read == 0 {
                return Ok(());
            }

            match Command::parse(&line) {
                Some(Command::Quit) => {
                    writeln!(output, "Goodbye.").context("writing farewell")?;
                    return Ok(());
                }
                Some(command) => self.apply(command),
                None if line.trim().is_empty() => {}
                None => self.status = format!("Unknown command: {}", line.trim()),
            }
        }
    }

    /// Runs one command against the engine and updates the status line.
    pub fn apply(&mut self, command: Command) {
        tracing::debug!(?command, "applying command");

        self.status = match command {
            Command::NewGame => {
                let abandoned = self.engine.state().in_progress();
                match self.engine.new_game() {
                    Ok(()) if abandoned => {
                        "Round abandoned. New round: try to reach 21 without busting."
                            .to_string()
                    }
                    Ok(()) => "New round: try to reach 21 without busting.".to_string(),
                    Err(err) => format!("Cannot deal: {err}"),
                }
            }
            Command::Hit => match self.engine.hit() {
                Ok(_) => self
                    .engine
                    .outcome()
                    .map_or_else(|| self.status.clone(), announce),
                Err(_) => "No round in progress. Start a new game.".to_string(),
            },
            Command::Stand => {
                if !self.engine.can_stand() {
                    "No round in progress. Start a new game.".to_string()
                } else if !self.stand_allowed() {
                    format!(
                        "You can stand only when your total > {}.",
                        self.min_stand_total
                    )
                } else {
                    match self.engine.stand() {
                        Ok(_) => self
                            .engine
                            .outcome()
                            .map_or_else(|| self.status.clone(), announce),
                        Err(err) => format!("Cannot stand: {err}"),
                    }
                }
            }
            Command::Shuffle => {
                self.engine.shuffle();
                "Deck shuffled.".to_string()
            }
            Command::Quit => "Goodbye.".to_string(),
        };
    }

    fn stand_allowed(&self) -> bool {
        self.engine.can_stand() && self.engine.player_hand().total() > self.min_stand_total
    }

    pub fn render(&self) -> String {
        let snapshot = self.engine.snapshot();
        let mut lines = Vec::new();

        lines.push(String::new());
        lines.push(format!("Deck: {}", snapshot.cards_remaining));
        lines.push(format!(
            "Dealer: {} ({})",
            self.format_dealer(&snapshot),
            snapshot.dealer_visible_total
        ));
        lines.push(format!(
            "Player: {} ({})",
            self.format_cards(&snapshot.player_cards),
            snapshot.player_total
        ));
        lines.push(self.status.clone());
        lines.push(self.format_actions());

        lines.join("\n")
    }

    fn format_actions(&self) -> String {
        let parts = [
            self.format_action("new", "n", true),
            self.format_action("hit", "h", self.engine.can_hit()),
            self.format_action("stand", "s", self.stand_allowed()),
            self.format_action("shuffle", "f", true),
            self.format_action("quit", "q", true),
        ];
        format!("Actions: {}", parts.join(" "))
    }

    fn format_action(&self, label: &str, key: &str, allowed: bool) -> String {
        let text = format!("[{key}]{label}");
        if allowed {
            self.colorize(&text, "32")
        } else {
            self.colorize(&text, "90")
        }
    }

    fn format_dealer(&self, snapshot: &RoundSnapshot) -> String {
        if snapshot.dealer_cards.is_empty() {
            return "(no cards)".to_string();
        }

        snapshot
            .dealer_cards
            .iter()
            .enumerate()
            .map(|(index, card)| {
                if snapshot.dealer_hole_hidden && index == 1 {
                    "??".to_string()
                } else {
                    self.format_card(card)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn format_cards(&self, cards: &[Card]) -> String {
        if cards.is_empty() {
            return "(no cards)".to_string();
        }
        cards
            .iter()
            .map(|card| self.format_card(card))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn format_card(&self, card: &Card) -> String {
        let text = card.to_string();
        if card.suit.is_red() {
            self.colorize(&text, "31")
        } else {
            text
        }
    }

    fn colorize(&self, text: &str, code: &str) -> String {
        if self.color {
            format!("\u{1b}[{code}m{text}\u{1b}[0m")
        } else {
            text.to_string()
        }
    }
}

fn announce(outcome: Outcome) -> String {
    match outcome {
        Outcome::PlayerWin => "You win!",
        Outcome::DealerWin => "Dealer wins.",
        Outcome::Push => "Push (tie).",
        Outcome::PlayerBust => "Bust! Dealer wins.",
    }
    .to_string()
}
