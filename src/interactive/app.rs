//! TUI application state and logic

use crate::game::{Game, GameStatus};
use crate::solver::Agent;
use crate::tree::DecisionTree;
use crate::wordlists::WordList;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub words: &'a WordList,
    pub game: Game<'a>,
    pub agent: Agent<'a>,
    pub input: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub input_mode: InputMode,
    pub agent_line: Option<String>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Typing the next guess
    Typing,
    /// Game settled; waiting for new-game/quit
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; 7],
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(words: &'a WordList, tree: &'a DecisionTree) -> Self {
        let mut app = Self {
            words,
            game: Game::random(words),
            agent: Agent::new(tree),
            input: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            input_mode: InputMode::Typing,
            agent_line: None,
            should_quit: false,
        };

        app.add_message(
            &format!("Guess the {}-letter word!", words.word_length()),
            MessageStyle::Info,
        );
        app.add_message("Type letters, Enter to submit, Esc to quit.", MessageStyle::Info);
        app
    }

    pub fn push_letter(&mut self, c: char) {
        if self.input_mode == InputMode::Typing
            && c.is_ascii_alphabetic()
            && self.input.len() < self.words.word_length()
        {
            self.input.push(c.to_ascii_uppercase());
        }
    }

    pub fn pop_letter(&mut self) {
        self.input.pop();
    }

    pub fn submit_guess(&mut self) {
        if self.input.len() != self.words.word_length() {
            self.add_message(
                &format!("Need {} letters!", self.words.word_length()),
                MessageStyle::Error,
            );
            return;
        }

        let text = self.input.clone();
        match self.game.enter_guess(&text) {
            Ok(_) => self.input.clear(),
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                self.input.clear();
                return;
            }
        }

        match self.game.status() {
            GameStatus::InProgress => {}
            GameStatus::Won => {
                let guess_count = self.game.rows().len();
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                if guess_count < self.stats.guess_distribution.len() {
                    self.stats.guess_distribution[guess_count] += 1;
                }

                let celebration = match guess_count {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it in six! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.finish_game();
            }
            GameStatus::Lost => {
                let target = self.game.target().text().to_string();
                self.add_message(
                    &format!("Out of guesses! The word was {target}."),
                    MessageStyle::Error,
                );
                self.stats.total_games += 1;
                self.finish_game();
            }
        }
    }

    /// Settle a finished game: agent comparison line, input mode switch
    fn finish_game(&mut self) {
        self.agent_line = Some(self.compute_agent_line());
        self.input_mode = InputMode::GameOver;
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    fn compute_agent_line(&mut self) -> String {
        match self.agent.solve(self.game.target()) {
            Ok(guesses) => {
                let sequence: Vec<&str> =
                    guesses.iter().map(crate::core::Word::text).collect();
                format!("Agent: {} ({} guesses)", sequence.join(" → "), guesses.len())
            }
            Err(_) => "Agent could not determine a solution".to_string(),
        }
    }

    pub fn new_game(&mut self) {
        self.game = Game::random(self.words);
        self.input.clear();
        self.agent_line = None;
        self.input_mode = InputMode::Typing;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only the most recent messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q' | 'Q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n' | 'N') => {
                        app.new_game();
                    }
                    _ => {}
                },
                InputMode::Typing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char(c) => {
                        app.push_letter(c);
                    }
                    KeyCode::Backspace => {
                        app.pop_letter();
                    }
                    KeyCode::Enter => {
                        app.submit_guess();
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
