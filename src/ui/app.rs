use crate::ai::{self, Difficulty};
use crate::config::GameConfig;
use crate::game::{Board, Player};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{Terminal, backend::Backend};
use std::io;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Win(Player),
    Draw,
}

/// The interactive game session: owns the board, turn order, and everything
/// the engine deliberately does not (restarts, delays, messages).
pub struct App {
    board: Board,
    turn: Player,
    outcome: Option<Outcome>,
    selected_column: usize,
    difficulty: Difficulty,
    ai_delay: Duration,
    human_first: bool,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &GameConfig) -> Self {
        App {
            board: Board::new(),
            turn: if config.human_first {
                Player::Human
            } else {
                Player::Ai
            },
            outcome: None,
            selected_column: 3, // Start in middle
            difficulty: config.difficulty,
            ai_delay: Duration::from_millis(config.ai_delay_ms),
            human_first: config.human_first,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

            if self.should_quit {
                break;
            }

            if self.outcome.is_none() && self.turn == Player::Ai {
                // The engine is synchronous; the pause is purely presentation
                std::thread::sleep(self.ai_delay);
                self.ai_move();
                continue;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < 6 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.human_move();
            }
            KeyCode::Char('d') => {
                self.difficulty = self.difficulty.next();
                self.message = Some(format!("Difficulty: {}", self.difficulty));
            }
            KeyCode::Char('r') => {
                self.board = Board::new();
                self.turn = if self.human_first {
                    Player::Human
                } else {
                    Player::Ai
                };
                self.outcome = None;
                self.selected_column = 3;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop a human disc in the selected column
    fn human_move(&mut self) {
        if self.outcome.is_some() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }
        self.apply_move(self.selected_column);
    }

    /// Ask the engine for the AI's column and play it
    fn ai_move(&mut self) {
        if let Some(col) = ai::best_move(&self.board, self.difficulty) {
            self.apply_move(col);
        }
    }

    fn apply_move(&mut self, col: usize) {
        let Some(next) = self.board.drop_disc(col, self.turn) else {
            self.message = Some("Column is full!".to_string());
            return;
        };
        self.board = next;

        if let Some(winner) = self.board.winner() {
            self.outcome = Some(Outcome::Win(winner));
            self.message = Some(match winner {
                Player::Human => "You win!".to_string(),
                Player::Ai => "AI wins!".to_string(),
            });
        } else if self.board.is_draw() {
            self.outcome = Some(Outcome::Draw);
            self.message = Some("It's a draw!".to_string());
        } else {
            self.turn = self.turn.other();
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.board,
            self.turn,
            self.outcome.is_some(),
            self.difficulty,
            self.selected_column,
            &self.message,
        );
    }
}
