use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};

use crate::ai::{Agent, RandomAgent, TieredAgent};
use crate::config::AppConfig;
use crate::connect_four::{GameOutcome, GameState, MoveError, Side, COLS};
use crate::tictactoe::{Mark, TttGame, CELLS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    ConnectFour,
    TicTacToe,
}

pub struct App {
    config: AppConfig,
    screen: Screen,

    // Connect Four
    game_state: GameState,
    selected_column: usize,
    agent: Box<dyn Agent>,
    /// Armed while the computer "thinks"; disarmed on reset or game end so a
    /// stale selection is never applied to a fresh board
    think_deadline: Option<Instant>,

    // Tic-Tac-Toe
    ttt: TttGame,
    selected_cell: usize,

    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let agent = Self::tiered_agent(&config);
        App {
            config,
            screen: Screen::ConnectFour,
            game_state: GameState::new(),
            selected_column: 3, // Start in middle
            agent,
            think_deadline: None,
            ttt: TttGame::new(),
            selected_cell: 4,
            should_quit: false,
            message: None,
        }
    }

    fn tiered_agent(config: &AppConfig) -> Box<dyn Agent> {
        match config.ai.seed {
            Some(seed) => Box::new(TieredAgent::from_seed(seed)),
            None => Box::new(TieredAgent::new()),
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.step_computer();
            self.handle_events()?;
        }
        Ok(())
    }

    /// Drive the computer's turn: arm the pacing delay when the turn starts,
    /// then pick and apply a column once it elapses.
    fn step_computer(&mut self) {
        let computer_to_move = self.screen == Screen::ConnectFour
            && !self.game_state.is_terminal()
            && self.game_state.current_side() == Side::Computer;

        if !computer_to_move {
            self.think_deadline = None;
            return;
        }

        match self.think_deadline {
            None => {
                let delay = Duration::from_millis(self.config.ai.think_delay_ms);
                self.think_deadline = Some(Instant::now() + delay);
            }
            Some(deadline) if Instant::now() >= deadline => {
                self.think_deadline = None;
                let column = self
                    .agent
                    .select_column(self.game_state.board_mut(), Side::Computer);
                if self.game_state.apply_move_mut(column).is_ok() {
                    self.announce_outcome();
                }
            }
            Some(_) => {}
        }
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        let tick = Duration::from_millis(self.config.ui.tick_rate_ms);
        if event::poll(tick)? {
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
                return;
            }
            KeyCode::Tab => {
                self.screen = match self.screen {
                    Screen::ConnectFour => Screen::TicTacToe,
                    Screen::TicTacToe => Screen::ConnectFour,
                };
                return;
            }
            _ => {}
        }

        match self.screen {
            Screen::ConnectFour => self.handle_connect_four_key(key),
            Screen::TicTacToe => self.handle_ttt_key(key),
        }
    }

    fn handle_connect_four_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                // Reset game; any pending computer move dies with the board
                self.game_state = GameState::new();
                self.selected_column = 3;
                self.think_deadline = None;
                self.message = Some("New game started!".to_string());
            }
            KeyCode::Char('h') => {
                self.agent = Self::tiered_agent(&self.config);
                self.message = Some("Opponent: Tiered".to_string());
            }
            KeyCode::Char('a') => {
                self.agent = Box::new(RandomAgent::new());
                self.message = Some("Opponent: Random".to_string());
            }
            _ => {}
        }
    }

    /// Drop the human's piece in the selected column
    fn drop_piece(&mut self) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        if self.game_state.current_side() != Side::Human {
            return; // the computer is still thinking
        }

        match self.game_state.apply_move_mut(self.selected_column) {
            Ok(()) => self.announce_outcome(),
            Err(MoveError::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    fn announce_outcome(&mut self) {
        if let Some(outcome) = self.game_state.outcome() {
            self.message = Some(match outcome {
                GameOutcome::Winner(side) => format!("{} WINS!", side.name()),
                GameOutcome::Draw => "DRAW".to_string(),
            });
        }
    }

    fn handle_ttt_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => {
                if self.selected_cell % 3 > 0 {
                    self.selected_cell -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_cell % 3 < 2 {
                    self.selected_cell += 1;
                }
            }
            KeyCode::Up => {
                if self.selected_cell >= 3 {
                    self.selected_cell -= 3;
                }
            }
            KeyCode::Down => {
                if self.selected_cell + 3 < CELLS {
                    self.selected_cell += 3;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                // Taken squares and finished games are simply ignored
                self.ttt.play(self.selected_cell);
            }
            KeyCode::Char('r') => {
                self.ttt.reset();
                self.message = Some("New game started!".to_string());
            }
            KeyCode::Char('x') => {
                self.ttt.set_first(Mark::X);
                self.message = Some("X goes first".to_string());
            }
            KeyCode::Char('o') => {
                self.ttt.set_first(Mark::O);
                self.message = Some("O goes first".to_string());
            }
            _ => {}
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        match self.screen {
            Screen::ConnectFour => super::game_view::render(
                frame,
                &self.game_state,
                self.selected_column,
                self.agent.name(),
                &self.message,
            ),
            Screen::TicTacToe => super::ttt_view::render(frame, &self.ttt, self.selected_cell),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
