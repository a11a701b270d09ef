use ndarray::ArrayView2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Uninitialized -> Running, on the first reveal
/// - Running -> GameOver, on a mine or a complete set of correct flags
/// - any -> Uninitialized, on restart
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Board hidden, mines not placed yet
    #[default]
    Uninitialized,
    /// Mines placed, moves accepted
    Running,
    /// Board fully shown, the next action starts over
    GameOver,
}

/// How the last game ended. Both endings share [`GameState::GameOver`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ending {
    Detonated(CellIndex),
    AllMinesFlagged,
}

/// Input classified by the front end.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Reveal,
    ToggleFlag,
    Chord,
    Restart,
}

/// Result of handling one action, tells the front end whether to redraw.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Ignored,
    Updated,
    Lost,
    Won,
    Restarted,
}

impl Outcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Owns the board and drives it through a game, one action at a time.
#[derive(Clone, Debug)]
pub struct Game<G = RandomMineFieldGenerator> {
    board: Board,
    generator: G,
    state: GameState,
    ending: Option<Ending>,
}

impl Game {
    /// Game with randomly placed mines.
    pub fn new(config: BoardConfig, seed: u64) -> Result<Self> {
        Self::with_generator(config, RandomMineFieldGenerator::new(seed))
    }
}

impl<G: MineFieldGenerator> Game<G> {
    pub fn with_generator(config: BoardConfig, generator: G) -> Result<Self> {
        let config = config.validate()?;
        generator.check(config)?;
        Ok(Self {
            board: Board::new(config),
            generator,
            state: GameState::default(),
            ending: None,
        })
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn ending(&self) -> Option<Ending> {
        self.ending
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> BoardConfig {
        self.board.config()
    }

    pub fn cell(&self, index: CellIndex) -> DisplayCell {
        self.board.cell(index)
    }

    pub fn display(&self) -> ArrayView2<'_, DisplayCell> {
        self.board.display()
    }

    pub fn flags(&self) -> FlagCounters {
        self.board.flags()
    }

    pub fn mines_left(&self) -> i32 {
        self.board.mines_left()
    }

    /// Cell under board coordinates, `None` when outside.
    pub fn locate(&self, coords: Coord2) -> Option<CellIndex> {
        self.board.geometry().index_of(coords)
    }

    /// Dispatches one input. `cell` is `None` for clicks outside the board.
    pub fn handle(&mut self, action: Action, cell: Option<CellIndex>) -> Result<Outcome> {
        if self.state == GameState::GameOver || action == Action::Restart {
            self.reset();
            return Ok(Outcome::Restarted);
        }

        let Some(index) = cell else {
            return Ok(Outcome::Ignored);
        };
        if !self.board.geometry().contains(index) {
            return Err(GameError::InvalidIndex(index));
        }

        Ok(match (self.state, action) {
            (GameState::Uninitialized, Action::Reveal) => {
                self.start(index);
                self.reveal(index)
            }
            // nothing to flag or chord before the mines exist
            (GameState::Uninitialized, _) => Outcome::Ignored,
            (GameState::Running, Action::Reveal) => self.reveal(index),
            (GameState::Running, Action::ToggleFlag) => self.toggle_flag(index),
            (GameState::Running, Action::Chord) => self.chord(index),
            (GameState::Running, Action::Restart) | (GameState::GameOver, _) => Outcome::Ignored,
        })
    }

    /// Hides the board and waits for a new first reveal.
    pub fn reset(&mut self) {
        log::debug!("Resetting board");
        self.board.clear();
        self.state = GameState::Uninitialized;
        self.ending = None;
    }

    fn start(&mut self, first: CellIndex) {
        let field = self.generator.generate(self.board.config(), first);
        self.board.install(field);
        self.state = GameState::Running;
    }

    fn reveal(&mut self, index: CellIndex) -> Outcome {
        let outcome = self.board.reveal_single(index);
        self.after_reveal(outcome)
    }

    fn chord(&mut self, index: CellIndex) -> Outcome {
        let outcome = self.board.open_all(index);
        self.after_reveal(outcome)
    }

    fn toggle_flag(&mut self, index: CellIndex) -> Outcome {
        let outcome = self.board.toggle_flag(index);
        if self.board.all_mines_flagged() {
            self.game_over(Ending::AllMinesFlagged);
            Outcome::Won
        } else if outcome.has_update() {
            Outcome::Updated
        } else {
            Outcome::Ignored
        }
    }

    fn after_reveal(&mut self, outcome: RevealOutcome) -> Outcome {
        match outcome {
            RevealOutcome::NoChange => Outcome::Ignored,
            RevealOutcome::Revealed => Outcome::Updated,
            RevealOutcome::HitMine(index) => {
                self.game_over(Ending::Detonated(index));
                Outcome::Lost
            }
        }
    }

    fn game_over(&mut self, ending: Ending) {
        log::debug!("Game over: {:?}", ending);
        self.board.finalize();
        self.state = GameState::GameOver;
        self.ending = Some(ending);
    }
}
