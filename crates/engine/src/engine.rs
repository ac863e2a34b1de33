//! Engine module - manages the complete game state
//!
//! Ties the field together with the player, score and game-over flag and
//! implements the turn rules: player movement, item pickup, spawning and the
//! enemy sweep.

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::core::Field;
use crate::snapshot::GameSnapshot;
use crate::types::{Cell, Direction, Input, FIELD_COLS, FIELD_ROWS, PLAYER_START};

/// The engine at the size the game is played with.
pub type Game = GameEngine<FIELD_ROWS, FIELD_COLS>;

/// What the driver should do after an input has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Engine state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Playing,
    GameOver,
}

/// Text shown instead of the field once the game is lost.
pub fn game_over_text(score: u32) -> String {
    format!(
        "\n\n\n\n\n          You died, Game Over!\n\n          Your score: {score}\n\n          Press enter to restart or q to quit"
    )
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameEngine<const ROWS: usize = FIELD_ROWS, const COLS: usize = FIELD_COLS> {
    field: Field<ROWS, COLS>,
    rng: StdRng,
    player_row: usize,
    player_col: usize,
    score: u32,
    game_over: bool,
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
}

impl<const ROWS: usize, const COLS: usize> GameEngine<ROWS, COLS> {
    /// Create a game whose randomness is seeded from the OS.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Create a game with a deterministic RNG seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a game in its start state driven by `rng`.
    pub fn from_rng(rng: StdRng) -> Self {
        let mut engine = Self {
            field: Field::new(),
            rng,
            player_row: PLAYER_START.0,
            player_col: PLAYER_START.1,
            score: 0,
            game_over: false,
            episode_id: 0,
        };
        engine.restart();
        engine
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn status(&self) -> Status {
        if self.game_over {
            Status::GameOver
        } else {
            Status::Playing
        }
    }

    /// Stored player position as `(row, col)`.
    pub fn player(&self) -> (usize, usize) {
        (self.player_row, self.player_col)
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn field(&self) -> &Field<ROWS, COLS> {
        &self.field
    }

    /// Direct field access for test setup and tooling.
    ///
    /// Callers are responsible for keeping the player coordinates in sync with
    /// the `Player` cell.
    pub fn field_mut(&mut self) -> &mut Field<ROWS, COLS> {
        &mut self.field
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            score: self.score,
            game_over: self.game_over,
            player: self.player(),
            items: self.field.count(Cell::Item),
            enemies: self.field.count(Cell::Enemy),
            episode_id: self.episode_id,
        }
    }

    /// Return to the start state: fresh border, player at the start cell,
    /// one item, no enemies, score zero.
    pub fn reset(&mut self) {
        self.episode_id = self.episode_id.wrapping_add(1);
        self.restart();
        info!(episode_id = self.episode_id, "game reset");
    }

    fn restart(&mut self) {
        self.field.clear();

        (self.player_row, self.player_col) = PLAYER_START;
        self.field.set(self.player_row, self.player_col, Cell::Player);

        self.score = 0;
        self.game_over = false;

        self.spawn(Cell::Item);
    }

    /// Apply one input. This is the only way the game advances.
    pub fn handle_input(&mut self, input: Input) -> Flow {
        if input == Input::Quit {
            return Flow::Quit;
        }

        if self.game_over {
            if input == Input::Confirm {
                self.reset();
            }
            return Flow::Continue;
        }

        if let Some(direction) = input.direction() {
            self.move_player(direction);
            if !self.game_over {
                self.move_enemies();
            }
        }

        Flow::Continue
    }

    /// Current frame: the field as text, or the game over summary.
    pub fn render(&self) -> String {
        if self.game_over {
            return game_over_text(self.score);
        }

        let mut out = String::new();
        self.field.write_text(&mut out);
        out
    }

    fn move_player(&mut self, direction: Direction) {
        let Some((row, col)) = direction
            .step(self.player_row, self.player_col)
            .filter(|&(row, col)| self.field.is_interior(row, col))
        else {
            return;
        };

        self.field.set(self.player_row, self.player_col, Cell::Empty);

        match self.field.at(row, col) {
            Cell::Enemy => {
                self.end_game("player ran into an enemy");
                return;
            }
            Cell::Item => {
                self.score += 1;
                debug!(score = self.score, row, col, "item collected");
                self.spawn(Cell::Item);
                self.spawn(Cell::Enemy);
            }
            _ => {}
        }

        self.field.set(row, col, Cell::Player);
        self.player_row = row;
        self.player_col = col;
    }

    /// One row-major sweep over the interior, mutating the grid in place.
    ///
    /// An enemy that steps right or down lands on a cell the sweep has not
    /// reached yet and gets another step when it is visited.
    fn move_enemies(&mut self) {
        for row in 1..ROWS.saturating_sub(1) {
            for col in 1..COLS.saturating_sub(1) {
                if self.field.at(row, col) != Cell::Enemy {
                    continue;
                }

                let direction = Direction::ALL[self.rng.gen_range(0..Direction::ALL.len())];
                let Some((target_row, target_col)) = direction.step(row, col) else {
                    continue;
                };

                match self.field.get(target_row, target_col) {
                    Some(Cell::Empty) => {
                        self.field.set(target_row, target_col, Cell::Enemy);
                        self.field.set(row, col, Cell::Empty);
                    }
                    Some(Cell::Player) => {
                        self.end_game("enemy caught the player");
                        return;
                    }
                    _ => {}
                }
            }
        }
    }

    fn spawn(&mut self, cell: Cell) -> Option<(usize, usize)> {
        match self.field.random_empty_interior_cell(&mut self.rng) {
            Some((row, col)) => {
                self.field.set(row, col, cell);
                debug!(?cell, row, col, "spawned");
                Some((row, col))
            }
            None => {
                warn!(?cell, "no free interior cell, spawn skipped");
                None
            }
        }
    }

    fn end_game(&mut self, reason: &'static str) {
        self.game_over = true;
        info!(score = self.score, episode_id = self.episode_id, reason, "game over");
    }
}

impl<const ROWS: usize, const COLS: usize> Default for GameEngine<ROWS, COLS> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BorderKind;

    type SmallGame = GameEngine<12, 12>;

    /// Remove everything but the border and the player.
    fn bare(seed: u64) -> SmallGame {
        let mut game = SmallGame::with_seed(seed);
        let field = game.field_mut();
        let positions: Vec<_> = field.interior_positions().collect();
        for (row, col) in positions {
            if field.at(row, col) == Cell::Item {
                field.set(row, col, Cell::Empty);
            }
        }
        game
    }

    fn enemy_positions(game: &SmallGame) -> Vec<(usize, usize)> {
        game.field()
            .interior_positions()
            .filter(|&(row, col)| game.field().at(row, col) == Cell::Enemy)
            .collect()
    }

    #[test]
    fn test_new_game_state() {
        let game = SmallGame::with_seed(1);
        assert_eq!(game.score(), 0);
        assert!(!game.game_over());
        assert_eq!(game.status(), Status::Playing);
        assert_eq!(game.player(), (1, 1));
        assert_eq!(game.field().at(1, 1), Cell::Player);
        assert_eq!(game.field().count(Cell::Item), 1);
        assert_eq!(game.field().count(Cell::Enemy), 0);
        assert_eq!(game.episode_id(), 0);
    }

    #[test]
    fn test_reset_increments_episode_id() {
        let mut game = SmallGame::with_seed(1);
        game.reset();
        assert_eq!(game.episode_id(), 1);
        game.reset();
        assert_eq!(game.episode_id(), 2);
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = SmallGame::with_seed(99);
        let mut b = SmallGame::with_seed(99);
        for input in [Input::MoveRight, Input::MoveDown, Input::MoveRight, Input::MoveDown] {
            a.handle_input(input);
            b.handle_input(input);
        }
        assert_eq!(a.field(), b.field());
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn test_player_step_into_empty_cell() {
        let mut game = bare(3);
        game.move_player(Direction::Down);
        assert_eq!(game.player(), (2, 1));
        assert_eq!(game.field().at(1, 1), Cell::Empty);
        assert_eq!(game.field().at(2, 1), Cell::Player);
    }

    #[test]
    fn test_player_step_into_border_is_noop() {
        let mut game = bare(3);
        let before = game.field().clone();
        game.move_player(Direction::Up);
        game.move_player(Direction::Left);
        assert_eq!(game.player(), (1, 1));
        assert_eq!(game.field(), &before);
    }

    #[test]
    fn test_player_step_into_enemy_clears_player_cell() {
        let mut game = bare(3);
        game.field_mut().set(1, 2, Cell::Enemy);

        game.move_player(Direction::Right);

        assert!(game.game_over());
        assert_eq!(game.field().at(1, 1), Cell::Empty);
        assert_eq!(game.field().at(1, 2), Cell::Enemy);
        assert_eq!(game.player(), (1, 1));
    }

    #[test]
    fn test_item_pickup_spawns_item_and_enemy() {
        let mut game = bare(5);
        game.field_mut().set(2, 1, Cell::Item);

        game.move_player(Direction::Down);

        assert_eq!(game.score(), 1);
        assert_eq!(game.player(), (2, 1));
        assert_eq!(game.field().at(2, 1), Cell::Player);
        assert_eq!(game.field().count(Cell::Item), 1);
        assert_eq!(game.field().count(Cell::Enemy), 1);
    }

    #[test]
    fn test_enemy_boxed_in_never_moves() {
        let mut game = bare(11);
        // Enemy at (5, 5) surrounded by items.
        game.field_mut().set(5, 5, Cell::Enemy);
        for (row, col) in [(4, 5), (5, 6), (6, 5), (5, 4)] {
            game.field_mut().set(row, col, Cell::Item);
        }

        for _ in 0..50 {
            game.move_enemies();
        }

        assert_eq!(enemy_positions(&game), vec![(5, 5)]);
        assert!(!game.game_over());
    }

    #[test]
    fn test_enemies_block_each_other_and_borders() {
        let mut game = bare(13);
        // Bottom-right corner pocket: border on two sides, item and enemy on the others.
        game.field_mut().set(10, 10, Cell::Enemy);
        game.field_mut().set(10, 9, Cell::Enemy);
        game.field_mut().set(9, 10, Cell::Item);
        game.field_mut().set(9, 9, Cell::Item);
        game.field_mut().set(10, 8, Cell::Item);

        for _ in 0..50 {
            game.move_enemies();
        }

        assert_eq!(enemy_positions(&game), vec![(10, 9), (10, 10)]);
        assert_eq!(game.field().at(11, 10), Cell::Border(BorderKind::Horizontal));
        assert_eq!(game.field().at(10, 11), Cell::Border(BorderKind::Vertical));
    }

    #[test]
    fn test_enemy_catches_adjacent_player() {
        let mut game = bare(17);
        // Player at (1, 1); enemy below it with its other exits blocked.
        game.field_mut().set(2, 1, Cell::Enemy);
        game.field_mut().set(3, 1, Cell::Item);
        game.field_mut().set(2, 2, Cell::Item);

        for _ in 0..200 {
            game.move_enemies();
            if game.game_over() {
                break;
            }
        }

        assert!(game.game_over());
        assert_eq!(game.field().at(1, 1), Cell::Player);
        assert_eq!(enemy_positions(&game), vec![(2, 1)]);
    }

    #[test]
    fn test_catch_aborts_rest_of_sweep() {
        let mut game = bare(19);
        game.field_mut().set(2, 1, Cell::Enemy);
        game.field_mut().set(3, 1, Cell::Item);
        game.field_mut().set(2, 2, Cell::Item);
        // A free enemy later in the sweep, fenced into the bottom rows.
        for col in 1..=10 {
            game.field_mut().set(6, col, Cell::Item);
        }
        game.field_mut().set(8, 8, Cell::Enemy);

        for _ in 0..200 {
            let before = enemy_positions(&game);
            game.move_enemies();
            if game.game_over() {
                assert_eq!(enemy_positions(&game), before);
                return;
            }
        }
        panic!("enemy never reached the player");
    }

    #[test]
    fn test_sweep_can_move_an_enemy_more_than_once() {
        let mut game = bare(23);
        game.field_mut().set(5, 5, Cell::Enemy);

        let mut max_jump = 0;
        for _ in 0..300 {
            // Recenter so borders never get in the way.
            for (row, col) in enemy_positions(&game) {
                game.field_mut().set(row, col, Cell::Empty);
            }
            game.field_mut().set(5, 5, Cell::Enemy);

            game.move_enemies();

            let (row, col) = enemy_positions(&game)[0];
            let jump = row.abs_diff(5) + col.abs_diff(5);
            max_jump = max_jump.max(jump);
        }

        assert!(max_jump >= 2, "in-place sweep should revisit moved enemies");
    }

    #[test]
    fn test_game_over_freezes_state() {
        let mut game = bare(29);
        game.field_mut().set(1, 2, Cell::Enemy);
        game.handle_input(Input::MoveRight);
        assert_eq!(game.status(), Status::GameOver);

        let field = game.field().clone();
        let snap = game.snapshot();
        assert!(!snap.playable());
        for input in [Input::MoveUp, Input::MoveDown, Input::MoveLeft, Input::MoveRight] {
            assert_eq!(game.handle_input(input), Flow::Continue);
        }
        assert_eq!(game.field(), &field);
        assert_eq!(game.snapshot(), snap);
    }

    #[test]
    fn test_confirm_while_playing_is_noop() {
        let mut game = SmallGame::with_seed(31);
        let field = game.field().clone();
        assert_eq!(game.handle_input(Input::Confirm), Flow::Continue);
        assert_eq!(game.field(), &field);
        assert_eq!(game.episode_id(), 0);
    }

    #[test]
    fn test_quit_in_any_state() {
        let mut game = bare(37);
        assert_eq!(game.handle_input(Input::Quit), Flow::Quit);
        game.field_mut().set(1, 2, Cell::Enemy);
        game.handle_input(Input::MoveRight);
        assert!(game.game_over());
        assert_eq!(game.handle_input(Input::Quit), Flow::Quit);
        assert!(game.game_over());
    }

    #[test]
    fn test_spawn_on_saturated_field_is_skipped() {
        let mut game: GameEngine<4, 4> = GameEngine::with_seed(41);
        // 2x2 interior: player + item + two more.
        let field = game.field_mut();
        let positions: Vec<_> = field.interior_positions().collect();
        for (row, col) in positions {
            if field.at(row, col) == Cell::Empty {
                field.set(row, col, Cell::Enemy);
            }
        }

        assert_eq!(game.spawn(Cell::Item), None);
        assert_eq!(game.field().free_interior_cells(), 0);
    }

    #[test]
    fn test_render_playing_shows_field() {
        let game: GameEngine<3, 4> = GameEngine::with_seed(43);
        // 1x2 interior: player at (1,1), the item can only land on (1,2).
        assert_eq!(game.render(), "+--+\n|0$|\n+--+\n");
    }

    #[test]
    fn test_render_game_over_text() {
        let mut game = bare(47);
        game.score = 7;
        game.field_mut().set(1, 2, Cell::Enemy);
        game.handle_input(Input::MoveRight);

        let text = game.render();
        assert_eq!(text, game_over_text(7));
        assert!(text.contains("Your score: 7"));
        assert!(text.contains("Press enter to restart or q to quit"));
    }
}
