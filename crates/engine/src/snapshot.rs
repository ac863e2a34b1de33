/// Summary of the engine state at one point in time.
///
/// Cheap to copy; used for logging and by tests that compare states across turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub score: u32,
    pub game_over: bool,
    /// Stored player `(row, col)`.
    pub player: (usize, usize),
    pub items: usize,
    pub enemies: usize,
    pub episode_id: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over
    }
}
