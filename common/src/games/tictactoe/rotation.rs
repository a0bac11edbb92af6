use super::types::Player;

/// Fixed turn order over the configured players, wrapping at the end.
#[derive(Debug, Clone)]
pub struct PlayerRotation {
    players: Vec<Player>,
    current: usize,
}

impl PlayerRotation {
    /// `players` must not be empty.
    pub fn new(players: Vec<Player>) -> Self {
        Self { players, current: 0 }
    }

    pub fn current(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn advance(&mut self) -> &Player {
        self.current = (self.current + 1) % self.players.len();
        self.current()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }
}
