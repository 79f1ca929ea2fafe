pub mod agents;
pub mod board;
pub mod logger;
pub mod session_rng;

pub use agents::{Agent, AlphaBetaAgent, MinimaxAgent, ScoredMove};
pub use board::{Board, Mark};
pub use session_rng::SessionRng;
