mod question;
mod score;
mod state;

pub use question::Question;
pub use score::Score;
pub use state::AppState;
