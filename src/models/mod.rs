pub mod sentiment;
pub mod session;

pub use sentiment::{SentimentLabel, Tally};
pub use session::SessionState;
