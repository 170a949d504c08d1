pub mod scorer_client;

pub use scorer_client::{Scorer, ScorerClient};
