use rand::Rng;
use rand::seq::IndexedRandom;

use crate::domain::mood::{emotion_for, genres_for};

/// Used only if a candidate list were ever empty.
const LAST_RESORT_GENRE: &str = "pop";

/// The weather → emotion → genre decisions for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodPlan {
    pub condition: String,
    pub emotion: &'static str,
    /// Candidate genres of `emotion`, in table order
    pub candidates: &'static [&'static str],
    /// Drawn uniformly from `candidates`
    pub genre: &'static str,
}

impl MoodPlan {
    /// Resolves the emotion and draws a genre with `rng`.
    pub fn draw<R: Rng + ?Sized>(condition: &str, rng: &mut R) -> Self {
        let emotion = emotion_for(condition);
        let candidates = genres_for(emotion);
        let genre = candidates
            .choose(rng)
            .copied()
            .unwrap_or(LAST_RESORT_GENRE);

        Self {
            condition: condition.to_string(),
            emotion,
            candidates,
            genre,
        }
    }
}
