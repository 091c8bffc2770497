//! Static weather → mood → genre tables
//!
//! Both lookups are total: unknown conditions resolve through the `default`
//! entry and unknown emotions through the `balanced` entry.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Key whose emotion is used for unrecognized conditions.
pub const DEFAULT_CONDITION: &str = "default";

/// Emotion whose genres are used for unrecognized emotions.
pub const BALANCED_EMOTION: &str = "balanced";

/// Weather condition text (as reported by the weather provider) to emotion.
pub const CONDITION_EMOTIONS: &[(&str, &str)] = &[
    // Sunny
    ("Sunny", "happy"),
    ("Clear", "relaxed"),
    // Cloudy
    ("Partly cloudy", "nostalgic"),
    ("Cloudy", "contemplative"),
    ("Overcast", "melancholic"),
    ("Mist", "mysterious"),
    ("Fog", "dreamy"),
    // Rain
    ("Patchy rain possible", "hopeful"),
    ("Patchy light drizzle", "tranquil"),
    ("Light drizzle", "peaceful"),
    ("Patchy light rain", "introspective"),
    ("Light rain", "calm"),
    ("Moderate rain at times", "reflective"),
    ("Moderate rain", "soothing"),
    ("Heavy rain at times", "dramatic"),
    ("Heavy rain", "intense"),
    ("Light freezing rain", "ethereal"),
    // Storms
    ("Thundery outbreaks possible", "powerful"),
    ("Patchy light rain with thunder", "energetic"),
    ("Moderate or heavy rain with thunder", "intense"),
    ("Patchy light snow with thunder", "dramatic"),
    ("Moderate or heavy snow with thunder", "epic"),
    // Snow
    ("Patchy snow possible", "serene"),
    ("Patchy sleet possible", "gentle"),
    ("Patchy freezing drizzle possible", "delicate"),
    ("Blowing snow", "magical"),
    ("Blizzard", "majestic"),
    ("Light snow", "peaceful"),
    ("Patchy moderate snow", "whimsical"),
    ("Moderate snow", "tranquil"),
    ("Patchy heavy snow", "ethereal"),
    ("Heavy snow", "serene"),
    (DEFAULT_CONDITION, BALANCED_EMOTION),
];

/// Emotion to candidate genres, in preference order.
///
/// The order matters: the static fallback walks it front to back.
pub const EMOTION_GENRES: &[(&str, &[&str])] = &[
    // Upbeat
    ("happy", &["pop", "dance", "disco", "funk", "tropical"]),
    ("energetic", &["dance", "edm", "rock", "latin", "hip-hop"]),
    ("powerful", &["rock", "metal", "electronic", "hard-rock", "dubstep"]),
    ("epic", &["metal", "orchestral", "cinematic", "rock", "electronic"]),
    // Calm
    ("relaxed", &["acoustic", "indie", "folk", "chill", "singer-songwriter"]),
    ("peaceful", &["ambient", "acoustic", "piano", "classical", "chill"]),
    ("calm", &["jazz", "piano", "acoustic", "ambient", "chill"]),
    ("tranquil", &["classical", "piano", "ambient", "acoustic", "meditation"]),
    ("serene", &["classical", "ambient", "piano", "acoustic", "new-age"]),
    // Introspective
    ("nostalgic", &["indie", "folk", "jazz", "soul", "blues"]),
    ("contemplative", &["indie", "folk", "ambient", "chill", "instrumental"]),
    ("reflective", &["indie-folk", "singer-songwriter", "ambient", "piano", "jazz"]),
    ("introspective", &["acoustic", "indie", "singer-songwriter", "ambient", "piano"]),
    // Melancholic
    ("melancholic", &["indie", "sad", "singer-songwriter", "ambient", "classical"]),
    ("dramatic", &["soundtrack", "classical", "orchestral", "cinematic", "opera"]),
    ("intense", &["metal", "rock", "electronic", "classical", "cinematic"]),
    // Atmospheric
    ("dreamy", &["ambient", "dream-pop", "indie", "chill", "synth-pop"]),
    ("mysterious", &["ambient", "electronic", "experimental", "cinematic", "trip-hop"]),
    ("ethereal", &["ambient", "classical", "cinematic", "post-rock", "soundtrack"]),
    ("magical", &["classical", "soundtrack", "cinematic", "new-age", "ambient"]),
    // Hopeful
    ("hopeful", &["indie-pop", "folk-pop", "acoustic", "gospel", "inspirational"]),
    ("gentle", &["folk", "acoustic", "singer-songwriter", "classical", "ambient"]),
    ("delicate", &["piano", "classical", "ambient", "acoustic", "instrumental"]),
    ("whimsical", &["indie-pop", "french", "acoustic", "folk", "jazz"]),
    // Grand
    ("majestic", &["classical", "orchestral", "cinematic", "soundtrack", "epic"]),
    ("soothing", &["jazz", "r-n-b", "soul", "blues", "chill"]),
    (BALANCED_EMOTION, &["pop", "rock", "indie", "r-n-b", "alternative"]),
];

static CONDITION_INDEX: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| CONDITION_EMOTIONS.iter().copied().collect());

static EMOTION_INDEX: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| EMOTION_GENRES.iter().copied().collect());

/// Emotion for a weather condition. Case-sensitive exact match.
#[must_use]
pub fn emotion_for(condition: &str) -> &'static str {
    CONDITION_INDEX
        .get(condition)
        .or_else(|| CONDITION_INDEX.get(DEFAULT_CONDITION))
        .copied()
        .unwrap_or(BALANCED_EMOTION)
}

/// Candidate genres for an emotion, never empty.
#[must_use]
pub fn genres_for(emotion: &str) -> &'static [&'static str] {
    EMOTION_INDEX
        .get(emotion)
        .or_else(|| EMOTION_INDEX.get(BALANCED_EMOTION))
        .copied()
        .unwrap_or(&["pop"])
}
