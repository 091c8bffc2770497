//! Canned songs served when every track provider call has failed.

use super::track::TrackRecord;

/// (title, artist, album)
type CannedTrack = (&'static str, &'static str, &'static str);

const FALLBACK_SETS: &[(&str, [CannedTrack; 3])] = &[
    (
        "pop",
        [
            ("Shape of You", "Ed Sheeran", "÷"),
            ("Blinding Lights", "The Weeknd", "After Hours"),
            ("Dance Monkey", "Tones and I", "The Kids Are Coming"),
        ],
    ),
    (
        "rock",
        [
            ("Bohemian Rhapsody", "Queen", "A Night at the Opera"),
            ("Sweet Child O' Mine", "Guns N' Roses", "Appetite for Destruction"),
            ("Back In Black", "AC/DC", "Back in Black"),
        ],
    ),
    (
        "indie",
        [
            ("Midnight City", "M83", "Hurry Up, We're Dreaming"),
            ("Somebody Else", "The 1975", "I Like It When You Sleep..."),
            ("Do I Wanna Know?", "Arctic Monkeys", "AM"),
        ],
    ),
    (
        "jazz",
        [
            ("Take Five", "Dave Brubeck", "Time Out"),
            ("So What", "Miles Davis", "Kind of Blue"),
            ("My Favorite Things", "John Coltrane", "My Favorite Things"),
        ],
    ),
    (
        "classical",
        [
            ("Canon in D", "Johann Pachelbel", "Classical Masterpieces"),
            ("Clair de Lune", "Claude Debussy", "Suite Bergamasque"),
            ("Four Seasons: Winter", "Antonio Vivaldi", "The Four Seasons"),
        ],
    ),
    (
        "alternative",
        [
            ("Smells Like Teen Spirit", "Nirvana", "Nevermind"),
            ("Black Hole Sun", "Soundgarden", "Superunknown"),
            ("Creep", "Radiohead", "Pablo Honey"),
        ],
    ),
    (
        "chill",
        [
            ("Sunset Lover", "Petit Biscuit", "Petit Biscuit"),
            ("Another Day in Paradise", "Quinn XCII", "The Story of Us"),
            ("Good Days", "SZA", "Good Days"),
        ],
    ),
    (
        "electronic",
        [
            ("Strobe", "deadmau5", "For Lack of a Better Name"),
            ("Opus", "Eric Prydz", "Opus"),
            (
                "Scary Monsters and Nice Sprites",
                "Skrillex",
                "Scary Monsters and Nice Sprites",
            ),
        ],
    ),
    (
        "hip-hop",
        [
            ("Sicko Mode", "Travis Scott", "Astroworld"),
            ("God's Plan", "Drake", "Scorpion"),
            ("HUMBLE.", "Kendrick Lamar", "DAMN."),
        ],
    ),
    (
        "ambient",
        [
            (
                "Ambient 1: Music for Airports",
                "Brian Eno",
                "Ambient 1: Music for Airports",
            ),
            ("Avril 14th", "Aphex Twin", "Drukqs"),
            ("Structures from Silence", "Steve Roach", "Structures from Silence"),
        ],
    ),
    (
        "acoustic",
        [
            ("Fast Car", "Tracy Chapman", "Tracy Chapman"),
            ("Hallelujah", "Jeff Buckley", "Grace"),
            ("Fire and Rain", "James Taylor", "Sweet Baby James"),
        ],
    ),
    (
        "piano",
        [
            ("Nuvole Bianche", "Ludovico Einaudi", "Una Mattina"),
            ("River Flows in You", "Yiruma", "First Love"),
            ("Comptine d'un autre été", "Yann Tiersen", "Amélie"),
        ],
    ),
    (
        "metal",
        [
            ("Master of Puppets", "Metallica", "Master of Puppets"),
            ("Paranoid", "Black Sabbath", "Paranoid"),
            ("Fear of the Dark", "Iron Maiden", "Fear of the Dark"),
        ],
    ),
    (
        "dance",
        [
            ("One More Time", "Daft Punk", "Discovery"),
            ("Don't You Worry Child", "Swedish House Mafia", "Until Now"),
            ("Titanium", "David Guetta ft. Sia", "Nothing but the Beat"),
        ],
    ),
    (
        "folk",
        [
            ("Blowin' in the Wind", "Bob Dylan", "The Freewheelin' Bob Dylan"),
            ("Landslide", "Fleetwood Mac", "Fleetwood Mac"),
            ("Big Yellow Taxi", "Joni Mitchell", "Ladies of the Canyon"),
        ],
    ),
    (
        "soundtrack",
        [
            ("Time", "Hans Zimmer", "Inception"),
            (
                "Duel of the Fates",
                "John Williams",
                "Star Wars: The Phantom Menace",
            ),
            ("He's a Pirate", "Klaus Badelt", "Pirates of the Caribbean"),
        ],
    ),
    (
        "cinematic",
        [
            ("Now We Are Free", "Hans Zimmer & Lisa Gerrard", "Gladiator"),
            ("The Avengers", "Alan Silvestri", "The Avengers"),
            ("Main Theme from Jurassic Park", "John Williams", "Jurassic Park"),
        ],
    ),
];

const ERROR_COLLECTION: [CannedTrack; 3] = [
    ("Unable to connect to Spotify", "Various Artists", "Error Collection"),
    ("Check your Spotify credentials", "Various Artists", "Error Collection"),
    ("Using local recommendations", "Various Artists", "Error Collection"),
];

fn to_records(set: &[CannedTrack]) -> Vec<TrackRecord> {
    set.iter()
        .map(|(title, artist, album)| TrackRecord::canned(title, artist, album))
        .collect()
}

/// Canned songs for `genre`, if the catalogue has a set for it.
#[must_use]
pub fn fallback_tracks_for(genre: &str) -> Option<Vec<TrackRecord>> {
    FALLBACK_SETS
        .iter()
        .find(|(name, _)| *name == genre)
        .map(|(_, set)| to_records(set))
}

/// First genre of `candidates`, in order, that has a canned set.
#[must_use]
pub fn first_covered_genre<'a>(candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .copied()
        .find(|genre| FALLBACK_SETS.iter().any(|(name, _)| name == genre))
}

/// Placeholder songs naming the provider failure.
#[must_use]
pub fn error_collection() -> Vec<TrackRecord> {
    to_records(&ERROR_COLLECTION)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn covered_genres() -> impl Iterator<Item = &'static str> {
        FALLBACK_SETS.iter().map(|(name, _)| *name)
    }

    #[test]
    fn test_every_set_has_three_tracks() {
        assert_eq!(covered_genres().count(), 17);
        for genre in covered_genres() {
            assert_eq!(fallback_tracks_for(genre).unwrap().len(), 3, "genre {genre}");
        }
    }

    #[test]
    fn test_jazz_set_contents() {
        let jazz = fallback_tracks_for("jazz").unwrap();
        assert_eq!(jazz[0], TrackRecord::canned("Take Five", "Dave Brubeck", "Time Out"));
        assert_eq!(jazz[1].title, "So What");
        assert_eq!(jazz[2].artist, "John Coltrane");
    }

    #[test]
    fn test_unknown_genre_has_no_set() {
        assert!(fallback_tracks_for("tropical").is_none());
    }

    #[test]
    fn test_first_covered_genre_respects_order() {
        assert_eq!(
            first_covered_genre(&["disco", "funk", "jazz", "pop"]),
            Some("jazz")
        );
        assert_eq!(first_covered_genre(&["indie-pop", "folk-pop", "gospel"]), None);
    }

    #[test]
    fn test_error_collection_placeholders() {
        let tracks = error_collection();
        assert_eq!(tracks.len(), 3);
        assert!(tracks.iter().all(|t| t.album == "Error Collection"));
        assert_eq!(tracks[0].title, "Unable to connect to Spotify");
    }
}
