//! Trigger vocabularies for the preference analyzer.
//!
//! Each entry maps a category to the substrings that select it. Categories are listed in
//! the order they appear in an analyzed profile.

/// A category name and its trigger substrings
pub type KeywordDictionary = &'static [(&'static str, &'static [&'static str])];

pub const GENRE_KEYWORDS: KeywordDictionary = &[
    ("action", &["action", "fight", "explosion", "adventure", "exciting"]),
    ("thriller", &["thriller", "suspense", "tension", "mystery", "nail-biting"]),
    ("drama", &["drama", "emotional", "life", "relationship", "touching"]),
    ("sci-fi", &["sci-fi", "science fiction", "future", "space", "technology"]),
    ("horror", &["horror", "scary", "frightening", "terrifying", "spooky"]),
    ("comedy", &["comedy", "funny", "hilarious", "laugh", "humorous"]),
    ("romance", &["romance", "love", "romantic", "relationship", "dating"]),
    ("fantasy", &["fantasy", "magical", "mythical", "supernatural", "enchanted"]),
    ("animation", &["animation", "animated", "cartoon", "pixar", "disney"]),
    ("documentary", &["documentary", "real", "true story", "historical", "educational"]),
];

pub const EMOTION_KEYWORDS: KeywordDictionary = &[
    ("suspense", &["suspense", "tension", "nail-biting", "thrilling", "edge"]),
    ("hope", &["hope", "uplifting", "inspiring", "positive", "optimistic"]),
    ("fear", &["scary", "frightening", "horror", "terrifying", "creepy"]),
    ("joy", &["happy", "joyful", "fun", "upbeat", "cheerful"]),
    ("sadness", &["sad", "emotional", "touching", "moving", "tearjerker"]),
    ("anger", &["angry", "revenge", "vengeance", "fury", "rage"]),
    ("wonder", &["amazing", "wonderful", "magical", "spectacular", "mindblowing"]),
];

pub const HIGH_INTENSITY_TRIGGERS: &[&str] =
    &["intense", "brutal", "extreme", "violent", "action-packed"];

pub const LOW_INTENSITY_TRIGGERS: &[&str] = &["mild", "gentle", "calm", "peaceful", "slow-paced"];
