use crate::{
    models::{PreferenceProfile, DEFAULT_INTENSITY, HIGH_INTENSITY, LOW_INTENSITY},
    services::keywords::{
        KeywordDictionary, EMOTION_KEYWORDS, GENRE_KEYWORDS, HIGH_INTENSITY_TRIGGERS,
        LOW_INTENSITY_TRIGGERS,
    },
};

/// Converts free text into a preference profile by keyword matching
///
/// A category matches when any of its triggers is a substring of any whitespace-separated
/// token, so "non-action" selects "action". Intensity is checked on the whole text: a
/// high trigger sets 8, then a low trigger sets 3, so low wins when both occur.
pub fn analyze(text: &str) -> PreferenceProfile {
    let lowered = text.to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();

    let mut intensity = DEFAULT_INTENSITY;
    if contains_any(&lowered, HIGH_INTENSITY_TRIGGERS) {
        intensity = HIGH_INTENSITY;
    }
    if contains_any(&lowered, LOW_INTENSITY_TRIGGERS) {
        intensity = LOW_INTENSITY;
    }

    let profile = PreferenceProfile {
        genres: match_categories(&tokens, GENRE_KEYWORDS),
        emotions: match_categories(&tokens, EMOTION_KEYWORDS),
        intensity,
    };

    tracing::debug!(
        genres = ?profile.genres,
        emotions = ?profile.emotions,
        intensity = profile.intensity,
        "Input analyzed"
    );

    profile
}

fn match_categories(tokens: &[&str], dictionary: KeywordDictionary) -> Vec<String> {
    dictionary
        .iter()
        .filter(|(_, triggers)| {
            triggers
                .iter()
                .any(|trigger| tokens.iter().any(|token| token.contains(trigger)))
        })
        .map(|(category, _)| category.to_string())
        .collect()
}

fn contains_any(text: &str, triggers: &[&str]) -> bool {
    triggers.iter().any(|trigger| text.contains(trigger))
}
