use serde::{Deserialize, Serialize};

/// Intensity assumed when the text names neither a high nor a low trigger
pub const DEFAULT_INTENSITY: u8 = 5;
/// Intensity for text containing a high-intensity trigger
pub const HIGH_INTENSITY: u8 = 8;
/// Intensity for text containing a low-intensity trigger
pub const LOW_INTENSITY: u8 = 3;

/// Structured viewing preferences extracted from free-text input
///
/// Built once per request by the analyzer and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PreferenceProfile {
    /// Matched genre categories, in dictionary order, without duplicates
    pub genres: Vec<String>,
    /// Matched emotion categories, in dictionary order, without duplicates
    pub emotions: Vec<String>,
    /// Requested intensity on a 0-10 scale
    pub intensity: u8,
}

impl Default for PreferenceProfile {
    fn default() -> Self {
        Self {
            genres: Vec::new(),
            emotions: Vec::new(),
            intensity: DEFAULT_INTENSITY,
        }
    }
}
