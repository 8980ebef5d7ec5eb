//! In-memory cache of synthesized audio references.
//!
//! Entries are keyed by the full (voice, speed, sentence) triple so a change
//! to any of the three forces a fresh synthesis. The cache lives and dies
//! with the UI session; nothing is evicted or persisted.

use std::collections::HashMap;

/// Composite key identifying one synthesized utterance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AudioKey {
    pub voice: String,
    pub speed_percent: i32,
    pub text: String,
}

impl AudioKey {
    pub fn new(voice: &str, speed_percent: i32, text: &str) -> Self {
        Self {
            voice: voice.to_string(),
            speed_percent,
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct AudioCache {
    entries: HashMap<AudioKey, String>,
}

impl AudioCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &AudioKey) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &AudioKey) -> bool {
        self.entries.contains_key(key)
    }

    /// First write wins: concurrent generators may race on the same key, and
    /// an entry that is already referenced by playback must not be replaced.
    pub fn insert_if_absent(&mut self, key: AudioKey, audio_url: String) {
        self.entries.entry(key).or_insert(audio_url);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{AudioCache, AudioKey};

    #[test]
    fn distinct_triples_get_distinct_entries() {
        let mut cache = AudioCache::new();
        cache.insert_if_absent(AudioKey::new("a", 0, "hello"), "one.wav".into());
        cache.insert_if_absent(AudioKey::new("a", 10, "hello"), "two.wav".into());
        cache.insert_if_absent(AudioKey::new("b", 0, "hello"), "three.wav".into());
        assert_eq!(cache.len(), 3);
        assert_eq!(cache.get(&AudioKey::new("a", 0, "hello")), Some("one.wav"));
    }

    #[test]
    fn first_write_wins_on_racing_inserts() {
        let mut cache = AudioCache::new();
        let key = AudioKey::new("a", 0, "hello");
        cache.insert_if_absent(key.clone(), "first.wav".into());
        cache.insert_if_absent(key.clone(), "second.wav".into());
        assert_eq!(cache.get(&key), Some("first.wav"));
    }

    #[test]
    fn miss_for_unknown_key() {
        let cache = AudioCache::new();
        assert!(cache.is_empty());
        assert!(!cache.contains(&AudioKey::new("a", 0, "hello")));
    }
}
