use std::hash::{BuildHasher, DefaultHasher, Hash, Hasher, RandomState};

use super::Color;

/// Source of uniformly distributed 64-bit words
pub trait Entropy {
    fn next_u64(&mut self) -> u64;
}

/// Hash-based entropy: SipHash over an incrementing counter.
///
/// `new` keys the hasher randomly per process, so colors differ between runs.
/// `seeded` uses fixed keys for reproducible output.
#[derive(Debug, Clone)]
pub struct HashEntropy {
    keys: Option<RandomState>,
    seed: u64,
    counter: u64,
}

impl HashEntropy {
    pub fn new() -> Self {
        Self {
            keys: Some(RandomState::new()),
            seed: 0,
            counter: 0,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            keys: None,
            seed,
            counter: 0,
        }
    }
}

impl Default for HashEntropy {
    fn default() -> Self {
        Self::new()
    }
}

impl Entropy for HashEntropy {
    fn next_u64(&mut self) -> u64 {
        let mut hasher = match &self.keys {
            Some(keys) => keys.build_hasher(),
            None => DefaultHasher::new(),
        };
        self.seed.hash(&mut hasher);
        self.counter.hash(&mut hasher);
        self.counter = self.counter.wrapping_add(1);
        hasher.finish()
    }
}

/// Replays a fixed sequence of words, cycling when exhausted
#[derive(Debug, Clone)]
pub struct ReplayEntropy {
    words: Vec<u64>,
    index: usize,
}

impl ReplayEntropy {
    pub fn new(words: Vec<u64>) -> Self {
        Self { words, index: 0 }
    }
}

impl Entropy for ReplayEntropy {
    fn next_u64(&mut self) -> u64 {
        if self.words.is_empty() {
            return 0;
        }
        let word = self.words[self.index % self.words.len()];
        self.index += 1;
        word
    }
}

/// Random color built from six hex digits, each uniform over 0..16.
///
/// Digits are taken from successive nibbles of one entropy word, most
/// significant digit from the lowest nibble.
pub fn random_color(entropy: &mut dyn Entropy) -> Color {
    let bits = entropy.next_u64();
    let hex = (0..6).fold(0u32, |acc, i| (acc << 4) | ((bits >> (i * 4)) & 0xf) as u32);
    Color::from_hex(hex)
}
