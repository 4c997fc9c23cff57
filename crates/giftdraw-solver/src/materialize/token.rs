//! Reveal token generation.

use chrono::Utc;
use rand::distr::Alphanumeric;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use giftdraw_core::Token;

/// Source of reveal tokens.
pub trait TokenGenerator {
    /// Returns a fresh token. Collisions must be negligible.
    fn generate(&mut self) -> Token;
}

/// `<unix millis>-<random alphanumerics>` tokens.
///
/// The random part comes from a ChaCha20 stream seeded from OS entropy,
/// since a token is the only thing guarding a giver's secret.
#[derive(Debug, Clone)]
pub struct TimestampTokenGenerator {
    rng: ChaCha20Rng,
    random_length: usize,
}

impl TimestampTokenGenerator {
    pub fn new(random_length: usize) -> Self {
        Self {
            rng: ChaCha20Rng::from_os_rng(),
            random_length,
        }
    }

    /// Creates a generator with a fixed seed, for tests.
    pub fn with_seed(random_length: usize, seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
            random_length,
        }
    }
}

impl TokenGenerator for TimestampTokenGenerator {
    fn generate(&mut self) -> Token {
        let random: String = (&mut self.rng)
            .sample_iter(Alphanumeric)
            .take(self.random_length)
            .map(|b| char::from(b).to_ascii_lowercase())
            .collect();
        Token::new(format!("{}-{}", Utc::now().timestamp_millis(), random))
    }
}

impl<G: TokenGenerator + ?Sized> TokenGenerator for &mut G {
    fn generate(&mut self) -> Token {
        (**self).generate()
    }
}
