#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Seed derivation and the deterministic number stream driving generation.
//!
//! The [`SeedGenerator`] folds caller identifiers together with a wall-clock
//! timestamp, one random draw and a monotonic clock reading, then hashes the
//! result with SHA-256. With [`SystemEntropy`] two calls never produce the
//! same digest, so the digest is a source of freshness rather than a
//! reproducible seed. The [`LcgStream`] on the other hand is fully
//! deterministic for a given starting state.

use std::{
    fmt,
    time::{Instant, SystemTime, UNIX_EPOCH},
};

use sha2::{Digest, Sha256};
use thiserror::Error;

const COMPONENT_DELIMITER: char = '|';
const STREAM_SEED_HEX_LEN: usize = 8;
const LCG_MULTIPLIER: u32 = 1_664_525;
const LCG_INCREMENT: u32 = 1_013_904_223;
const STREAM_SCALE: f64 = 4_294_967_296.0;

/// Readings folded into every seed digest.
pub trait EntropySource {
    /// Milliseconds since the Unix epoch.
    fn wall_clock_millis(&mut self) -> u128;
    /// A draw in `[0, 1)`.
    fn random_unit(&mut self) -> f64;
    /// High-resolution monotonic clock reading in nanoseconds.
    fn monotonic_nanos(&mut self) -> u128;
}

/// Entropy backed by the system clocks and the thread-local RNG.
#[derive(Clone, Copy, Debug)]
pub struct SystemEntropy {
    anchor: Instant,
}

impl SystemEntropy {
    /// Creates a source whose monotonic readings count from now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            anchor: Instant::now(),
        }
    }
}

impl Default for SystemEntropy {
    fn default() -> Self {
        Self::new()
    }
}

impl EntropySource for SystemEntropy {
    fn wall_clock_millis(&mut self) -> u128 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_millis())
    }

    fn random_unit(&mut self) -> f64 {
        rand::random::<f64>()
    }

    fn monotonic_nanos(&mut self) -> u128 {
        self.anchor.elapsed().as_nanos()
    }
}

/// Entropy source that replays the same readings on every call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedEntropy {
    /// Reported milliseconds since the Unix epoch.
    pub wall_clock_millis: u128,
    /// Reported random draw.
    pub random_unit: f64,
    /// Reported monotonic clock reading.
    pub monotonic_nanos: u128,
}

impl EntropySource for FixedEntropy {
    fn wall_clock_millis(&mut self) -> u128 {
        self.wall_clock_millis
    }

    fn random_unit(&mut self) -> f64 {
        self.random_unit
    }

    fn monotonic_nanos(&mut self) -> u128 {
        self.monotonic_nanos
    }
}

/// Reasons an externally supplied digest is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SeedError {
    /// The digest had fewer characters than the stream seed requires.
    #[error("seed digest `{0}` is shorter than 8 characters")]
    TooShort(String),
    /// The leading characters were not hexadecimal digits.
    #[error("seed digest `{0}` does not start with 8 hexadecimal digits")]
    NotHex(String),
}

/// Hexadecimal digest identifying one generation call.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SeedDigest {
    hex: String,
    stream_seed: u32,
}

impl SeedDigest {
    /// Wraps an externally supplied hexadecimal digest.
    pub fn from_hex(hex: impl Into<String>) -> Result<Self, SeedError> {
        let hex = hex.into();
        if hex.len() < STREAM_SEED_HEX_LEN {
            return Err(SeedError::TooShort(hex));
        }

        let prefix = hex.as_bytes()[..STREAM_SEED_HEX_LEN].to_vec();
        let decoded = match hex::decode(prefix) {
            Ok(bytes) => bytes,
            Err(_) => return Err(SeedError::NotHex(hex)),
        };
        let mut head = [0u8; 4];
        head.copy_from_slice(&decoded);

        Ok(Self {
            hex,
            stream_seed: u32::from_be_bytes(head),
        })
    }

    fn from_digest(bytes: &[u8]) -> Self {
        let mut head = [0u8; 4];
        head.copy_from_slice(&bytes[..4]);
        Self {
            hex: hex::encode(bytes),
            stream_seed: u32::from_be_bytes(head),
        }
    }

    /// Full hexadecimal digest.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.hex
    }

    /// Leading eight characters, recorded in sequence metadata.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.hex[..STREAM_SEED_HEX_LEN]
    }

    /// Leading eight characters parsed as a 32-bit unsigned integer.
    #[must_use]
    pub const fn stream_seed(&self) -> u32 {
        self.stream_seed
    }
}

impl fmt::Display for SeedDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

/// Derives per-invocation digests from caller identifiers and entropy readings.
#[derive(Debug, Default)]
pub struct SeedGenerator<E = SystemEntropy> {
    entropy: E,
}

impl<E: EntropySource> SeedGenerator<E> {
    /// Creates a generator reading from the provided entropy source.
    #[must_use]
    pub const fn new(entropy: E) -> Self {
        Self { entropy }
    }

    /// Hashes the timestamp, `fingerprint`, `short_id`, random draw and
    /// monotonic reading, joined by `|`, into a SHA-256 digest.
    pub fn derive(&mut self, fingerprint: &str, short_id: &str) -> SeedDigest {
        let raw = compose_raw_seed(
            self.entropy.wall_clock_millis(),
            fingerprint,
            short_id,
            self.entropy.random_unit(),
            self.entropy.monotonic_nanos(),
        );
        let digest = Sha256::digest(raw.as_bytes());
        SeedDigest::from_digest(&digest)
    }
}

fn compose_raw_seed(
    wall_clock_millis: u128,
    fingerprint: &str,
    short_id: &str,
    random_unit: f64,
    monotonic_nanos: u128,
) -> String {
    let d = COMPONENT_DELIMITER;
    format!("{wall_clock_millis}{d}{fingerprint}{d}{short_id}{d}{random_unit}{d}{monotonic_nanos}")
}

/// Linear-congruential generator producing draws in `[0, 1)`.
///
/// Not suitable where unpredictability matters; the output only perturbs
/// non-adversarial gating behaviour.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LcgStream {
    state: u32,
}

impl LcgStream {
    /// Creates a stream starting from the provided state.
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Creates a stream seeded from the digest's leading eight hex characters.
    #[must_use]
    pub const fn from_digest(digest: &SeedDigest) -> Self {
        Self::new(digest.stream_seed())
    }

    /// Advances the state and returns `state / 2^32`.
    pub fn next_unit(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        f64::from(self.state) / STREAM_SCALE
    }

    /// Current internal state.
    #[must_use]
    pub const fn state(&self) -> u32 {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXED: FixedEntropy = FixedEntropy {
        wall_clock_millis: 1_700_000_000_000,
        random_unit: 0.5,
        monotonic_nanos: 42,
    };

    #[test]
    fn raw_seed_joins_components_with_delimiter() {
        assert_eq!(
            compose_raw_seed(1_700_000_000_000, "fp", "sid", 0.5, 42),
            "1700000000000|fp|sid|0.5|42"
        );
    }

    #[test]
    fn fixed_entropy_digest_matches_known_value() {
        let digest = SeedGenerator::new(FIXED).derive("fp", "sid");
        assert_eq!(
            digest.as_str(),
            "3fc4232a1b9d1345d2f9a4020618f687350f813a61d8029fa746ac5837db40f4"
        );
        assert_eq!(digest.prefix(), "3fc4232a");
        assert_eq!(digest.stream_seed(), 0x3fc4_232a);
    }

    #[test]
    fn identifiers_change_the_digest() {
        let mut generator = SeedGenerator::new(FIXED);
        let first = generator.derive("fp", "sid");
        let second = generator.derive("fp", "other");
        assert_ne!(first, second);
    }

    #[test]
    fn system_entropy_yields_fresh_digests() {
        let mut generator = SeedGenerator::<SystemEntropy>::default();
        let first = generator.derive("fp", "sid");
        let second = generator.derive("fp", "sid");
        assert_ne!(first, second, "identical inputs must still yield fresh digests");
        assert_eq!(first.as_str().len(), 64);
    }

    #[test]
    fn from_hex_validates_prefix() {
        let digest = SeedDigest::from_hex("0000002a-trailing").expect("valid prefix");
        assert_eq!(digest.stream_seed(), 42);
        assert_eq!(digest.prefix(), "0000002a");
        assert_eq!(
            SeedDigest::from_hex("abc"),
            Err(SeedError::TooShort("abc".to_owned()))
        );
        assert!(matches!(
            SeedDigest::from_hex("+1234567ff"),
            Err(SeedError::NotHex(_))
        ));
    }

    #[test]
    fn lcg_matches_reference_values() {
        let mut stream = LcgStream::new(0);
        assert!((stream.next_unit() - 0.236_067_972_844_466_57).abs() < 1e-15);
        assert_eq!(stream.state(), 1_013_904_223);
        let _ = stream.next_unit();
        assert_eq!(stream.state(), 1_196_435_762);
        let _ = stream.next_unit();
        assert_eq!(stream.state(), 3_519_870_697);
    }

    #[test]
    fn independent_streams_replay_identically() {
        let mut first = LcgStream::new(0xdead_beef);
        let mut second = LcgStream::new(0xdead_beef);
        for _ in 0..1_000 {
            let draw = first.next_unit();
            assert_eq!(draw, second.next_unit());
            assert!((0.0..1.0).contains(&draw));
        }
    }
}
