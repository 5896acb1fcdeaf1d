use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// Seed for the episode random source.
///
/// The same seed yields the same initial direction and the same sequence of
/// food placements for a given player and configuration. Small integer
/// seeds convert losslessly with `From<u64>`. Seeds display, parse and
/// serialize as 32 lower-case hex digits.
///
/// # Example
///
/// ```
/// use serpent_engine::EpisodeSeed;
/// use rand::Rng as _;
///
/// let fixed = EpisodeSeed::from(3);
/// let random: EpisodeSeed = rand::rng().random();
/// # let _ = (fixed, random);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EpisodeSeed([u8; 16]);

impl EpisodeSeed {
    /// Creates the random source this seed describes.
    #[must_use]
    pub fn rng(self) -> Pcg32 {
        Pcg32::from_seed(self.0)
    }
}

impl From<u64> for EpisodeSeed {
    fn from(value: u64) -> Self {
        Self(u128::from(value).to_be_bytes())
    }
}

impl From<[u8; 16]> for EpisodeSeed {
    fn from(value: [u8; 16]) -> Self {
        Self(value)
    }
}

/// A seed string that is not exactly 32 hex digits.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid seed hex {input:?}: expected 32 hex digits")]
pub struct ParseSeedError {
    #[error(not(source))]
    input: String,
}

impl fmt::Display for EpisodeSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl FromStr for EpisodeSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseSeedError {
            input: s.to_owned(),
        };
        if s.len() != 32 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| invalid())?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for EpisodeSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EpisodeSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(de::Error::custom)
    }
}

impl Distribution<EpisodeSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> EpisodeSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        EpisodeSeed(seed)
    }
}
