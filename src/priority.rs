// model = "claude-opus-4-5"
// created = 2026-10-12
// modified = 2026-10-18
// driver = "Isaac Clayton"

//! Per-set priority generator.
//!
//! Every node draws one priority when it is created. The default source is
//! a xorshift64 generator seeded from the operating system. If the OS
//! cannot supply entropy we keep going with a seed mixed from a randomly
//! keyed hasher and the clock, and record that we did so: an unseeded set
//! is still a correct set, just not a reproducible one.
//!
//! Sets are generic over any `RngCore`, so callers wanting reproducible
//! trees can pass `Priorities::seeded` or a generator of their own.

use std::collections::hash_map::RandomState;
use std::hash::BuildHasher;
use std::hash::Hasher;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use rand_core::OsRng;
use rand_core::RngCore;
use rand_core::SeedableRng;
use rand_core::impls;
use thiserror::Error;
use tracing::debug;
use tracing::warn;

/// Substituted for an all-zero state, which xorshift never leaves.
const ZERO_SUBSTITUTE: u64 = 0x12345678_9abcdef0;

/// Error returned when the operating system has no entropy to give.
#[derive(Debug, Error)]
pub enum EntropyError {
    #[error("os entropy unavailable: {0}")]
    Unavailable(#[from] rand_core::Error),
}

/// Where a generator's seed came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Seeding {
    /// Read from the operating system.
    Os,
    /// OS entropy failed; seeded from a hasher key and the clock.
    Fallback,
    /// Supplied by the caller.
    Fixed,
}

/// xorshift64 priority generator.
///
/// A clone carries the state along, so it continues the exact sequence
/// its source would have produced. Two sets cloned from one another draw
/// the same priorities for their next inserts. Seeding one generator from
/// another's output does not help either: xorshift would replay the parent
/// one step behind. Use `from_entropy` or an unrelated seed for a stream of
/// its own.
///
/// ```
/// use rand_core::RngCore;
/// use treapset::Priorities;
///
/// let mut parent = Priorities::seeded(1);
/// let mut twin = parent.clone();
/// assert_eq!(twin.next_u64(), parent.next_u64());
/// ```
#[derive(Clone, Debug)]
pub struct Priorities {
    state: u64,
    seeding: Seeding,
}

impl Priorities {
    /// Seed from OS entropy, falling back silently if it is unavailable.
    pub fn from_entropy() -> Priorities {
        return Self::from_entropy_with(&mut OsRng);
    }

    /// Seed from the given entropy source, falling back if it fails.
    pub fn from_entropy_with<E: RngCore>(entropy: &mut E) -> Priorities {
        match Self::try_from_source(entropy) {
            Ok(priorities) => priorities,
            Err(error) => {
                warn!(%error, "falling back to non-reproducible priority seed");
                Self::fallback()
            }
        }
    }

    /// Seed from OS entropy, reporting failure instead of falling back.
    pub fn try_from_os() -> Result<Priorities, EntropyError> {
        return Self::try_from_source(&mut OsRng);
    }

    /// A deterministic generator. Equal seeds give equal priority streams.
    pub fn seeded(seed: u64) -> Priorities {
        return Self::with_state(seed, Seeding::Fixed);
    }

    /// Where this generator's seed came from.
    pub fn seeding(&self) -> Seeding {
        return self.seeding;
    }

    fn try_from_source<E: RngCore>(entropy: &mut E) -> Result<Priorities, EntropyError> {
        let mut bytes = [0u8; 8];
        entropy.try_fill_bytes(&mut bytes)?;
        return Ok(Self::with_state(u64::from_le_bytes(bytes), Seeding::Os));
    }

    fn fallback() -> Priorities {
        let mut hasher = RandomState::new().build_hasher();
        if let Ok(elapsed) = SystemTime::now().duration_since(UNIX_EPOCH) {
            hasher.write_u128(elapsed.as_nanos());
        }
        return Self::with_state(hasher.finish(), Seeding::Fallback);
    }

    fn with_state(seed: u64, seeding: Seeding) -> Priorities {
        debug!(?seeding, "seeded priority generator");
        let state = if seed == 0 { ZERO_SUBSTITUTE } else { seed };
        return Priorities { state, seeding };
    }
}

impl Default for Priorities {
    fn default() -> Self {
        return Self::from_entropy();
    }
}

impl RngCore for Priorities {
    fn next_u32(&mut self) -> u32 {
        return (self.next_u64() >> 32) as u32;
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        return x;
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        return Ok(());
    }
}

impl SeedableRng for Priorities {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        return Self::seeded(u64::from_le_bytes(seed));
    }
}
