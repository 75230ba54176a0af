//! Source of randomness for drawing characters.
use rand::{
    rngs::{OsRng, StdRng},
    RngCore, SeedableRng,
};
use std::time::{SystemTime, UNIX_EPOCH};

/// Random number source used by the generator.
///
/// The operating system CSPRNG is preferred. When it cannot be
/// read a generator seeded from the system clock is used instead;
/// that downgrade is logged and reported by [`RandomSource::is_secure`].
#[derive(Debug)]
pub enum RandomSource {
    /// Operating system CSPRNG.
    Os(OsRng),
    /// Clock seeded generator, not suitable for secrets.
    Fallback(StdRng),
}

impl RandomSource {
    /// Check the operating system CSPRNG and fall back when
    /// it is unavailable.
    pub fn new() -> Self {
        let mut sample = [0u8; 4];
        match OsRng.try_fill_bytes(&mut sample) {
            Ok(_) => Self::Os(OsRng),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "random::csprng_unavailable, using insecure fallback",
                );
                Self::fallback()
            }
        }
    }

    /// Clock seeded fallback source.
    pub fn fallback() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::Fallback(StdRng::seed_from_u64(seed))
    }

    /// Whether this source is cryptographically secure.
    pub fn is_secure(&self) -> bool {
        matches!(self, Self::Os(_))
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for RandomSource {
    fn next_u32(&mut self) -> u32 {
        match self {
            Self::Os(rng) => rng.next_u32(),
            Self::Fallback(rng) => rng.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            Self::Os(rng) => rng.next_u64(),
            Self::Fallback(rng) => rng.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match self {
            Self::Os(rng) => rng.fill_bytes(dest),
            Self::Fallback(rng) => rng.fill_bytes(dest),
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        match self {
            Self::Os(rng) => rng.try_fill_bytes(dest),
            Self::Fallback(rng) => rng.try_fill_bytes(dest),
        }
    }
}

/// Choose an index in `[0, bound)` from a single 32-bit draw.
///
/// The value is reduced modulo `bound` which is slightly biased
/// toward low indices whenever `bound` does not divide 2^32. For
/// pools of a few hundred characters the skew is below one part
/// in ten million and is accepted rather than rejection sampled.
///
/// # Panics
///
/// Panics if `bound` is zero.
pub fn random_index<R: RngCore + ?Sized>(rng: &mut R, bound: usize) -> usize {
    assert!(bound > 0, "random index bound must be non-zero");
    let bound = u32::try_from(bound).unwrap_or(u32::MAX);
    (rng.next_u32() % bound) as usize
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn random_index_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for bound in 1..200 {
            for _ in 0..50 {
                assert!(random_index(&mut rng, bound) < bound);
            }
        }
    }

    #[test]
    fn fallback_is_not_secure() {
        assert!(!RandomSource::fallback().is_secure());
    }

    #[test]
    fn os_source_fills_bytes() {
        let mut source = RandomSource::new();
        let mut buf = [0u8; 32];
        source.fill_bytes(&mut buf);
        // 32 zero bytes from a working source is not a realistic outcome
        assert!(buf.iter().any(|b| *b != 0));
    }
}
