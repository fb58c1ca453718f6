//! The single source of randomness used by the generator.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::ThreadRng;
use rand_chacha::ChaCha8Rng;

/// Uniform index sampler.
pub trait RandomSource {
    /// Index in `0..len`. Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Adapter from any [`rand::Rng`].
#[derive(Clone, Debug)]
pub struct RngSource<R>(pub R);

impl RngSource<ThreadRng> {
    pub fn thread() -> Self {
        RngSource(rand::thread_rng())
    }
}

impl RngSource<ChaCha8Rng> {
    /// Reproducible stream for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        RngSource(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick(&mut self, len: usize) -> usize {
        if len <= 1 { 0 } else { self.0.gen_range(0..len) }
    }
}

/// Replays a fixed list of picks, each taken modulo the candidate count.
/// Picks past the end of the list are 0.
#[derive(Clone, Debug, Default)]
pub struct Scripted {
    picks: Vec<usize>,
    next: usize,
}

impl Scripted {
    pub fn new(picks: impl Into<Vec<usize>>) -> Self {
        Self {
            picks: picks.into(),
            next: 0,
        }
    }

    /// Number of picks consumed so far.
    pub fn consumed(&self) -> usize {
        self.next
    }
}

impl RandomSource for Scripted {
    fn pick(&mut self, len: usize) -> usize {
        let raw = self.picks.get(self.next).copied().unwrap_or(0);
        self.next += 1;
        if len == 0 { 0 } else { raw % len }
    }
}

/// Uniformly choose one item; `None` for an empty slice (no pick consumed).
pub fn choose<'s, T, R>(rng: &mut R, items: &'s [T]) -> Option<&'s T>
where
    R: RandomSource + ?Sized,
{
    if items.is_empty() {
        return None;
    }
    items.get(rng.pick(items.len()))
}
