use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const RNG_SEED: u64 = 0x5EED_2026;

/// Criterion sampling presets, picked by how long one iteration runs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RuntimeProfile {
    Small,
    Medium,
    Large,
}

impl RuntimeProfile {
    fn sample_size(self) -> usize {
        match self {
            Self::Small | Self::Medium => 15,
            Self::Large => 10,
        }
    }

    fn warm_up(self) -> Duration {
        Duration::from_millis(match self {
            Self::Small => 100,
            Self::Medium => 500,
            Self::Large => 800,
        })
    }

    fn measurement(self) -> Duration {
        Duration::from_millis(match self {
            Self::Small => 200,
            Self::Medium => 1000,
            Self::Large => 1500,
        })
    }

    pub fn apply<M: Measurement>(self, group: &mut BenchmarkGroup<'_, M>) {
        group.sample_size(self.sample_size());
        group.warm_up_time(self.warm_up());
        group.measurement_time(self.measurement());
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Uniform value with exactly `bits` significant bits.
pub fn random_with_bits<R: Rng + ?Sized>(rng: &mut R, bits: u32) -> u64 {
    if bits == 0 {
        return 0;
    }

    let high_bit = (bits - 1).min(63);
    let min = 1_u64 << high_bit;
    let max = if bits >= 64 {
        u64::MAX
    } else {
        (1_u64 << bits) - 1
    };
    rng.random_range(min..=max)
}

/// Sorted values with runs of repeated keys, `distinct` keys in total.
pub fn sorted_with_runs<R: Rng + ?Sized>(rng: &mut R, len: usize, distinct: u64) -> Vec<u64> {
    let mut values: Vec<u64> = (0..len).map(|_| rng.random_range(0..distinct.max(1))).collect();
    values.sort_unstable();
    values
}
