pub mod play;
pub mod roll;

use rand::Rng;

/// Resolve an optional user-supplied seed, falling back to an OS-random
/// one so repeated invocations roll differently.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| rand::rng().random())
}
