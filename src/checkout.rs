use rand::Rng;

pub const MIN_CHECKOUT: u16 = 2;
pub const MAX_CHECKOUT: u16 = 170;

/// The only scores in [2, 170] that cannot be finished on a double.
pub const UNREACHABLE_CHECKOUTS: [u16; 7] = [159, 162, 163, 165, 166, 168, 169];

/// True if `score` is a legal checkout target.
pub fn is_checkout(score: u16) -> bool {
    (MIN_CHECKOUT..=MAX_CHECKOUT).contains(&score) && !UNREACHABLE_CHECKOUTS.contains(&score)
}

/// Draw a random legal checkout target, uniform over the reachable scores.
///
/// Takes the rng as a parameter so callers can seed one for deterministic
/// tests; production passes `rand::thread_rng()`.
pub fn generate<R: Rng>(rng: &mut R) -> u16 {
    loop {
        let score = rng.gen_range(MIN_CHECKOUT..=MAX_CHECKOUT);
        if !UNREACHABLE_CHECKOUTS.contains(&score) {
            return score;
        }
    }
}
