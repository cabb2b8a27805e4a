use rand::Rng;

/// Draws the next secret number, uniform in `[1, upper_bound]`, skipping
/// numbers already in `history`. A full history is cleared before drawing,
/// so there is always room for a fresh value.
pub fn draw<R: Rng>(rng: &mut R, upper_bound: u32, history: &mut Vec<u32>) -> u32 {
    debug_assert!(upper_bound >= 1);

    if history.len() >= upper_bound as usize {
        history.clear();
    }

    // history.len() < upper_bound here, so this terminates
    loop {
        let candidate = rng.gen_range(1..=upper_bound);

        if !history.contains(&candidate) {
            history.push(candidate);
            return candidate;
        }
    }
}
