use std::fmt::Write;

use super::model::Mode;

// ---------------------------------------------------------------------------
// Synthetic survey generator ("Load sample" button)
// ---------------------------------------------------------------------------

/// Generate tab-delimited sample text for the given mode.
///
/// Deterministic for a given seed, so tests can round-trip the output
/// through the transform pipeline.
pub fn generate(mode: Mode, seed: u64) -> String {
    let mut rng = SimpleRng::new(seed);
    match mode {
        Mode::Vlf => vlf_line(&mut rng),
        Mode::Resistivity => wenner_profile(&mut rng),
    }
}

/// VLF line with a simulated crossover anomaly at station 50.
fn vlf_line(rng: &mut SimpleRng) -> String {
    let mut out = String::new();
    for station in (0..=100).step_by(5) {
        let t = (station as f64 - 50.0) / 20.0;
        let in_phase = 40.0 * t.sin() + rng.next_f64() * 2.0;
        let quadrature = 20.0 * t.cos();
        let _ = writeln!(out, "{station}\t{in_phase:.1}\t{quadrature:.1}");
    }
    out
}

/// Two-level Wenner profile (a = 10 m and a = 20 m), K precomputed.
fn wenner_profile(rng: &mut SimpleRng) -> String {
    let mut out = String::new();
    for x in (0..=100).step_by(10) {
        let r = 10.0 + rng.next_f64();
        let _ = writeln!(out, "{x}\t{}\t{}\t{}\t62.8\t{r:.1}", x + 10, x + 20, x + 30);
    }
    for x in (0..=80).step_by(10) {
        let r = 5.0 + rng.next_f64();
        let _ = writeln!(out, "{x}\t{}\t{}\t{}\t125.6\t{r:.1}", x + 20, x + 40, x + 60);
    }
    out
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_for_a_seed() {
        assert_eq!(generate(Mode::Vlf, 42), generate(Mode::Vlf, 42));
        assert_ne!(generate(Mode::Vlf, 42), generate(Mode::Vlf, 43));
    }

    #[test]
    fn vlf_sample_has_three_columns_per_line() {
        let text = generate(Mode::Vlf, 1);
        assert_eq!(text.lines().count(), 21);
        assert!(text.lines().all(|l| l.split('\t').count() == 3));
    }

    #[test]
    fn wenner_sample_covers_two_spacing_levels() {
        let text = generate(Mode::Resistivity, 1);
        assert_eq!(text.lines().count(), 11 + 9);
    }
}
