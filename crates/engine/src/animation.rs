//! The stochastic pixel rule behind the blinking-lights pattern.

use wopr_core::{Entropy, FrameBuffer, ROWS};

/// Advances the animation by one frame.
///
/// When disabled the framebuffer is forced blank and no randomness is
/// drawn. When enabled, every pixel independently goes through a two-stage
/// draw: the first coin decides whether the pixel is touched at all, and
/// only a touched pixel spends a second draw on its new value. Per frame
/// this leaves an expected half of the pixels untouched and sets or clears
/// a quarter each, regardless of the previous contents.
///
/// The two sequential draws are load-bearing: collapsing them into a single
/// three-outcome draw would consume a different number of values from the
/// entropy source and change the pattern for a given seed.
pub fn tick<R: Entropy>(framebuffer: &mut FrameBuffer, rng: &mut R, enabled: bool) {
    if !enabled {
        framebuffer.clear();
        return;
    }

    for y in 0..ROWS {
        for x in 0..framebuffer.width() {
            if rng.next_u32() % 2 == 0 {
                let lit = rng.next_u32() % 2 != 0;
                framebuffer.set_pixel(x, y, lit);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use wopr_core::test_utils::SeededRng;
    use wopr_core::{Entropy, FrameBuffer, ROWS};

    /// Counts how many values a test draws from the wrapped source.
    struct CountingRng {
        inner: SeededRng,
        draws: u64,
    }

    impl CountingRng {
        fn new(seed: u32) -> Self {
            Self {
                inner: SeededRng::new(seed),
                draws: 0,
            }
        }
    }

    impl Entropy for CountingRng {
        fn next_u32(&mut self) -> u32 {
            self.draws += 1;
            self.inner.next_u32()
        }
    }

    fn lit_fraction(fb: &FrameBuffer) -> f64 {
        let total = (fb.width() * ROWS) as f64;
        let lit: u32 = fb.as_bytes().iter().map(|byte| byte.count_ones()).sum();
        f64::from(lit) / total
    }

    #[test]
    fn disabled_tick_blanks_the_buffer_without_drawing() {
        let mut fb = FrameBuffer::new(4);
        for x in 0..fb.width() {
            fb.set_pixel(x, x % ROWS, true);
        }

        let mut rng = CountingRng::new(0x1234_5678);
        super::tick(&mut fb, &mut rng, false);

        assert!(fb.as_bytes().iter().all(|&byte| byte == 0));
        assert_eq!(rng.draws, 0);
    }

    #[test]
    fn first_tick_from_blank_lights_about_a_quarter() {
        let mut rng = SeededRng::new(0xC0FF_EE11);
        let mut lit_sum = 0.0;
        let rounds = 100;

        for _ in 0..rounds {
            let mut fb = FrameBuffer::new(32);
            super::tick(&mut fb, &mut rng, true);
            lit_sum += lit_fraction(&fb);
        }

        let mean = lit_sum / f64::from(rounds);
        assert!(
            (mean - 0.25).abs() < 0.02,
            "expected ~25% lit after the first frame, got {mean}"
        );
    }

    #[test]
    fn steady_state_is_half_lit_and_a_quarter_changes_per_tick() {
        let mut rng = SeededRng::new(0x0BAD_5EED);
        let mut fb = FrameBuffer::new(32);
        let pixels = fb.width() * ROWS;

        // Burn in from the all-dark start.
        for _ in 0..50 {
            super::tick(&mut fb, &mut rng, true);
        }

        let ticks = 200u32;
        let mut lit_sum = 0.0;
        let mut changed = 0u64;
        for _ in 0..ticks {
            let before = fb.clone();
            super::tick(&mut fb, &mut rng, true);
            lit_sum += lit_fraction(&fb);

            for y in 0..ROWS {
                for x in 0..fb.width() {
                    if fb.pixel(x, y) != before.pixel(x, y) {
                        changed += 1;
                    }
                }
            }
        }

        let lit_mean = lit_sum / f64::from(ticks);
        assert!(
            (lit_mean - 0.5).abs() < 0.02,
            "expected ~50% lit in steady state, got {lit_mean}"
        );

        // A pixel visibly changes only when touched (p = 1/2) and the new
        // value differs from the old one (p = 1/2).
        let changed_mean = changed as f64 / (u64::from(ticks) * pixels as u64) as f64;
        assert!(
            (changed_mean - 0.25).abs() < 0.02,
            "expected ~25% of pixels to change per tick, got {changed_mean}"
        );
    }

    #[test]
    fn touched_pixels_spend_a_second_draw() {
        let mut rng = CountingRng::new(0xFEED_F00D);
        let mut fb = FrameBuffer::new(32);
        let pixels = (fb.width() * ROWS) as u64;

        let ticks = 200u64;
        for _ in 0..ticks {
            super::tick(&mut fb, &mut rng, true);
        }

        // One draw per pixel plus one more for each touched pixel: the
        // average must sit close to 1.5 draws per pixel. A single-stage
        // rule would pin it at exactly 1.0.
        let per_pixel = rng.draws as f64 / (ticks * pixels) as f64;
        assert!(
            (per_pixel - 1.5).abs() < 0.05,
            "expected ~1.5 draws per pixel per tick, got {per_pixel}"
        );
    }
}
