//! Harmony-based palette generation and brightness adjustment.
//!
//! Generation draws one fresh seed per call and then derives every slot
//! deterministically from it. The first five slots of each mode follow the
//! classic five-color layouts. Longer palettes keep extending the same pattern
//! so regeneration always fills the palette's current length.

use tracing::debug;

use super::random::RandomSource;
use crate::models::{HarmonyMode, Hsl, Palette, RgbColor};

/// Saturation used for hue-based harmonies, in percent.
pub const HARMONY_SATURATION: f32 = 70.0;

/// Lightness used for hue-based harmonies, in percent.
pub const HARMONY_LIGHTNESS: f32 = 50.0;

/// Hue distance between neighbouring analogous colors, in degrees.
pub const ANALOGOUS_STEP: u32 = 30;

/// Channel offset between brightness variants.
pub const BRIGHTNESS_STEP: i16 = 20;

/// Largest slider value accepted by [`adjust_brightness`].
pub const MAX_BRIGHTNESS_DELTA: i16 = 100;

/// Default number of colors in a fresh palette.
pub const DEFAULT_PALETTE_SIZE: usize = 5;

fn hue_color(hue: u32) -> RgbColor {
    // hue is reduced mod 360 so the cast is exact
    #[allow(clippy::cast_precision_loss)]
    let degrees = (hue % 360) as f32;
    RgbColor::from_hsl(Hsl::new(degrees, HARMONY_SATURATION, HARMONY_LIGHTNESS))
}

/// Offset for the `cycle`-th round of brightness variants: 20, 40, 60, ...
fn variant_offset(cycle: usize, positive: bool) -> i16 {
    let steps = i16::try_from(cycle.saturating_add(1)).unwrap_or(i16::MAX);
    let amount = BRIGHTNESS_STEP.saturating_mul(steps).min(255);
    if positive {
        amount
    } else {
        -amount
    }
}

fn analogous(base_hue: u32, count: usize) -> Vec<RgbColor> {
    (0..count)
        .map(|i| {
            let step = u32::try_from(i % 12).unwrap_or(0) * ANALOGOUS_STEP;
            hue_color(base_hue + step)
        })
        .collect()
}

fn monochromatic(base: RgbColor, count: usize) -> Vec<RgbColor> {
    (0..count)
        .map(|i| {
            let steps = i64::try_from(i).unwrap_or(i64::MAX) - 2;
            let offset = (steps * i64::from(BRIGHTNESS_STEP)).clamp(-255, 255);
            base.shift(i16::try_from(offset).unwrap_or(0))
        })
        .collect()
}

fn triadic(base_hue: u32, count: usize) -> Vec<RgbColor> {
    let hues = [base_hue, base_hue + 120, base_hue + 240];
    (0..count)
        .map(|i| {
            if i < 3 {
                return hue_color(hues[i]);
            }
            // After the three pure hues: +/- variants of each hue in turn.
            let k = i - 3;
            let within = k % 6;
            hue_color(hues[within / 2]).shift(variant_offset(k / 6, within % 2 == 0))
        })
        .collect()
}

fn complementary(base_hue: u32, count: usize) -> Vec<RgbColor> {
    let hues = [base_hue, base_hue + 180];
    (0..count)
        .map(|i| {
            if i < 2 {
                return hue_color(hues[i]);
            }
            let k = i - 2;
            let within = k % 4;
            hue_color(hues[within / 2]).shift(variant_offset(k / 4, within % 2 == 0))
        })
        .collect()
}

/// Produces `count` fresh colors for `mode`, ignoring any locks.
pub fn candidates<R: RandomSource + ?Sized>(
    mode: HarmonyMode,
    count: usize,
    rng: &mut R,
) -> Vec<RgbColor> {
    if count == 0 {
        return Vec::new();
    }

    match mode {
        HarmonyMode::Monochromatic => {
            let base = rng.color();
            debug!(%mode, %base, count, "Generating candidates");
            monochromatic(base, count)
        }
        HarmonyMode::Analogous => analogous(seed_hue(mode, count, rng), count),
        HarmonyMode::Triadic => triadic(seed_hue(mode, count, rng), count),
        HarmonyMode::Complementary => complementary(seed_hue(mode, count, rng), count),
    }
}

fn seed_hue<R: RandomSource + ?Sized>(mode: HarmonyMode, count: usize, rng: &mut R) -> u32 {
    let base_hue = u32::from(rng.hue());
    debug!(%mode, base_hue, count, "Generating candidates");
    base_hue
}

/// Regenerates `previous` using `mode`.
///
/// The result has the same length as `previous`. Every locked position keeps
/// its previous color.
///
/// # Examples
///
/// ```
/// use paleta::models::{HarmonyMode, Palette, RgbColor};
/// use paleta::services::harmony::generate;
/// use paleta::services::random::SequenceRandom;
///
/// let mut palette = Palette::from_colors(vec![RgbColor::BLACK; 5]);
/// palette.toggle_lock(1).unwrap();
///
/// let colors = generate(HarmonyMode::Triadic, &palette, &mut SequenceRandom::new(vec![0]));
/// assert_eq!(colors.len(), 5);
/// assert_eq!(colors[0], RgbColor::new(217, 38, 38));
/// assert_eq!(colors[1], RgbColor::BLACK);
/// ```
pub fn generate<R: RandomSource + ?Sized>(
    mode: HarmonyMode,
    previous: &Palette,
    rng: &mut R,
) -> Vec<RgbColor> {
    candidates(mode, previous.len(), rng)
        .into_iter()
        .zip(previous.iter())
        .map(|(fresh, (old, locked))| if locked { old } else { fresh })
        .collect()
}

/// Produces `count` independent random colors.
pub fn random_colors<R: RandomSource + ?Sized>(count: usize, rng: &mut R) -> Vec<RgbColor> {
    (0..count).map(|_| rng.color()).collect()
}

/// Shifts every channel of every color by `delta`, clamped to `[-100, 100]`.
///
/// Channels saturate at 0 and 255, so applying `delta` and then `-delta` does
/// not restore colors whose channels were clamped.
pub fn adjust_brightness(colors: &[RgbColor], delta: i16) -> Vec<RgbColor> {
    let delta = delta.clamp(-MAX_BRIGHTNESS_DELTA, MAX_BRIGHTNESS_DELTA);
    colors.iter().map(|color| color.shift(delta)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::random::{SeededRandom, SequenceRandom, ThreadRandom};
    use proptest::prelude::*;
    use std::collections::HashSet;

    const RED: RgbColor = RgbColor::new(217, 38, 38);
    const GREEN: RgbColor = RgbColor::new(38, 217, 38);
    const BLUE: RgbColor = RgbColor::new(38, 38, 217);
    const CYAN: RgbColor = RgbColor::new(38, 217, 217);

    fn unlocked(count: usize) -> Palette {
        Palette::from_colors(vec![RgbColor::BLACK; count])
    }

    fn hue_distance(a: f32, b: f32) -> f32 {
        let d = (a - b).rem_euclid(360.0);
        d.min(360.0 - d)
    }

    #[test]
    fn test_triadic_layout() {
        let colors = generate(HarmonyMode::Triadic, &unlocked(5), &mut SequenceRandom::new(vec![0]));
        assert_eq!(
            colors,
            vec![RED, GREEN, BLUE, RgbColor::new(237, 58, 58), RgbColor::new(197, 18, 18)]
        );
    }

    #[test]
    fn test_complementary_layout() {
        let colors = generate(
            HarmonyMode::Complementary,
            &unlocked(5),
            &mut SequenceRandom::new(vec![0]),
        );
        assert_eq!(
            colors,
            vec![
                RED,
                CYAN,
                RgbColor::new(237, 58, 58),
                RgbColor::new(197, 18, 18),
                RgbColor::new(58, 237, 237),
            ]
        );
    }

    #[test]
    fn test_monochromatic_layout() {
        let colors = generate(
            HarmonyMode::Monochromatic,
            &unlocked(5),
            &mut SequenceRandom::new(vec![0x0080_8080]),
        );
        let expected: Vec<RgbColor> = [88, 108, 128, 148, 168]
            .into_iter()
            .map(|v| RgbColor::new(v, v, v))
            .collect();
        assert_eq!(colors, expected);
    }

    #[test]
    fn test_monochromatic_clamps_channels() {
        let colors = generate(
            HarmonyMode::Monochromatic,
            &unlocked(5),
            &mut SequenceRandom::new(vec![0x00F0_0A80]),
        );
        assert_eq!(colors[0], RgbColor::new(200, 0, 88));
        assert_eq!(colors[4], RgbColor::new(255, 50, 168));
    }

    #[test]
    fn test_analogous_hue_spacing() {
        let mut rng = ThreadRandom::new();
        for _ in 0..50 {
            let colors = generate(HarmonyMode::Analogous, &unlocked(5), &mut rng);
            let base = colors[0].to_hsl().h;
            for (i, color) in colors.iter().enumerate() {
                #[allow(clippy::cast_precision_loss)]
                let expected = (base + 30.0 * i as f32).rem_euclid(360.0);
                assert!(
                    hue_distance(color.to_hsl().h, expected) < 1.0,
                    "slot {} hue {} expected {}",
                    i,
                    color.to_hsl().h,
                    expected
                );
            }
        }
    }

    #[test]
    fn test_base_hue_varies_between_calls() {
        let mut rng = ThreadRandom::new();
        let firsts: HashSet<RgbColor> = (0..20)
            .map(|_| generate(HarmonyMode::Analogous, &unlocked(5), &mut rng)[0])
            .collect();
        assert!(firsts.len() > 1, "20 generations produced the same base color");
    }

    #[test]
    fn test_generate_preserves_current_length() {
        let mut rng = SequenceRandom::new(vec![0]);
        assert_eq!(generate(HarmonyMode::Complementary, &unlocked(3), &mut rng).len(), 3);
        assert!(generate(HarmonyMode::Analogous, &unlocked(0), &mut rng).is_empty());

        let long = generate(HarmonyMode::Triadic, &unlocked(9), &mut SequenceRandom::new(vec![0]));
        assert_eq!(long.len(), 9);
        // Variants continue over the second and third hue.
        assert_eq!(long[5], GREEN.shift(20));
        assert_eq!(long[6], GREEN.shift(-20));
        assert_eq!(long[7], BLUE.shift(20));
        assert_eq!(long[8], BLUE.shift(-20));
    }

    #[test]
    fn test_complementary_variants_widen_after_cycle() {
        let colors = generate(
            HarmonyMode::Complementary,
            &unlocked(7),
            &mut SequenceRandom::new(vec![0]),
        );
        assert_eq!(colors[5], CYAN.shift(-20));
        assert_eq!(colors[6], RED.shift(40));
    }

    #[test]
    fn test_empty_palette_draws_nothing() {
        let mut rng = SequenceRandom::new(vec![1, 2, 3]);
        assert!(candidates(HarmonyMode::Triadic, 0, &mut rng).is_empty());
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn test_all_locked_is_unchanged() {
        let mut palette = Palette::from_colors(vec![
            RgbColor::new(1, 2, 3),
            RgbColor::new(4, 5, 6),
        ]);
        palette.set_locked(0, true).unwrap();
        palette.set_locked(1, true).unwrap();
        for mode in HarmonyMode::ALL {
            let colors = generate(mode, &palette, &mut ThreadRandom::new());
            assert_eq!(colors, palette.colors());
        }
    }

    #[test]
    fn test_adjust_brightness_clamps_delta() {
        let colors = vec![RgbColor::new(100, 100, 100)];
        assert_eq!(adjust_brightness(&colors, 150), vec![RgbColor::new(200, 200, 200)]);
        assert_eq!(adjust_brightness(&colors, -150), vec![RgbColor::BLACK]);
    }

    #[test]
    fn test_adjust_brightness_is_not_reversible_after_clamp() {
        let colors = vec![RgbColor::new(240, 20, 128)];
        let there = adjust_brightness(&colors, 30);
        let back = adjust_brightness(&there, -30);
        assert_eq!(back, vec![RgbColor::new(225, 20, 128)]);
        assert_ne!(back, colors);
    }

    #[test]
    fn test_random_colors_count() {
        let colors = random_colors(DEFAULT_PALETTE_SIZE, &mut SeededRandom::new(7));
        assert_eq!(colors.len(), 5);
    }

    fn mode_strategy() -> impl Strategy<Value = HarmonyMode> {
        prop::sample::select(HarmonyMode::ALL.to_vec())
    }

    fn color_strategy() -> impl Strategy<Value = RgbColor> {
        any::<(u8, u8, u8)>().prop_map(|(r, g, b)| RgbColor::new(r, g, b))
    }

    proptest! {
        #[test]
        fn locked_slots_survive_regeneration(
            mode in mode_strategy(),
            slots in prop::collection::vec((color_strategy(), any::<bool>()), 0..12),
            seed in any::<u64>(),
        ) {
            let mut palette = Palette::new();
            for (i, (color, locked)) in slots.iter().enumerate() {
                palette.push(*color);
                palette.set_locked(i, *locked).unwrap();
            }

            let colors = generate(mode, &palette, &mut SeededRandom::new(seed));
            prop_assert_eq!(colors.len(), palette.len());
            for (i, (old, locked)) in palette.iter().enumerate() {
                if locked {
                    prop_assert_eq!(colors[i], old);
                }
            }
        }

        #[test]
        fn zero_brightness_is_identity(colors in prop::collection::vec(color_strategy(), 0..10)) {
            prop_assert_eq!(adjust_brightness(&colors, 0), colors);
        }

        #[test]
        fn brightness_matches_clamped_shift(
            colors in prop::collection::vec(color_strategy(), 1..10),
            delta in -100i16..=100,
        ) {
            let adjusted = adjust_brightness(&colors, delta);
            for (before, after) in colors.iter().zip(&adjusted) {
                prop_assert_eq!(i16::from(after.r), (i16::from(before.r) + delta).clamp(0, 255));
                prop_assert_eq!(i16::from(after.g), (i16::from(before.g) + delta).clamp(0, 255));
                prop_assert_eq!(i16::from(after.b), (i16::from(before.b) + delta).clamp(0, 255));
            }
        }
    }
}
