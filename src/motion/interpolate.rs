//! Piecewise-linear interpolation over breakpoint ranges.
//!
//! Mirrors the semantics of the mobile animation runtime the player's
//! choreography was tuned against: the segment is picked by scanning the
//! input breakpoints, and out-of-segment results are resolved by the
//! requested [`Extrapolation`]. Breakpoints are not required to be
//! monotonic; a few region formulas rely on that.

use super::color::Rgba;

/// Gamma used when blending colour channels.
const COLOR_GAMMA: f32 = 2.2;

/// How values outside the selected segment's output range are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extrapolation {
    /// Keep following the segment's line.
    #[default]
    Extend,
    /// Pin to the nearest output edge.
    Clamp,
    /// Return the input unchanged.
    Identity,
}

/// Interpolate `x` across `input` breakpoints onto `output` values.
///
/// `input` and `output` must have the same length (at least two).
pub fn interpolate(x: f32, input: &[f32], output: &[f32], extrapolation: Extrapolation) -> f32 {
    debug_assert_eq!(input.len(), output.len(), "breakpoint ranges differ in length");
    let n = input.len().min(output.len());
    if n < 2 {
        return output.first().copied().unwrap_or(x);
    }

    let (mut left, mut right) = (0, 1);
    if n > 2 {
        if x > input[n - 1] {
            left = n - 2;
            right = n - 1;
        } else if let Some(i) = (1..n).find(|&i| x <= input[i]) {
            left = i - 1;
            right = i;
        }
    }

    let (l_in, r_in) = (input[left], input[right]);
    let (l_out, r_out) = (output[left], output[right]);
    if r_in - l_in == 0.0 {
        return l_out;
    }

    let progress = (x - l_in) / (r_in - l_in);
    let val = l_out + progress * (r_out - l_out);
    let coef = if r_out >= l_out { 1.0 } else { -1.0 };

    if coef * val < coef * l_out || coef * val > coef * r_out {
        match extrapolation {
            Extrapolation::Extend => val,
            Extrapolation::Identity => x,
            Extrapolation::Clamp if coef * val < coef * l_out => l_out,
            Extrapolation::Clamp => r_out,
        }
    } else {
        val
    }
}

/// Shorthand for the common two-point clamped case.
pub fn interpolate_clamped(x: f32, input: [f32; 2], output: [f32; 2]) -> f32 {
    interpolate(x, &input, &output, Extrapolation::Clamp)
}

/// Interpolate between colours.
///
/// Colour channels are blended in gamma space and quantised back to 8 bits;
/// alpha is blended linearly. Both are clamped at the range edges.
pub fn interpolate_color(x: f32, input: &[f32], colors: &[Rgba]) -> Rgba {
    let channel = |pick: fn(&Rgba) -> f32| -> f32 {
        let outputs: Vec<f32> = colors.iter().map(|c| pick(c).powf(COLOR_GAMMA)).collect();
        let blended = interpolate(x, input, &outputs, Extrapolation::Clamp).max(0.0);
        (blended.powf(1.0 / COLOR_GAMMA) * 255.0).round() / 255.0
    };
    let alphas: Vec<f32> = colors.iter().map(|c| c.a).collect();

    Rgba {
        r: channel(|c| c.r),
        g: channel(|c| c.g),
        b: channel(|c| c.b),
        a: interpolate(x, input, &alphas, Extrapolation::Clamp),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_point_linear() {
        let v = interpolate(440.0, &[80.0, 800.0], &[60.0, 0.0], Extrapolation::Extend);
        assert!((v - 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_extend_keeps_slope_past_edges() {
        let v = interpolate(1000.0, &[0.0, 100.0], &[0.0, 10.0], Extrapolation::Extend);
        assert!((v - 100.0).abs() < 1e-4);
        let v = interpolate(-100.0, &[0.0, 100.0], &[0.0, 10.0], Extrapolation::Extend);
        assert!((v + 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_clamp_pins_to_edges() {
        assert_eq!(interpolate(1000.0, &[0.0, 100.0], &[0.0, 10.0], Extrapolation::Clamp), 10.0);
        assert_eq!(interpolate(-5.0, &[0.0, 100.0], &[0.0, 10.0], Extrapolation::Clamp), 0.0);
    }

    #[test]
    fn test_clamp_with_descending_output() {
        assert_eq!(interpolate(900.0, &[80.0, 800.0], &[1.0, 0.0], Extrapolation::Clamp), 0.0);
        assert_eq!(interpolate(10.0, &[80.0, 800.0], &[1.0, 0.0], Extrapolation::Clamp), 1.0);
    }

    #[test]
    fn test_identity_returns_input() {
        assert_eq!(interpolate(150.0, &[0.0, 100.0], &[0.0, 1.0], Extrapolation::Identity), 150.0);
    }

    #[test]
    fn test_multi_segment_picks_correct_segment() {
        let input = [80.0, 88.0, 800.0];
        let output = [1.0, 0.0, 0.0];
        assert!((interpolate(84.0, &input, &output, Extrapolation::Clamp) - 0.5).abs() < 1e-4);
        assert_eq!(interpolate(400.0, &input, &output, Extrapolation::Clamp), 0.0);
    }

    #[test]
    fn test_degenerate_segment_returns_left_output() {
        assert_eq!(interpolate(64.0, &[64.0, 64.0], &[3.0, 9.0], Extrapolation::Extend), 3.0);
    }

    #[test]
    fn test_non_monotonic_breakpoints_are_total() {
        // [80, 240, 100]: the third breakpoint sits below the second
        let input = [80.0, 240.0, 100.0];
        let output = [1.0, 0.0, 0.0];
        let v = interpolate(90.0, &input, &output, Extrapolation::Clamp);
        assert!(v > 0.9 && v < 1.0);
        assert_eq!(interpolate(500.0, &input, &output, Extrapolation::Clamp), 0.0);
    }

    #[test]
    fn test_color_edges_are_exact() {
        let from = Rgba::from_rgba8(0x17, 0x17, 0x17, 0xff);
        let to = Rgba::from_rgba8(0xe0, 0x40, 0x20, 0xff);
        assert_eq!(interpolate_color(0.0, &[80.0, 120.0], &[from, to]).to_hex(), "#171717ff");
        assert_eq!(interpolate_color(500.0, &[80.0, 120.0], &[from, to]).to_hex(), "#e04020ff");
    }

    #[test]
    fn test_color_blends_alpha_linearly() {
        let c = interpolate_color(50.0, &[0.0, 100.0], &[Rgba::TRANSPARENT, Rgba::WHITE]);
        assert!((c.a - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_color_blend_is_gamma_weighted() {
        let c = interpolate_color(50.0, &[0.0, 100.0], &[Rgba::BLACK, Rgba::WHITE]);
        // 0.5^(1/2.2) ≈ 0.73, brighter than a linear midpoint
        assert!(c.r > 0.7 && c.r < 0.76);
    }
}
