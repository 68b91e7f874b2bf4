//! Cylindrical HSB colors, their display conversion and the similarity score.

// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::trivially_copy_pass_by_ref)]

use serde::{Deserialize, Serialize};
use std::fmt;

use super::RgbColor;

/// Largest hue a guess may hold. Generated targets stay below it.
pub const HUE_MAX: u16 = 360;

/// Largest saturation / brightness value (percent).
pub const PERCENT_MAX: u16 = 100;

/// A point in cylindrical HSB space.
///
/// Every constructor clamps its inputs, so a stored `HsbColor` is always in
/// range: hue 0-360, saturation and brightness 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct HsbColor {
    /// Hue in degrees (0-360, where 360 is the same angle as 0)
    pub hue: u16,
    /// Saturation in percent (0-100)
    pub saturation: u16,
    /// Brightness in percent (0-100)
    pub brightness: u16,
}

/// One of the three HSB components, used to address guess input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HsbChannel {
    /// Hue component
    Hue,
    /// Saturation component
    Saturation,
    /// Brightness component
    Brightness,
}

impl HsbChannel {
    /// All channels in display order.
    pub const ALL: [Self; 3] = [Self::Hue, Self::Saturation, Self::Brightness];

    /// Upper bound accepted for this channel.
    #[must_use]
    pub const fn max(self) -> u16 {
        match self {
            Self::Hue => HUE_MAX,
            Self::Saturation | Self::Brightness => PERCENT_MAX,
        }
    }

    /// Uppercase label shown above the input field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hue => "HUE",
            Self::Saturation => "SATURATION",
            Self::Brightness => "BRIGHTNESS",
        }
    }

    /// Unit suffix used in the results comparison.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Hue => "°",
            Self::Saturation | Self::Brightness => "%",
        }
    }

    /// Next channel (Hue -> Saturation -> Brightness -> Hue)
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Hue => Self::Saturation,
            Self::Saturation => Self::Brightness,
            Self::Brightness => Self::Hue,
        }
    }

    /// Previous channel (Hue -> Brightness -> Saturation -> Hue)
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Hue => Self::Brightness,
            Self::Saturation => Self::Hue,
            Self::Brightness => Self::Saturation,
        }
    }
}

impl HsbColor {
    /// Creates a color, clamping each component into its legal range.
    #[must_use]
    pub fn new(hue: u16, saturation: u16, brightness: u16) -> Self {
        Self {
            hue: hue.min(HUE_MAX),
            saturation: saturation.min(PERCENT_MAX),
            brightness: brightness.min(PERCENT_MAX),
        }
    }

    /// Reads one component.
    #[must_use]
    pub const fn get(&self, channel: HsbChannel) -> u16 {
        match channel {
            HsbChannel::Hue => self.hue,
            HsbChannel::Saturation => self.saturation,
            HsbChannel::Brightness => self.brightness,
        }
    }

    /// Writes one component, clamped to the channel's range.
    pub fn set(&mut self, channel: HsbChannel, value: u16) {
        let value = value.min(channel.max());
        match channel {
            HsbChannel::Hue => self.hue = value,
            HsbChannel::Saturation => self.saturation = value,
            HsbChannel::Brightness => self.brightness = value,
        }
    }

    /// Converts to a displayable RGB color with the six-sector formula.
    ///
    /// `k(n) = (n + h/60) mod 6`, `f(n) = b·(1 − s·clamp(min(k, 4−k), 0, 1))`,
    /// and the channels are `f(5)`, `f(3)`, `f(1)` scaled to 0-255.
    ///
    /// # Examples
    ///
    /// ```
    /// use pocketdesk::models::{HsbColor, RgbColor};
    ///
    /// assert_eq!(HsbColor::new(120, 100, 100).to_rgb(), RgbColor::new(0, 255, 0));
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)]
    pub fn to_rgb(&self) -> RgbColor {
        let h = f64::from(self.hue);
        let s = f64::from(self.saturation) / 100.0;
        let b = f64::from(self.brightness) / 100.0;

        let k = |n: f64| (n + h / 60.0).rem_euclid(6.0);
        let f = |n: f64| {
            let k = k(n);
            b * (1.0 - s * k.min(4.0 - k).clamp(0.0, 1.0))
        };
        let channel = |n: f64| (255.0 * f(n)).round().clamp(0.0, 255.0) as u8;

        RgbColor::new(channel(5.0), channel(3.0), channel(1.0))
    }

    /// Projects the color onto Cartesian coordinates (x, y, z).
    ///
    /// `x = S·B·cos(H)`, `y = S·B·sin(H)`, `z = B` with S and B in [0, 1].
    #[must_use]
    pub fn to_cartesian(&self) -> (f64, f64, f64) {
        let hue = f64::from(self.hue).to_radians();
        let s = f64::from(self.saturation) / 100.0;
        let b = f64::from(self.brightness) / 100.0;
        (s * b * hue.cos(), s * b * hue.sin(), b)
    }
}

impl fmt::Display for HsbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "H{}° S{}% B{}%",
            self.hue, self.saturation, self.brightness
        )
    }
}

/// Parses free text typed into a numeric field and clamps it to `[0, max]`.
///
/// Leading whitespace and a sign are accepted, then the leading run of digits
/// is read and the rest ignored. Text without leading digits yields 0, as do
/// negative numbers.
#[must_use]
pub fn parse_component(text: &str, max: u16) -> u16 {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() || negative {
        return 0;
    }

    // Overflowing input is simply "very large" and clamps to max
    let value = digits.parse::<u64>().unwrap_or(u64::MAX);
    value.min(u64::from(max)) as u16
}

/// Euclidean distance between two colors in the Cartesian projection.
///
/// Ranges from 0 (identical) to roughly 2 (opposite hues at full saturation
/// and brightness against black).
#[must_use]
pub fn distance(a: &HsbColor, b: &HsbColor) -> f64 {
    let (ax, ay, az) = a.to_cartesian();
    let (bx, by, bz) = b.to_cartesian();
    ((ax - bx).powi(2) + (ay - by).powi(2) + (az - bz).powi(2)).sqrt()
}

/// Similarity score in percent: `round((2 − d) · 50)`, never below 0.
///
/// # Examples
///
/// ```
/// use pocketdesk::models::{score, HsbColor};
///
/// let c = HsbColor::new(200, 40, 90);
/// assert_eq!(score(&c, &c), 100);
/// ```
#[must_use]
pub fn score(guess: &HsbColor, target: &HsbColor) -> u8 {
    let exact = (2.0 - distance(guess, target)) * 50.0;
    exact.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps() {
        let color = HsbColor::new(400, 150, 101);
        assert_eq!(color, HsbColor::new(360, 100, 100));
    }

    #[test]
    fn test_set_clamps_per_channel() {
        let mut color = HsbColor::default();
        color.set(HsbChannel::Hue, 500);
        color.set(HsbChannel::Saturation, 300);
        color.set(HsbChannel::Brightness, 42);
        assert_eq!(color.hue, 360);
        assert_eq!(color.saturation, 100);
        assert_eq!(color.brightness, 42);
    }

    #[test]
    fn test_parse_component() {
        assert_eq!(parse_component("42", 100), 42);
        assert_eq!(parse_component("  42", 100), 42);
        assert_eq!(parse_component("12px", 100), 12);
        assert_eq!(parse_component("3.7", 100), 3);
        assert_eq!(parse_component("+7", 100), 7);
        assert_eq!(parse_component("400", 360), 360);
        assert_eq!(parse_component("-5", 360), 0);
        assert_eq!(parse_component("abc", 360), 0);
        assert_eq!(parse_component("", 100), 0);
        assert_eq!(parse_component("99999999999999999999999", 100), 100);
    }

    #[test]
    fn test_to_rgb_primaries() {
        assert_eq!(HsbColor::new(0, 100, 100).to_rgb(), RgbColor::new(255, 0, 0));
        assert_eq!(HsbColor::new(120, 100, 100).to_rgb(), RgbColor::new(0, 255, 0));
        assert_eq!(HsbColor::new(240, 100, 100).to_rgb(), RgbColor::new(0, 0, 255));
        assert_eq!(HsbColor::new(360, 100, 100).to_rgb(), RgbColor::new(255, 0, 0));
    }

    #[test]
    fn test_to_rgb_secondaries() {
        assert_eq!(HsbColor::new(60, 100, 100).to_rgb(), RgbColor::new(255, 255, 0));
        assert_eq!(HsbColor::new(180, 100, 100).to_rgb(), RgbColor::new(0, 255, 255));
        assert_eq!(HsbColor::new(300, 100, 100).to_rgb(), RgbColor::new(255, 0, 255));
    }

    #[test]
    fn test_to_rgb_grayscale() {
        assert_eq!(HsbColor::new(0, 0, 0).to_rgb(), RgbColor::new(0, 0, 0));
        assert_eq!(HsbColor::new(200, 0, 100).to_rgb(), RgbColor::new(255, 255, 255));
        assert_eq!(HsbColor::new(90, 0, 50).to_rgb(), RgbColor::new(128, 128, 128));
    }

    #[test]
    fn test_cartesian_projection() {
        let (x, y, z) = HsbColor::new(90, 100, 100).to_cartesian();
        assert!(x.abs() < 1e-9);
        assert!((y - 1.0).abs() < 1e-9);
        assert!((z - 1.0).abs() < 1e-9);

        // Black collapses to the origin whatever the hue
        assert_eq!(HsbColor::new(123, 80, 0).to_cartesian(), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_score_identical_is_perfect() {
        for color in [
            HsbColor::new(0, 0, 0),
            HsbColor::new(359, 100, 100),
            HsbColor::new(180, 37, 64),
        ] {
            assert_eq!(score(&color, &color), 100);
        }
    }

    #[test]
    fn test_score_hue_wraps() {
        // 0° and 360° are the same angle
        assert_eq!(
            score(&HsbColor::new(0, 100, 100), &HsbColor::new(360, 100, 100)),
            100
        );
    }

    #[test]
    fn test_score_symmetric() {
        let a = HsbColor::new(10, 90, 80);
        let b = HsbColor::new(200, 30, 40);
        assert_eq!(score(&a, &b), score(&b, &a));
    }

    #[test]
    fn test_score_opposites() {
        // White vs black: d = 1 => 50
        assert_eq!(
            score(&HsbColor::new(0, 0, 100), &HsbColor::new(0, 0, 0)),
            50
        );
        // Opposite saturated hues at full brightness: d = 2 => 0
        assert_eq!(
            score(&HsbColor::new(0, 100, 100), &HsbColor::new(180, 100, 100)),
            0
        );
    }

    #[test]
    fn test_channel_cycle() {
        assert_eq!(HsbChannel::Hue.next(), HsbChannel::Saturation);
        assert_eq!(HsbChannel::Brightness.next(), HsbChannel::Hue);
        assert_eq!(HsbChannel::Hue.previous(), HsbChannel::Brightness);
        assert_eq!(HsbChannel::Hue.max(), 360);
        assert_eq!(HsbChannel::Saturation.max(), 100);
    }
}
