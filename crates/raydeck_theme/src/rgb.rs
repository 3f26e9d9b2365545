//! RGB color for theme derivation. Portable (u8) for any UI color API.

/// RGB triplet. Hex round-trip plus the linear blend the palette is built on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Fallback for malformed color input (Deep Purple, the brand seed).
    pub const DEFAULT: Rgb = Rgb(103, 80, 164);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb(r, g, b)
    }

    pub fn r(self) -> u8 {
        self.0
    }
    pub fn g(self) -> u8 {
        self.1
    }
    pub fn b(self) -> u8 {
        self.2
    }

    /// Parses a 6-hex-digit string, `#` prefix optional, case-insensitive.
    ///
    /// Best-effort by contract: anything malformed yields [Rgb::DEFAULT]
    /// rather than an error. A bad color string must never take the UI down.
    pub fn parse(hex: &str) -> Self {
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Self::DEFAULT;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).unwrap_or(0);
        Rgb(channel(0), channel(2), channel(4))
    }

    /// Linear per-channel mix: `round(a*w + b*(1-w))`, `w` is `a`'s share.
    ///
    /// Rounding is half-away-from-zero (f64 `round`), so outputs are stable
    /// and pinnable in tests.
    pub fn blend(a: Rgb, b: Rgb, weight: f64) -> Rgb {
        let mix = |x: u8, y: u8| (f64::from(x) * weight + f64::from(y) * (1.0 - weight)).round() as u8;
        Rgb(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
    }

    /// Lower-case `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// Tuple for terminal or UI color APIs: `(r, g, b)`.
    pub fn tuple(self) -> (u8, u8, u8) {
        (self.0, self.1, self.2)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(c: Rgb) -> Self {
        c.tuple()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_and_without_prefix() {
        assert_eq!(Rgb::parse("#2196f3"), Rgb(33, 150, 243));
        assert_eq!(Rgb::parse("2196f3"), Rgb(33, 150, 243));
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(Rgb::parse("#6750A4"), Rgb(103, 80, 164));
        assert_eq!(Rgb::parse("#6750a4"), Rgb(103, 80, 164));
    }

    #[test]
    fn test_parse_malformed_falls_back_to_default() {
        assert_eq!(Rgb::parse("not-a-color"), Rgb(103, 80, 164));
        assert_eq!(Rgb::parse(""), Rgb(103, 80, 164));
        assert_eq!(Rgb::parse("#fff"), Rgb(103, 80, 164));
        assert_eq!(Rgb::parse("#12345g"), Rgb(103, 80, 164));
        assert_eq!(Rgb::parse("#1234567"), Rgb(103, 80, 164));
    }

    #[test]
    fn test_hex_roundtrip() {
        let c = Rgb(103, 80, 164);
        assert_eq!(c.to_hex(), "#6750a4");
        assert_eq!(Rgb::parse(&c.to_hex()), c);
        let edge = Rgb(0, 9, 255);
        assert_eq!(edge.to_hex(), "#0009ff");
        assert_eq!(Rgb::parse(&edge.to_hex()), edge);
    }

    #[test]
    fn test_blend_endpoint_weights_exact() {
        let a = Rgb(103, 80, 164);
        let b = Rgb(20, 18, 24);
        assert_eq!(Rgb::blend(a, b, 1.0), a);
        assert_eq!(Rgb::blend(a, b, 0.0), b);
    }

    #[test]
    fn test_blend_equal_endpoints_is_identity() {
        let a = Rgb(33, 150, 243);
        for w in [0.0, 0.05, 0.25, 0.5, 0.9, 1.0] {
            assert_eq!(Rgb::blend(a, a, w), a);
        }
    }

    #[test]
    fn test_blend_half_tie_rounds_away_from_zero() {
        // 10*0.5 + 20*0.5 = 15 exactly; 0.5 is exact in binary.
        assert_eq!(Rgb::blend(Rgb(10, 10, 10), Rgb(20, 20, 20), 0.5), Rgb(15, 15, 15));
        // 0*0.5 + 1*0.5 = 0.5 -> 1.
        assert_eq!(Rgb::blend(Rgb(0, 0, 0), Rgb(1, 1, 1), 0.5), Rgb(1, 1, 1));
    }

    #[test]
    fn test_blend_golden_dark_surface() {
        // Seed #6750A4 against the dark surface anchor at 5% seed share.
        let seed = Rgb(103, 80, 164);
        let anchor = Rgb(20, 18, 24);
        assert_eq!(Rgb::blend(seed, anchor, 0.05), Rgb(24, 21, 31));
    }
}
