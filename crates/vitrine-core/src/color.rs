use palette::{FromColor, LinSrgba, Srgba};

use crate::scene::ColorLinPremul;

// sRGB → linear premultiplied conversions, kept out of scene.rs for separation of concerns.
impl ColorLinPremul {
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Convenience alias matching Color::rgba(...) widely used in UI code.
    #[inline]
    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_srgba_u8([r, g, b, a])
    }

    /// Create from sRGB u8 RGBA array (premultiplied in linear space).
    #[inline]
    pub fn from_srgba_u8(c: [u8; 4]) -> Self {
        let s = Srgba::new(
            c[0] as f32 / 255.0,
            c[1] as f32 / 255.0,
            c[2] as f32 / 255.0,
            c[3] as f32 / 255.0,
        );
        let lin: LinSrgba = LinSrgba::from_color(s);
        Self {
            r: lin.red * lin.alpha,
            g: lin.green * lin.alpha,
            b: lin.blue * lin.alpha,
            a: lin.alpha,
        }
    }

    /// Create from sRGB u8 RGB with float alpha (CSS-like rgba).
    #[inline]
    pub fn from_srgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        let s = Srgba::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a);
        let lin: LinSrgba = LinSrgba::from_color(s);
        Self {
            r: lin.red * lin.alpha,
            g: lin.green * lin.alpha,
            b: lin.blue * lin.alpha,
            a: lin.alpha,
        }
    }

    /// Parse a CSS-style hex color: `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let byte = |hi: u8, lo: u8| -> Option<u8> {
            let hv = (hi as char).to_digit(16)?;
            let lv = (lo as char).to_digit(16)?;
            Some((hv * 16 + lv) as u8)
        };
        match digits.as_bytes() {
            [r, g, b] => {
                let c = [byte(*r, *r)?, byte(*g, *g)?, byte(*b, *b)?, 255];
                Some(Self::from_srgba_u8(c))
            }
            [r1, r2, g1, g2, b1, b2] => {
                let c = [byte(*r1, *r2)?, byte(*g1, *g2)?, byte(*b1, *b2)?, 255];
                Some(Self::from_srgba_u8(c))
            }
            [r1, r2, g1, g2, b1, b2, a1, a2] => {
                let c = [
                    byte(*r1, *r2)?,
                    byte(*g1, *g2)?,
                    byte(*b1, *b2)?,
                    byte(*a1, *a2)?,
                ];
                Some(Self::from_srgba_u8(c))
            }
            _ => None,
        }
    }

    /// Uniform alpha applied on top of an already premultiplied color.
    #[inline]
    pub fn with_opacity(self, opacity: f32) -> Self {
        let o = opacity.clamp(0.0, 1.0);
        Self {
            r: self.r * o,
            g: self.g * o,
            b: self.b * o,
            a: self.a * o,
        }
    }

    /// Convert back to sRGB u8 RGBA array (unpremultiplied).
    #[inline]
    pub fn to_srgba_u8(&self) -> [u8; 4] {
        // Unpremultiply
        let (r, g, b) = if self.a > 0.0001 {
            (self.r / self.a, self.g / self.a, self.b / self.a)
        } else {
            (0.0, 0.0, 0.0)
        };

        let lin = LinSrgba::new(r, g, b, self.a);
        let srgb: Srgba = Srgba::from_color(lin);

        [
            (srgb.red * 255.0).round().clamp(0.0, 255.0) as u8,
            (srgb.green * 255.0).round().clamp(0.0, 255.0) as u8,
            (srgb.blue * 255.0).round().clamp(0.0, 255.0) as u8,
            (srgb.alpha * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_roundtrip() {
        let c = ColorLinPremul::from_hex("#dcfce7").unwrap();
        assert_eq!(c.to_srgba_u8(), [0xdc, 0xfc, 0xe7, 0xff]);

        let short = ColorLinPremul::from_hex("#fff").unwrap();
        assert_eq!(short.to_srgba_u8(), [255, 255, 255, 255]);
    }

    #[test]
    fn test_hex_with_alpha() {
        let c = ColorLinPremul::from_hex("#00000080").unwrap();
        let [_, _, _, a] = c.to_srgba_u8();
        assert_eq!(a, 0x80);
    }

    #[test]
    fn test_hex_rejects_garbage() {
        assert!(ColorLinPremul::from_hex("#zzzzzz").is_none());
        assert!(ColorLinPremul::from_hex("#12345").is_none());
        assert!(ColorLinPremul::from_hex("").is_none());
    }

    #[test]
    fn test_opacity_scales_all_channels() {
        let c = ColorLinPremul::rgba(255, 255, 255, 255).with_opacity(0.5);
        assert!((c.a - 0.5).abs() < 1e-5);
        assert!((c.r - 0.5).abs() < 1e-5);
    }
}
