use crate::foundation::format::fmt_num;

/// A color resolved from user input, ready to print in ffmpeg color syntax.
#[derive(Clone, Debug, PartialEq)]
pub enum FfColor {
    /// Explicit channels; alpha `255` prints without an `@` suffix.
    Rgba {
        /// Red channel.
        r: u8,
        /// Green channel.
        g: u8,
        /// Blue channel.
        b: u8,
        /// Alpha channel.
        a: u8,
    },
    /// A color name understood by ffmpeg (`white`, `DarkRed`, ...) with optional opacity.
    Named {
        /// Lowercased color name.
        name: String,
        /// Opacity in `[0, 1]`, `None` for opaque.
        alpha: Option<f64>,
    },
}

impl FfColor {
    /// Parse `#RGB`, `#RRGGBB`, `#RRGGBBAA`, `rgb(..)`, `rgba(..)`, `name`, or `name@alpha`.
    pub fn parse(spec: &str) -> Result<Self, String> {
        let s = spec.trim();
        if s.is_empty() {
            return Err("color must be non-empty".to_owned());
        }

        if let Some(hex) = s.strip_prefix('#').or_else(|| s.strip_prefix("0x")) {
            return parse_hex(hex);
        }

        let lower = s.to_ascii_lowercase();
        if let Some(body) = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
        {
            let body = body
                .strip_suffix(')')
                .ok_or_else(|| format!("unterminated color function \"{s}\""))?;
            return parse_rgb_fn(body);
        }

        if lower == "transparent" {
            return Ok(Self::Named {
                name: "black".to_owned(),
                alpha: Some(0.0),
            });
        }

        let (name, alpha) = match lower.split_once('@') {
            Some((name, alpha)) => (name, Some(parse_unit(alpha)?)),
            None => (lower.as_str(), None),
        };
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(format!("unrecognized color \"{s}\""));
        }
        Ok(Self::Named {
            name: name.to_owned(),
            alpha,
        })
    }

    /// Render in ffmpeg color syntax (`0xRRGGBB`, `0xRRGGBB@0.5`, `white`, `black@0.5`).
    pub fn to_ffmpeg(&self) -> String {
        match self {
            Self::Rgba { r, g, b, a: 255 } => format!("0x{r:02X}{g:02X}{b:02X}"),
            Self::Rgba { r, g, b, a } => {
                format!("0x{r:02X}{g:02X}{b:02X}@{}", fmt_num(f64::from(*a) / 255.0))
            }
            Self::Named { name, alpha: None } => name.clone(),
            Self::Named {
                name,
                alpha: Some(a),
            } => format!("{name}@{}", fmt_num(*a)),
        }
    }
}

/// Convert a user color specification to ffmpeg color syntax.
pub fn to_ffmpeg_color(spec: &str) -> Result<String, String> {
    FfColor::parse(spec).map(|c| c.to_ffmpeg())
}

fn parse_hex(s: &str) -> Result<FfColor, String> {
    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if !s.is_ascii() {
        return Err("hex color must be ASCII".to_owned());
    }

    let (r, g, b, a) = match s.len() {
        3 => {
            let r = hex_byte(&s[0..1].repeat(2))?;
            let g = hex_byte(&s[1..2].repeat(2))?;
            let b = hex_byte(&s[2..3].repeat(2))?;
            (r, g, b, 255)
        }
        6 => (
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            255,
        ),
        8 => (
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            hex_byte(&s[6..8])?,
        ),
        _ => {
            return Err(
                "hex color must be #RGB, #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned(),
            );
        }
    };

    Ok(FfColor::Rgba { r, g, b, a })
}

fn parse_rgb_fn(body: &str) -> Result<FfColor, String> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(format!(
            "rgb()/rgba() takes 3 or 4 components, got {}",
            parts.len()
        ));
    }

    let channel = |p: &str| -> Result<u8, String> {
        let v: f64 = p
            .parse()
            .map_err(|_| format!("invalid color component \"{p}\""))?;
        if !(0.0..=255.0).contains(&v) {
            return Err(format!("color component {p} out of range 0..255"));
        }
        Ok(v.round() as u8)
    };

    let a = match parts.get(3) {
        Some(p) => (parse_unit(p)? * 255.0).round() as u8,
        None => 255,
    };

    Ok(FfColor::Rgba {
        r: channel(parts[0])?,
        g: channel(parts[1])?,
        b: channel(parts[2])?,
        a,
    })
}

fn parse_unit(s: &str) -> Result<f64, String> {
    let v: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid opacity \"{s}\""))?;
    if !(0.0..=1.0).contains(&v) {
        return Err(format!("opacity {v} out of range 0..1"));
    }
    Ok(v)
}

#[cfg(test)]
#[path = "../../tests/unit/text/color.rs"]
mod tests;
