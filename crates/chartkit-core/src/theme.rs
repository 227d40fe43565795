// File: crates/chartkit-core/src/theme.rs
// Summary: Categorical color palettes and the ordinal color scale built on them.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_rgb_hex(hex: u32) -> Self {
        Self::from_argb(255, (hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.to_hex())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub name: &'static str,
    pub colors: Vec<Rgba>,
}

impl Palette {
    pub fn category10() -> Self {
        Self {
            name: "category10",
            colors: [
                0x1f77b4, 0xff7f0e, 0x2ca02c, 0xd62728, 0x9467bd,
                0x8c564b, 0xe377c2, 0x7f7f7f, 0xbcbd22, 0x17becf,
            ]
            .into_iter()
            .map(Rgba::from_rgb_hex)
            .collect(),
        }
    }

    pub fn pastel() -> Self {
        Self {
            name: "pastel",
            colors: [
                0xfbb4ae, 0xb3cde3, 0xccebc5, 0xdecbe4, 0xfed9a6,
                0xffffcc, 0xe5d8bd, 0xfddaec, 0xf2f2f2,
            ]
            .into_iter()
            .map(Rgba::from_rgb_hex)
            .collect(),
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast",
            colors: [0x000000, 0xe69f00, 0x56b4e9, 0x009e73, 0xf0e442, 0x0072b2, 0xd55e00, 0xcc79a7]
                .into_iter()
                .map(Rgba::from_rgb_hex)
                .collect(),
        }
    }

    /// Color for the `i`-th category, cycling when categories outnumber colors.
    pub fn color(&self, i: usize) -> Rgba {
        self.colors[i % self.colors.len()]
    }
}

/// Return the built-in palettes.
pub fn presets() -> Vec<Palette> {
    vec![Palette::category10(), Palette::pastel(), Palette::high_contrast()]
}

/// Find a palette by `name`, falling back to category10.
pub fn find(name: &str) -> Palette {
    for p in presets() { if p.name.eq_ignore_ascii_case(name) { return p; } }
    Palette::category10()
}

/// Ordinal color scale: categories get palette colors in first-seen order.
#[derive(Clone, Debug)]
pub struct ColorScale {
    palette: Palette,
    assigned: IndexMap<String, Rgba>,
}

impl ColorScale {
    pub fn new<I, S>(palette: Palette, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut scale = Self { palette, assigned: IndexMap::new() };
        for k in keys {
            scale.assign(k.into());
        }
        scale
    }

    fn assign(&mut self, key: String) -> Rgba {
        let next = self.palette.color(self.assigned.len());
        *self.assigned.entry(key).or_insert(next)
    }

    /// Color for `key`; unknown keys get the color they would receive next.
    pub fn color(&self, key: &str) -> Rgba {
        self.assigned.get(key).copied().unwrap_or_else(|| self.palette.color(self.assigned.len()))
    }

    /// `(category, color)` pairs in assignment order, for legends.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Rgba)> {
        self.assigned.iter().map(|(k, c)| (k.as_str(), *c))
    }
}
