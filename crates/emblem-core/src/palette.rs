//! The static color table and built-in palettes.
//!
//! The color table maps TikZ-visible color names to RGB triples. It is a
//! read-only lookup structure initialized once at first use; resolution
//! against it is a pure function. The built-in palettes reproduce the
//! published logo color schemes: the traditional Rey & Anselin (2007)
//! colors, the canonical 2020 refresh, and two ColorBrewer2 qualitative
//! schemes (Brewer, Cynthia A., <http://www.ColorBrewer.org>).

use std::{collections::HashMap, fmt, str::FromStr, sync::LazyLock};

use serde::Deserialize;

use crate::{color::ColorEntry, error::Error};

/// The logo always has this many child nodes.
pub const CHILD_NODES: usize = 7;

/// Each child node always has this many grandchild nodes.
pub const GRANDCHILD_NODES: usize = 3;

/// Named colors with their RGB codes, drawn from the latexcolor.com table
/// plus the standard named colors the built-in palettes reference.
static COLOR_TABLE: LazyLock<HashMap<&'static str, (u8, u8, u8)>> = LazyLock::new(|| {
    HashMap::from([
        ("white", (255, 255, 255)),
        ("black", (0, 0, 0)),
        ("gray", (128, 128, 128)),
        ("dimgray", (105, 105, 105)),
        ("red", (255, 0, 0)),
        ("darkred", (139, 0, 0)),
        ("green", (0, 255, 0)),
        ("green(html/cssgreen)", (0, 128, 0)),
        ("blue", (0, 0, 255)),
        ("cyan", (0, 255, 255)),
        ("magenta", (255, 0, 255)),
        ("yellow", (255, 255, 0)),
        ("orange", (255, 165, 0)),
        ("orange(colorwheel)", (255, 127, 0)),
        ("brown", (150, 75, 0)),
        ("violet", (143, 0, 255)),
        ("purple", (128, 0, 128)),
        ("teal", (0, 128, 128)),
        ("olive", (128, 128, 0)),
        ("byzantium", (112, 41, 99)),
        ("alizarin", (227, 38, 54)),
        ("frenchbeige", (166, 123, 91)),
    ])
});

/// Looks up a color name in the static table.
///
/// # Errors
///
/// Returns [`Error::UnknownColor`] if the name is not present.
pub fn lookup(name: &str) -> Result<ColorEntry, Error> {
    let (r, g, b) = COLOR_TABLE
        .get(name)
        .copied()
        .ok_or_else(|| Error::UnknownColor(name.to_string()))?;
    Ok(ColorEntry::rgb(name, r, g, b))
}

/// Default color for the root concept node and its transitions.
pub fn default_concept_color() -> ColorEntry {
    ColorEntry::rgb("dimgray", 105, 105, 105)
}

/// Default color for text inside the root concept node.
pub fn default_text_color() -> ColorEntry {
    ColorEntry::rgb("white", 255, 255, 255)
}

/// A built-in seven-color palette for the child nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuiltinPalette {
    /// The original Rey & Anselin (2007) colors.
    Traditional,

    /// The canonical colors adopted in February 2020.
    Canon2020,

    /// ColorBrewer2 qualitative scheme `Paired`, n=7.
    CbQualPairedN7,

    /// ColorBrewer2 qualitative scheme `Set1`, n=7.
    CbQualSet1N7,
}

impl BuiltinPalette {
    /// Returns the palette's child-node colors in angular order,
    /// counterclockwise starting from roughly eight o'clock.
    pub fn node_colors(self) -> Vec<ColorEntry> {
        match self {
            BuiltinPalette::Traditional => vec![
                ColorEntry::rgb("byzantium", 112, 41, 99),
                ColorEntry::rgb("alizarin", 227, 38, 54),
                ColorEntry::rgb("blue", 0, 0, 255),
                ColorEntry::rgb("green(html/cssgreen)", 0, 128, 0),
                ColorEntry::rgb("frenchbeige", 166, 123, 91),
                ColorEntry::rgb("darkred", 139, 0, 0),
                ColorEntry::rgb("orange(colorwheel)", 255, 127, 0),
            ],
            BuiltinPalette::Canon2020 => vec![
                ColorEntry::rgb("metallic", 0, 121, 140),
                ColorEntry::rgb("tc", 209, 73, 91),
                ColorEntry::rgb("yellow", 237, 174, 73),
                ColorEntry::rgb("shamrock", 102, 161, 130),
                ColorEntry::rgb("nvy", 46, 64, 87),
                ColorEntry::rgb("vio", 156, 100, 123),
                ColorEntry::rgb("orng", 239, 138, 23),
            ],
            BuiltinPalette::CbQualPairedN7 => vec![
                ColorEntry::rgb("light blue", 166, 206, 227),
                ColorEntry::rgb("dark blue", 31, 120, 180),
                ColorEntry::rgb("light green", 178, 223, 138),
                ColorEntry::rgb("dark green", 51, 160, 44),
                ColorEntry::rgb("pink", 251, 154, 153),
                ColorEntry::rgb("red", 227, 26, 28),
                ColorEntry::rgb("beige", 253, 191, 111),
            ],
            BuiltinPalette::CbQualSet1N7 => vec![
                ColorEntry::rgb("red", 228, 26, 28),
                ColorEntry::rgb("blue", 55, 126, 184),
                ColorEntry::rgb("green", 77, 175, 74),
                ColorEntry::rgb("purple", 152, 78, 163),
                ColorEntry::rgb("orange", 255, 127, 0),
                ColorEntry::rgb("yellow", 255, 255, 51),
                ColorEntry::rgb("brown", 166, 86, 40),
            ],
        }
    }
}

impl fmt::Display for BuiltinPalette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BuiltinPalette::Traditional => "traditional",
            BuiltinPalette::Canon2020 => "canon2020",
            BuiltinPalette::CbQualPairedN7 => "cb-qual-paired-n7",
            BuiltinPalette::CbQualSet1N7 => "cb-qual-set1-n7",
        };
        write!(f, "{name}")
    }
}

impl FromStr for BuiltinPalette {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "traditional" => Ok(BuiltinPalette::Traditional),
            "canon2020" => Ok(BuiltinPalette::Canon2020),
            "cb-qual-paired-n7" => Ok(BuiltinPalette::CbQualPairedN7),
            "cb-qual-set1-n7" => Ok(BuiltinPalette::CbQualSet1N7),
            other => Err(Error::UnknownPalette(other.to_string())),
        }
    }
}

/// Background selection for the rendered canvas.
///
/// `Transparent` suppresses the background directive entirely; the
/// serializer must not emit an empty fill for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Background {
    /// White canvas behind the diagram.
    Light,

    /// Black canvas behind the diagram.
    Dark,

    /// No canvas fill at all.
    #[default]
    #[serde(alias = "none")]
    Transparent,
}

impl Background {
    /// Resolves the selection to a concrete fill color, or `None` for
    /// a transparent canvas.
    pub fn fill(self) -> Option<ColorEntry> {
        match self {
            Background::Light => Some(ColorEntry::rgb("white", 255, 255, 255)),
            Background::Dark => Some(ColorEntry::rgb("black", 0, 0, 0)),
            Background::Transparent => None,
        }
    }
}

impl FromStr for Background {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Background::Light),
            "dark" => Ok(Background::Dark),
            "transparent" | "none" => Ok(Background::Transparent),
            other => Err(Error::UnknownBackground(other.to_string())),
        }
    }
}

/// Empty labels for every child node, the default for the full logo.
pub fn no_labels() -> Vec<String> {
    vec![String::new(); CHILD_NODES]
}

/// Greek lettering for the child nodes, including the spatial-weights W.
pub fn greek_labels() -> Vec<String> {
    [
        r"$\theta$",
        r"$\gamma$",
        r"$\tau$",
        r"$\lambda$",
        r"$\alpha$",
        r"$W$",
        r"$\rho$",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// A bullet in every child node.
pub fn bullet_labels() -> Vec<String> {
    vec![String::from(r"$\bullet$"); CHILD_NODES]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_color() {
        let entry = lookup("byzantium").expect("byzantium is in the table");
        assert_eq!(entry.code().to_string(), "112, 41, 99");
    }

    #[test]
    fn lookup_unknown_color_fails() {
        let err = lookup("heliotrope").unwrap_err();
        assert_eq!(err, Error::UnknownColor("heliotrope".to_string()));
    }

    #[test]
    fn every_builtin_palette_has_the_fixed_child_count() {
        for palette in [
            BuiltinPalette::Traditional,
            BuiltinPalette::Canon2020,
            BuiltinPalette::CbQualPairedN7,
            BuiltinPalette::CbQualSet1N7,
        ] {
            assert_eq!(palette.node_colors().len(), CHILD_NODES, "{palette}");
        }
    }

    #[test]
    fn traditional_palette_colors_are_all_in_the_table() {
        for entry in BuiltinPalette::Traditional.node_colors() {
            assert_eq!(lookup(entry.name()), Ok(entry));
        }
    }

    #[test]
    fn palette_identifiers_round_trip() {
        for name in [
            "traditional",
            "canon2020",
            "cb-qual-paired-n7",
            "cb-qual-set1-n7",
        ] {
            let palette: BuiltinPalette = name.parse().expect("known identifier");
            assert_eq!(palette.to_string(), name);
        }
    }

    #[test]
    fn background_transparent_has_no_fill() {
        assert_eq!(Background::Transparent.fill(), None);
        assert_eq!("none".parse::<Background>(), Ok(Background::Transparent));
    }

    #[test]
    fn background_light_and_dark_resolve() {
        assert_eq!(
            Background::Light.fill().map(|c| c.name().to_string()),
            Some("white".to_string())
        );
        assert_eq!(
            Background::Dark.fill().map(|c| c.name().to_string()),
            Some("black".to_string())
        );
    }

    #[test]
    fn label_sets_match_the_child_count() {
        assert_eq!(no_labels().len(), CHILD_NODES);
        assert_eq!(greek_labels().len(), CHILD_NODES);
        assert_eq!(bullet_labels().len(), CHILD_NODES);
    }
}
