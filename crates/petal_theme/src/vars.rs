//! Style-variable resolution
//!
//! Components map their semantic options (size, color, variant) to a flat
//! set of named presentation variables. A host stylesheet consumes the
//! variables verbatim:
//!
//! ```ignore
//! let mut vars = StyleVars::new();
//! vars.set("--badge-height", VarValue::Px(20.0));
//! vars.set("--badge-bg", VarValue::Color(theme.color(ColorToken::Primary)));
//! ```
//!
//! Insertion order is preserved, so the host receives variables in
//! declaration order.

use crate::state::ThemeState;
use crate::tokens::ColorToken;
use indexmap::IndexMap;
use petal_core::Color;
use std::fmt;
use std::sync::Arc;

/// A single presentation variable value
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VarValue {
    /// Pixel length
    Px(f32),
    /// Resolved color
    Color(Color),
    /// Literal keyword, e.g. `"none"`
    Str(&'static str),
}

impl fmt::Display for VarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VarValue::Px(v) => write!(f, "{v}px"),
            VarValue::Color(c) => {
                let to_byte = |ch: f32| (ch.clamp(0.0, 1.0) * 255.0).round() as u8;
                write!(
                    f,
                    "#{:02x}{:02x}{:02x}{:02x}",
                    to_byte(c.r),
                    to_byte(c.g),
                    to_byte(c.b),
                    to_byte(c.a)
                )
            }
            VarValue::Str(s) => f.write_str(s),
        }
    }
}

/// Ordered set of presentation variables
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleVars {
    vars: IndexMap<&'static str, VarValue>,
}

impl StyleVars {
    /// Create an empty variable set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable, replacing any previous value under the same name
    ///
    /// A replaced variable keeps its original position in the declaration
    /// order.
    pub fn set(&mut self, name: &'static str, value: VarValue) -> &mut Self {
        self.vars.insert(name, value);
        self
    }

    /// Set a variable only when a value is present
    pub fn set_optional(&mut self, name: &'static str, value: Option<VarValue>) -> &mut Self {
        if let Some(value) = value {
            self.vars.insert(name, value);
        }
        self
    }

    /// Look up a variable by name
    pub fn get(&self, name: &str) -> Option<&VarValue> {
        self.vars.get(name)
    }

    /// Iterate variables in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &VarValue)> {
        self.vars.iter().map(|(name, value)| (*name, value))
    }

    /// Number of variables
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// Post-pass hook over a component's built-in variables
///
/// Components accept a resolver at construction instead of reading a global
/// style registry; the default resolver is the identity.
pub type VarsResolver = Arc<dyn Fn(&ThemeState, &StyleVars) -> StyleVars + Send + Sync>;

/// Color rendering styles shared by badge-like components
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorVariant {
    #[default]
    Filled,
    Light,
    Outline,
    Transparent,
    White,
    Default,
}

/// Fully resolved colors for one variant
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VariantColors {
    pub background: Color,
    pub hover: Color,
    pub foreground: Color,
    /// `None` renders without a border
    pub border: Option<Color>,
}

/// Foreground luminance threshold for `auto_contrast`
const CONTRAST_THRESHOLD: f32 = 0.45;

/// Resolve the color set for a variant
///
/// `color` overrides the theme's primary color. `auto_contrast` switches the
/// filled foreground to near-black when the background is light enough that
/// white text would be unreadable. Total over its inputs.
pub fn resolve_variant_colors(
    theme: &ThemeState,
    color: Option<Color>,
    variant: ColorVariant,
    auto_contrast: bool,
) -> VariantColors {
    let base = color.unwrap_or_else(|| theme.color(ColorToken::Primary));

    match variant {
        ColorVariant::Filled => {
            let foreground = if auto_contrast && base.luminance() > CONTRAST_THRESHOLD {
                Color::from_hex(0x212529)
            } else {
                Color::WHITE
            };
            VariantColors {
                background: base,
                hover: base.darken(0.08),
                foreground,
                border: None,
            }
        }
        ColorVariant::Light => VariantColors {
            background: base.with_alpha(0.12),
            hover: base.with_alpha(0.18),
            foreground: base,
            border: None,
        },
        ColorVariant::Outline => VariantColors {
            background: Color::TRANSPARENT,
            hover: base.with_alpha(0.05),
            foreground: base,
            border: Some(base),
        },
        ColorVariant::Transparent => VariantColors {
            background: Color::TRANSPARENT,
            hover: Color::TRANSPARENT,
            foreground: base,
            border: None,
        },
        ColorVariant::White => VariantColors {
            background: Color::WHITE,
            hover: Color::WHITE,
            foreground: base,
            border: None,
        },
        ColorVariant::Default => VariantColors {
            background: theme.color(ColorToken::Surface),
            hover: theme.color(ColorToken::SurfaceElevated),
            foreground: theme.color(ColorToken::TextPrimary),
            border: Some(theme.color(ColorToken::Border)),
        },
    }
}
