use crate::graph::domain::SeverityTier;
use serde::Serialize;

/// Background shared by every node
const NODE_BACKGROUND: &str = "#0f1421";

/// Foreground of package nodes
const NEUTRAL_ACCENT: &str = "#fff";

/// Colour of italic label lines (translucent white)
const ITALIC_COLOR: &str = "#fff8";

/// Widest a CVE node may grow before its label wraps
const CVE_MAX_WIDTH: u32 = 400;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FontEmphasis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

/// vis-network `font` option
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FontStyle {
    pub multi: String,
    pub color: String,
    pub size: u32,
    pub face: String,
    pub align: String,
    pub bold: FontEmphasis,
    pub ital: FontEmphasis,
}

impl FontStyle {
    /// Left-aligned HTML label font drawn in `accent`
    pub fn accented(accent: &str) -> Self {
        Self {
            multi: "html".to_string(),
            color: accent.to_string(),
            size: 14,
            face: "arial".to_string(),
            align: "left".to_string(),
            bold: FontEmphasis {
                color: Some(accent.to_string()),
                size: Some(18),
            },
            ital: FontEmphasis {
                color: Some(ITALIC_COLOR.to_string()),
                size: None,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighlightColor {
    pub border: String,
    pub background: String,
}

/// vis-network `color` option
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorStyle {
    pub border: String,
    pub background: String,
    pub highlight: HighlightColor,
}

impl ColorStyle {
    /// Dark box bordered in `accent`, unchanged when highlighted
    pub fn bordered(accent: &str) -> Self {
        Self {
            border: accent.to_string(),
            background: NODE_BACKGROUND.to_string(),
            highlight: HighlightColor {
                border: accent.to_string(),
                background: NODE_BACKGROUND.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidthConstraint {
    pub maximum: u32,
}

/// Resolved per-node style, serialized flat into the vis-network node object
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStyle {
    pub shape: String,
    pub vadjust: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<FontStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorStyle>,
    pub border_width: u32,
    pub margin: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width_constraint: Option<WidthConstraint>,
    pub tooltip_delay: u32,
}

/// Partial style laid over a base [`NodeStyle`]; `None` keeps the base value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleOverlay {
    pub font: Option<FontStyle>,
    pub color: Option<ColorStyle>,
}

impl StyleOverlay {
    /// Font and colour of a CVE node for the given severity tier
    pub fn for_tier(tier: SeverityTier) -> Self {
        let accent = tier_accent(tier);
        Self {
            font: Some(FontStyle::accented(accent)),
            color: Some(ColorStyle::bordered(accent)),
        }
    }
}

impl NodeStyle {
    /// Neutral dark box used for packages and repositories
    pub fn package() -> Self {
        Self {
            shape: "box".to_string(),
            vadjust: 2,
            font: Some(FontStyle::accented(NEUTRAL_ACCENT)),
            color: Some(ColorStyle::bordered(NEUTRAL_ACCENT)),
            border_width: 2,
            margin: 16,
            width_constraint: None,
            tooltip_delay: 0,
        }
    }

    /// Layout shared by all CVE nodes; colours come from the tier overlay
    pub fn cve_base() -> Self {
        Self {
            shape: "box".to_string(),
            vadjust: 2,
            font: None,
            color: None,
            border_width: 2,
            margin: 16,
            width_constraint: Some(WidthConstraint {
                maximum: CVE_MAX_WIDTH,
            }),
            tooltip_delay: 0,
        }
    }

    /// Returns a new style with the overlay's fields replacing the base ones
    pub fn merged(&self, overlay: &StyleOverlay) -> Self {
        Self {
            font: overlay.font.clone().or_else(|| self.font.clone()),
            color: overlay.color.clone().or_else(|| self.color.clone()),
            ..self.clone()
        }
    }

    /// Complete style of a CVE node in the given tier
    pub fn for_cve(tier: SeverityTier) -> Self {
        Self::cve_base().merged(&StyleOverlay::for_tier(tier))
    }
}

/// Accent colour of a severity tier
pub fn tier_accent(tier: SeverityTier) -> &'static str {
    match tier {
        SeverityTier::Low => "#fe2",
        SeverityTier::High => "#f92",
        SeverityTier::Critical => "#f42",
    }
}
