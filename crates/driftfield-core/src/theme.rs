use crate::constants::{DARK_STROKE_RGB, LIGHT_STROKE_RGB};
use std::fmt;

/// Page color scheme the field is drawn against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Resolve the effective theme from the page's explicit `data-theme`
    /// attribute and the OS-level preference.
    ///
    /// An explicit `"dark"` always wins; otherwise the OS preference applies
    /// unless the page pinned `"light"`.
    pub fn resolve(attribute: Option<&str>, prefers_dark: bool) -> Self {
        match attribute {
            Some("dark") => Theme::Dark,
            Some("light") => Theme::Light,
            _ if prefers_dark => Theme::Dark,
            _ => Theme::Light,
        }
    }

    #[inline]
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    #[inline]
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    #[inline]
    pub fn stroke_rgb(self) -> [u8; 3] {
        match self {
            Theme::Dark => DARK_STROKE_RGB,
            Theme::Light => LIGHT_STROKE_RGB,
        }
    }

    /// Stroke color for this theme at the given alpha.
    #[inline]
    pub fn stroke(self, alpha: f32) -> Rgba {
        Rgba {
            rgb: self.stroke_rgb(),
            alpha,
        }
    }
}

/// Straight-alpha stroke color; `Display` renders a CSS `rgba(...)` string.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: [u8; 3],
    pub alpha: f32,
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.rgb;
        write!(f, "rgba({}, {}, {}, {})", r, g, b, self.alpha)
    }
}
