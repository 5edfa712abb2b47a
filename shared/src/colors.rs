use std::fmt;

/// Division line color used when a conference has no entry.
pub const FALLBACK_LINE_COLOR: &str = "black";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConferenceStyle {
    pub code: &'static str,
    pub label: &'static str,
    /// CSS color for division lines and the legend.
    pub color: &'static str,
}

pub const CONFERENCES: [ConferenceStyle; 2] = [
    ConferenceStyle {
        code: "AFC",
        label: "American Conference",
        color: "red",
    },
    ConferenceStyle {
        code: "NFC",
        label: "National Conference",
        color: "blue",
    },
];

pub fn conference_color(conference: &str) -> Option<&'static str> {
    CONFERENCES
        .iter()
        .find(|style| style.code == conference)
        .map(|style| style.color)
}

pub fn line_color(conference: &str) -> &'static str {
    conference_color(conference).unwrap_or(FALLBACK_LINE_COLOR)
}

/// RGBA color with alpha in `0..=1`, formatted as CSS `rgba(...)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}
