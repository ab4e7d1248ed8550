//! Colour theme for the prompal picker.
//!
//! Themes are defined as TOML files. Both built-in themes are embedded in the
//! binary via [`include_str!`] so the application works without any files on
//! disk. [`Theme::by_name`] resolves the `[ui] theme` config value.
//!
//! # Colour assignment for tags
//!
//! Tag names are hashed to a stable index into the palette so the same tag
//! always gets the same colour, regardless of which prompt shows it first.

use config::{Config, File, FileFormat};
use prompal_core::search::scorer::MatchType;
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

const DEFAULT_THEME_SRC: &str = include_str!("themes/default.toml");
const GRUVBOX_DARK_THEME_SRC: &str = include_str!("themes/gruvbox_dark.toml");

// ---------------------------------------------------------------------------
// Raw (serde) types: mirror the TOML structure
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawStyle {
    fg: Option<String>,
    bg: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    dim: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    underlined: bool,
}

impl RawStyle {
    fn into_style(self) -> Style {
        let mut style = Style::default();
        if let Some(c) = self.fg.as_deref().and_then(parse_color) {
            style = style.fg(c);
        }
        if let Some(c) = self.bg.as_deref().and_then(parse_color) {
            style = style.bg(c);
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.dim {
            style = style.add_modifier(Modifier::DIM);
        }
        if self.italic {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if self.underlined {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        style
    }
}

#[derive(Debug, Deserialize)]
struct RawBorders {
    focused: RawStyle,
    unfocused: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawSearch {
    highlight: RawStyle,
    ghost: RawStyle,
    selected: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawMatches {
    quick_access: RawStyle,
    tag: RawStyle,
    title: RawStyle,
    content: RawStyle,
    mixed: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawTags {
    palette: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawTheme {
    borders: RawBorders,
    search: RawSearch,
    matches: RawMatches,
    tags: RawTags,
}

// ---------------------------------------------------------------------------
// Public Theme type
// ---------------------------------------------------------------------------

/// Application colour theme. All styles are pre-resolved ratatui [`Style`]
/// values.
#[derive(Debug, Clone)]
pub struct Theme {
    pub border_focused: Style,
    pub border_unfocused: Style,

    /// Matched span inside a suggestion.
    pub search_highlight: Style,
    /// Inline completion tail after the cursor.
    pub ghost: Style,
    /// Highlighted row in the result and suggestion lists.
    pub selected: Style,

    pub match_quick_access: Style,
    pub match_tag: Style,
    pub match_title: Style,
    pub match_content: Style,
    pub match_mixed: Style,

    tag_palette: Vec<Color>,
}

impl Theme {
    /// Load and parse the embedded default theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed, which the unit tests rule out.
    pub fn load_default() -> Self {
        Self::from_toml_str(DEFAULT_THEME_SRC).expect("embedded default theme must be valid TOML")
    }

    /// Load and parse the embedded Gruvbox Dark theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed.
    pub fn load_gruvbox_dark() -> Self {
        Self::from_toml_str(GRUVBOX_DARK_THEME_SRC)
            .expect("embedded gruvbox dark theme must be valid TOML")
    }

    /// Resolve a theme name from config. Unknown names fall back to the default.
    pub fn by_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "gruvbox" | "gruvbox_dark" | "gruvbox-dark" => Self::load_gruvbox_dark(),
            "default" => Self::load_default(),
            other => {
                tracing::warn!(theme = other, "unknown theme, using default");
                Self::load_default()
            }
        }
    }

    /// Parse a theme from a TOML string. Unknown keys are ignored.
    pub fn from_toml_str(src: &str) -> anyhow::Result<Self> {
        let raw: RawTheme = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            border_focused: raw.borders.focused.into_style(),
            border_unfocused: raw.borders.unfocused.into_style(),
            search_highlight: raw.search.highlight.into_style(),
            ghost: raw.search.ghost.into_style(),
            selected: raw.search.selected.into_style(),
            match_quick_access: raw.matches.quick_access.into_style(),
            match_tag: raw.matches.tag.into_style(),
            match_title: raw.matches.title.into_style(),
            match_content: raw.matches.content.into_style(),
            match_mixed: raw.matches.mixed.into_style(),
            tag_palette: raw.tags.palette.iter().filter_map(|s| parse_color(s)).collect(),
        })
    }

    /// Style for the match-type badge of a result row.
    pub fn match_style(&self, match_type: MatchType) -> Style {
        match match_type {
            MatchType::QuickAccess => self.match_quick_access,
            MatchType::Tag => self.match_tag,
            MatchType::Title => self.match_title,
            MatchType::Content => self.match_content,
            MatchType::Mixed => self.match_mixed,
        }
    }

    /// Stable colour for a tag name.
    pub fn tag_style(&self, tag: &str) -> Style {
        if self.tag_palette.is_empty() {
            return Style::default();
        }
        let idx = stable_hash(tag) % self.tag_palette.len();
        Style::default().fg(self.tag_palette[idx])
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// djb2-style hash, stable across Rust versions and process restarts.
fn stable_hash(s: &str) -> usize {
    s.bytes()
        .fold(5381usize, |acc, b| acc.wrapping_mul(31).wrapping_add(b as usize))
}

/// Parse a colour name into a ratatui [`Color`].
///
/// Accepts named terminal colours (case-insensitive), `#rrggbb` and
/// `indexed:N`.
fn parse_color(s: &str) -> Option<Color> {
    match s.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "dark_gray" | "darkgray" | "dark_grey" | "darkgrey" => Some(Color::DarkGray),
        "light_red" => Some(Color::LightRed),
        "light_green" => Some(Color::LightGreen),
        "light_yellow" => Some(Color::LightYellow),
        "light_blue" => Some(Color::LightBlue),
        "light_magenta" => Some(Color::LightMagenta),
        "light_cyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        s if s.starts_with('#') && s.len() == 7 => {
            let r = u8::from_str_radix(&s[1..3], 16).ok()?;
            let g = u8::from_str_radix(&s[3..5], 16).ok()?;
            let b = u8::from_str_radix(&s[5..7], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        s if s.starts_with("indexed:") => {
            let n: u8 = s["indexed:".len()..].parse().ok()?;
            Some(Color::Indexed(n))
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_themes_load() {
        for theme in [Theme::load_default(), Theme::load_gruvbox_dark()] {
            assert_ne!(theme.border_focused, Style::default());
            assert_ne!(theme.search_highlight, Style::default());
            assert_ne!(theme.ghost, Style::default());
            assert_ne!(theme.match_style(MatchType::Mixed), Style::default());
            assert!(!theme.tag_palette.is_empty());
        }
    }

    #[test]
    fn unknown_theme_name_falls_back() {
        let theme = Theme::by_name("solarized");
        assert_eq!(theme.ghost, Theme::load_default().ghost);
        assert_eq!(
            Theme::by_name("Gruvbox-Dark").ghost,
            Theme::load_gruvbox_dark().ghost
        );
    }

    #[test]
    fn tag_style_is_stable() {
        let theme = Theme::load_default();
        assert_eq!(theme.tag_style("review"), theme.tag_style("review"));
        let styles: Vec<Style> = ["a", "bb", "ccc", "review", "sql", "タグ"]
            .iter()
            .map(|t| theme.tag_style(t))
            .collect();
        assert!(
            styles.iter().any(|s| *s != styles[0]),
            "all tags mapped to the same colour"
        );
    }

    #[test]
    fn parse_colors() {
        assert_eq!(parse_color("#ff0080"), Some(Color::Rgb(255, 0, 128)));
        assert_eq!(parse_color("indexed:42"), Some(Color::Indexed(42)));
        assert_eq!(parse_color("Dark_Gray"), Some(Color::DarkGray));
        assert_eq!(parse_color("chartreuse"), None);
    }
}
