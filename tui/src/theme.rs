//! Colors and glyphs for the menu.
//!
//! The standard palette keeps the classic green highlight. With color
//! disabled every slot is `Color::Reset` and no modifiers are applied, so the
//! selection glyph is the only marker.

use ratatui::style::{Color, Modifier, Style};

use saaty_types::UiOptions;

/// Resolved theme palette used by the menu renderer.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub title: Color,
    pub text: Color,
    pub highlight: Color,
    pub hint_key: Color,
    pub hint_text: Color,
    pub emphasis: Modifier,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            title: Color::Reset,
            text: Color::Reset,
            highlight: Color::Green,
            hint_key: Color::Cyan,
            hint_text: Color::DarkGray,
            emphasis: Modifier::BOLD,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            title: Color::White,
            text: Color::White,
            highlight: Color::LightGreen,
            hint_key: Color::Yellow,
            hint_text: Color::Gray,
            emphasis: Modifier::BOLD,
        }
    }

    #[must_use]
    pub fn plain() -> Self {
        Self {
            title: Color::Reset,
            text: Color::Reset,
            highlight: Color::Reset,
            hint_key: Color::Reset,
            hint_text: Color::Reset,
            emphasis: Modifier::empty(),
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if !options.color {
        Palette::plain()
    } else if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for the selection marker and key hints.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub selected: &'static str,
    pub unselected: &'static str,
    pub arrows: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            selected: ">",
            unselected: " ",
            arrows: "Up/Down",
        }
    } else {
        Glyphs {
            selected: "▸",
            unselected: " ",
            arrows: "↑↓",
        }
    }
}

/// Pre-defined styles for menu elements.
pub mod styles {
    use super::{Palette, Style};

    #[must_use]
    pub fn title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.title)
            .add_modifier(palette.emphasis)
    }

    #[must_use]
    pub fn option(palette: &Palette) -> Style {
        Style::default().fg(palette.text)
    }

    #[must_use]
    pub fn selected_option(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.highlight)
            .add_modifier(palette.emphasis)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.hint_key)
            .add_modifier(palette.emphasis)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.hint_text)
    }
}

#[cfg(test)]
mod tests {
    use super::{glyphs, palette};
    use ratatui::style::{Color, Modifier};
    use saaty_types::UiOptions;

    #[test]
    fn standard_highlight_is_green() {
        assert_eq!(palette(UiOptions::default()).highlight, Color::Green);
    }

    #[test]
    fn no_color_wins_over_high_contrast() {
        let options = UiOptions {
            high_contrast: true,
            color: false,
            ..UiOptions::default()
        };
        let p = palette(options);
        assert_eq!(p.highlight, Color::Reset);
        assert_eq!(p.emphasis, Modifier::empty());
    }

    #[test]
    fn ascii_glyphs() {
        let options = UiOptions {
            ascii_only: true,
            ..UiOptions::default()
        };
        let g = glyphs(options);
        assert_eq!(g.selected, ">");
        assert!(g.arrows.is_ascii());
    }
}
