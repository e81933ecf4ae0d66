//! Terminal implementation of the single-choice menu.

use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};
use tracing::{debug, warn};

use saaty_core::{MenuNavigator, MenuState, MenuStep};
use saaty_types::{SaatyError, UiOptions};

use crate::keys::{KeyAction, KeySource, classify};
use crate::theme::{Glyphs, Palette, glyphs, palette, styles};

/// Draws the title, one line per option, and a key hint footer.
///
/// When the menu is taller than the frame, it scrolls so the highlighted
/// option stays fully visible.
pub fn draw_menu(frame: &mut Frame, state: &MenuState<'_>, palette: &Palette, glyphs: &Glyphs) {
    let mut lines: Vec<Line> = Vec::with_capacity(state.options().len() + 3);
    lines.push(Line::from(Span::styled(
        state.title().to_string(),
        styles::title(palette),
    )));

    for (i, option) in state.options().iter().enumerate() {
        let line = if i == state.highlighted() {
            Span::styled(
                format!("{} {option}", glyphs.selected),
                styles::selected_option(palette),
            )
        } else {
            Span::styled(
                format!("{} {option}", glyphs.unselected),
                styles::option(palette),
            )
        };
        lines.push(Line::from(line));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(glyphs.arrows, styles::key_highlight(palette)),
        Span::styled(" move  ", styles::key_hint(palette)),
        Span::styled("Enter", styles::key_highlight(palette)),
        Span::styled(" confirm", styles::key_hint(palette)),
    ]));

    let area = frame.area();
    let offset = scroll_offset(&lines, state.highlighted() + 1, area);
    let menu = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((offset, 0));
    frame.render_widget(menu, area);
}

fn wrapped_rows(lines: &[Line], width: u16) -> usize {
    Paragraph::new(lines.to_vec())
        .wrap(Wrap { trim: false })
        .line_count(width.max(1))
}

/// Smallest vertical scroll that puts the whole of `lines[target]` on screen.
fn scroll_offset(lines: &[Line], target: usize, area: Rect) -> u16 {
    let top = wrapped_rows(&lines[..target], area.width);
    let bottom = top + wrapped_rows(&lines[target..=target], area.width);
    let offset = bottom.saturating_sub(usize::from(area.height)).min(top);
    u16::try_from(offset).unwrap_or(u16::MAX)
}

fn render_error(err: impl std::fmt::Display) -> SaatyError {
    SaatyError::Render(err.to_string())
}

/// Menu navigator drawing onto a ratatui terminal and reading keys from `K`.
///
/// The screen is cleared when a menu opens and again after confirmation, so
/// no menu rendering survives a call.
pub struct TerminalNavigator<'t, B: Backend, K: KeySource> {
    terminal: &'t mut Terminal<B>,
    keys: K,
    palette: Palette,
    glyphs: Glyphs,
}

impl<'t, B: Backend, K: KeySource> TerminalNavigator<'t, B, K> {
    pub fn new(terminal: &'t mut Terminal<B>, keys: K, options: UiOptions) -> Self {
        Self {
            terminal,
            keys,
            palette: palette(options),
            glyphs: glyphs(options),
        }
    }

    pub fn into_keys(self) -> K {
        self.keys
    }

    fn clear(&mut self) -> Result<(), SaatyError> {
        self.terminal.clear().map_err(render_error)
    }

    fn render(&mut self, state: &MenuState<'_>) -> Result<(), SaatyError> {
        let palette = self.palette;
        let glyphs = self.glyphs;
        self.terminal
            .draw(|frame| draw_menu(frame, state, &palette, &glyphs))
            .map(|_| ())
            .map_err(render_error)
    }
}

impl<B: Backend, K: KeySource> MenuNavigator for TerminalNavigator<'_, B, K> {
    fn select_option(&mut self, options: &[&str], title: &str) -> Result<usize, SaatyError> {
        let mut state = MenuState::new(title, options)?;
        self.clear()?;
        self.render(&state)?;

        loop {
            let event = self.keys.next_event()?;
            match classify(&event) {
                KeyAction::Ignore => continue,
                KeyAction::Interrupt => {
                    if let Err(err) = self.clear() {
                        warn!(%err, "Failed to clear menu after interrupt");
                    }
                    return Err(SaatyError::Interrupted);
                }
                KeyAction::Redraw => {}
                KeyAction::Menu(key) => match state.handle(key) {
                    MenuStep::Continue(next) => state = next,
                    MenuStep::Confirmed(index) => {
                        self.clear()?;
                        debug!(title, index, "Menu option confirmed");
                        return Ok(index);
                    }
                },
            }
            self.render(&state)?;
        }
    }
}
