//! Single-choice menu: explicit state, pure transitions, navigator seam.

use std::collections::VecDeque;

use saaty_types::SaatyError;

/// A key-down event as the menu understands it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    Previous,
    Next,
    Confirm,
    /// Any other key-down; leaves the state unchanged.
    Other,
}

/// Title, options and highlighted index for one open menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuState<'a> {
    title: &'a str,
    options: &'a [&'a str],
    highlighted: usize,
}

/// Result of feeding one key to a [`MenuState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuStep<'a> {
    Continue(MenuState<'a>),
    Confirmed(usize),
}

impl<'a> MenuState<'a> {
    /// Opens a menu with the first option highlighted.
    pub fn new(title: &'a str, options: &'a [&'a str]) -> Result<Self, SaatyError> {
        if options.is_empty() {
            return Err(SaatyError::invalid_argument(
                "menu requires at least one option",
            ));
        }
        Ok(Self {
            title,
            options,
            highlighted: 0,
        })
    }

    #[must_use]
    pub fn title(&self) -> &'a str {
        self.title
    }

    #[must_use]
    pub fn options(&self) -> &'a [&'a str] {
        self.options
    }

    #[must_use]
    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    #[must_use]
    pub fn with_highlighted(self, index: usize) -> Self {
        Self {
            highlighted: index % self.options.len(),
            ..self
        }
    }

    /// Applies one key. Movement wraps at both ends.
    #[must_use]
    pub fn handle(self, key: MenuKey) -> MenuStep<'a> {
        let len = self.options.len();
        match key {
            MenuKey::Previous => MenuStep::Continue(Self {
                highlighted: (self.highlighted + len - 1) % len,
                ..self
            }),
            MenuKey::Next => MenuStep::Continue(Self {
                highlighted: (self.highlighted + 1) % len,
                ..self
            }),
            MenuKey::Confirm => MenuStep::Confirmed(self.highlighted),
            MenuKey::Other => MenuStep::Continue(self),
        }
    }
}

/// Blocking single-choice prompt.
///
/// Returns an index in `[0, options.len())`. Implementations must reject an
/// empty `options` slice with [`SaatyError::InvalidArgument`].
pub trait MenuNavigator {
    fn select_option(&mut self, options: &[&str], title: &str) -> Result<usize, SaatyError>;
}

impl<N: MenuNavigator + ?Sized> MenuNavigator for &mut N {
    fn select_option(&mut self, options: &[&str], title: &str) -> Result<usize, SaatyError> {
        (**self).select_option(options, title)
    }
}

/// Navigator that answers from a fixed queue of indices.
///
/// Every prompt it receives is kept as `(title, options)` for inspection.
#[derive(Debug, Default)]
pub struct ScriptedNavigator {
    answers: VecDeque<usize>,
    prompts: Vec<(String, Vec<String>)>,
}

impl ScriptedNavigator {
    pub fn new(answers: impl IntoIterator<Item = usize>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            prompts: Vec::new(),
        }
    }

    #[must_use]
    pub fn prompts(&self) -> &[(String, Vec<String>)] {
        &self.prompts
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl MenuNavigator for ScriptedNavigator {
    fn select_option(&mut self, options: &[&str], title: &str) -> Result<usize, SaatyError> {
        MenuState::new(title, options)?;
        self.prompts.push((
            title.to_owned(),
            options.iter().map(|option| (*option).to_owned()).collect(),
        ));

        let answer = self
            .answers
            .pop_front()
            .ok_or_else(|| SaatyError::input_unavailable("scripted answers exhausted"))?;
        if answer >= options.len() {
            return Err(SaatyError::invalid_argument(format!(
                "scripted answer {answer} out of range for {} options",
                options.len()
            )));
        }
        Ok(answer)
    }
}
