//! Core logic for saaty: the single-choice menu state machine, pairwise
//! elicitation of a judgment matrix, and membership-degree derivation.
//!
//! Nothing here touches the terminal. Rendering and key reading live in
//! `saaty-tui`, which implements [`MenuNavigator`] on top of [`MenuState`].

mod elicit;
mod input;
mod membership;
mod menu;

pub use elicit::{direction_options, direction_title, elicit, scale_title};
pub use input::parse_elements;
pub use membership::compute_membership;
pub use menu::{MenuKey, MenuNavigator, MenuState, MenuStep, ScriptedNavigator};
