//! User interface and presentation
//!
//! This module contains presenters that handle formatting and displaying
//! fleet information to the player, separating presentation from business logic.

pub mod presenters;
