//! Reusable UI components

pub mod caption;
pub mod talk_button;

pub use caption::Caption;
pub use talk_button::TalkButton;
