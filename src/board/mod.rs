//! nRF52840 implementations of the collaborator traits.

pub mod audio;
pub mod buttons;
pub mod display;
pub mod system;
