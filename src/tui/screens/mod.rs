//! One screen per round phase.

mod guessing;
mod picker;
mod round_over;
mod setup;
mod word_entry;

pub use guessing::GuessScreen;
pub use picker::PickerScreen;
pub use round_over::RoundOverScreen;
pub use setup::{SetupField, SetupScreen};
pub use word_entry::WordEntryScreen;
