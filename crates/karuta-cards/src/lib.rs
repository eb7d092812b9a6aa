mod card;
mod deck;

pub use card::{Flashcard, NO_DEFINITION};
pub use deck::{DECK_KEY, Deck};
