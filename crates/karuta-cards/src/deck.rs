use std::sync::Arc;

use anyhow::{Context, Result};
use karuta_store::{KeyValueStore, read_key, write_key};

use crate::card::Flashcard;

/// Store key holding the saved cards
pub const DECK_KEY: &str = "flashcards";

/// Persistent flashcard collection, whole-array read-modify-write
#[derive(Clone)]
pub struct Deck {
    store: Arc<dyn KeyValueStore>,
}

impl Deck {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn all(&self) -> Result<Vec<Flashcard>> {
        let cards = read_key(self.store.as_ref(), DECK_KEY)
            .await
            .context("Failed to read the flashcard deck")?;
        Ok(cards.unwrap_or_default())
    }

    /// Append a card and persist the deck
    pub async fn add(&self, card: Flashcard) -> Result<()> {
        let mut cards = self.all().await?;
        cards.push(card);
        self.save(&cards).await?;
        tracing::info!("Saved flashcard ({} in deck)", cards.len());
        Ok(())
    }

    /// Remove and return the card at `index`
    pub async fn remove(&self, index: usize) -> Result<Flashcard> {
        let mut cards = self.all().await?;
        if index >= cards.len() {
            anyhow::bail!("No card at index {} (deck holds {})", index, cards.len());
        }

        let removed = cards.remove(index);
        self.save(&cards).await?;
        Ok(removed)
    }

    /// Attach an example sentence to the card at `index`
    pub async fn add_example(&self, index: usize, sentence: String) -> Result<()> {
        let mut cards = self.all().await?;
        let card = cards
            .get_mut(index)
            .with_context(|| format!("No card at index {}", index))?;

        card.examples.push(sentence);
        self.save(&cards).await
    }

    async fn save(&self, cards: &[Flashcard]) -> Result<()> {
        write_key(self.store.as_ref(), DECK_KEY, cards)
            .await
            .context("Failed to persist the flashcard deck")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use karuta_store::MemoryStore;

    fn card(term: &str) -> Flashcard {
        Flashcard {
            term: term.to_string(),
            reading: String::new(),
            definition: "def".to_string(),
            source: None,
            found_for: None,
            examples: vec![],
        }
    }

    #[tokio::test]
    async fn add_then_list() {
        let deck = Deck::new(Arc::new(MemoryStore::new()));
        deck.add(card("猫")).await.unwrap();
        deck.add(card("犬")).await.unwrap();

        let cards = deck.all().await.unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].term, "猫");
        assert_eq!(cards[1].term, "犬");
    }

    #[tokio::test]
    async fn remove_returns_the_card() {
        let deck = Deck::new(Arc::new(MemoryStore::new()));
        deck.add(card("猫")).await.unwrap();
        deck.add(card("犬")).await.unwrap();

        let removed = deck.remove(0).await.unwrap();
        assert_eq!(removed.term, "猫");

        let cards = deck.all().await.unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].term, "犬");
    }

    #[tokio::test]
    async fn remove_out_of_range_is_an_error() {
        let deck = Deck::new(Arc::new(MemoryStore::new()));
        deck.add(card("猫")).await.unwrap();

        assert!(deck.remove(5).await.is_err());
        assert_eq!(deck.all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn examples_attach_to_one_card() {
        let deck = Deck::new(Arc::new(MemoryStore::new()));
        deck.add(card("猫")).await.unwrap();
        deck.add(card("犬")).await.unwrap();

        deck.add_example(0, "猫がいる。".to_string()).await.unwrap();

        let cards = deck.all().await.unwrap();
        assert_eq!(cards[0].examples, vec!["猫がいる。"]);
        assert!(cards[1].examples.is_empty());
    }

    #[tokio::test]
    async fn example_for_missing_card_is_an_error() {
        let deck = Deck::new(Arc::new(MemoryStore::new()));

        assert!(deck.add_example(0, "x".to_string()).await.is_err());
    }
}
