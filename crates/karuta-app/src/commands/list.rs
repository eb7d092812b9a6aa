use anyhow::Result;

use crate::state::AppContext;

pub async fn run(context: &AppContext) -> Result<()> {
    let cards = context.deck.all().await?;
    if cards.is_empty() {
        println!("No flashcards saved yet");
        return Ok(());
    }

    for (index, card) in cards.iter().enumerate() {
        let source = card
            .source
            .map(|source| source.to_string())
            .unwrap_or_else(|| "none".to_string());

        println!(
            "{:3}. {} [{}] {} ({})",
            index, card.term, card.reading, card.definition, source
        );
        for example in &card.examples {
            println!("     e.g. {}", example);
        }
    }

    Ok(())
}
