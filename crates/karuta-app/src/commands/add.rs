use anyhow::Result;
use futures_util::future::join_all;
use karuta_cards::Flashcard;
use karuta_core::normalize::normalize;

use crate::state::AppContext;

pub async fn run(context: &AppContext, terms: Vec<String>) -> Result<()> {
    let terms: Vec<String> = terms
        .iter()
        .map(|raw| normalize(raw))
        .filter(|term| {
            if term.is_empty() {
                tracing::warn!("Skipping empty term");
                false
            } else {
                true
            }
        })
        .collect();

    // duplicates in one batch collapse into a single lookup
    let resolutions = join_all(terms.iter().map(|term| context.resolver.resolve(term))).await;

    // the deck is one read-modify-write document, so writes stay sequential
    for (term, resolution) in terms.into_iter().zip(resolutions) {
        let card = Flashcard::resolved(term, resolution);
        println!("{}: {}", card.term, card.definition);
        context.deck.add(card).await?;
    }

    Ok(())
}
