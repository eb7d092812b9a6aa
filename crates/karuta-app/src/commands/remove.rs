use anyhow::Result;

use crate::state::AppContext;

pub async fn run(context: &AppContext, index: usize) -> Result<()> {
    let removed = context.deck.remove(index).await?;
    println!("Removed {} ({})", removed.term, removed.definition);

    Ok(())
}
