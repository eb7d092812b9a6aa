use anyhow::Result;

use crate::state::AppContext;

pub async fn run(context: &AppContext, index: usize, sentence: String) -> Result<()> {
    context.deck.add_example(index, sentence).await?;
    println!("Example saved");

    Ok(())
}
