use anyhow::Result;

use crate::state::AppContext;

pub async fn run(context: &AppContext, term: &str) -> Result<()> {
    match context.resolver.resolve(term).await {
        Some(resolution) => {
            println!("{} [{}]", resolution.found_for, resolution.reading);
            println!("{}", resolution.definition);
            println!("source: {}", resolution.source);
        }
        None => println!("No definition found for '{}'", term),
    }

    Ok(())
}
