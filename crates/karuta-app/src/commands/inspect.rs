use anyhow::Result;

use crate::state::AppContext;

pub fn run(context: &AppContext) -> Result<()> {
    let dictionary = context.resolver.dictionary();
    if dictionary.is_empty() {
        println!("Dictionary is empty");
        return Ok(());
    }

    println!("Dictionary entries: {}", dictionary.len());
    if let Some(key) = dictionary.sample_key() {
        println!("Sample key: {}", key);
    }

    Ok(())
}
