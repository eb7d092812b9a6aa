use anyhow::Result;

use crate::cli::Command;
use crate::state::AppContext;

pub mod add;
pub mod example;
pub mod inspect;
pub mod list;
pub mod lookup;
pub mod remove;

pub async fn dispatch(context: &AppContext, command: Command) -> Result<()> {
    match command {
        Command::Lookup { term } => lookup::run(context, &term).await,
        Command::Add { terms } => add::run(context, terms).await,
        Command::List => list::run(context).await,
        Command::Remove { index } => remove::run(context, index).await,
        Command::Example { index, sentence } => example::run(context, index, sentence).await,
        Command::Inspect => inspect::run(context),
    }
}
