use anyhow::Context;
use clap::Parser;

use crate::messages;

#[derive(Debug, Parser)]
pub(crate) struct Find {
    /// The value to look for.
    #[arg(long, allow_negative_numbers = true)]
    equals: i64,
    /// values of the readings, in order
    #[arg(allow_negative_numbers = true)]
    values: Vec<i64>,
}

impl Find {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        let readings = messages::readings(&self.values);
        let sequence = readings.as_sequence();
        let position = sequence
            .position_if(|message| message.value() == self.equals)
            .with_context(|| format!("No reading has value {}", self.equals))?;
        println!("{}: {}", position, sequence[position].describe());
        Ok(())
    }
}
