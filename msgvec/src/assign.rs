use anyhow::Context;
use clap::{Parser, ValueEnum};
use msgvec_core::MessageSequence;

use crate::messages;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum Source {
    Readings,
    Alerts,
}

#[derive(Debug, Parser)]
pub(crate) struct Assign {
    /// Kind of sequence to copy from.
    #[arg(long, value_enum, default_value_t = Source::Readings)]
    from: Source,
    /// Initial contents of the target, comma separated.
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    target: Vec<i64>,
    /// values of the source sequence, in order
    #[arg(allow_negative_numbers = true)]
    values: Vec<i64>,
}

impl Assign {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        let mut target = messages::readings(&self.target);
        let result = match self.from {
            Source::Readings => target.assign(messages::readings(&self.values).as_sequence()),
            Source::Alerts => target.assign(messages::alerts(&self.values).as_sequence()),
        };
        if let Err(e) = result {
            println!("target unchanged: [{}]", messages::render(target.as_sequence()));
            return Err(e).context("Cannot assign to a sequence of readings");
        }
        println!(
            "assigned {} element(s): [{}]",
            target.len(),
            messages::render(target.as_sequence())
        );
        Ok(())
    }
}
