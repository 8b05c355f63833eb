use clap::Parser;
use msgvec_core::{Cursor, MessageSequence};

use crate::messages::{Reading, Readings, Valued};

#[derive(Debug, Parser)]
pub(crate) struct Walk {
    /// values of the readings, in order
    #[arg(allow_negative_numbers = true)]
    values: Vec<i64>,
    /// Walk from the last reading to the first.
    #[arg(long)]
    reverse: bool,
    /// Reserve room for this many readings before pushing.
    #[arg(long)]
    capacity: Option<usize>,
}

impl Walk {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        let mut readings = Readings::new();
        let sequence = readings.as_sequence_mut();
        if let Some(capacity) = self.capacity {
            sequence.reserve(capacity);
        }
        for value in &self.values {
            sequence.push_back(&Reading { value: *value })?;
        }

        let sequence: &dyn MessageSequence<dyn Valued> = sequence;
        if self.reverse {
            print_range(sequence.rbegin(), sequence.rend())?;
        } else {
            print_range(sequence.begin(), sequence.end())?;
        }
        println!("len: {}, capacity: {}", sequence.len(), sequence.capacity());
        Ok(())
    }
}

fn print_range<'a, const REVERSE: bool>(
    mut cursor: Cursor<'a, dyn Valued, REVERSE>,
    end: Cursor<'a, dyn Valued, REVERSE>,
) -> anyhow::Result<()> {
    while cursor != end {
        println!("{}: {}", cursor.position(), cursor.get()?.describe());
        cursor.move_next();
    }
    Ok(())
}
