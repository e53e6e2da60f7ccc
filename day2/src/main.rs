use anyhow::{Context, Result};
use clap::Parser;
use day2::{CLIArgs, Error, SecondColumn};

fn main() -> Result<()> {
    let args = CLIArgs::try_parse()?;
    let second_col = match args.part_number {
        1 => SecondColumn::Response,
        2 => SecondColumn::Outcome,
        n => return Err(Error::InvalidPartNumber(n).into()),
    };

    let rounds = day2::read_rounds(&args.input_path, second_col).with_context(|| {
        format!(
            "Failed to read rounds from given input file({}).",
            args.input_path.display()
        )
    })?;
    let total_score = rounds.iter().map(|round| round.score()).sum::<usize>();
    println!("{}", total_score);

    Ok(())
}
