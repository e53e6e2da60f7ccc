use anyhow::{Context, Result};
use clap::Parser;
use day1::{CLIArgs, Error};

fn main() -> Result<()> {
    let args = CLIArgs::try_parse()?;
    let top_count = match args.part_number {
        1 => 1,
        2 => 3,
        n => return Err(Error::InvalidPartNumber(n).into()),
    };

    let totals = day1::read_group_totals(&args.input_path).with_context(|| {
        format!(
            "Failed to read group totals from given input file({}).",
            args.input_path.display()
        )
    })?;
    let sum = day1::sum_of_largest(&totals, top_count)?;
    println!("{}", sum);

    Ok(())
}
