use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug)]
pub enum Error {
    MalformedRoundText(String),
    InvalidShapeChar(char),
    InvalidOutcomeChar(char),
    InvalidPartNumber(u8),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MalformedRoundText(s) => write!(
                f,
                "Expect two single-character columns separated by one space, given line({}).",
                s
            ),
            Error::InvalidShapeChar(c) => write!(f, "Invalid character({}) for shape.", c),
            Error::InvalidOutcomeChar(c) => {
                write!(f, "Invalid character({}) for round outcome.", c)
            }
            Error::InvalidPartNumber(n) => {
                write!(f, "Part number must be 1 or 2, given {}.", n)
            }
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub part_number: u8,
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Rock,
    Paper,
    Scissors,
}

impl Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Shape::Rock => "Rock",
            Shape::Paper => "Paper",
            Shape::Scissors => "Scissors",
        };

        write!(f, "{}", name)
    }
}

impl Shape {
    pub fn score(self) -> usize {
        match self {
            Shape::Rock => 1,
            Shape::Paper => 2,
            Shape::Scissors => 3,
        }
    }

    pub fn from_symbol(c: char, base: char) -> Result<Self, Error> {
        match (c as u32).checked_sub(base as u32) {
            Some(0) => Ok(Shape::Rock),
            Some(1) => Ok(Shape::Paper),
            Some(2) => Ok(Shape::Scissors),
            _ => Err(Error::InvalidShapeChar(c)),
        }
    }

    pub fn for_outcome(opponent: Shape, outcome: Outcome) -> Shape {
        match (opponent, outcome) {
            (Shape::Rock, Outcome::Win) => Shape::Paper,
            (Shape::Rock, Outcome::Draw) => Shape::Rock,
            (Shape::Rock, Outcome::Loss) => Shape::Scissors,
            (Shape::Paper, Outcome::Win) => Shape::Scissors,
            (Shape::Paper, Outcome::Draw) => Shape::Paper,
            (Shape::Paper, Outcome::Loss) => Shape::Rock,
            (Shape::Scissors, Outcome::Win) => Shape::Rock,
            (Shape::Scissors, Outcome::Draw) => Shape::Scissors,
            (Shape::Scissors, Outcome::Loss) => Shape::Paper,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Outcome::Win => "Win",
            Outcome::Draw => "Draw",
            Outcome::Loss => "Loss",
        };

        write!(f, "{}", name)
    }
}

impl Outcome {
    pub fn score(self) -> usize {
        match self {
            Outcome::Win => 6,
            Outcome::Draw => 3,
            Outcome::Loss => 0,
        }
    }

    // Outcome as experienced by the player of `response`.
    pub fn of_round(response: Shape, opponent: Shape) -> Outcome {
        match (response, opponent) {
            (Shape::Rock, Shape::Rock) => Outcome::Draw,
            (Shape::Rock, Shape::Paper) => Outcome::Loss,
            (Shape::Rock, Shape::Scissors) => Outcome::Win,
            (Shape::Paper, Shape::Rock) => Outcome::Win,
            (Shape::Paper, Shape::Paper) => Outcome::Draw,
            (Shape::Paper, Shape::Scissors) => Outcome::Loss,
            (Shape::Scissors, Shape::Rock) => Outcome::Loss,
            (Shape::Scissors, Shape::Paper) => Outcome::Win,
            (Shape::Scissors, Shape::Scissors) => Outcome::Draw,
        }
    }

    pub fn from_symbol(c: char) -> Result<Self, Error> {
        match c {
            'X' => Ok(Outcome::Loss),
            'Y' => Ok(Outcome::Draw),
            'Z' => Ok(Outcome::Win),
            _ => Err(Error::InvalidOutcomeChar(c)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum SecondColumn {
    Response,
    Outcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub opponent: Shape,
    pub response: Shape,
    pub outcome: Outcome,
}

impl Round {
    pub fn from_line(line: &str, second_col: SecondColumn) -> Result<Self, Error> {
        let chars = line.chars().collect::<Vec<_>>();
        let (opponent_char, second_char) = match chars.as_slice() {
            [opponent_char, ' ', second_char] => (*opponent_char, *second_char),
            _ => return Err(Error::MalformedRoundText(line.to_string())),
        };

        let opponent = Shape::from_symbol(opponent_char, 'A')?;
        let (response, outcome) = match second_col {
            SecondColumn::Response => {
                let response = Shape::from_symbol(second_char, 'X')?;
                (response, Outcome::of_round(response, opponent))
            }
            SecondColumn::Outcome => {
                let outcome = Outcome::from_symbol(second_char)?;
                (Shape::for_outcome(opponent, outcome), outcome)
            }
        };

        Ok(Round {
            opponent,
            response,
            outcome,
        })
    }

    pub fn score(&self) -> usize {
        self.outcome.score() + self.response.score()
    }
}

#[test]
fn test_outcome_of_round() {
    let table = [
        (Shape::Rock, Shape::Rock, Outcome::Draw),
        (Shape::Rock, Shape::Paper, Outcome::Loss),
        (Shape::Rock, Shape::Scissors, Outcome::Win),
        (Shape::Paper, Shape::Rock, Outcome::Win),
        (Shape::Paper, Shape::Paper, Outcome::Draw),
        (Shape::Paper, Shape::Scissors, Outcome::Loss),
        (Shape::Scissors, Shape::Rock, Outcome::Loss),
        (Shape::Scissors, Shape::Paper, Outcome::Win),
        (Shape::Scissors, Shape::Scissors, Outcome::Draw),
    ];
    for (response, opponent, outcome) in table {
        assert!(Outcome::of_round(response, opponent) == outcome);
    }
}

#[test]
fn test_for_outcome_inverts_of_round() {
    let shapes = [Shape::Rock, Shape::Paper, Shape::Scissors];
    let outcomes = [Outcome::Win, Outcome::Draw, Outcome::Loss];
    for opponent in shapes {
        for outcome in outcomes {
            let response = Shape::for_outcome(opponent, outcome);
            assert!(Outcome::of_round(response, opponent) == outcome);
        }
    }
}

#[test]
fn test_scores() {
    assert!(Shape::Rock.score() == 1);
    assert!(Shape::Paper.score() == 2);
    assert!(Shape::Scissors.score() == 3);
    assert!(Outcome::Win.score() == 6);
    assert!(Outcome::Draw.score() == 3);
    assert!(Outcome::Loss.score() == 0);
}

#[test]
fn test_round_score_as_response() {
    let lines = [
        "A X", "A Y", "A Z", "B X", "B Y", "B Z", "C X", "C Y", "C Z",
    ];
    let scores = [4, 8, 3, 1, 5, 9, 7, 2, 6];
    for (line, score) in lines.iter().zip(scores) {
        let round = Round::from_line(line, SecondColumn::Response).unwrap();
        assert!(round.score() == score);
    }
}

#[test]
fn test_round_score_as_outcome() {
    let lines = [
        "A X", "A Y", "A Z", "B X", "B Y", "B Z", "C X", "C Y", "C Z",
    ];
    let scores = [3, 4, 8, 1, 5, 9, 2, 6, 7];
    for (line, score) in lines.iter().zip(scores) {
        let round = Round::from_line(line, SecondColumn::Outcome).unwrap();
        assert!(round.score() == score);
    }
}

#[test]
fn test_round_rejects_malformed_line() {
    for line in ["A", "D X", "A W", "A  Y", "AB X", "A XY", ""] {
        assert!(Round::from_line(line, SecondColumn::Response).is_err());
        assert!(Round::from_line(line, SecondColumn::Outcome).is_err());
    }
}

#[test]
fn test_read_rounds() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "A Y\nB X\nC Z\n").unwrap();

    let rounds = read_rounds(file.path(), SecondColumn::Response).unwrap();
    assert!(rounds.iter().map(|r| r.score()).sum::<usize>() == 15);

    let rounds = read_rounds(file.path(), SecondColumn::Outcome).unwrap();
    assert!(rounds.iter().map(|r| r.score()).sum::<usize>() == 12);
}

pub fn read_rounds<P: AsRef<Path>>(path: P, second_col: SecondColumn) -> Result<Vec<Round>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut rounds = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        if line.is_empty() {
            continue;
        }

        let round = Round::from_line(line.as_str(), second_col)
            .with_context(|| format!("Failed to parse round from given line({}).", line))?;
        rounds.push(round);
    }

    Ok(rounds)
}
