use anyhow::{Context, anyhow, bail};
use flagsweep_core::{Coord, Coord2};
use std::str::FromStr;

pub const USAGE: &str = "commands: r ROW COL (reveal), f ROW COL (flag), n (new game), q (quit)";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    NewGame,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or_else(|| anyhow!("empty command"))?;

        let command = match verb {
            "r" | "reveal" => Command::Reveal(parse_coords(&mut words)?),
            "f" | "flag" => Command::Flag(parse_coords(&mut words)?),
            "n" | "new" => Command::NewGame,
            "q" | "quit" => Command::Quit,
            other => bail!("unknown command {other:?}"),
        };

        if let Some(extra) = words.next() {
            bail!("unexpected argument {extra:?}");
        }
        Ok(command)
    }
}

fn parse_coords<'a>(words: &mut impl Iterator<Item = &'a str>) -> anyhow::Result<Coord2> {
    let mut next = |axis: &str| -> anyhow::Result<Coord> {
        let word = words.next().ok_or_else(|| anyhow!("missing {axis}"))?;
        word.parse().with_context(|| format!("invalid {axis} {word:?}"))
    };
    let row = next("row")?;
    let col = next("col")?;
    Ok((row, col))
}
