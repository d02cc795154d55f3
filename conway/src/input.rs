// input.rs - Reads the header integers and the initial generation

use std::iter::Peekable;

use log::{debug, warn};

use crate::config::Symbols;
use crate::error::{LifeError, Result};
use crate::grid::Grid;

/// The three leading integers of the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    pub height: i64,
    pub width: i64,
    pub steps: i64,
}

/// A fully read input: header plus initial generation.
#[derive(Clone, Debug)]
pub struct Input {
    pub steps: i64,
    pub grid: Grid,
}

impl Header {
    pub fn read<I>(source: &mut Peekable<I>) -> Result<Self>
    where
        I: Iterator<Item = char>,
    {
        let height = read_int(source, "height")?;
        let width = read_int(source, "width")?;
        let steps = read_int(source, "steps")?;
        Ok(Self { height, width, steps })
    }
}

/// Reads the header and then exactly `height * width` cells.
pub fn read_input<I>(source: I, symbols: &Symbols) -> Result<Input>
where
    I: Iterator<Item = char>,
{
    let mut source = source.peekable();
    let header = Header::read(&mut source)?;
    debug!("header: {header:?}");
    let grid = Grid::from_stream_with(header.height, header.width, &mut source, symbols)?;
    Ok(Input { steps: header.steps, grid })
}

pub fn parse_input(text: &str, symbols: &Symbols) -> Result<Input> {
    read_input(text.chars(), symbols)
}

/// Turns raw input bytes into text. Input that is not UTF-8 is read one
/// character per byte, so every byte stays exactly one cell token.
pub fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!("input is not valid UTF-8, reading it byte by byte");
            e.into_bytes().into_iter().map(char::from).collect()
        }
    }
}

/// Skips leading whitespace and reads an optionally signed decimal integer.
/// Magnitudes beyond `i64` saturate, which dimension checks then reject.
fn read_int<I>(source: &mut Peekable<I>, what: &str) -> Result<i64>
where
    I: Iterator<Item = char>,
{
    while source.next_if(|c| c.is_whitespace()).is_some() {}

    let negative = match source.peek() {
        Some('-') => true,
        Some(_) => false,
        None => return Err(LifeError::InputError(format!("input ended before {what}"))),
    };
    source.next_if(|c| *c == '-' || *c == '+');

    let mut value: i64 = 0;
    let mut digits = 0;
    while let Some(d) = source.next_if(char::is_ascii_digit).and_then(|c| c.to_digit(10)) {
        let d = i64::from(d);
        value = value.saturating_mul(10);
        value = if negative { value.saturating_sub(d) } else { value.saturating_add(d) };
        digits += 1;
    }

    if digits == 0 {
        let found = source.peek().map_or("end of input".to_string(), |c| format!("{c:?}"));
        return Err(LifeError::InputError(format!("expected integer for {what}, found {found}")));
    }
    Ok(value)
}
