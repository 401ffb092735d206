//! Reading the three integers from an input stream.

use std::io::BufRead;

use thiserror::Error;
use tracing::trace;

/// Number of integers the classifier consumes.
pub const INPUT_COUNT: usize = 3;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("input ended before integer #{position}")]
    Missing { position: usize },
    #[error("integer #{position} is not a 32-bit decimal integer: {token:?}")]
    Malformed { position: usize, token: String },
    #[error("read input")]
    Read(#[from] std::io::Error),
}

/// Read three whitespace-separated decimal integers.
///
/// Input is split on raw bytes and only the three kept tokens are decoded, so
/// anything after the third integer is ignored whatever its encoding.
pub fn read_triple<R: BufRead>(mut reader: R) -> Result<[i32; INPUT_COUNT], InputError> {
    let mut tokens: Vec<Vec<u8>> = Vec::with_capacity(INPUT_COUNT);
    let mut line = Vec::new();
    while tokens.len() < INPUT_COUNT {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        tokens.extend(
            line.split(u8::is_ascii_whitespace)
                .filter(|token| !token.is_empty())
                .map(<[u8]>::to_vec),
        );
    }
    tokens.truncate(INPUT_COUNT);
    trace!(count = tokens.len(), "input tokens");

    let mut values = [0; INPUT_COUNT];
    for (index, slot) in values.iter_mut().enumerate() {
        let position = index + 1;
        let token = tokens
            .get(index)
            .ok_or(InputError::Missing { position })?;
        *slot = parse_integer(token).ok_or_else(|| InputError::Malformed {
            position,
            token: String::from_utf8_lossy(token).into_owned(),
        })?;
    }
    Ok(values)
}

fn parse_integer(token: &[u8]) -> Option<i32> {
    std::str::from_utf8(token).ok()?.parse().ok()
}
