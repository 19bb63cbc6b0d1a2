//! Parsing of degree sequences from text streams.
//!
//! The expected layout is a vertex count followed by that many non-negative
//! integers, all separated by arbitrary whitespace. Tokens after the last
//! degree are ignored.

use std::io::{self, Read};
use std::num::ParseIntError;

use havel_core::DegreeSequence;
use thiserror::Error;

/// Errors raised while reading a degree sequence.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InputError {
    /// The stream could not be read as UTF-8 text.
    #[error("failed to read input: {source}")]
    Read {
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The stream held no tokens at all.
    #[error("input is empty; expected a vertex count")]
    MissingCount,
    /// The leading token was not a non-negative integer.
    #[error("invalid vertex count `{token}`: {source}")]
    InvalidCount {
        /// Offending token.
        token: String,
        /// Integer parse failure.
        #[source]
        source: ParseIntError,
    },
    /// The stream ended before every announced degree was read.
    #[error("expected {expected} degrees but the input ended after {found}")]
    MissingDegree {
        /// Vertex count announced by the input.
        expected: usize,
        /// Number of degrees actually present.
        found: usize,
    },
    /// A degree token was not a non-negative integer.
    #[error("invalid degree `{token}` at position {position}: {source}")]
    InvalidDegree {
        /// One-based position of the degree in the list.
        position: usize,
        /// Offending token.
        token: String,
        /// Integer parse failure.
        #[source]
        source: ParseIntError,
    },
}

impl InputError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> InputErrorCode {
        match self {
            Self::Read { .. } => InputErrorCode::Read,
            Self::MissingCount => InputErrorCode::MissingCount,
            Self::InvalidCount { .. } => InputErrorCode::InvalidCount,
            Self::MissingDegree { .. } => InputErrorCode::MissingDegree,
            Self::InvalidDegree { .. } => InputErrorCode::InvalidDegree,
        }
    }
}

/// Machine-readable error codes for [`InputError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum InputErrorCode {
    /// The stream could not be read.
    Read,
    /// The stream held no tokens.
    MissingCount,
    /// The vertex count was malformed.
    InvalidCount,
    /// Fewer degrees than announced.
    MissingDegree,
    /// A degree was malformed.
    InvalidDegree,
}

impl InputErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Read => "INPUT_READ",
            Self::MissingCount => "INPUT_MISSING_COUNT",
            Self::InvalidCount => "INPUT_INVALID_COUNT",
            Self::MissingDegree => "INPUT_MISSING_DEGREE",
            Self::InvalidDegree => "INPUT_INVALID_DEGREE",
        }
    }
}

/// Reads the whole of `reader` and parses it with [`parse_sequence`].
///
/// # Errors
/// Returns [`InputError::Read`] when the stream fails or is not UTF-8, and
/// any error produced by [`parse_sequence`].
pub fn read_sequence(mut reader: impl Read) -> Result<DegreeSequence, InputError> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|source| InputError::Read { source })?;
    parse_sequence(&text)
}

/// Parses a vertex count followed by that many degrees.
///
/// # Errors
/// Returns [`InputError`] when the count is missing or malformed, when a
/// degree is malformed, or when fewer degrees than announced are present.
///
/// # Examples
/// ```
/// use havel_cli::cli::parse_sequence;
///
/// let sequence = parse_sequence("3\n2 2 2\n")?;
/// assert_eq!(sequence.as_slice(), &[2, 2, 2]);
/// # Ok::<(), havel_cli::cli::InputError>(())
/// ```
pub fn parse_sequence(text: &str) -> Result<DegreeSequence, InputError> {
    let mut tokens = text.split_whitespace();
    let count_token = tokens.next().ok_or(InputError::MissingCount)?;
    let expected = count_token
        .parse::<usize>()
        .map_err(|source| InputError::InvalidCount {
            token: count_token.to_owned(),
            source,
        })?;

    // Grow with the data actually present rather than trusting the count.
    let mut degrees = Vec::new();
    for (index, token) in tokens.take(expected).enumerate() {
        let degree = token
            .parse::<usize>()
            .map_err(|source| InputError::InvalidDegree {
                position: index + 1,
                token: token.to_owned(),
                source,
            })?;
        degrees.push(degree);
    }

    if degrees.len() < expected {
        return Err(InputError::MissingDegree {
            expected,
            found: degrees.len(),
        });
    }
    Ok(DegreeSequence::new(degrees))
}
