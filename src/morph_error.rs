//! morph error type

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// statistic asked for on zero points
    EmptyInput,
}

#[derive(Debug)]
pub struct MorphError {
    kind: ErrorKind,
    err: String,
}

impl MorphError {
    pub fn new(kind: ErrorKind, err: &str) -> MorphError {
        MorphError {
            kind,
            err: err.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl Display for MorphError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[MorphError::{:?}]: {}", self.kind, self.err)
    }
}

impl Error for MorphError {}

#[macro_export]
macro_rules! morph_err {
    ( $kind:expr, $x:expr ) => {{
        $crate::morph_error::MorphError::new(
            $kind,
            format!("{}:{} : {}", file!(), line!(), $x).as_str(),
        )
    }};
}

#[cfg(test)]
mod test_morph_error {
    use super::*;

    #[test]
    fn test_display_carries_kind_and_location() {
        let err = morph_err!(ErrorKind::EmptyInput, "no points");
        assert_eq!(err.kind(), ErrorKind::EmptyInput);
        let msg = err.to_string();
        assert!(msg.starts_with("[MorphError::EmptyInput]: "));
        assert!(msg.contains("morph_error.rs"));
        assert!(msg.ends_with(": no points"));
    }
}
