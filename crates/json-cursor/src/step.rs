//! Navigation step type.

use std::fmt;

/// A single navigation step: an object member name or an array index.
///
/// Negative indices count from the end of the array, `-1` being the last
/// element. A step only matches the container of its own kind: a key never
/// selects an array element and an index never selects an object member.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    /// Object member name.
    Key(String),
    /// Array index.
    Index(isize),
}

impl Step {
    /// Check if this step is an object key.
    pub fn is_key(&self) -> bool {
        matches!(self, Step::Key(_))
    }

    /// Check if this step is an array index.
    pub fn is_index(&self) -> bool {
        matches!(self, Step::Index(_))
    }

    /// Get the key, if this is a key step.
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Step::Key(key) => Some(key),
            Step::Index(_) => None,
        }
    }

    /// Resolve this step against an array of length `len`.
    ///
    /// Returns the absolute position, or `None` for key steps and indices that
    /// fall outside the array.
    pub fn position(&self, len: usize) -> Option<usize> {
        let Step::Index(index) = *self else {
            return None;
        };
        let pos = if index >= 0 {
            index as usize
        } else {
            len.checked_sub(index.unsigned_abs())?
        };
        (pos < len).then_some(pos)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Key(key) => f.write_str(key),
            Step::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for Step {
    fn from(key: &str) -> Self {
        Step::Key(key.to_string())
    }
}

impl From<String> for Step {
    fn from(key: String) -> Self {
        Step::Key(key)
    }
}

impl From<&String> for Step {
    fn from(key: &String) -> Self {
        Step::Key(key.clone())
    }
}

impl From<&Step> for Step {
    fn from(step: &Step) -> Self {
        step.clone()
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Step {
            fn from(index: $t) -> Self {
                // Anything beyond isize is out of range for every array anyway.
                Step::Index(isize::try_from(index).unwrap_or(isize::MIN))
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Step {
            fn from(index: $t) -> Self {
                Step::Index(isize::try_from(index).unwrap_or(isize::MAX))
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);
