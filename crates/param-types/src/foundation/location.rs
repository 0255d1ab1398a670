//! Where a checked value lives in the call frame.
//!
//! Locations nest as checkers descend into arrays and objects. They borrow
//! their parent, so building one costs nothing; the rendered string only
//! exists once a failure is reported.
//!
//! ```text
//! 2nd
//! 0th element of 2nd
//! property name of 0th element of 2nd
//! ```

use std::fmt;

/// A position inside the argument list.
#[derive(Debug, Clone, Copy)]
pub enum Location<'a> {
    /// A positional parameter (zero-based).
    Param(usize),
    /// An array element inside `parent`.
    Element {
        index: usize,
        parent: &'a Location<'a>,
    },
    /// An object property inside `parent`.
    Property {
        key: &'a str,
        parent: &'a Location<'a>,
    },
}

impl<'a> Location<'a> {
    #[must_use]
    pub const fn param(index: usize) -> Location<'static> {
        Location::Param(index)
    }

    #[must_use]
    pub fn element(&self, index: usize) -> Location<'_> {
        Location::Element {
            index,
            parent: self,
        }
    }

    #[must_use]
    pub fn property<'s>(&'s self, key: &'s str) -> Location<'s> {
        Location::Property { key, parent: self }
    }

    /// The positional parameter this location is rooted at.
    #[must_use]
    pub fn position(&self) -> usize {
        match self {
            Self::Param(index) => *index,
            Self::Element { parent, .. } | Self::Property { parent, .. } => parent.position(),
        }
    }
}

impl fmt::Display for Location<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Param(index) => write!(f, "{}", Ordinal(*index)),
            Self::Element { index, parent } => {
                write!(f, "{} element of {parent}", Ordinal(*index))
            }
            Self::Property { key, parent } => write!(f, "property {key} of {parent}"),
        }
    }
}

/// English ordinal: `0th`, `1st`, `2nd`, `3rd`, `11th`, `21st`.
#[derive(Debug, Clone, Copy)]
pub struct Ordinal(pub usize);

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.0;
        let suffix = match n % 100 {
            11..=13 => "th",
            _ => match n % 10 {
                1 => "st",
                2 => "nd",
                3 => "rd",
                _ => "th",
            },
        };
        write!(f, "{n}{suffix}")
    }
}

// ============================================================================
// SITE
// ============================================================================

/// The method being validated together with the location being checked.
#[derive(Debug, Clone, Copy)]
pub struct Site<'a> {
    method: &'a str,
    location: Location<'a>,
}

impl<'a> Site<'a> {
    #[must_use]
    pub const fn new(method: &'a str, location: Location<'a>) -> Self {
        Self { method, location }
    }

    #[must_use]
    pub const fn method(&self) -> &'a str {
        self.method
    }

    #[must_use]
    pub const fn location(&self) -> &Location<'a> {
        &self.location
    }

    /// The site of an array element below this one.
    #[must_use]
    pub fn element(&self, index: usize) -> Site<'_> {
        Site {
            method: self.method,
            location: self.location.element(index),
        }
    }

    /// The site of an object property below this one.
    #[must_use]
    pub fn property<'s>(&'s self, key: &'s str) -> Site<'s> {
        Site {
            method: self.method,
            location: self.location.property(key),
        }
    }
}
