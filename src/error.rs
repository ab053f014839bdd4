// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::error;
use std::fmt;
use std::result;

use crate::{
    ItemKind,
    LengthUnit,
};

/// Value grammar errors.
#[derive(Clone, PartialEq, Debug)]
pub enum ParseError {
    /// An error reported by the `svgtypes` tokenizer.
    InvalidValue(String),

    /// Unknown transform function name.
    UnknownTransform(String),

    /// A transform function got a wrong amount of arguments.
    InvalidArgumentCount {
        /// Transform function name.
        name: &'static str,
        /// Amount of arguments that were found.
        count: usize,
    },

    /// An unexpected character at the specified byte position.
    UnexpectedCharacter(char, usize),

    /// The value ended in the middle of a token.
    UnexpectedEnd,

    /// The `points` value has an odd amount of coordinates.
    OddCoordinateCount(usize),

    /// A rectangle requires exactly four numbers.
    InvalidRectCount(usize),

    /// A rectangle with a negative width or height.
    NegativeRectSize,

    /// An invalid `<integer>`.
    InvalidInteger,

    /// A negative value for an attribute that must be non-negative.
    NegativeValue,

    /// A length unit that is not supported.
    UnsupportedUnit,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParseError::InvalidValue(ref msg) => {
                write!(f, "{}", msg)
            }
            ParseError::UnknownTransform(ref name) => {
                write!(f, "unknown transform '{}'", name)
            }
            ParseError::InvalidArgumentCount { name, count } => {
                write!(f, "'{}' cannot have {} arguments", name, count)
            }
            ParseError::UnexpectedCharacter(c, pos) => {
                write!(f, "unexpected character '{}' at position {}", c, pos)
            }
            ParseError::UnexpectedEnd => {
                write!(f, "unexpected end of data")
            }
            ParseError::OddCoordinateCount(count) => {
                write!(f, "expected an even amount of coordinates, found {}", count)
            }
            ParseError::InvalidRectCount(count) => {
                write!(f, "a rectangle must have 4 numbers, found {}", count)
            }
            ParseError::NegativeRectSize => {
                write!(f, "a rectangle cannot have a negative size")
            }
            ParseError::InvalidInteger => {
                write!(f, "invalid integer")
            }
            ParseError::NegativeValue => {
                write!(f, "a negative value is not allowed")
            }
            ParseError::UnsupportedUnit => {
                write!(f, "unsupported length unit")
            }
        }
    }
}

impl error::Error for ParseError {
    fn description(&self) -> &str {
        "an SVG value parsing error"
    }
}

impl From<svgtypes::Error> for ParseError {
    fn from(value: svgtypes::Error) -> Self {
        ParseError::InvalidValue(value.to_string())
    }
}


/// An error category, used to map errors onto DOM exception codes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ErrorKind {
    /// The attribute text does not match its grammar.
    Syntax,
    /// A value of a wrong kind was supplied.
    TypeMismatch,
    /// An index is outside the list bounds.
    IndexSize,
    /// An operation is not possible in the current state.
    InvalidState,
}

/// Live attribute errors.
#[derive(Clone, PartialEq, Debug)]
pub enum Error {
    /// The attribute text does not match the attribute value grammar.
    MalformedValue {
        /// Attribute name.
        attribute: String,
        /// Raw attribute text.
        value: String,
        /// Grammar error.
        cause: ParseError,
    },

    /// A mutator received an item of a different kind than the list holds.
    WrongItemType {
        /// The kind the list holds.
        expected: ItemKind,
        /// The kind that was supplied.
        actual: ItemKind,
    },

    /// A 1-based index is outside of the `1..=count` range.
    IndexOutOfRange {
        /// Requested 1-based index.
        index: usize,
        /// Amount of items in the list.
        count: usize,
    },

    /// A relative length unit cannot be resolved without a unit context.
    UnresolvableUnit(LengthUnit),

    /// The attribute is absent and has no default value.
    MissingValue(String),

    /// The attribute is already bound as a different live type.
    BindingMismatch(String),

    /// An enumeration index that does not map to a token.
    InvalidEnumeration {
        /// Attribute name.
        attribute: String,
        /// Requested index.
        index: u16,
    },

    /// A value with a NaN or an infinite number.
    NonFiniteValue,

    /// The element of the live attribute was dropped.
    DetachedElement(String),
}

impl Error {
    /// Returns the error category.
    pub fn kind(&self) -> ErrorKind {
        match *self {
            Error::MalformedValue { .. } => ErrorKind::Syntax,
            Error::WrongItemType { .. } => ErrorKind::TypeMismatch,
            Error::InvalidEnumeration { .. } => ErrorKind::TypeMismatch,
            Error::IndexOutOfRange { .. } => ErrorKind::IndexSize,
            Error::UnresolvableUnit(_) => ErrorKind::InvalidState,
            Error::MissingValue(_) => ErrorKind::InvalidState,
            Error::BindingMismatch(_) => ErrorKind::InvalidState,
            Error::NonFiniteValue => ErrorKind::TypeMismatch,
            Error::DetachedElement(_) => ErrorKind::InvalidState,
        }
    }

    /// Returns a stable message key, suitable for localization lookups.
    pub fn message_key(&self) -> &'static str {
        match *self {
            Error::MalformedValue { .. } => "attribute.malformed",
            Error::WrongItemType { .. } => "expected.item.type",
            Error::IndexOutOfRange { .. } => "index.out.of.bounds",
            Error::UnresolvableUnit(_) => "unit.unresolvable",
            Error::MissingValue(_) => "attribute.missing",
            Error::BindingMismatch(_) => "attribute.binding.mismatch",
            Error::InvalidEnumeration { .. } => "enum.value.invalid",
            Error::NonFiniteValue => "value.not.finite",
            Error::DetachedElement(_) => "attribute.detached",
        }
    }

    /// Returns the positional arguments of the message.
    pub fn args(&self) -> Vec<String> {
        match *self {
            Error::MalformedValue { ref attribute, ref value, ref cause } => {
                vec![attribute.clone(), value.clone(), cause.to_string()]
            }
            Error::WrongItemType { expected, actual } => {
                vec![expected.to_string(), actual.to_string()]
            }
            Error::IndexOutOfRange { index, count } => {
                vec![index.to_string(), count.to_string()]
            }
            Error::UnresolvableUnit(unit) => {
                vec![unit.to_string()]
            }
            Error::MissingValue(ref attribute)
            | Error::BindingMismatch(ref attribute)
            | Error::DetachedElement(ref attribute) => {
                vec![attribute.clone()]
            }
            Error::InvalidEnumeration { ref attribute, index } => {
                vec![attribute.clone(), index.to_string()]
            }
            Error::NonFiniteValue => Vec::new(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::MalformedValue { ref attribute, ref value, ref cause } => {
                write!(f, "attribute '{}' has an invalid value '{}': {}", attribute, value, cause)
            }
            Error::WrongItemType { expected, actual } => {
                write!(f, "expected a {} item, got a {} item", expected, actual)
            }
            Error::IndexOutOfRange { index, count } => {
                write!(f, "index {} is out of range 1..{}", index, count)
            }
            Error::UnresolvableUnit(unit) => {
                write!(f, "'{}' units cannot be resolved without a unit context", unit)
            }
            Error::MissingValue(ref attribute) => {
                write!(f, "attribute '{}' is required but absent", attribute)
            }
            Error::BindingMismatch(ref attribute) => {
                write!(f, "attribute '{}' is already bound as a different type", attribute)
            }
            Error::InvalidEnumeration { ref attribute, index } => {
                write!(f, "{} is not a valid value of the '{}' attribute", index, attribute)
            }
            Error::NonFiniteValue => {
                write!(f, "NaN and infinite numbers are not allowed")
            }
            Error::DetachedElement(ref attribute) => {
                write!(f, "the element of the '{}' attribute no longer exists", attribute)
            }
        }
    }
}

impl error::Error for Error {
    fn description(&self) -> &str {
        "a live SVG attribute error"
    }
}

/// A specialized `Result` type for live attribute operations.
pub type Result<T> = result::Result<T, Error>;
