// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Live attribute values.
//!
//! A live value presents an attribute text as a structured object.
//! The text is parsed on the first access and cached. Changes made
//! through the object are written back to the attribute, while changes
//! made to the attribute by any other means invalidate the cache,
//! so the next access parses the text again.

use std::mem;

pub use self::binding::{
    AttributeBinding,
    DefaultValue,
};
pub use self::enumeration::LiveEnumeration;
pub use self::list::{
    ListItem,
    LiveList,
};
pub use self::value::{
    LiveValue,
    ValueType,
};

pub(crate) use self::enumeration::EnumData;
pub(crate) use self::list::ListData;
pub(crate) use self::value::ValueData;

mod binding;
mod enumeration;
mod list;
mod value;

/// A cache state of a live value.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Validity {
    /// The attribute text was never parsed.
    Unparsed,
    /// The cached value matches the attribute text.
    Valid,
    /// The attribute was changed after the last parse.
    Invalid,
}

/// A parsed attribute value together with its validity.
///
/// `Invalid` keeps the stale value, which is used when the
/// new attribute text cannot be parsed.
#[derive(Debug)]
pub(crate) enum Cache<T> {
    Unparsed,
    Valid(T),
    Invalid(T),
}

impl<T> Cache<T> {
    pub fn validity(&self) -> Validity {
        match *self {
            Cache::Unparsed => Validity::Unparsed,
            Cache::Valid(_) => Validity::Valid,
            Cache::Invalid(_) => Validity::Invalid,
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.validity() == Validity::Valid
    }

    /// Marks a valid value as invalid. Returns `true` on state change.
    pub fn invalidate(&mut self) -> bool {
        match mem::replace(self, Cache::Unparsed) {
            Cache::Valid(v) => {
                *self = Cache::Invalid(v);
                true
            }
            other => {
                *self = other;
                false
            }
        }
    }

    /// Returns the cached value in any state except `Unparsed`.
    pub fn value(&self) -> Option<&T> {
        match *self {
            Cache::Unparsed => None,
            Cache::Valid(ref v) | Cache::Invalid(ref v) => Some(v),
        }
    }

    pub fn valid_mut(&mut self) -> Option<&mut T> {
        match *self {
            Cache::Valid(ref mut v) => Some(v),
            _ => None,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalidate_1() {
        let mut cache: Cache<i32> = Cache::Unparsed;
        assert!(!cache.invalidate());
        assert_eq!(cache.validity(), Validity::Unparsed);

        cache = Cache::Valid(5);
        assert!(cache.invalidate());
        assert_eq!(cache.validity(), Validity::Invalid);
        assert_eq!(cache.value(), Some(&5));

        assert!(!cache.invalidate());
        assert_eq!(cache.validity(), Validity::Invalid);
        assert_eq!(cache.valid_mut(), None);
    }
}
