// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;

use crate::{
    Length,
    Point,
    Transform,
    WriteBuffer,
    WriteOptions,
};

/// A list item kind.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ItemKind {
    /// A `<length>`.
    Length,
    /// A `<number>`.
    Number,
    /// A coordinate pair from a `points` attribute.
    Point,
    /// A single transform function.
    Transform,
}

impl ItemKind {
    /// Returns a separator that is used to join items of this kind.
    #[inline]
    pub fn separator(&self) -> &'static str {
        " "
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match *self {
            ItemKind::Length => "length",
            ItemKind::Number => "number",
            ItemKind::Point => "point",
            ItemKind::Transform => "transform",
        };

        write!(f, "{}", s)
    }
}

/// A structured list item value.
#[derive(Clone, Copy, PartialEq, Debug)]
#[allow(missing_docs)]
pub enum Item {
    Length(Length),
    Number(f64),
    Point(Point),
    Transform(Transform),
}

macro_rules! impl_item_getter {
    ($name:ident, $variant:ident, $t:ty) => (
        #[allow(missing_docs)]
        #[inline]
        pub fn $name(&self) -> Option<$t> {
            match *self {
                Item::$variant(v) => Some(v),
                _ => None,
            }
        }
    )
}

impl Item {
    /// Returns the item kind.
    pub fn kind(&self) -> ItemKind {
        match *self {
            Item::Length(_) => ItemKind::Length,
            Item::Number(_) => ItemKind::Number,
            Item::Point(_) => ItemKind::Point,
            Item::Transform(_) => ItemKind::Transform,
        }
    }

    /// Returns `true` if the value can be written as a valid attribute text,
    /// i.e. contains no NaN or infinite numbers.
    pub fn is_finite(&self) -> bool {
        match *self {
            Item::Length(ref v) => v.is_finite(),
            Item::Number(v) => v.is_finite(),
            Item::Point(ref v) => v.is_finite(),
            Item::Transform(ref v) => v.is_finite(),
        }
    }

    impl_item_getter!(as_length, Length, Length);
    impl_item_getter!(as_number, Number, f64);
    impl_item_getter!(as_point, Point, Point);
    impl_item_getter!(as_transform, Transform, Transform);
}

macro_rules! impl_from {
    ($t:ty, $variant:ident) => (
        impl From<$t> for Item {
            fn from(value: $t) -> Self {
                Item::$variant(value)
            }
        }
    )
}

impl_from!(Length, Length);
impl_from!(f64, Number);
impl_from!(Point, Point);
impl_from!(Transform, Transform);

impl WriteBuffer for Item {
    fn write_buf_opt(&self, opt: &WriteOptions, buf: &mut Vec<u8>) {
        match *self {
            Item::Length(ref v) => v.write_buf_opt(opt, buf),
            Item::Number(ref v) => v.write_buf_opt(opt, buf),
            Item::Point(ref v) => v.write_buf_opt(opt, buf),
            Item::Transform(ref v) => v.write_buf_opt(opt, buf),
        }
    }
}

impl_display!(Item);
