// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Value grammar parsers.
//!
//! List grammars drive a handler with a fixed callback sequence:
//! `start`, zero or more tokens and `end`. `end` is not called on error.

pub use self::list::{
    parse_length_list,
    parse_number_list,
    parse_points,
};
pub use self::transform::parse_transform_list;
pub use self::value::{
    parse_integer,
    parse_length,
    parse_number,
    parse_rect,
};

mod list;
mod transform;
mod value;

use crate::{
    Length,
    Matrix,
};

/// Callbacks of the `<list-of-lengths>` grammar.
pub trait LengthListHandler {
    /// Called before the first token.
    fn start_length_list(&mut self) {}
    /// Called for each length.
    fn length_value(&mut self, length: Length);
    /// Called after the last token.
    fn end_length_list(&mut self) {}
}

/// Callbacks of the `<list-of-numbers>` grammar.
pub trait NumberListHandler {
    /// Called before the first token.
    fn start_number_list(&mut self) {}
    /// Called for each number.
    fn number_value(&mut self, number: f64);
    /// Called after the last token.
    fn end_number_list(&mut self) {}
}

/// Callbacks of the `points` grammar.
pub trait PointsHandler {
    /// Called before the first token.
    fn start_points(&mut self) {}
    /// Called for each coordinate pair.
    fn point(&mut self, x: f64, y: f64);
    /// Called after the last token.
    fn end_points(&mut self) {}
}

/// Callbacks of the `<transform-list>` grammar.
///
/// Omitted optional arguments are passed with their default values,
/// so `scale(2)` is reported as `scale(2, 2)` and `rotate(45)` as `rotate(45, 0, 0)`.
#[allow(missing_docs)]
pub trait TransformListHandler {
    fn start_transform_list(&mut self) {}
    fn matrix(&mut self, m: Matrix);
    fn translate(&mut self, tx: f64, ty: f64);
    fn scale(&mut self, sx: f64, sy: f64);
    fn rotate(&mut self, angle: f64, cx: f64, cy: f64);
    fn skew_x(&mut self, angle: f64);
    fn skew_y(&mut self, angle: f64);
    fn end_transform_list(&mut self) {}
}
