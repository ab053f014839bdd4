// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Adapters from grammar callbacks to list items.

use crate::error::ParseError;
use crate::parser::{
    self,
    LengthListHandler,
    NumberListHandler,
    PointsHandler,
    TransformListHandler,
};
use crate::{
    Item,
    ItemKind,
    Length,
    Matrix,
    Point,
    Transform,
};

/// A receiver of parsed list items.
pub trait ListSink {
    /// Called before the first item.
    fn start(&mut self) {}
    /// Appends an item.
    fn push(&mut self, item: Item);
    /// Called after the last item.
    fn end(&mut self) {}
}

impl ListSink for Vec<Item> {
    fn start(&mut self) {
        self.clear();
    }

    #[inline]
    fn push(&mut self, item: Item) {
        Vec::push(self, item);
    }
}

/// Translates grammar callbacks into items appended to a sink.
pub struct ItemBuilder<'a, S: 'a + ListSink> {
    sink: &'a mut S,
}

impl<'a, S: ListSink> ItemBuilder<'a, S> {
    /// Creates a new builder.
    pub fn new(sink: &'a mut S) -> Self {
        ItemBuilder { sink }
    }
}

impl<'a, S: ListSink> LengthListHandler for ItemBuilder<'a, S> {
    fn start_length_list(&mut self) {
        self.sink.start();
    }

    fn length_value(&mut self, length: Length) {
        self.sink.push(Item::Length(length));
    }

    fn end_length_list(&mut self) {
        self.sink.end();
    }
}

impl<'a, S: ListSink> NumberListHandler for ItemBuilder<'a, S> {
    fn start_number_list(&mut self) {
        self.sink.start();
    }

    fn number_value(&mut self, number: f64) {
        self.sink.push(Item::Number(number));
    }

    fn end_number_list(&mut self) {
        self.sink.end();
    }
}

impl<'a, S: ListSink> PointsHandler for ItemBuilder<'a, S> {
    fn start_points(&mut self) {
        self.sink.start();
    }

    fn point(&mut self, x: f64, y: f64) {
        self.sink.push(Item::Point(Point::new(x, y)));
    }

    fn end_points(&mut self) {
        self.sink.end();
    }
}

impl<'a, S: ListSink> TransformListHandler for ItemBuilder<'a, S> {
    fn start_transform_list(&mut self) {
        self.sink.start();
    }

    fn matrix(&mut self, m: Matrix) {
        self.sink.push(Item::Transform(Transform::new_matrix(m)));
    }

    fn translate(&mut self, tx: f64, ty: f64) {
        self.sink.push(Item::Transform(Transform::new_translate(tx, ty)));
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.sink.push(Item::Transform(Transform::new_scale(sx, sy)));
    }

    fn rotate(&mut self, angle: f64, cx: f64, cy: f64) {
        self.sink.push(Item::Transform(Transform::new_rotate(angle, cx, cy)));
    }

    fn skew_x(&mut self, angle: f64) {
        self.sink.push(Item::Transform(Transform::new_skew_x(angle)));
    }

    fn skew_y(&mut self, angle: f64) {
        self.sink.push(Item::Transform(Transform::new_skew_y(angle)));
    }

    fn end_transform_list(&mut self) {
        self.sink.end();
    }
}

impl ItemKind {
    /// Parses a list of items of this kind into the sink.
    pub fn parse<S: ListSink>(&self, text: &str, sink: &mut S) -> Result<(), ParseError> {
        let mut builder = ItemBuilder::new(sink);
        match *self {
            ItemKind::Length => parser::parse_length_list(text, &mut builder),
            ItemKind::Number => parser::parse_number_list(text, &mut builder),
            ItemKind::Point => parser::parse_points(text, &mut builder),
            ItemKind::Transform => parser::parse_transform_list(text, &mut builder),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LengthUnit, WriteBuffer};

    fn parse(kind: ItemKind, text: &str) -> Vec<Item> {
        let mut items = Vec::new();
        kind.parse(text, &mut items).unwrap();
        items
    }

    #[test]
    fn lengths_1() {
        assert_eq!(parse(ItemKind::Length, "10 20pt"), vec![
            Item::Length(Length::new_number(10.0)),
            Item::Length(Length::new(20.0, LengthUnit::Pt)),
        ]);
    }

    #[test]
    fn numbers_1() {
        assert_eq!(parse(ItemKind::Number, "1 2"), vec![Item::Number(1.0), Item::Number(2.0)]);
    }

    #[test]
    fn points_1() {
        assert_eq!(parse(ItemKind::Point, "1,2 3,4"), vec![
            Item::Point(Point::new(1.0, 2.0)),
            Item::Point(Point::new(3.0, 4.0)),
        ]);
    }

    #[test]
    fn transforms_1() {
        assert_eq!(parse(ItemKind::Transform, "rotate(30 1 2) skewY(5)"), vec![
            Item::Transform(Transform::new_rotate(30.0, 1.0, 2.0)),
            Item::Transform(Transform::new_skew_y(5.0)),
        ]);
    }

    #[test]
    fn sink_is_reset_on_start_1() {
        let mut items = vec![Item::Number(5.0)];
        ItemKind::Number.parse("1", &mut items).unwrap();
        assert_eq!(items, vec![Item::Number(1.0)]);
    }

    // Serializing and parsing back must give the same items.
    #[test]
    fn round_trip_1() {
        let items = vec![
            Item::Transform(Transform::new_matrix(Matrix::new(1.5, 0.0, 0.0, 2.0, -3.0, 0.25))),
            Item::Transform(Transform::new_translate(0.1 + 0.2, -7.0)),
            Item::Transform(Transform::new_scale(2.0, 3.0)),
            Item::Transform(Transform::new_rotate(33.3, 10.0, 0.0)),
            Item::Transform(Transform::new_skew_x(-12.5)),
        ];

        let mut buf = Vec::new();
        for (i, item) in items.iter().enumerate() {
            if i != 0 {
                buf.push(b' ');
            }
            item.write_buf(&mut buf);
        }

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(parse(ItemKind::Transform, &text), items);
    }
}
