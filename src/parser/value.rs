// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::str::FromStr;

use crate::error::ParseError;
use crate::{
    Length,
    LengthUnit,
    Rect,
};

/// Parses a single `<length>`.
pub fn parse_length(text: &str) -> Result<Length, ParseError> {
    let length = svgtypes::Length::from_str(text.trim())?;
    convert_length(length)
}

/// Parses a single `<number>`.
pub fn parse_number(text: &str) -> Result<f64, ParseError> {
    let n = svgtypes::Number::from_str(text.trim())?;
    Ok(n.0)
}

/// Parses a single `<integer>`.
pub fn parse_integer(text: &str) -> Result<i32, ParseError> {
    text.trim().parse().map_err(|_| ParseError::InvalidInteger)
}

/// Parses a rectangle in the `viewBox` format: `x y width height`.
pub fn parse_rect(text: &str) -> Result<Rect, ParseError> {
    let mut list = Vec::with_capacity(4);
    for n in svgtypes::NumberListParser::from(text.trim()) {
        list.push(n?);
    }

    if list.len() != 4 {
        return Err(ParseError::InvalidRectCount(list.len()));
    }

    let rect = Rect::new(list[0], list[1], list[2], list[3]);
    if rect.width < 0.0 || rect.height < 0.0 {
        return Err(ParseError::NegativeRectSize);
    }

    Ok(rect)
}

pub(crate) fn convert_length(length: svgtypes::Length) -> Result<Length, ParseError> {
    let unit = match length.unit {
        svgtypes::LengthUnit::None => LengthUnit::None,
        svgtypes::LengthUnit::Em => LengthUnit::Em,
        svgtypes::LengthUnit::Ex => LengthUnit::Ex,
        svgtypes::LengthUnit::Px => LengthUnit::Px,
        svgtypes::LengthUnit::In => LengthUnit::In,
        svgtypes::LengthUnit::Cm => LengthUnit::Cm,
        svgtypes::LengthUnit::Mm => LengthUnit::Mm,
        svgtypes::LengthUnit::Pt => LengthUnit::Pt,
        svgtypes::LengthUnit::Pc => LengthUnit::Pc,
        svgtypes::LengthUnit::Percent => LengthUnit::Percent,
        #[allow(unreachable_patterns)]
        _ => return Err(ParseError::UnsupportedUnit),
    };

    Ok(Length::new(length.number, unit))
}


#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_length {
        ($name:ident, $text:expr, $result:expr) => (
            #[test]
            fn $name() {
                assert_eq!(parse_length($text).unwrap(), $result);
            }
        )
    }

    test_length!(parse_length_1, "1", Length::new(1.0, LengthUnit::None));
    test_length!(parse_length_2, " 1.5mm ", Length::new(1.5, LengthUnit::Mm));
    test_length!(parse_length_3, "10pt", Length::new(10.0, LengthUnit::Pt));
    test_length!(parse_length_4, "-5%", Length::new(-5.0, LengthUnit::Percent));
    test_length!(parse_length_5, "2em", Length::new(2.0, LengthUnit::Em));

    #[test]
    fn parse_length_err_1() {
        assert!(parse_length("10q").is_err());
        assert!(parse_length("").is_err());
    }

    #[test]
    fn parse_integer_1() {
        assert_eq!(parse_integer(" 42 "), Ok(42));
        assert_eq!(parse_integer("-7"), Ok(-7));
        assert_eq!(parse_integer("1.5"), Err(ParseError::InvalidInteger));
    }

    #[test]
    fn parse_rect_1() {
        assert_eq!(parse_rect("0 0 100 50"), Ok(Rect::new(0.0, 0.0, 100.0, 50.0)));
        assert_eq!(parse_rect("0,0,100,50"), Ok(Rect::new(0.0, 0.0, 100.0, 50.0)));
    }

    #[test]
    fn parse_rect_err_1() {
        assert_eq!(parse_rect("0 0 100"), Err(ParseError::InvalidRectCount(3)));
        assert_eq!(parse_rect("0 0 -1 5"), Err(ParseError::NegativeRectSize));
    }
}
