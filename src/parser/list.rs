// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::error::ParseError;
use super::value::convert_length;
use super::{
    LengthListHandler,
    NumberListHandler,
    PointsHandler,
};

/// Parses a `<list-of-lengths>`.
pub fn parse_length_list<H: LengthListHandler>(text: &str, handler: &mut H)
    -> Result<(), ParseError>
{
    handler.start_length_list();
    for length in svgtypes::LengthListParser::from(text.trim()) {
        handler.length_value(convert_length(length?)?);
    }
    handler.end_length_list();

    Ok(())
}

/// Parses a `<list-of-numbers>`.
pub fn parse_number_list<H: NumberListHandler>(text: &str, handler: &mut H)
    -> Result<(), ParseError>
{
    handler.start_number_list();
    for n in svgtypes::NumberListParser::from(text.trim()) {
        handler.number_value(n?);
    }
    handler.end_number_list();

    Ok(())
}

/// Parses a `points` value.
///
/// Pairs are reported as they are read. An odd trailing coordinate
/// is an error, reported before `end_points`.
pub fn parse_points<H: PointsHandler>(text: &str, handler: &mut H) -> Result<(), ParseError> {
    handler.start_points();

    let mut count = 0;
    let mut x = None;
    for n in svgtypes::NumberListParser::from(text.trim()) {
        let n = n?;
        count += 1;
        match x.take() {
            Some(x) => handler.point(x, n),
            None => x = Some(n),
        }
    }

    if x.is_some() {
        return Err(ParseError::OddCoordinateCount(count));
    }

    handler.end_points();

    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Length, LengthUnit};

    #[derive(Default)]
    struct Collector {
        events: Vec<String>,
    }

    impl LengthListHandler for Collector {
        fn start_length_list(&mut self) { self.events.push("start".to_string()); }
        fn length_value(&mut self, length: Length) { self.events.push(length.to_string()); }
        fn end_length_list(&mut self) { self.events.push("end".to_string()); }
    }

    impl NumberListHandler for Collector {
        fn number_value(&mut self, number: f64) { self.events.push(number.to_string()); }
    }

    impl PointsHandler for Collector {
        fn start_points(&mut self) { self.events.push("start".to_string()); }
        fn point(&mut self, x: f64, y: f64) { self.events.push(format!("{};{}", x, y)); }
        fn end_points(&mut self) { self.events.push("end".to_string()); }
    }

    #[test]
    fn length_list_1() {
        let mut c = Collector::default();
        parse_length_list("10 20mm, 5%", &mut c).unwrap();
        assert_eq!(c.events, vec!["start", "10", "20mm", "5%", "end"]);
    }

    #[test]
    fn length_list_empty_1() {
        let mut c = Collector::default();
        parse_length_list("  ", &mut c).unwrap();
        assert_eq!(c.events, vec!["start", "end"]);
    }

    #[test]
    fn length_list_err_1() {
        let mut c = Collector::default();
        assert!(parse_length_list("10 abc", &mut c).is_err());
        assert_eq!(c.events.last().map(|s| s.as_str()), Some("10"));
    }

    #[test]
    fn length_list_pt_1() {
        let mut c = Collector::default();
        parse_length_list("12pt", &mut c).unwrap();
        assert_eq!(c.events[1], Length::new(12.0, LengthUnit::Pt).to_string());
    }

    #[test]
    fn number_list_1() {
        let mut c = Collector::default();
        parse_number_list("1,2.5 -3", &mut c).unwrap();
        assert_eq!(c.events, vec!["1", "2.5", "-3"]);
    }

    #[test]
    fn points_1() {
        let mut c = Collector::default();
        parse_points("0,0 10,20", &mut c).unwrap();
        assert_eq!(c.events, vec!["start", "0;0", "10;20", "end"]);
    }

    #[test]
    fn points_odd_1() {
        let mut c = Collector::default();
        assert_eq!(parse_points("0,0 10", &mut c), Err(ParseError::OddCoordinateCount(3)));
        assert_eq!(c.events, vec!["start", "0;0"]);
    }

    #[test]
    fn points_empty_1() {
        let mut c = Collector::default();
        parse_points("", &mut c).unwrap();
        assert_eq!(c.events, vec!["start", "end"]);
    }
}
