// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.


#[macro_use] extern crate pretty_assertions;

extern crate svglive;

use std::f64;

use svglive::{
    AttributeBinding,
    AttributeInitializer,
    Direction,
    Document,
    Element,
    ElementType,
    Error,
    ErrorKind,
    Length,
    LengthUnit,
    NoContext,
    ParseError,
    Rect,
    Validity,
    Viewport,
};

fn element(tag_name: &str) -> (Document, Element) {
    let mut doc = Document::new();
    let mut init = AttributeInitializer::new();
    init.add_entry("", "", "x", "0");
    let ty = ElementType::new(tag_name, init);
    let el = doc.create_element(&ty);
    (doc, el)
}

#[test]
fn length_1() {
    let (_doc, el) = element("rect");
    el.set_attribute("width", "10mm");
    let width = el.length("width").unwrap();

    assert_eq!(width.base_val().unwrap(), Length::new(10.0, LengthUnit::Mm));
    assert_eq!(width.parse_count(), 1);

    width.base_val().unwrap();
    assert_eq!(width.parse_count(), 1);
}

#[test]
fn length_default_from_element_type_1() {
    let (_doc, el) = element("rect");
    let x = el.length("x").unwrap();

    assert_eq!(x.base_val().unwrap(), Length::zero());
    assert_eq!(el.is_specified("x"), false);

    x.set_base_val(Length::new(5.0, LengthUnit::Px)).unwrap();
    assert_eq!(el.attribute("x"), Some("5px".to_string()));
    assert_eq!(el.is_specified("x"), true);
}

#[test]
fn length_binding_default_1() {
    let (_doc, el) = element("rect");
    let width = el.length(AttributeBinding::new("width").with_default("100%")).unwrap();
    assert_eq!(width.base_val().unwrap(), Length::new(100.0, LengthUnit::Percent));
}

#[test]
fn missing_value_1() {
    let (_doc, el) = element("rect");
    let width = el.length("width").unwrap();

    let err = width.base_val().unwrap_err();
    assert_eq!(err, Error::MissingValue("width".to_string()));
    assert_eq!(err.kind(), ErrorKind::InvalidState);
    assert_eq!(err.message_key(), "attribute.missing");
    assert_eq!(err.args(), vec!["width".to_string()]);
}

#[test]
fn external_invalidation_1() {
    let (_doc, el) = element("rect");
    el.set_attribute("width", "1");
    let width = el.length("width").unwrap();
    width.base_val().unwrap();

    width.set_base_val(Length::new_number(2.0)).unwrap();
    assert_eq!(width.validity(), Validity::Valid);

    el.set_attribute("width", "3cm");
    assert_eq!(width.validity(), Validity::Invalid);
    assert_eq!(width.base_val().unwrap(), Length::new(3.0, LengthUnit::Cm));
    assert_eq!(width.parse_count(), 2);
}

#[test]
fn non_negative_1() {
    let (_doc, el) = element("rect");
    el.set_attribute("width", "-5");
    let width = el.length(AttributeBinding::new("width").non_negative()).unwrap();

    match width.base_val().unwrap_err() {
        Error::MalformedValue { cause, .. } => assert_eq!(cause, ParseError::NegativeValue),
        _ => unreachable!(),
    }

    assert!(width.set_base_val(Length::new_number(-1.0)).is_err());
    assert_eq!(el.attribute("width"), Some("-5".to_string()));

    width.set_base_val(Length::new_number(1.0)).unwrap();
    assert_eq!(el.attribute("width"), Some("1".to_string()));
}

#[test]
fn user_units_1() {
    let (_doc, el) = element("rect");
    el.set_attribute("width", "1in");
    let width = el.length("width").unwrap();

    assert_eq!(width.value(&NoContext).unwrap(), 96.0);

    width.set_value(48.0, &NoContext).unwrap();
    assert_eq!(el.attribute("width"), Some("0.5in".to_string()));
}

#[test]
fn user_units_relative_1() {
    let (_doc, el) = element("rect");
    el.set_attribute("width", "50%");
    let width = el.length(AttributeBinding::new("width").direction(Direction::Horizontal)).unwrap();

    let err = width.value(&NoContext).unwrap_err();
    assert_eq!(err, Error::UnresolvableUnit(LengthUnit::Percent));

    let vp = Viewport::new(200.0, 100.0);
    assert_eq!(width.value(&vp).unwrap(), 100.0);

    width.convert_to_specified_units(LengthUnit::Px, &vp).unwrap();
    assert_eq!(el.attribute("width"), Some("100px".to_string()));
}

#[test]
fn specified_units_1() {
    let (_doc, el) = element("rect");
    el.set_attribute("width", "2em");
    let width = el.length("width").unwrap();

    width.set_value_in_specified_units(3.0).unwrap();
    assert_eq!(el.attribute("width"), Some("3em".to_string()));

    width.new_value_specified_units(LengthUnit::Pt, 12.0).unwrap();
    assert_eq!(el.attribute("width"), Some("12pt".to_string()));
}

#[test]
fn set_value_as_string_1() {
    let (_doc, el) = element("rect");
    let width = el.length("width").unwrap();

    width.set_value_as_string(" 4pc ").unwrap();
    assert_eq!(el.attribute("width"), Some("4pc".to_string()));

    assert!(width.set_value_as_string("4 pc").is_err());
    assert_eq!(el.attribute("width"), Some("4pc".to_string()));
}

#[test]
fn modify_1() {
    let (_doc, el) = element("rect");
    let x = el.length("x").unwrap();
    x.modify(|len| len.number += 2.5).unwrap();
    assert_eq!(el.attribute("x"), Some("2.5".to_string()));
}

#[test]
fn number_1() {
    let (_doc, el) = element("stop");
    el.set_attribute("offset", "0.25");
    let offset = el.number("offset").unwrap();

    assert_eq!(offset.base_val().unwrap(), 0.25);
    offset.set_base_val(0.75).unwrap();
    assert_eq!(el.attribute("offset"), Some("0.75".to_string()));
}

#[test]
fn integer_1() {
    let (_doc, el) = element("feTurbulence");
    el.set_attribute("numOctaves", "3");
    let octaves = el.integer("numOctaves").unwrap();

    assert_eq!(octaves.base_val().unwrap(), 3);
    octaves.set_base_val(-2).unwrap();
    assert_eq!(el.attribute("numOctaves"), Some("-2".to_string()));

    el.set_attribute("numOctaves", "2.5");
    assert!(octaves.base_val().is_err());
}

#[test]
fn rect_1() {
    let (_doc, el) = element("svg");
    el.set_attribute("viewBox", "0 0 100 50");
    let view_box = el.rect("viewBox").unwrap();

    assert_eq!(view_box.base_val().unwrap(), Rect::new(0.0, 0.0, 100.0, 50.0));

    view_box.modify(|r| r.width = 200.0).unwrap();
    assert_eq!(el.attribute("viewBox"), Some("0 0 200 50".to_string()));
}

#[test]
fn rect_malformed_1() {
    let (_doc, el) = element("svg");
    let view_box = el.rect("viewBox").unwrap();

    el.set_attribute("viewBox", "0 0 100");
    match view_box.base_val().unwrap_err() {
        Error::MalformedValue { cause, .. } => assert_eq!(cause, ParseError::InvalidRectCount(3)),
        _ => unreachable!(),
    }

    el.set_attribute("viewBox", "0 0 -1 10");
    match view_box.base_val().unwrap_err() {
        Error::MalformedValue { cause, .. } => assert_eq!(cause, ParseError::NegativeRectSize),
        _ => unreachable!(),
    }
}

static UNITS: &[&str] = &["", "userSpaceOnUse", "objectBoundingBox"];

#[test]
fn enumeration_1() {
    let (_doc, el) = element("mask");
    let units = el.enumeration("maskUnits", UNITS).unwrap();

    assert_eq!(units.base_val().unwrap(), 0);
    assert_eq!(units.token().unwrap(), None);

    el.set_attribute("maskUnits", "objectBoundingBox");
    assert_eq!(units.base_val().unwrap(), 2);
    assert_eq!(units.token().unwrap(), Some("objectBoundingBox"));

    el.set_attribute("maskUnits", "unknown");
    assert_eq!(units.base_val().unwrap(), 0);
}

#[test]
fn enumeration_default_1() {
    let (_doc, el) = element("mask");
    let binding = AttributeBinding::new("maskUnits").with_default("userSpaceOnUse");
    let units = el.enumeration(binding, UNITS).unwrap();
    assert_eq!(units.base_val().unwrap(), 1);
}

#[test]
fn enumeration_set_1() {
    let (_doc, el) = element("mask");
    let units = el.enumeration("maskUnits", UNITS).unwrap();

    units.set_base_val(2).unwrap();
    assert_eq!(el.attribute("maskUnits"), Some("objectBoundingBox".to_string()));
    assert_eq!(units.validity(), Validity::Valid);

    let err = units.set_base_val(0).unwrap_err();
    assert_eq!(err, Error::InvalidEnumeration { attribute: "maskUnits".to_string(), index: 0 });
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    assert!(units.set_base_val(3).is_err());
    assert_eq!(el.attribute("maskUnits"), Some("objectBoundingBox".to_string()));
}

#[test]
fn enumeration_tokens_mismatch_1() {
    static OTHER: &[&str] = &["", "a", "b"];

    let (_doc, el) = element("mask");
    el.enumeration("maskUnits", UNITS).unwrap();
    assert!(el.enumeration("maskUnits", UNITS).is_ok());
    assert_eq!(el.enumeration("maskUnits", OTHER).unwrap_err(),
               Error::BindingMismatch("maskUnits".to_string()));
}

#[test]
fn set_value_on_malformed_1() {
    let (_doc, el) = element("rect");
    el.set_attribute("width", "5mm garbage");
    let width = el.length("width").unwrap();

    match width.set_value_in_specified_units(3.0).unwrap_err() {
        Error::MalformedValue { value, .. } => assert_eq!(value, "5mm garbage"),
        _ => unreachable!(),
    }

    assert!(width.set_value(3.0, &NoContext).is_err());
    assert_eq!(el.attribute("width"), Some("5mm garbage".to_string()));
}

#[test]
fn set_value_on_missing_1() {
    let (_doc, el) = element("rect");
    let width = el.length("width").unwrap();

    width.set_value_in_specified_units(3.0).unwrap();
    assert_eq!(el.attribute("width"), Some("3".to_string()));
}

#[test]
fn non_finite_value_1() {
    let (_doc, el) = element("rect");
    el.set_attribute("width", "5mm");
    el.set_attribute("opacity", "1");
    el.set_attribute("viewBox", "0 0 10 10");

    let width = el.length("width").unwrap();
    assert_eq!(width.set_base_val(Length::new(f64::INFINITY, LengthUnit::Mm)),
               Err(Error::NonFiniteValue));
    assert!(width.set_value_in_specified_units(f64::NAN).is_err());
    assert_eq!(width.base_val().unwrap(), Length::new(5.0, LengthUnit::Mm));

    let opacity = el.number("opacity").unwrap();
    assert_eq!(opacity.set_base_val(f64::NAN), Err(Error::NonFiniteValue));

    let view_box = el.rect("viewBox").unwrap();
    assert!(view_box.set_base_val(Rect::new(0.0, 0.0, f64::INFINITY, 1.0)).is_err());

    assert_eq!(el.attribute("width"), Some("5mm".to_string()));
    assert_eq!(el.attribute("opacity"), Some("1".to_string()));
    assert_eq!(el.attribute("viewBox"), Some("0 0 10 10".to_string()));
}

#[test]
fn dropped_element_1() {
    let (doc, el) = element("mask");
    el.set_attribute("width", "5mm");
    let width = el.length("width").unwrap();
    let units = el.enumeration("maskUnits", UNITS).unwrap();
    drop(el);
    drop(doc);

    assert_eq!(width.base_val(), Err(Error::DetachedElement("width".to_string())));
    assert!(width.set_base_val(Length::zero()).is_err());
    assert_eq!(width.validity(), Validity::Unparsed);

    assert_eq!(units.base_val(), Err(Error::DetachedElement("maskUnits".to_string())));
    assert!(units.set_base_val(1).is_err());
}
