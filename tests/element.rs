// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.


#[macro_use] extern crate pretty_assertions;

extern crate svglive;

use std::cell::RefCell;
use std::rc::Rc;

use svglive::{
    AttributeInitializer,
    AttributeObserver,
    Document,
    ElementType,
    Length,
    Point,
    QName,
    QNameRef,
    Validity,
    WriteBuffer,
    WriteOptions,
};

const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

fn rect_type() -> Rc<ElementType> {
    let mut init = AttributeInitializer::new();
    init.add_entry("", "", "x", "0");
    init.add_entry("", "", "y", "0");
    init.add_entry(XLINK_NS, "xlink", "type", "simple");
    ElementType::new("rect", init)
}

#[derive(Default)]
struct Log(RefCell<Vec<String>>);

impl Log {
    fn take(&self) -> Vec<String> {
        self.0.borrow_mut().drain(..).collect()
    }
}

impl AttributeObserver for Log {
    fn attribute_added(&self, name: &QName, value: &str) {
        self.0.borrow_mut().push(format!("added {}={}", name, value));
    }

    fn attribute_modified(&self, name: &QName, old: &str, new: &str) {
        self.0.borrow_mut().push(format!("modified {}={}->{}", name, old, new));
    }

    fn attribute_removed(&self, name: &QName, old: &str) {
        self.0.borrow_mut().push(format!("removed {}={}", name, old));
    }
}

#[test]
fn initialize_attributes_1() {
    let mut doc = Document::new();
    let rect = doc.create_element(&rect_type());

    assert_eq!(rect.tag_name(), "rect");
    assert_eq!(rect.attribute("x"), Some("0".to_string()));
    assert_eq!(rect.attribute((XLINK_NS, "type")), Some("simple".to_string()));
    assert_eq!(rect.is_specified("x"), false);
    assert_eq!(rect.attributes().len(), 3);
}

#[test]
fn element_type_is_shared_1() {
    let mut doc = Document::new();
    let ty = rect_type();
    let r1 = doc.create_element(&ty);
    let r2 = doc.create_element(&ty);

    assert!(Rc::ptr_eq(&r1.element_type(), &r2.element_type()));
    assert_eq!(doc.len(), 2);
}

#[test]
fn remove_restores_default_1() {
    let mut doc = Document::new();
    let rect = doc.create_element(&rect_type());
    let log = Rc::new(Log::default());
    rect.add_observer(log.clone());

    rect.set_attribute("x", "10");
    assert_eq!(rect.is_specified("x"), true);

    rect.remove_attribute("x");
    assert_eq!(rect.attribute("x"), Some("0".to_string()));
    assert_eq!(rect.is_specified("x"), false);

    rect.set_attribute("width", "5");
    rect.remove_attribute("width");
    assert_eq!(rect.has_attribute("width"), false);

    rect.remove_attribute("height");

    assert_eq!(log.take(), vec![
        "modified x=0->10",
        "modified x=10->0",
        "added width=5",
        "removed width=5",
    ]);
}

#[test]
fn remove_restores_default_for_live_value_1() {
    let mut doc = Document::new();
    let rect = doc.create_element(&rect_type());
    let x = rect.length("x").unwrap();

    x.set_base_val(Length::new_number(15.0)).unwrap();
    assert_eq!(x.validity(), Validity::Valid);

    rect.remove_attribute("x");
    assert_eq!(x.validity(), Validity::Invalid);
    assert_eq!(x.base_val().unwrap(), Length::zero());
}

#[test]
fn observers_see_self_writes_1() {
    let mut doc = Document::new();
    let rect = doc.create_element(&rect_type());
    rect.set_attribute("points", "1,2");

    let log = Rc::new(Log::default());
    rect.add_observer(log.clone());

    let points = rect.points("points").unwrap();
    points.append(Point::new(3.0, 4.0)).unwrap();

    assert_eq!(log.take(), vec!["modified points=1,2->1,2 3,4"]);
    assert_eq!(points.parse_count(), 1);
}

struct Reader {
    element: svglive::Element,
    seen: RefCell<Vec<usize>>,
}

impl AttributeObserver for Reader {
    fn attribute_modified(&self, _: &QName, _: &str, _: &str) {
        let list = self.element.length_list("x").unwrap();
        self.seen.borrow_mut().push(list.count().unwrap());
    }
}

// Observers run after the live value was invalidated.
#[test]
fn observer_reads_updated_value_1() {
    let mut doc = Document::new();
    let el = doc.create_element(&ElementType::new("text", AttributeInitializer::new()));
    el.set_attribute("x", "1");

    let list = el.length_list("x").unwrap();
    assert_eq!(list.count().unwrap(), 1);

    let reader = Rc::new(Reader { element: el.clone(), seen: RefCell::new(Vec::new()) });
    el.add_observer(reader.clone());

    el.set_attribute("x", "1 2");
    list.append(Length::zero()).unwrap();

    assert_eq!(*reader.seen.borrow(), vec![2, 3]);
}

#[test]
fn remove_restores_namespaced_default_1() {
    let mut doc = Document::new();
    let rect = doc.create_element(&rect_type());

    rect.set_attribute(QNameRef::from((XLINK_NS, "xlink", "type")), "extended");
    assert_eq!(rect.is_specified((XLINK_NS, "type")), true);

    rect.remove_attribute((XLINK_NS, "type"));
    assert_eq!(rect.attribute((XLINK_NS, "type")), Some("simple".to_string()));
    assert_eq!(rect.is_specified((XLINK_NS, "type")), false);
}

#[test]
fn namespaced_attributes_1() {
    let mut doc = Document::new();
    let rect = doc.create_element(&rect_type());

    rect.set_attribute(QNameRef::from((XLINK_NS, "xlink", "href")), "#a");
    assert_eq!(rect.attribute((XLINK_NS, "href")), Some("#a".to_string()));
    assert_eq!(rect.attribute("href"), None);
}

#[test]
fn write_1() {
    let mut doc = Document::new();
    let rect = doc.create_element(&rect_type());
    rect.set_attribute("width", "10");
    rect.set_attribute(QNameRef::from((XLINK_NS, "xlink", "href")), "#a\"b");

    assert_eq!(rect.to_string(), "<rect width=\"10\" xlink:href=\"#a&quot;b\"/>");

    let opt = WriteOptions {
        use_single_quote: true,
        write_unspecified: true,
        .. WriteOptions::default()
    };
    assert_eq!(rect.with_write_opt(&opt).to_string(),
               "<rect x='0' y='0' xlink:type='simple' width='10' xlink:href='#a\"b'/>");
}

#[test]
fn remove_element_1() {
    let mut doc = Document::new();
    let ty = rect_type();
    let r1 = doc.create_element(&ty);
    let r2 = doc.create_element(&ty);

    let log = Rc::new(Log::default());
    r1.add_observer(log.clone());
    let x = r1.length("x").unwrap();

    doc.remove_element(&r1);
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.elements().next(), Some(r2));

    // The element itself is still usable, but is not observed anymore.
    r1.set_attribute("x", "5");
    assert!(log.take().is_empty());
    assert_eq!(x.validity(), Validity::Unparsed);

    // Removing twice is a no-op.
    doc.remove_element(&r1);
    assert_eq!(doc.len(), 1);
}

#[test]
fn document_write_1() {
    let mut doc = Document::new();
    let ty = rect_type();
    doc.create_element(&ty).set_attribute("width", "1");
    doc.create_element(&ty);

    assert_eq!(doc.to_string(), "<rect width=\"1\"/>\n<rect/>");
}
