// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.


/*!
This library keeps structured SVG attribute values in sync with the attribute text.

Here is simple overview of the structure:

- [`Document`]
    - [`Element`]
        - [`ElementType`], shared between elements
            - tag name
            - [`AttributeInitializer`] with attribute defaults
        - [`Attributes`]
        - live attribute values
        - [`AttributeObserver`]s
    - [`Element`]
    - ...

A live value, like [`LiveList`] or [`LiveValue`], presents an attribute text
as a structured object. The text is parsed lazily, on the first access.
Changes made through the live value are written back to the attribute.
Any other attribute change invalidates the live value, so the next access
parses the new text.

```
use svglive::{AttributeInitializer, Document, ElementType, Length, LengthUnit};

let mut doc = Document::new();
let ty = ElementType::new("text", AttributeInitializer::new());
let text = doc.create_element(&ty);
text.set_attribute("x", "10 20 30");

let x = text.length_list("x").unwrap();
x.append(Length::new(5.0, LengthUnit::Mm)).unwrap();
assert_eq!(text.attribute("x"), Some("10 20 30 5mm".to_string()));

text.set_attribute("x", "1 2");
assert_eq!(x.count().unwrap(), 2);
```

&nbsp;

See modules and structs documentation for details.

[`AttributeInitializer`]: struct.AttributeInitializer.html
[`AttributeObserver`]: trait.AttributeObserver.html
[`Attributes`]: struct.Attributes.html
[`Document`]: struct.Document.html
[`Element`]: struct.Element.html
[`ElementType`]: struct.ElementType.html
[`LiveList`]: struct.LiveList.html
[`LiveValue`]: struct.LiveValue.html

*/

#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
extern crate log;
extern crate slab;
extern crate svgtypes;

pub use crate::attribute::Attribute;
pub use crate::attributes::Attributes;
pub use crate::builder::{
    ItemBuilder,
    ListSink,
};
pub use crate::document::Document;
pub use crate::element::{
    AttributeObserver,
    Element,
};
pub use crate::error::{
    Error,
    ErrorKind,
    ParseError,
    Result,
};
pub use crate::initializer::{
    AttributeInitializer,
    ElementType,
};
pub use crate::live::{
    AttributeBinding,
    DefaultValue,
    ListItem,
    LiveEnumeration,
    LiveList,
    LiveValue,
    Validity,
    ValueType,
};
pub use crate::name::{
    QName,
    QNameRef,
};
pub use crate::traits::{
    DisplayWithOptions,
    WriteBuffer,
};
pub use crate::types::*;
pub use crate::write_options::WriteOptions;

#[macro_use]
mod traits;

mod attribute;
mod attributes;
mod builder;
mod document;
mod element;
mod error;
mod initializer;
mod live;
mod name;
mod write_options;

pub mod parser;
pub mod types;
