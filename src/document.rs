// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;
use std::rc::Rc;

use slab::Slab;

use crate::{
    Element,
    ElementType,
    WriteBuffer,
    WriteOptions,
};

/// Container of [`Element`]s.
///
/// You can create new [`Element`]s only through the [`Document`].
///
/// [`Document`]: struct.Document.html
/// [`Element`]: struct.Element.html
pub struct Document {
    storage: Slab<Element>,
}

impl Document {
    /// Constructs a new `Document`.
    pub fn new() -> Document {
        Document {
            storage: Slab::new(),
        }
    }

    /// Constructs a new [`Element`] of the specified type.
    ///
    /// The element gets an unspecified attribute for each
    /// default value of its type.
    ///
    /// # Examples
    ///
    /// ```
    /// use svglive::{AttributeInitializer, Document, ElementType};
    ///
    /// let mut init = AttributeInitializer::new();
    /// init.add_entry("", "", "x", "0");
    /// let ty = ElementType::new("rect", init);
    ///
    /// let mut doc = Document::new();
    /// let rect = doc.create_element(&ty);
    /// assert_eq!(rect.attribute("x"), Some("0".to_string()));
    /// assert_eq!(rect.is_specified("x"), false);
    /// ```
    ///
    /// [`Element`]: struct.Element.html
    pub fn create_element(&mut self, element_type: &Rc<ElementType>) -> Element {
        let element = Element::new(element_type);
        let key = self.storage.insert(element.clone());
        element.set_storage_key(Some(key));
        element
    }

    /// Removes the [`Element`] from the document.
    ///
    /// Live attribute values and observers of the element are dropped.
    /// Existing element handles stay valid, but the element no longer
    /// belongs to the document.
    ///
    /// [`Element`]: struct.Element.html
    pub fn remove_element(&mut self, element: &Element) {
        let key = match element.storage_key() {
            Some(key) => key,
            None => return,
        };

        if self.storage.get(key) != Some(element) {
            return;
        }

        self.storage.remove(key);
        element.set_storage_key(None);
        element.detach();
    }

    /// Returns an iterator over the document elements.
    pub fn elements<'a>(&'a self) -> impl Iterator<Item = Element> + 'a {
        self.storage.iter().map(|(_, e)| e.clone())
    }

    /// Returns the amount of elements in the document.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if the document has no elements.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

impl Default for Document {
    fn default() -> Self {
        Document::new()
    }
}

impl WriteBuffer for Document {
    fn write_buf_opt(&self, opt: &WriteOptions, buf: &mut Vec<u8>) {
        for (i, (_, element)) in self.storage.iter().enumerate() {
            if i != 0 {
                buf.push(b'\n');
            }

            element.write_buf_opt(opt, buf);
        }
    }
}

impl_display!(Document);

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Document({} elements)", self.len())
    }
}
