// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;
use std::rc::Rc;

use crate::{
    Attribute,
    Attributes,
    QName,
    QNameRef,
};

/// A table of attribute default values of an element type.
///
/// Defaults are used to synthesize unspecified attributes when an element
/// is created and when a specified attribute is removed.
#[derive(Clone, Default)]
pub struct AttributeInitializer {
    entries: Vec<(QName, String)>,
}

impl AttributeInitializer {
    /// Constructs a new, empty table.
    pub fn new() -> Self {
        AttributeInitializer::default()
    }

    /// Registers a default value.
    ///
    /// A later entry with the same name replaces the previous value
    /// but keeps its registration position.
    pub fn add_entry<S: Into<String>>(&mut self, namespace: &str, prefix: &str, local: &str, value: S) {
        let name = QName::from(QNameRef::from((namespace, prefix, local)));
        let value = value.into();

        match self.entries.iter_mut().find(|e| e.0 == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Returns a default value of the attribute, if any.
    pub fn resolve_default<'a, N>(&self, name: N) -> Option<&str>
        where QNameRef<'a>: From<N>
    {
        let name = QNameRef::from(name);
        self.entries.iter().find(|e| e.0.as_ref() == name).map(|e| e.1.as_str())
    }

    /// Adds unspecified attributes for all entries that are not already present,
    /// in the registration order.
    pub fn initialize_attributes(&self, attrs: &mut Attributes) {
        for &(ref name, ref value) in &self.entries {
            if !attrs.contains(name) {
                attrs.insert(Attribute::new_unspecified(name, value.as_str()));
            }
        }
    }

    /// Returns the number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for AttributeInitializer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.entries.iter().map(|e| (e.0.to_string(), &e.1))).finish()
    }
}

/// An immutable element type configuration.
///
/// Shared between all elements of the same type.
#[derive(Debug)]
pub struct ElementType {
    tag_name: String,
    initializer: AttributeInitializer,
}

impl ElementType {
    /// Constructs a new shared element type.
    pub fn new<S: Into<String>>(tag_name: S, initializer: AttributeInitializer) -> Rc<Self> {
        Rc::new(ElementType {
            tag_name: tag_name.into(),
            initializer,
        })
    }

    /// Returns the tag name.
    #[inline]
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Returns the attribute defaults table.
    #[inline]
    pub fn initializer(&self) -> &AttributeInitializer {
        &self.initializer
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

    fn rect_initializer() -> AttributeInitializer {
        let mut init = AttributeInitializer::new();
        init.add_entry("", "", "x", "0");
        init.add_entry("", "", "y", "0");
        init.add_entry(XLINK_NS, "xlink", "type", "simple");
        init
    }

    #[test]
    fn resolve_default_1() {
        let init = rect_initializer();
        assert_eq!(init.resolve_default("x"), Some("0"));
        assert_eq!(init.resolve_default((XLINK_NS, "type")), Some("simple"));
        assert_eq!(init.resolve_default("type"), None);
        assert_eq!(init.resolve_default("width"), None);
    }

    #[test]
    fn add_entry_replaces_1() {
        let mut init = rect_initializer();
        init.add_entry("", "", "x", "5");
        assert_eq!(init.len(), 3);
        assert_eq!(init.resolve_default("x"), Some("5"));
    }

    #[test]
    fn initialize_attributes_1() {
        let init = rect_initializer();
        let mut attrs = Attributes::new();
        attrs.insert(Attribute::new("y", "10"));
        init.initialize_attributes(&mut attrs);

        let names: Vec<String> = attrs.iter().map(|a| a.name.to_string()).collect();
        assert_eq!(names, vec!["y", "x", "xlink:type"]);
        assert!(attrs.get("y").unwrap().specified);
        assert!(!attrs.get("x").unwrap().specified);
    }
}
