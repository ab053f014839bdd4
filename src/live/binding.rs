// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::cell::Cell;

use crate::element::WeakElement;
use crate::error::{ParseError, Result};
use crate::{
    Direction,
    Element,
    Error,
    QName,
    QNameRef,
};

/// A default value of a bound attribute.
#[derive(Clone)]
pub enum DefaultValue {
    /// No default. The element type defaults are still used.
    None,
    /// A fixed text.
    Text(String),
    /// A text computed from the element on each use.
    Computed(fn(&Element) -> Option<String>),
}

/// A description of a live attribute.
///
/// # Examples
///
/// ```
/// use svglive::{AttributeBinding, Direction};
///
/// let binding = AttributeBinding::new("width")
///     .with_default("100%")
///     .direction(Direction::Horizontal)
///     .non_negative();
/// assert_eq!(binding.name().local, "width");
/// ```
#[derive(Clone)]
pub struct AttributeBinding {
    name: QName,
    default: DefaultValue,
    direction: Direction,
    non_negative: bool,
}

impl AttributeBinding {
    /// Creates a new binding without a default value.
    pub fn new<'a, N>(name: N) -> Self
        where QNameRef<'a>: From<N>
    {
        AttributeBinding {
            name: QNameRef::from(name).into(),
            default: DefaultValue::None,
            direction: Direction::Other,
            non_negative: false,
        }
    }

    /// Sets a default text, which is used when the attribute is absent.
    pub fn with_default<S: Into<String>>(mut self, text: S) -> Self {
        self.default = DefaultValue::Text(text.into());
        self
    }

    /// Sets a default text producer, which is used when the attribute is absent.
    pub fn with_computed_default(mut self, f: fn(&Element) -> Option<String>) -> Self {
        self.default = DefaultValue::Computed(f);
        self
    }

    /// Sets a direction of relative lengths.
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Rejects negative values.
    pub fn non_negative(mut self) -> Self {
        self.non_negative = true;
        self
    }

    /// Returns the attribute name.
    pub fn name(&self) -> &QName {
        &self.name
    }
}

impl<'a> From<&'a str> for AttributeBinding {
    fn from(name: &'a str) -> Self {
        AttributeBinding::new(name)
    }
}

impl<'a> From<QNameRef<'a>> for AttributeBinding {
    fn from(name: QNameRef<'a>) -> Self {
        AttributeBinding::new(name)
    }
}


/// Sets the self-write flag and restores the previous state on drop.
struct SelfWrite<'a> {
    flag: &'a Cell<bool>,
    prev: bool,
}

impl<'a> SelfWrite<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Self {
        let prev = flag.replace(true);
        SelfWrite { flag, prev }
    }
}

impl<'a> Drop for SelfWrite<'a> {
    fn drop(&mut self) {
        self.flag.set(self.prev);
    }
}


/// An attribute bound to an element.
pub(crate) struct Binding {
    element: WeakElement,
    name: QName,
    default: DefaultValue,
    direction: Direction,
    non_negative: bool,
    changing: Cell<bool>,
    parse_count: Cell<usize>,
}

impl Binding {
    pub fn new(element: &Element, binding: AttributeBinding) -> Self {
        Binding {
            element: element.downgrade(),
            name: binding.name,
            default: binding.default,
            direction: binding.direction,
            non_negative: binding.non_negative,
            changing: Cell::new(false),
            parse_count: Cell::new(0),
        }
    }

    /// Returns the bound element.
    ///
    /// A live object can outlive its element, in which case
    /// `DetachedElement` is returned.
    pub fn element(&self) -> Result<Element> {
        match self.element.upgrade() {
            Some(element) => Ok(element),
            None => {
                warn!("The element of the '{}' live attribute no longer exists.", self.name);
                Err(Error::DetachedElement(self.name.to_string()))
            }
        }
    }

    #[inline]
    pub fn name(&self) -> &QName {
        &self.name
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn is_non_negative(&self) -> bool {
        self.non_negative
    }

    /// Returns the attribute text, the binding default or the element type default.
    pub fn text(&self) -> Result<Option<String>> {
        let element = self.element()?;
        if let Some(text) = element.attribute(&self.name) {
            return Ok(Some(text));
        }

        let text = match self.default {
            DefaultValue::None => None,
            DefaultValue::Text(ref text) => Some(text.clone()),
            DefaultValue::Computed(f) => f(&element),
        };

        Ok(text.or_else(|| {
            element.element_type().initializer().resolve_default(&self.name).map(|v| v.to_string())
        }))
    }

    /// Writes the text to the attribute without invalidating the caller.
    pub fn write(&self, text: String) -> Result<()> {
        let element = self.element()?;

        debug!("Write back '{}' = '{}'.", self.name, text);

        let _guard = SelfWrite::acquire(&self.changing);
        element.set_attribute(&self.name, text);

        Ok(())
    }

    /// Returns `true` while the binding writes its own value.
    #[inline]
    pub fn is_changing(&self) -> bool {
        self.changing.get()
    }

    pub fn count_parse(&self, text: &str) {
        debug!("Parse '{}' = '{}'.", self.name, text);
        self.parse_count.set(self.parse_count.get() + 1);
    }

    #[inline]
    pub fn parse_count(&self) -> usize {
        self.parse_count.get()
    }

    pub fn malformed(&self, text: &str, cause: ParseError) -> Error {
        warn!("Attribute '{}' has an invalid value: '{}'. {}.", self.name, text, cause);

        Error::MalformedValue {
            attribute: self.name.to_string(),
            value: text.to_string(),
            cause,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_write_guard_1() {
        let flag = Cell::new(false);
        {
            let _guard = SelfWrite::acquire(&flag);
            assert!(flag.get());
        }
        assert!(!flag.get());
    }

    #[test]
    fn self_write_guard_nested_1() {
        let flag = Cell::new(false);
        {
            let _outer = SelfWrite::acquire(&flag);
            {
                let _inner = SelfWrite::acquire(&flag);
            }
            assert!(flag.get());
        }
        assert!(!flag.get());
    }
}
