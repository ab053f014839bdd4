// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::Result;
use crate::{
    AttributeBinding,
    AttributeObserver,
    Element,
    Error,
    QName,
};
use super::binding::Binding;
use super::{
    Cache,
    Validity,
};

pub(crate) struct EnumData {
    binding: Binding,
    tokens: &'static [&'static str],
    cache: RefCell<Cache<u16>>,
}

impl EnumData {
    pub fn new(element: &Element, binding: AttributeBinding, tokens: &'static [&'static str]) -> Self {
        EnumData {
            binding: Binding::new(element, binding),
            tokens,
            cache: RefCell::new(Cache::Unparsed),
        }
    }

    fn index_of(&self, text: &str) -> u16 {
        let text = text.trim();
        self.tokens.iter().skip(1).position(|t| *t == text).map(|i| i as u16 + 1).unwrap_or(0)
    }

    fn invalidate(&self) {
        if self.binding.is_changing() {
            trace!("Ignore a self-caused change of '{}'.", self.binding.name());
            return;
        }

        if self.cache.borrow_mut().invalidate() {
            trace!("Invalidate '{}'.", self.binding.name());
        }
    }
}

impl AttributeObserver for EnumData {
    fn attribute_added(&self, _: &QName, _: &str) {
        self.invalidate();
    }

    fn attribute_modified(&self, _: &QName, _: &str, _: &str) {
        self.invalidate();
    }

    fn attribute_removed(&self, _: &QName, _: &str) {
        self.invalidate();
    }
}


/// A live enumeration.
///
/// Maps an attribute text to an index in a fixed token table.
/// Index 0 is reserved for an unknown value, so `tokens[0]` is never matched.
///
/// # Examples
///
/// ```
/// use svglive::{AttributeInitializer, Document, ElementType};
///
/// static UNITS: &[&str] = &["", "userSpaceOnUse", "objectBoundingBox"];
///
/// let mut doc = Document::new();
/// let ty = ElementType::new("clipPath", AttributeInitializer::new());
/// let clip = doc.create_element(&ty);
/// clip.set_attribute("clipPathUnits", "objectBoundingBox");
///
/// let units = clip.enumeration("clipPathUnits", UNITS).unwrap();
/// assert_eq!(units.base_val().unwrap(), 2);
///
/// units.set_base_val(1).unwrap();
/// assert_eq!(clip.attribute("clipPathUnits"), Some("userSpaceOnUse".to_string()));
/// ```
#[derive(Clone)]
pub struct LiveEnumeration(Rc<EnumData>);

impl LiveEnumeration {
    pub(crate) fn from_data(data: Rc<EnumData>) -> Self {
        LiveEnumeration(data)
    }

    /// Returns the token table.
    pub fn tokens(&self) -> &'static [&'static str] {
        self.0.tokens
    }

    /// Returns the cache state.
    pub fn validity(&self) -> Validity {
        self.0.cache.borrow().validity()
    }

    /// Returns how many times the attribute text was resolved.
    pub fn parse_count(&self) -> usize {
        self.0.binding.parse_count()
    }

    /// Returns the current index.
    ///
    /// An absent attribute or an unknown token is 0.
    ///
    /// # Errors
    ///
    /// - [`DetachedElement`] when the element no longer exists.
    ///
    /// [`DetachedElement`]: enum.Error.html
    pub fn base_val(&self) -> Result<u16> {
        if let Cache::Valid(idx) = *self.0.cache.borrow() {
            return Ok(idx);
        }

        let text = self.0.binding.text()?.unwrap_or_default();
        self.0.binding.count_parse(&text);

        let idx = self.0.index_of(&text);
        *self.0.cache.borrow_mut() = Cache::Valid(idx);
        Ok(idx)
    }

    /// Returns the current token, if known.
    pub fn token(&self) -> Result<Option<&'static str>> {
        Ok(match self.base_val()? {
            0 => None,
            idx => self.0.tokens.get(idx as usize).cloned(),
        })
    }

    /// Sets the index and writes the token to the attribute.
    ///
    /// # Errors
    ///
    /// - [`InvalidEnumeration`] when the index is 0 or outside the table.
    /// - [`DetachedElement`] when the element no longer exists.
    ///
    /// [`InvalidEnumeration`]: enum.Error.html
    /// [`DetachedElement`]: enum.Error.html
    pub fn set_base_val(&self, index: u16) -> Result<()> {
        let token = match self.0.tokens.get(index as usize) {
            Some(token) if index != 0 => *token,
            _ => {
                return Err(Error::InvalidEnumeration {
                    attribute: self.0.binding.name().to_string(),
                    index,
                });
            }
        };

        let _element = self.0.binding.element()?;
        *self.0.cache.borrow_mut() = Cache::Valid(index);
        self.0.binding.write(token.to_string())
    }
}

impl fmt::Debug for LiveEnumeration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LiveEnumeration({}, {:?})", self.0.binding.name(), self.validity())
    }
}
