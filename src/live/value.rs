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

use crate::error::{ParseError, Result};
use crate::parser;
use crate::{
    AttributeBinding,
    AttributeObserver,
    Direction,
    Element,
    Error,
    Length,
    LengthUnit,
    QName,
    Rect,
    UnitContext,
    WriteBuffer,
};
use super::binding::Binding;
use super::{
    Cache,
    Validity,
};

/// A type that can be stored in a [`LiveValue`].
///
/// [`LiveValue`]: struct.LiveValue.html
pub trait ValueType: Clone + fmt::Debug + WriteBuffer + 'static {
    /// Parses the value from an attribute text.
    fn parse_value(text: &str) -> ::std::result::Result<Self, ParseError>;

    /// Returns `true` if the value is negative.
    fn is_negative(&self) -> bool {
        false
    }

    /// Returns `true` if the value has no NaN or infinite numbers.
    fn is_finite(&self) -> bool {
        true
    }
}

impl ValueType for Length {
    fn parse_value(text: &str) -> ::std::result::Result<Self, ParseError> {
        parser::parse_length(text)
    }

    fn is_negative(&self) -> bool {
        Length::is_negative(self)
    }

    fn is_finite(&self) -> bool {
        Length::is_finite(self)
    }
}

impl ValueType for f64 {
    fn parse_value(text: &str) -> ::std::result::Result<Self, ParseError> {
        parser::parse_number(text)
    }

    fn is_negative(&self) -> bool {
        *self < 0.0
    }

    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

impl ValueType for i32 {
    fn parse_value(text: &str) -> ::std::result::Result<Self, ParseError> {
        parser::parse_integer(text)
    }

    fn is_negative(&self) -> bool {
        *self < 0
    }
}

impl ValueType for Rect {
    fn parse_value(text: &str) -> ::std::result::Result<Self, ParseError> {
        parser::parse_rect(text)
    }

    fn is_finite(&self) -> bool {
        Rect::is_finite(self)
    }
}


pub(crate) struct ValueData<T: ValueType> {
    binding: Binding,
    cache: RefCell<Cache<T>>,
}

impl<T: ValueType> ValueData<T> {
    pub fn new(element: &Element, binding: AttributeBinding) -> Self {
        ValueData {
            binding: Binding::new(element, binding),
            cache: RefCell::new(Cache::Unparsed),
        }
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

impl<T: ValueType> AttributeObserver for ValueData<T> {
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


/// A live single value: a length, a number, an integer or a rectangle.
///
/// # Examples
///
/// ```
/// use svglive::{AttributeInitializer, AttributeBinding, Document, ElementType,
///               Length, LengthUnit};
///
/// let mut doc = Document::new();
/// let ty = ElementType::new("rect", AttributeInitializer::new());
/// let rect = doc.create_element(&ty);
///
/// let width = rect.length(AttributeBinding::new("width").with_default("0")).unwrap();
/// assert_eq!(width.base_val().unwrap(), Length::new_number(0.0));
///
/// width.set_base_val(Length::new(5.0, LengthUnit::Mm)).unwrap();
/// assert_eq!(rect.attribute("width"), Some("5mm".to_string()));
/// ```
pub struct LiveValue<T: ValueType>(Rc<ValueData<T>>);

impl<T: ValueType> Clone for LiveValue<T> {
    fn clone(&self) -> Self {
        LiveValue(self.0.clone())
    }
}

impl<T: ValueType> LiveValue<T> {
    pub(crate) fn from_data(data: Rc<ValueData<T>>) -> Self {
        LiveValue(data)
    }

    /// Returns a direction of relative lengths.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.0.binding.direction()
    }

    /// Returns the cache state.
    pub fn validity(&self) -> Validity {
        self.0.cache.borrow().validity()
    }

    /// Returns how many times the attribute text was parsed.
    pub fn parse_count(&self) -> usize {
        self.0.binding.parse_count()
    }

    fn check_sign(&self, value: T) -> ::std::result::Result<T, ParseError> {
        if self.0.binding.is_non_negative() && value.is_negative() {
            return Err(ParseError::NegativeValue);
        }

        Ok(value)
    }

    fn revalidate(&self) -> Result<()> {
        if self.0.cache.borrow().is_valid() {
            return Ok(());
        }

        let text = match self.0.binding.text()? {
            Some(text) => text,
            None => return Err(Error::MissingValue(self.0.binding.name().to_string())),
        };

        self.0.binding.count_parse(&text);

        let value = T::parse_value(&text).and_then(|v| self.check_sign(v));
        match value {
            Ok(v) => {
                *self.0.cache.borrow_mut() = Cache::Valid(v);
                Ok(())
            }
            Err(e) => Err(self.0.binding.malformed(&text, e)),
        }
    }

    /// Returns a copy of the current value.
    ///
    /// # Errors
    ///
    /// - [`MalformedValue`] when the attribute text cannot be parsed.
    /// - [`MissingValue`] when the attribute is absent and has no default.
    ///
    /// [`MalformedValue`]: enum.Error.html
    /// [`MissingValue`]: enum.Error.html
    pub fn base_val(&self) -> Result<T> {
        self.revalidate()?;
        match self.0.cache.borrow().value() {
            Some(v) => Ok(v.clone()),
            None => unreachable!("a value must be valid after revalidation"),
        }
    }

    /// Sets a new value and writes it to the attribute.
    ///
    /// # Errors
    ///
    /// - [`NonFiniteValue`] when the value has a NaN or an infinite number.
    /// - [`MalformedValue`] when the binding is non-negative and the value is negative.
    /// - [`DetachedElement`] when the element no longer exists.
    ///
    /// [`NonFiniteValue`]: enum.Error.html
    /// [`MalformedValue`]: enum.Error.html
    /// [`DetachedElement`]: enum.Error.html
    pub fn set_base_val(&self, value: T) -> Result<()> {
        if !value.is_finite() {
            return Err(Error::NonFiniteValue);
        }

        let mut buf = Vec::new();
        value.write_buf(&mut buf);
        let text = String::from_utf8_lossy(&buf).into_owned();

        let value = match self.check_sign(value) {
            Ok(v) => v,
            Err(e) => return Err(self.0.binding.malformed(&text, e)),
        };

        let _element = self.0.binding.element()?;
        *self.0.cache.borrow_mut() = Cache::Valid(value);
        self.0.binding.write(text)
    }

    /// Modifies the current value and writes it to the attribute.
    pub fn modify<F: FnOnce(&mut T)>(&self, f: F) -> Result<()> {
        let mut value = self.base_val()?;
        f(&mut value);
        self.set_base_val(value)
    }

    /// Parses the text and sets it as a new value.
    ///
    /// The attribute is left unchanged on error.
    pub fn set_value_as_string(&self, text: &str) -> Result<()> {
        let value = T::parse_value(text).map_err(|e| self.0.binding.malformed(text, e))?;
        self.set_base_val(value)
    }
}

impl LiveValue<Length> {
    /// Returns the current value, or zero when the attribute is absent
    /// and has no default.
    fn base_or_zero(&self) -> Result<Length> {
        match self.base_val() {
            Err(Error::MissingValue(_)) => Ok(Length::zero()),
            res => res,
        }
    }

    /// Returns the value in user units.
    ///
    /// # Errors
    ///
    /// - [`UnresolvableUnit`] when the context cannot resolve a relative unit.
    ///
    /// [`UnresolvableUnit`]: enum.Error.html
    pub fn value(&self, ctx: &dyn UnitContext) -> Result<f64> {
        self.base_val()?.to_user_units(self.direction(), ctx)
    }

    /// Sets the value in user units, keeping the current unit.
    ///
    /// # Errors
    ///
    /// - [`UnresolvableUnit`] when the context cannot resolve a relative unit.
    /// - [`MalformedValue`] when the current text cannot be parsed.
    ///
    /// [`UnresolvableUnit`]: enum.Error.html
    /// [`MalformedValue`]: enum.Error.html
    pub fn set_value(&self, value: f64, ctx: &dyn UnitContext) -> Result<()> {
        let mut len = self.base_or_zero()?;
        len.set_user_units(value, self.direction(), ctx)?;
        self.set_base_val(len)
    }

    /// Sets the value in the current units. Never requires a unit context.
    ///
    /// # Errors
    ///
    /// - [`MalformedValue`] when the current text cannot be parsed,
    ///   since its units are unknown.
    ///
    /// [`MalformedValue`]: enum.Error.html
    pub fn set_value_in_specified_units(&self, number: f64) -> Result<()> {
        let mut len = self.base_or_zero()?;
        len.set_value_in_specified_units(number);
        self.set_base_val(len)
    }

    /// Replaces both the value and the units.
    pub fn new_value_specified_units(&self, unit: LengthUnit, number: f64) -> Result<()> {
        self.set_base_val(Length::new(number, unit))
    }

    /// Converts the value to the specified units.
    ///
    /// # Errors
    ///
    /// - [`UnresolvableUnit`] when either unit cannot be resolved.
    ///   The value is left unchanged.
    ///
    /// [`UnresolvableUnit`]: enum.Error.html
    pub fn convert_to_specified_units(&self, unit: LengthUnit, ctx: &dyn UnitContext) -> Result<()> {
        let mut len = self.base_val()?;
        len.convert_to_specified_units(unit, self.direction(), ctx)?;
        self.set_base_val(len)
    }
}

impl<T: ValueType> fmt::Debug for LiveValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LiveValue({}, {:?})", self.0.binding.name(), self.validity())
    }
}
