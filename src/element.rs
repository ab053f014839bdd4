// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::any::Any;
use std::cell::{Ref, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::error::Result;
use crate::live::{
    EnumData,
    ListData,
    ValueData,
};
use crate::{
    Attribute,
    AttributeBinding,
    Attributes,
    ElementType,
    Error,
    ItemKind,
    Length,
    LiveEnumeration,
    LiveList,
    LiveValue,
    QName,
    QNameRef,
    Rect,
    ValueType,
    WriteBuffer,
    WriteOptions,
};

/// Receiver of attribute change notifications.
///
/// All methods have empty default implementations.
pub trait AttributeObserver {
    /// Called after a new attribute was added.
    fn attribute_added(&self, _name: &QName, _value: &str) {}

    /// Called after an existing attribute was changed.
    ///
    /// Also called when a removed attribute was replaced by its default value.
    fn attribute_modified(&self, _name: &QName, _old: &str, _new: &str) {}

    /// Called after an attribute was removed.
    fn attribute_removed(&self, _name: &QName, _old: &str) {}
}

enum Mutation<'a> {
    Added(&'a str),
    Modified(&'a str, &'a str),
    Removed(&'a str),
}

impl<'a> Mutation<'a> {
    fn dispatch(&self, observer: &dyn AttributeObserver, name: &QName) {
        match *self {
            Mutation::Added(value) => observer.attribute_added(name, value),
            Mutation::Modified(old, new) => observer.attribute_modified(name, old, new),
            Mutation::Removed(old) => observer.attribute_removed(name, old),
        }
    }
}

struct LiveEntry {
    observer: Rc<dyn AttributeObserver>,
    object: Rc<dyn Any>,
}

pub(crate) struct ElementData {
    pub storage_key: Option<usize>,
    element_type: Rc<ElementType>,
    attributes: Attributes,
    live: HashMap<QName, LiveEntry>,
    observers: Vec<Rc<dyn AttributeObserver>>,
}

/// Representation of an SVG element.
///
/// A cheap, cloneable handle. Two handles are equal when they point
/// to the same element.
///
/// Elements are created by a [`Document`].
///
/// [`Document`]: struct.Document.html
#[derive(Clone)]
pub struct Element(Rc<RefCell<ElementData>>);

/// A non-owning element reference.
#[derive(Clone)]
pub(crate) struct WeakElement(Weak<RefCell<ElementData>>);

impl WeakElement {
    pub fn upgrade(&self) -> Option<Element> {
        self.0.upgrade().map(Element)
    }
}

impl Element {
    pub(crate) fn new(element_type: &Rc<ElementType>) -> Element {
        let mut attributes = Attributes::new();
        element_type.initializer().initialize_attributes(&mut attributes);

        Element(Rc::new(RefCell::new(ElementData {
            storage_key: None,
            element_type: element_type.clone(),
            attributes,
            live: HashMap::new(),
            observers: Vec::new(),
        })))
    }

    pub(crate) fn downgrade(&self) -> WeakElement {
        WeakElement(Rc::downgrade(&self.0))
    }

    pub(crate) fn set_storage_key(&self, key: Option<usize>) {
        self.0.borrow_mut().storage_key = key;
    }

    pub(crate) fn storage_key(&self) -> Option<usize> {
        self.0.borrow().storage_key
    }

    /// Drops all live attribute values and observers.
    pub(crate) fn detach(&self) {
        let mut d = self.0.borrow_mut();
        d.live.clear();
        d.observers.clear();
    }

    /// Returns the element type.
    pub fn element_type(&self) -> Rc<ElementType> {
        self.0.borrow().element_type.clone()
    }

    /// Returns the tag name.
    pub fn tag_name(&self) -> String {
        self.0.borrow().element_type.tag_name().to_string()
    }

    /// Returns a reference to the attributes list.
    ///
    /// # Panics
    ///
    /// Panics if the element's attributes are being modified.
    pub fn attributes(&self) -> Ref<Attributes> {
        Ref::map(self.0.borrow(), |d| &d.attributes)
    }

    /// Returns a copy of the attribute text.
    ///
    /// Unspecified attributes are returned too.
    pub fn attribute<'a, N>(&self, name: N) -> Option<String>
        where QNameRef<'a>: From<N>
    {
        self.0.borrow().attributes.get_value(name).map(|v| v.to_string())
    }

    /// Returns a copy of the attribute node.
    pub fn attribute_node<'a, N>(&self, name: N) -> Option<Attribute>
        where QNameRef<'a>: From<N>
    {
        self.0.borrow().attributes.get(name).cloned()
    }

    /// Returns `true` if the element has such attribute, specified or not.
    pub fn has_attribute<'a, N>(&self, name: N) -> bool
        where QNameRef<'a>: From<N>
    {
        self.0.borrow().attributes.contains(name)
    }

    /// Returns `true` if the element has such attribute and it was set explicitly.
    pub fn is_specified<'a, N>(&self, name: N) -> bool
        where QNameRef<'a>: From<N>
    {
        match self.0.borrow().attributes.get(name) {
            Some(attr) => attr.specified,
            None => false,
        }
    }

    /// Sets a specified attribute and notifies live values and observers.
    ///
    /// # Examples
    ///
    /// ```
    /// use svglive::{AttributeInitializer, Document, ElementType};
    ///
    /// let mut doc = Document::new();
    /// let ty = ElementType::new("polyline", AttributeInitializer::new());
    /// let el = doc.create_element(&ty);
    ///
    /// let points = el.points("points").unwrap();
    /// el.set_attribute("points", "0,0 10,10");
    /// assert_eq!(points.count().unwrap(), 2);
    /// ```
    pub fn set_attribute<'a, N, V>(&self, name: N, value: V)
        where QNameRef<'a>: From<N>, V: Into<String>
    {
        let attr = Attribute::new(name, value);
        let name = attr.name.clone();
        let new = attr.value.clone();

        let old = self.0.borrow_mut().attributes.insert(attr);
        match old {
            Some(old) => self.notify(&name, Mutation::Modified(&old.value, &new)),
            None => self.notify(&name, Mutation::Added(&new)),
        }
    }

    /// Removes an attribute.
    ///
    /// When the element type has a default value for this attribute,
    /// it is restored as an unspecified attribute and a modification
    /// is reported instead of a removal.
    pub fn remove_attribute<'a, N>(&self, name: N)
        where QNameRef<'a>: From<N>
    {
        let old = self.0.borrow_mut().attributes.remove(name);
        if let Some(old) = old {
            self.restore_default(old);
        }
    }

    fn restore_default(&self, old: Attribute) {
        let name = old.name.as_ref();
        let default = self.element_type().initializer().resolve_default(name).map(|v| v.to_string());
        match default {
            Some(value) => {
                let attr = Attribute::new_unspecified(name, value.as_str());
                self.0.borrow_mut().attributes.insert(attr);
                self.notify(&old.name, Mutation::Modified(&old.value, &value));
            }
            None => {
                self.notify(&old.name, Mutation::Removed(&old.value));
            }
        }
    }

    /// Registers an attribute change observer.
    pub fn add_observer(&self, observer: Rc<dyn AttributeObserver>) {
        self.0.borrow_mut().observers.push(observer);
    }

    fn notify(&self, name: &QName, mutation: Mutation) {
        // Collect receivers first, so they can access the element.
        let (live, observers) = {
            let d = self.0.borrow();
            let live = d.live.get(name).map(|e| e.observer.clone());
            (live, d.observers.clone())
        };

        if let Some(ref live) = live {
            mutation.dispatch(&**live, name);
        }

        for observer in &observers {
            mutation.dispatch(&**observer, name);
        }
    }

    fn live_object<T, F>(&self, name: &QName, create: F) -> Result<Rc<T>>
        where T: AttributeObserver + Any, F: FnOnce() -> T
    {
        let cached = self.0.borrow().live.get(name).map(|e| e.object.clone());
        if let Some(object) = cached {
            return object.downcast::<T>().map_err(|_| Error::BindingMismatch(name.to_string()));
        }

        let object = Rc::new(create());
        self.0.borrow_mut().live.insert(name.clone(), LiveEntry {
            observer: object.clone(),
            object: object.clone(),
        });

        Ok(object)
    }

    fn live_list(&self, binding: AttributeBinding, kind: ItemKind) -> Result<LiveList> {
        let name = binding.name().clone();
        let data = self.live_object(&name, || ListData::new(self, binding, kind))?;
        if data.kind() != kind {
            return Err(Error::BindingMismatch(name.to_string()));
        }

        Ok(LiveList::from_data(data))
    }

    fn live_value<T: ValueType>(&self, binding: AttributeBinding) -> Result<LiveValue<T>> {
        let name = binding.name().clone();
        let data = self.live_object(&name, || ValueData::<T>::new(self, binding))?;
        Ok(LiveValue::from_data(data))
    }

    /// Returns a live `<list-of-lengths>` bound to the attribute.
    ///
    /// The same object is returned on each call. The binding options
    /// (default, direction, sign) of the first call are kept, so later
    /// calls may pass just the attribute name.
    ///
    /// # Errors
    ///
    /// - [`BindingMismatch`] when the attribute is already bound as a different type.
    ///
    /// [`BindingMismatch`]: enum.Error.html
    pub fn length_list<B: Into<AttributeBinding>>(&self, binding: B) -> Result<LiveList> {
        self.live_list(binding.into(), ItemKind::Length)
    }

    /// Returns a live `<list-of-numbers>` bound to the attribute.
    pub fn number_list<B: Into<AttributeBinding>>(&self, binding: B) -> Result<LiveList> {
        self.live_list(binding.into(), ItemKind::Number)
    }

    /// Returns a live `points` list bound to the attribute.
    pub fn points<B: Into<AttributeBinding>>(&self, binding: B) -> Result<LiveList> {
        self.live_list(binding.into(), ItemKind::Point)
    }

    /// Returns a live `<transform-list>` bound to the attribute.
    pub fn transform_list<B: Into<AttributeBinding>>(&self, binding: B) -> Result<LiveList> {
        self.live_list(binding.into(), ItemKind::Transform)
    }

    /// Returns a live `<length>` bound to the attribute.
    pub fn length<B: Into<AttributeBinding>>(&self, binding: B) -> Result<LiveValue<Length>> {
        self.live_value(binding.into())
    }

    /// Returns a live `<number>` bound to the attribute.
    pub fn number<B: Into<AttributeBinding>>(&self, binding: B) -> Result<LiveValue<f64>> {
        self.live_value(binding.into())
    }

    /// Returns a live `<integer>` bound to the attribute.
    pub fn integer<B: Into<AttributeBinding>>(&self, binding: B) -> Result<LiveValue<i32>> {
        self.live_value(binding.into())
    }

    /// Returns a live rectangle bound to the attribute.
    pub fn rect<B: Into<AttributeBinding>>(&self, binding: B) -> Result<LiveValue<Rect>> {
        self.live_value(binding.into())
    }

    /// Returns a live enumeration bound to the attribute.
    ///
    /// `tokens[0]` is never matched and represents an unknown value.
    ///
    /// # Errors
    ///
    /// - [`BindingMismatch`] when the attribute is already bound as a different type
    ///   or with a different token table.
    ///
    /// [`BindingMismatch`]: enum.Error.html
    pub fn enumeration<B>(&self, binding: B, tokens: &'static [&'static str])
        -> Result<LiveEnumeration>
        where B: Into<AttributeBinding>
    {
        let binding = binding.into();
        let name = binding.name().clone();
        let data = self.live_object(&name, || EnumData::new(self, binding, tokens))?;
        let enumeration = LiveEnumeration::from_data(data);
        if enumeration.tokens() != tokens {
            return Err(Error::BindingMismatch(name.to_string()));
        }

        Ok(enumeration)
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Element) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl WriteBuffer for Element {
    fn write_buf_opt(&self, opt: &WriteOptions, buf: &mut Vec<u8>) {
        let d = self.0.borrow();

        buf.push(b'<');
        buf.extend_from_slice(d.element_type.tag_name().as_bytes());

        for attr in d.attributes.iter() {
            if !attr.specified && !opt.write_unspecified {
                continue;
            }

            buf.push(b' ');
            attr.write_buf_opt(opt, buf);
        }

        buf.extend_from_slice(b"/>");
    }
}

impl_display!(Element);

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Element({})", self.with_write_opt(&WriteOptions {
            write_unspecified: true,
            .. WriteOptions::default()
        }))
    }
}
