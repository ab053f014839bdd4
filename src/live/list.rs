// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::cell::RefCell;
use std::fmt;
use std::mem;
use std::rc::{Rc, Weak};

use crate::error::Result;
use crate::{
    AttributeBinding,
    AttributeObserver,
    Direction,
    Element,
    Error,
    Item,
    ItemKind,
    Matrix,
    QName,
    Transform,
    WriteBuffer,
};
use super::binding::Binding;
use super::{
    Cache,
    Validity,
};

/// An owner of list items, notified when an item value changes.
pub(crate) trait ItemOwner {
    fn item_changed(&self) -> Result<()>;
}

struct ItemData {
    value: RefCell<Item>,
    owner: RefCell<Option<Weak<dyn ItemOwner>>>,
}

/// An item of a [`LiveList`].
///
/// Changing an attached item updates the list attribute.
/// Items that were removed or replaced, or that belong to an outdated
/// list state, are detached: they keep their value, but changes
/// are no longer written anywhere.
///
/// [`LiveList`]: struct.LiveList.html
#[derive(Clone)]
pub struct ListItem(Rc<ItemData>);

impl ListItem {
    /// Creates a new detached item.
    pub fn new<T: Into<Item>>(value: T) -> Self {
        ListItem(Rc::new(ItemData {
            value: RefCell::new(value.into()),
            owner: RefCell::new(None),
        }))
    }

    fn attached(value: Item, owner: Weak<dyn ItemOwner>) -> Self {
        let item = ListItem::new(value);
        *item.0.owner.borrow_mut() = Some(owner);
        item
    }

    fn detach(&self) {
        *self.0.owner.borrow_mut() = None;
    }

    /// Returns a copy of the item value.
    pub fn value(&self) -> Item {
        *self.0.value.borrow()
    }

    /// Returns the item kind.
    pub fn kind(&self) -> ItemKind {
        self.0.value.borrow().kind()
    }

    /// Returns `true` if the item belongs to a list.
    pub fn is_attached(&self) -> bool {
        match *self.0.owner.borrow() {
            Some(ref owner) => owner.upgrade().is_some(),
            None => false,
        }
    }

    /// Sets a new value.
    ///
    /// # Errors
    ///
    /// - [`WrongItemType`] when the value has a different kind.
    /// - [`NonFiniteValue`] when the value has a NaN or an infinite number.
    /// - [`DetachedElement`] when the list element no longer exists.
    ///   The value is left unchanged.
    ///
    /// [`WrongItemType`]: enum.Error.html
    /// [`NonFiniteValue`]: enum.Error.html
    /// [`DetachedElement`]: enum.Error.html
    pub fn set<T: Into<Item>>(&self, value: T) -> Result<()> {
        let value = value.into();
        check_value(self.kind(), &value)?;

        let old = mem::replace(&mut *self.0.value.borrow_mut(), value);
        if let Err(e) = self.notify() {
            *self.0.value.borrow_mut() = old;
            return Err(e);
        }

        Ok(())
    }

    /// Modifies the value in place.
    ///
    /// # Errors
    ///
    /// Same as [`set`]. The value is left unchanged on error.
    ///
    /// [`set`]: #method.set
    pub fn modify<F: FnOnce(&mut Item)>(&self, f: F) -> Result<()> {
        let mut value = self.value();
        f(&mut value);
        self.set(value)
    }

    fn notify(&self) -> Result<()> {
        let owner = self.0.owner.borrow().as_ref().and_then(|w| w.upgrade());
        match owner {
            Some(owner) => owner.item_changed(),
            None => Ok(()),
        }
    }
}

impl<'a> From<&'a ListItem> for Item {
    fn from(item: &'a ListItem) -> Self {
        item.value()
    }
}

impl fmt::Debug for ListItem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ListItem({:?})", self.value())
    }
}

fn check_kind(expected: ItemKind, actual: ItemKind) -> Result<()> {
    if expected != actual {
        return Err(Error::WrongItemType { expected, actual });
    }

    Ok(())
}

fn check_value(expected: ItemKind, value: &Item) -> Result<()> {
    check_kind(expected, value.kind())?;

    if !value.is_finite() {
        return Err(Error::NonFiniteValue);
    }

    Ok(())
}

fn check_index(index: usize, count: usize) -> Result<usize> {
    if index == 0 || index > count {
        return Err(Error::IndexOutOfRange { index, count });
    }

    Ok(index - 1)
}


pub(crate) struct ListData {
    binding: Binding,
    kind: ItemKind,
    items: RefCell<Cache<Vec<ListItem>>>,
}

impl ListData {
    pub fn new(element: &Element, binding: AttributeBinding, kind: ItemKind) -> Self {
        ListData {
            binding: Binding::new(element, binding),
            kind,
            items: RefCell::new(Cache::Unparsed),
        }
    }

    #[inline]
    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    fn to_text(&self, items: &[ListItem]) -> String {
        let mut buf = Vec::with_capacity(items.len() * 8);
        for (i, item) in items.iter().enumerate() {
            if i != 0 {
                buf.extend_from_slice(self.kind.separator().as_bytes());
            }

            item.value().write_buf(&mut buf);
        }

        String::from_utf8_lossy(&buf).into_owned()
    }

    fn write_back(&self) -> Result<()> {
        let text = match self.items.borrow().value() {
            Some(items) => self.to_text(items),
            None => unreachable!("write-back of an unparsed list"),
        };

        self.binding.write(text)
    }

    fn invalidate(&self) {
        if self.binding.is_changing() {
            trace!("Ignore a self-caused change of '{}'.", self.binding.name());
            return;
        }

        let mut cache = self.items.borrow_mut();
        if cache.invalidate() {
            trace!("Invalidate '{}'.", self.binding.name());
            if let Some(items) = cache.value() {
                for item in items {
                    item.detach();
                }
            }
        }
    }

    fn replace_items(&self, items: Vec<ListItem>) {
        let old = mem::replace(&mut *self.items.borrow_mut(), Cache::Valid(items));
        if let Some(items) = old.value() {
            for item in items {
                item.detach();
            }
        }
    }
}

impl ItemOwner for ListData {
    fn item_changed(&self) -> Result<()> {
        if !self.items.borrow().is_valid() {
            return Ok(());
        }

        self.write_back()
    }
}

impl AttributeObserver for ListData {
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


/// A live list of lengths, numbers, points or transforms.
///
/// Indexes are 1-based.
///
/// A list can outlive its element. After the element is dropped, operations
/// that need the attribute text fail with [`DetachedElement`].
///
/// # Examples
///
/// ```
/// use svglive::{AttributeInitializer, Document, ElementType, Length};
///
/// let mut doc = Document::new();
/// let ty = ElementType::new("text", AttributeInitializer::new());
/// let text = doc.create_element(&ty);
/// text.set_attribute("x", "10 20 30");
///
/// let x = text.length_list("x").unwrap();
/// assert_eq!(x.count().unwrap(), 3);
///
/// x.replace(Length::new_number(99.0), 2).unwrap();
/// assert_eq!(text.attribute("x"), Some("10 99 30".to_string()));
/// ```
///
/// [`DetachedElement`]: enum.Error.html
#[derive(Clone)]
pub struct LiveList(Rc<ListData>);

impl LiveList {
    pub(crate) fn from_data(data: Rc<ListData>) -> Self {
        LiveList(data)
    }

    fn owner(&self) -> Weak<dyn ItemOwner> {
        let owner: Weak<ListData> = Rc::downgrade(&self.0);
        owner
    }

    fn new_item(&self, value: Item) -> ListItem {
        ListItem::attached(value, self.owner())
    }

    /// Returns the item kind.
    #[inline]
    pub fn kind(&self) -> ItemKind {
        self.0.kind
    }

    /// Returns a direction of relative lengths.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.0.binding.direction()
    }

    /// Returns the cache state.
    pub fn validity(&self) -> Validity {
        self.0.items.borrow().validity()
    }

    /// Returns how many times the attribute text was parsed.
    pub fn parse_count(&self) -> usize {
        self.0.binding.parse_count()
    }

    /// Parses the attribute text when the cache is not valid.
    ///
    /// On error the cache is left untouched.
    fn revalidate(&self) -> Result<()> {
        if self.0.items.borrow().is_valid() {
            return Ok(());
        }

        let text = self.0.binding.text()?.unwrap_or_default();
        self.0.binding.count_parse(&text);

        let mut values = Vec::new();
        if let Err(e) = self.0.kind.parse(&text, &mut values) {
            return Err(self.0.binding.malformed(&text, e));
        }

        let items = values.into_iter().map(|v| self.new_item(v)).collect();
        self.0.replace_items(items);

        Ok(())
    }

    /// Runs a mutation over valid items and writes the list back on success.
    fn mutate<T, F>(&self, f: F) -> Result<T>
        where F: FnOnce(&mut Vec<ListItem>) -> Result<T>
    {
        // A cached list is still valid after its element is dropped.
        let _element = self.0.binding.element()?;
        self.revalidate()?;

        let res = {
            let mut cache = self.0.items.borrow_mut();
            match cache.valid_mut() {
                Some(items) => f(items)?,
                None => unreachable!("a list must be valid after revalidation"),
            }
        };

        self.0.write_back()?;
        Ok(res)
    }

    fn check_value(&self, value: &Item) -> Result<()> {
        check_value(self.0.kind, value)
    }

    /// Returns the number of items.
    ///
    /// # Errors
    ///
    /// - [`MalformedValue`] when the attribute text cannot be parsed.
    ///
    /// [`MalformedValue`]: enum.Error.html
    pub fn count(&self) -> Result<usize> {
        self.revalidate()?;
        Ok(self.0.items.borrow().value().map(|items| items.len()).unwrap_or(0))
    }

    /// Returns an item at the 1-based index.
    ///
    /// # Errors
    ///
    /// - [`MalformedValue`] when the attribute text cannot be parsed.
    /// - [`IndexOutOfRange`] when the index is not in the `1..=count` range.
    ///
    /// [`MalformedValue`]: enum.Error.html
    /// [`IndexOutOfRange`]: enum.Error.html
    pub fn item(&self, index: usize) -> Result<ListItem> {
        self.revalidate()?;

        let cache = self.0.items.borrow();
        let items = match cache.value() {
            Some(items) => items,
            None => unreachable!("a list must be valid after revalidation"),
        };

        let idx = check_index(index, items.len())?;
        Ok(items[idx].clone())
    }

    /// Returns copies of all item values.
    pub fn values(&self) -> Result<Vec<Item>> {
        self.revalidate()?;
        Ok(self.0.items.borrow().value().map(|items| {
            items.iter().map(|item| item.value()).collect()
        }).unwrap_or_default())
    }

    /// Inserts a copy of the value before the 1-based index.
    ///
    /// The index is clamped to the `1..=count + 1` range.
    ///
    /// # Errors
    ///
    /// - [`WrongItemType`] when the value kind differs from the list kind.
    /// - [`NonFiniteValue`] when the value has a NaN or an infinite number.
    /// - [`MalformedValue`] when the attribute text cannot be parsed.
    ///
    /// [`WrongItemType`]: enum.Error.html
    /// [`NonFiniteValue`]: enum.Error.html
    /// [`MalformedValue`]: enum.Error.html
    pub fn insert_before<T: Into<Item>>(&self, value: T, index: usize) -> Result<ListItem> {
        let value = value.into();
        self.check_value(&value)?;

        let item = self.new_item(value);
        let new_item = item.clone();
        self.mutate(move |items| {
            let idx = if index == 0 { 0 } else { (index - 1).min(items.len()) };
            items.insert(idx, item);
            Ok(())
        })?;

        Ok(new_item)
    }

    /// Replaces an item at the 1-based index with a copy of the value.
    ///
    /// Returns the new item. The replaced item is detached.
    ///
    /// # Errors
    ///
    /// - [`WrongItemType`] when the value kind differs from the list kind.
    /// - [`NonFiniteValue`] when the value has a NaN or an infinite number.
    /// - [`MalformedValue`] when the attribute text cannot be parsed.
    /// - [`IndexOutOfRange`] when the index is not in the `1..=count` range.
    ///
    /// [`WrongItemType`]: enum.Error.html
    /// [`NonFiniteValue`]: enum.Error.html
    /// [`MalformedValue`]: enum.Error.html
    /// [`IndexOutOfRange`]: enum.Error.html
    pub fn replace<T: Into<Item>>(&self, value: T, index: usize) -> Result<ListItem> {
        let value = value.into();
        self.check_value(&value)?;

        let item = self.new_item(value);
        let new_item = item.clone();
        self.mutate(move |items| {
            let idx = check_index(index, items.len())?;
            let old = mem::replace(&mut items[idx], item);
            old.detach();
            Ok(())
        })?;

        Ok(new_item)
    }

    /// Removes an item at the 1-based index and returns it detached.
    ///
    /// # Errors
    ///
    /// - [`MalformedValue`] when the attribute text cannot be parsed.
    /// - [`IndexOutOfRange`] when the index is not in the `1..=count` range.
    ///
    /// [`MalformedValue`]: enum.Error.html
    /// [`IndexOutOfRange`]: enum.Error.html
    pub fn remove(&self, index: usize) -> Result<ListItem> {
        self.mutate(|items| {
            let idx = check_index(index, items.len())?;
            let item = items.remove(idx);
            item.detach();
            Ok(item)
        })
    }

    /// Appends a copy of the value.
    ///
    /// # Errors
    ///
    /// - [`WrongItemType`] when the value kind differs from the list kind.
    /// - [`NonFiniteValue`] when the value has a NaN or an infinite number.
    /// - [`MalformedValue`] when the attribute text cannot be parsed.
    ///
    /// [`WrongItemType`]: enum.Error.html
    /// [`NonFiniteValue`]: enum.Error.html
    /// [`MalformedValue`]: enum.Error.html
    pub fn append<T: Into<Item>>(&self, value: T) -> Result<ListItem> {
        let value = value.into();
        self.check_value(&value)?;

        let item = self.new_item(value);
        let new_item = item.clone();
        self.mutate(move |items| {
            items.push(item);
            Ok(())
        })?;

        Ok(new_item)
    }

    /// Replaces the whole list with a copy of the value.
    ///
    /// The current attribute text is not parsed, so this also
    /// recovers a list with a malformed text.
    ///
    /// # Errors
    ///
    /// - [`WrongItemType`] when the value kind differs from the list kind.
    /// - [`NonFiniteValue`] when the value has a NaN or an infinite number.
    ///
    /// [`WrongItemType`]: enum.Error.html
    /// [`NonFiniteValue`]: enum.Error.html
    pub fn initialize<T: Into<Item>>(&self, value: T) -> Result<ListItem> {
        let value = value.into();
        self.check_value(&value)?;

        let _element = self.0.binding.element()?;
        let item = self.new_item(value);
        self.0.replace_items(vec![item.clone()]);
        self.0.write_back()?;

        Ok(item)
    }

    /// Removes all items and sets the attribute to an empty string.
    pub fn clear(&self) -> Result<()> {
        let _element = self.0.binding.element()?;
        self.0.replace_items(Vec::new());
        self.0.write_back()
    }

    /// Replaces all transforms with a single `matrix` transform
    /// that is equal to their product.
    ///
    /// Returns `None` for an empty list.
    ///
    /// # Errors
    ///
    /// - [`WrongItemType`] when the list is not a transform list.
    /// - [`MalformedValue`] when the attribute text cannot be parsed.
    ///
    /// [`WrongItemType`]: enum.Error.html
    /// [`MalformedValue`]: enum.Error.html
    pub fn consolidate(&self) -> Result<Option<ListItem>> {
        check_kind(ItemKind::Transform, self.0.kind)?;

        if self.count()? == 0 {
            return Ok(None);
        }

        let item = self.new_item(Item::Transform(Transform::default()));
        let new_item = item.clone();
        self.mutate(move |items| {
            let mut m = Matrix::default();
            for ts in items.iter().filter_map(|i| i.value().as_transform()) {
                m.append(&ts.matrix());
            }

            if !m.is_finite() {
                return Err(Error::NonFiniteValue);
            }

            *item.0.value.borrow_mut() = Item::Transform(Transform::new_matrix(m));

            for old in items.drain(..) {
                old.detach();
            }
            items.push(item);

            Ok(())
        })?;

        Ok(Some(new_item))
    }
}

impl fmt::Debug for LiveList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LiveList({}, {}, {:?})", self.0.binding.name(), self.0.kind, self.validity())
    }
}
