// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;
use std::mem;
use std::slice::Iter;

use crate::{
    Attribute,
    QNameRef,
    WriteBuffer,
};


/// An attributes list.
///
/// Keeps attributes in the insertion order.
#[derive(Clone, Default)]
pub struct Attributes(Vec<Attribute>);

impl Attributes {
    /// Constructs a new attributes list.
    #[inline]
    pub fn new() -> Attributes {
        Attributes(Vec::new())
    }

    /// Returns an optional reference to [`Attribute`].
    ///
    /// [`Attribute`]: struct.Attribute.html
    #[inline]
    pub fn get<'a, N>(&self, name: N) -> Option<&Attribute>
        where QNameRef<'a>: From<N>
    {
        let name = QNameRef::from(name);
        self.0.iter().find(|a| a.name.as_ref() == name)
    }

    /// Returns an optional reference to the attribute text.
    #[inline]
    pub fn get_value<'a, N>(&self, name: N) -> Option<&str>
        where QNameRef<'a>: From<N>
    {
        self.get(name).map(|a| a.value.as_str())
    }

    /// Inserts a new attribute. Previous will be overwritten and returned.
    ///
    /// The position of an overwritten attribute is preserved.
    pub fn insert(&mut self, attr: Attribute) -> Option<Attribute> {
        // Increase capacity on first insert.
        if self.0.capacity() == 0 {
            self.0.reserve(16);
        }

        let idx = self.0.iter().position(|x| x.name == attr.name);
        match idx {
            Some(i) => Some(mem::replace(&mut self.0[i], attr)),
            None => {
                self.0.push(attr);
                None
            }
        }
    }

    /// Removes an existing attribute and returns it.
    pub fn remove<'a, N>(&mut self, name: N) -> Option<Attribute>
        where QNameRef<'a>: From<N>
    {
        let name = QNameRef::from(name);
        let idx = self.0.iter().position(|x| x.name.as_ref() == name);
        idx.map(|i| self.0.remove(i))
    }

    /// Returns `true` if the container contains an attribute with such name.
    #[inline]
    pub fn contains<'a, N>(&self, name: N) -> bool
        where QNameRef<'a>: From<N>
    {
        self.get(name).is_some()
    }

    /// Returns count of the attributes.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if attributes is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator.
    #[inline]
    pub fn iter(&self) -> Iter<Attribute> {
        self.0.iter()
    }

    /// Clears the attributes list, removing all values.
    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
}

impl IntoIterator for Attributes {
    type Item = Attribute;
    type IntoIter = ::std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = &'a Attribute;
    type IntoIter = Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Debug for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Attributes()");
        }

        let mut out = Vec::with_capacity(256);

        out.extend_from_slice(b"Attributes(");

        for attr in self.iter() {
            attr.write_buf(&mut out);
            out.push(b',');
            out.push(b' ');
        }

        out.pop();
        out.pop();
        out.push(b')');

        write!(f, "{}", String::from_utf8_lossy(&out))
    }
}
