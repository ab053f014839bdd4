// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This module contains a qualified name which is used for attribute names.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Qualified name.
///
/// Two names are equal when their namespace and local name are equal.
/// The prefix is kept only for serialization.
#[derive(Clone, Debug)]
pub struct QName {
    /// Namespace URI. Empty for no namespace.
    pub namespace: String,
    /// Namespace prefix. Empty for no prefix.
    pub prefix: String,
    /// Local name.
    pub local: String,
}

impl QName {
    /// Constructs a new name without a namespace.
    pub fn new<S: Into<String>>(local: S) -> Self {
        QName {
            namespace: String::new(),
            prefix: String::new(),
            local: local.into(),
        }
    }

    /// Returns `QName` as `QNameRef`.
    pub fn as_ref(&self) -> QNameRef {
        QNameRef {
            namespace: &self.namespace,
            prefix: &self.prefix,
            local: &self.local,
        }
    }
}

impl PartialEq for QName {
    fn eq(&self, other: &QName) -> bool {
        self.as_ref() == other.as_ref()
    }
}

impl Eq for QName {}

impl Hash for QName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.namespace.hash(state);
        self.local.hash(state);
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.as_ref().fmt(f)
    }
}

/// Qualified name reference.
#[derive(Clone, Copy, Debug)]
pub struct QNameRef<'a> {
    /// Namespace URI. Empty for no namespace.
    pub namespace: &'a str,
    /// Namespace prefix. Empty for no prefix.
    pub prefix: &'a str,
    /// Local name.
    pub local: &'a str,
}

impl<'a> QNameRef<'a> {
    /// Checks that this name has the specified namespace and local name.
    pub fn has_name(&self, namespace: &str, local: &str) -> bool {
        self.namespace == namespace && self.local == local
    }
}

impl<'a> PartialEq for QNameRef<'a> {
    fn eq(&self, other: &QNameRef) -> bool {
        self.namespace == other.namespace && self.local == other.local
    }
}

impl<'a> fmt::Display for QNameRef<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.prefix.is_empty() {
            write!(f, "{}", self.local)
        } else {
            write!(f, "{}:{}", self.prefix, self.local)
        }
    }
}

impl<'a> From<&'a str> for QNameRef<'a> {
    fn from(value: &'a str) -> Self {
        QNameRef { namespace: "", prefix: "", local: value }
    }
}

impl<'a> From<(&'a str, &'a str)> for QNameRef<'a> {
    fn from(value: (&'a str, &'a str)) -> Self {
        QNameRef { namespace: value.0, prefix: "", local: value.1 }
    }
}

impl<'a> From<(&'a str, &'a str, &'a str)> for QNameRef<'a> {
    fn from(value: (&'a str, &'a str, &'a str)) -> Self {
        QNameRef { namespace: value.0, prefix: value.1, local: value.2 }
    }
}

impl<'a> From<&'a QName> for QNameRef<'a> {
    fn from(value: &'a QName) -> Self {
        value.as_ref()
    }
}

impl<'a> From<QNameRef<'a>> for QName {
    fn from(value: QNameRef) -> Self {
        QName {
            namespace: value.namespace.into(),
            prefix: value.prefix.into(),
            local: value.local.into(),
        }
    }
}

impl<'a> From<&'a str> for QName {
    fn from(value: &'a str) -> Self {
        QName::new(value)
    }
}
