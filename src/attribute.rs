// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;

use crate::{
    QName,
    QNameRef,
    WriteBuffer,
    WriteOptions,
};


/// Representation of the XML attribute object.
#[derive(Clone, PartialEq, Debug)]
pub struct Attribute {
    /// Attribute name.
    pub name: QName,
    /// Attribute text.
    pub value: String,
    /// Indicates that the attribute was set explicitly.
    ///
    /// Unspecified attributes are synthesized from the element type defaults.
    /// They act just like other attributes, but they will not be printed
    /// during writing unless enabled via [`WriteOptions`].
    ///
    /// [`WriteOptions`]: struct.WriteOptions.html
    pub specified: bool,
}

impl Attribute {
    /// Constructs a new specified attribute.
    pub fn new<'a, N, S>(name: N, value: S) -> Attribute
        where QNameRef<'a>: From<N>, S: Into<String>
    {
        Attribute {
            name: QNameRef::from(name).into(),
            value: value.into(),
            specified: true,
        }
    }

    /// Constructs a new unspecified attribute.
    pub fn new_unspecified<'a, N, S>(name: N, value: S) -> Attribute
        where QNameRef<'a>: From<N>, S: Into<String>
    {
        Attribute {
            specified: false,
            .. Attribute::new(name, value)
        }
    }
}

fn write_quote(opt: &WriteOptions, out: &mut Vec<u8>) {
    out.push(if opt.use_single_quote { b'\'' } else { b'"' });
}

impl WriteBuffer for Attribute {
    fn write_buf_opt(&self, opt: &WriteOptions, buf: &mut Vec<u8>) {
        if !self.name.prefix.is_empty() {
            buf.extend_from_slice(self.name.prefix.as_bytes());
            buf.push(b':');
        }
        buf.extend_from_slice(self.name.local.as_bytes());
        buf.push(b'=');
        write_quote(opt, buf);

        for c in self.value.as_bytes() {
            match *c {
                b'"' if !opt.use_single_quote => buf.extend_from_slice(b"&quot;"),
                b'\'' if opt.use_single_quote => buf.extend_from_slice(b"&apos;"),
                b'&' => buf.extend_from_slice(b"&amp;"),
                b'<' => buf.extend_from_slice(b"&lt;"),
                _ => buf.push(*c),
            }
        }

        write_quote(opt, buf);
    }
}

impl_display!(Attribute);
