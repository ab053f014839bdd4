// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::{
    WriteBuffer,
    WriteOptions,
};

/// Writes a number using the shortest representation that parses back
/// to the same value.
pub fn write_num(num: f64, rm_leading_zero: bool, buf: &mut Vec<u8>) {
    // -0 -> 0
    if num == 0.0 {
        buf.push(b'0');
        return;
    }

    let start_pos = buf.len();

    // `Display` for `f64` never uses an exponent and always round-trips.
    buf.extend_from_slice(num.to_string().as_bytes());

    if rm_leading_zero {
        let s = &buf[start_pos..];
        if s.starts_with(b"0.") {
            // 0.1 -> .1
            buf.remove(start_pos);
        } else if s.starts_with(b"-0.") {
            // -0.1 -> -.1
            buf.remove(start_pos + 1);
        }
    }
}

impl WriteBuffer for f64 {
    fn write_buf_opt(&self, opt: &WriteOptions, buf: &mut Vec<u8>) {
        write_num(*self, opt.remove_leading_zero, buf);
    }
}

impl WriteBuffer for i32 {
    fn write_buf_opt(&self, _: &WriteOptions, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self.to_string().as_bytes());
    }
}
