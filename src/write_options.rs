// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// Options that defines writing of elements and attribute values.
///
/// Live attributes always write back using the default options.
#[derive(Clone, Copy, Debug)]
pub struct WriteOptions {
    /// Use single quote marks instead of double quote.
    ///
    /// # Examples
    ///
    /// Before:
    ///
    /// ```text
    /// <rect fill="red"/>
    /// ```
    ///
    /// After:
    ///
    /// ```text
    /// <rect fill='red'/>
    /// ```
    ///
    /// Default: disabled
    pub use_single_quote: bool,

    /// Write attributes that were synthesized from the element type defaults.
    ///
    /// # Examples
    ///
    /// A `rect` element with an unspecified `x="0"` attribute.
    ///
    /// Before:
    ///
    /// ```text
    /// <rect width="10"/>
    /// ```
    ///
    /// After:
    ///
    /// ```text
    /// <rect x="0" width="10"/>
    /// ```
    ///
    /// Default: disabled
    pub write_unspecified: bool,

    /// Remove leading zero from numbers.
    ///
    /// # Examples
    ///
    /// `0.1` -> `.1`, `-0.1` -> `-.1`
    ///
    /// Default: disabled
    pub remove_leading_zero: bool,
}

impl Default for WriteOptions {
    fn default() -> WriteOptions {
        WriteOptions {
            use_single_quote: false,
            write_unspecified: false,
            remove_leading_zero: false,
        }
    }
}
