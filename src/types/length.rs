// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;

use crate::error::Result;
use crate::{
    Error,
    WriteBuffer,
    WriteOptions,
};

/// User units per inch.
const DPI: f64 = 96.0;

/// List of all SVG length units.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[allow(missing_docs)]
pub enum LengthUnit {
    None,
    Em,
    Ex,
    Px,
    In,
    Cm,
    Mm,
    Pt,
    Pc,
    Percent,
}

impl LengthUnit {
    /// Returns the unit suffix as it is written in SVG.
    pub fn suffix(&self) -> &'static str {
        match *self {
            LengthUnit::None => "",
            LengthUnit::Em => "em",
            LengthUnit::Ex => "ex",
            LengthUnit::Px => "px",
            LengthUnit::In => "in",
            LengthUnit::Cm => "cm",
            LengthUnit::Mm => "mm",
            LengthUnit::Pt => "pt",
            LengthUnit::Pc => "pc",
            LengthUnit::Percent => "%",
        }
    }

    /// Returns `true` if the unit depends on a font or a viewport.
    pub fn is_relative(&self) -> bool {
        match *self {
            LengthUnit::Em | LengthUnit::Ex | LengthUnit::Percent => true,
            _ => false,
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            LengthUnit::None => write!(f, "number"),
            _ => write!(f, "{}", self.suffix()),
        }
    }
}

/// A direction used to resolve percentage lengths.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    /// Relative to the viewport width.
    Horizontal,
    /// Relative to the viewport height.
    Vertical,
    /// Relative to the normalized viewport diagonal.
    Other,
}

impl Default for Direction {
    fn default() -> Self {
        Direction::Other
    }
}

/// A source of font metrics and viewport size for relative units.
///
/// Usually implemented by a layout or rendering engine.
/// Any method can return `None` when the value is not available,
/// which makes lengths with the corresponding unit unresolvable.
pub trait UnitContext {
    /// Returns the font size used by `em` units.
    fn font_size(&self) -> Option<f64>;

    /// Returns the x-height used by `ex` units.
    fn x_height(&self) -> Option<f64>;

    /// Returns the viewport width and height used by percentages.
    fn viewport_size(&self) -> Option<(f64, f64)>;
}

/// A unit context without any data.
///
/// Only absolute units can be resolved with it.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct NoContext;

impl UnitContext for NoContext {
    fn font_size(&self) -> Option<f64> { None }
    fn x_height(&self) -> Option<f64> { None }
    fn viewport_size(&self) -> Option<(f64, f64)> { None }
}

/// A simple unit context with fixed values.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Viewport {
    /// Viewport width.
    pub width: f64,
    /// Viewport height.
    pub height: f64,
    /// Font size.
    pub font_size: f64,
    /// Font x-height.
    ///
    /// Usually a half of the font size.
    pub x_height: f64,
}

impl Viewport {
    /// Constructs a new viewport with a 16 user units font.
    pub fn new(width: f64, height: f64) -> Self {
        Viewport {
            width,
            height,
            font_size: 16.0,
            x_height: 8.0,
        }
    }
}

impl UnitContext for Viewport {
    fn font_size(&self) -> Option<f64> { Some(self.font_size) }
    fn x_height(&self) -> Option<f64> { Some(self.x_height) }
    fn viewport_size(&self) -> Option<(f64, f64)> { Some((self.width, self.height)) }
}

/// Representation of the [`<length>`] type.
///
/// [`<length>`]: https://www.w3.org/TR/SVG/types.html#DataTypeLength
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Length {
    /// A value in the specified units.
    pub number: f64,
    /// Units.
    pub unit: LengthUnit,
}

impl Length {
    /// Constructs a new length.
    #[inline]
    pub fn new(number: f64, unit: LengthUnit) -> Length {
        Length { number, unit }
    }

    /// Constructs a new length without units.
    #[inline]
    pub fn new_number(number: f64) -> Length {
        Length::new(number, LengthUnit::None)
    }

    /// Constructs a new length with a zero value.
    ///
    /// Shorthand for: `Length::new(0.0, LengthUnit::None)`.
    #[inline]
    pub fn zero() -> Length {
        Length::new_number(0.0)
    }

    /// Sets a value in the current units. Never fails.
    pub fn set_value_in_specified_units(&mut self, number: f64) {
        self.number = number;
    }

    /// Replaces both the value and the units.
    pub fn new_value_specified_units(&mut self, unit: LengthUnit, number: f64) {
        self.number = number;
        self.unit = unit;
    }

    /// Resolves the length to user units.
    ///
    /// # Errors
    ///
    /// - [`UnresolvableUnit`] when the context cannot resolve a relative unit.
    ///
    /// [`UnresolvableUnit`]: enum.Error.html
    pub fn to_user_units(&self, dir: Direction, ctx: &dyn UnitContext) -> Result<f64> {
        Ok(self.number * user_units_per_unit(self.unit, dir, ctx)?)
    }

    /// Sets the length from a value in user units, keeping the current unit.
    ///
    /// # Errors
    ///
    /// - [`UnresolvableUnit`] when the context cannot resolve a relative unit.
    ///
    /// [`UnresolvableUnit`]: enum.Error.html
    pub fn set_user_units(&mut self, value: f64, dir: Direction, ctx: &dyn UnitContext) -> Result<()> {
        let factor = user_units_per_unit(self.unit, dir, ctx)?;
        if factor == 0.0 {
            // A zero-sized viewport or font cannot represent a non-zero value.
            return Err(Error::UnresolvableUnit(self.unit));
        }

        self.number = value / factor;
        Ok(())
    }

    /// Converts the length to the specified units, preserving the user units value.
    ///
    /// # Errors
    ///
    /// - [`UnresolvableUnit`] when either unit cannot be resolved.
    ///
    /// [`UnresolvableUnit`]: enum.Error.html
    pub fn convert_to_specified_units(
        &mut self,
        unit: LengthUnit,
        dir: Direction,
        ctx: &dyn UnitContext,
    ) -> Result<()> {
        let value = self.to_user_units(dir, ctx)?;
        let mut len = Length::new(0.0, unit);
        len.set_user_units(value, dir, ctx)?;
        *self = len;
        Ok(())
    }

    /// Returns `true` if the value is negative.
    pub fn is_negative(&self) -> bool {
        self.number < 0.0
    }

    /// Returns `true` if the number is neither NaN nor infinite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.number.is_finite()
    }
}

fn user_units_per_unit(unit: LengthUnit, dir: Direction, ctx: &dyn UnitContext) -> Result<f64> {
    let unresolvable = || Error::UnresolvableUnit(unit);

    let factor = match unit {
        LengthUnit::None | LengthUnit::Px => 1.0,
        LengthUnit::In => DPI,
        LengthUnit::Cm => DPI / 2.54,
        LengthUnit::Mm => DPI / 25.4,
        LengthUnit::Pt => DPI / 72.0,
        LengthUnit::Pc => DPI / 6.0,
        LengthUnit::Em => ctx.font_size().ok_or_else(unresolvable)?,
        LengthUnit::Ex => ctx.x_height().ok_or_else(unresolvable)?,
        LengthUnit::Percent => {
            let (w, h) = ctx.viewport_size().ok_or_else(unresolvable)?;
            let base = match dir {
                Direction::Horizontal => w,
                Direction::Vertical => h,
                Direction::Other => ((w * w + h * h) / 2.0).sqrt(),
            };

            base / 100.0
        }
    };

    Ok(factor)
}

impl Default for Length {
    fn default() -> Self {
        Length::zero()
    }
}

impl From<f64> for Length {
    fn from(number: f64) -> Self {
        Length::new_number(number)
    }
}

impl WriteBuffer for Length {
    fn write_buf_opt(&self, opt: &WriteOptions, buf: &mut Vec<u8>) {
        self.number.write_buf_opt(opt, buf);
        buf.extend_from_slice(self.unit.suffix().as_bytes());
    }
}

impl_display!(Length);


#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_length {
        ($name:ident, $len:expr, $unit:expr, $result:expr) => (
            #[test]
            fn $name() {
                let l = Length::new($len, $unit);
                assert_eq!(l.to_string(), $result);
            }
        )
    }

    test_length!(gen_length_1,  1.0, LengthUnit::None, "1");
    test_length!(gen_length_2,  1.0, LengthUnit::Em, "1em");
    test_length!(gen_length_3,  1.0, LengthUnit::Ex, "1ex");
    test_length!(gen_length_4,  1.0, LengthUnit::Px, "1px");
    test_length!(gen_length_5,  1.0, LengthUnit::In, "1in");
    test_length!(gen_length_6,  1.0, LengthUnit::Cm, "1cm");
    test_length!(gen_length_7,  1.0, LengthUnit::Mm, "1mm");
    test_length!(gen_length_8,  1.0, LengthUnit::Pt, "1pt");
    test_length!(gen_length_9,  1.0, LengthUnit::Pc, "1pc");
    test_length!(gen_length_10, 1.5, LengthUnit::Percent, "1.5%");

    macro_rules! test_user_units {
        ($name:ident, $len:expr, $dir:expr, $result:expr) => (
            #[test]
            fn $name() {
                let ctx = Viewport::new(200.0, 100.0);
                assert_eq!($len.to_user_units($dir, &ctx).unwrap(), $result);
            }
        )
    }

    test_user_units!(user_units_1, Length::new(1.0, LengthUnit::In), Direction::Other, 96.0);
    test_user_units!(user_units_2, Length::new(6.0, LengthUnit::Pc), Direction::Other, 96.0);
    test_user_units!(user_units_3, Length::new(72.0, LengthUnit::Pt), Direction::Other, 96.0);
    test_user_units!(user_units_4, Length::new(2.0, LengthUnit::Em), Direction::Other, 32.0);
    test_user_units!(user_units_5, Length::new(2.0, LengthUnit::Ex), Direction::Other, 16.0);
    test_user_units!(user_units_6, Length::new(50.0, LengthUnit::Percent), Direction::Horizontal, 100.0);
    test_user_units!(user_units_7, Length::new(50.0, LengthUnit::Percent), Direction::Vertical, 50.0);

    #[test]
    fn percent_other_1() {
        let ctx = Viewport::new(100.0, 100.0);
        let len = Length::new(50.0, LengthUnit::Percent);
        assert_eq!(len.to_user_units(Direction::Other, &ctx).unwrap(), 50.0);
    }

    #[test]
    fn absolute_without_context_1() {
        let len = Length::new(2.0, LengthUnit::In);
        assert_eq!(len.to_user_units(Direction::Horizontal, &NoContext).unwrap(), 192.0);
    }

    #[test]
    fn relative_without_context_1() {
        let len = Length::new(2.0, LengthUnit::Em);
        assert_eq!(len.to_user_units(Direction::Horizontal, &NoContext),
                   Err(Error::UnresolvableUnit(LengthUnit::Em)));
    }

    #[test]
    fn set_user_units_1() {
        let ctx = Viewport::new(200.0, 100.0);
        let mut len = Length::new(10.0, LengthUnit::Percent);
        len.set_user_units(50.0, Direction::Horizontal, &ctx).unwrap();
        assert_eq!(len, Length::new(25.0, LengthUnit::Percent));
    }

    #[test]
    fn convert_1() {
        let mut len = Length::new(1.0, LengthUnit::In);
        len.convert_to_specified_units(LengthUnit::Px, Direction::Other, &NoContext).unwrap();
        assert_eq!(len, Length::new(96.0, LengthUnit::Px));
    }

    #[test]
    fn convert_unresolvable_is_noop_1() {
        let mut len = Length::new(1.0, LengthUnit::In);
        assert!(len.convert_to_specified_units(LengthUnit::Em, Direction::Other, &NoContext).is_err());
        assert_eq!(len, Length::new(1.0, LengthUnit::In));
    }
}
