// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This module contains submodules which represent SVG value types.

pub use self::item::{Item, ItemKind};
pub use self::length::{
    Direction,
    Length,
    LengthUnit,
    NoContext,
    UnitContext,
    Viewport,
};
pub use self::point::Point;
pub use self::rect::Rect;
pub use self::transform::{Matrix, Transform, TransformKind};

mod item;
mod length;
mod number;
mod point;
mod rect;
mod transform;
