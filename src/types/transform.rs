// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;
use std::ops::Mul;

use crate::{
    WriteBuffer,
    WriteOptions,
};

/// Representation of a 2D affine transformation matrix.
///
/// ```text
/// | a c e |
/// | b d f |
/// | 0 0 1 |
/// ```
#[derive(Clone, Copy, PartialEq, Debug)]
#[allow(missing_docs)]
pub struct Matrix {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Matrix {
    /// Constructs a new matrix.
    #[inline]
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Matrix {
        Matrix { a, b, c, d, e, f }
    }

    /// Translates the current matrix.
    pub fn translate(mut self, x: f64, y: f64) -> Matrix {
        self.append(&Matrix::new(1.0, 0.0, 0.0, 1.0, x, y));
        self
    }

    /// Scales the current matrix.
    pub fn scale(mut self, sx: f64, sy: f64) -> Matrix {
        self.append(&Matrix::new(sx, 0.0, 0.0, sy, 0.0, 0.0));
        self
    }

    /// Rotates the current matrix by an angle in degrees.
    pub fn rotate(mut self, angle: f64) -> Matrix {
        let (sin, cos) = angle.to_radians().sin_cos();
        self.append(&Matrix::new(cos, sin, -sin, cos, 0.0, 0.0));
        self
    }

    /// Skews the current matrix along the X axis by an angle in degrees.
    pub fn skew_x(mut self, angle: f64) -> Matrix {
        self.append(&Matrix::new(1.0, 0.0, angle.to_radians().tan(), 1.0, 0.0, 0.0));
        self
    }

    /// Skews the current matrix along the Y axis by an angle in degrees.
    pub fn skew_y(mut self, angle: f64) -> Matrix {
        self.append(&Matrix::new(1.0, angle.to_radians().tan(), 0.0, 1.0, 0.0, 0.0));
        self
    }

    /// Appends a matrix to the current matrix.
    ///
    /// The appended matrix is applied to a point first.
    pub fn append(&mut self, m: &Matrix) {
        *self = Matrix {
            a: self.a * m.a + self.c * m.b,
            b: self.b * m.a + self.d * m.b,
            c: self.a * m.c + self.c * m.d,
            d: self.b * m.c + self.d * m.d,
            e: self.a * m.e + self.c * m.f + self.e,
            f: self.b * m.e + self.d * m.f + self.f,
        };
    }

    /// Applies the matrix to a coordinate pair.
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (self.a * x + self.c * y + self.e,
         self.b * x + self.d * y + self.f)
    }

    /// Returns `true` if the current matrix is default, aka (1 0 0 1 0 0).
    pub fn is_default(&self) -> bool {
        *self == Matrix::default()
    }

    /// Returns `true` if all coefficients are finite.
    pub fn is_finite(&self) -> bool {
        [self.a, self.b, self.c, self.d, self.e, self.f].iter().all(|n| n.is_finite())
    }
}

impl Default for Matrix {
    fn default() -> Matrix {
        Matrix::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(mut self, other: Matrix) -> Matrix {
        self.append(&other);
        self
    }
}

/// A transform function type.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[allow(missing_docs)]
pub enum TransformKind {
    Matrix,
    Translate,
    Scale,
    Rotate,
    SkewX,
    SkewY,
}

/// Representation of a single transform function from a `<transform-list>`.
///
/// Keeps the function type and its arguments alongside the derived matrix,
/// so `rotate(45 10 10)` is written back as is and not as a matrix.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Transform {
    kind: TransformKind,
    matrix: Matrix,
    angle: f64,
    cx: f64,
    cy: f64,
}

impl Transform {
    /// Constructs a new `matrix` transform.
    pub fn new_matrix(m: Matrix) -> Self {
        let mut ts = Transform::default();
        ts.set_matrix(m);
        ts
    }

    /// Constructs a new `translate` transform.
    pub fn new_translate(tx: f64, ty: f64) -> Self {
        let mut ts = Transform::default();
        ts.set_translate(tx, ty);
        ts
    }

    /// Constructs a new `scale` transform.
    pub fn new_scale(sx: f64, sy: f64) -> Self {
        let mut ts = Transform::default();
        ts.set_scale(sx, sy);
        ts
    }

    /// Constructs a new `rotate` transform around the specified center.
    pub fn new_rotate(angle: f64, cx: f64, cy: f64) -> Self {
        let mut ts = Transform::default();
        ts.set_rotate(angle, cx, cy);
        ts
    }

    /// Constructs a new `skewX` transform.
    pub fn new_skew_x(angle: f64) -> Self {
        let mut ts = Transform::default();
        ts.set_skew_x(angle);
        ts
    }

    /// Constructs a new `skewY` transform.
    pub fn new_skew_y(angle: f64) -> Self {
        let mut ts = Transform::default();
        ts.set_skew_y(angle);
        ts
    }

    /// Returns the transform function type.
    #[inline]
    pub fn kind(&self) -> TransformKind {
        self.kind
    }

    /// Returns the derived affine matrix.
    #[inline]
    pub fn matrix(&self) -> Matrix {
        self.matrix
    }

    /// Returns the angle of `rotate`, `skewX` and `skewY` transforms.
    ///
    /// Zero for other types.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Returns the rotation center.
    ///
    /// Zeros for other types.
    #[inline]
    pub fn center(&self) -> (f64, f64) {
        (self.cx, self.cy)
    }

    /// Returns `true` if the matrix, the angle and the center are finite.
    pub fn is_finite(&self) -> bool {
        self.matrix.is_finite()
            && self.angle.is_finite()
            && self.cx.is_finite()
            && self.cy.is_finite()
    }

    /// Makes it a `matrix` transform.
    ///
    /// The matrix is never simplified into other transform types.
    pub fn set_matrix(&mut self, m: Matrix) {
        self.reset(TransformKind::Matrix, m);
    }

    /// Makes it a `translate` transform.
    pub fn set_translate(&mut self, tx: f64, ty: f64) {
        self.reset(TransformKind::Translate, Matrix::default().translate(tx, ty));
    }

    /// Makes it a `scale` transform.
    pub fn set_scale(&mut self, sx: f64, sy: f64) {
        self.reset(TransformKind::Scale, Matrix::default().scale(sx, sy));
    }

    /// Makes it a `rotate` transform around the specified center.
    pub fn set_rotate(&mut self, angle: f64, cx: f64, cy: f64) {
        let m = Matrix::default().translate(cx, cy).rotate(angle).translate(-cx, -cy);
        self.reset(TransformKind::Rotate, m);
        self.angle = angle;
        self.cx = cx;
        self.cy = cy;
    }

    /// Makes it a `skewX` transform.
    pub fn set_skew_x(&mut self, angle: f64) {
        self.reset(TransformKind::SkewX, Matrix::default().skew_x(angle));
        self.angle = angle;
    }

    /// Makes it a `skewY` transform.
    pub fn set_skew_y(&mut self, angle: f64) {
        self.reset(TransformKind::SkewY, Matrix::default().skew_y(angle));
        self.angle = angle;
    }

    fn reset(&mut self, kind: TransformKind, matrix: Matrix) {
        *self = Transform {
            kind,
            matrix,
            angle: 0.0,
            cx: 0.0,
            cy: 0.0,
        };
    }
}

impl Default for Transform {
    fn default() -> Self {
        Transform {
            kind: TransformKind::Matrix,
            matrix: Matrix::default(),
            angle: 0.0,
            cx: 0.0,
            cy: 0.0,
        }
    }
}

impl From<Matrix> for Transform {
    fn from(m: Matrix) -> Self {
        Transform::new_matrix(m)
    }
}

fn write_args(name: &[u8], args: &[f64], opt: &WriteOptions, buf: &mut Vec<u8>) {
    buf.extend_from_slice(name);
    buf.push(b'(');
    for (i, n) in args.iter().enumerate() {
        if i != 0 {
            buf.push(b',');
        }

        n.write_buf_opt(opt, buf);
    }
    buf.push(b')');
}

impl WriteBuffer for Transform {
    fn write_buf_opt(&self, opt: &WriteOptions, buf: &mut Vec<u8>) {
        let m = &self.matrix;
        match self.kind {
            TransformKind::Matrix => {
                write_args(b"matrix", &[m.a, m.b, m.c, m.d, m.e, m.f], opt, buf);
            }
            TransformKind::Translate => {
                write_args(b"translate", &[m.e, m.f], opt, buf);
            }
            TransformKind::Scale => {
                if m.a == m.d {
                    write_args(b"scale", &[m.a], opt, buf);
                } else {
                    write_args(b"scale", &[m.a, m.d], opt, buf);
                }
            }
            TransformKind::Rotate => {
                if self.cx == 0.0 && self.cy == 0.0 {
                    write_args(b"rotate", &[self.angle], opt, buf);
                } else {
                    write_args(b"rotate", &[self.angle, self.cx, self.cy], opt, buf);
                }
            }
            TransformKind::SkewX => {
                write_args(b"skewX", &[self.angle], opt, buf);
            }
            TransformKind::SkewY => {
                write_args(b"skewY", &[self.angle], opt, buf);
            }
        }
    }
}

impl_display!(Transform);
