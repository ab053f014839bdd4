// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::error::ParseError;
use crate::Matrix;
use super::TransformListHandler;

/// Parses a `<transform-list>`.
///
/// Each transform function is reported as a single callback with
/// its own arguments, so `rotate(45 10 10)` is not split into
/// a translate/rotate/translate sequence.
pub fn parse_transform_list<H: TransformListHandler>(text: &str, handler: &mut H)
    -> Result<(), ParseError>
{
    let bytes = text.as_bytes();

    handler.start_transform_list();

    let mut pos = skip_separators(bytes, 0);
    while pos < bytes.len() {
        let name_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
            pos += 1;
        }

        if pos == name_start {
            return Err(unexpected_char(text, pos));
        }

        let name = &text[name_start..pos];

        pos = skip_spaces(bytes, pos);
        if pos == bytes.len() {
            return Err(ParseError::UnexpectedEnd);
        }

        if bytes[pos] != b'(' {
            return Err(unexpected_char(text, pos));
        }
        pos += 1;

        let args_end = match text[pos..].find(')') {
            Some(idx) => pos + idx,
            None => return Err(ParseError::UnexpectedEnd),
        };

        let mut args = Vec::with_capacity(6);
        for n in svgtypes::NumberListParser::from(text[pos..args_end].trim()) {
            args.push(n?);
        }

        emit_transform(name, &args, handler)?;

        pos = skip_separators(bytes, args_end + 1);
    }

    handler.end_transform_list();

    Ok(())
}

fn emit_transform<H: TransformListHandler>(name: &str, args: &[f64], handler: &mut H)
    -> Result<(), ParseError>
{
    let name: &'static str = match name {
        "matrix" => "matrix",
        "translate" => "translate",
        "scale" => "scale",
        "rotate" => "rotate",
        "skewX" => "skewX",
        "skewY" => "skewY",
        _ => return Err(ParseError::UnknownTransform(name.to_string())),
    };

    match (name, args.len()) {
        ("matrix", 6) => {
            handler.matrix(Matrix::new(args[0], args[1], args[2], args[3], args[4], args[5]));
        }
        ("translate", 1) => handler.translate(args[0], 0.0),
        ("translate", 2) => handler.translate(args[0], args[1]),
        ("scale", 1) => handler.scale(args[0], args[0]),
        ("scale", 2) => handler.scale(args[0], args[1]),
        ("rotate", 1) => handler.rotate(args[0], 0.0, 0.0),
        ("rotate", 3) => handler.rotate(args[0], args[1], args[2]),
        ("skewX", 1) => handler.skew_x(args[0]),
        ("skewY", 1) => handler.skew_y(args[0]),
        (_, count) => return Err(ParseError::InvalidArgumentCount { name, count }),
    }

    Ok(())
}

fn skip_spaces(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && is_space(bytes[pos]) {
        pos += 1;
    }

    pos
}

fn skip_separators(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && (is_space(bytes[pos]) || bytes[pos] == b',') {
        pos += 1;
    }

    pos
}

#[inline]
fn is_space(c: u8) -> bool {
    match c {
        b' ' | b'\t' | b'\n' | b'\r' => true,
        _ => false,
    }
}

fn unexpected_char(text: &str, pos: usize) -> ParseError {
    match text[pos..].chars().next() {
        Some(c) => ParseError::UnexpectedCharacter(c, pos),
        None => ParseError::UnexpectedEnd,
    }
}
