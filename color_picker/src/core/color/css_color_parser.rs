// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Parser for the CSS color functional notations: `rgb()`, `rgba()`, `hsl()`, `hsla()`,
//! `hsv()` and `hsva()`. Arguments can be separated by commas, whitespace, or a `/`
//! before the alpha argument. Numbers can carry a `%` suffix.
//!
//! This module only deals with syntax. Units and ranges are checked by
//! [`CssColorFunction::try_into_true_color`].

use nom::{IResult, Parser,
          branch::alt,
          bytes::complete::tag_no_case,
          character::complete::{char, multispace0, multispace1, one_of},
          combinator::{all_consuming, map, opt, recognize, value},
          multi::separated_list1,
          number::complete::double,
          sequence::delimited};

use crate::{ColorParseError, ColorParseResult, TrueColor, ValueHsl, ValueRgb};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CssFunctionName {
    Rgb,
    Hsl,
    Hsv,
}

/// A single numeric argument, eg: `50%` or `0.5`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CssNumber {
    pub value: f64,
    pub is_percent: bool,
}

/// The result of parsing a functional notation, before any unit handling.
#[derive(Debug, Clone, PartialEq)]
pub struct CssColorFunction {
    pub name: CssFunctionName,
    pub args: Vec<CssNumber>,
}

/// Parse a CSS color function. The whole input has to be consumed. Function names are
/// case insensitive and the `a` suffix is optional for all of them, alpha is decided by
/// the number of arguments.
///
/// # Errors
///
/// Returns a [`nom::Err`] if the input is not syntactically a color function.
pub fn parse_css_color_function(input: &str) -> IResult<&str, CssColorFunction> {
    all_consuming(delimited(
        multispace0,
        map(
            (
                parse_function_name,
                opt(tag_no_case("a")),
                multispace0,
                char('('),
                multispace0,
                separated_list1(parse_separator, parse_css_number),
                multispace0,
                char(')'),
            ),
            |(name, _, _, _, _, args, _, _)| CssColorFunction { name, args },
        ),
        multispace0,
    ))
    .parse(input)
}

fn parse_function_name(input: &str) -> IResult<&str, CssFunctionName> {
    alt((
        value(CssFunctionName::Rgb, tag_no_case("rgb")),
        value(CssFunctionName::Hsl, tag_no_case("hsl")),
        value(CssFunctionName::Hsv, tag_no_case("hsv")),
    ))
    .parse(input)
}

/// `,` or `/` with optional whitespace around it, or just whitespace.
fn parse_separator(input: &str) -> IResult<&str, &str> {
    alt((
        recognize((multispace0, one_of(",/"), multispace0)),
        multispace1,
    ))
    .parse(input)
}

fn parse_css_number(input: &str) -> IResult<&str, CssNumber> {
    map((double, opt(char('%'))), |(value, percent)| CssNumber {
        value,
        is_percent: percent.is_some(),
    })
    .parse(input)
}

impl CssColorFunction {
    /// Applies units and checks ranges.
    ///
    /// - `rgb`: channels are `0..=255`, or `0%..=100%` of 255.
    /// - `hsl`, `hsv`: hue is in degrees `0..=360`. Saturation, lightness and value are
    ///   percentages `0..=100`, with or without the `%` sign.
    /// - Alpha is a fraction `0..=1`, or `0%..=100%`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorParseError::InvalidCssFunction`] if there aren't 3 or 4 arguments
    /// or if the hue carries a `%`, and [`ColorParseError::ComponentOutOfRange`] if any
    /// argument is out of range.
    pub fn try_into_true_color(self, original: &str) -> ColorParseResult<TrueColor> {
        let invalid = || ColorParseError::InvalidCssFunction {
            input: original.to_string(),
        };

        let (first, second, third, maybe_alpha) = match self.args.as_slice() {
            [first, second, third] => (*first, *second, *third, None),
            [first, second, third, alpha] => (*first, *second, *third, Some(*alpha)),
            _ => return Err(invalid()),
        };

        let a = maybe_alpha.map(|it| {
            if it.is_percent {
                it.value / 100.0
            } else {
                it.value
            }
        });

        match self.name {
            CssFunctionName::Rgb => {
                let channel = |it: CssNumber| {
                    if it.is_percent {
                        it.value * 255.0 / 100.0
                    } else {
                        it.value
                    }
                };
                TrueColor::try_from_value_rgb(ValueRgb {
                    r: channel(first),
                    g: channel(second),
                    b: channel(third),
                    a,
                })
            }
            CssFunctionName::Hsl | CssFunctionName::Hsv => {
                if first.is_percent {
                    return Err(invalid());
                }
                let hsl_or_hsv = ValueHsl {
                    h: first.value,
                    s: second.value,
                    l: third.value,
                    a,
                };
                if self.name == CssFunctionName::Hsl {
                    TrueColor::try_from_value_hsl(hsl_or_hsv)
                } else {
                    TrueColor::try_from_hsv_percent(
                        hsl_or_hsv.h,
                        hsl_or_hsv.s,
                        hsl_or_hsv.l,
                        hsl_or_hsv.a,
                    )
                }
            }
        }
    }
}

/// Parses the string and converts it to a [`TrueColor`].
///
/// # Errors
///
/// Returns [`ColorParseError::InvalidCssFunction`] for syntax errors, see
/// [`CssColorFunction::try_into_true_color`] for the rest.
pub fn try_parse_css_color(input: &str) -> ColorParseResult<TrueColor> {
    match parse_css_color_function(input) {
        Ok((_, function)) => function.try_into_true_color(input),
        Err(_) => Err(ColorParseError::InvalidCssFunction {
            input: input.to_string(),
        }),
    }
}
