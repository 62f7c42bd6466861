// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module contains a parser that parses a hex color string into a [`HexRgba`]
//! struct. The leading `#` is optional and digits are case insensitive. The following
//! lengths are accepted:
//! - `#rgb`, eg: `#f00` for red.
//! - `#rgba`, eg: `#f008` for red at about half opacity.
//! - `#rrggbb`, eg: `#ff0000` for red.
//! - `#rrggbbaa`, eg: `#ff000080` for red at about half opacity.

use nom::{IResult, Parser,
          branch::alt,
          bytes::complete::take_while_m_n,
          character::complete::char,
          combinator::{all_consuming, map, map_res, opt}};

/// Byte channels parsed from a hex string. Alpha is `255` when the string doesn't carry
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexRgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

/// Parse function that generates a [`HexRgba`] struct from a valid hex color string. The
/// whole input has to be consumed.
///
/// # Errors
///
/// Returns a [`nom::Err`] if the input is not a 3, 4, 6 or 8 digit hex color.
pub fn parse_hex_color(input: &str) -> IResult<&str, HexRgba> {
    let (input, _) = opt(char('#')).parse(input)?;
    alt((
        all_consuming(map(
            (parse_hex_seg, parse_hex_seg, parse_hex_seg, parse_hex_seg),
            |(red, green, blue, alpha)| HexRgba { red, green, blue, alpha },
        )),
        all_consuming(map(
            (parse_hex_seg, parse_hex_seg, parse_hex_seg),
            |(red, green, blue)| HexRgba { red, green, blue, alpha: 255 },
        )),
        all_consuming(map(
            (parse_hex_nibble, parse_hex_nibble, parse_hex_nibble, parse_hex_nibble),
            |(red, green, blue, alpha)| HexRgba { red, green, blue, alpha },
        )),
        all_consuming(map(
            (parse_hex_nibble, parse_hex_nibble, parse_hex_nibble),
            |(red, green, blue)| HexRgba { red, green, blue, alpha: 255 },
        )),
    ))
    .parse(input)
}

/// Quick check used to tell apart "this was meant to be hex but has the wrong number of
/// digits" from "this is not a hex string at all".
#[must_use]
pub fn looks_like_hex(input: &str) -> bool {
    let digits = input.strip_prefix('#').unwrap_or(input);
    !digits.is_empty() && digits.chars().all(match_is_hex_digit)
}

/// This function is used by [`take_while_m_n`] and as long as it returns `true` items will
/// be taken from the input.
fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }

/// Two hex digits, eg: `ff`.
fn parse_hex_seg(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(2, 2, match_is_hex_digit), |it: &str| {
        u8::from_str_radix(it, 16)
    })
    .parse(input)
}

/// One hex digit, doubled, eg: `f` is the same as `ff`.
fn parse_hex_nibble(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(1, 1, match_is_hex_digit), |it: &str| {
        u8::from_str_radix(it, 16).map(|nibble| nibble * 17)
    })
    .parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> HexRgba {
        HexRgba { red, green, blue, alpha }
    }

    #[test_case("#2F14DF", rgba(47, 20, 223, 255) ; "six digits upper case")]
    #[test_case("2f14df", rgba(47, 20, 223, 255) ; "six digits no hash")]
    #[test_case("#ff000080", rgba(255, 0, 0, 128) ; "eight digits")]
    #[test_case("#f00", rgba(255, 0, 0, 255) ; "three digits")]
    #[test_case("#f008", rgba(255, 0, 0, 136) ; "four digits")]
    fn parse_valid_color(input: &str, expected: HexRgba) {
        let Ok((remainder, color)) = parse_hex_color(input) else {
            panic!("failed to parse {input}");
        };
        assert_eq2!(remainder, "");
        assert_eq2!(color, expected);
    }

    #[test_case("#ff000" ; "five digits")]
    #[test_case("#ff00000" ; "seven digits")]
    #[test_case("#gg0000" ; "not hex")]
    #[test_case("#2F14DF🔅" ; "trailing garbage")]
    #[test_case("" ; "empty")]
    fn parse_invalid_color(input: &str) {
        assert!(parse_hex_color(input).is_err());
    }

    #[test]
    fn test_looks_like_hex() {
        assert!(looks_like_hex("#ff000"));
        assert!(looks_like_hex("abc"));
        assert!(!looks_like_hex("#"));
        assert!(!looks_like_hex("red"));
    }
}
