// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{strings::*, MalformedInput, MAX_OCTET, OCTET_COUNT};
use ipnet::ipv4_mask_to_prefix;
use std::{fmt, net::Ipv4Addr, str::FromStr};

/// Exactly four octets of a dotted-quad, in input order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Octets(pub [u8; 4]);

impl Octets {
    pub fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Octets([a, b, c, d])
    }

    pub fn to_ipv4(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.0)
    }

    /**
    Prefix length of these octets when read as a subnet mask, f.ex.
    `255.255.240.0` -> `20`. Returns `None` if the 32-bit value is not
    a run of ones followed by a run of zeros.
    */
    pub fn mask_prefix_len(&self) -> Option<u8> {
        ipv4_mask_to_prefix(self.to_ipv4()).ok()
    }
}

impl From<[u8; 4]> for Octets {
    fn from(octets: [u8; 4]) -> Self {
        Octets(octets)
    }
}

impl From<Ipv4Addr> for Octets {
    fn from(ip: Ipv4Addr) -> Self {
        Octets(ip.octets())
    }
}

impl fmt::Display for Octets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{a}{DOT}{b}{DOT}{c}{DOT}{d}")
    }
}

impl FromStr for Octets {
    type Err = MalformedInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_octets(s)
    }
}

/**
Split `text` on `.` into exactly four octets.

Every segment is trimmed of surrounding whitespace. A blank segment counts
as `0`, so half-typed input such as `192.168..1` or `10.0.0.` still yields
octets and is left for the rules to judge.

### Errors
- [MalformedInput::SegmentCount] if there are not exactly 4 segments
- [MalformedInput::NotNumeric] if a segment is not an unsigned decimal
- [MalformedInput::OctetTooLarge] if a segment is > 255
*/
pub fn parse_octets(text: impl AsRef<str>) -> Result<Octets, MalformedInput> {
    let segments: Vec<&str> = text.as_ref().split(DOT).collect();
    if segments.len() != OCTET_COUNT {
        return Err(MalformedInput::SegmentCount(segments.len()));
    }

    let mut octets: [u8; 4] = [0; 4];
    for (slot, segment) in octets.iter_mut().zip(segments) {
        *slot = parse_segment(segment)?;
    }
    Ok(Octets(octets))
}

/// Like [parse_octets], but only tells whether the text could be tokenized.
#[inline]
pub fn tokenize(text: impl AsRef<str>) -> Option<Octets> {
    parse_octets(text).ok()
}

fn parse_segment(segment: &str) -> Result<u8, MalformedInput> {
    let segment: &str = segment.trim();
    if segment.is_empty() {
        return Ok(0);
    }

    let val: u32 = segment
        .parse()
        .map_err(|source| MalformedInput::NotNumeric {
            segment: segment.into(),
            source,
        })?;

    if val > MAX_OCTET {
        return Err(MalformedInput::OctetTooLarge(val));
    }
    Ok(val as u8)
}

/* -------------------------------------------------------------------------- */
