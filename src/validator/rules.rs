// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{octets::Octets, Classification, ValidationMode};

/// Highest first octet of a unicast (class A/B/C) address.
const MAX_UNICAST_FIRST: u8 = 223;
/// Nonzero mask bytes below this may still grow into 128..=255 as the user types.
const MASK_TYPING_THRESHOLD: u8 = 100;

/// Apply the rules of the given `mode` to already tokenized octets.
pub fn evaluate(mode: ValidationMode, octets: &Octets) -> Classification {
    match mode {
        ValidationMode::Address => evaluate_address(octets),
        ValidationMode::Mask => evaluate_mask(octets),
    }
}

/**
Classify octets as a host address. First matching rule wins:

1. first octet is 0 -> [Classification::Intermediate]
2. first octet > 223 (multicast/reserved) -> [Classification::Invalid]
3. last octet is 0 -> [Classification::Invalid]
4. otherwise -> [Classification::Acceptable]

The two middle octets are never checked.
*/
pub fn evaluate_address(octets: &Octets) -> Classification {
    let [first, _, _, last] = octets.0;

    if first == 0 {
        return Classification::Intermediate;
    }
    if first > MAX_UNICAST_FIRST {
        return Classification::Invalid;
    }
    if last == 0 {
        return Classification::Invalid;
    }
    Classification::Acceptable
}

/**
Classify octets as a subnet mask.

A mask is a run of one bits followed by a run of zero bits. Each octet must
be 0 or a contiguous-ones byte, and nothing nonzero may follow a zero octet.
Small nonzero values (< 100) are [Classification::Intermediate] as long as no
zero octet precedes them, since another digit may still turn them into
f.ex. `192` or `255`.
*/
pub fn evaluate_mask(octets: &Octets) -> Classification {
    let [first, rest @ ..] = octets.0;

    if first != 0 && first < MASK_TYPING_THRESHOLD {
        return Classification::Intermediate;
    }
    if !is_valid_mask_byte(first) {
        return Classification::Invalid;
    }

    let mut zero_seen: bool = first == 0;
    for byte in rest {
        if byte == 0 {
            zero_seen = true;
            continue;
        }
        if zero_seen {
            // ones after zeros
            return Classification::Invalid;
        }
        if byte < MASK_TYPING_THRESHOLD {
            return Classification::Intermediate;
        }
        if !is_valid_mask_byte(byte) {
            return Classification::Invalid;
        }
    }
    Classification::Acceptable
}

/**
Whether `byte` can appear in a subnet mask on its own: either `0` or
some number of leading one bits followed only by zero bits
(`128`, `192`, `224`, `240`, `248`, `252`, `254`, `255`).
*/
#[inline]
pub fn is_valid_mask_byte(byte: u8) -> bool {
    byte.leading_ones() + byte.trailing_zeros() == u8::BITS
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use Classification::*;

    const MASK_BYTES: [u8; 9] = [0, 128, 192, 224, 240, 248, 252, 254, 255];

    #[test]
    fn test_mask_bytes_exhaustive() {
        for byte in 0..=u8::MAX {
            assert_eq!(
                is_valid_mask_byte(byte),
                MASK_BYTES.contains(&byte),
                "Failed: {byte}"
            );
        }
    }

    #[rustfmt::skip]
    #[test]
    fn test_address_rules() {
        let tests: Vec<(Octets, Classification)> = vec![
            (Octets::new(10, 0, 0, 1),      Acceptable),
            (Octets::new(223, 255, 255, 1), Acceptable),
            (Octets::new(1, 0, 0, 255),     Acceptable),
            (Octets::new(0, 1, 1, 1),       Intermediate),
            // first rule wins over the host-zero rule
            (Octets::new(0, 0, 0, 0),       Intermediate),
            (Octets::new(224, 0, 0, 1),     Invalid),
            (Octets::new(255, 255, 255, 255), Invalid),
            (Octets::new(10, 0, 0, 0),      Invalid),
            (Octets::new(224, 0, 0, 0),     Invalid),
        ];
        for (octets, expected) in tests {
            assert_eq!(evaluate_address(&octets), expected, "Failed: {octets}");
        }
    }

    #[rustfmt::skip]
    #[test]
    fn test_mask_rules() {
        let tests: Vec<(Octets, Classification)> = vec![
            (Octets::new(255, 255, 255, 0),   Acceptable),
            (Octets::new(255, 255, 255, 255), Acceptable),
            (Octets::new(255, 255, 240, 0),   Acceptable),
            (Octets::new(128, 0, 0, 0),       Acceptable),
            (Octets::new(0, 0, 0, 0),         Acceptable),
            (Octets::new(50, 0, 0, 0),        Intermediate),
            (Octets::new(1, 255, 0, 0),       Intermediate),
            (Octets::new(255, 25, 0, 0),      Intermediate),
            (Octets::new(255, 255, 255, 99),  Intermediate),
            (Octets::new(255, 0, 255, 0),     Invalid),
            (Octets::new(0, 128, 0, 0),       Invalid),
            (Octets::new(255, 0, 0, 1),       Invalid),
            (Octets::new(120, 0, 0, 0),       Invalid),
            (Octets::new(100, 0, 0, 0),       Invalid),
            (Octets::new(255, 127, 0, 0),     Invalid),
            (Octets::new(255, 253, 0, 0),     Invalid),
            (Octets::new(193, 0, 0, 0),       Invalid),
        ];
        for (octets, expected) in tests {
            assert_eq!(evaluate_mask(&octets), expected, "Failed: {octets}");
        }
    }

    #[test]
    fn test_mask_accepts_only_contiguous() {
        // every Acceptable mask must be a real prefix mask and vice versa
        for prefix in 0..=32u32 {
            let mask: u32 = u32::MAX.checked_shl(32 - prefix).unwrap_or(0);
            let octets = Octets(mask.to_be_bytes());
            assert_eq!(evaluate_mask(&octets), Acceptable, "Failed: /{prefix}");
            assert_eq!(octets.mask_prefix_len(), Some(prefix as u8));
        }
    }

    #[test]
    fn test_evaluate_dispatch() {
        let octets = Octets::new(255, 255, 255, 0);
        assert_eq!(evaluate(ValidationMode::Address, &octets), Invalid);
        assert_eq!(evaluate(ValidationMode::Mask, &octets), Acceptable);
    }
}
