// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Incremental validation of dotted-quad input (IPv4 addresses and subnet masks).

mod config;
mod ipvalidator;
mod octets;
mod rules;
mod strings;

use serde::{Deserialize, Serialize};
use std::{error, fmt, num::ParseIntError};
use strings::*;

pub use config::ValidatorConfig;
pub use ipvalidator::{IpAddressValidator, ObserverId};
pub use octets::{parse_octets, tokenize, Octets};
pub use rules::{evaluate, evaluate_address, evaluate_mask, is_valid_mask_byte};

pub(crate) const OCTET_COUNT: usize = 4;
pub(crate) const MAX_OCTET: u32 = 255;

/// Result of validating a (possibly partial) piece of user input.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// cannot become valid no matter what is typed next
    Invalid,
    /// not valid yet, but further input may make it so
    Intermediate,
    Acceptable,
}

impl Classification {
    pub fn is_acceptable(&self) -> bool {
        matches!(self, Classification::Acceptable)
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Classification::Invalid)
    }
}

/// Which grammar the four octets are checked against.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// host address, see [evaluate_address]
    #[default]
    Address,
    /// subnet mask, see [evaluate_mask]
    Mask,
}

impl ValidationMode {
    pub fn from_mask_flag(enabled: bool) -> Self {
        match enabled {
            true => ValidationMode::Mask,
            false => ValidationMode::Address,
        }
    }

    pub fn is_mask(&self) -> bool {
        matches!(self, ValidationMode::Mask)
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationMode::Address => f.write_str(MODE_ADDRESS),
            ValidationMode::Mask => f.write_str(MODE_MASK),
        }
    }
}

/// Reasons why text could not be split into four octets.
#[rustfmt::skip]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MalformedInput {
    /// number of dot-separated segments was not 4
    SegmentCount(usize),
    NotNumeric { segment: String, source: ParseIntError },
    OctetTooLarge(u32),
}

impl fmt::Display for MalformedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedInput::SegmentCount(n) => {
                write!(f, "{ERR_SEGMENTS} {n}")
            }
            MalformedInput::NotNumeric { segment, source } => {
                write!(f, "{ERR_NOT_NUMERIC}: '{segment}': {source}")
            }
            MalformedInput::OctetTooLarge(val) => {
                write!(f, "{ERR_OCTET} {val}")
            }
        }
    }
}

impl error::Error for MalformedInput {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            MalformedInput::NotNumeric { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Anything a text-input component can ask "is this input good?".
pub trait Validator {
    fn validate(&self, input: &str) -> Classification;
}
