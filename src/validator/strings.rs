// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

pub(crate) static DOT: char = '.';

// octets.rs
pub(crate) static ERR_SEGMENTS: &str = "dotted-quad must have exactly 4 segments, got";
pub(crate) static ERR_NOT_NUMERIC: &str = "octet is not a decimal number";
pub(crate) static ERR_OCTET: &str = "octet must be <= 255, got";

// ipvalidator.rs
pub(crate) static MODE_ADDRESS: &str = "address";
pub(crate) static MODE_MASK: &str = "mask";
