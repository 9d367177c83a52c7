// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
Incremental validation of dotted-quad input.

Meant to sit behind a text field: on every keystroke the current text is
classified as [Classification::Invalid], [Classification::Intermediate]
(could still become valid) or [Classification::Acceptable], either as an
IPv4 host address or as an IPv4 subnet mask.

```
use dotquad::{Classification, IpAddressValidator};

let v = IpAddressValidator::new();
assert_eq!(v.validate("10.0.0.1"), Classification::Acceptable);

v.set_mask_validation_mode(true);
assert_eq!(v.validate("255.255.0.0"), Classification::Acceptable);
assert_eq!(v.validate("255.0.255.0"), Classification::Invalid);
```
*/

mod validator;

pub use validator::*;

/* ######################################################################### */
