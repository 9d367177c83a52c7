// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::ValidationMode;
use serde::{Deserialize, Serialize};

/// Serializable settings of an [IpAddressValidator](super::IpAddressValidator).
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    #[serde(default)]
    pub mode: ValidationMode,
}

impl ValidatorConfig {
    pub fn mask() -> Self {
        Self {
            mode: ValidationMode::Mask,
        }
    }
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_json() {
        let cfg: ValidatorConfig = serde_json::from_str(r#"{"mode":"mask"}"#).unwrap();
        assert_eq!(cfg, ValidatorConfig::mask());
        assert_eq!(serde_json::to_string(&cfg).unwrap(), r#"{"mode":"mask"}"#);

        let cfg: ValidatorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.mode, ValidationMode::Address);
    }

    #[test]
    fn test_config_rejects_unknown_mode() {
        assert!(serde_json::from_str::<ValidatorConfig>(r#"{"mode":"cidr"}"#).is_err());
    }
}
