// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    config::ValidatorConfig, octets::parse_octets, rules::evaluate, Classification,
    ValidationMode, Validator,
};
use parking_lot::RwLock;
use std::{fmt, sync::Arc};
use tracing::{debug, trace};

type ModeObserver = Arc<dyn Fn(ValidationMode) + Send + Sync>;

/// Handle returned by [IpAddressValidator::on_mode_changed].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ObserverId(u64);

/// Registered mode-change callbacks.
#[derive(Default)]
struct Observers {
    next_id: u64,
    list: Vec<(ObserverId, ModeObserver)>,
}

/**
Validator for dotted-quad text typed into an input field, one keystroke
at a time.

In address mode the text must become a unicast host address, in mask mode
a contiguous subnet mask. Every call to [validate](Self::validate) is
independent; the only state is the mode and the callbacks interested in it.

Safe to share between threads: each validation reads the mode exactly once.
*/
pub struct IpAddressValidator {
    mode: RwLock<ValidationMode>,
    observers: RwLock<Observers>,
}

impl IpAddressValidator {
    /// New validator in [ValidationMode::Address].
    pub fn new() -> Self {
        Self::with_mode(ValidationMode::Address)
    }

    pub fn with_mode(mode: ValidationMode) -> Self {
        Self {
            mode: RwLock::new(mode),
            observers: RwLock::new(Observers::default()),
        }
    }

    pub fn with_config(cfg: &ValidatorConfig) -> Self {
        Self::with_mode(cfg.mode)
    }

    /// Snapshot of the current settings.
    pub fn config(&self) -> ValidatorConfig {
        ValidatorConfig { mode: self.mode() }
    }

    /**
    Classify `input` in the current mode.

    Never fails: text that cannot be split into four octets is
    [Classification::Invalid]. Note that fewer than four segments
    (f.ex. `192.168.1`) is also invalid rather than intermediate.
    */
    pub fn validate(&self, input: &str) -> Classification {
        let mode: ValidationMode = self.mode();
        match parse_octets(input) {
            Ok(octets) => evaluate(mode, &octets),
            Err(err) => {
                trace!(%mode, input, %err, "rejected malformed input");
                Classification::Invalid
            }
        }
    }

    pub fn mode(&self) -> ValidationMode {
        *self.mode.read()
    }

    /**
    Switch the rules used by [validate](Self::validate).

    Observers are called once if the mode actually changed, and not at all
    if `mode` equals the current one. Callbacks run after the internal lock
    is released, so they may call back into the validator.
    */
    pub fn set_mode(&self, mode: ValidationMode) {
        {
            let mut current = self.mode.write();
            if *current == mode {
                return;
            }
            let old: ValidationMode = *current;
            *current = mode;
            debug!(from = %old, to = %mode, "validation mode changed");
        }
        self.notify(mode);
    }

    pub fn is_mask_validation_mode(&self) -> bool {
        self.mode().is_mask()
    }

    pub fn set_mask_validation_mode(&self, enabled: bool) {
        self.set_mode(ValidationMode::from_mask_flag(enabled));
    }

    /// Register `callback` to receive the new mode on every actual change.
    pub fn on_mode_changed<F>(&self, callback: F) -> ObserverId
    where F: Fn(ValidationMode) + Send + Sync + 'static,
    {
        let mut obs = self.observers.write();
        let id = ObserverId(obs.next_id);
        obs.next_id += 1;
        obs.list.push((id, Arc::new(callback)));
        id
    }

    /// Unregister a callback. Returns false if `id` was not registered.
    pub fn remove_observer(&self, id: ObserverId) -> bool {
        let mut obs = self.observers.write();
        let before: usize = obs.list.len();
        obs.list.retain(|(oid, _)| *oid != id);
        obs.list.len() != before
    }

    fn notify(&self, mode: ValidationMode) {
        // clone the handles so callbacks can (un)register without deadlocking
        let callbacks: Vec<ModeObserver> = self
            .observers
            .read()
            .list
            .iter()
            .map(|(_, cb)| Arc::clone(cb))
            .collect();
        for cb in callbacks {
            cb(mode);
        }
    }
}

impl Default for IpAddressValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for IpAddressValidator {
    fn validate(&self, input: &str) -> Classification {
        IpAddressValidator::validate(self, input)
    }
}

impl fmt::Debug for IpAddressValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IpAddressValidator")
            .field("mode", &self.mode())
            .field("observers", &self.observers.read().list.len())
            .finish()
    }
}

/* -------------------------------------------------------------------------- */
