//! # Chip support definitions for the OpenTitan Darjeeling top
//!
//! ## Overview
//!
//! This crate contains the top-specific definitions of the Darjeeling
//! configuration:
//!
//! - Device memory information (base addresses and sizes for peripherals and
//!   memories)
//! - PLIC interrupt ID names and source mappings
//! - Alert ID names and source mappings
//! - Pinmux pin/select names
//! - Power manager wakeups, reset requests and software resets
//! - Gateable and hintable clocks
//!
//! All of it is fixed at chip-generation time: every table in this crate is a
//! compile-time constant, safe to share between any number of readers, and
//! every lookup is a pure function of its arguments.
//!
//! Register-access code should combine the base addresses in [`memory_map`]
//! with the per-block register layouts; interrupt and alert dispatch code
//! routes on the [`plic`] and [`alert`] enumerations; pinmux and power/clock
//! management code consumes [`pinmux`], [`power`] and [`clock`].
//!
//! Address misuse is a safety-relevant class of bug, so the dynamic lookup
//! wrappers never fall back to a default: an unknown device name or an
//! ordinal past the end of its enumeration is reported as an [`Error`].
//!
//! ## Feature Flags
#![doc = document_features::document_features!()]
#![no_std]

pub mod alert;
pub mod clock;
pub mod device;
pub mod memory_map;
pub mod pinmux;
pub mod plic;
pub mod power;

pub use device::{base_address, size_bytes, Device, MemoryRegion};

/// Errors which can be returned by the dynamic lookup wrappers.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, strum::Display)]
pub enum Error {
    /// The name does not match any device of this top.
    UnknownPeripheral,
    /// The ordinal is past the last valid value of its enumeration.
    OutOfRange,
}

impl core::error::Error for Error {}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self)
    }
}
