//! Bring-up firmware for the PolarFire SoC monitor core (E51) and the first
//! application core (U54_1).
//!
//! The hardware-facing pieces (`hal`, `drivers`) are thin register drivers;
//! the start-up sequences in `app` are generic over the traits in `hal` and
//! `drivers` so they can be exercised off-target.

#![cfg_attr(not(test), no_std)]

pub mod app;
pub mod config;
pub mod drivers;
pub mod hal;
