//! Constant values for the dsa-der codec

#![no_std]

pub mod dsa;

pub use dsa::*;
