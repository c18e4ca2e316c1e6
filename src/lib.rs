#![doc = include_str!("../README.md")]
#![no_std]

pub use gx_ser as ser;
pub use gx_utils as utils;
