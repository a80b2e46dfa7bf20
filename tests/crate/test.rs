#![no_std]

pub use big_integer::*;
