#![cfg_attr(not(test), no_std)]

pub mod audio;
pub mod display;
pub mod input;

/// Full-scale value of the volume potentiometer source (12-bit ADC).
pub const ADC_MAX: u16 = 4095;
