use embassy_stm32::adc::{Adc, AnyAdcChannel};

use musicbox_core::ADC_MAX;

use crate::pins::VolumeAdc;

/// Volume potentiometer on the 12-bit ADC.
pub struct VolumeKnob<'d> {
    adc: Adc<'d, VolumeAdc>,
    pot: AnyAdcChannel<VolumeAdc>,
}

impl<'d> VolumeKnob<'d> {
    pub fn new(adc: Adc<'d, VolumeAdc>, pot: AnyAdcChannel<VolumeAdc>) -> Self {
        VolumeKnob { adc, pot }
    }

    /// Fresh sample in `0..=ADC_MAX`. Sampled once per note onset; a
    /// conversion that yields nothing usable reads as 0 (silent), never
    /// as an error.
    pub fn read_raw(&mut self) -> u16 {
        let raw = self.adc.blocking_read(&mut self.pot);
        raw.min(ADC_MAX)
    }
}
