//! Pinmux pin and select names.
//!
//! The pinmux routes peripheral inputs and outputs to the muxed (MIO) pads;
//! dedicated (DIO) pads bypass it. Input selectors start with two constant
//! sources (zero, one) before the MIO pads, output selectors with three
//! (zero, one, high-Z) before the peripheral outputs, which is why the pad
//! index offsets below are nonzero.

use strum::FromRepr;

use crate::Error;

/// Number of muxed (MIO) pads.
pub const NUM_MIO_PADS: usize = 12;
/// Number of dedicated (DIO) pads.
pub const NUM_DIO_PADS: usize = 73;

/// Offset of MIO pad 0 in the [`InputSelect`] encoding.
pub const MIO_PERIPH_INSEL_IDX_OFFSET: u8 = 2;
/// Offset of peripheral output 0 in the [`OutputSelect`] encoding.
pub const PERIPH_OUTSEL_IDX_OFFSET: u8 = 3;

/// A muxable peripheral input of this top.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PeripheralInput {
    SocProxySocGpi12 = 0,
    SocProxySocGpi13 = 1,
    SocProxySocGpi14 = 2,
    SocProxySocGpi15 = 3,
}

impl PeripheralInput {
    /// Last valid peripheral input.
    pub const LAST: PeripheralInput = PeripheralInput::SocProxySocGpi15;
    pub const COUNT: usize = Self::LAST as usize + 1;

    pub fn from_ordinal(ordinal: u8) -> Result<Self, Error> {
        Self::from_repr(ordinal).ok_or(Error::OutOfRange)
    }
}

/// Input source selection for a peripheral input.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum InputSelect {
    /// Tie constantly to zero.
    ConstantZero = 0,
    /// Tie constantly to one.
    ConstantOne = 1,
    Mio0 = 2,
    Mio1 = 3,
    Mio2 = 4,
    Mio3 = 5,
    Mio4 = 6,
    Mio5 = 7,
    Mio6 = 8,
    Mio7 = 9,
    Mio8 = 10,
    Mio9 = 11,
    Mio10 = 12,
    Mio11 = 13,
}

impl InputSelect {
    /// Last valid input select value.
    pub const LAST: InputSelect = InputSelect::Mio11;
    pub const COUNT: usize = Self::LAST as usize + 1;

    pub fn from_ordinal(ordinal: u8) -> Result<Self, Error> {
        Self::from_repr(ordinal).ok_or(Error::OutOfRange)
    }
}

/// A muxed output pad, as addressed by the output selection registers.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum MioOut {
    Mio0 = 0,
    Mio1 = 1,
    Mio2 = 2,
    Mio3 = 3,
    Mio4 = 4,
    Mio5 = 5,
    Mio6 = 6,
    Mio7 = 7,
    Mio8 = 8,
    Mio9 = 9,
    Mio10 = 10,
    Mio11 = 11,
}

impl MioOut {
    /// Last valid MIO output.
    pub const LAST: MioOut = MioOut::Mio11;
    pub const COUNT: usize = Self::LAST as usize + 1;

    pub fn from_ordinal(ordinal: u8) -> Result<Self, Error> {
        Self::from_repr(ordinal).ok_or(Error::OutOfRange)
    }
}

/// Output source selection for a muxed output pad.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum OutputSelect {
    /// Tie constantly to zero.
    ConstantZero = 0,
    /// Tie constantly to one.
    ConstantOne = 1,
    /// Tie constantly to high-Z.
    ConstantHighZ = 2,
    SocProxySocGpo12 = 3,
    SocProxySocGpo13 = 4,
    SocProxySocGpo14 = 5,
    SocProxySocGpo15 = 6,
    OtpMacroTest0 = 7,
}

impl OutputSelect {
    /// Last valid output select value.
    pub const LAST: OutputSelect = OutputSelect::OtpMacroTest0;
    pub const COUNT: usize = Self::LAST as usize + 1;

    pub fn from_ordinal(ordinal: u8) -> Result<Self, Error> {
        Self::from_repr(ordinal).ok_or(Error::OutOfRange)
    }
}

/// A dedicated (DIO) pad, wired straight to its peripheral.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DirectPad {
    SpiHost0Sd0 = 0,
    SpiHost0Sd1 = 1,
    SpiHost0Sd2 = 2,
    SpiHost0Sd3 = 3,
    SpiDeviceSd0 = 4,
    SpiDeviceSd1 = 5,
    SpiDeviceSd2 = 6,
    SpiDeviceSd3 = 7,
    I2c0Scl = 8,
    I2c0Sda = 9,
    GpioGpio0 = 10,
    GpioGpio1 = 11,
    GpioGpio2 = 12,
    GpioGpio3 = 13,
    GpioGpio4 = 14,
    GpioGpio5 = 15,
    GpioGpio6 = 16,
    GpioGpio7 = 17,
    GpioGpio8 = 18,
    GpioGpio9 = 19,
    GpioGpio10 = 20,
    GpioGpio11 = 21,
    GpioGpio12 = 22,
    GpioGpio13 = 23,
    GpioGpio14 = 24,
    GpioGpio15 = 25,
    GpioGpio16 = 26,
    GpioGpio17 = 27,
    GpioGpio18 = 28,
    GpioGpio19 = 29,
    GpioGpio20 = 30,
    GpioGpio21 = 31,
    GpioGpio22 = 32,
    GpioGpio23 = 33,
    GpioGpio24 = 34,
    GpioGpio25 = 35,
    GpioGpio26 = 36,
    GpioGpio27 = 37,
    GpioGpio28 = 38,
    GpioGpio29 = 39,
    GpioGpio30 = 40,
    GpioGpio31 = 41,
    SpiDeviceSck = 42,
    SpiDeviceCsb = 43,
    SpiDeviceTpmCsb = 44,
    Uart0Rx = 45,
    SocProxySocGpi0 = 46,
    SocProxySocGpi1 = 47,
    SocProxySocGpi2 = 48,
    SocProxySocGpi3 = 49,
    SocProxySocGpi4 = 50,
    SocProxySocGpi5 = 51,
    SocProxySocGpi6 = 52,
    SocProxySocGpi7 = 53,
    SocProxySocGpi8 = 54,
    SocProxySocGpi9 = 55,
    SocProxySocGpi10 = 56,
    SocProxySocGpi11 = 57,
    SpiHost0Sck = 58,
    SpiHost0Csb = 59,
    Uart0Tx = 60,
    SocProxySocGpo0 = 61,
    SocProxySocGpo1 = 62,
    SocProxySocGpo2 = 63,
    SocProxySocGpo3 = 64,
    SocProxySocGpo4 = 65,
    SocProxySocGpo5 = 66,
    SocProxySocGpo6 = 67,
    SocProxySocGpo7 = 68,
    SocProxySocGpo8 = 69,
    SocProxySocGpo9 = 70,
    SocProxySocGpo10 = 71,
    SocProxySocGpo11 = 72,
}

impl DirectPad {
    /// Last valid dedicated pad.
    pub const LAST: DirectPad = DirectPad::SocProxySocGpo11;
    pub const COUNT: usize = Self::LAST as usize + 1;

    pub fn from_ordinal(ordinal: u8) -> Result<Self, Error> {
        Self::from_repr(ordinal).ok_or(Error::OutOfRange)
    }
}

/// A muxed (MIO) pad.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum MuxedPad {
    Mio0 = 0,
    Mio1 = 1,
    Mio2 = 2,
    Mio3 = 3,
    Mio4 = 4,
    Mio5 = 5,
    Mio6 = 6,
    Mio7 = 7,
    Mio8 = 8,
    Mio9 = 9,
    Mio10 = 10,
    Mio11 = 11,
}

impl MuxedPad {
    /// Last valid muxed pad.
    pub const LAST: MuxedPad = MuxedPad::Mio11;
    pub const COUNT: usize = Self::LAST as usize + 1;

    pub fn from_ordinal(ordinal: u8) -> Result<Self, Error> {
        Self::from_repr(ordinal).ok_or(Error::OutOfRange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_counts_match_enumerations() {
        assert_eq!(MuxedPad::COUNT, NUM_MIO_PADS);
        assert_eq!(MioOut::COUNT, NUM_MIO_PADS);
        assert_eq!(DirectPad::COUNT, NUM_DIO_PADS);
    }

    #[test]
    fn select_encodings_start_after_the_constants() {
        assert_eq!(InputSelect::Mio0 as u8, MIO_PERIPH_INSEL_IDX_OFFSET);
        assert_eq!(OutputSelect::SocProxySocGpo12 as u8, PERIPH_OUTSEL_IDX_OFFSET);
        // One insel per MIO pad.
        assert_eq!(InputSelect::COUNT, NUM_MIO_PADS + MIO_PERIPH_INSEL_IDX_OFFSET as usize);
    }

    #[test]
    fn ordinal_bounds_are_enforced() {
        assert_eq!(PeripheralInput::from_ordinal(3), Ok(PeripheralInput::SocProxySocGpi15));
        assert_eq!(PeripheralInput::from_ordinal(4), Err(crate::Error::OutOfRange));
        assert_eq!(InputSelect::from_ordinal(13), Ok(InputSelect::Mio11));
        assert_eq!(InputSelect::from_ordinal(14), Err(crate::Error::OutOfRange));
        assert_eq!(OutputSelect::from_ordinal(7), Ok(OutputSelect::OtpMacroTest0));
        assert_eq!(OutputSelect::from_ordinal(8), Err(crate::Error::OutOfRange));
        assert_eq!(DirectPad::from_ordinal(72), Ok(DirectPad::SocProxySocGpo11));
        assert_eq!(DirectPad::from_ordinal(73), Err(crate::Error::OutOfRange));
        assert_eq!(MuxedPad::from_ordinal(12), Err(crate::Error::OutOfRange));
        assert_eq!(MioOut::from_ordinal(12), Err(crate::Error::OutOfRange));
    }
}
