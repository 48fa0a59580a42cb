//! Gateable and hintable clocks of the clock manager.
//!
//! Gateable clocks are turned off directly by software; hintable clocks take
//! a software hint that the block honors once it is idle.

use strum::FromRepr;

use crate::Error;

/// A software-gateable clock.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum GateableClock {
    /// Clock `clk_io_div4_peri` in group `peri`.
    IoDiv4Peri = 0,
    /// Clock `clk_io_div2_peri` in group `peri`.
    IoDiv2Peri = 1,
}

impl GateableClock {
    /// Last valid gateable clock.
    pub const LAST: GateableClock = GateableClock::IoDiv2Peri;
    pub const COUNT: usize = Self::LAST as usize + 1;

    pub fn from_ordinal(ordinal: u8) -> Result<Self, Error> {
        Self::from_repr(ordinal).ok_or(Error::OutOfRange)
    }
}

/// A software-hintable clock.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum HintableClock {
    /// Clock `clk_main_aes` in group `trans`.
    MainAes = 0,
    /// Clock `clk_main_hmac` in group `trans`.
    MainHmac = 1,
    /// Clock `clk_main_kmac` in group `trans`.
    MainKmac = 2,
    /// Clock `clk_main_otbn` in group `trans`.
    MainOtbn = 3,
}

impl HintableClock {
    /// Last valid hintable clock.
    pub const LAST: HintableClock = HintableClock::MainOtbn;
    pub const COUNT: usize = Self::LAST as usize + 1;

    pub fn from_ordinal(ordinal: u8) -> Result<Self, Error> {
        Self::from_repr(ordinal).ok_or(Error::OutOfRange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_bounds_are_enforced() {
        assert_eq!(GateableClock::from_ordinal(1), Ok(GateableClock::IoDiv2Peri));
        assert_eq!(GateableClock::from_ordinal(2), Err(crate::Error::OutOfRange));
        assert_eq!(HintableClock::from_ordinal(3), Ok(HintableClock::MainOtbn));
        assert_eq!(HintableClock::from_ordinal(4), Err(crate::Error::OutOfRange));
    }
}
