//! Power manager wakeups, reset requests and software resets.

use strum::FromRepr;

use crate::Error;

/// A wakeup request line into the power manager.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum WakeupSource {
    PinmuxAonPinWkupReq = 0,
    AonTimerAonWkupReq = 1,
    SocProxyWkupInternalReq = 2,
    SocProxyWkupExternalReq = 3,
}

impl WakeupSource {
    /// Last valid wakeup signal.
    pub const LAST: WakeupSource = WakeupSource::SocProxyWkupExternalReq;
    pub const COUNT: usize = Self::LAST as usize + 1;

    pub fn from_ordinal(ordinal: u8) -> Result<Self, Error> {
        Self::from_repr(ordinal).ok_or(Error::OutOfRange)
    }
}

/// A reset request line into the power manager.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ResetRequest {
    AonTimerAonAonTimerRstReq = 0,
    SocProxyRstReqExternal = 1,
}

impl ResetRequest {
    /// Last valid reset request signal.
    pub const LAST: ResetRequest = ResetRequest::SocProxyRstReqExternal;
    pub const COUNT: usize = Self::LAST as usize + 1;

    pub fn from_ordinal(ordinal: u8) -> Result<Self, Error> {
        Self::from_repr(ordinal).ok_or(Error::OutOfRange)
    }
}

/// A peripheral reset controllable by software through the reset manager.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum SwReset {
    SpiDevice = 0,
    SpiHost0 = 1,
    I2c0 = 2,
}

impl SwReset {
    /// Last valid software reset.
    pub const LAST: SwReset = SwReset::I2c0;
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
        assert_eq!(WakeupSource::from_ordinal(0), Ok(WakeupSource::PinmuxAonPinWkupReq));
        assert_eq!(WakeupSource::from_ordinal(4), Err(crate::Error::OutOfRange));
        assert_eq!(ResetRequest::from_ordinal(1), Ok(ResetRequest::SocProxyRstReqExternal));
        assert_eq!(ResetRequest::from_ordinal(2), Err(crate::Error::OutOfRange));
        assert_eq!(SwReset::from_ordinal(2), Ok(SwReset::I2c0));
        assert_eq!(SwReset::from_ordinal(3), Err(crate::Error::OutOfRange));
    }

    #[test]
    fn bounds_constants() {
        assert_eq!(WakeupSource::LAST as u8, 3);
        assert_eq!(ResetRequest::LAST as u8, 1);
        assert_eq!(SwReset::LAST as u8, 2);
    }
}
