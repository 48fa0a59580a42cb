//! Alert ID names and source mappings.
//!
//! Alerts are fault signals routed to the alert handler, separate from the
//! PLIC interrupt fabric. The fatal/recoverable classification of each alert
//! is part of its name. As with interrupts, the alert IDs of one peripheral
//! form a single contiguous run in peripheral order.

use strum::FromRepr;

use crate::Error;

/// A peripheral that sends alerts to the alert handler.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Peripheral {
    /// An alert source outside the top.
    External = 0,
    Uart0 = 1,
    Gpio = 2,
    SpiDevice = 3,
    I2c0 = 4,
    RvTimer = 5,
    OtpCtrl = 6,
    LcCtrl = 7,
    SpiHost0 = 8,
    PwrmgrAon = 9,
    RstmgrAon = 10,
    ClkmgrAon = 11,
    PinmuxAon = 12,
    AonTimerAon = 13,
    SocProxy = 14,
    SramCtrlRetAon = 15,
    RvDm = 16,
    RvPlic = 17,
    Aes = 18,
    Hmac = 19,
    Kmac = 20,
    Otbn = 21,
    KeymgrDpe = 22,
    Csrng = 23,
    EntropySrc = 24,
    Edn0 = 25,
    Edn1 = 26,
    SramCtrlMain = 27,
    SramCtrlMbox = 28,
    RomCtrl0 = 29,
    RomCtrl1 = 30,
    Dma = 31,
    Mbx0 = 32,
    Mbx1 = 33,
    Mbx2 = 34,
    Mbx3 = 35,
    Mbx4 = 36,
    Mbx5 = 37,
    Mbx6 = 38,
    MbxJtag = 39,
    MbxPcie0 = 40,
    MbxPcie1 = 41,
    SocDbgCtrl = 42,
    RaclCtrl = 43,
    AcRangeCheck = 44,
    RvCoreIbex = 45,
}

impl Peripheral {
    /// Final alert peripheral.
    pub const LAST: Peripheral = Peripheral::RvCoreIbex;
    pub const COUNT: usize = Self::LAST as usize + 1;
}

/// An alert ID of this top.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum Alert {
    Uart0FatalFault = 0,
    GpioFatalFault = 1,
    SpiDeviceFatalFault = 2,
    I2c0FatalFault = 3,
    RvTimerFatalFault = 4,
    OtpCtrlFatalMacroError = 5,
    OtpCtrlFatalCheckError = 6,
    OtpCtrlFatalBusIntegError = 7,
    OtpCtrlFatalPrimOtpAlert = 8,
    OtpCtrlRecovPrimOtpAlert = 9,
    LcCtrlFatalProgError = 10,
    LcCtrlFatalStateError = 11,
    LcCtrlFatalBusIntegError = 12,
    SpiHost0FatalFault = 13,
    PwrmgrAonFatalFault = 14,
    RstmgrAonFatalFault = 15,
    RstmgrAonFatalCnstyFault = 16,
    ClkmgrAonRecovFault = 17,
    ClkmgrAonFatalFault = 18,
    PinmuxAonFatalFault = 19,
    AonTimerAonFatalFault = 20,
    SocProxyFatalAlertIntg = 21,
    SocProxyFatalAlertExternal0 = 22,
    SocProxyFatalAlertExternal1 = 23,
    SocProxyFatalAlertExternal2 = 24,
    SocProxyFatalAlertExternal3 = 25,
    SocProxyFatalAlertExternal4 = 26,
    SocProxyFatalAlertExternal5 = 27,
    SocProxyFatalAlertExternal6 = 28,
    SocProxyFatalAlertExternal7 = 29,
    SocProxyFatalAlertExternal8 = 30,
    SocProxyFatalAlertExternal9 = 31,
    SocProxyFatalAlertExternal10 = 32,
    SocProxyFatalAlertExternal11 = 33,
    SocProxyFatalAlertExternal12 = 34,
    SocProxyFatalAlertExternal13 = 35,
    SocProxyFatalAlertExternal14 = 36,
    SocProxyFatalAlertExternal15 = 37,
    SocProxyFatalAlertExternal16 = 38,
    SocProxyFatalAlertExternal17 = 39,
    SocProxyFatalAlertExternal18 = 40,
    SocProxyFatalAlertExternal19 = 41,
    SocProxyFatalAlertExternal20 = 42,
    SocProxyFatalAlertExternal21 = 43,
    SocProxyFatalAlertExternal22 = 44,
    SocProxyFatalAlertExternal23 = 45,
    SocProxyRecovAlertExternal0 = 46,
    SocProxyRecovAlertExternal1 = 47,
    SocProxyRecovAlertExternal2 = 48,
    SocProxyRecovAlertExternal3 = 49,
    SramCtrlRetAonFatalError = 50,
    RvDmFatalFault = 51,
    RvPlicFatalFault = 52,
    AesRecovCtrlUpdateErr = 53,
    AesFatalFault = 54,
    HmacFatalFault = 55,
    KmacRecovOperationErr = 56,
    KmacFatalFaultErr = 57,
    OtbnFatal = 58,
    OtbnRecov = 59,
    KeymgrDpeRecovOperationErr = 60,
    KeymgrDpeFatalFaultErr = 61,
    CsrngRecovAlert = 62,
    CsrngFatalAlert = 63,
    EntropySrcRecovAlert = 64,
    EntropySrcFatalAlert = 65,
    Edn0RecovAlert = 66,
    Edn0FatalAlert = 67,
    Edn1RecovAlert = 68,
    Edn1FatalAlert = 69,
    SramCtrlMainFatalError = 70,
    SramCtrlMboxFatalError = 71,
    RomCtrl0Fatal = 72,
    RomCtrl1Fatal = 73,
    DmaFatalFault = 74,
    Mbx0FatalFault = 75,
    Mbx0RecovFault = 76,
    Mbx1FatalFault = 77,
    Mbx1RecovFault = 78,
    Mbx2FatalFault = 79,
    Mbx2RecovFault = 80,
    Mbx3FatalFault = 81,
    Mbx3RecovFault = 82,
    Mbx4FatalFault = 83,
    Mbx4RecovFault = 84,
    Mbx5FatalFault = 85,
    Mbx5RecovFault = 86,
    Mbx6FatalFault = 87,
    Mbx6RecovFault = 88,
    MbxJtagFatalFault = 89,
    MbxJtagRecovFault = 90,
    MbxPcie0FatalFault = 91,
    MbxPcie0RecovFault = 92,
    MbxPcie1FatalFault = 93,
    MbxPcie1RecovFault = 94,
    SocDbgCtrlFatalFault = 95,
    SocDbgCtrlRecovCtrlUpdateErr = 96,
    RaclCtrlFatalFault = 97,
    RaclCtrlRecovCtrlUpdateErr = 98,
    AcRangeCheckRecovCtrlUpdateErr = 99,
    AcRangeCheckFatalFault = 100,
    RvCoreIbexFatalSwErr = 101,
    RvCoreIbexRecovSwErr = 102,
    RvCoreIbexFatalHwErr = 103,
    RvCoreIbexRecovHwErr = 104,
}

impl Alert {
    /// The last valid alert ID.
    pub const LAST: Alert = Alert::RvCoreIbexRecovHwErr;
    pub const COUNT: usize = Self::LAST as usize + 1;

    /// Converts an alert cause ID into its enumeration value.
    pub fn from_id(id: u32) -> Result<Alert, Error> {
        Alert::from_repr(id).ok_or(Error::OutOfRange)
    }

    /// The peripheral that sends this alert.
    pub const fn peripheral(self) -> Peripheral {
        owner(self as u32)
    }
}

// Each arm is one peripheral's run of alerts, in ID order.
const fn owner(id: u32) -> Peripheral {
    match id {
        0 => Peripheral::Uart0,
        1 => Peripheral::Gpio,
        2 => Peripheral::SpiDevice,
        3 => Peripheral::I2c0,
        4 => Peripheral::RvTimer,
        5..=9 => Peripheral::OtpCtrl,
        10..=12 => Peripheral::LcCtrl,
        13 => Peripheral::SpiHost0,
        14 => Peripheral::PwrmgrAon,
        15..=16 => Peripheral::RstmgrAon,
        17..=18 => Peripheral::ClkmgrAon,
        19 => Peripheral::PinmuxAon,
        20 => Peripheral::AonTimerAon,
        21..=49 => Peripheral::SocProxy,
        50 => Peripheral::SramCtrlRetAon,
        51 => Peripheral::RvDm,
        52 => Peripheral::RvPlic,
        53..=54 => Peripheral::Aes,
        55 => Peripheral::Hmac,
        56..=57 => Peripheral::Kmac,
        58..=59 => Peripheral::Otbn,
        60..=61 => Peripheral::KeymgrDpe,
        62..=63 => Peripheral::Csrng,
        64..=65 => Peripheral::EntropySrc,
        66..=67 => Peripheral::Edn0,
        68..=69 => Peripheral::Edn1,
        70 => Peripheral::SramCtrlMain,
        71 => Peripheral::SramCtrlMbox,
        72 => Peripheral::RomCtrl0,
        73 => Peripheral::RomCtrl1,
        74 => Peripheral::Dma,
        75..=76 => Peripheral::Mbx0,
        77..=78 => Peripheral::Mbx1,
        79..=80 => Peripheral::Mbx2,
        81..=82 => Peripheral::Mbx3,
        83..=84 => Peripheral::Mbx4,
        85..=86 => Peripheral::Mbx5,
        87..=88 => Peripheral::Mbx6,
        89..=90 => Peripheral::MbxJtag,
        91..=92 => Peripheral::MbxPcie0,
        93..=94 => Peripheral::MbxPcie1,
        95..=96 => Peripheral::SocDbgCtrl,
        97..=98 => Peripheral::RaclCtrl,
        99..=100 => Peripheral::AcRangeCheck,
        _ => Peripheral::RvCoreIbex,
    }
}

/// Mapping from alert ID to owning peripheral, indexed by ID.
pub static ALERT_FOR_PERIPHERAL: [Peripheral; Alert::COUNT] = {
    let mut table = [Peripheral::External; Alert::COUNT];
    let mut id = 0;
    while id < Alert::COUNT {
        table[id] = owner(id as u32);
        id += 1;
    }
    table
};

/// The peripheral that sends alert `id`.
pub fn alert_owning_peripheral(id: u32) -> Result<Peripheral, Error> {
    Alert::from_id(id).map(Alert::peripheral)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_id_maps_to_a_variant() {
        for id in 0..Alert::COUNT as u32 {
            let alert = Alert::from_id(id).unwrap();
            assert_eq!(alert as u32, id);
        }
        assert_eq!(Alert::from_id(105), Err(crate::Error::OutOfRange));
        assert_eq!(alert_owning_peripheral(105), Err(crate::Error::OutOfRange));
        assert_eq!(Alert::LAST as u32, 104);
    }

    #[test]
    fn reverse_table_matches_accessor() {
        assert_eq!(ALERT_FOR_PERIPHERAL.len(), Alert::LAST as usize + 1);
        for id in 0..Alert::COUNT as u32 {
            let alert = Alert::from_id(id).unwrap();
            assert_eq!(ALERT_FOR_PERIPHERAL[id as usize], alert.peripheral());
        }
    }

    #[test]
    fn ownership_runs_are_contiguous() {
        // `External` owns no alert of this top; the first in-chip source is
        // uart0 and each later peripheral owns exactly one run of IDs.
        let mut previous = Peripheral::Uart0;
        for id in 0..Alert::COUNT {
            let current = ALERT_FOR_PERIPHERAL[id];
            assert!(
                current == previous || current as u8 == previous as u8 + 1,
                "gap or reordering at alert {id}"
            );
            previous = current;
        }
        assert_eq!(previous, Peripheral::LAST);
    }

    #[test]
    fn uart0_scenario() {
        assert_eq!(alert_owning_peripheral(0), Ok(Peripheral::Uart0));
        assert_eq!(Alert::from_id(0), Ok(Alert::Uart0FatalFault));
        assert_eq!(Alert::RvCoreIbexRecovHwErr.peripheral(), Peripheral::RvCoreIbex);
    }
}
