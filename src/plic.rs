//! PLIC interrupt ID names and source mappings.
//!
//! Interrupt IDs are global across the top: ID 0 is reserved for "no
//! interrupt", and the IDs of each peripheral's interrupt lines form one
//! contiguous run, in peripheral order, with no gaps. The claim/complete
//! register of the PLIC yields these IDs directly, so dispatch code can map
//! a claimed ID to its owning [`Peripheral`] with [`Interrupt::peripheral`]
//! or the [`INTERRUPT_FOR_PERIPHERAL`] table.

use strum::FromRepr;

use crate::Error;

/// A peripheral that raises interrupts through the PLIC.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Peripheral {
    /// No peripheral; owner of the reserved ID 0.
    Unknown = 0,
    Uart0 = 1,
    Gpio = 2,
    SpiDevice = 3,
    I2c0 = 4,
    RvTimer = 5,
    OtpCtrl = 6,
    AlertHandler = 7,
    SpiHost0 = 8,
    PwrmgrAon = 9,
    AonTimerAon = 10,
    SocProxy = 11,
    Hmac = 12,
    Kmac = 13,
    Otbn = 14,
    KeymgrDpe = 15,
    Csrng = 16,
    EntropySrc = 17,
    Edn0 = 18,
    Edn1 = 19,
    Dma = 20,
    Mbx0 = 21,
    Mbx1 = 22,
    Mbx2 = 23,
    Mbx3 = 24,
    Mbx4 = 25,
    Mbx5 = 26,
    Mbx6 = 27,
    MbxJtag = 28,
    MbxPcie0 = 29,
    MbxPcie1 = 30,
    RaclCtrl = 31,
    AcRangeCheck = 32,
}

impl Peripheral {
    /// Final PLIC peripheral.
    pub const LAST: Peripheral = Peripheral::AcRangeCheck;
    pub const COUNT: usize = Self::LAST as usize + 1;
}

/// An interrupt target of the PLIC.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Target {
    /// Ibex core 0.
    Ibex0 = 0,
}

impl Target {
    /// Final PLIC target.
    pub const LAST: Target = Target::Ibex0;
    pub const COUNT: usize = Self::LAST as usize + 1;
}

/// A global interrupt ID of this top.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum Interrupt {
    /// No interrupt; what the claim register yields when nothing is pending.
    None = 0,
    Uart0TxWatermark = 1,
    Uart0RxWatermark = 2,
    Uart0TxDone = 3,
    Uart0RxOverflow = 4,
    Uart0RxFrameErr = 5,
    Uart0RxBreakErr = 6,
    Uart0RxTimeout = 7,
    Uart0RxParityErr = 8,
    Uart0TxEmpty = 9,
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
    SpiDeviceUploadCmdfifoNotEmpty = 42,
    SpiDeviceUploadPayloadNotEmpty = 43,
    SpiDeviceUploadPayloadOverflow = 44,
    SpiDeviceReadbufWatermark = 45,
    SpiDeviceReadbufFlip = 46,
    SpiDeviceTpmHeaderNotEmpty = 47,
    SpiDeviceTpmRdfifoCmdEnd = 48,
    SpiDeviceTpmRdfifoDrop = 49,
    I2c0FmtThreshold = 50,
    I2c0RxThreshold = 51,
    I2c0AcqThreshold = 52,
    I2c0RxOverflow = 53,
    I2c0ControllerHalt = 54,
    I2c0SclInterference = 55,
    I2c0SdaInterference = 56,
    I2c0StretchTimeout = 57,
    I2c0SdaUnstable = 58,
    I2c0CmdComplete = 59,
    I2c0TxStretch = 60,
    I2c0TxThreshold = 61,
    I2c0AcqStretch = 62,
    I2c0UnexpStop = 63,
    I2c0HostTimeout = 64,
    RvTimerTimerExpiredHart0Timer0 = 65,
    OtpCtrlOtpOperationDone = 66,
    OtpCtrlOtpError = 67,
    AlertHandlerClassa = 68,
    AlertHandlerClassb = 69,
    AlertHandlerClassc = 70,
    AlertHandlerClassd = 71,
    SpiHost0Error = 72,
    SpiHost0SpiEvent = 73,
    PwrmgrAonWakeup = 74,
    AonTimerAonWkupTimerExpired = 75,
    AonTimerAonWdogTimerBark = 76,
    SocProxyExternal0 = 77,
    SocProxyExternal1 = 78,
    SocProxyExternal2 = 79,
    SocProxyExternal3 = 80,
    SocProxyExternal4 = 81,
    SocProxyExternal5 = 82,
    SocProxyExternal6 = 83,
    SocProxyExternal7 = 84,
    SocProxyExternal8 = 85,
    SocProxyExternal9 = 86,
    SocProxyExternal10 = 87,
    SocProxyExternal11 = 88,
    SocProxyExternal12 = 89,
    SocProxyExternal13 = 90,
    SocProxyExternal14 = 91,
    SocProxyExternal15 = 92,
    SocProxyExternal16 = 93,
    SocProxyExternal17 = 94,
    SocProxyExternal18 = 95,
    SocProxyExternal19 = 96,
    SocProxyExternal20 = 97,
    SocProxyExternal21 = 98,
    SocProxyExternal22 = 99,
    SocProxyExternal23 = 100,
    SocProxyExternal24 = 101,
    SocProxyExternal25 = 102,
    SocProxyExternal26 = 103,
    SocProxyExternal27 = 104,
    SocProxyExternal28 = 105,
    SocProxyExternal29 = 106,
    SocProxyExternal30 = 107,
    SocProxyExternal31 = 108,
    HmacHmacDone = 109,
    HmacFifoEmpty = 110,
    HmacHmacErr = 111,
    KmacKmacDone = 112,
    KmacFifoEmpty = 113,
    KmacKmacErr = 114,
    OtbnDone = 115,
    KeymgrDpeOpDone = 116,
    CsrngCsCmdReqDone = 117,
    CsrngCsEntropyReq = 118,
    CsrngCsHwInstExc = 119,
    CsrngCsFatalErr = 120,
    EntropySrcEsEntropyValid = 121,
    EntropySrcEsHealthTestFailed = 122,
    EntropySrcEsObserveFifoReady = 123,
    EntropySrcEsFatalErr = 124,
    Edn0EdnCmdReqDone = 125,
    Edn0EdnFatalErr = 126,
    Edn1EdnCmdReqDone = 127,
    Edn1EdnFatalErr = 128,
    DmaDmaDone = 129,
    DmaDmaChunkDone = 130,
    DmaDmaError = 131,
    Mbx0MbxReady = 132,
    Mbx0MbxAbort = 133,
    Mbx0MbxError = 134,
    Mbx1MbxReady = 135,
    Mbx1MbxAbort = 136,
    Mbx1MbxError = 137,
    Mbx2MbxReady = 138,
    Mbx2MbxAbort = 139,
    Mbx2MbxError = 140,
    Mbx3MbxReady = 141,
    Mbx3MbxAbort = 142,
    Mbx3MbxError = 143,
    Mbx4MbxReady = 144,
    Mbx4MbxAbort = 145,
    Mbx4MbxError = 146,
    Mbx5MbxReady = 147,
    Mbx5MbxAbort = 148,
    Mbx5MbxError = 149,
    Mbx6MbxReady = 150,
    Mbx6MbxAbort = 151,
    Mbx6MbxError = 152,
    MbxJtagMbxReady = 153,
    MbxJtagMbxAbort = 154,
    MbxJtagMbxError = 155,
    MbxPcie0MbxReady = 156,
    MbxPcie0MbxAbort = 157,
    MbxPcie0MbxError = 158,
    MbxPcie1MbxReady = 159,
    MbxPcie1MbxAbort = 160,
    MbxPcie1MbxError = 161,
    RaclCtrlRaclError = 162,
    AcRangeCheckDenyCntReached = 163,
}

impl Interrupt {
    /// The last valid interrupt ID.
    pub const LAST: Interrupt = Interrupt::AcRangeCheckDenyCntReached;
    pub const COUNT: usize = Self::LAST as usize + 1;

    /// Converts a claimed interrupt ID into its enumeration value.
    pub fn from_id(id: u32) -> Result<Interrupt, Error> {
        Interrupt::from_repr(id).ok_or(Error::OutOfRange)
    }

    /// The peripheral that raises this interrupt.
    pub const fn peripheral(self) -> Peripheral {
        owner(self as u32)
    }
}

// Each arm is one peripheral's run of interrupt lines, in ID order.
const fn owner(id: u32) -> Peripheral {
    match id {
        0 => Peripheral::Unknown,
        1..=9 => Peripheral::Uart0,
        10..=41 => Peripheral::Gpio,
        42..=49 => Peripheral::SpiDevice,
        50..=64 => Peripheral::I2c0,
        65 => Peripheral::RvTimer,
        66..=67 => Peripheral::OtpCtrl,
        68..=71 => Peripheral::AlertHandler,
        72..=73 => Peripheral::SpiHost0,
        74 => Peripheral::PwrmgrAon,
        75..=76 => Peripheral::AonTimerAon,
        77..=108 => Peripheral::SocProxy,
        109..=111 => Peripheral::Hmac,
        112..=114 => Peripheral::Kmac,
        115 => Peripheral::Otbn,
        116 => Peripheral::KeymgrDpe,
        117..=120 => Peripheral::Csrng,
        121..=124 => Peripheral::EntropySrc,
        125..=126 => Peripheral::Edn0,
        127..=128 => Peripheral::Edn1,
        129..=131 => Peripheral::Dma,
        132..=134 => Peripheral::Mbx0,
        135..=137 => Peripheral::Mbx1,
        138..=140 => Peripheral::Mbx2,
        141..=143 => Peripheral::Mbx3,
        144..=146 => Peripheral::Mbx4,
        147..=149 => Peripheral::Mbx5,
        150..=152 => Peripheral::Mbx6,
        153..=155 => Peripheral::MbxJtag,
        156..=158 => Peripheral::MbxPcie0,
        159..=161 => Peripheral::MbxPcie1,
        162 => Peripheral::RaclCtrl,
        _ => Peripheral::AcRangeCheck,
    }
}

/// Mapping from interrupt ID to owning peripheral, indexed by ID.
pub static INTERRUPT_FOR_PERIPHERAL: [Peripheral; Interrupt::COUNT] = {
    let mut table = [Peripheral::Unknown; Interrupt::COUNT];
    let mut id = 0;
    while id < Interrupt::COUNT {
        table[id] = owner(id as u32);
        id += 1;
    }
    table
};

/// The peripheral that raises interrupt `id`.
pub fn interrupt_owning_peripheral(id: u32) -> Result<Peripheral, Error> {
    Interrupt::from_id(id).map(Interrupt::peripheral)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_id_maps_to_a_variant() {
        for id in 0..Interrupt::COUNT as u32 {
            let irq = Interrupt::from_id(id).unwrap();
            assert_eq!(irq as u32, id);
        }
        assert_eq!(Interrupt::from_id(164), Err(crate::Error::OutOfRange));
        assert_eq!(interrupt_owning_peripheral(164), Err(crate::Error::OutOfRange));
        assert_eq!(Interrupt::LAST as u32, 163);
    }

    #[test]
    fn reverse_table_matches_accessor() {
        assert_eq!(INTERRUPT_FOR_PERIPHERAL.len(), Interrupt::LAST as usize + 1);
        for id in 0..Interrupt::COUNT as u32 {
            let irq = Interrupt::from_id(id).unwrap();
            assert_eq!(INTERRUPT_FOR_PERIPHERAL[id as usize], irq.peripheral());
        }
    }

    #[test]
    fn ownership_runs_are_contiguous() {
        // ID 0 is reserved; from ID 1 on, each peripheral owns exactly one
        // run of IDs and the runs appear in peripheral order.
        assert_eq!(INTERRUPT_FOR_PERIPHERAL[0], Peripheral::Unknown);
        let mut previous = Peripheral::Uart0;
        for id in 1..Interrupt::COUNT {
            let current = INTERRUPT_FOR_PERIPHERAL[id];
            assert!(
                current == previous || current as u8 == previous as u8 + 1,
                "gap or reordering at interrupt {id}"
            );
            previous = current;
        }
        assert_eq!(previous, Peripheral::LAST);
    }

    #[test]
    fn uart0_scenario() {
        assert_eq!(interrupt_owning_peripheral(1), Ok(Peripheral::Uart0));
        assert_eq!(Interrupt::from_id(1), Ok(Interrupt::Uart0TxWatermark));
        assert_eq!(Interrupt::Uart0TxEmpty.peripheral(), Peripheral::Uart0);
        assert_eq!(Interrupt::GpioGpio0.peripheral(), Peripheral::Gpio);
    }
}
