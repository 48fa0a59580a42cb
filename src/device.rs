//! Typed and name-keyed access to the device memory map.
//!
//! [`Device`] enumerates every addressable window of the top, one variant per
//! `BASE_ADDR`/`SIZE_BYTES` pair in [`crate::memory_map`]. Devices with more
//! than one bus window (OTP controller, debug module, SRAM and ROM
//! controllers, mailboxes) contribute one variant per window.
//!
//! [`MemoryRegion`] enumerates the memories of the top separately. Each
//! region occupies exactly the memory window of its controlling device; the
//! address coincidence is by construction, not an error.

use crate::memory_map::*;
use crate::Error;

/// An addressable device window of this top.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Device {
    Uart0,
    Gpio,
    SpiDevice,
    I2c0,
    RvTimer,
    OtpCtrlCore,
    OtpMacroPrim,
    LcCtrlRegs,
    AlertHandler,
    SpiHost0,
    PwrmgrAon,
    RstmgrAon,
    ClkmgrAon,
    PinmuxAon,
    AonTimerAon,
    Ast,
    SocProxyCore,
    SocProxyCtn,
    SramCtrlRetAonRegs,
    SramCtrlRetAonRam,
    RvDmRegs,
    RvDmMem,
    RvPlic,
    Aes,
    Hmac,
    Kmac,
    Otbn,
    KeymgrDpe,
    Csrng,
    EntropySrc,
    Edn0,
    Edn1,
    SramCtrlMainRegs,
    SramCtrlMainRam,
    SramCtrlMboxRegs,
    SramCtrlMboxRam,
    RomCtrl0Regs,
    RomCtrl0Rom,
    RomCtrl1Regs,
    RomCtrl1Rom,
    Dma,
    Mbx0Core,
    Mbx1Core,
    Mbx2Core,
    Mbx3Core,
    Mbx4Core,
    Mbx5Core,
    Mbx6Core,
    MbxJtagCore,
    MbxPcie0Core,
    MbxPcie1Core,
    SocDbgCtrlCore,
    RvCoreIbexCfg,
}

impl Device {
    /// Every device window of this top, in generation order.
    pub const ALL: [Device; 53] = [
        Device::Uart0,
        Device::Gpio,
        Device::SpiDevice,
        Device::I2c0,
        Device::RvTimer,
        Device::OtpCtrlCore,
        Device::OtpMacroPrim,
        Device::LcCtrlRegs,
        Device::AlertHandler,
        Device::SpiHost0,
        Device::PwrmgrAon,
        Device::RstmgrAon,
        Device::ClkmgrAon,
        Device::PinmuxAon,
        Device::AonTimerAon,
        Device::Ast,
        Device::SocProxyCore,
        Device::SocProxyCtn,
        Device::SramCtrlRetAonRegs,
        Device::SramCtrlRetAonRam,
        Device::RvDmRegs,
        Device::RvDmMem,
        Device::RvPlic,
        Device::Aes,
        Device::Hmac,
        Device::Kmac,
        Device::Otbn,
        Device::KeymgrDpe,
        Device::Csrng,
        Device::EntropySrc,
        Device::Edn0,
        Device::Edn1,
        Device::SramCtrlMainRegs,
        Device::SramCtrlMainRam,
        Device::SramCtrlMboxRegs,
        Device::SramCtrlMboxRam,
        Device::RomCtrl0Regs,
        Device::RomCtrl0Rom,
        Device::RomCtrl1Regs,
        Device::RomCtrl1Rom,
        Device::Dma,
        Device::Mbx0Core,
        Device::Mbx1Core,
        Device::Mbx2Core,
        Device::Mbx3Core,
        Device::Mbx4Core,
        Device::Mbx5Core,
        Device::Mbx6Core,
        Device::MbxJtagCore,
        Device::MbxPcie0Core,
        Device::MbxPcie1Core,
        Device::SocDbgCtrlCore,
        Device::RvCoreIbexCfg,
    ];

    /// Base address of the device's reserved memory area.
    pub const fn base_address(self) -> u32 {
        match self {
            Device::Uart0 => UART0_BASE_ADDR,
            Device::Gpio => GPIO_BASE_ADDR,
            Device::SpiDevice => SPI_DEVICE_BASE_ADDR,
            Device::I2c0 => I2C0_BASE_ADDR,
            Device::RvTimer => RV_TIMER_BASE_ADDR,
            Device::OtpCtrlCore => OTP_CTRL_CORE_BASE_ADDR,
            Device::OtpMacroPrim => OTP_MACRO_PRIM_BASE_ADDR,
            Device::LcCtrlRegs => LC_CTRL_REGS_BASE_ADDR,
            Device::AlertHandler => ALERT_HANDLER_BASE_ADDR,
            Device::SpiHost0 => SPI_HOST0_BASE_ADDR,
            Device::PwrmgrAon => PWRMGR_AON_BASE_ADDR,
            Device::RstmgrAon => RSTMGR_AON_BASE_ADDR,
            Device::ClkmgrAon => CLKMGR_AON_BASE_ADDR,
            Device::PinmuxAon => PINMUX_AON_BASE_ADDR,
            Device::AonTimerAon => AON_TIMER_AON_BASE_ADDR,
            Device::Ast => AST_BASE_ADDR,
            Device::SocProxyCore => SOC_PROXY_CORE_BASE_ADDR,
            Device::SocProxyCtn => SOC_PROXY_CTN_BASE_ADDR,
            Device::SramCtrlRetAonRegs => SRAM_CTRL_RET_AON_REGS_BASE_ADDR,
            Device::SramCtrlRetAonRam => SRAM_CTRL_RET_AON_RAM_BASE_ADDR,
            Device::RvDmRegs => RV_DM_REGS_BASE_ADDR,
            Device::RvDmMem => RV_DM_MEM_BASE_ADDR,
            Device::RvPlic => RV_PLIC_BASE_ADDR,
            Device::Aes => AES_BASE_ADDR,
            Device::Hmac => HMAC_BASE_ADDR,
            Device::Kmac => KMAC_BASE_ADDR,
            Device::Otbn => OTBN_BASE_ADDR,
            Device::KeymgrDpe => KEYMGR_DPE_BASE_ADDR,
            Device::Csrng => CSRNG_BASE_ADDR,
            Device::EntropySrc => ENTROPY_SRC_BASE_ADDR,
            Device::Edn0 => EDN0_BASE_ADDR,
            Device::Edn1 => EDN1_BASE_ADDR,
            Device::SramCtrlMainRegs => SRAM_CTRL_MAIN_REGS_BASE_ADDR,
            Device::SramCtrlMainRam => SRAM_CTRL_MAIN_RAM_BASE_ADDR,
            Device::SramCtrlMboxRegs => SRAM_CTRL_MBOX_REGS_BASE_ADDR,
            Device::SramCtrlMboxRam => SRAM_CTRL_MBOX_RAM_BASE_ADDR,
            Device::RomCtrl0Regs => ROM_CTRL0_REGS_BASE_ADDR,
            Device::RomCtrl0Rom => ROM_CTRL0_ROM_BASE_ADDR,
            Device::RomCtrl1Regs => ROM_CTRL1_REGS_BASE_ADDR,
            Device::RomCtrl1Rom => ROM_CTRL1_ROM_BASE_ADDR,
            Device::Dma => DMA_BASE_ADDR,
            Device::Mbx0Core => MBX0_CORE_BASE_ADDR,
            Device::Mbx1Core => MBX1_CORE_BASE_ADDR,
            Device::Mbx2Core => MBX2_CORE_BASE_ADDR,
            Device::Mbx3Core => MBX3_CORE_BASE_ADDR,
            Device::Mbx4Core => MBX4_CORE_BASE_ADDR,
            Device::Mbx5Core => MBX5_CORE_BASE_ADDR,
            Device::Mbx6Core => MBX6_CORE_BASE_ADDR,
            Device::MbxJtagCore => MBX_JTAG_CORE_BASE_ADDR,
            Device::MbxPcie0Core => MBX_PCIE0_CORE_BASE_ADDR,
            Device::MbxPcie1Core => MBX_PCIE1_CORE_BASE_ADDR,
            Device::SocDbgCtrlCore => SOC_DBG_CTRL_CORE_BASE_ADDR,
            Device::RvCoreIbexCfg => RV_CORE_IBEX_CFG_BASE_ADDR,
        }
    }

    /// Size of the device's reserved memory area, in bytes.
    pub const fn size_bytes(self) -> u32 {
        match self {
            Device::Uart0 => UART0_SIZE_BYTES,
            Device::Gpio => GPIO_SIZE_BYTES,
            Device::SpiDevice => SPI_DEVICE_SIZE_BYTES,
            Device::I2c0 => I2C0_SIZE_BYTES,
            Device::RvTimer => RV_TIMER_SIZE_BYTES,
            Device::OtpCtrlCore => OTP_CTRL_CORE_SIZE_BYTES,
            Device::OtpMacroPrim => OTP_MACRO_PRIM_SIZE_BYTES,
            Device::LcCtrlRegs => LC_CTRL_REGS_SIZE_BYTES,
            Device::AlertHandler => ALERT_HANDLER_SIZE_BYTES,
            Device::SpiHost0 => SPI_HOST0_SIZE_BYTES,
            Device::PwrmgrAon => PWRMGR_AON_SIZE_BYTES,
            Device::RstmgrAon => RSTMGR_AON_SIZE_BYTES,
            Device::ClkmgrAon => CLKMGR_AON_SIZE_BYTES,
            Device::PinmuxAon => PINMUX_AON_SIZE_BYTES,
            Device::AonTimerAon => AON_TIMER_AON_SIZE_BYTES,
            Device::Ast => AST_SIZE_BYTES,
            Device::SocProxyCore => SOC_PROXY_CORE_SIZE_BYTES,
            Device::SocProxyCtn => SOC_PROXY_CTN_SIZE_BYTES,
            Device::SramCtrlRetAonRegs => SRAM_CTRL_RET_AON_REGS_SIZE_BYTES,
            Device::SramCtrlRetAonRam => SRAM_CTRL_RET_AON_RAM_SIZE_BYTES,
            Device::RvDmRegs => RV_DM_REGS_SIZE_BYTES,
            Device::RvDmMem => RV_DM_MEM_SIZE_BYTES,
            Device::RvPlic => RV_PLIC_SIZE_BYTES,
            Device::Aes => AES_SIZE_BYTES,
            Device::Hmac => HMAC_SIZE_BYTES,
            Device::Kmac => KMAC_SIZE_BYTES,
            Device::Otbn => OTBN_SIZE_BYTES,
            Device::KeymgrDpe => KEYMGR_DPE_SIZE_BYTES,
            Device::Csrng => CSRNG_SIZE_BYTES,
            Device::EntropySrc => ENTROPY_SRC_SIZE_BYTES,
            Device::Edn0 => EDN0_SIZE_BYTES,
            Device::Edn1 => EDN1_SIZE_BYTES,
            Device::SramCtrlMainRegs => SRAM_CTRL_MAIN_REGS_SIZE_BYTES,
            Device::SramCtrlMainRam => SRAM_CTRL_MAIN_RAM_SIZE_BYTES,
            Device::SramCtrlMboxRegs => SRAM_CTRL_MBOX_REGS_SIZE_BYTES,
            Device::SramCtrlMboxRam => SRAM_CTRL_MBOX_RAM_SIZE_BYTES,
            Device::RomCtrl0Regs => ROM_CTRL0_REGS_SIZE_BYTES,
            Device::RomCtrl0Rom => ROM_CTRL0_ROM_SIZE_BYTES,
            Device::RomCtrl1Regs => ROM_CTRL1_REGS_SIZE_BYTES,
            Device::RomCtrl1Rom => ROM_CTRL1_ROM_SIZE_BYTES,
            Device::Dma => DMA_SIZE_BYTES,
            Device::Mbx0Core => MBX0_CORE_SIZE_BYTES,
            Device::Mbx1Core => MBX1_CORE_SIZE_BYTES,
            Device::Mbx2Core => MBX2_CORE_SIZE_BYTES,
            Device::Mbx3Core => MBX3_CORE_SIZE_BYTES,
            Device::Mbx4Core => MBX4_CORE_SIZE_BYTES,
            Device::Mbx5Core => MBX5_CORE_SIZE_BYTES,
            Device::Mbx6Core => MBX6_CORE_SIZE_BYTES,
            Device::MbxJtagCore => MBX_JTAG_CORE_SIZE_BYTES,
            Device::MbxPcie0Core => MBX_PCIE0_CORE_SIZE_BYTES,
            Device::MbxPcie1Core => MBX_PCIE1_CORE_SIZE_BYTES,
            Device::SocDbgCtrlCore => SOC_DBG_CTRL_CORE_SIZE_BYTES,
            Device::RvCoreIbexCfg => RV_CORE_IBEX_CFG_SIZE_BYTES,
        }
    }

    /// Canonical instance name of the window, as used by the generator.
    pub const fn name(self) -> &'static str {
        match self {
            Device::Uart0 => "uart0",
            Device::Gpio => "gpio",
            Device::SpiDevice => "spi_device",
            Device::I2c0 => "i2c0",
            Device::RvTimer => "rv_timer",
            Device::OtpCtrlCore => "otp_ctrl_core",
            Device::OtpMacroPrim => "otp_macro_prim",
            Device::LcCtrlRegs => "lc_ctrl_regs",
            Device::AlertHandler => "alert_handler",
            Device::SpiHost0 => "spi_host0",
            Device::PwrmgrAon => "pwrmgr_aon",
            Device::RstmgrAon => "rstmgr_aon",
            Device::ClkmgrAon => "clkmgr_aon",
            Device::PinmuxAon => "pinmux_aon",
            Device::AonTimerAon => "aon_timer_aon",
            Device::Ast => "ast",
            Device::SocProxyCore => "soc_proxy_core",
            Device::SocProxyCtn => "soc_proxy_ctn",
            Device::SramCtrlRetAonRegs => "sram_ctrl_ret_aon_regs",
            Device::SramCtrlRetAonRam => "sram_ctrl_ret_aon_ram",
            Device::RvDmRegs => "rv_dm_regs",
            Device::RvDmMem => "rv_dm_mem",
            Device::RvPlic => "rv_plic",
            Device::Aes => "aes",
            Device::Hmac => "hmac",
            Device::Kmac => "kmac",
            Device::Otbn => "otbn",
            Device::KeymgrDpe => "keymgr_dpe",
            Device::Csrng => "csrng",
            Device::EntropySrc => "entropy_src",
            Device::Edn0 => "edn0",
            Device::Edn1 => "edn1",
            Device::SramCtrlMainRegs => "sram_ctrl_main_regs",
            Device::SramCtrlMainRam => "sram_ctrl_main_ram",
            Device::SramCtrlMboxRegs => "sram_ctrl_mbox_regs",
            Device::SramCtrlMboxRam => "sram_ctrl_mbox_ram",
            Device::RomCtrl0Regs => "rom_ctrl0_regs",
            Device::RomCtrl0Rom => "rom_ctrl0_rom",
            Device::RomCtrl1Regs => "rom_ctrl1_regs",
            Device::RomCtrl1Rom => "rom_ctrl1_rom",
            Device::Dma => "dma",
            Device::Mbx0Core => "mbx0_core",
            Device::Mbx1Core => "mbx1_core",
            Device::Mbx2Core => "mbx2_core",
            Device::Mbx3Core => "mbx3_core",
            Device::Mbx4Core => "mbx4_core",
            Device::Mbx5Core => "mbx5_core",
            Device::Mbx6Core => "mbx6_core",
            Device::MbxJtagCore => "mbx_jtag_core",
            Device::MbxPcie0Core => "mbx_pcie0_core",
            Device::MbxPcie1Core => "mbx_pcie1_core",
            Device::SocDbgCtrlCore => "soc_dbg_ctrl_core",
            Device::RvCoreIbexCfg => "rv_core_ibex_cfg",
        }
    }

    /// Whether the window lies in the MMIO region of the device bus.
    pub const fn is_mmio(self) -> bool {
        crate::memory_map::mmio_contains(self.base_address())
    }

    /// Looks up a device window by its canonical instance name.
    pub fn from_name(name: &str) -> Result<Device, Error> {
        for device in Device::ALL {
            if device.name() == name {
                return Ok(device);
            }
        }
        Err(Error::UnknownPeripheral)
    }
}

/// A memory of this top, viewed as a region rather than as the window of its
/// controller.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MemoryRegion {
    Ctn,
    RamRetAon,
    RamMain,
    RamMbox,
    Rom0,
    Rom1,
}

impl MemoryRegion {
    /// Every memory region of this top.
    pub const ALL: [MemoryRegion; 6] = [
        MemoryRegion::Ctn,
        MemoryRegion::RamRetAon,
        MemoryRegion::RamMain,
        MemoryRegion::RamMbox,
        MemoryRegion::Rom0,
        MemoryRegion::Rom1,
    ];

    pub const fn base_address(self) -> u32 {
        match self {
            MemoryRegion::Ctn => CTN_BASE_ADDR,
            MemoryRegion::RamRetAon => RAM_RET_AON_BASE_ADDR,
            MemoryRegion::RamMain => RAM_MAIN_BASE_ADDR,
            MemoryRegion::RamMbox => RAM_MBOX_BASE_ADDR,
            MemoryRegion::Rom0 => ROM0_BASE_ADDR,
            MemoryRegion::Rom1 => ROM1_BASE_ADDR,
        }
    }

    pub const fn size_bytes(self) -> u32 {
        match self {
            MemoryRegion::Ctn => CTN_SIZE_BYTES,
            MemoryRegion::RamRetAon => RAM_RET_AON_SIZE_BYTES,
            MemoryRegion::RamMain => RAM_MAIN_SIZE_BYTES,
            MemoryRegion::RamMbox => RAM_MBOX_SIZE_BYTES,
            MemoryRegion::Rom0 => ROM0_SIZE_BYTES,
            MemoryRegion::Rom1 => ROM1_SIZE_BYTES,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            MemoryRegion::Ctn => "ctn",
            MemoryRegion::RamRetAon => "ram_ret_aon",
            MemoryRegion::RamMain => "ram_main",
            MemoryRegion::RamMbox => "ram_mbox",
            MemoryRegion::Rom0 => "rom0",
            MemoryRegion::Rom1 => "rom1",
        }
    }

    /// The device whose memory window this region aliases.
    pub const fn controller(self) -> Device {
        match self {
            MemoryRegion::Ctn => Device::SocProxyCtn,
            MemoryRegion::RamRetAon => Device::SramCtrlRetAonRam,
            MemoryRegion::RamMain => Device::SramCtrlMainRam,
            MemoryRegion::RamMbox => Device::SramCtrlMboxRam,
            MemoryRegion::Rom0 => Device::RomCtrl0Rom,
            MemoryRegion::Rom1 => Device::RomCtrl1Rom,
        }
    }
}

/// Base address of the device window named `name`.
pub fn base_address(name: &str) -> Result<u32, Error> {
    Device::from_name(name).map(Device::base_address)
}

/// Size in bytes of the device window named `name`.
pub fn size_bytes(name: &str) -> Result<u32, Error> {
    Device::from_name(name).map(Device::size_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn end_of(base: u32, size: u32) -> u64 {
        base as u64 + size as u64
    }

    #[test]
    fn windows_do_not_overlap() {
        for (i, a) in Device::ALL.iter().enumerate() {
            for b in &Device::ALL[i + 1..] {
                let a_end = end_of(a.base_address(), a.size_bytes());
                let b_end = end_of(b.base_address(), b.size_bytes());
                assert!(
                    a_end <= b.base_address() as u64 || b_end <= a.base_address() as u64,
                    "{} overlaps {}",
                    a.name(),
                    b.name()
                );
            }
        }
    }

    #[test]
    fn regions_do_not_overlap() {
        for (i, a) in MemoryRegion::ALL.iter().enumerate() {
            for b in &MemoryRegion::ALL[i + 1..] {
                let a_end = end_of(a.base_address(), a.size_bytes());
                let b_end = end_of(b.base_address(), b.size_bytes());
                assert!(
                    a_end <= b.base_address() as u64 || b_end <= a.base_address() as u64,
                    "{} overlaps {}",
                    a.name(),
                    b.name()
                );
            }
        }
    }

    #[test]
    fn regions_alias_their_controller_window() {
        for region in MemoryRegion::ALL {
            let controller = region.controller();
            assert_eq!(region.base_address(), controller.base_address());
            assert_eq!(region.size_bytes(), controller.size_bytes());
        }
    }

    #[test]
    fn name_lookup() {
        assert_eq!(base_address("uart0"), Ok(0x3001_0000));
        assert_eq!(size_bytes("uart0"), Ok(0x40));
        assert_eq!(base_address("uart1"), Err(crate::Error::UnknownPeripheral));
        assert_eq!(size_bytes(""), Err(crate::Error::UnknownPeripheral));

        for device in Device::ALL {
            assert_eq!(Device::from_name(device.name()), Ok(device));
        }
    }

    #[test]
    fn mmio_region_covers_registers_and_excludes_memories() {
        assert!(Device::Aes.is_mmio());
        assert_eq!(Device::Aes.base_address(), crate::memory_map::MMIO_BASE_ADDR);
        assert!(Device::RvCoreIbexCfg.is_mmio());
        assert!(Device::Gpio.is_mmio());
        assert!(Device::RvPlic.is_mmio());

        assert!(!Device::RomCtrl0Rom.is_mmio());
        assert!(!Device::RomCtrl1Rom.is_mmio());
        assert!(!Device::SramCtrlMainRam.is_mmio());
        assert!(!Device::SramCtrlMboxRam.is_mmio());
        assert!(!Device::SocProxyCtn.is_mmio());
        assert!(!Device::RvDmMem.is_mmio());
    }
}
