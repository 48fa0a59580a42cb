//! Device memory information.
//!
//! Base address and size, in bytes, of every addressable window of the top.
//! Each `*_BASE_ADDR`/`*_SIZE_BYTES` pair bounds the memory-mapped registers
//! (or memory contents) of one device instance: all accesses to the instance
//! land in `[BASE_ADDR, BASE_ADDR + SIZE_BYTES)`.
//!
//! These values are part of the hardware contract of this chip configuration
//! and are not tunable. [`crate::device`] exposes the same information behind
//! typed and name-keyed lookups.

pub const UART0_BASE_ADDR: u32 = 0x3001_0000;
pub const UART0_SIZE_BYTES: u32 = 0x40;

pub const GPIO_BASE_ADDR: u32 = 0x3000_0000;
pub const GPIO_SIZE_BYTES: u32 = 0x100;

pub const SPI_DEVICE_BASE_ADDR: u32 = 0x3031_0000;
pub const SPI_DEVICE_SIZE_BYTES: u32 = 0x2000;

pub const I2C0_BASE_ADDR: u32 = 0x3008_0000;
pub const I2C0_SIZE_BYTES: u32 = 0x80;

pub const RV_TIMER_BASE_ADDR: u32 = 0x3010_0000;
pub const RV_TIMER_SIZE_BYTES: u32 = 0x200;

/// Core (software facing) window of the OTP controller.
pub const OTP_CTRL_CORE_BASE_ADDR: u32 = 0x3013_0000;
pub const OTP_CTRL_CORE_SIZE_BYTES: u32 = 0x8000;

/// Test interface of the OTP macro.
pub const OTP_MACRO_PRIM_BASE_ADDR: u32 = 0x3014_0000;
pub const OTP_MACRO_PRIM_SIZE_BYTES: u32 = 0x20;

pub const LC_CTRL_REGS_BASE_ADDR: u32 = 0x3015_0000;
pub const LC_CTRL_REGS_SIZE_BYTES: u32 = 0x100;

pub const ALERT_HANDLER_BASE_ADDR: u32 = 0x3016_0000;
pub const ALERT_HANDLER_SIZE_BYTES: u32 = 0x800;

pub const SPI_HOST0_BASE_ADDR: u32 = 0x3030_0000;
pub const SPI_HOST0_SIZE_BYTES: u32 = 0x40;

pub const PWRMGR_AON_BASE_ADDR: u32 = 0x3040_0000;
pub const PWRMGR_AON_SIZE_BYTES: u32 = 0x80;

pub const RSTMGR_AON_BASE_ADDR: u32 = 0x3041_0000;
pub const RSTMGR_AON_SIZE_BYTES: u32 = 0x80;

pub const CLKMGR_AON_BASE_ADDR: u32 = 0x3042_0000;
pub const CLKMGR_AON_SIZE_BYTES: u32 = 0x40;

pub const PINMUX_AON_BASE_ADDR: u32 = 0x3046_0000;
pub const PINMUX_AON_SIZE_BYTES: u32 = 0x800;

pub const AON_TIMER_AON_BASE_ADDR: u32 = 0x3047_0000;
pub const AON_TIMER_AON_SIZE_BYTES: u32 = 0x40;

pub const AST_BASE_ADDR: u32 = 0x3048_0000;
pub const AST_SIZE_BYTES: u32 = 0x400;

pub const SOC_PROXY_CORE_BASE_ADDR: u32 = 0x2203_0000;
pub const SOC_PROXY_CORE_SIZE_BYTES: u32 = 0x10;

/// CTN address space, forwarded to the SoC fabric by the proxy.
pub const SOC_PROXY_CTN_BASE_ADDR: u32 = 0x4000_0000;
pub const SOC_PROXY_CTN_SIZE_BYTES: u32 = 0x4000_0000;

pub const SRAM_CTRL_RET_AON_REGS_BASE_ADDR: u32 = 0x3050_0000;
pub const SRAM_CTRL_RET_AON_REGS_SIZE_BYTES: u32 = 0x40;

pub const SRAM_CTRL_RET_AON_RAM_BASE_ADDR: u32 = 0x3060_0000;
pub const SRAM_CTRL_RET_AON_RAM_SIZE_BYTES: u32 = 0x1000;

pub const RV_DM_REGS_BASE_ADDR: u32 = 0x2120_0000;
pub const RV_DM_REGS_SIZE_BYTES: u32 = 0x10;

pub const RV_DM_MEM_BASE_ADDR: u32 = 0x4_0000;
pub const RV_DM_MEM_SIZE_BYTES: u32 = 0x1000;

pub const RV_PLIC_BASE_ADDR: u32 = 0x2800_0000;
pub const RV_PLIC_SIZE_BYTES: u32 = 0x800_0000;

pub const AES_BASE_ADDR: u32 = 0x2110_0000;
pub const AES_SIZE_BYTES: u32 = 0x100;

pub const HMAC_BASE_ADDR: u32 = 0x2111_0000;
pub const HMAC_SIZE_BYTES: u32 = 0x2000;

pub const KMAC_BASE_ADDR: u32 = 0x2112_0000;
pub const KMAC_SIZE_BYTES: u32 = 0x1000;

pub const OTBN_BASE_ADDR: u32 = 0x2113_0000;
pub const OTBN_SIZE_BYTES: u32 = 0x1_0000;

pub const KEYMGR_DPE_BASE_ADDR: u32 = 0x2114_0000;
pub const KEYMGR_DPE_SIZE_BYTES: u32 = 0x100;

pub const CSRNG_BASE_ADDR: u32 = 0x2115_0000;
pub const CSRNG_SIZE_BYTES: u32 = 0x80;

pub const ENTROPY_SRC_BASE_ADDR: u32 = 0x2116_0000;
pub const ENTROPY_SRC_SIZE_BYTES: u32 = 0x100;

pub const EDN0_BASE_ADDR: u32 = 0x2117_0000;
pub const EDN0_SIZE_BYTES: u32 = 0x80;

pub const EDN1_BASE_ADDR: u32 = 0x2118_0000;
pub const EDN1_SIZE_BYTES: u32 = 0x80;

pub const SRAM_CTRL_MAIN_REGS_BASE_ADDR: u32 = 0x211C_0000;
pub const SRAM_CTRL_MAIN_REGS_SIZE_BYTES: u32 = 0x40;

pub const SRAM_CTRL_MAIN_RAM_BASE_ADDR: u32 = 0x1000_0000;
pub const SRAM_CTRL_MAIN_RAM_SIZE_BYTES: u32 = 0x1_0000;

pub const SRAM_CTRL_MBOX_REGS_BASE_ADDR: u32 = 0x211D_0000;
pub const SRAM_CTRL_MBOX_REGS_SIZE_BYTES: u32 = 0x40;

pub const SRAM_CTRL_MBOX_RAM_BASE_ADDR: u32 = 0x1100_0000;
pub const SRAM_CTRL_MBOX_RAM_SIZE_BYTES: u32 = 0x1000;

pub const ROM_CTRL0_REGS_BASE_ADDR: u32 = 0x211E_0000;
pub const ROM_CTRL0_REGS_SIZE_BYTES: u32 = 0x80;

pub const ROM_CTRL0_ROM_BASE_ADDR: u32 = 0x8000;
pub const ROM_CTRL0_ROM_SIZE_BYTES: u32 = 0x8000;

pub const ROM_CTRL1_REGS_BASE_ADDR: u32 = 0x211E_1000;
pub const ROM_CTRL1_REGS_SIZE_BYTES: u32 = 0x80;

pub const ROM_CTRL1_ROM_BASE_ADDR: u32 = 0x2_0000;
pub const ROM_CTRL1_ROM_SIZE_BYTES: u32 = 0x1_0000;

pub const DMA_BASE_ADDR: u32 = 0x2201_0000;
pub const DMA_SIZE_BYTES: u32 = 0x200;

pub const MBX0_CORE_BASE_ADDR: u32 = 0x2200_0000;
pub const MBX0_CORE_SIZE_BYTES: u32 = 0x80;

pub const MBX1_CORE_BASE_ADDR: u32 = 0x2200_0100;
pub const MBX1_CORE_SIZE_BYTES: u32 = 0x80;

pub const MBX2_CORE_BASE_ADDR: u32 = 0x2200_0200;
pub const MBX2_CORE_SIZE_BYTES: u32 = 0x80;

pub const MBX3_CORE_BASE_ADDR: u32 = 0x2200_0300;
pub const MBX3_CORE_SIZE_BYTES: u32 = 0x80;

pub const MBX4_CORE_BASE_ADDR: u32 = 0x2200_0400;
pub const MBX4_CORE_SIZE_BYTES: u32 = 0x80;

pub const MBX5_CORE_BASE_ADDR: u32 = 0x2200_0500;
pub const MBX5_CORE_SIZE_BYTES: u32 = 0x80;

pub const MBX6_CORE_BASE_ADDR: u32 = 0x2200_0600;
pub const MBX6_CORE_SIZE_BYTES: u32 = 0x80;

pub const MBX_JTAG_CORE_BASE_ADDR: u32 = 0x2200_0800;
pub const MBX_JTAG_CORE_SIZE_BYTES: u32 = 0x80;

pub const MBX_PCIE0_CORE_BASE_ADDR: u32 = 0x2204_0000;
pub const MBX_PCIE0_CORE_SIZE_BYTES: u32 = 0x80;

pub const MBX_PCIE1_CORE_BASE_ADDR: u32 = 0x2204_0100;
pub const MBX_PCIE1_CORE_SIZE_BYTES: u32 = 0x80;

pub const SOC_DBG_CTRL_CORE_BASE_ADDR: u32 = 0x3017_0000;
pub const SOC_DBG_CTRL_CORE_SIZE_BYTES: u32 = 0x20;

pub const RV_CORE_IBEX_CFG_BASE_ADDR: u32 = 0x211F_0000;
pub const RV_CORE_IBEX_CFG_SIZE_BYTES: u32 = 0x800;

// Memory regions. Each coincides with the memory window of its controlling
// device above: the generator emits both the device view and the memory view
// of the same range.

/// CTN memory region, alias of the `soc_proxy` CTN window.
pub const CTN_BASE_ADDR: u32 = 0x4000_0000;
pub const CTN_SIZE_BYTES: u32 = 0x4000_0000;

/// Retention RAM, alias of the `sram_ctrl_ret_aon` RAM window.
pub const RAM_RET_AON_BASE_ADDR: u32 = 0x3060_0000;
pub const RAM_RET_AON_SIZE_BYTES: u32 = 0x1000;

/// Main RAM, alias of the `sram_ctrl_main` RAM window.
pub const RAM_MAIN_BASE_ADDR: u32 = 0x1000_0000;
pub const RAM_MAIN_SIZE_BYTES: u32 = 0x1_0000;

/// Mailbox RAM, alias of the `sram_ctrl_mbox` RAM window.
pub const RAM_MBOX_BASE_ADDR: u32 = 0x1100_0000;
pub const RAM_MBOX_SIZE_BYTES: u32 = 0x1000;

/// First boot ROM image, alias of the `rom_ctrl0` ROM window.
pub const ROM0_BASE_ADDR: u32 = 0x8000;
pub const ROM0_SIZE_BYTES: u32 = 0x8000;

/// Second boot ROM image, alias of the `rom_ctrl1` ROM window.
pub const ROM1_BASE_ADDR: u32 = 0x2_0000;
pub const ROM1_SIZE_BYTES: u32 = 0x1_0000;

/// MMIO region of the device bus. Every peripheral register window of this
/// top lives inside it; memories (ROM images, main/mailbox RAM) and the CTN
/// window do not.
pub const MMIO_BASE_ADDR: u32 = 0x2110_0000;
pub const MMIO_SIZE_BYTES: u32 = 0xF50_1000;

/// Whether `addr` falls inside the MMIO region of the device bus.
pub const fn mmio_contains(addr: u32) -> bool {
    addr >= MMIO_BASE_ADDR && addr - MMIO_BASE_ADDR < MMIO_SIZE_BYTES
}
