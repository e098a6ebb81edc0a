//! Peripheral settings generated from the Libero design `PFSOC_MSS_C0`
//! (part MPFS250T_ES).
//!
//! Do not edit these values. To change one without regenerating, set the
//! matching field in [`super::mss_sw_config::OVERRIDES`]; that value takes
//! precedence over the one here.

/// GPIO blocks reset control (soft_reset options chosen in the configurator).
///
/// | field                   | `[offset:width]` | value |
/// |-------------------------|------------------|-------|
/// | GPIO0_SOFT_RESET_SELECT | `[0:2]`          | 0x3   |
/// | GPIO0_DEFAULT           | `[4:2]`          | 0x0   |
/// | GPIO1_SOFT_RESET_SELECT | `[8:3]`          | 0x7   |
/// | GPIO1_DEFAULT           | `[12:3]`         | 0x0   |
/// | GPIO2_SOFT_RESET_SELECT | `[16:4]`         | 0xF   |
/// | GPIO2_DEFAULT           | `[20:4]`         | 0x0   |
pub const LIBERO_SETTING_GPIO_CR: u32 = 0x000F_0703;

/// How crypto is set up on this part. Read-only fields: MSS_MODE `[0:2]`,
/// RESERVED `[2:1]`, STREAM_ENABLE `[3:1]`, RESERVED1 `[4:28]`.
pub const LIBERO_SETTING_CRYPTO_CR_INFO: u32 = 0x0000_0000;

/// MSS APB/AHB clock in Hz, the reference for the MMUART baud divisors.
pub const LIBERO_SETTING_MSS_APB_AHB_CLK: u32 = 150_000_000;
