//! Compile-time configuration: generated Libero settings, their software
//! overrides, the board memory map and the boot mode.

pub mod board;
pub mod hw_gen_peripherals;
pub mod mss_sw_config;

/// Per-setting overrides. `None` keeps the generated value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SwOverrides {
    pub gpio_cr: Option<u32>,
    pub crypto_cr_info: Option<u32>,
    pub mss_apb_ahb_clk: Option<u32>,
}

impl SwOverrides {
    pub const NONE: Self = Self {
        gpio_cr: None,
        crypto_cr_info: None,
        mss_apb_ahb_clk: None,
    };
}

/// The effective register-configuration table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LiberoSettings {
    pub gpio_cr: u32,
    pub crypto_cr_info: u32,
    pub mss_apb_ahb_clk: u32,
}

impl LiberoSettings {
    pub const GENERATED: Self = Self {
        gpio_cr: hw_gen_peripherals::LIBERO_SETTING_GPIO_CR,
        crypto_cr_info: hw_gen_peripherals::LIBERO_SETTING_CRYPTO_CR_INFO,
        mss_apb_ahb_clk: hw_gen_peripherals::LIBERO_SETTING_MSS_APB_AHB_CLK,
    };

    /// Merge `overrides` over the generated values, field by field.
    pub const fn resolve(overrides: &SwOverrides) -> Self {
        Self {
            gpio_cr: pick(overrides.gpio_cr, Self::GENERATED.gpio_cr),
            crypto_cr_info: pick(overrides.crypto_cr_info, Self::GENERATED.crypto_cr_info),
            mss_apb_ahb_clk: pick(overrides.mss_apb_ahb_clk, Self::GENERATED.mss_apb_ahb_clk),
        }
    }
}

const fn pick(preferred: Option<u32>, generated: u32) -> u32 {
    match preferred {
        Some(value) => value,
        None => generated,
    }
}

/// Settings seen by the whole image.
pub const SETTINGS: LiberoSettings = LiberoSettings::resolve(&mss_sw_config::OVERRIDES);

/// How this image was started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootMode {
    /// Loaded by a debugger into the LIM; the E51 must wake U54_1 itself.
    Standalone,
    /// Started by a secondary bootloader that already released U54_1.
    LoadedByBootloader,
}

impl BootMode {
    pub const fn from_features() -> Self {
        if cfg!(feature = "loaded-by-bootloader") {
            BootMode::LoadedByBootloader
        } else {
            BootMode::Standalone
        }
    }
}

pub const BOOT_MODE: BootMode = BootMode::from_features();
