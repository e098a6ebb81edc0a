//! Software overrides for the generated Libero settings.
//!
//! Any field set to `Some(value)` replaces the generated value of the same
//! name for the whole image, e.g.
//!
//! ```ignore
//! pub const OVERRIDES: SwOverrides = SwOverrides {
//!     gpio_cr: Some(0x000F_0F03),
//!     ..SwOverrides::NONE
//! };
//! ```

use super::SwOverrides;

pub const OVERRIDES: SwOverrides = SwOverrides::NONE;
