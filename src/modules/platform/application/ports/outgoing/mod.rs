pub mod platform_strategy;

pub use platform_strategy::{PlatformQueryError, PlatformStrategy};
