mod views;
mod utils;
mod configs;
mod error;
pub mod controller;
#[cfg(target_arch = "wasm32")]
pub mod browser;

pub use crate::views::*;
pub use crate::utils::*;
pub use crate::configs::ThemeConfig;
pub use crate::error::ThemeError;
pub use crate::controller::ThemeController;
