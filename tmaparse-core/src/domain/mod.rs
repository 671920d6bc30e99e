//! Domain schemas: the platform's data contracts built from the transformers
//!
//! - `user`: `User` and `Chat` records nested in init data
//! - `init_data`: data passed to a Mini App on launch (`tgWebAppData`)
//! - `theme_params`: the app's color palette
//! - `launch_params`: the full launch parameter set

pub mod init_data;
pub mod launch_params;
pub mod theme_params;
pub mod user;

pub use init_data::InitData;
pub use launch_params::LaunchParams;
pub use theme_params::ThemeParams;
pub use user::{Chat, User};
