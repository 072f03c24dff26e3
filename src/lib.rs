// Menu Roulette - Core Library
// Exposes all modules for use in CLI, API server, and tests

pub mod config;
pub mod error;
pub mod loader;
pub mod menu;
pub mod normalizer;
pub mod roulette;

// Only compile the HTTP layer when the server feature is enabled
#[cfg(feature = "server")]
pub mod server;

// Re-export commonly used types
pub use config::{Config, DEFAULT_CSV_PATH};
pub use error::{LoadError, NoCandidates};
pub use loader::{load_menus, load_menus_from_reader};
pub use menu::MenuItem;
pub use normalizer::{is_canonical_meal, normalize_meal_label, split_list, CANONICAL_MEALS};
pub use roulette::{filter_items, pick_uniform, spin, MenuQuery};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
