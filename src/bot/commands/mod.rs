//! Discord command implementations organized by category.

/// Account commands (`/crear_cuenta`, `/saldo`)
pub mod account;

/// Bingo commands (`/comprar_carton`, `/set_bingo_price`, `/agregar_saldo`)
pub mod bingo;

// Export commands
pub use account::*;
pub use bingo::*;
