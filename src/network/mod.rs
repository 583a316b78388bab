pub mod iwgetid;
pub mod nmcli;
pub mod patterns;
pub mod types;

pub use iwgetid::Iwgetid;
pub use nmcli::Nmcli;
pub use types::*;
