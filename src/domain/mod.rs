//! Domain entities shared by the quote client, the repository and the HTTP layer.

pub mod quote;
pub mod recipient;
pub mod types;
