mod token;

pub use token::{TokenInfo, TokenRecord, ValueSnapshot};
