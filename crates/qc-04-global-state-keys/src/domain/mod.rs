pub mod errors;
pub mod key;
pub mod resolver;

pub use errors::*;
pub use key::*;
pub use resolver::*;
