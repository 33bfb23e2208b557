pub mod error;
pub mod extract;
pub mod modes;
pub mod opcode;
pub mod source;

pub use error::ExtractError;
pub use extract::{Extractor, TableSlice};
pub use modes::AddressMode;
pub use opcode::Opcode;
pub use source::{Source, DEFAULT_URL};
