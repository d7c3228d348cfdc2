pub use error::StoreError as Error;

pub mod error;
pub mod persistent_volume;
