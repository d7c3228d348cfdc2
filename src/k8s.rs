pub use error::K8sError as Error;

pub mod client;
pub mod error;
