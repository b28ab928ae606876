// ============================================================================
// Domain Module
// Operation descriptors, conversion records and configuration
// ============================================================================

pub mod config;
pub mod conversion;
pub mod operation;

pub use config::{DocumentConfig, DEFAULT_MAX_FILE_SIZE};
pub use conversion::{ConversionResult, ConvertedDocument};
pub use operation::{Operation, UnknownOperation};
