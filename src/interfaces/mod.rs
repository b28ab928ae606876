// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod document_converter;

pub(crate) use document_converter::extension_of;
pub use document_converter::DocumentConverter;
