//! Container-level (struct) attribute definitions.

use super::types::RenameStrategy;

/// Struct-level sbparam attributes.
///
/// Parsed from `#[sbparam(...)]` on structs.
#[derive(Debug, Default)]
pub struct StructAttrs {
    /// Rename strategy for all field names.
    pub rename_all: RenameStrategy,
}
