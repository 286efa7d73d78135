//! Soft-delete content masking.
//!
//! Comments and replies share this one rule.

/// Text shown in place of the content of a soft-deleted comment or reply.
pub const DELETED_CONTENT_PLACEHOLDER: &str = "**balasan telah dihapus**";

/// Content as it should be displayed to clients.
///
/// Returns the placeholder when `is_deleted` is set, the original content otherwise.
pub fn display_content(content: &str, is_deleted: bool) -> String {
    if is_deleted {
        DELETED_CONTENT_PLACEHOLDER.to_string()
    } else {
        content.to_string()
    }
}
