//! Deterministic mapping from a cloned voice to a system voice.
//!
//! No acoustic model is trained. A clone is played with the system voice its
//! display name hashes to, so the mapping needs no storage and is identical
//! in every session and every port.
//!
//! The hash is the classic `h = h * 31 + unit` string hash evaluated with
//! 32-bit wrapping arithmetic over UTF-16 code units:
//!
//! ```
//! use voxcraft_voice::resolver::{name_hash, resolve_index};
//!
//! assert_eq!(name_hash("Ava"), 66220);
//! assert_eq!(resolve_index("Ava", 5), Some(0));
//! ```

use crate::catalog::{VoiceCategory, VoiceProfile};

/// 32-bit wrapping string hash over UTF-16 code units.
///
/// Each step computes `unit + ((h << 5) - h)`, which is `h * 31 + unit`.
pub fn name_hash(name: &str) -> i32 {
    name.encode_utf16().fold(0i32, |h, unit| {
        (unit as i32).wrapping_add(h.wrapping_shl(5).wrapping_sub(h))
    })
}

/// Catalog index for a display name, or None for an empty catalog.
///
/// Uses `|h| mod len`; the absolute value is taken unsigned so that
/// `i32::MIN` maps to 2^31 instead of overflowing.
pub fn resolve_index(name: &str, catalog_len: usize) -> Option<usize> {
    if catalog_len == 0 {
        return None;
    }
    let magnitude = name_hash(name).unsigned_abs() as u64;
    Some((magnitude % catalog_len as u64) as usize)
}

/// Resolves a profile to the id of the system voice that speaks for it.
///
/// System voices resolve to themselves. Clones resolve by display name only;
/// samples, creation time and id play no part. Returns None only for a clone
/// against an empty catalog.
pub fn resolve<'a>(voice: &'a VoiceProfile, catalog: &'a [VoiceProfile]) -> Option<&'a str> {
    match voice.category {
        VoiceCategory::System => Some(voice.id.as_str()),
        VoiceCategory::Cloned => {
            let index = resolve_index(&voice.display_name, catalog.len())?;
            Some(catalog[index].id.as_str())
        }
    }
}
