// ============================================================================
// Codec Module
// Textual and binary representations of complex values
// ============================================================================

pub mod binary;
pub mod text;

pub use binary::{decode, encode, recv, send, ENCODED_LEN};
pub use text::{
    cast_from_text, cast_to_text, format, format_double, format_with_digits, parse,
    LEGACY_DIGITS, ROUND_TRIP_DIGITS,
};
