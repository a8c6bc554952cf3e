// Suffix alphabets: decimal digits and the special-character set

/// Decimal digits in ascending order, used for numeric suffixes.
pub const DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Special characters appended by the special-character stage.
///
/// The order only affects generation order, never the resulting set.
pub const SPECIAL_CHARACTERS: [char; 10] = ['!', '?', '.', '@', '_', '-', '*', '$', '&', '%'];

/// Check whether a character belongs to [`SPECIAL_CHARACTERS`].
pub fn is_special(c: char) -> bool {
    SPECIAL_CHARACTERS.contains(&c)
}
