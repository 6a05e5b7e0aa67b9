const ALPHABET: [char; 36] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

/// Length of generated client identifiers
pub const CLIENT_ID_LENGTH: usize = 24;

/// Generates a random client-side identifier
///
/// The identifier is made of uppercase letters and digits and is suitable for the `id`
/// field of client extensions, which lets a caller find its own orders and trades again
/// through `@`-prefixed order and trade specifiers.
///
/// # Examples
/// ```
/// use v20_client::utils::id::client_id;
/// let id = client_id();
/// assert_eq!(id.len(), 24);
/// ```
#[must_use]
pub fn client_id() -> String {
    nanoid::nanoid!(CLIENT_ID_LENGTH, &ALPHABET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_use_the_restricted_alphabet() {
        let id = client_id();
        assert_eq!(id.len(), CLIENT_ID_LENGTH);
        assert!(id.chars().all(|c| ALPHABET.contains(&c)));
        assert_ne!(id, client_id());
    }
}
