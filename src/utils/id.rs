const REQUEST_ID_ALPHABET: [char; 36] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

/// Length of the identifiers returned by [`request_id`]
pub const REQUEST_ID_LEN: usize = 12;

/// Generates a short correlation id for one API call.
///
/// The id ties together the debug output and the request log lines of a
/// single `send`. It is made of uppercase letters and digits.
///
/// # Examples
/// ```
/// use right_api::utils::id::{request_id, REQUEST_ID_LEN};
/// let id = request_id();
/// assert_eq!(id.len(), REQUEST_ID_LEN);
/// ```
pub fn request_id() -> String {
    nanoid::nanoid!(REQUEST_ID_LEN, &REQUEST_ID_ALPHABET)
}
