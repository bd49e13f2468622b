//! Access rules for letters.
//!
//! These are pure functions over a letter row and the caller identity.
//! List endpoints encode the same rules in their SQL predicates; both
//! paths must agree.

use super::types::Letter;

/// Check whether a caller may read a letter.
///
/// Public letters are readable by anyone, including anonymous callers.
/// Private letters are readable only by the author and the recipient.
pub fn can_read(letter: &Letter, caller: Option<i64>) -> bool {
    if letter.is_public {
        return true;
    }
    match caller {
        Some(id) => letter.author_id == id || letter.recipient_id == Some(id),
        None => false,
    }
}

/// Check whether a caller may modify a letter.
///
/// Only the author writes. Receiving a letter grants read access, never
/// write access, and a public letter stays writable by its author alone.
pub fn can_write(letter: &Letter, caller: i64) -> bool {
    letter.author_id == caller
}

/// Check whether a caller may delete a letter.
///
/// Same rule as writing.
pub fn can_delete(letter: &Letter, caller: i64) -> bool {
    can_write(letter, caller)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    const AUTHOR: i64 = 1;
    const RECIPIENT: i64 = 2;
    const STRANGER: i64 = 3;

    fn letter(is_public: bool, recipient_id: Option<i64>) -> Letter {
        Letter {
            id: 10,
            title: "title".to_string(),
            content: "content".to_string(),
            author_id: AUTHOR,
            recipient_id,
            is_public,
            is_ai_assisted: false,
            created_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn test_can_read_private_addressed() {
        let l = letter(false, Some(RECIPIENT));
        assert!(can_read(&l, Some(AUTHOR)));
        assert!(can_read(&l, Some(RECIPIENT)));
        assert!(!can_read(&l, Some(STRANGER)));
        assert!(!can_read(&l, None));
    }

    #[test]
    fn test_can_read_private_unaddressed() {
        let l = letter(false, None);
        assert!(can_read(&l, Some(AUTHOR)));
        assert!(!can_read(&l, Some(RECIPIENT)));
        assert!(!can_read(&l, Some(STRANGER)));
        assert!(!can_read(&l, None));
    }

    #[test]
    fn test_can_read_public() {
        let l = letter(true, Some(RECIPIENT));
        assert!(can_read(&l, Some(AUTHOR)));
        assert!(can_read(&l, Some(RECIPIENT)));
        assert!(can_read(&l, Some(STRANGER)));
        assert!(can_read(&l, None));
    }

    #[test]
    fn test_can_write_author_only() {
        let l = letter(false, Some(RECIPIENT));
        assert!(can_write(&l, AUTHOR));
        assert!(!can_write(&l, RECIPIENT));
        assert!(!can_write(&l, STRANGER));
    }

    #[test]
    fn test_can_write_public_still_author_only() {
        // Public read access never implies write access
        let l = letter(true, Some(RECIPIENT));
        assert!(can_write(&l, AUTHOR));
        assert!(!can_write(&l, RECIPIENT));
        assert!(!can_write(&l, STRANGER));
    }

    #[test]
    fn test_can_delete_matches_can_write() {
        let l = letter(true, Some(RECIPIENT));
        assert!(can_delete(&l, AUTHOR));
        assert!(!can_delete(&l, RECIPIENT));
        assert!(!can_delete(&l, STRANGER));
    }
}
