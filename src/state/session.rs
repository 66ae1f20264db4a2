/// Where the player currently is, from the REPL's point of view. The room
/// containers remain the ground truth; the cursor is the fast path.
#[derive(Debug, Clone)]
pub struct Cursor {
    pub room_key: String,
}

/// Per-run interpreter state: the cursor and the input line counter used
/// for the numbered prompt.
#[derive(Debug, Default)]
pub struct Session {
    cursor: Option<Cursor>,
    line: u64,
}

impl Session {
    pub fn cursor(&self) -> Option<&Cursor> {
        self.cursor.as_ref()
    }

    pub fn set_cursor(&mut self, cursor: Option<Cursor>) {
        self.cursor = cursor;
    }

    /// The next prompt number, starting at 1.
    pub fn next_line(&mut self) -> u64 {
        self.line += 1;
        self.line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_numbers_count_up_from_one() {
        let mut sess = Session::default();
        assert_eq!(sess.next_line(), 1);
        assert_eq!(sess.next_line(), 2);
        assert_eq!(sess.next_line(), 3);
    }

    #[test]
    fn cursor_starts_empty() {
        let mut sess = Session::default();
        assert!(sess.cursor().is_none());
        sess.set_cursor(Some(Cursor {
            room_key: "bedroom".to_string(),
        }));
        assert_eq!(sess.cursor().map(|c| c.room_key.as_str()), Some("bedroom"));
    }
}
