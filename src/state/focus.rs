//! Keyboard focus within the current wizard page.

/// Which field (and, for option lists, which option) has the cursor.
///
/// Indices are relative to the fields of the current page. Both wrap around
/// like the tab strip of a question prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldFocus {
    /// Index into the page's fields
    pub field: usize,
    /// Highlighted option for radio and multi-choice fields
    pub option: usize,
}

impl FieldFocus {
    /// Focus the first field with the option cursor reset.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Move to the next field (wraps around)
    pub fn next_field(&mut self, field_count: usize) {
        if field_count > 0 {
            self.field = (self.field + 1) % field_count;
            self.option = 0;
        }
    }

    /// Move to the previous field (wraps around)
    pub fn prev_field(&mut self, field_count: usize) {
        if field_count > 0 {
            self.field = if self.field == 0 {
                field_count - 1
            } else {
                self.field - 1
            };
            self.option = 0;
        }
    }

    pub fn next_option(&mut self, option_count: usize) {
        if option_count > 0 {
            self.option = (self.option + 1) % option_count;
        }
    }

    pub fn prev_option(&mut self, option_count: usize) {
        if option_count > 0 {
            self.option = if self.option == 0 {
                option_count - 1
            } else {
                self.option - 1
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_navigation_wraps() {
        let mut focus = FieldFocus::default();
        focus.prev_field(3);
        assert_eq!(focus.field, 2);
        focus.next_field(3);
        assert_eq!(focus.field, 0);
    }

    #[test]
    fn test_moving_field_resets_option() {
        let mut focus = FieldFocus::default();
        focus.next_option(4);
        focus.next_option(4);
        assert_eq!(focus.option, 2);
        focus.next_field(2);
        assert_eq!(focus.option, 0);
    }

    #[test]
    fn test_option_navigation_wraps() {
        let mut focus = FieldFocus::default();
        focus.prev_option(3);
        assert_eq!(focus.option, 2);
        focus.next_option(3);
        assert_eq!(focus.option, 0);
    }

    #[test]
    fn test_empty_counts_are_noops() {
        let mut focus = FieldFocus::default();
        focus.next_field(0);
        focus.prev_option(0);
        assert_eq!(focus, FieldFocus::default());
    }
}
