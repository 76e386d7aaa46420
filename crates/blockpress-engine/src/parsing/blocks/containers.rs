use super::kinds::ListKind;

/// List nesting state owned by one parse call.
///
/// After [`enter`](Self::enter) at depth `d`, the stack holds exactly `d + 1`
/// frames and the innermost one is the item's list kind. Any line that is
/// not a list item clears the state.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ListNesting {
    stack: Vec<ListKind>,
}

impl ListNesting {
    /// Records a list item of `kind` at `depth` and returns the depth.
    ///
    /// Deeper frames are closed; missing outer frames (an item indented past
    /// its parent) are filled with the same kind.
    pub fn enter(&mut self, kind: ListKind, depth: usize) -> usize {
        self.stack.truncate(depth);
        while self.stack.len() < depth {
            self.stack.push(kind);
        }
        self.stack.push(kind);
        depth
    }

    pub fn reset(&mut self) {
        self.stack.clear();
    }

    /// The innermost open list, if any.
    pub fn current(&self) -> Option<ListKind> {
        self.stack.last().copied()
    }

    /// Number of open list frames.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn frames(&self) -> &[ListKind] {
        &self.stack
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_opens_and_closes_frames() {
        let mut lists = ListNesting::default();
        lists.enter(ListKind::Bulleted, 0);
        assert_eq!(lists.depth(), 1);

        lists.enter(ListKind::Numbered, 1);
        assert_eq!(lists.frames(), &[ListKind::Bulleted, ListKind::Numbered]);

        lists.enter(ListKind::Bulleted, 0);
        assert_eq!(lists.frames(), &[ListKind::Bulleted]);
    }

    #[test]
    fn skipped_levels_are_filled() {
        let mut lists = ListNesting::default();
        assert_eq!(lists.enter(ListKind::Numbered, 2), 2);
        assert_eq!(lists.depth(), 3);
        assert_eq!(lists.current(), Some(ListKind::Numbered));
    }

    #[test]
    fn reset_clears_state() {
        let mut lists = ListNesting::default();
        lists.enter(ListKind::Bulleted, 1);
        lists.reset();
        assert_eq!(lists.current(), None);
        assert_eq!(lists.depth(), 0);
    }
}
