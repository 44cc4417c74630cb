/// LIFO of point indices with access to the two topmost entries.
#[derive(Clone, Debug, Default)]
pub struct HullStack {
    items: Vec<usize>,
}

impl HullStack {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            items: Vec::with_capacity(n),
        }
    }

    #[inline]
    pub fn push(&mut self, idx: usize) {
        self.items.push(idx);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<usize> {
        self.items.pop()
    }

    #[inline]
    pub fn top(&self) -> Option<usize> {
        self.items.last().copied()
    }

    #[inline]
    pub fn next_to_top(&self) -> Option<usize> {
        let n = self.items.len();
        if n < 2 {
            return None;
        }
        Some(self.items[n - 2])
    }

    /// `(next_to_top, top)` when the stack holds at least two entries.
    #[inline]
    pub fn top_two(&self) -> Option<(usize, usize)> {
        Some((self.next_to_top()?, self.top()?))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Bottom-to-top view.
    pub fn as_slice(&self) -> &[usize] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_and_next_to_top() {
        let mut s = HullStack::default();
        assert_eq!(s.top(), None);
        s.push(4);
        assert_eq!(s.top(), Some(4));
        assert_eq!(s.next_to_top(), None);
        assert_eq!(s.top_two(), None);
        s.push(7);
        assert_eq!(s.top_two(), Some((4, 7)));
        assert_eq!(s.pop(), Some(7));
        assert_eq!(s.len(), 1);
        assert_eq!(s.into_vec(), vec![4]);
    }
}
