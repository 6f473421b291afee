use super::verdict::Verdict;

/// A shrinking set of items, one of which secretly holds the participant's
/// card.
///
/// The index of that item is tracked explicitly and renumbered on every
/// elimination, so it never has to be searched for again. Removed items are
/// dropped outright; the survivors close ranks and are renumbered from zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narrowing<T> {
    items: Vec<T>,
    target: usize,
}

impl<T> Narrowing<T> {
    pub fn new(items: Vec<T>, target: usize) -> Self {
        assert!(target < items.len(), "target {} outside {} items", target, items.len());
        Self { items, target }
    }
    pub fn size(&self) -> usize {
        self.items.len()
    }
    pub fn items(&self) -> &[T] {
        &self.items
    }
    /// Index of the item holding the participant's card.
    pub fn target(&self) -> usize {
        self.target
    }
    pub fn held(&self) -> &T {
        &self.items[self.target]
    }
    /// Apply one round of picks (0-based, distinct).
    ///
    /// If the picks include the target they are kept and everything else goes;
    /// otherwise the picks go and everything else stays. The target survives
    /// either way.
    pub fn eliminate(&mut self, chosen: &[usize]) -> Verdict {
        let n = self.items.len();
        assert!(!chosen.is_empty(), "nothing chosen");
        assert!(chosen.len() < n, "cannot choose all {} items", n);
        assert!(chosen.iter().all(|&i| i < n), "choice outside {} items", n);
        assert!(
            chosen.iter().enumerate().all(|(k, i)| !chosen[..k].contains(i)),
            "duplicate choice"
        );
        let keep = chosen.contains(&self.target);
        let retained = |i: &usize| chosen.contains(i) == keep;
        self.target = (0..self.target).filter(retained).count();
        self.items = std::mem::take(&mut self.items)
            .into_iter()
            .enumerate()
            .filter(|(i, _)| retained(i))
            .map(|(_, item)| item)
            .collect();
        let removed = n - self.items.len();
        match keep {
            true => Verdict::Kept { removed },
            false => Verdict::Discarded { removed },
        }
    }
    /// The lone survivor.
    pub fn survivor(mut self) -> T {
        assert_eq!(self.items.len(), 1, "narrowing has not finished");
        self.items.remove(0)
    }
}
