use rand::Rng;
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SnippetId(u64);

/// Visible data snippets, newest first, capped at `cap`.
///
/// Snippets leave either through eviction (when a push exceeds the cap) or
/// through `expire` when their timer fires. Whichever happens second finds
/// nothing and is a no-op.
#[derive(Debug)]
pub struct SnippetFeed<T> {
    cap: usize,
    next_id: u64,
    entries: VecDeque<(SnippetId, T)>,
}

impl<T> SnippetFeed<T> {
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            next_id: 0,
            entries: VecDeque::with_capacity(cap + 1),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: SnippetId) -> bool {
        self.entries.iter().any(|(i, _)| *i == id)
    }

    /// Add a snippet at the front; returns its id and whatever fell off the
    /// back, oldest last.
    pub fn push(&mut self, item: T) -> (SnippetId, Vec<T>) {
        let id = SnippetId(self.next_id);
        self.next_id += 1;
        self.entries.push_front((id, item));
        let mut evicted = Vec::new();
        while self.entries.len() > self.cap {
            if let Some((_, old)) = self.entries.pop_back() {
                evicted.push(old);
            }
        }
        (id, evicted)
    }

    pub fn expire(&mut self, id: SnippetId) -> Option<T> {
        let pos = self.entries.iter().position(|(i, _)| *i == id)?;
        self.entries.remove(pos).map(|(_, item)| item)
    }
}

pub fn pick_snippet<'a, R: Rng + ?Sized>(rng: &mut R, pool: &[&'a str]) -> Option<&'a str> {
    if pool.is_empty() {
        return None;
    }
    Some(pool[rng.gen_range(0..pool.len())])
}
