/// Lit flags for a row of independently toggled lanterns.
#[derive(Debug, Default)]
pub struct LanternRow {
    lit: Vec<bool>,
}

impl LanternRow {
    pub fn new(count: usize) -> Self {
        Self {
            lit: vec![false; count],
        }
    }

    /// Start from the lit state already present in the markup.
    pub fn from_flags(lit: Vec<bool>) -> Self {
        Self { lit }
    }

    pub fn len(&self) -> usize {
        self.lit.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lit.is_empty()
    }

    pub fn is_lit(&self, index: usize) -> bool {
        self.lit.get(index).copied().unwrap_or(false)
    }

    /// Flip one lantern and return its new state; `None` for an unknown index.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let slot = self.lit.get_mut(index)?;
        *slot = !*slot;
        Some(*slot)
    }
}

/// Quote text for a lantern, ignoring empty attributes.
pub fn quote_text(data_quote: Option<&str>) -> Option<&str> {
    data_quote.filter(|q| !q.is_empty())
}
