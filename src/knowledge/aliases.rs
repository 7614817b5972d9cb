//! Alias table: user-facing phrases mapped to canonical entity keys.

/// One alias and the entity key it resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alias {
    pub phrase: &'static str,
    pub key: &'static str,
}

/// Ordered alias table. Aliases are lowercase and may contain spaces; several
/// aliases may point at the same key.
#[derive(Debug, Clone, Copy)]
pub struct AliasTable {
    entries: &'static [(&'static str, &'static str)],
}

impl AliasTable {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Aliases in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Alias> + '_ {
        self.entries
            .iter()
            .map(|&(phrase, key)| Alias { phrase, key })
    }

    /// All aliases that resolve to `key`, in declaration order.
    pub fn aliases_for<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'static str> + 'a {
        self.iter().filter(move |a| a.key == key).map(|a| a.phrase)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
