//! Captured groups.

/// The groups captured by one pattern match.
///
/// Group `0` is the whole matched text; groups `1..` are the pattern's
/// numbered groups. A group that did not take part in the match is `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Captures {
    groups: Vec<Option<String>>,
}

impl Captures {
    /// Creates captures from the whole match followed by the numbered groups.
    #[must_use]
    pub fn new(whole: &str, groups: &[&str]) -> Self {
        let mut all = Vec::with_capacity(groups.len() + 1);
        all.push(Some(whole.to_string()));
        all.extend(groups.iter().map(|group| Some((*group).to_string())));
        Self { groups: all }
    }

    /// Creates captures from optional groups, index `0` being the whole match.
    #[must_use]
    pub fn from_groups(groups: Vec<Option<String>>) -> Self {
        Self { groups }
    }

    /// Returns group `index`, or `None` if it is absent.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.groups.get(index).and_then(Option::as_deref)
    }

    /// Returns the whole matched text.
    #[must_use]
    pub fn whole(&self) -> Option<&str> {
        self.get(0)
    }

    /// Number of groups, including the whole match.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if nothing was captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
