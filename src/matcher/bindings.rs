use smallvec::SmallVec;

/// Reserved placeholder bound by a trailing `*` in a `from` path.
pub const SPLAT: &str = "splat";

pub type Binding<'a> = (&'a str, &'a str);

/// Placeholder values captured while matching one rule.
///
/// The first binding of a name is final: later attempts to bind the same
/// name are ignored, so path captures shadow query captures and earlier
/// segments shadow later ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings<'a> {
    entries: SmallVec<[Binding<'a>; 4]>,
}

impl<'a> Bindings<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when `name` was already bound and `value` was dropped.
    pub fn bind(&mut self, name: &'a str, value: &'a str) -> bool {
        if self.get(name).is_some() {
            return false;
        }
        self.entries.push((name, value));
        true
    }

    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.entries
            .iter()
            .find(|(bound, _)| *bound == name)
            .map(|(_, value)| *value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Binding<'a>> + '_ {
        self.entries.iter().copied()
    }
}
