use serde::Serialize;

pub const ALL_CHROMOSOMES: &str = "all";

/// One side of a chromosome pair as chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromSelector<'a> {
    All,
    Named(&'a str),
}

impl<'a> ChromSelector<'a> {
    pub fn parse(value: &'a str) -> Self {
        if value == ALL_CHROMOSOMES {
            ChromSelector::All
        } else {
            ChromSelector::Named(value)
        }
    }

    pub fn is_all(self) -> bool {
        matches!(self, ChromSelector::All)
    }
}

/// Ordered set of known chromosome names. Order is the iteration order of
/// every wildcard expansion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ChromosomeUniverse {
    names: Vec<String>,
}

impl ChromosomeUniverse {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
