use serde::{Deserialize, Serialize};

use super::person::{Person, PersonSummary};

pub(crate) fn summaries(people: &[Person]) -> Vec<PersonSummary> {
    people.iter().map(PersonSummary::from).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Siblings<P = Person> {
    pub brothers: Vec<P>,
    pub sisters: Vec<P>,
}

impl Siblings {
    pub fn is_empty(&self) -> bool {
        self.brothers.is_empty() && self.sisters.is_empty()
    }

    pub fn summarize(&self) -> Siblings<PersonSummary> {
        Siblings {
            brothers: summaries(&self.brothers),
            sisters: summaries(&self.sisters),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Children<P = Person> {
    pub sons: Vec<P>,
    pub daughters: Vec<P>,
}

impl Children {
    pub fn summarize(&self) -> Children<PersonSummary> {
        Children {
            sons: summaries(&self.sons),
            daughters: summaries(&self.daughters),
        }
    }
}

/// Grandparents on one side, filled by position (`parent.father`,
/// `parent.mother`), not by the occupant's gender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrandparentPair<P = Person> {
    pub grandfather: Option<P>,
    pub grandmother: Option<P>,
}

impl GrandparentPair {
    pub fn is_empty(&self) -> bool {
        self.grandfather.is_none() && self.grandmother.is_none()
    }

    pub fn summarize(&self) -> GrandparentPair<PersonSummary> {
        GrandparentPair {
            grandfather: self.grandfather.as_ref().map(PersonSummary::from),
            grandmother: self.grandmother.as_ref().map(PersonSummary::from),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grandparents<P = Person> {
    pub paternal: GrandparentPair<P>,
    pub maternal: GrandparentPair<P>,
}

impl Grandparents {
    pub fn is_empty(&self) -> bool {
        self.paternal.is_empty() && self.maternal.is_empty()
    }

    pub fn summarize(&self) -> Grandparents<PersonSummary> {
        Grandparents {
            paternal: self.paternal.summarize(),
            maternal: self.maternal.summarize(),
        }
    }
}

/// A relation list split by the side of the family it was reached through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BySide<P = Person> {
    pub paternal: Vec<P>,
    pub maternal: Vec<P>,
}

impl BySide {
    pub fn is_empty(&self) -> bool {
        self.paternal.is_empty() && self.maternal.is_empty()
    }

    pub fn summarize(&self) -> BySide<PersonSummary> {
        BySide {
            paternal: summaries(&self.paternal),
            maternal: summaries(&self.maternal),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnclesAndAunts<P = Person> {
    pub uncles: BySide<P>,
    pub aunts: BySide<P>,
}

impl UnclesAndAunts {
    pub fn is_empty(&self) -> bool {
        self.uncles.is_empty() && self.aunts.is_empty()
    }

    pub fn summarize(&self) -> UnclesAndAunts<PersonSummary> {
        UnclesAndAunts {
            uncles: self.uncles.summarize(),
            aunts: self.aunts.summarize(),
        }
    }
}

// Hand-written so that `P` itself need not be `Default`.

impl<P> Default for Siblings<P> {
    fn default() -> Self {
        Self {
            brothers: Vec::new(),
            sisters: Vec::new(),
        }
    }
}

impl<P> Default for Children<P> {
    fn default() -> Self {
        Self {
            sons: Vec::new(),
            daughters: Vec::new(),
        }
    }
}

impl<P> Default for GrandparentPair<P> {
    fn default() -> Self {
        Self {
            grandfather: None,
            grandmother: None,
        }
    }
}

impl<P> Default for Grandparents<P> {
    fn default() -> Self {
        Self {
            paternal: GrandparentPair::default(),
            maternal: GrandparentPair::default(),
        }
    }
}

impl<P> Default for BySide<P> {
    fn default() -> Self {
        Self {
            paternal: Vec::new(),
            maternal: Vec::new(),
        }
    }
}

impl<P> Default for UnclesAndAunts<P> {
    fn default() -> Self {
        Self {
            uncles: BySide::default(),
            aunts: BySide::default(),
        }
    }
}
