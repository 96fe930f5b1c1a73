use crate::models::DateCandidate;

/// One generation of candidates.
///
/// A population is a snapshot: the evolution service replaces it wholesale each
/// cycle and never edits it in place.
#[derive(Debug, Clone)]
#[cfg_attr(test, derive(PartialEq))]
pub struct Population {
    pub(crate) generation: usize,
    pub(crate) candidates: Vec<DateCandidate>,
}

impl Population {
    pub(crate) fn new(generation: usize, candidates: Vec<DateCandidate>) -> Self {
        Self {
            generation,
            candidates,
        }
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn candidates(&self) -> &[DateCandidate] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
