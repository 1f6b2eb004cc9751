use crate::document::Document;
use serde::Serialize;
use std::ops::Range;

/// A single replacement, in offsets of the buffer the plan was built from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edit {
    pub start: usize,
    pub end: usize,
    pub replacement: String,
}

impl Edit {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Change in buffer length once this edit is applied
    pub fn delta(&self) -> isize {
        self.replacement.len() as isize - (self.end - self.start) as isize
    }
}

/// Non-overlapping edits ordered by ascending `start`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RewritePlan {
    edits: Vec<Edit>,
}

impl RewritePlan {
    pub(crate) fn push(&mut self, edit: Edit) {
        debug_assert!(self.edits.last().map_or(true, |last| last.end <= edit.start));
        self.edits.push(edit);
    }

    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Edit> {
        self.edits.iter()
    }

    /// Build the rewritten buffer in one pass over the original
    pub fn apply(&self, buffer: &str) -> String {
        let grown: isize = self.edits.iter().map(Edit::delta).sum();
        let capacity = (buffer.len() as isize + grown).max(0) as usize;
        let mut output = String::with_capacity(capacity);
        let mut cursor = 0;

        for edit in &self.edits {
            output.push_str(&buffer[cursor..edit.start]);
            output.push_str(&edit.replacement);
            cursor = edit.end;
        }
        output.push_str(&buffer[cursor..]);

        output
    }

    /// Apply edits one by one to a live document, shifting each edit by the
    /// length change of the ones before it. Returns the number of edits.
    pub fn apply_to<D: Document + ?Sized>(&self, document: &mut D) -> usize {
        let mut shift: isize = 0;

        for edit in &self.edits {
            let start = (edit.start as isize + shift) as usize;
            let end = (edit.end as isize + shift) as usize;
            document.replace_range(start..end, &edit.replacement);
            shift += edit.delta();
        }

        self.edits.len()
    }
}

impl<'a> IntoIterator for &'a RewritePlan {
    type Item = &'a Edit;
    type IntoIter = std::slice::Iter<'a, Edit>;

    fn into_iter(self) -> Self::IntoIter {
        self.edits.iter()
    }
}
