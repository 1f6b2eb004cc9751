use std::ops::{Deref, DerefMut, Range};

/// A host-owned text buffer the renamer can edit.
///
/// `begin_edit`/`end_edit` bracket one logical change so a host can group
/// the edits into a single undoable step. They are never called directly by
/// the core; `EditScope` pairs them.
pub trait Document {
    fn text(&self) -> &str;

    fn replace_range(&mut self, range: Range<usize>, replacement: &str);

    fn begin_edit(&mut self) {}

    fn end_edit(&mut self) {}
}

/// Holds a document's edit transaction open until dropped
pub struct EditScope<'a, D: Document + ?Sized> {
    document: &'a mut D,
}

impl<'a, D: Document + ?Sized> EditScope<'a, D> {
    pub fn new(document: &'a mut D) -> Self {
        document.begin_edit();
        Self { document }
    }
}

impl<D: Document + ?Sized> Deref for EditScope<'_, D> {
    type Target = D;

    fn deref(&self) -> &Self::Target {
        self.document
    }
}

impl<D: Document + ?Sized> DerefMut for EditScope<'_, D> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.document
    }
}

impl<D: Document + ?Sized> Drop for EditScope<'_, D> {
    fn drop(&mut self) {
        self.document.end_edit();
    }
}

/// In-memory document
#[derive(Debug, Clone, Default)]
pub struct StringDocument {
    text: String,
    open_edits: usize,
    transactions: usize,
}

impl StringDocument {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Number of edit transactions started so far
    pub fn transactions(&self) -> usize {
        self.transactions
    }

    pub fn in_transaction(&self) -> bool {
        self.open_edits > 0
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl Document for StringDocument {
    fn text(&self) -> &str {
        &self.text
    }

    fn replace_range(&mut self, range: Range<usize>, replacement: &str) {
        self.text.replace_range(range, replacement);
    }

    fn begin_edit(&mut self) {
        self.open_edits += 1;
        self.transactions += 1;
    }

    fn end_edit(&mut self) {
        self.open_edits = self.open_edits.saturating_sub(1);
    }
}
