pub mod boundary;
pub mod plan;

pub use boundary::BoundaryClass;
pub use plan::{Edit, RewritePlan};

use tracing::trace;

/// Finds every standalone occurrence of a token in a buffer
#[derive(Debug, Clone, Copy, Default)]
pub struct BufferRewriter {
    boundary: BoundaryClass,
}

impl BufferRewriter {
    pub fn new(boundary: BoundaryClass) -> Self {
        Self { boundary }
    }

    pub fn boundary(&self) -> BoundaryClass {
        self.boundary
    }

    /// Plan the replacement of every boundary-delimited `old` with `new`.
    ///
    /// Offsets in the plan refer to `buffer` as given. Resuming at the end of
    /// an accepted match is the same as resuming after the inserted
    /// replacement in the edited text, so replacements are never rescanned.
    /// A rejected match only advances one character, which keeps overlapping
    /// candidates in play.
    pub fn plan(&self, buffer: &str, old: &str, new: &str) -> RewritePlan {
        let mut plan = RewritePlan::default();
        if old.is_empty() {
            return plan;
        }

        let mut pos = 0;
        while let Some(found) = buffer[pos..].find(old) {
            let start = pos + found;
            let end = start + old.len();

            if self.boundary.is_delimited(buffer, start, end) {
                trace!(start, end, "accepted occurrence");
                plan.push(Edit {
                    start,
                    end,
                    replacement: new.to_string(),
                });
                pos = end;
            } else {
                trace!(start, end, "occurrence is part of a larger identifier");
                pos = start + buffer[start..].chars().next().map_or(1, char::len_utf8);
            }
        }

        plan
    }
}

/// Plan a rewrite using the ASCII identifier boundary
pub fn rewrite_all(buffer: &str, old: &str, new: &str) -> RewritePlan {
    BufferRewriter::default().plan(buffer, old, new)
}
