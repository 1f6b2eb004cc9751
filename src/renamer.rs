use crate::case::{Identifier, IdentifierError};
use crate::document::{Document, EditScope};
use crate::rewrite::{BufferRewriter, RewritePlan};
use crate::Config;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    NoSelection,
    InvalidIdentifier(IdentifierError),
    AlreadySnakeCase(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameReport {
    pub from: String,
    pub to: String,
    pub plan: RewritePlan,
}

impl RenameReport {
    pub fn replacements(&self) -> usize {
        self.plan.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    Skipped(SkipReason),
    Renamed(RenameReport),
}

impl RenameOutcome {
    /// Number of replacements made or planned; zero for skipped selections
    pub fn replacements(&self) -> usize {
        match self {
            RenameOutcome::Skipped(_) => 0,
            RenameOutcome::Renamed(report) => report.replacements(),
        }
    }
}

/// Renames a selected identifier to snake_case across a whole buffer
pub struct Renamer {
    rewriter: BufferRewriter,
}

impl Renamer {
    pub fn new(config: &Config) -> Self {
        Self {
            rewriter: BufferRewriter::new(config.boundary),
        }
    }

    /// Plan the rename against a snapshot without touching it
    pub fn plan(&self, buffer: &str, selection: Option<&str>) -> RenameOutcome {
        let (from, to) = match Self::target(selection) {
            Ok(target) => target,
            Err(reason) => return RenameOutcome::Skipped(reason),
        };

        let plan = self.rewriter.plan(buffer, from.as_str(), &to);
        debug!(from = %from, to = %to, replacements = plan.len(), "planned rename");

        RenameOutcome::Renamed(RenameReport {
            from: from.to_string(),
            to,
            plan,
        })
    }

    /// Rename inside a single edit transaction on the document
    pub fn apply<D: Document + ?Sized>(
        &self,
        document: &mut D,
        selection: Option<&str>,
    ) -> RenameOutcome {
        let (from, to) = match Self::target(selection) {
            Ok(target) => target,
            Err(reason) => return RenameOutcome::Skipped(reason),
        };

        let mut scope = EditScope::new(document);
        let plan = self.rewriter.plan(scope.text(), from.as_str(), &to);
        let applied = plan.apply_to(&mut *scope);
        debug!(from = %from, to = %to, replacements = applied, "applied rename");

        RenameOutcome::Renamed(RenameReport {
            from: from.to_string(),
            to,
            plan,
        })
    }

    fn target(selection: Option<&str>) -> Result<(Identifier, String), SkipReason> {
        let text = match selection {
            Some(text) if !text.is_empty() => text,
            _ => return Err(SkipReason::NoSelection),
        };

        let identifier = Identifier::parse(text).map_err(SkipReason::InvalidIdentifier)?;
        let snake = identifier.to_snake_case();
        if snake == identifier.as_str() {
            return Err(SkipReason::AlreadySnakeCase(snake));
        }

        Ok((identifier, snake))
    }
}

impl Default for Renamer {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
