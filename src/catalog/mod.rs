mod data;
mod schema;
mod validation;

pub use schema::{Catalog, Category, ParticipationLevel, ProgramRequirement, SubActivity};
pub use validation::validate_catalog;

use tracing::debug;

use crate::error::Error;

impl Catalog {
    /// The ruleset shipped with this crate.
    ///
    /// Institutions that publish their own regulations load a replacement
    /// dataset through [`Catalog::from_yaml`] instead.
    pub fn builtin() -> Catalog {
        data::builtin()
    }

    /// Load a catalog dataset from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The YAML cannot be parsed into the catalog schema
    /// - The dataset fails validation (every violation is reported at once)
    pub fn from_yaml(yaml: &str) -> Result<Catalog, Error> {
        let catalog: Catalog =
            serde_saphyr::from_str(yaml).map_err(|e| Error::CatalogParse(e.to_string()))?;
        validate_catalog(&catalog).map_err(Error::InvalidCatalog)?;
        debug!(
            version = catalog.version,
            categories = catalog.categories.len(),
            sub_activities = catalog.sub_activities.len(),
            "catalog dataset loaded"
        );
        Ok(catalog)
    }

    /// Look up an activity category by id.
    pub fn lookup_category(&self, id: &str) -> Result<&Category, Error> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| Error::CategoryNotFound(id.to_string()))
    }

    /// Look up a sub-activity by id.
    pub fn lookup_sub_activity(&self, id: &str) -> Result<&SubActivity, Error> {
        self.sub_activities
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| Error::SubActivityNotFound(id.to_string()))
    }

    /// All sub-activities declared under a category, in declaration order.
    ///
    /// An unknown category id yields an empty list rather than an error, so
    /// callers can render empty pickers without special-casing.
    pub fn sub_activities_for_category(&self, category_id: &str) -> Vec<&SubActivity> {
        self.sub_activities
            .iter()
            .filter(|s| s.category_id == category_id)
            .collect()
    }

    /// Look up a participation level by id.
    pub fn level(&self, id: &str) -> Option<&ParticipationLevel> {
        self.levels.iter().find(|l| l.id == id)
    }

    /// Point requirements for a degree program.
    pub fn requirement_for(&self, program: &str) -> Result<&ProgramRequirement, Error> {
        self.programs
            .iter()
            .find(|p| p.program == program)
            .ok_or_else(|| Error::ProgramNotFound(program.to_string()))
    }
}
