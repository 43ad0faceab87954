//! Form option lists.

use portal_core::FormOptions;

use crate::{DbError, get_db};

pub struct OptionsRepository;

const OPTIONS_KEY: &str = "current";

impl OptionsRepository {
    /// The stored option lists; empty lists when never set.
    pub async fn get() -> Result<FormOptions, DbError> {
        let db = get_db()?;

        let record: Option<FormOptions> = db.select(("form_options", OPTIONS_KEY)).await?;

        Ok(record.unwrap_or_default())
    }

    /// Replace the option lists.
    pub async fn set(options: &FormOptions) -> Result<FormOptions, DbError> {
        let db = get_db()?;

        let mut result = db
            .query("UPSERT type::thing('form_options', $key) CONTENT $options RETURN AFTER")
            .bind(("key", OPTIONS_KEY))
            .bind(("options", options.clone()))
            .await?;

        let records: Vec<FormOptions> = result.take(0)?;

        records
            .into_iter()
            .next()
            .ok_or_else(|| DbError::Query("Failed to store form options".into()))
    }
}
