//! Case-insensitive substring search over listing records.

use crate::{CandidateApplication, JobPosting};

/// A record that exposes the text attributes the search box looks at.
pub trait Searchable {
    fn search_fields(&self) -> impl Iterator<Item = &str>;
}

impl Searchable for JobPosting {
    fn search_fields(&self) -> impl Iterator<Item = &str> {
        [self.title.as_str(), self.department.as_str()]
            .into_iter()
            .chain(self.skills.iter().map(String::as_str))
    }
}

impl Searchable for CandidateApplication {
    fn search_fields(&self) -> impl Iterator<Item = &str> {
        [
            self.name.as_str(),
            self.employee_id.as_str(),
            self.current_department.as_str(),
            self.applied_for.as_str(),
        ]
        .into_iter()
        .chain(self.skills.iter().map(String::as_str))
    }
}

/// Check whether any searchable field contains `query`, ignoring case.
///
/// The query is matched as one substring; it is never split into words.
pub fn matches_query<T: Searchable>(record: &T, query: &str) -> bool {
    let needle = query.to_lowercase();
    record
        .search_fields()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Keep the records matching `query`, in their original order.
///
/// An empty query keeps every record.
pub fn filter_records<T: Searchable + Clone>(records: &[T], query: &str) -> Vec<T> {
    if query.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| matches_query(*record, query))
        .cloned()
        .collect()
}
