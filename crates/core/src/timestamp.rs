use chrono::{DateTime, Utc};

/// Records that carry an ISO-8601 `created_at` string
pub trait CreatedAt {
    fn created_at(&self) -> &str;
}

/// Format a creation timestamp
///
/// Produces `YYYY-MM-DDTHH:MM:SS.ffffffZ`. All stamps share this shape (the
/// seed records omit the fraction but sit years earlier), so comparing them as
/// strings matches chronological order.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}

/// Clone `items` ordered by `created_at`, newest first
///
/// The sort is stable: records with identical stamps keep their insertion order.
pub fn newest_first<T: CreatedAt + Clone>(items: &[T]) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| b.created_at().cmp(a.created_at()));
    sorted
}
