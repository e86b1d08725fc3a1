// ID Provider Port (store-assigned identities)

/// Identity scheme used by store adapters.
///
/// The adapter asks the provider for a fresh id on every insert, and uses
/// `is_well_formed` to reject malformed ids before querying.
pub trait IdProvider: Send + Sync {
    /// Generate a new unique record ID
    fn generate_id(&self) -> String;

    /// Whether `id` could have been produced by `generate_id`
    fn is_well_formed(&self, id: &str) -> bool;
}

/// UUID v4 provider (production)
pub struct UuidProvider;

impl IdProvider for UuidProvider {
    fn generate_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }

    /// Only the canonical lowercase hyphenated form; other spellings of the
    /// same UUID would not match stored ids
    fn is_well_formed(&self, id: &str) -> bool {
        uuid::Uuid::try_parse(id)
            .map(|u| u.hyphenated().to_string() == id)
            .unwrap_or(false)
    }
}
