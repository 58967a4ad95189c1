//! Parsing of closed status and role enums from caller input.
//!
//! Input is matched against each variant's stored text after lowercasing and dropping
//! whitespace and underscores, so "In Progress", "in_progress" and "InProgress" all
//! resolve to the same variant.

use sea_orm::{ActiveEnum, Iterable};

use crate::server::error::domain::DomainError;

/// Parse `raw` into the enum variant whose stored value matches it.
///
/// # Returns
/// - `Ok(E)` - Matching variant
/// - `Err(DomainError::ValidationError)` - No variant matches, `field` names the input
pub fn parse_status<E>(field: &str, raw: &str) -> Result<E, DomainError>
where
    E: ActiveEnum<Value = String> + Iterable,
{
    let wanted = normalize(raw);

    E::iter()
        .find(|variant| normalize(&variant.to_value()) == wanted)
        .ok_or_else(|| {
            let allowed: Vec<String> = E::iter().map(|v| v.to_value()).collect();
            DomainError::validation(
                field,
                format!("{:?} is not one of {}", raw, allowed.join(", ")),
            )
        })
}

fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}
