//! Closure extraction from a [`DefinitionPool`].

use serde_json::{Map, Value};

use crate::error::ResolveError;
use crate::pool::DefinitionPool;

/// Extracts exactly the requested `names` from `pool`.
///
/// Each returned body is a verbatim copy of the pool entry; `$ref`s inside it
/// are not rewritten. An absent or empty pool satisfies an empty request and
/// nothing else.
///
/// # Errors
///
/// Returns [`ResolveError::PoolUnusable`] if `names` is non-empty and the pool
/// is absent or empty, or [`ResolveError::UnknownName`] for the first name the
/// pool does not define.
///
/// # Examples
///
/// ```
/// use schemagen_core::{DefinitionPool, ResolveError, resolve};
/// use serde_json::json;
///
/// assert!(resolve(None, &[]).unwrap().is_empty());
/// assert_eq!(resolve(None, &["id".to_string()]), Err(ResolveError::PoolUnusable));
///
/// let pool = DefinitionPool::from_value(json!({"definitions": {"id": {}}})).unwrap();
/// assert_eq!(
///     resolve(Some(&pool), &["name".to_string()]),
///     Err(ResolveError::UnknownName("name".into()))
/// );
/// ```
pub fn resolve(
    pool: Option<&DefinitionPool>,
    names: &[String],
) -> Result<Map<String, Value>, ResolveError> {
    let mut closure = Map::new();
    if names.is_empty() {
        return Ok(closure);
    }

    let pool = match pool {
        Some(pool) if !pool.is_empty() => pool,
        _ => return Err(ResolveError::PoolUnusable),
    };

    for name in names {
        let body = pool
            .get(name)
            .ok_or_else(|| ResolveError::UnknownName(name.clone()))?;
        closure.insert(name.clone(), body.clone());
    }
    Ok(closure)
}
