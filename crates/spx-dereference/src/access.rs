use std::fmt::Display;

use tracing::debug;

use crate::types::Container;
use crate::DereferenceError;

/// Walk `root` along `path`, optionally defining missing values.
///
/// - Without `define`, the first missing step ends the walk with `Ok(None)`
///   and nothing is created.
/// - With `define`, every missing intermediate step receives a fresh empty
///   container and a missing final step receives `define`.
/// - With `overwrite`, the final step receives `define` even when it already
///   holds a value.
///
/// An empty path returns `root` itself and ignores `define` and `overwrite`.
///
/// # Errors
///
/// [`DereferenceError::Assignment`] when a container along the path cannot
/// hold the value being stored (for example a number asked to hold a member).
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use spx_dereference::{access, to_path};
///
/// let mut doc = json!({});
/// let created = access(&mut doc, &to_path(["path", "to", "value"]), Some(json!("v")), false)
///     .unwrap();
/// assert_eq!(created.cloned(), Some(json!("v")));
/// assert_eq!(doc, json!({"path": {"to": {"value": "v"}}}));
/// ```
pub fn access<'a, C>(
    root: &'a mut C,
    path: &[C::Key],
    define: Option<C>,
    overwrite: bool,
) -> Result<Option<&'a mut C>, DereferenceError>
where
    C: Container + Display,
    C::Key: Display,
{
    let defining = define.is_some();
    let mut define = define;
    let last = path.len().saturating_sub(1);
    let mut current = root;

    for (idx, step) in path.iter().enumerate() {
        let is_last = idx == last;
        let missing = current.child(step).is_none();

        if missing && defining {
            let value = if is_last {
                define.take().unwrap_or_else(C::empty)
            } else {
                C::empty()
            };
            assign(current, step, value)?;
        } else if !missing && overwrite && is_last {
            if let Some(value) = define.take() {
                assign(current, step, value)?;
            }
        }

        match current.child_mut(step) {
            Some(next) => current = next,
            None => return Ok(None),
        }
    }

    Ok(Some(current))
}

fn assign<C>(container: &mut C, step: &C::Key, value: C) -> Result<(), DereferenceError>
where
    C: Container + Display,
    C::Key: Display,
{
    // A container may accept the call yet still not expose the child.
    if container.set_child(step, value).is_ok() && container.child(step).is_some() {
        return Ok(());
    }
    let err = DereferenceError::Assignment {
        key: step.to_string(),
        container: container.to_string(),
    };
    debug!(error = %err, "path assignment rejected");
    Err(err)
}
