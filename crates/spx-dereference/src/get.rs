use crate::types::Container;

/// Get a value from a container by path.
///
/// Returns `None` if any step is missing.
pub fn get<'a, C: Container>(root: &'a C, path: &[C::Key]) -> Option<&'a C> {
    let mut current = root;
    for step in path {
        current = current.child(step)?;
    }
    Some(current)
}

/// Get a mutable reference to a value in a container by path.
pub fn get_mut<'a, C: Container>(root: &'a mut C, path: &[C::Key]) -> Option<&'a mut C> {
    let mut current = root;
    for step in path {
        current = current.child_mut(step)?;
    }
    Some(current)
}
