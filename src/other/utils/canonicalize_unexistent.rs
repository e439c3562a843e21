use std::path::{Path, PathBuf};

/// Canonicalizes a path whose tail components may not exist yet, by
/// canonicalizing the deepest existing ancestor and re-appending the rest.
#[must_use]
pub fn canonicalize_unexistent(path: &Path) -> Option<PathBuf> {
  for ancestor in path.ancestors() {
    let Ok(canonical) = ancestor.canonicalize() else {
      continue;
    };
    let Ok(remainder) = path.strip_prefix(ancestor) else {
      continue;
    };
    return Some(canonical.join(remainder));
  }
  None
}
