//! Removal of page chrome from cloned task subtrees.

use crate::page::PageTree;

use super::selectors::UNWANTED;

/// Strip UI chrome, badges and administrative controls below `scope`.
///
/// Must only be called on a clone; the live page is never filtered. Returns
/// the number of subtrees removed. Each selector is re-queried after every
/// removal, so a match nested inside an already removed subtree is never
/// reached and is not counted.
pub fn remove_unwanted<T: PageTree>(page: &mut T, scope: T::Node) -> usize {
    let mut removed = 0;
    for selector in UNWANTED.iter() {
        while let Some(node) = page.query_first(scope, selector) {
            page.remove_subtree(node);
            removed += 1;
        }
    }
    removed
}
