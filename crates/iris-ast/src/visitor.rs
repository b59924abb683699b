//! Generic pre-order visitor driven by [`crate::node::NodeRef::children`].
//!
//! `NodeRef` borrows from an immutable, already-parsed tree, so `Delete` and
//! `Replace` can't actually rewrite the tree in place the way the source
//! system's visitor does — there is no owned sibling type to hand back. They
//! are kept in [`VisitAction`] for signature parity and are treated as
//! `SkipChildren` by [`visit`]; real AST rewriting belongs to a printer/
//! transform stage operating over an owned tree, which spec §1 places out of
//! scope for this front end.

use crate::node::NodeRef;

pub enum VisitAction<'a> {
    Continue,
    SkipChildren,
    Delete,
    Replace(NodeRef<'a>),
    Break,
}

/// A sentinel returned by [`visit`] when a visitor asked to stop early.
pub struct Break;

pub trait Visitor {
    fn enter<'a>(&mut self, _node: NodeRef<'a>) -> VisitAction<'a> {
        VisitAction::Continue
    }

    fn leave<'a>(&mut self, _node: NodeRef<'a>) {}
}

/// Walks `root` in document order, calling `enter` before and `leave` after
/// each node's children. Returns `Err(Break)` if any call returned
/// `VisitAction::Break`.
pub fn visit<'a>(root: NodeRef<'a>, visitor: &mut dyn Visitor) -> Result<(), Break> {
    walk(root, visitor)
}

fn walk<'a>(node: NodeRef<'a>, visitor: &mut dyn Visitor) -> Result<(), Break> {
    match visitor.enter(node) {
        VisitAction::Break => return Err(Break),
        VisitAction::SkipChildren | VisitAction::Delete | VisitAction::Replace(_) => {
            visitor.leave(node);
            return Ok(());
        }
        VisitAction::Continue => {}
    }
    for child in node.children() {
        walk(child, visitor)?;
    }
    visitor.leave(node);
    Ok(())
}

/// Multiplexes several visitors over one traversal (spec §4.3
/// `visitInParallel`). Once a sub-visitor's `enter` returns `SkipChildren`
/// for a node, it is paused (neither `enter` nor `leave` called) until that
/// node's `leave` would fire, matching the "paused until leave" rule.
pub struct ParallelVisitor {
    visitors: Vec<Box<dyn Visitor>>,
    /// Depth at which each visitor was paused, if any.
    paused_at: Vec<Option<usize>>,
    depth: usize,
}

impl ParallelVisitor {
    pub fn new(visitors: Vec<Box<dyn Visitor>>) -> Self {
        let paused_at = vec![None; visitors.len()];
        Self { visitors, paused_at, depth: 0 }
    }
}

impl Visitor for ParallelVisitor {
    fn enter<'a>(&mut self, node: NodeRef<'a>) -> VisitAction<'a> {
        self.depth += 1;
        for (i, v) in self.visitors.iter_mut().enumerate() {
            if self.paused_at[i].is_some() {
                continue;
            }
            match v.enter(node) {
                VisitAction::Break => return VisitAction::Break,
                VisitAction::Continue => {}
                VisitAction::SkipChildren | VisitAction::Delete | VisitAction::Replace(_) => {
                    self.paused_at[i] = Some(self.depth);
                }
            }
        }
        VisitAction::Continue
    }

    fn leave<'a>(&mut self, node: NodeRef<'a>) {
        for (i, v) in self.visitors.iter_mut().enumerate() {
            match self.paused_at[i] {
                Some(d) if d == self.depth => {
                    self.paused_at[i] = None;
                }
                Some(_) => continue,
                None => v.leave(node),
            }
        }
        self.depth -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::NameNode;
    use crate::definition::DocumentNode;

    struct CountNames(usize);
    impl Visitor for CountNames {
        fn enter<'a>(&mut self, node: NodeRef<'a>) -> VisitAction<'a> {
            if let NodeRef::Name(_) = node {
                self.0 += 1;
            }
            VisitAction::Continue
        }
    }

    #[test]
    fn visits_nested_names() {
        let doc = DocumentNode { definitions: vec![], loc: None };
        let mut counter = CountNames(0);
        visit(NodeRef::Document(&doc), &mut counter).unwrap();
        assert_eq!(counter.0, 0);

        let name = NameNode { value: "x".into(), loc: None };
        let mut counter = CountNames(0);
        visit(NodeRef::Name(&name), &mut counter).unwrap();
        assert_eq!(counter.0, 1);
    }

    struct StopImmediately;
    impl Visitor for StopImmediately {
        fn enter<'a>(&mut self, _node: NodeRef<'a>) -> VisitAction<'a> {
            VisitAction::Break
        }
    }

    #[test]
    fn break_short_circuits() {
        let name = NameNode { value: "x".into(), loc: None };
        let result = visit(NodeRef::Name(&name), &mut StopImmediately);
        assert!(result.is_err());
    }
}
