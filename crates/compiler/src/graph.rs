// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::collections::{HashMap, HashSet};

use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DefaultIx, DiGraph, NodeIndex};

use crate::descriptor::TypeDescriptor;

type NodeIdx = NodeIndex<DefaultIx>;

/// The compiled vocabulary:
/// all types in presentation order,
/// plus lookup by ID.
///
/// It is immutable once compiled;
/// a changed vocabulary requires compiling a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeGraph {
    types: Vec<TypeDescriptor>,
    index: HashMap<String, usize>,
}

/// Parent -> child edges between the types of a [`TypeGraph`].
/// Node `i` is the `i`-th type of the graph.
pub struct InheritanceForest<'a> {
    pub graph: DiGraph<&'a TypeDescriptor, ()>,
    /// Nodes without a parent, in graph order
    pub roots: Vec<NodeIdx>,
}

impl TypeGraph {
    /// Wraps already ordered, ID-unique descriptors.
    pub(crate) fn new(types: Vec<TypeDescriptor>) -> Self {
        let index = types
            .iter()
            .enumerate()
            .map(|(idx, typ)| (typ.id.clone(), idx))
            .collect();
        Self { types, index }
    }

    #[must_use]
    pub fn types(&self) -> &[TypeDescriptor] {
        &self.types
    }

    #[must_use]
    pub fn into_types(self) -> Vec<TypeDescriptor> {
        self.types
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TypeDescriptor> {
        self.types.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&TypeDescriptor> {
        self.index.get(id).and_then(|idx| self.types.get(*idx))
    }

    pub fn roots(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.iter().filter(|typ| typ.is_root())
    }

    /// The direct sub-types of `id`, in the order they were declared.
    pub fn sub_types_of<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a TypeDescriptor> + 'a {
        self.get(id)
            .map(TypeDescriptor::sub_types)
            .unwrap_or_default()
            .iter()
            .filter_map(move |sub_id| self.get(sub_id))
    }

    /// The chain of types from the root down to `id` (inclusive).
    /// Empty if `id` is unknown.
    ///
    /// The walk up ends at a type without a parent,
    /// or with a parent that is not part of this graph.
    /// If the vocabulary contains a sub-class cycle,
    /// it ends before the first type that would be visited twice.
    #[must_use]
    pub fn hierarchy(&self, id: &str) -> Vec<&TypeDescriptor> {
        let mut chain = Vec::new();
        let mut visited = HashSet::new();
        let mut current = self.get(id);
        while let Some(typ) = current {
            if !visited.insert(typ.id.as_str()) {
                tracing::debug!("Sub-class cycle detected at '{}'", typ.id);
                break;
            }
            chain.push(typ);
            current = typ.parent.as_deref().and_then(|parent| self.get(parent));
        }
        chain.reverse();
        chain
    }

    #[must_use]
    pub fn inheritance_forest(&self) -> InheritanceForest<'_> {
        let mut graph = DiGraph::with_capacity(self.types.len(), self.types.len());
        let nodes: Vec<NodeIdx> = self.types.iter().map(|typ| graph.add_node(typ)).collect();
        for (parent_node, typ) in nodes.iter().zip(&self.types) {
            for sub_id in typ.sub_types() {
                if let Some(child_node) = self.index.get(sub_id).and_then(|idx| nodes.get(*idx)) {
                    graph.add_edge(*parent_node, *child_node, ());
                }
            }
        }
        let roots = nodes
            .iter()
            .zip(&self.types)
            .filter(|(_, typ)| typ.is_root())
            .map(|(node, _)| *node)
            .collect();
        InheritanceForest { graph, roots }
    }

    /// Whether some types are their own (indirect) super-class.
    /// Such types are not reachable from any root.
    #[must_use]
    pub fn has_sub_class_cycle(&self) -> bool {
        is_cyclic_directed(&self.inheritance_forest().graph)
    }
}

impl<'a> IntoIterator for &'a TypeGraph {
    type Item = &'a TypeDescriptor;
    type IntoIter = std::slice::Iter<'a, TypeDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> InheritanceForest<'a> {
    /// The direct children of `node`, in graph order.
    #[must_use]
    pub fn children(&self, node: NodeIdx) -> Vec<NodeIdx> {
        let mut children: Vec<_> = self.graph.neighbors(node).collect();
        children.sort_unstable();
        children
    }

    /// All types reachable from the roots, depth-first and pre-order,
    /// each with its depth (roots have depth 0).
    /// Types within a sub-class cycle are not reachable.
    #[must_use]
    pub fn depth_first(&self) -> Vec<(usize, &'a TypeDescriptor)> {
        let mut visited = Vec::with_capacity(self.graph.node_count());
        let mut stack: Vec<(usize, NodeIdx)> =
            self.roots.iter().rev().map(|root| (0, *root)).collect();
        while let Some((depth, node)) = stack.pop() {
            if let Some(typ) = self.graph.node_weight(node) {
                visited.push((depth, *typ));
            }
            stack.extend(
                self.children(node)
                    .into_iter()
                    .rev()
                    .map(|child| (depth + 1, child)),
            );
        }
        visited
    }
}
