use std::io;

use text_trees::TreeNode;

use crate::{Triangulation, idx::Idx, sweep::MonotoneChain};

pub(crate) fn triangulation_tree(triangulation: &Triangulation) -> TreeNode<String> {
    let monotones = triangulation.monotones().enumerate().map(|(i, (vertices, triangles))| {
        let node = format!("[{}] {:?}", Idx::<MonotoneChain>::new(i), vertices);
        let triangles = triangles.iter().map(|t| -> TreeNode<String> { format!("{:?}", t).into() });
        TreeNode::with_child_nodes(node, triangles)
    });

    let root = format!("{} vertices, {} triangles ({:?})", triangulation.event_count(), triangulation.len(), triangulation.target());
    TreeNode::with_child_nodes(root, monotones)
}

pub(crate) fn write_triangulation(w: &mut impl io::Write, triangulation: &Triangulation) -> io::Result<()> {
    writeln!(w, "monotones:")?;
    writeln!(w, "{}", triangulation_tree(triangulation))
}
