use crate::Regex;
use std::collections::HashMap;
use std::fmt::Display;
use std::io;
use std::io::Write;

type NodeId = usize;

struct TgfWriter<'a, T> {
    ids: HashMap<*const Regex<T>, NodeId>,
    nodes: Vec<String>,
    edges: Vec<(NodeId, NodeId, usize)>,
    _tree: std::marker::PhantomData<&'a Regex<T>>,
}

impl<'a, T: Display> TgfWriter<'a, T> {
    fn new() -> Self {
        Self {
            ids: HashMap::new(),
            nodes: Vec::new(),
            edges: Vec::new(),
            _tree: std::marker::PhantomData,
        }
    }

    // nodes are identified by instance: shared subtrees are visited once
    fn visit(&mut self, node: &'a Regex<T>) -> NodeId {
        let key = node as *const Regex<T>;
        if let Some(&id) = self.ids.get(&key) {
            return id;
        }

        let id = self.nodes.len();
        self.ids.insert(key, id);
        match node {
            Regex::Token(t) => self.nodes.push(format!("{id} {}({t})", node.symbol())),
            _ => self.nodes.push(format!("{id} {}", node.symbol())),
        }

        for (index, operand) in node.operands().into_iter().enumerate() {
            let child = self.visit(operand);
            self.edges.push((id, child, index));
        }
        id
    }
}

impl<T: Display> Regex<T> {
    /// Writes this tree in Trivial Graph Format.
    ///
    /// Node ids are assigned in pre-order, so the root is node `0`.
    pub fn output_tgf(&self, w: &mut impl Write) -> io::Result<()> {
        let mut writer = TgfWriter::new();
        let root = writer.visit(self);

        writeln!(w, "0 0")?;
        for node in &writer.nodes {
            writeln!(w, "{node}")?;
        }
        writeln!(w, "#")?;
        writeln!(w, "0 {root}")?;
        for (parent, child, index) in &writer.edges {
            writeln!(w, "{parent} {child} {index}")?;
        }

        Ok(())
    }

    pub fn to_tgf(&self) -> String {
        let mut out = Vec::new();
        // writing to a Vec does not fail
        let _ = self.output_tgf(&mut out);
        String::from_utf8_lossy(&out).into_owned()
    }
}
