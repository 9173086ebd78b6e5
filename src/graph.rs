//! In-memory triple accumulator for one output unit.
//!
//! The accumulator's lifetime is exactly one unit: created empty with its
//! unit number, grows monotonically as fragments are merged, and is retired
//! by serializing it to Turtle. The prefix table is a fixed constant, so
//! every unit carries identical prefix bindings.

use std::io::Write;

use oxrdf::{Graph, Triple};
use oxttl::TurtleSerializer;

use crate::error::ConvertError;
use crate::vocab;

pub struct GraphAccumulator {
    graph: Graph,
    unit: u64,
}

impl GraphAccumulator {
    pub fn new(unit: u64) -> Self {
        Self {
            graph: Graph::default(),
            unit,
        }
    }

    /// Monotonic unit number assigned at creation; names the output file.
    pub fn unit(&self) -> u64 {
        self.unit
    }

    /// Append a mapped fragment. Underlying storage has set semantics, so
    /// identical triples never double-count, but nothing relies on that.
    pub fn merge(&mut self, fragment: Vec<Triple>) {
        for triple in &fragment {
            self.graph.insert(triple);
        }
    }

    pub fn len(&self) -> usize {
        self.graph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Serialize the accumulated triples as Turtle with the fixed prefix set.
    pub fn write_turtle<W: Write>(&self, writer: W) -> Result<(), ConvertError> {
        let mut serializer = TurtleSerializer::new();
        for (prefix, iri) in vocab::PREFIXES {
            serializer = serializer.with_prefix(prefix, iri)?;
        }
        let mut writer = serializer.for_writer(writer);
        for triple in self.graph.iter() {
            writer.serialize_triple(triple)?;
        }
        let mut inner = writer.finish()?;
        inner.flush()?;
        Ok(())
    }
}
