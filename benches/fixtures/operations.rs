//! Synthetic document generators for stress benchmarks.

use std::fmt::Write;

/// A query nested `depth` selection sets deep.
pub fn deeply_nested_query(depth: usize) -> String {
    let mut source = String::from("query Nested ");
    for level in 0..depth {
        let _ = write!(source, "{{ level{level} ");
    }
    source.push_str("{ leaf }");
    for _ in 0..depth {
        source.push_str(" }");
    }
    source
}

/// A flat query selecting `count` sibling fields with arguments.
pub fn wide_query(count: usize) -> String {
    let mut source = String::from("query Wide {\n");
    for index in 0..count {
        let _ = writeln!(source, "  field{index}(id: {index}, flag: true)");
    }
    source.push('}');
    source
}

/// A schema document with `count` object types, each described by a
/// comment block.
pub fn many_types(count: usize) -> String {
    let mut source = String::new();
    for index in 0..count {
        let _ = writeln!(
            source,
            "# Synthetic type number {index}.\n\
             type Gen{index} implements Node {{\n\
             \x20 id: ID!\n\
             \x20 value(scale: Float = 1.5): String\n\
             }}\n",
        );
    }
    source
}
