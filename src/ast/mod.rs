/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Node` capability, the program root and the closed statement and expression sets
/// - expressions: Payloads for each expression variant
/// - statements: Payloads for each statement variant

/// Implements `PartialEq` over the listed fields of each node.
///
/// The `token` a node was built from is left out, so two trees are equal
/// when they have the same shape and values, however the source spelled them.
macro_rules! shape_eq {
    ($($node:ty => $($field:ident),+;)+) => {
        $(
            impl PartialEq for $node {
                fn eq(&self, other: &Self) -> bool {
                    $(self.$field == other.$field)&&+
                }
            }
        )+
    };
}

pub mod ast;
pub mod expressions;
pub mod statements;
