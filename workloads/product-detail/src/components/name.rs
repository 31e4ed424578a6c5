//! Product name heading.

use block_markup::{Element, Node};

/// Render the product name.
pub fn view_name<M>(name: &str) -> Node<M> {
    Element::new("h1").class("f2 fw4 measure").text(name).into()
}
