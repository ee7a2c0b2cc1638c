use crate::unbalanced_tree::tree::Link;

/// A struct representing an internal node of an unbalanced binary search tree. Each child is owned
/// by exactly one parent.
pub struct Node<T> {
    pub key: T,
    pub left: Link<T>,
    pub right: Link<T>,
}

impl<T> Node<T> {
    pub fn new(key: T) -> Self {
        Node {
            key,
            left: None,
            right: None,
        }
    }

    pub fn key(&self) -> &T {
        &self.key
    }

    pub fn children(&self) -> (Option<&Node<T>>, Option<&Node<T>>) {
        (self.left.as_deref(), self.right.as_deref())
    }
}
