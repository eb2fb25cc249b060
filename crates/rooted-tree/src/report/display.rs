//! `Display` and `Debug` through the default report.

use super::{Config, Meta};
use crate::node::Node;
use crate::tree::RootedTree;
use std::fmt::{self, Display};
use std::hash::Hash;

impl<I: Eq + Clone + Hash + Display, N: Node<I>> RootedTree<I, N> {
    fn write_report(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .render(&Config::default(), Meta::default())
            .map_err(|_| fmt::Error)?;
        f.write_str(text.strip_prefix('\n').unwrap_or(&text))
    }
}

impl<I: Eq + Clone + Hash + Display, N: Node<I>> Display for RootedTree<I, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_report(f)
    }
}

impl<I: Eq + Clone + Hash + Display, N: Node<I>> fmt::Debug for RootedTree<I, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_report(f)
    }
}
