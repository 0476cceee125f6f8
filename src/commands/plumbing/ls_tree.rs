use crate::areas::repository::Repository;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::tree::Tree;
use std::io::Write;

impl Repository {
    /// Print the entries of a tree sorted by name, or just the names when `name_only`
    pub fn ls_tree(&self, address: &str, name_only: bool) -> anyhow::Result<()> {
        if name_only {
            for name in self.list_tree_names(address)? {
                writeln!(self.writer(), "{}", name)?;
            }

            return Ok(());
        }

        let mut entries = self.tree_entries(address)?;
        entries.sort_by(|a, b| a.name().cmp(b.name()));

        let tree = Tree::new(entries);
        if !tree.entries().is_empty() {
            writeln!(self.writer(), "{}", tree.display())?;
        }

        Ok(())
    }
}
