use crate::areas::repository::Repository;
use crate::artifacts::objects::object::{Object, ObjectBox};
use std::io::Write;

impl Repository {
    /// Print an object: raw content for blobs, one line per entry for trees
    pub fn cat_file(&self, address: &str) -> anyhow::Result<()> {
        let object = self.get_object(address)?.into_object()?;
        let mut writer = self.writer();

        match object {
            ObjectBox::Blob(blob) => writer.write_all(blob.content())?,
            ObjectBox::Tree(tree) if tree.entries().is_empty() => {}
            ObjectBox::Tree(tree) => writeln!(writer, "{}", tree.display())?,
        }

        writer.flush()?;
        Ok(())
    }
}
