use crate::root_table::RootTable;

/// Owns the descriptor tables of a root signature.
/// The order only matters for presentation; parameters refer to tables by index.
#[derive(Debug, Clone, PartialEq)]
pub struct RootTableList {
    default_name: String,
    tables: Vec<RootTable>,
}

impl RootTableList {
    /// Creates the list with a single default table
    pub fn new(default_name: &str) -> Self {
        RootTableList {
            default_name: default_name.to_owned(),
            tables: vec![RootTable::new(default_name)],
        }
    }

    /// Appends a fresh default table and returns its index
    pub fn add_new(&mut self) -> usize {
        let table = RootTable::new(&self.default_name);
        self.add(table)
    }

    pub fn add(&mut self, table: RootTable) -> usize {
        log::debug!(
            "Added table \"{}\" at index {}",
            table.name(),
            self.tables.len()
        );
        self.tables.push(table);
        self.tables.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&RootTable> {
        self.tables.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut RootTable> {
        self.tables.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RootTable> {
        self.tables.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, RootTable> {
        self.tables.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Drops every table. Calling this on an empty list does nothing.
    pub fn finalize(&mut self) {
        if self.tables.is_empty() {
            return;
        }
        log::debug!("Releasing {} tables", self.tables.len());
        self.tables.clear();
    }
}

impl<'a> IntoIterator for &'a RootTableList {
    type Item = &'a RootTable;
    type IntoIter = std::slice::Iter<'a, RootTable>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "root_table_list_tests.rs"]
mod tests;
