use crate::root_parameter::RootParameter;

/// Owns the root parameters of a root signature. A parameter's index is its binding slot.
#[derive(Debug, Clone, PartialEq)]
pub struct RootParameterList {
    parameters: Vec<RootParameter>,
}

impl RootParameterList {
    /// Creates the list with a single default parameter in slot 0
    pub fn new() -> Self {
        RootParameterList {
            parameters: vec![RootParameter::new()],
        }
    }

    /// Appends a default parameter and returns its slot
    pub fn add_new(&mut self) -> usize {
        self.parameters.push(RootParameter::new());
        log::debug!("Added root parameter in slot {}", self.parameters.len() - 1);
        self.parameters.len() - 1
    }

    pub fn get(&self, slot: usize) -> Option<&RootParameter> {
        self.parameters.get(slot)
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut RootParameter> {
        self.parameters.get_mut(slot)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RootParameter> {
        self.parameters.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, RootParameter> {
        self.parameters.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Drops every parameter. Calling this on an empty list does nothing.
    pub fn finalize(&mut self) {
        if self.parameters.is_empty() {
            return;
        }
        log::debug!("Releasing {} root parameters", self.parameters.len());
        self.parameters.clear();
    }
}

impl Default for RootParameterList {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a RootParameterList {
    type Item = &'a RootParameter;
    type IntoIter = std::slice::Iter<'a, RootParameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "root_parameter_list_tests.rs"]
mod tests;
