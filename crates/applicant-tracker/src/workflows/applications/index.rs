/// Ascending list of applicant names searched with binary search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SortedNameIndex {
    names: Vec<String>,
}

impl SortedNameIndex {
    fn locate(&self, name: &str) -> Result<usize, usize> {
        self.names.binary_search_by(|probe| probe.as_str().cmp(name))
    }

    /// Insert at the ordered position. Returns `false` if the name is already indexed.
    pub(crate) fn insert(&mut self, name: &str) -> bool {
        match self.locate(name) {
            Ok(_) => false,
            Err(position) => {
                self.names.insert(position, name.to_string());
                true
            }
        }
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.locate(name).is_ok()
    }

    pub(crate) fn names(&self) -> &[String] {
        &self.names
    }
}
