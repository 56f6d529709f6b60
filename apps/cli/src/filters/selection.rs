//! Multi-Select Filter State.
//!
//! One selected-value set per dimension. An empty set imposes no constraint.
//! All operations are synchronous and touch only this struct; the session
//! reducer clones the whole state before applying them, so every update
//! produces a fresh value.

use indexmap::IndexSet;

use crate::filters::FilterDimension;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveFilters {
    sector: IndexSet<String>,
    location: IndexSet<String>,
    industry: IndexSet<String>,
    experience: IndexSet<String>,
    qualification: IndexSet<String>,
    salary: IndexSet<String>,
}

impl ActiveFilters {
    pub fn selected(&self, dimension: FilterDimension) -> &IndexSet<String> {
        match dimension {
            FilterDimension::Sector => &self.sector,
            FilterDimension::Location => &self.location,
            FilterDimension::Industry => &self.industry,
            FilterDimension::Experience => &self.experience,
            FilterDimension::Qualification => &self.qualification,
            FilterDimension::Salary => &self.salary,
        }
    }

    fn selected_mut(&mut self, dimension: FilterDimension) -> &mut IndexSet<String> {
        match dimension {
            FilterDimension::Sector => &mut self.sector,
            FilterDimension::Location => &mut self.location,
            FilterDimension::Industry => &mut self.industry,
            FilterDimension::Experience => &mut self.experience,
            FilterDimension::Qualification => &mut self.qualification,
            FilterDimension::Salary => &mut self.salary,
        }
    }

    /// Removes the value if selected, adds it otherwise.
    pub fn toggle(&mut self, dimension: FilterDimension, value: &str) {
        let set = self.selected_mut(dimension);
        if !set.shift_remove(value) {
            set.insert(value.to_string());
        }
    }

    /// Replaces the dimension's selection wholesale.
    pub fn set_all<I>(&mut self, dimension: FilterDimension, values: I)
    where
        I: IntoIterator<Item = String>,
    {
        *self.selected_mut(dimension) = values.into_iter().collect();
    }

    /// No-op when the value is not selected.
    pub fn remove(&mut self, dimension: FilterDimension, value: &str) {
        self.selected_mut(dimension).shift_remove(value);
    }

    pub fn clear_dimension(&mut self, dimension: FilterDimension) {
        self.selected_mut(dimension).clear();
    }

    pub fn clear_all(&mut self) {
        for dimension in FilterDimension::ALL {
            self.selected_mut(dimension).clear();
        }
    }

    pub fn is_selected(&self, dimension: FilterDimension, value: &str) -> bool {
        self.selected(dimension).contains(value)
    }

    pub fn has_any(&self) -> bool {
        FilterDimension::ALL
            .iter()
            .any(|dimension| !self.selected(*dimension).is_empty())
    }

    pub fn total_selected(&self) -> usize {
        FilterDimension::ALL
            .iter()
            .map(|dimension| self.selected(*dimension).len())
            .sum()
    }

    /// Active (dimension, value) pairs in insertion order, for chip display.
    pub fn iter(&self) -> impl Iterator<Item = (FilterDimension, &str)> + '_ {
        FilterDimension::ALL.into_iter().flat_map(move |dimension| {
            self.selected(dimension)
                .iter()
                .map(move |value| (dimension, value.as_str()))
        })
    }
}
