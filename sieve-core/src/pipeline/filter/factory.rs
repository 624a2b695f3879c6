use super::NumberFilter;
use super::builtin::{EvenFilter, GreaterThanFilter, OddFilter};
use super::selector::FilterSelector;
use crate::pipeline::errors::{FilterError, TokenError};
use std::collections::HashMap;

/// Constructs a filter from its (possibly empty) argument.
type FilterBuilder =
    Box<dyn Fn(&str) -> Result<Box<dyn NumberFilter>, FilterError> + Send + Sync>;

fn build_even(_arg: &str) -> Result<Box<dyn NumberFilter>, FilterError> {
    Ok(Box::new(EvenFilter))
}

fn build_odd(_arg: &str) -> Result<Box<dyn NumberFilter>, FilterError> {
    Ok(Box::new(OddFilter))
}

fn build_greater_than(arg: &str) -> Result<Box<dyn NumberFilter>, FilterError> {
    let threshold = arg.parse::<i32>().map_err(|err| match TokenError::from(&err) {
        TokenError::OutOfRange => FilterError::OutOfRange {
            filter: "GT".to_string(),
            arg: arg.to_string(),
        },
        TokenError::Invalid => FilterError::InvalidArgument {
            filter: "GT".to_string(),
            arg: arg.to_string(),
        },
    })?;

    Ok(Box::new(GreaterThanFilter::new(threshold)))
}

/// Maps filter names to builders.
///
/// New kinds are added with [`FilterFactory::register`]; existing entries
/// are never touched except by registering the same name again.
pub struct FilterFactory {
    builders: HashMap<String, FilterBuilder>,
}

impl Default for FilterFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterFactory {
    /// A factory with the builtin `EVEN`, `ODD` and `GT` filters.
    pub fn new() -> Self {
        let mut factory = Self::empty();

        factory.register("EVEN", build_even);
        factory.register("ODD", build_odd);
        factory.register("GT", build_greater_than);

        factory
    }

    fn empty() -> Self {
        Self {
            builders: HashMap::new(),
        }
    }

    pub fn register<F>(&mut self, name: impl Into<String>, builder: F)
    where
        F: Fn(&str) -> Result<Box<dyn NumberFilter>, FilterError> + Send + Sync + 'static,
    {
        self.builders.insert(name.into(), Box::new(builder));
    }

    pub fn create(&self, name: &str, arg: &str) -> Result<Box<dyn NumberFilter>, FilterError> {
        let builder = self
            .builders
            .get(name)
            .ok_or_else(|| FilterError::UnknownType {
                name: name.to_string(),
            })?;

        builder(arg)
    }

    pub fn create_from_selector(
        &self,
        selector: &FilterSelector,
    ) -> Result<Box<dyn NumberFilter>, FilterError> {
        self.create(&selector.name, &selector.arg)
    }

    #[cfg(test)]
    fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.builders.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
