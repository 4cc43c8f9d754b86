use crate::error::{Error, Result};

/// Attributes shared by every tree. Height is in metres, age in years.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeSpec {
    height: f64,
    age: u32,
    species: String,
}

impl TreeSpec {
    pub fn new(height: f64, age: u32, species: impl Into<String>) -> Result<Self> {
        // also rules out NaN
        if !(height > 0.0 && height.is_finite()) {
            return Err(Error::invalid(format!(
                "tree height must be positive, got {}",
                height
            )));
        }

        Ok(Self {
            height,
            age,
            species: species.into(),
        })
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn species(&self) -> &str {
        &self.species
    }
}

pub trait Tree {
    fn spec(&self) -> &TreeSpec;

    fn photosynthesize(&mut self);

    /// Advance the tree by `years`, increasing its age and height.
    fn grow(&mut self, years: u32);

    fn shed_leaves(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_height_is_rejected() {
        for height in [0.0, -1.5, f64::NAN, f64::INFINITY] {
            let res = TreeSpec::new(height, 3, "birch");
            assert!(matches!(res, Err(Error::InvalidArgument(_))), "height {}", height);
        }
    }

    #[test]
    fn seedling_of_age_zero_is_fine() {
        let spec = TreeSpec::new(0.1, 0, "maple").unwrap();

        assert_eq!(spec.age(), 0);
        assert_eq!(spec.species(), "maple");
    }
}
