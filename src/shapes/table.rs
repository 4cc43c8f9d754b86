use crate::error::{Error, Result};

/// Attributes shared by every table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpec {
    material: String,
    legs: u32,
    color: String,
}

impl TableSpec {
    pub fn new(material: impl Into<String>, legs: u32, color: impl Into<String>) -> Result<Self> {
        if legs == 0 {
            return Err(Error::invalid("a table needs at least one leg"));
        }

        Ok(Self {
            material: material.into(),
            legs,
            color: color.into(),
        })
    }

    pub fn material(&self) -> &str {
        &self.material
    }

    pub fn legs(&self) -> u32 {
        self.legs
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }
}

pub trait Table {
    fn spec(&self) -> &TableSpec;

    /// Fold the table away, if it folds at all.
    fn fold(&mut self);

    fn paint(&mut self, color: &str);

    /// Width and length of the table top.
    fn measure(&self) -> (f64, f64);
}
