//! CssLength - Panel Width Values
//!
//! Widths are kept in the unit they were written in so that the collapsed
//! check compares `2.45rem` against `2.45rem`, never against a pixel value
//! produced by a drag.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A CSS-style length: either root-em relative or absolute pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CssLength {
    /// Multiple of the window's rem size
    Rem(f32),
    /// Absolute pixels
    Px(f32),
}

impl CssLength {
    pub fn rem(value: f32) -> Self {
        CssLength::Rem(value)
    }

    pub fn px(value: f32) -> Self {
        CssLength::Px(value)
    }

    /// Resolve to pixels using the given rem size
    pub fn to_pixels(&self, rem_size: f32) -> f32 {
        match *self {
            CssLength::Rem(value) => value * rem_size,
            CssLength::Px(value) => value,
        }
    }

    /// Raw numeric value, without unit
    pub fn value(&self) -> f32 {
        match *self {
            CssLength::Rem(value) | CssLength::Px(value) => value,
        }
    }

    /// Unit suffix as written in CSS
    pub fn unit(&self) -> &'static str {
        match self {
            CssLength::Rem(_) => "rem",
            CssLength::Px(_) => "px",
        }
    }

    /// Whether both lengths use the same unit
    pub fn same_unit(&self, other: &CssLength) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl fmt::Display for CssLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value(), self.unit())
    }
}

impl FromStr for CssLength {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();

        // Only rem and px; plain em depends on a parent font size we do not track
        let (number, ctor): (&str, fn(f32) -> CssLength) = if let Some(n) = s.strip_suffix("rem") {
            (n, CssLength::Rem)
        } else if let Some(n) = s.strip_suffix("px") {
            (n, CssLength::Px)
        } else {
            return Err(Error::invalid(format!(
                "length '{s}' must end with 'rem' or 'px'"
            )));
        };

        let value: f32 = number
            .trim()
            .parse()
            .map_err(|e| Error::invalid(format!("length '{s}': {e}")))?;

        if !value.is_finite() || value < 0.0 {
            return Err(Error::invalid(format!(
                "length '{s}' must be a finite, non-negative number"
            )));
        }

        Ok(ctor(value))
    }
}

impl TryFrom<String> for CssLength {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<CssLength> for String {
    fn from(value: CssLength) -> Self {
        value.to_string()
    }
}
