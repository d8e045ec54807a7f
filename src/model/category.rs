use serde::{Deserialize, Serialize};

/// Classification of an activity. Persisted as its numeric id.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Category {
    #[default]
    Food = 1,
    Exercise = 2,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CategoryError {
    #[error("Unknown category id: {0}")]
    Unknown(u8),
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Food, Category::Exercise];

    pub fn id(self) -> u8 {
        self as u8
    }

    /// Display label from the static category table.
    pub fn label(self) -> &'static str {
        match self {
            Category::Food => "Comida",
            Category::Exercise => "Ejercicio",
        }
    }
}

impl TryFrom<u8> for Category {
    type Error = CategoryError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            1 => Ok(Category::Food),
            2 => Ok(Category::Exercise),
            other => Err(CategoryError::Unknown(other)),
        }
    }
}

impl From<Category> for u8 {
    fn from(category: Category) -> Self {
        category.id()
    }
}
