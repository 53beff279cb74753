use std::fmt;
use std::str::FromStr;

/// One of the five fixed entry groups.
///
/// The set is closed: new categories cannot be added at runtime, and all
/// per-category storage is indexed by [`Category::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
    Exercise,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 5] = [
        Category::Breakfast,
        Category::Lunch,
        Category::Dinner,
        Category::Snacks,
        Category::Exercise,
    ];

    /// The four categories that count toward consumed calories.
    pub const FOOD: [Category; 4] = [
        Category::Breakfast,
        Category::Lunch,
        Category::Dinner,
        Category::Snacks,
    ];

    /// Display label, capitalized.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Breakfast => "Breakfast",
            Category::Lunch => "Lunch",
            Category::Dinner => "Dinner",
            Category::Snacks => "Snacks",
            Category::Exercise => "Exercise",
        }
    }

    /// Canonical lowercase key.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Breakfast => "breakfast",
            Category::Lunch => "lunch",
            Category::Dinner => "dinner",
            Category::Snacks => "snacks",
            Category::Exercise => "exercise",
        }
    }

    /// Storage index, stable across the fixed [`Category::ALL`] ordering.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Category::Breakfast => 0,
            Category::Lunch => 1,
            Category::Dinner => 2,
            Category::Snacks => 3,
            Category::Exercise => 4,
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Breakfast
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "breakfast" => Ok(Category::Breakfast),
            "lunch" => Ok(Category::Lunch),
            "dinner" => Ok(Category::Dinner),
            "snacks" => Ok(Category::Snacks),
            "exercise" => Ok(Category::Exercise),
            other => Err(format!("Unknown category: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_ordering_matches_indices() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_food_excludes_exercise() {
        assert!(!Category::FOOD.contains(&Category::Exercise));
        assert_eq!(Category::FOOD.len(), 4);
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("breakfast".parse::<Category>(), Ok(Category::Breakfast));
        assert_eq!("EXERCISE".parse::<Category>(), Ok(Category::Exercise));
        assert!("brunch".parse::<Category>().is_err());
    }
}
