use crate::domain::{
    allergen::entities::AllergenTag,
    compatibility::entities::{CategoryRule, DietaryCategory, NutritionMetric},
};

pub const LOW_CARB_MAX_GRAMS: f64 = 20.0;
pub const LOW_SODIUM_MAX_MG: f64 = 600.0;

// Shared keyword groups the dietary-style ban lists are composed from.
const MEAT_KEYWORDS: &[&str] = &[
    "beef", "pork", "chicken", "lamb", "veal", "bacon", "ham", "sausage", "turkey", "duck",
    "meat", "prosciutto", "chorizo", "steak",
];
const SEAFOOD_KEYWORDS: &[&str] = &[
    "fish", "salmon", "tuna", "cod", "anchovy", "sardine", "shrimp", "prawn", "crab", "lobster",
    "clam", "mussel", "oyster", "scallop", "squid", "octopus", "seafood",
];
const DAIRY_KEYWORDS: &[&str] = &[
    "milk", "cheese", "butter", "cream", "yogurt", "whey", "casein", "ghee",
];
const EGG_KEYWORDS: &[&str] = &["egg", "mayonnaise", "meringue", "aioli"];
const GELATIN_KEYWORDS: &[&str] = &["gelatin", "gelatine"];
const HONEY_KEYWORDS: &[&str] = &["honey"];
const PORK_KEYWORDS: &[&str] = &["pork", "bacon", "ham", "lard", "prosciutto", "pancetta", "chorizo"];
const SHELLFISH_KEYWORDS: &[&str] = &[
    "shellfish", "shrimp", "prawn", "crab", "lobster", "crayfish", "clam", "mussel", "oyster",
    "scallop", "squid", "octopus",
];
const ALCOHOL_KEYWORDS: &[&str] = &[
    "alcohol", "wine", "beer", "rum", "brandy", "bourbon", "liqueur", "sake", "mirin",
];

/// The fixed category catalog the matrix and availability views evaluate
/// against: 9 single-allergen, 5 dietary-style, 2 health-focused entries.
///
/// Immutable once constructed; build a different one and inject it through
/// `Service::with_catalog` to swap taxonomy revisions.
#[derive(Debug, Clone, PartialEq)]
pub struct DietaryCategoryCatalog {
    categories: Vec<DietaryCategory>,
}

impl DietaryCategoryCatalog {
    pub fn new(categories: Vec<DietaryCategory>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[DietaryCategory] {
        &self.categories
    }

    pub fn get(&self, category_id: &str) -> Option<&DietaryCategory> {
        self.categories
            .iter()
            .find(|category| category.id == category_id)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn builtin() -> Self {
        let mut categories = Vec::with_capacity(16);

        categories.push(allergen_free(
            "dairy-free",
            "Dairy-Free",
            &["milk", "dairy", "cheese", "butter", "cream", "yogurt", "whey", "casein", "lactose"],
        ));
        categories.push(allergen_free(
            "egg-free",
            "Egg-Free",
            &["egg", "eggs", "albumen", "mayonnaise", "meringue"],
        ));
        categories.push(allergen_free(
            "peanut-free",
            "Peanut-Free",
            &["peanut", "peanuts", "groundnut"],
        ));
        categories.push(allergen_free(
            "tree-nut-free",
            "Tree-Nut-Free",
            &[
                "tree nut", "tree nuts", "nut", "nuts", "almond", "cashew", "walnut", "pecan",
                "pistachio", "hazelnut", "macadamia",
            ],
        ));
        categories.push(allergen_free("shellfish-free", "Shellfish-Free", SHELLFISH_KEYWORDS));
        categories.push(allergen_free(
            "fish-free",
            "Fish-Free",
            &["fish", "salmon", "tuna", "cod", "anchovy", "sardine", "halibut", "trout"],
        ));
        categories.push(allergen_free(
            "gluten-free",
            "Gluten-Free",
            &["gluten", "wheat", "barley", "rye", "malt", "semolina", "farro", "couscous"],
        ));
        categories.push(allergen_free(
            "soy-free",
            "Soy-Free",
            &["soy", "soya", "soybean", "soybeans", "tofu", "edamame", "tempeh", "miso"],
        ));
        categories.push(allergen_free(
            "sesame-free",
            "Sesame-Free",
            &["sesame", "tahini", "benne"],
        ));

        categories.push(dietary_style(
            "vegetarian",
            "Vegetarian",
            &[MEAT_KEYWORDS, SEAFOOD_KEYWORDS, GELATIN_KEYWORDS],
            &[],
            vec![AllergenTag::Fish, AllergenTag::Shellfish, AllergenTag::Molluscs],
        ));
        categories.push(dietary_style(
            "vegan",
            "Vegan",
            &[
                MEAT_KEYWORDS,
                SEAFOOD_KEYWORDS,
                DAIRY_KEYWORDS,
                EGG_KEYWORDS,
                GELATIN_KEYWORDS,
                HONEY_KEYWORDS,
            ],
            &[],
            vec![
                AllergenTag::Milk,
                AllergenTag::Eggs,
                AllergenTag::Fish,
                AllergenTag::Shellfish,
                AllergenTag::Molluscs,
            ],
        ));
        // Fish and seafood are carved back out of the meat ban ("crabmeat"
        // matches "meat" but stays pescatarian-friendly).
        categories.push(dietary_style(
            "pescatarian",
            "Pescatarian",
            &[MEAT_KEYWORDS, GELATIN_KEYWORDS],
            &[SEAFOOD_KEYWORDS],
            vec![],
        ));
        categories.push(dietary_style(
            "kosher",
            "Kosher",
            &[PORK_KEYWORDS, SHELLFISH_KEYWORDS],
            &[],
            vec![AllergenTag::Shellfish, AllergenTag::Molluscs],
        ));
        categories.push(dietary_style(
            "halal",
            "Halal",
            &[PORK_KEYWORDS, ALCOHOL_KEYWORDS, GELATIN_KEYWORDS],
            &[],
            vec![],
        ));

        categories.push(DietaryCategory {
            id: "low-carb".to_string(),
            display_name: "Low-Carb".to_string(),
            rule: CategoryRule::HealthFocused {
                metric: NutritionMetric::CarbsGrams,
                max_value: LOW_CARB_MAX_GRAMS,
            },
        });
        categories.push(DietaryCategory {
            id: "low-sodium".to_string(),
            display_name: "Low-Sodium".to_string(),
            rule: CategoryRule::HealthFocused {
                metric: NutritionMetric::SodiumMg,
                max_value: LOW_SODIUM_MAX_MG,
            },
        });

        Self { categories }
    }
}

fn allergen_free(id: &str, display_name: &str, aliases: &[&str]) -> DietaryCategory {
    DietaryCategory {
        id: id.to_string(),
        display_name: display_name.to_string(),
        rule: CategoryRule::AllergenFree {
            aliases: aliases.iter().map(|alias| alias.to_string()).collect(),
        },
    }
}

fn dietary_style(
    id: &str,
    display_name: &str,
    banned_groups: &[&[&str]],
    exempt_groups: &[&[&str]],
    blocker_tags: Vec<AllergenTag>,
) -> DietaryCategory {
    let collect = |groups: &[&[&str]]| -> Vec<String> {
        let mut keywords: Vec<String> = Vec::new();
        for group in groups {
            for keyword in *group {
                let keyword = keyword.to_string();
                if !keywords.contains(&keyword) {
                    keywords.push(keyword);
                }
            }
        }
        keywords
    };

    DietaryCategory {
        id: id.to_string(),
        display_name: display_name.to_string(),
        rule: CategoryRule::DietaryStyle {
            banned_keywords: collect(banned_groups),
            exempt_keywords: collect(exempt_groups),
            blocker_tags,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_has_sixteen_categories() {
        let catalog = DietaryCategoryCatalog::builtin();
        assert_eq!(catalog.len(), 16);

        let allergen_free = catalog
            .categories()
            .iter()
            .filter(|category| matches!(category.rule, CategoryRule::AllergenFree { .. }))
            .count();
        let dietary_style = catalog
            .categories()
            .iter()
            .filter(|category| matches!(category.rule, CategoryRule::DietaryStyle { .. }))
            .count();
        let health_focused = catalog
            .categories()
            .iter()
            .filter(|category| matches!(category.rule, CategoryRule::HealthFocused { .. }))
            .count();

        assert_eq!(allergen_free, 9);
        assert_eq!(dietary_style, 5);
        assert_eq!(health_focused, 2);
    }

    #[test]
    fn test_category_ids_are_unique() {
        let catalog = DietaryCategoryCatalog::builtin();
        for category in catalog.categories() {
            assert_eq!(
                catalog.get(&category.id).map(|found| &found.display_name),
                Some(&category.display_name)
            );
        }
    }
}
