//! Static meal catalog, keyed by diet type. Built once at first use and
//! never mutated afterwards; the planner and the swap path both read from it.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::{MealDetail, MealType};

/// Candidate meals for one diet, split by slot.
#[derive(Debug, Clone)]
pub struct DietCatalog {
    pub breakfast: Vec<MealDetail>,
    pub lunch: Vec<MealDetail>,
    pub dinner: Vec<MealDetail>,
}

impl DietCatalog {
    pub fn slot(&self, meal_type: MealType) -> &[MealDetail] {
        match meal_type {
            MealType::Breakfast => &self.breakfast,
            MealType::Lunch => &self.lunch,
            MealType::Dinner => &self.dinner,
        }
    }
}

/// Diet used when the requested one is unknown.
pub const FALLBACK_DIET: &str = "balanced";

/// Resolve a diet type (case-insensitive) to its catalog, falling back to
/// the balanced composite for anything unrecognized.
pub fn for_diet(diet: &str) -> &'static DietCatalog {
    let key = diet.to_lowercase();
    CATALOG
        .get(key.as_str())
        .unwrap_or_else(|| &CATALOG[FALLBACK_DIET])
}

#[allow(clippy::too_many_arguments)]
fn meal(
    name: &str,
    description: &str,
    calories: i64,
    protein: i64,
    carbs: i64,
    fats: i64,
    carbon_footprint: f64,
    ingredients: &[&str],
    cooking_time: i64,
) -> MealDetail {
    MealDetail {
        name: name.to_string(),
        description: description.to_string(),
        calories,
        protein,
        carbs,
        fats,
        carbon_footprint,
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        cooking_time,
    }
}

fn vegan() -> DietCatalog {
    DietCatalog {
        breakfast: vec![
            meal(
                "Overnight Oats with Berries",
                "Creamy oats with fresh berries and chia seeds",
                350, 12, 58, 8, 0.3,
                &["oats", "almond milk", "berries", "chia seeds", "maple syrup"],
                5,
            ),
            meal(
                "Tofu Scramble with Spinach",
                "Scrambled tofu with spinach and nutritional yeast",
                320, 18, 15, 20, 0.4,
                &["tofu", "spinach", "nutritional yeast", "turmeric", "olive oil"],
                15,
            ),
            meal(
                "Avocado Toast with Tomatoes",
                "Whole grain toast with mashed avocado and cherry tomatoes",
                380, 10, 42, 18, 0.5,
                &["whole grain bread", "avocado", "cherry tomatoes", "lemon", "red pepper flakes"],
                10,
            ),
        ],
        lunch: vec![
            meal(
                "Quinoa Buddha Bowl",
                "Quinoa with roasted vegetables and tahini dressing",
                480, 16, 68, 16, 0.6,
                &["quinoa", "chickpeas", "sweet potato", "kale", "tahini", "lemon"],
                30,
            ),
            meal(
                "Lentil Soup with Vegetables",
                "Hearty lentil soup with seasonal vegetables",
                420, 20, 62, 8, 0.5,
                &["red lentils", "carrots", "celery", "tomatoes", "vegetable broth"],
                35,
            ),
            meal(
                "Falafel Wrap with Hummus",
                "Crispy falafel in whole wheat wrap with hummus",
                520, 18, 72, 16, 0.7,
                &["chickpeas", "whole wheat wrap", "lettuce", "tomato", "hummus", "cucumber"],
                25,
            ),
        ],
        dinner: vec![
            meal(
                "Vegetable Stir-Fry with Tofu",
                "Colorful vegetables stir-fried with crispy tofu",
                480, 24, 48, 20, 0.6,
                &["tofu", "broccoli", "bell peppers", "brown rice", "soy sauce", "ginger"],
                25,
            ),
            meal(
                "Chickpea Curry with Rice",
                "Spiced chickpea curry served over basmati rice",
                520, 18, 82, 12, 0.5,
                &["chickpeas", "coconut milk", "tomatoes", "basmati rice", "curry spices"],
                35,
            ),
            meal(
                "Mushroom and Spinach Pasta",
                "Whole wheat pasta with garlic mushrooms and spinach",
                500, 16, 78, 14, 0.4,
                &["whole wheat pasta", "mushrooms", "spinach", "garlic", "olive oil"],
                20,
            ),
        ],
    }
}

fn vegetarian() -> DietCatalog {
    DietCatalog {
        breakfast: vec![
            meal(
                "Greek Yogurt with Granola",
                "Protein-rich Greek yogurt with homemade granola and honey",
                380, 18, 52, 10, 0.8,
                &["Greek yogurt", "granola", "honey", "blueberries", "almonds"],
                5,
            ),
            meal(
                "Vegetable Omelette",
                "Fluffy omelette with bell peppers, onions, and cheese",
                340, 22, 12, 22, 1.2,
                &["eggs", "bell peppers", "onions", "cheese", "butter"],
                15,
            ),
        ],
        lunch: vec![
            meal(
                "Caprese Salad with Mozzarella",
                "Fresh tomatoes, mozzarella, and basil with balsamic",
                420, 20, 18, 28, 1.5,
                &["tomatoes", "mozzarella", "basil", "olive oil", "balsamic vinegar"],
                10,
            ),
            meal(
                "Vegetarian Burrito Bowl",
                "Rice bowl with black beans, cheese, and guacamole",
                550, 22, 68, 20, 1.0,
                &["brown rice", "black beans", "cheese", "avocado", "sour cream", "salsa"],
                20,
            ),
        ],
        dinner: vec![
            meal(
                "Eggplant Parmesan",
                "Breaded eggplant baked with marinara and mozzarella",
                520, 20, 58, 22, 1.1,
                &["eggplant", "marinara sauce", "mozzarella", "parmesan", "breadcrumbs"],
                45,
            ),
            meal(
                "Spinach and Ricotta Stuffed Shells",
                "Pasta shells filled with ricotta and spinach",
                580, 26, 72, 18, 0.9,
                &["pasta shells", "ricotta", "spinach", "marinara", "parmesan"],
                40,
            ),
        ],
    }
}

fn omnivore() -> DietCatalog {
    DietCatalog {
        breakfast: vec![
            meal(
                "Scrambled Eggs with Bacon",
                "Classic scrambled eggs with crispy bacon strips",
                420, 28, 8, 30, 2.5,
                &["eggs", "bacon", "butter", "cheese", "toast"],
                15,
            ),
            meal(
                "Pancakes with Sausage",
                "Fluffy pancakes served with maple syrup and sausage",
                520, 18, 68, 18, 2.0,
                &["flour", "eggs", "milk", "sausage", "maple syrup"],
                20,
            ),
        ],
        lunch: vec![
            meal(
                "Grilled Chicken Caesar Salad",
                "Grilled chicken breast over romaine with Caesar dressing",
                480, 42, 22, 22, 3.2,
                &["chicken breast", "romaine lettuce", "parmesan", "croutons", "Caesar dressing"],
                20,
            ),
            meal(
                "Turkey and Avocado Sandwich",
                "Whole grain sandwich with turkey, avocado, and vegetables",
                520, 32, 48, 20, 2.8,
                &["turkey", "whole grain bread", "avocado", "lettuce", "tomato", "mayo"],
                10,
            ),
        ],
        dinner: vec![
            meal(
                "Grilled Salmon with Vegetables",
                "Herb-crusted salmon with roasted seasonal vegetables",
                540, 42, 32, 24, 4.5,
                &["salmon", "broccoli", "carrots", "olive oil", "herbs", "lemon"],
                30,
            ),
            meal(
                "Chicken Stir-Fry",
                "Chicken breast with mixed vegetables in teriyaki sauce",
                520, 38, 58, 14, 3.8,
                &["chicken breast", "bell peppers", "snap peas", "rice", "teriyaki sauce"],
                25,
            ),
            meal(
                "Beef Tacos with Toppings",
                "Seasoned ground beef tacos with fresh toppings",
                580, 32, 52, 26, 5.2,
                &["ground beef", "taco shells", "lettuce", "cheese", "sour cream", "salsa"],
                20,
            ),
        ],
    }
}

/// Balanced composite: vegetarian base widened with a slice of the vegan
/// breakfasts and omnivore lunches/dinners.
fn balanced(vegan: &DietCatalog, vegetarian: &DietCatalog, omnivore: &DietCatalog) -> DietCatalog {
    let mut breakfast = vegetarian.breakfast.clone();
    breakfast.extend(vegan.breakfast.iter().take(1).cloned());

    let mut lunch = vegetarian.lunch.clone();
    lunch.extend(omnivore.lunch.iter().take(1).cloned());

    let mut dinner = vegetarian.dinner.clone();
    dinner.extend(omnivore.dinner.iter().take(2).cloned());

    DietCatalog {
        breakfast,
        lunch,
        dinner,
    }
}

static CATALOG: LazyLock<HashMap<&'static str, DietCatalog>> = LazyLock::new(|| {
    let vegan = vegan();
    let vegetarian = vegetarian();
    let omnivore = omnivore();
    let balanced = balanced(&vegan, &vegetarian, &omnivore);

    let mut m = HashMap::new();
    // pescatarian rides on the vegetarian catalog, flexitarian on balanced.
    m.insert("pescatarian", vegetarian.clone());
    m.insert("flexitarian", balanced.clone());
    m.insert("vegan", vegan);
    m.insert("vegetarian", vegetarian);
    m.insert("omnivore", omnivore);
    m.insert("balanced", balanced);
    m
});
