use nutriplan_shared::{mealplan::Meal, recipe::RecipeDetails};

const DEFAULT_COOK_MINUTES: u16 = 20;

/// Minimal recipe built only from the meal itself, shown when the generator
/// cannot provide details. Same meal in, same recipe out.
pub fn fallback_recipe(meal: &Meal) -> RecipeDetails {
    let name = meal.name.trim();

    let mut ingredients = vec![format!("Main ingredients for {name}")];
    if meal.proteins > 0.0 {
        ingredients.push(format!("Protein source (about {:.0} g protein)", meal.proteins));
    }
    if meal.carbs > 0.0 {
        ingredients.push(format!("Carbohydrate source (about {:.0} g carbs)", meal.carbs));
    }
    if meal.fats > 0.0 {
        ingredients.push(format!("Cooking fat such as olive oil (about {:.0} g fat)", meal.fats));
    }
    ingredients.push("Seasonal vegetables".to_owned());
    ingredients.push("Salt, pepper and herbs to taste".to_owned());

    let minutes = match meal.prep_time {
        0 => DEFAULT_COOK_MINUTES,
        minutes => minutes,
    };

    let instructions = vec![
        format!("Gather and prepare the ingredients for {name}."),
        format!("Cook for about {minutes} minutes, tasting and seasoning as you go."),
        format!(
            "Portion to roughly {} kcal and serve as {}.",
            meal.calories, meal.meal_type
        ),
    ];

    let mut tips = vec![format!(
        "Weigh portions to stay close to {} kcal.",
        meal.calories
    )];
    if !meal.description.trim().is_empty() {
        tips.push(meal.description.trim().to_owned());
    }

    RecipeDetails {
        ingredients,
        instructions,
        tips,
    }
}
