// ABOUTME: Prompt templates for the nutrition guidance endpoint
// ABOUTME: Maps the request type discriminator to a template and fills it from nutrition and goal data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Guidance Prompts
//!
//! A guidance request carries free-form `nutrition` and `userGoals` objects
//! plus a `type` naming one of six templates. [`PromptKind`] is the parsed
//! discriminator; [`PromptContext`] holds exactly the fields the chosen
//! template reads, with human-readable defaults already substituted, so
//! rendering never fails on missing sub-fields.
//!
//! Three templates (`meal_estimate`, `food_analysis`, `macro_recommendation`)
//! ask the model to answer in JSON. The text that comes back is not checked.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::errors::AppError;

const UNKNOWN: &str = "Unknown";
const GENERAL_HEALTH: &str = "General health";
const NOT_SPECIFIED: &str = "Not specified";

/// Template selector parsed from the request `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptKind {
    /// Personalized advice about one food
    #[default]
    Guidance,
    /// Recipe suggestion hitting per-serving targets
    Recipe,
    /// Short analysis of a meal against daily targets
    Analysis,
    /// Nutrient estimate from a free-text meal description (JSON answer)
    MealEstimate,
    /// Detailed food scoring against the user's day so far (JSON answer)
    FoodAnalysis,
    /// Daily macro targets from a body profile (JSON answer)
    MacroRecommendation,
}

impl PromptKind {
    /// Every recognized kind
    pub const ALL: [Self; 6] = [
        Self::Guidance,
        Self::Recipe,
        Self::Analysis,
        Self::MealEstimate,
        Self::FoodAnalysis,
        Self::MacroRecommendation,
    ];

    /// Wire name of this kind
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Guidance => "guidance",
            Self::Recipe => "recipe",
            Self::Analysis => "analysis",
            Self::MealEstimate => "meal_estimate",
            Self::FoodAnalysis => "food_analysis",
            Self::MacroRecommendation => "macro_recommendation",
        }
    }

    /// Whether the template instructs the model to answer in JSON
    #[must_use]
    pub const fn expects_json(&self) -> bool {
        matches!(
            self,
            Self::MealEstimate | Self::FoodAnalysis | Self::MacroRecommendation
        )
    }
}

impl fmt::Display for PromptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PromptKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| AppError::invalid_input(format!("Invalid prompt type: {s}")))
    }
}

/// Read-only view over a caller-supplied JSON object
///
/// Numbers and strings are rendered as given; anything missing, null or
/// blank falls back to the supplied default.
#[derive(Clone, Copy)]
struct Fields<'a>(&'a Value);

impl Fields<'_> {
    fn text(self, key: &str, default: &str) -> String {
        match self.0.get(key) {
            Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => default.to_owned(),
        }
    }

    fn number(self, key: &str) -> String {
        self.text(key, "0")
    }

    fn list(self, key: &str, default: &str) -> String {
        match self.0.get(key) {
            Some(Value::Array(items)) => {
                let joined = items
                    .iter()
                    .filter_map(|item| match item {
                        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
                        Value::Number(n) => Some(n.to_string()),
                        _ => None,
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                if joined.is_empty() {
                    default.to_owned()
                } else {
                    joined
                }
            }
            _ => self.text(key, default),
        }
    }
}

/// Fields consumed by each template, defaults already applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptContext {
    /// `guidance` template inputs
    Guidance {
        /// Food name
        name: String,
        /// Calories per serving
        calories: String,
        /// Protein grams
        protein: String,
        /// Carbohydrate grams
        carbohydrates: String,
        /// Fat grams
        fat: String,
        /// User age
        age: String,
        /// User goal
        goal: String,
        /// Activity level
        activity_level: String,
        /// Daily calorie target
        daily_calories: String,
        /// Daily protein target
        daily_protein: String,
    },
    /// `recipe` template inputs
    Recipe {
        /// Calories per serving target
        calories: String,
        /// Protein per serving target
        protein: String,
        /// Carbohydrates per serving target
        carbs: String,
        /// Fat per serving target
        fat: String,
    },
    /// `analysis` template inputs
    Analysis {
        /// Meal calories
        calories: String,
        /// Meal protein grams
        protein: String,
        /// Meal carbohydrate grams
        carbohydrates: String,
        /// Meal fat grams
        fat: String,
        /// Daily calorie target
        daily_calories: String,
        /// Daily protein target
        daily_protein: String,
    },
    /// `meal_estimate` template inputs
    MealEstimate {
        /// Free-text meal description
        description: String,
    },
    /// `food_analysis` template inputs
    FoodAnalysis {
        /// Food name
        name: String,
        /// Brand
        brand: String,
        /// Serving size label
        serving_size: String,
        /// Calories per serving
        calories: String,
        /// Protein grams
        protein: String,
        /// Carbohydrate grams
        carbohydrates: String,
        /// Fat grams
        fat: String,
        /// Sugar grams
        sugar: String,
        /// Fiber grams
        fiber: String,
        /// User age
        age: String,
        /// User goal
        goal: String,
        /// Daily calorie target
        daily_calories: String,
        /// Daily protein target
        daily_protein: String,
        /// Calories eaten so far today
        today_calories: String,
        /// Protein eaten so far today
        today_protein: String,
    },
    /// `macro_recommendation` template inputs
    MacroRecommendation {
        /// Age in years
        age: String,
        /// Gender
        gender: String,
        /// Weight in pounds
        weight_lbs: String,
        /// Height, feet part
        height_feet: String,
        /// Height, inches part
        height_inches: String,
        /// Activity level
        activity_level: String,
        /// Comma-joined goals
        goals: String,
        /// Diet preference
        diet_preference: String,
        /// Preferred exercises
        preferred_exercises: String,
    },
}

impl PromptContext {
    /// Extract the fields `kind` needs from the request objects
    #[must_use]
    pub fn new(kind: PromptKind, nutrition: &Value, user_goals: &Value) -> Self {
        let n = Fields(nutrition);
        let g = Fields(user_goals);
        match kind {
            PromptKind::Guidance => Self::Guidance {
                name: n.text("name", UNKNOWN),
                calories: n.number("calories"),
                protein: n.number("protein"),
                carbohydrates: n.number("carbohydrates"),
                fat: n.number("fat"),
                age: g.text("age", UNKNOWN),
                goal: g.text("goal", GENERAL_HEALTH),
                activity_level: g.text("activityLevel", "Moderate"),
                daily_calories: g.text("dailyCalories", "2000"),
                daily_protein: g.text("dailyProtein", "50"),
            },
            PromptKind::Recipe => Self::Recipe {
                calories: g.number("caloriesPerServing"),
                protein: g.number("proteinPerServing"),
                carbs: g.number("carbsPerServing"),
                fat: g.number("fatPerServing"),
            },
            PromptKind::Analysis => Self::Analysis {
                calories: n.number("calories"),
                protein: n.number("protein"),
                carbohydrates: n.number("carbohydrates"),
                fat: n.number("fat"),
                daily_calories: g.text("dailyCalories", "2000"),
                daily_protein: g.text("dailyProtein", "50"),
            },
            PromptKind::MealEstimate => Self::MealEstimate {
                description: n.text("description", UNKNOWN),
            },
            PromptKind::FoodAnalysis => Self::FoodAnalysis {
                name: n.text("name", UNKNOWN),
                brand: n.text("brand", "Generic"),
                serving_size: n.text("servingSize", "1 serving"),
                calories: n.number("calories"),
                protein: n.number("protein"),
                carbohydrates: n.number("carbohydrates"),
                fat: n.number("fat"),
                sugar: n.number("sugar"),
                fiber: n.number("fiber"),
                age: g.text("age", UNKNOWN),
                goal: g.text("goal", GENERAL_HEALTH),
                daily_calories: g.text("dailyCalories", "2000"),
                daily_protein: g.text("dailyProtein", "50"),
                today_calories: g.number("todayCalories"),
                today_protein: g.number("todayProtein"),
            },
            PromptKind::MacroRecommendation => Self::MacroRecommendation {
                age: n.text("age", UNKNOWN),
                gender: n.text("gender", NOT_SPECIFIED),
                weight_lbs: n.text("weight_lbs", UNKNOWN),
                height_feet: n.number("height_feet"),
                height_inches: n.number("height_inches"),
                activity_level: n.text("activity_level", "Moderate"),
                goals: g.list("goals", GENERAL_HEALTH),
                diet_preference: g.text("diet_preference", "No preference"),
                preferred_exercises: g.list("preferred_exercises", NOT_SPECIFIED),
            },
        }
    }

    /// Render the final prompt text
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Guidance {
                name,
                calories,
                protein,
                carbohydrates,
                fat,
                age,
                goal,
                activity_level,
                daily_calories,
                daily_protein,
            } => format!(
                "You are a friendly, knowledgeable nutrition coach.\n\n\
                 Food: {name}\n\
                 Calories: {calories} kcal\n\
                 Protein: {protein}g\n\
                 Carbohydrates: {carbohydrates}g\n\
                 Fat: {fat}g\n\n\
                 User profile:\n\
                 - Age: {age}\n\
                 - Goal: {goal}\n\
                 - Activity level: {activity_level}\n\
                 - Daily calorie target: {daily_calories} kcal\n\
                 - Daily protein target: {daily_protein}g\n\n\
                 In 3-4 sentences, explain how this food fits the user's goal and \
                 suggest one practical tip for including it in their day."
            ),
            Self::Recipe {
                calories,
                protein,
                carbs,
                fat,
            } => format!(
                "Suggest a simple, healthy recipe that provides approximately:\n\
                 - {calories} calories per serving\n\
                 - {protein}g protein per serving\n\
                 - {carbs}g carbohydrates per serving\n\
                 - {fat}g fat per serving\n\n\
                 Include a recipe name, an ingredient list with quantities, short \
                 numbered steps, and the number of servings."
            ),
            Self::Analysis {
                calories,
                protein,
                carbohydrates,
                fat,
                daily_calories,
                daily_protein,
            } => format!(
                "Analyze this meal against the user's daily targets.\n\n\
                 Meal: {calories} kcal, {protein}g protein, {carbohydrates}g carbohydrates, {fat}g fat\n\
                 Daily targets: {daily_calories} kcal, {daily_protein}g protein\n\n\
                 Give a brief assessment of the macro balance and what share of the \
                 daily targets this meal covers, then one suggestion to improve it."
            ),
            Self::MealEstimate { description } => format!(
                "Estimate the nutrition content of this meal: \"{description}\"\n\n\
                 Respond ONLY with a JSON object in exactly this format:\n\
                 {{\"name\": \"<short meal name>\", \"calories\": <number>, \
                 \"protein\": <grams>, \"carbohydrates\": <grams>, \"fat\": <grams>, \
                 \"servingSize\": \"<estimated portion>\", \"confidence\": \"low|medium|high\"}}"
            ),
            Self::FoodAnalysis {
                name,
                brand,
                serving_size,
                calories,
                protein,
                carbohydrates,
                fat,
                sugar,
                fiber,
                age,
                goal,
                daily_calories,
                daily_protein,
                today_calories,
                today_protein,
            } => format!(
                "Analyze this food for the user.\n\n\
                 Food: {name} ({brand})\n\
                 Serving size: {serving_size}\n\
                 Calories: {calories} kcal\n\
                 Protein: {protein}g\n\
                 Carbohydrates: {carbohydrates}g\n\
                 Fat: {fat}g\n\
                 Sugar: {sugar}g\n\
                 Fiber: {fiber}g\n\n\
                 User profile:\n\
                 - Age: {age}\n\
                 - Goal: {goal}\n\
                 - Daily targets: {daily_calories} kcal, {daily_protein}g protein\n\
                 - Eaten today: {today_calories} kcal, {today_protein}g protein\n\n\
                 Respond ONLY with a JSON object in exactly this format:\n\
                 {{\"score\": <1-10>, \"verdict\": \"<one sentence>\", \
                 \"pros\": [\"...\"], \"cons\": [\"...\"], \
                 \"fitsGoal\": <true|false>, \"suggestion\": \"<one sentence>\"}}"
            ),
            Self::MacroRecommendation {
                age,
                gender,
                weight_lbs,
                height_feet,
                height_inches,
                activity_level,
                goals,
                diet_preference,
                preferred_exercises,
            } => format!(
                "Recommend daily calorie and macronutrient targets for this person.\n\n\
                 - Age: {age}\n\
                 - Gender: {gender}\n\
                 - Weight: {weight_lbs} lbs\n\
                 - Height: {height_feet} ft {height_inches} in\n\
                 - Activity level: {activity_level}\n\
                 - Goals: {goals}\n\
                 - Diet preference: {diet_preference}\n\
                 - Preferred exercises: {preferred_exercises}\n\n\
                 Respond ONLY with a JSON object in exactly this format:\n\
                 {{\"calories\": <number>, \"protein\": <grams>, \"carbohydrates\": <grams>, \
                 \"fat\": <grams>, \"explanation\": \"<2-3 sentences>\"}}"
            ),
        }
    }
}

/// Build the prompt for `kind` from the request objects
#[must_use]
pub fn build_prompt(kind: PromptKind, nutrition: &Value, user_goals: &Value) -> String {
    PromptContext::new(kind, nutrition, user_goals).render()
}
