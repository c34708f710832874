//! Energy and macronutrient targets.
//!
//! BMR follows Mifflin, M.D., et al. (1990), "A new predictive equation for
//! resting energy expenditure", *Am J Clin Nutr* 51(2). Inputs are not range
//! checked here: whatever the form accepted is evaluated as is.

use fitdash_model::{
    calorie::{CaloriePlan, Meal},
    profile::{ActivityLevel, Intensity, Sex, UserProfile},
};
use log::debug;

use crate::tables::{
    activity_multiplier, intensity_offset, FAT_G_PER_KG, KCAL_PER_G_CARBS, KCAL_PER_G_FAT,
    KCAL_PER_G_PROTEIN, PROTEIN_G_PER_KG, SAMPLE_MEALS,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Macros {
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
}

/// Basal metabolic rate in kcal/day:
/// `10 * weight + 6.25 * height - 5 * age`, plus 5 for men or minus 161 for women.
pub fn mifflin_st_jeor(sex: Sex, weight_kg: f64, height_cm: f64, age: u32) -> f64 {
    let sex_constant = match sex {
        Sex::Male => 5.0,
        Sex::Female => -161.0,
    };
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age) + sex_constant
}

pub fn tdee(bmr: f64, activity: ActivityLevel) -> f64 {
    bmr * activity_multiplier(activity)
}

pub fn calorie_goal(tdee: f64, intensity: Intensity) -> f64 {
    tdee * (1.0 + intensity_offset(intensity))
}

/// Protein and fat scale with body weight; carbohydrates take up the rest of
/// the calorie goal and go negative when nothing is left.
pub fn macros(weight_kg: f64, calorie_goal: f64) -> Macros {
    let protein_g = weight_kg * PROTEIN_G_PER_KG;
    let fat_g = weight_kg * FAT_G_PER_KG;
    let carbs_g =
        (calorie_goal - (protein_g * KCAL_PER_G_PROTEIN + fat_g * KCAL_PER_G_FAT)) / KCAL_PER_G_CARBS;
    Macros {
        protein_g,
        fat_g,
        carbs_g,
    }
}

pub fn sample_meals() -> Vec<Meal> {
    SAMPLE_MEALS
        .iter()
        .map(|(name, items)| Meal::new(name, items))
        .collect()
}

pub fn calorie_plan(profile: &UserProfile) -> CaloriePlan {
    let bmr = mifflin_st_jeor(
        profile.sex,
        profile.weight_kg,
        profile.height_cm,
        profile.age,
    );
    let tdee = tdee(bmr, profile.activity);
    let calorie_goal = calorie_goal(tdee, profile.intensity);
    let Macros {
        protein_g,
        fat_g,
        carbs_g,
    } = macros(profile.weight_kg, calorie_goal);
    debug!(
        "bmr={:.1} tdee={:.1} goal={:.1} protein={:.1} fat={:.1} carbs={:.1}",
        bmr, tdee, calorie_goal, protein_g, fat_g, carbs_g
    );

    CaloriePlan {
        bmr,
        tdee,
        calorie_goal,
        protein_g,
        fat_g,
        carbs_g,
        meals: sample_meals(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn profile(sex: Sex) -> UserProfile {
        UserProfile {
            sex,
            age: 25,
            weight_kg: 80.0,
            height_cm: 180.0,
            target_weight_kg: 90.0,
            activity: ActivityLevel::Moderate,
            intensity: Intensity::Normal,
        }
    }

    #[test]
    fn male_bmr_adds_five() {
        assert!((mifflin_st_jeor(Sex::Male, 80.0, 180.0, 25) - 1805.0).abs() < EPSILON);
    }

    #[test]
    fn female_bmr_subtracts_161() {
        let male = mifflin_st_jeor(Sex::Male, 60.0, 165.0, 30);
        let female = mifflin_st_jeor(Sex::Female, 60.0, 165.0, 30);
        assert!((female - 1320.25).abs() < EPSILON);
        assert!((male - female - 166.0).abs() < EPSILON);
    }

    #[test]
    fn tdee_uses_activity_multiplier() {
        let test_data = [
            (ActivityLevel::Sedentary, 1200.0),
            (ActivityLevel::Light, 1375.0),
            (ActivityLevel::Moderate, 1550.0),
            (ActivityLevel::High, 1725.0),
            (ActivityLevel::VeryHigh, 1900.0),
        ];

        for (i, (activity, expected)) in test_data.into_iter().enumerate() {
            assert!(
                (tdee(1000.0, activity) - expected).abs() < EPSILON,
                "Test case #{}",
                i
            );
        }
    }

    #[test]
    fn goal_adds_intensity_surplus() {
        assert!((calorie_goal(2000.0, Intensity::Slow) - 2200.0).abs() < EPSILON);
        assert!((calorie_goal(2000.0, Intensity::Normal) - 2300.0).abs() < EPSILON);
        assert!((calorie_goal(2000.0, Intensity::Fast) - 2400.0).abs() < EPSILON);
    }

    #[test]
    fn reference_profile_plan() {
        let plan = calorie_plan(&profile(Sex::Male));

        let expected_tdee = 1805.0 * 1.55;
        let expected_goal = expected_tdee * 1.15;
        assert!((plan.bmr - 1805.0).abs() < EPSILON);
        assert!((plan.tdee - expected_tdee).abs() < EPSILON);
        assert!((plan.calorie_goal - expected_goal).abs() < EPSILON);
        assert!((plan.protein_g - 176.0).abs() < EPSILON);
        assert!((plan.fat_g - 64.0).abs() < EPSILON);
        assert!((plan.carbs_g - (expected_goal - (176.0 * 4.0 + 64.0 * 9.0)) / 4.0).abs() < EPSILON);
    }

    #[test]
    fn carbs_go_negative_for_extreme_inputs() {
        let m = macros(200.0, 1000.0);
        assert!((m.carbs_g - (1000.0 - (440.0 * 4.0 + 160.0 * 9.0)) / 4.0).abs() < EPSILON);
        assert!(m.carbs_g < 0.0);
    }

    #[test]
    fn meals_are_fixed() {
        let plan = calorie_plan(&profile(Sex::Female));
        let names: Vec<&str> = plan.meals.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Breakfast", "Lunch", "Snack", "Dinner"]);
        assert_eq!(plan.meals[3].items, vec!["Sweet potato", "Salmon", "Broccoli"]);
        assert_eq!(plan.meals, sample_meals());
    }
}
