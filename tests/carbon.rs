mod common;

use ecowell::core::carbon;
use ecowell::models::LifestyleProfile;

#[test]
fn test_carbon_saved_without_profile_is_zero() {
    // Unlike the score baseline, an absent profile saves nothing.
    assert_eq!(carbon::carbon_saved(None), 0.0);
}

#[test]
fn test_carbon_saved_empty_profile_is_zero() {
    let p = LifestyleProfile::new(1);
    assert_eq!(carbon::carbon_saved(Some(&p)), 0.0);
}

#[test]
fn test_carbon_saved_all_green() {
    // 2000 + 1500 + 500 + 2500 + 200 + 150 = 6850
    let p = common::green_lifestyle(1);
    assert_eq!(carbon::carbon_saved(Some(&p)), 6850.0);
}

#[test]
fn test_carbon_saved_never_negative() {
    let mut p = LifestyleProfile::new(1);
    p.transportation_mode = Some("car".into());
    p.diet_type = Some("omnivore".into());
    p.recycling_habits = Some("never".into());
    p.energy_source = Some("non_renewable".into());
    p.paper_preference = Some("paper".into());
    assert_eq!(carbon::carbon_saved(Some(&p)), 0.0);
}

#[test]
fn test_carbon_saved_partial_profile() {
    let mut p = LifestyleProfile::new(1);
    p.transportation_mode = Some("public_transport".into());
    p.diet_type = Some("vegetarian".into());
    assert_eq!(carbon::carbon_saved(Some(&p)), 2200.0);
}
