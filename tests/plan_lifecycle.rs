mod common;

use ecowell::core::plans::{self, GenerateRequest};
use ecowell::db::Database;
use ecowell::jobs::{self, GenerateJob};
use ecowell::models::{MealPlan, MealType, PlanStatus};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::TempDir;

fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

// ── resolution ──────────────────────────────────────────────────────────────

#[test]
fn test_resolve_diet_prefers_request_then_profile_then_fallback() {
    let (_dir, db) = common::setup_db();

    assert_eq!(plans::resolve_diet(&db, 1, Some("vegan")).unwrap(), "vegan");
    assert_eq!(plans::resolve_diet(&db, 1, None).unwrap(), "balanced");

    let mut lifestyle = common::green_lifestyle(1);
    lifestyle.diet_type = Some("vegetarian".into());
    db.upsert_lifestyle_profile(&lifestyle).unwrap();

    assert_eq!(plans::resolve_diet(&db, 1, None).unwrap(), "vegetarian");
    assert_eq!(
        plans::resolve_diet(&db, 1, Some("omnivore")).unwrap(),
        "omnivore"
    );
}

#[test]
fn test_resolve_calorie_target_falls_back_to_default() {
    let (_dir, db) = common::setup_db();
    assert_eq!(plans::resolve_calorie_target(&db, 1, None).unwrap(), 2000);
    assert_eq!(
        plans::resolve_calorie_target(&db, 1, Some(1800)).unwrap(),
        1800
    );
}

#[test]
fn test_resolve_calorie_target_computes_from_health_profile() {
    let (_dir, db) = common::setup_db();
    let mut health = common::basic_health(1);
    health.activity_level = Some("sedentary".into());
    db.upsert_health_profile(&health).unwrap();

    // sedentary TDEE 1978.5 -> 1978
    assert_eq!(plans::resolve_calorie_target(&db, 1, None).unwrap(), 1978);
}

// ── synchronous generation ──────────────────────────────────────────────────

#[test]
fn test_generate_sync_stores_completed_plan() {
    let (_dir, db) = common::setup_db();

    let plan = plans::generate_sync(
        &db,
        1,
        GenerateRequest {
            dietary_preference: Some("vegan".into()),
            calorie_target: Some(2200),
            exclude_ingredients: Vec::new(),
        },
        &mut seeded(4),
    )
    .unwrap();

    assert_eq!(plan.status, PlanStatus::Completed);
    assert_eq!(plan.meals.len(), 7);
    assert_eq!(plan.dietary_preference.as_deref(), Some("vegan"));
    assert_eq!(plan.calorie_target, Some(2200));
    assert!(plan.completed_at.is_some());
    assert!(!plan.customized);

    let stored = db.get_plan(1, &plan.id).unwrap().unwrap();
    assert_eq!(stored.status, PlanStatus::Completed);
    assert_eq!(stored.meals.len(), 7);
}

#[test]
fn test_auto_generate_forces_default_target() {
    let (_dir, db) = common::setup_db();
    // A health profile that would compute a different target must not
    // affect the starter plan.
    db.upsert_health_profile(&common::basic_health(1)).unwrap();

    let plan = plans::auto_generate(&db, 1, Some("vegetarian"), &mut seeded(2)).unwrap();
    assert_eq!(plan.calorie_target, Some(2000));
    assert_eq!(plan.dietary_preference.as_deref(), Some("vegetarian"));
}

// ── status machine ──────────────────────────────────────────────────────────

#[test]
fn test_plan_status_transitions() {
    assert!(PlanStatus::Pending.can_transition(PlanStatus::Processing));
    assert!(PlanStatus::Processing.can_transition(PlanStatus::Completed));
    assert!(PlanStatus::Processing.can_transition(PlanStatus::Failed));

    assert!(!PlanStatus::Pending.can_transition(PlanStatus::Completed));
    assert!(!PlanStatus::Pending.can_transition(PlanStatus::Failed));
    assert!(!PlanStatus::Completed.can_transition(PlanStatus::Processing));
    assert!(!PlanStatus::Failed.can_transition(PlanStatus::Processing));
}

#[test]
fn test_db_rejects_illegal_transition() {
    let (_dir, db) = common::setup_db();
    let plan = MealPlan::new(1, None, None);
    db.insert_plan(&plan).unwrap();

    // pending -> completed skips processing.
    assert!(db.transition_plan(&plan.id, PlanStatus::Completed).is_err());
    // pending -> failed is equally illegal; failure is a worker outcome.
    assert!(db.fail_plan(&plan.id, "boom").is_err());

    let stored = db.get_plan(1, &plan.id).unwrap().unwrap();
    assert_eq!(stored.status, PlanStatus::Pending);
}

#[test]
fn test_db_walks_full_lifecycle() {
    let (_dir, db) = common::setup_db();
    let plan = MealPlan::new(1, Some("vegan".into()), Some(2000));
    db.insert_plan(&plan).unwrap();

    db.transition_plan(&plan.id, PlanStatus::Processing).unwrap();
    let meals =
        ecowell::core::planner::generate_week_from(common::date(2026, 3, 10), "vegan", &[], &mut seeded(8));
    db.complete_plan(&plan.id, &meals).unwrap();

    let stored = db.get_plan(1, &plan.id).unwrap().unwrap();
    assert_eq!(stored.status, PlanStatus::Completed);
    assert_eq!(stored.meals, meals);
    assert!(stored.completed_at.is_some());
}

#[test]
fn test_db_failed_plan_keeps_message() {
    let (_dir, db) = common::setup_db();
    let plan = MealPlan::new(1, None, None);
    db.insert_plan(&plan).unwrap();
    db.transition_plan(&plan.id, PlanStatus::Processing).unwrap();
    db.fail_plan(&plan.id, "catalog unavailable").unwrap();

    let stored = db.get_plan(1, &plan.id).unwrap().unwrap();
    assert_eq!(stored.status, PlanStatus::Failed);
    assert_eq!(stored.error_message.as_deref(), Some("catalog unavailable"));
}

// ── background jobs ─────────────────────────────────────────────────────────

#[test]
fn test_dispatched_job_completes_plan() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("test.db");
    let db = Database::open(&db_path).unwrap();

    let plan = MealPlan::new(1, Some("vegan".into()), Some(2000));
    db.insert_plan(&plan).unwrap();

    let handle = jobs::dispatch(GenerateJob {
        db_path: db_path.clone(),
        plan_id: plan.id.clone(),
        user_id: 1,
        dietary_preference: "vegan".into(),
        calorie_target: 2000,
        exclude_ingredients: Vec::new(),
        rng_seed: Some(21),
    });
    assert_eq!(handle.plan_id(), plan.id);
    handle.wait();

    let stored = db.get_plan(1, &plan.id).unwrap().unwrap();
    assert_eq!(stored.status, PlanStatus::Completed);
    assert_eq!(stored.meals.len(), 7);
}

#[test]
fn test_dispatched_job_on_missing_plan_changes_nothing() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("test.db");
    Database::open(&db_path).unwrap();

    let handle = jobs::dispatch(GenerateJob {
        db_path,
        plan_id: "no-such-plan".into(),
        user_id: 1,
        dietary_preference: "vegan".into(),
        calorie_target: 2000,
        exclude_ingredients: Vec::new(),
        rng_seed: Some(1),
    });
    // Must not panic; the failure stays inside the job boundary.
    handle.wait();
}

// ── persistence of edits, listing, deletion ─────────────────────────────────

#[test]
fn test_save_plan_edits_roundtrip() {
    let (_dir, db) = common::setup_db();
    let mut plan = plans::generate_sync(
        &db,
        1,
        GenerateRequest {
            dietary_preference: Some("omnivore".into()),
            ..Default::default()
        },
        &mut seeded(6),
    )
    .unwrap();

    ecowell::core::editing::swap_meal(
        &mut plan,
        2,
        MealType::Dinner,
        common::sample_meal("Replacement", 600, 1.5),
    )
    .unwrap();
    db.save_plan_edits(&plan).unwrap();

    let stored = db.get_plan(1, &plan.id).unwrap().unwrap();
    assert!(stored.customized);
    assert!(stored.edited_at.is_some());
    assert_eq!(stored.meals[2].dinner.name, "Replacement");
    assert_eq!(stored.original_meals.as_ref().unwrap().len(), 7);
    assert_ne!(
        stored.original_meals.as_ref().unwrap()[2].dinner.name,
        "Replacement"
    );
}

#[test]
fn test_latest_plan_with_status_picks_newest() {
    let (_dir, db) = common::setup_db();
    let first = plans::generate_sync(&db, 1, GenerateRequest::default(), &mut seeded(1)).unwrap();
    // created_at must strictly increase for the ordering to be observable.
    std::thread::sleep(std::time::Duration::from_millis(5));
    let second = plans::generate_sync(&db, 1, GenerateRequest::default(), &mut seeded(2)).unwrap();

    let latest = db
        .latest_plan_with_status(1, PlanStatus::Completed)
        .unwrap()
        .unwrap();
    assert_eq!(latest.id, second.id);
    assert_ne!(latest.id, first.id);
}

#[test]
fn test_list_plans_respects_limit_and_owner() {
    let (_dir, db) = common::setup_db();
    for seed in 0..3 {
        plans::generate_sync(&db, 1, GenerateRequest::default(), &mut seeded(seed)).unwrap();
    }
    plans::generate_sync(&db, 2, GenerateRequest::default(), &mut seeded(9)).unwrap();

    assert_eq!(db.list_plans(1, 10).unwrap().len(), 3);
    assert_eq!(db.list_plans(1, 2).unwrap().len(), 2);
    assert_eq!(db.list_plans(2, 10).unwrap().len(), 1);
}

#[test]
fn test_delete_plan_detaches_consumptions() {
    let (_dir, db) = common::setup_db();
    let plan = plans::generate_sync(&db, 1, GenerateRequest::default(), &mut seeded(3)).unwrap();

    let date = common::date(2026, 3, 10);
    ecowell::core::consumption::mark_consumed(&db, 1, date, MealType::Lunch, Some(&plan.id))
        .unwrap();

    plans::delete_plan(&db, 1, &plan.id).unwrap();

    assert!(db.get_plan(1, &plan.id).unwrap().is_none());
    let record = db.get_consumption(1, date, MealType::Lunch).unwrap().unwrap();
    assert!(record.consumed);
    assert!(record.meal_plan_id.is_none());
}

#[test]
fn test_get_plan_for_wrong_user_is_not_found() {
    let (_dir, db) = common::setup_db();
    let plan = plans::generate_sync(&db, 1, GenerateRequest::default(), &mut seeded(3)).unwrap();

    let err = plans::get_plan(&db, 2, &plan.id).unwrap_err();
    let core = err
        .downcast_ref::<ecowell::core::error::CoreError>()
        .unwrap();
    assert_eq!(core.code(), "not_found");
}
