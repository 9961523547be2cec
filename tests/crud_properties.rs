//! CRUD Property Tests
//!
//! Behavior of the student service as seen by either transport:
//! - Create assigns `count + 1` ids and the record is readable back
//! - List preserves creation order
//! - Falsy update values leave fields unchanged
//! - Update/delete on unknown ids fail with NotFound
//! - Id reuse after deletion under the compatibility scheme

use studentdb::store::StudentFields;
use studentdb::students::{IdStrategy, StudentError, StudentService};

// =============================================================================
// Helper Functions
// =============================================================================

fn fields(n: usize) -> StudentFields {
    StudentFields::required(
        format!("First{}", n),
        format!("Last{}", n),
        "2000-01-01",
        format!("{} Main Street", n),
        "Y",
    )
}

fn scenario_fields() -> StudentFields {
    StudentFields::required("A", "B", "2000-01-01", "X", "Y")
}

// =============================================================================
// Create / Get / List
// =============================================================================

/// Every create returns id = count before + 1, readable with get.
#[test]
fn test_create_id_is_count_plus_one() {
    let service = StudentService::new();

    for n in 0..20 {
        let before = service.len();
        let created = service.create(fields(n));

        assert_eq!(created.id, (before + 1).to_string());
        assert_eq!(service.get(&created.id), Some(created));
    }
}

/// N creates list back as exactly N records in creation order.
#[test]
fn test_list_returns_creation_order() {
    let service = StudentService::new();
    assert!(service.list().is_empty());

    for n in 0..5 {
        service.create(fields(n));
    }

    let listed = service.list();
    assert_eq!(listed.len(), 5);
    for (n, student) in listed.iter().enumerate() {
        assert_eq!(student.first_name, Some(format!("First{}", n)));
    }
}

// =============================================================================
// Update
// =============================================================================

/// Empty string keeps the stored value, non-empty replaces it.
#[test]
fn test_update_falsy_and_truthy_values() {
    let service = StudentService::new();
    service.create(scenario_fields().with_email("a@example.com"));

    let kept = service
        .update(
            "1",
            StudentFields {
                first_name: Some(String::new()),
                email: Some(String::new()),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(kept.first_name.as_deref(), Some("A"));
    assert_eq!(kept.email.as_deref(), Some("a@example.com"));

    let replaced = service
        .update(
            "1",
            StudentFields {
                first_name: Some("Awa".into()),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(replaced.first_name.as_deref(), Some("Awa"));
    assert_eq!(replaced.last_name.as_deref(), Some("B"));
}

#[test]
fn test_update_unknown_id_fails() {
    let service = StudentService::new();
    service.create(scenario_fields());

    let result = service.update("2", scenario_fields());
    assert_eq!(result, Err(StudentError::not_found("2")));
    assert_eq!(service.len(), 1);
}

// =============================================================================
// Delete
// =============================================================================

/// Delete removes exactly one record and hands it back.
#[test]
fn test_delete_removes_exactly_that_record() {
    let service = StudentService::new();
    for n in 0..3 {
        service.create(fields(n));
    }

    let removed = service.delete("2").unwrap();
    assert_eq!(removed.id, "2");
    assert_eq!(removed.first_name.as_deref(), Some("First1"));
    assert!(service.get("2").is_none());

    let ids: Vec<_> = service.list().into_iter().map(|s| s.id).collect();
    assert_eq!(ids, vec!["1", "3"]);

    assert!(matches!(service.delete("2"), Err(StudentError::NotFound { .. })));
}

// =============================================================================
// Scenarios
// =============================================================================

/// Create, blank update, delete, then read back, starting from an empty store.
#[test]
fn test_concrete_scenario() {
    let service = StudentService::new();

    let created = service.create(scenario_fields());
    assert_eq!(created.id, "1");
    assert_eq!(created.first_name.as_deref(), Some("A"));
    assert_eq!(created.email, None);
    assert_eq!(created.phone, None);

    let updated = service
        .update(
            "1",
            StudentFields {
                first_name: Some(String::new()),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(updated.first_name.as_deref(), Some("A"));

    let deleted = service.delete("1").unwrap();
    assert_eq!(deleted.id, "1");
    assert!(service.get("1").is_none());
}

/// Length-based ids collide after a deletion; get returns the older record.
#[test]
fn test_length_ids_collide_after_delete() {
    let service = StudentService::with_id_strategy(IdStrategy::Length);

    service.create(fields(1));
    let second = service.create(fields(2));
    service.delete("1").unwrap();
    let third = service.create(fields(3));

    assert_eq!(third.id, "2");
    assert_eq!(third.id, second.id);
    assert_eq!(service.get("2"), Some(second));
    assert_eq!(service.len(), 2);
}

#[test]
fn test_counter_ids_never_collide() {
    let service = StudentService::with_id_strategy(IdStrategy::Counter);

    service.create(fields(1));
    service.create(fields(2));
    service.delete("1").unwrap();
    let third = service.create(fields(3));

    assert_eq!(third.id, "3");
    let ids: Vec<_> = service.list().into_iter().map(|s| s.id).collect();
    assert_eq!(ids, vec!["2", "3"]);
}

#[test]
fn test_uuid_ids_never_collide() {
    let service = StudentService::with_id_strategy(IdStrategy::Uuid);

    let first = service.create(fields(1));
    service.create(fields(2));
    service.delete(&first.id).unwrap();
    service.create(fields(3));

    let mut ids: Vec<_> = service.list().into_iter().map(|s| s.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 2);
}
