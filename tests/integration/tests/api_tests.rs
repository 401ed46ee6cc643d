//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.login().await.unwrap();
    assert!(!token.is_empty());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let body = serde_json::json!({
        "email": "staff@example.com",
        "password": "wrong-password",
    });

    let response = server.post("/api/v1/auth/login", &body).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_refresh_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let body = serde_json::json!({
        "email": integration_tests::STAFF_EMAIL,
        "password": integration_tests::STAFF_PASSWORD,
    });
    let response = server.post("/api/v1/auth/login", &body).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let refresh = serde_json::json!({ "refresh_token": auth.refresh_token });
    let response = server.post("/api/v1/auth/refresh", &refresh).await.unwrap();
    let refreshed: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!refreshed.access_token.is_empty());
}

#[tokio::test]
async fn test_protected_route_requires_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/residents").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Resident Tests
// ============================================================================

#[tokio::test]
async fn test_resident_crud() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.login().await.unwrap();

    // Create
    let request = CreateResidentRequest::unique();
    let response = server
        .post_auth("/api/v1/residents", &token, &request)
        .await
        .unwrap();
    let created: ResidentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.name, request.name);
    assert_eq!(created.status, "active");

    // Read
    let response = server
        .get_auth(&format!("/api/v1/residents/{}", created.id), &token)
        .await
        .unwrap();
    let fetched: ResidentWithSlotsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert!(fetched.slots.is_empty());

    // Update
    let patch = serde_json::json!({ "status": "inactive" });
    let response = server
        .patch_auth(&format!("/api/v1/residents/{}", created.id), &token, &patch)
        .await
        .unwrap();
    let updated: ResidentResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.status, "inactive");

    // Delete
    let response = server
        .delete_auth(&format!("/api/v1/residents/{}", created.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Gone
    let response = server
        .get_auth(&format!("/api/v1/residents/{}", created.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_resident_validation_error() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.login().await.unwrap();

    let request = serde_json::json!({
        "name": "",
        "room_number": "101",
        "contact_info": "090-0000-0000",
    });
    let response = server
        .post_auth("/api/v1/residents", &token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_resident_deletion_guard() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.login().await.unwrap();

    // Resident and a slot they hold
    let resident: ResidentResponse = assert_json(
        server
            .post_auth("/api/v1/residents", &token, &CreateResidentRequest::unique())
            .await
            .unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();
    let slot: SlotResponse = assert_json(
        server
            .post_auth("/api/v1/slots", &token, &CreateSlotRequest::unique())
            .await
            .unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();

    let assign = AssignExistingRequest::unique(resident.id);
    let response = server
        .post_auth(&format!("/api/v1/slots/{}/assign", slot.id), &token, &assign)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Deletion is rejected while the slot is held
    let response = server
        .delete_auth(&format!("/api/v1/residents/{}", resident.id), &token)
        .await
        .unwrap();
    let status = response.status();
    let body: ErrorBody = response.json().await.unwrap();
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body.error.code, "RESIDENT_HOLDS_SLOTS");

    // After release the deletion goes through
    let response = server
        .post_auth_empty(&format!("/api/v1/slots/{}/release", slot.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/v1/residents/{}", resident.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

// ============================================================================
// Slot and Assignment Tests
// ============================================================================

#[tokio::test]
async fn test_slot_assignment_with_new_resident() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.login().await.unwrap();

    let slot: SlotResponse = assert_json(
        server
            .post_auth("/api/v1/slots", &token, &CreateSlotRequest::unique())
            .await
            .unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();
    assert_eq!(slot.status, "available");

    // Assign, registering the resident in the same call
    let assign = AssignNewRequest::unique();
    let response = server
        .post_auth(&format!("/api/v1/slots/{}/assign", slot.id), &token, &assign)
        .await
        .unwrap();
    let assignment: AssignmentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(assignment.slot.status, "occupied");
    assert_eq!(assignment.slot.resident_id, Some(assignment.resident.id));
    assert_eq!(assignment.sticker.sticker_number, assign.sticker_number);

    // A second assignment of the same slot is a conflict
    let response = server
        .post_auth(
            &format!("/api/v1/slots/{}/assign", slot.id),
            &token,
            &AssignNewRequest::unique(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body: ErrorBody = response.json().await.unwrap();
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body.error.code, "SLOT_NOT_AVAILABLE");

    // Sticker history survives the release
    let response = server
        .post_auth_empty(&format!("/api/v1/slots/{}/release", slot.id), &token)
        .await
        .unwrap();
    let released: SlotResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(released.status, "available");
    assert_eq!(released.resident_id, None);

    let response = server
        .get_auth(&format!("/api/v1/slots/{}/stickers", slot.id), &token)
        .await
        .unwrap();
    let stickers: Vec<StickerResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stickers.len(), 1);
}

#[tokio::test]
async fn test_concurrent_assignment_single_winner() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.login().await.unwrap();

    let slot: SlotResponse = assert_json(
        server
            .post_auth("/api/v1/slots", &token, &CreateSlotRequest::unique())
            .await
            .unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();

    let path = format!("/api/v1/slots/{}/assign", slot.id);
    let req_a = AssignNewRequest::unique();
    let req_b = AssignNewRequest::unique();
    let (first, second) = tokio::join!(
        server.post_auth(&path, &token, &req_a),
        server.post_auth(&path, &token, &req_b),
    );

    let statuses = [first.unwrap().status(), second.unwrap().status()];
    assert!(statuses.contains(&StatusCode::CREATED), "statuses: {statuses:?}");
    assert!(statuses.contains(&StatusCode::CONFLICT), "statuses: {statuses:?}");
}

#[tokio::test]
async fn test_release_idempotent_and_maintenance_rules() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.login().await.unwrap();

    let slot: SlotResponse = assert_json(
        server
            .post_auth("/api/v1/slots", &token, &CreateSlotRequest::unique())
            .await
            .unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();

    // Releasing an already-available slot is a no-op success
    let response = server
        .post_auth_empty(&format!("/api/v1/slots/{}/release", slot.id), &token)
        .await
        .unwrap();
    let released: SlotResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(released.status, "available");

    // Toggle to maintenance
    let patch = serde_json::json!({ "status": "maintenance" });
    let response = server
        .patch_auth(&format!("/api/v1/slots/{}", slot.id), &token, &patch)
        .await
        .unwrap();
    let updated: SlotResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.status, "maintenance");

    // Maintenance slots cannot be assigned or released
    let response = server
        .post_auth(
            &format!("/api/v1/slots/{}/assign", slot.id),
            &token,
            &AssignNewRequest::unique(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    let response = server
        .post_auth_empty(&format!("/api/v1/slots/{}/release", slot.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    // And back to available
    let patch = serde_json::json!({ "status": "available" });
    let response = server
        .patch_auth(&format!("/api/v1/slots/{}", slot.id), &token, &patch)
        .await
        .unwrap();
    let updated: SlotResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.status, "available");
}

#[tokio::test]
async fn test_occupied_slot_rejects_status_toggle_and_delete() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.login().await.unwrap();

    let slot: SlotResponse = assert_json(
        server
            .post_auth("/api/v1/slots", &token, &CreateSlotRequest::unique())
            .await
            .unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();
    let response = server
        .post_auth(
            &format!("/api/v1/slots/{}/assign", slot.id),
            &token,
            &AssignNewRequest::unique(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Maintenance requires a release first
    let patch = serde_json::json!({ "status": "maintenance" });
    let response = server
        .patch_auth(&format!("/api/v1/slots/{}", slot.id), &token, &patch)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    // Occupancy is never set directly
    let patch = serde_json::json!({ "status": "occupied" });
    let response = server
        .patch_auth(&format!("/api/v1/slots/{}", slot.id), &token, &patch)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // Deletion of a held slot is rejected
    let response = server
        .delete_auth(&format!("/api/v1/slots/{}", slot.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_duplicate_slot_code_conflict() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.login().await.unwrap();

    let request = CreateSlotRequest::unique();
    let response = server.post_auth("/api/v1/slots", &token, &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.post_auth("/api/v1/slots", &token, &request).await.unwrap();
    let status = response.status();
    let body: ErrorBody = response.json().await.unwrap();
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body.error.code, "SLOT_CODE_EXISTS");
}

// ============================================================================
// Payment Tests
// ============================================================================

/// Create a resident holding one slot, returning the resident
async fn setup_resident_with_slot(server: &TestServer, token: &str) -> ResidentResponse {
    let slot: SlotResponse = assert_json(
        server
            .post_auth("/api/v1/slots", token, &CreateSlotRequest::unique())
            .await
            .unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/slots/{}/assign", slot.id),
            token,
            &AssignNewRequest::unique(),
        )
        .await
        .unwrap();
    let assignment: AssignmentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assignment.resident
}

#[tokio::test]
async fn test_generate_payments_is_deduplicated() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.login().await.unwrap();

    let resident = setup_resident_with_slot(&server, &token).await;
    let month = unique_month();

    // First generation covers our resident
    let request = GeneratePaymentsRequest {
        month: month.clone(),
        amount: 2000,
    };
    let response = server
        .post_auth("/api/v1/payments/generate", &token, &request)
        .await
        .unwrap();
    let generated: GeneratePaymentsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(generated.created_count >= 1);

    // Re-running must not duplicate the row
    let response = server
        .post_auth("/api/v1/payments/generate", &token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_auth(&format!("/api/v1/payments?month={month}"), &token)
        .await
        .unwrap();
    let payments: Vec<PaymentWithResidentResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    let ours: Vec<_> = payments
        .iter()
        .filter(|p| p.resident_id == resident.id)
        .collect();
    assert_eq!(ours.len(), 1);
    assert_eq!(ours[0].status, "unpaid");
    assert_eq!(ours[0].amount, 2000);
}

#[tokio::test]
async fn test_payment_paid_toggle_is_idempotent() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.login().await.unwrap();

    let resident = setup_resident_with_slot(&server, &token).await;

    let request = serde_json::json!({
        "resident_id": resident.id,
        "month": unique_month(),
        "amount": 1500,
    });
    let payment: PaymentResponse = assert_json(
        server
            .post_auth("/api/v1/payments", &token, &request)
            .await
            .unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();
    assert_eq!(payment.status, "unpaid");
    assert!(payment.paid_at.is_none());

    // Mark paid
    let response = server
        .post_auth_empty(&format!("/api/v1/payments/{}/paid", payment.id), &token)
        .await
        .unwrap();
    let paid: PaymentResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(paid.status, "paid");
    let first_paid_at = paid.paid_at.clone().expect("paid_at set");

    // Marking paid again keeps the original collection time
    let response = server
        .post_auth_empty(&format!("/api/v1/payments/{}/paid", payment.id), &token)
        .await
        .unwrap();
    let paid_again: PaymentResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(paid_again.paid_at.as_deref(), Some(first_paid_at.as_str()));

    // Reverting clears it
    let response = server
        .post_auth_empty(&format!("/api/v1/payments/{}/unpaid", payment.id), &token)
        .await
        .unwrap();
    let unpaid: PaymentResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(unpaid.status, "unpaid");
    assert!(unpaid.paid_at.is_none());
}

#[tokio::test]
async fn test_payment_for_unknown_resident_not_found() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.login().await.unwrap();

    let request = serde_json::json!({
        "resident_id": 999_999_999,
        "month": unique_month(),
        "amount": 1000,
    });
    let response = server
        .post_auth("/api/v1/payments", &token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_duplicate_payment_month_conflict() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.login().await.unwrap();

    let resident = setup_resident_with_slot(&server, &token).await;

    let request = serde_json::json!({
        "resident_id": resident.id,
        "month": unique_month(),
        "amount": 2000,
    });
    let response = server
        .post_auth("/api/v1/payments", &token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // The (resident, month) pair is unique; a second row is rejected
    let response = server
        .post_auth("/api/v1/payments", &token, &request)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body: ErrorBody = response.json().await.unwrap();
    assert_eq!(body.error.code, "PAYMENT_EXISTS");
}

#[tokio::test]
async fn test_payment_csv_export() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.login().await.unwrap();

    let resident = setup_resident_with_slot(&server, &token).await;
    let month = unique_month();

    let request = serde_json::json!({
        "resident_id": resident.id,
        "month": month,
        "amount": 2000,
    });
    let response = server
        .post_auth("/api/v1/payments", &token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth(&format!("/api/v1/payments/export?month={month}"), &token)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/csv"), "got {content_type}");

    let body = response.text().await.unwrap();
    let mut lines = body.lines();
    assert_eq!(lines.next(), Some("部屋番号,氏名,年月,金額,状態,入金日"));
    let row = lines.next().expect("one data row");
    assert!(row.contains(&resident.room_number));
    assert!(row.contains("2000円"));
    assert!(row.contains("未払い"));
    assert!(row.ends_with(",-"));
}

// ============================================================================
// Violation Tests
// ============================================================================

#[tokio::test]
async fn test_violation_crud() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.login().await.unwrap();

    let request = CreateViolationRequest::unique();
    let created: ViolationResponse = assert_json(
        server
            .post_auth("/api/v1/violations", &token, &request)
            .await
            .unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();
    assert_eq!(created.location, request.location);

    let patch = serde_json::json!({ "memo": "警告票を貼付" });
    let response = server
        .patch_auth(&format!("/api/v1/violations/{}", created.id), &token, &patch)
        .await
        .unwrap();
    let updated: ViolationResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.memo.as_deref(), Some("警告票を貼付"));

    let response = server
        .delete_auth(&format!("/api/v1/violations/{}", created.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(&format!("/api/v1/violations/{}", created.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_violation_photo_upload_and_serving() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.login().await.unwrap();

    let form = reqwest::multipart::Form::new().part(
        "photo",
        reqwest::multipart::Part::bytes(vec![0x89, 0x50, 0x4E, 0x47])
            .file_name("evidence.png"),
    );
    let response = server
        .client
        .post(format!("{}/api/v1/violations/photo", server.base_url()))
        .header("Authorization", format!("Bearer {token}"))
        .multipart(form)
        .send()
        .await
        .unwrap();
    let uploaded: PhotoUploadResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(uploaded.photo_url.starts_with("/uploads/"));
    assert!(uploaded.photo_url.ends_with(".png"));

    // The stored file is served back on its public URL
    let response = server
        .get(&uploaded.photo_url)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.bytes().await.unwrap();
    assert_eq!(&bytes[..], &[0x89, 0x50, 0x4E, 0x47]);
}

#[tokio::test]
async fn test_violation_photo_rejects_unknown_extension() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.login().await.unwrap();

    let form = reqwest::multipart::Form::new().part(
        "photo",
        reqwest::multipart::Part::bytes(vec![1, 2, 3]).file_name("malware.exe"),
    );
    let response = server
        .client
        .post(format!("{}/api/v1/violations/photo", server.base_url()))
        .header("Authorization", format!("Bearer {token}"))
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Statistics Tests
// ============================================================================

#[tokio::test]
async fn test_dashboard_buckets_sum_to_totals() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.login().await.unwrap();

    // Make sure at least one occupied slot exists
    setup_resident_with_slot(&server, &token).await;

    let response = server.get_auth("/api/v1/stats/dashboard", &token).await.unwrap();
    let dashboard: DashboardResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(dashboard.slots.occupied >= 1);
    assert_eq!(
        dashboard.slots.total,
        dashboard.slots.available + dashboard.slots.occupied + dashboard.slots.maintenance
    );
    assert_eq!(
        dashboard.residents.total,
        dashboard.residents.active + dashboard.residents.inactive
    );
    assert!(dashboard.violations.total >= dashboard.violations.last_30_days);
    assert!(dashboard.payments.total >= dashboard.payments.unpaid);
}
