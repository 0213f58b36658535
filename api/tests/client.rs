use api::{ApiConfig, EmployeeApi, EmployeeClient, EmployeeId, EmployeePatch, Operation};
use serde_json::{Value, json};
use types::FormValues;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> EmployeeClient {
    let config = ApiConfig::new(&format!("{}/api", server.uri())).unwrap();
    EmployeeClient::new(config)
}

fn ann() -> Value {
    json!({
        "_id": "65a1f0c2e4b0a1b2c3d4e5f6",
        "name": "Ann",
        "email": "ann@x.com",
        "position": "Eng",
        "department": "R&D",
        "salary": 50000,
        "hire_date": "2024-01-05",
    })
}

#[tokio::test]
async fn lists_employees() {
    let server = MockServer::start().await;
    let mut legacy = ann();
    legacy["_id"] = json!("65a1f0c2e4b0a1b2c3d4e5f7");
    legacy["salary"] = json!("72000.50");

    Mock::given(method("GET"))
        .and(path("/api/employees"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([ann(), legacy])))
        .expect(1)
        .mount(&server)
        .await;

    let employees = client_for(&server).list_employees().await.unwrap();

    assert_eq!(employees.len(), 2);
    assert_eq!(employees[0].name, "Ann");
    assert_eq!(employees[0].salary, 50000.0);
    assert_eq!(employees[1].salary, 72000.5);
    assert!(employees.iter().all(|e| e.id.is_some()));
}

#[tokio::test]
async fn gets_one_employee_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/employees/65a1f0c2e4b0a1b2c3d4e5f6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ann()))
        .expect(1)
        .mount(&server)
        .await;

    let id = EmployeeId::new("65a1f0c2e4b0a1b2c3d4e5f6");
    let employee = client_for(&server).get_employee(&id).await.unwrap();

    assert_eq!(employee.id, Some(id));
    assert_eq!(employee.email, "ann@x.com");
}

#[tokio::test]
async fn create_sends_json_without_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/employees"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "name": "Ann",
            "email": "ann@x.com",
            "position": "Eng",
            "department": "R&D",
            "salary": 50000.0,
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(ann()))
        .expect(1)
        .mount(&server)
        .await;

    let input = FormValues {
        name: "Ann".into(),
        email: "ann@x.com".into(),
        position: "Eng".into(),
        department: "R&D".into(),
        salary: "50000".into(),
    }
    .validate()
    .unwrap();

    let created = client_for(&server).create_employee(&input).await.unwrap();
    assert_eq!(
        created.id,
        Some(EmployeeId::new("65a1f0c2e4b0a1b2c3d4e5f6"))
    );

    let requests = server.received_requests().await.unwrap();
    let body: Value = requests[0].body_json().unwrap();
    assert!(body.get("_id").is_none());
    assert!(body.get("id").is_none());
}

#[tokio::test]
async fn update_puts_only_present_fields() {
    let server = MockServer::start().await;
    let mut updated = ann();
    updated["position"] = json!("Lead");

    Mock::given(method("PUT"))
        .and(path("/api/employees/65a1f0c2e4b0a1b2c3d4e5f6"))
        .and(body_json(json!({ "position": "Lead" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(updated))
        .expect(1)
        .mount(&server)
        .await;

    let patch = EmployeePatch {
        position: Some("Lead".into()),
        ..Default::default()
    };
    let id = EmployeeId::new("65a1f0c2e4b0a1b2c3d4e5f6");
    let employee = client_for(&server)
        .update_employee(&id, &patch)
        .await
        .unwrap();

    assert_eq!(employee.position, "Lead");
}

#[tokio::test]
async fn delete_ignores_response_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/employees/65a1f0c2e4b0a1b2c3d4e5f6"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "message": "Employee deleted successfully" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let id = EmployeeId::new("65a1f0c2e4b0a1b2c3d4e5f6");
    client_for(&server).delete_employee(&id).await.unwrap();
}

#[tokio::test]
async fn error_status_is_a_single_failure_kind() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "error": "Employee not found" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let error = client
        .delete_employee(&EmployeeId::new("gone"))
        .await
        .unwrap_err();
    assert_eq!(error.operation, Operation::Delete);
    assert_eq!(error.operation.failure_message(), "Failed to delete employee");

    let error = client.list_employees().await.unwrap_err();
    assert_eq!(error.operation, Operation::List);
    assert!(error.to_string().starts_with("Failed to fetch employees"));
}

#[tokio::test]
async fn undecodable_body_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/employees"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let error = client_for(&server).list_employees().await.unwrap_err();
    assert_eq!(error.operation, Operation::List);
    assert!(error.message.contains("unexpected response body"));
}

#[tokio::test]
async fn unreachable_backend_fails_once() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    drop(server);

    let error = client.list_employees().await.unwrap_err();
    assert_eq!(error.operation, Operation::List);
}
