//! API integration tests
//!
//! These run against a live server: `cargo test -- --ignored`

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Eleven fresh digits so repeated runs do not collide on the unique CPF
fn unique_digits() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos();
    format!("{:011}", nanos % 100_000_000_000)
}

async fn create_user(client: &Client, cpf: &str) -> Value {
    let response = client
        .post(format!("{}/usuarios", BASE_URL))
        .json(&json!({
            "nome": "Teste da Silva",
            "cpf": cpf,
            "telefone": "11987654321"
        }))
        .send()
        .await
        .expect("Failed to send create user request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    body["result"].clone()
}

async fn create_book(client: &Client) -> Value {
    let response = client
        .post(format!("{}/livros", BASE_URL))
        .json(&json!({
            "isbn": "9788535902778",
            "titulo": "Memorias Postumas de Bras Cubas",
            "autor": "Machado de Assis",
            "descricao": ""
        }))
        .send()
        .await
        .expect("Failed to send create book request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    body["result"].clone()
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_create_user_formats_cpf_and_telefone() {
    let client = Client::new();
    let cpf = unique_digits();

    let user = create_user(&client, &cpf).await;

    let expected_cpf = format!("{}.{}.{}-{}", &cpf[..3], &cpf[3..6], &cpf[6..9], &cpf[9..]);
    assert_eq!(user["cpf"], Value::String(expected_cpf));
    assert_eq!(user["telefone"], "11 98765-4321");
    assert_eq!(user["usuario_ativo"], true);
}

#[tokio::test]
#[ignore]
async fn test_duplicate_cpf_conflict() {
    let client = Client::new();
    let cpf = unique_digits();

    create_user(&client, &cpf).await;

    let response = client
        .post(format!("{}/usuarios", BASE_URL))
        .json(&json!({
            "nome": "Outra Pessoa",
            "cpf": cpf,
            "telefone": "11987654321"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 409);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "conflict");
}

#[tokio::test]
#[ignore]
async fn test_user_edit_requires_a_field() {
    let client = Client::new();
    let user = create_user(&client, &unique_digits()).await;

    let response = client
        .put(format!("{}/usuarios/{}", BASE_URL, user["id"]))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
#[ignore]
async fn test_user_edit_invalid_field_mutates_nothing() {
    let client = Client::new();
    let user = create_user(&client, &unique_digits()).await;

    // nome is valid, cpf is not; the whole edit must be rejected
    let response = client
        .put(format!("{}/usuarios/{}", BASE_URL, user["id"]))
        .json(&json!({"nome": "Nome Novo", "cpf": "123"}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let response = client
        .get(format!("{}/usuarios/{}", BASE_URL, user["id"]))
        .send()
        .await
        .expect("Failed to send request");

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["result"]["nome"], "Teste da Silva");
}

#[tokio::test]
#[ignore]
async fn test_loan_lifecycle() {
    let client = Client::new();
    let user = create_user(&client, &unique_digits()).await;
    let book = create_book(&client).await;

    // Borrow for one month from a leap-year January 31st
    let response = client
        .post(format!("{}/emprestimos", BASE_URL))
        .json(&json!({
            "id_usuario": user["id"],
            "id_livro": book["id"],
            "data_emprestimo": "2024-01-31",
            "duracao": 1,
            "unidade_duracao": "mes"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let loan = body["result"].clone();
    assert_eq!(loan["data_devolucao"], "2024-02-29");
    assert_eq!(loan["status_finalizado"], false);

    // The book is now flagged as on loan
    let response = client
        .get(format!("{}/livros/{}", BASE_URL, book["id"]))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["result"]["status_emprestado"], true);

    // A second loan for the same book conflicts
    let response = client
        .post(format!("{}/emprestimos", BASE_URL))
        .json(&json!({
            "id_usuario": user["id"],
            "id_livro": book["id"],
            "data_emprestimo": "2024-02-01",
            "duracao": 2,
            "unidade_duracao": "semana"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 409);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "conflict");

    // Finalizing the loan releases the book
    let response = client
        .put(format!("{}/emprestimos/{}", BASE_URL, loan["id"]))
        .json(&json!({"status": "1"}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["result"]["status_finalizado"], true);

    let response = client
        .get(format!("{}/livros/{}", BASE_URL, book["id"]))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["result"]["status_emprestado"], false);
}

#[tokio::test]
#[ignore]
async fn test_loan_rejects_malformed_date() {
    let client = Client::new();
    let user = create_user(&client, &unique_digits()).await;
    let book = create_book(&client).await;

    let response = client
        .post(format!("{}/emprestimos", BASE_URL))
        .json(&json!({
            "id_usuario": user["id"],
            "id_livro": book["id"],
            "data_emprestimo": "31-01-2024",
            "duracao": 1,
            "unidade_duracao": "mes"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
#[ignore]
async fn test_loan_edit_requires_status() {
    let client = Client::new();
    let user = create_user(&client, &unique_digits()).await;
    let book = create_book(&client).await;

    let response = client
        .post(format!("{}/emprestimos", BASE_URL))
        .json(&json!({
            "id_usuario": user["id"],
            "id_livro": book["id"],
            "data_emprestimo": "2024-06-01",
            "duracao": 3,
            "unidade_duracao": "dia"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let loan_id = body["result"]["id"].clone();

    let response = client
        .put(format!("{}/emprestimos/{}", BASE_URL, loan_id))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "validation_error");
}
