use applepad_backend::{router, AppState, Settings};
use applepad_client::BackendClient;
use applepad_core::config::EndpointConfig;
use applepad_core::outcome::GenerationOutcome;
use applepad_core::params::{NormalizedParams, ParamGroup};
use applepad_core::protocol::{GenerateRequest, RefineRequest};
use axum::{
    http::{HeaderMap, StatusCode},
    routing::post,
    Router,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::{json, Value};
use std::fs;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tokio::net::TcpListener;

const PNG: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

async fn serve(app: Router) -> String {
    let addr = SocketAddr::from(([127, 0, 0, 1], 0));
    let listener = TcpListener::bind(addr).await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://127.0.0.1:{}", port)
}

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("test_interior.png"), PNG).unwrap();
        fs::write(
            dir.path().join("interior_style_library.json"),
            r#"{"Japandi": {"thickness": {"0-0.3": "Thin ash slats and washi paper."}}}"#,
        )
        .unwrap();
        Self { dir }
    }

    fn settings(&self, upstream: Option<String>) -> Settings {
        self.settings_with_threshold(upstream, 0.05)
    }

    fn settings_with_threshold(&self, upstream: Option<String>, delta_threshold: f64) -> Settings {
        Settings {
            hf_endpoint_url: upstream,
            hf_token: Some("hf_test".to_string()),
            port: 0,
            data: self.dir.path().to_path_buf(),
            library: self.dir.path().join("interior_style_library.json"),
            placeholder: self.dir.path().join("test_interior.png"),
            scene: "living room".to_string(),
            delta_threshold,
            upstream_timeout_secs: 5,
        }
    }

    async fn start(&self, upstream: Option<String>) -> String {
        let state = AppState::new(&self.settings(upstream)).unwrap();
        serve(router(Arc::new(state))).await
    }
}

fn decode(value: &Value) -> Vec<u8> {
    STANDARD.decode(value.as_str().unwrap()).unwrap()
}

#[tokio::test]
async fn test_health() {
    let fx = Fixture::new();
    let base = fx.start(None).await;

    let body: Value = reqwest::get(format!("{}/health", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_missing_prompt_is_rejected() {
    let fx = Fixture::new();
    let base = fx.start(None).await;
    let http = reqwest::Client::new();

    for body in ["{}", r#"{"prompt": "   "}"#, "not json", r#"{"style": "Japandi"}"#] {
        let res = http
            .post(format!("{}/generate-image", base))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{}", body);
        let err: Value = res.json().await.unwrap();
        assert_eq!(err["error"], "Missing 'prompt'");
    }
}

#[tokio::test]
async fn test_placeholder_image_for_prompt() {
    let fx = Fixture::new();
    let base = fx.start(None).await;

    let res: Value = reqwest::Client::new()
        .post(format!("{}/generate-image", base))
        .json(&json!({ "prompt": "A quiet Japandi room." }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(res["prompt"], "A quiet Japandi room.");
    assert_eq!(decode(&res["image_base64"]), PNG);
    assert_eq!(res["resolved"]["source"], "request");
}

#[tokio::test]
async fn test_prompt_built_from_library() {
    let fx = Fixture::new();
    let base = fx.start(None).await;

    let req = GenerateRequest {
        style: Some("Japandi".to_string()),
        params: Some(NormalizedParams::splat(0.1)),
        ..Default::default()
    };
    let res: Value = reqwest::Client::new()
        .post(format!("{}/generate-image", base))
        .json(&req)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let prompt = res["prompt"].as_str().unwrap();
    assert!(prompt.starts_with("Generate an interior living room in the Japandi style. Materials: Thin ash slats and washi paper."));
    assert!(prompt.contains("the parameter 'rigidity' is interpreted in range 0-0.3"));
    assert_eq!(res["resolved"]["source"], "library");
}

#[tokio::test]
async fn test_unknown_style_uses_generic_prompt() {
    let fx = Fixture::new();
    let base = fx.start(None).await;

    let req = GenerateRequest {
        style: Some("Rustic Cabin".to_string()),
        params: Some(NormalizedParams::splat(0.9)),
        scene: Some("bedroom".to_string()),
        ..Default::default()
    };
    let res: Value = reqwest::Client::new()
        .post(format!("{}/generate-image", base))
        .json(&req)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!(res["prompt"]
        .as_str()
        .unwrap()
        .starts_with("Generate an interior bedroom in the Rustic Cabin style. Use materials"));
    assert_eq!(res["resolved"]["source"], "generic");
}

#[tokio::test]
async fn test_missing_placeholder_is_server_error() {
    let fx = Fixture::new();
    fs::remove_file(fx.dir.path().join("test_interior.png")).unwrap();
    let base = fx.start(None).await;

    let res = reqwest::Client::new()
        .post(format!("{}/generate-image", base))
        .json(&json!({ "prompt": "anything" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let err: Value = res.json().await.unwrap();
    assert_eq!(err["error"], "Failed to load local image");
}

#[tokio::test]
async fn test_forwards_to_upstream_with_bearer() {
    let seen = Arc::new(Mutex::new(None::<(Option<String>, Value)>));
    let seen_in_handler = seen.clone();
    let upstream = Router::new().route(
        "/",
        post(move |headers: HeaderMap, body: String| {
            let seen = seen_in_handler.clone();
            async move {
                let auth = headers
                    .get("authorization")
                    .and_then(|h| h.to_str().ok())
                    .map(str::to_string);
                *seen.lock().unwrap() = Some((auth, serde_json::from_str(&body).unwrap()));
                vec![1u8, 2, 3, 4]
            }
        }),
    );
    let upstream_url = format!("{}/", serve(upstream).await);

    let fx = Fixture::new();
    let base = fx.start(Some(upstream_url)).await;

    let res: Value = reqwest::Client::new()
        .post(format!("{}/generate-image", base))
        .json(&json!({ "prompt": "Loft with brick walls." }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(decode(&res["image_base64"]), vec![1, 2, 3, 4]);

    let (auth, body) = seen.lock().unwrap().clone().unwrap();
    assert_eq!(auth.as_deref(), Some("Bearer hf_test"));
    assert_eq!(body["inputs"], "Loft with brick walls.");
    assert_eq!(body["parameters"]["num_inference_steps"], 30);
    assert_eq!(body["parameters"]["guidance_scale"], 7.5);
}

#[tokio::test]
async fn test_upstream_failure_text_is_surfaced() {
    let upstream = Router::new().route(
        "/",
        post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "Model is currently loading") }),
    );
    let upstream_url = format!("{}/", serve(upstream).await);

    let fx = Fixture::new();
    let base = fx.start(Some(upstream_url)).await;

    let res = reqwest::Client::new()
        .post(format!("{}/generate-image", base))
        .json(&json!({ "prompt": "anything" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
    let err: Value = res.json().await.unwrap();
    assert_eq!(err["error"], "Model is currently loading");
}

#[tokio::test]
async fn test_refine_builds_prompt_from_deltas() {
    let fx = Fixture::new();
    let base = fx.start(None).await;

    let p_0 = NormalizedParams::splat(0.5);
    let mut p_1 = p_0;
    p_1.tone = 0.8;
    p_1.brightness = 0.48;
    let req = RefineRequest {
        style: "Japandi".to_string(),
        p_0,
        p_1,
        img_0: STANDARD.encode(PNG),
        refinement_type: ParamGroup::Color,
    };

    let res: Value = reqwest::Client::new()
        .post(format!("{}/refine", base))
        .json(&req)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(
        res["refinement_prompt"],
        "Refine the previous Japandi interior image. Keep everything else unchanged and \
         adjust only the color characteristics: tone increased by 0.30."
    );
    assert_eq!(decode(&res["image_base64"]), PNG);
    assert_eq!(res["delta"].as_object().unwrap().len(), 10);
    assert!((res["delta"]["brightness"].as_f64().unwrap() + 0.02).abs() < 1e-9);
}

#[tokio::test]
async fn test_refine_rejects_incomplete_body_as_json() {
    let fx = Fixture::new();
    let base = fx.start(None).await;
    let http = reqwest::Client::new();

    for body in [r#"{"style": "Japandi"}"#, "not json"] {
        let res = http
            .post(format!("{}/refine", base))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{}", body);
        let content_type = res
            .headers()
            .get("content-type")
            .and_then(|h| h.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("application/json"), "{}", content_type);
        let err: Value = res.json().await.unwrap();
        assert!(err["error"].is_string());
    }
}

#[tokio::test]
async fn test_refine_prompt_uses_configured_threshold() {
    let fx = Fixture::new();
    let state = AppState::new(&fx.settings_with_threshold(None, 0.5)).unwrap();
    let base = serve(router(Arc::new(state))).await;

    let p_0 = NormalizedParams::splat(0.5);
    let mut p_1 = p_0;
    p_1.tone = 0.8;
    let req = RefineRequest {
        style: "Japandi".to_string(),
        p_0,
        p_1,
        img_0: STANDARD.encode(PNG),
        refinement_type: ParamGroup::Color,
    };

    let res: Value = reqwest::Client::new()
        .post(format!("{}/refine", base))
        .json(&req)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!(res["refinement_prompt"]
        .as_str()
        .unwrap()
        .ends_with("no noticeable change was requested."));
    assert!((res["delta"]["tone"].as_f64().unwrap() - 0.3).abs() < 1e-9);
}

#[tokio::test]
async fn test_serves_style_library() {
    let fx = Fixture::new();
    let base = fx.start(None).await;

    let lib: Value = reqwest::get(format!("{}/interior_style_library.json", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(lib.get("Japandi").is_some());

    let res = reqwest::get(format!("{}/static/test_interior.png", base))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.bytes().await.unwrap().as_ref(), PNG);
}

#[tokio::test]
async fn test_client_against_backend() {
    let fx = Fixture::new();
    let base = fx.start(None).await;
    let client = BackendClient::new(&EndpointConfig {
        backend_url: base,
        request_timeout_secs: 5,
        ..Default::default()
    })
    .unwrap();

    let library = client.fetch_style_library().await;
    assert!(library.get().is_some_and(|lib| lib.contains_style("Japandi")));

    let outcome = client
        .generate(&GenerateRequest {
            prompt: Some("A calm room.".to_string()),
            ..Default::default()
        })
        .await;
    match outcome {
        GenerationOutcome::Image { bytes, .. } => assert_eq!(bytes, PNG),
        other => panic!("expected an image, got {:?}", other),
    }
}
