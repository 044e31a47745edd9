use assert_cmd::Command;
use axum::{routing::post, Json, Router};
use serde_json::json;
use std::fs;

fn spawn_backend() -> String {
    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async move {
            let app = Router::new()
                .route(
                    "/generate-image",
                    post(|Json(body): Json<serde_json::Value>| async move {
                        Json(json!({
                            "prompt": body["prompt"],
                            "image_base64": "iVBORw0KGgo="
                        }))
                    }),
                )
                .route(
                    "/refine",
                    post(|| async {
                        Json(json!({
                            "image_base64": "AQID",
                            "refinement_prompt": "Refine the previous Japandi interior image.",
                            "delta": {}
                        }))
                    }),
                );
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            let port = listener.local_addr().unwrap().port();
            tx.send(format!("http://127.0.0.1:{}", port)).unwrap();
            axum::serve(listener, app).await.unwrap();
        });
    });
    rx.recv().unwrap()
}

#[test]
fn test_generate_against_backend() {
    let base = spawn_backend();
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("s.json");
    fs::write(&input, r#"{"strokeThickness": 30, "colorTone": 0.3}"#).unwrap();
    let lib = dir.path().join("lib.json");
    fs::write(&lib, "{}").unwrap();
    let out = dir.path().join("room.png");

    let output = Command::cargo_bin("applepad")
        .unwrap()
        .args(["generate", "--backend-url", &base, "--library"])
        .arg(&lib)
        .arg("--output")
        .arg(&out)
        .arg(&input)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Here is the living room design that fits your taste"));
    assert_eq!(fs::read(&out).unwrap()[..4], [0x89, b'P', b'N', b'G']);
}

#[test]
fn test_refine_against_backend() {
    let base = spawn_backend();
    let dir = tempfile::tempdir().unwrap();
    let before = dir.path().join("before.json");
    let after = dir.path().join("after.json");
    fs::write(&before, r#"{"colorTone": 0.2}"#).unwrap();
    fs::write(&after, r#"{"colorTone": 0.6, "appleMorph": 0.9}"#).unwrap();
    let image = dir.path().join("room.png");
    fs::write(&image, [1u8, 2, 3]).unwrap();
    let out = dir.path().join("refined.png");

    let output = Command::cargo_bin("applepad")
        .unwrap()
        .args(["refine", "--style", "Japandi", "--axis", "color", "--backend-url", &base])
        .arg("--before")
        .arg(&before)
        .arg("--after")
        .arg(&after)
        .arg("--image")
        .arg(&image)
        .arg("--output")
        .arg(&out)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Refine the previous Japandi interior image."));
    assert!(stdout.contains("+0.40"));
    assert_eq!(fs::read(&out).unwrap(), vec![1, 2, 3]);
}

#[test]
fn test_generate_with_backend_down() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("s.json");
    fs::write(&input, "{}").unwrap();
    let lib = dir.path().join("lib.json");
    fs::write(&lib, "{}").unwrap();

    let output = Command::cargo_bin("applepad")
        .unwrap()
        .args(["generate", "--backend-url", &format!("http://127.0.0.1:{}", port)])
        .arg("--library")
        .arg(&lib)
        .arg(&input)
        .output()
        .unwrap();

    // A dead backend is not fatal; the participant gets the apology.
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("there was an error generating the image"));
}
