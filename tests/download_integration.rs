//! Integration tests for streamed image downloading.

use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use instagram_downloader::{
    client::HttpClient, config::ClientConfig, download::download_image, Error,
};

fn test_client() -> HttpClient {
    HttpClient::new(&ClientConfig::default()).expect("client")
}

#[tokio::test]
async fn test_downloads_exact_bytes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/img.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"fakeimagedata".as_slice()))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let save_path = temp.path().join("img.jpg");

    download_image(&test_client(), &format!("{}/img.jpg", server.uri()), &save_path)
        .await
        .expect("download");

    assert_eq!(std::fs::read(&save_path).unwrap(), b"fakeimagedata");
}

#[tokio::test]
async fn test_redownload_overwrites_existing_file() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/img.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"fakeimagedata".as_slice()))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let save_path = temp.path().join("img.jpg");

    // Stale, longer content must be fully replaced, not appended to.
    std::fs::write(&save_path, b"previous-much-longer-content-xxxxxxxxxxxx").unwrap();

    let client = test_client();
    let url = format!("{}/img.jpg", server.uri());

    download_image(&client, &url, &save_path).await.expect("first");
    download_image(&client, &url, &save_path).await.expect("second");

    assert_eq!(std::fs::read(&save_path).unwrap(), b"fakeimagedata");
}

#[tokio::test]
async fn test_image_404_maps_to_download_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let save_path = temp.path().join("img.jpg");

    let err = download_image(&test_client(), &format!("{}/img.jpg", server.uri()), &save_path)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Download(_)));
    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn test_connection_failure_maps_to_network() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let temp = TempDir::new().unwrap();
    let save_path = temp.path().join("img.jpg");

    let err = download_image(&test_client(), &format!("{}/img.jpg", uri), &save_path)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Network(_)));
}

#[tokio::test]
async fn test_unwritable_path_maps_to_save_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"fakeimagedata".as_slice()))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    // The containing directory does not exist, so opening the file fails
    // after the fetch has already succeeded.
    let save_path = temp.path().join("missing-subdir").join("img.jpg");

    let err = download_image(&test_client(), &format!("{}/img.jpg", server.uri()), &save_path)
        .await
        .unwrap_err();

    assert!(
        matches!(err, Error::Save(_)),
        "expected Save, got: {:?}",
        err
    );
}
