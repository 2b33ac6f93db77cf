use crate::error::Result;
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

/// Answers every request with `200 OK` so an external process monitor sees
/// the bot as alive.
pub fn router() -> Router {
    Router::new().fallback(alive)
}

async fn alive() -> &'static str {
    "OK"
}

pub async fn serve(port: u16) -> Result<()> {
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Keep-alive HTTP server listening on port {}", port);
    axum::serve(listener, router()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn any_path_is_alive() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router()).await });

        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        for path in ["/", "/health", "/some/deep/path?x=1"] {
            let response = client
                .get(format!("http://{addr}{path}"))
                .send()
                .await
                .unwrap();
            assert_eq!(response.status(), reqwest::StatusCode::OK);
            assert_eq!(response.text().await.unwrap(), "OK");
        }

        let response = client.post(format!("http://{addr}/")).send().await.unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);
    }
}
