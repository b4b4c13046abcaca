use okada::engine::Engine;
use okada::server::serve;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let engine = Engine::new();

    serve(engine).await;
}
