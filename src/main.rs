// --- Sistema Generador de Bloques - Archivo principal ---

use blockshift::run_server;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    println!("=== Sistema Generador de Bloques (API) ===");
    let bind = "127.0.0.1:8080";
    println!("Iniciando servidor en http://{}", bind);
    run_server(bind).await
}
