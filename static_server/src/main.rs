use actix_files::{Files, NamedFile};
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer, Result};
use std::path::Path;

/* ---------- Fallback SPA (index.html) ----------------------------------- */
async fn spa_fallback(req: HttpRequest) -> Result<HttpResponse> {
    let index = Path::new(env!("CARGO_MANIFEST_DIR")).join("../frontend/dist/index.html");
    Ok(NamedFile::open(index)?.into_response(&req))
}

/* ---------- main -------------------------------------------------------- */
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // directory produced by `trunk build`
    let dist_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../frontend/dist");
    println!("Serving static files from {}", dist_dir.display());

    HttpServer::new(move || {
        App::new()
            .service(Files::new("/", &dist_dir).index_file("index.html"))
            .default_service(web::to(spa_fallback))
    })
    .bind(("0.0.0.0", 8080))?
    .run()
    .await
}
