use actix_web::{get, http::header::ContentType, HttpResponse, Responder};

#[get("/")]
pub async fn home() -> impl Responder {
    HttpResponse::Ok()
        .insert_header(ContentType::plaintext())
        .body("Backend is running")
}
