use super::API;
use super::json_array;
use crate::config::Config;
use crate::database;
use crate::dto::CreateUserRequest;
use crate::dto::CreatedResponse;
use crate::dto::ErrorResponse;
use crate::dto::ListQuery;
use crate::error::ServiceError;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::http::header::ContentType;
use actix_web::middleware::Logger;
use actix_web::web;

pub struct Server;

impl Server {
    pub async fn run() -> Result<(), std::io::Error> {
        let config = Config::from_env();
        let client = database::db(&config).await.map_err(std::io::Error::other)?;
        let api = web::Data::new(API::from(client));
        log::info!("starting HTTP server");
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(api.clone())
                .route("/api/report-service/user", web::post().to(create_user))
                .route("/api/report-service/user", web::get().to(list_users))
        })
        .bind(("0.0.0.0", config.http_port))?
        .run()
        .await
    }
}

// Route handlers. Every error is converted to a {status, message} body at
// this boundary; nothing below it touches HTTP types.

async fn create_user(api: web::Data<API>, body: web::Json<CreateUserRequest>) -> impl Responder {
    match api.create(body.into_inner()).await {
        Ok(user) => HttpResponse::Created().json(CreatedResponse::from(user)),
        Err(e) => failure(&e),
    }
}

async fn list_users(api: web::Data<API>, query: web::Query<ListQuery>) -> impl Responder {
    let limit = match query.limit() {
        Ok(limit) => limit,
        Err(e) => return failure(&e),
    };
    // Content type is committed before the first byte; if the cursor fails
    // once streaming has begun, the status can no longer change and the
    // connection aborts mid-array instead.
    match api.stream(limit).await {
        Ok(records) => HttpResponse::Ok()
            .content_type(ContentType::json())
            .streaming(json_array(records)),
        Err(e) => failure(&e),
    }
}

fn failure(error: &ServiceError) -> HttpResponse {
    HttpResponse::build(error.status()).json(ErrorResponse::from(error))
}
