//! HTTP handlers and route configuration.

mod blog;
mod health;

use actix_web::web;

use crate::middleware::error::{json_config, query_config};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        // Liveness and diagnostics
        .route("/", web::get().to(health::root))
        .route("/api/hello", web::get().to(health::hello))
        .route("/test", web::get().to(health::diagnostics))
        // Blog collection
        .service(
            web::resource("/blogs")
                .route(web::get().to(blog::list_blogs))
                .route(web::post().to(blog::create_blog)),
        )
        .service(
            web::resource("/blogs/{blog_id}")
                .route(web::get().to(blog::get_blog))
                .route(web::put().to(blog::update_blog))
                .route(web::delete().to(blog::delete_blog)),
        );
}
