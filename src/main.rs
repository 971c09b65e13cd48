use std::env;

use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use catalog_admin::db::establish_connection_pool;
use catalog_admin::repository::DieselRepository;
use catalog_admin::routes::images::{
    delete_image, get_image, list_images, update_image, upload_images,
};
use catalog_admin::routes::products::{
    create_product, delete_product, get_product, list_products, update_product,
};
use catalog_admin::uploads::UploadStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let database_url = env::var("DATABASE_URL").unwrap_or("app.db".to_string());
    let port = env::var("PORT").unwrap_or("8080".to_string());
    let port = port.parse::<u16>().unwrap_or(8080);
    let address = env::var("ADDRESS").unwrap_or("127.0.0.1".to_string());
    let upload_dir = env::var("UPLOAD_DIR").unwrap_or("public/uploads".to_string());

    std::fs::create_dir_all(&upload_dir)?;

    let pool = match establish_connection_pool(&database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);
    let store = UploadStore::new(&upload_dir);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(list_images)
            .service(upload_images)
            .service(get_image)
            .service(update_image)
            .service(delete_image)
            .service(list_products)
            .service(create_product)
            .service(get_product)
            .service(update_product)
            .service(delete_product)
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(store.clone()))
    })
    .bind((address, port))?
    .run()
    .await
}
