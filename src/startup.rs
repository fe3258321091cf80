use std::net::TcpListener;

use actix_web::{dev::Server, middleware::Logger, web, App, HttpServer};

use crate::{
    configuration::LinkedinSettings,
    routes::{auth_route, company_route, default_route, search_route},
    services::{AuthService, CompanyService, LinkedinClient, SearchService},
};

pub fn run(
    listener: TcpListener,
    linkedin_settings: LinkedinSettings,
) -> Result<Server, std::io::Error> {
    let linkedin = LinkedinClient::new(linkedin_settings);
    let company_service =
        web::Data::new(CompanyService::new(linkedin.clone(), linkedin.base_url()));
    let auth_service = web::Data::new(AuthService::new(linkedin.clone()));
    let search_service = web::Data::new(SearchService::new(linkedin));

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(default_route::default)
            .service(
                web::scope("/api/v1")
                    .service(auth_route::validate_auth)
                    .service(company_route::scrape_company)
                    .service(search_route::search_companies),
            )
            .app_data(company_service.clone())
            .app_data(auth_service.clone())
            .app_data(search_service.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
