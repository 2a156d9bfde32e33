pub mod auth;
pub mod crud;
pub mod employees;
pub mod foods;
pub mod health;
pub mod swagger;
pub mod users;

use std::sync::Arc;

use actix_web::web;

use crate::database::{DocumentStore, MongoDB};
use crate::middleware::AuthGate;
use crate::models::{Employee, Entity, Food, User};
use crate::services::{Repository, TokenService};
use crate::utils::AppError;

/// Shared handles injected into every worker.
#[derive(Clone)]
pub struct AppState {
    pub users: web::Data<Repository<User>>,
    pub foods: web::Data<Repository<Food>>,
    pub employees: web::Data<Repository<Employee>>,
    pub tokens: web::Data<TokenService>,
}

impl AppState {
    pub fn new(
        users: Arc<dyn DocumentStore>,
        foods: Arc<dyn DocumentStore>,
        employees: Arc<dyn DocumentStore>,
        tokens: TokenService,
    ) -> Self {
        Self {
            users: web::Data::new(Repository::new(users)),
            foods: web::Data::new(Repository::new(foods)),
            employees: web::Data::new(Repository::new(employees)),
            tokens: web::Data::new(tokens),
        }
    }

    pub fn from_database(db: &MongoDB, tokens: TokenService) -> Self {
        Self::new(
            Arc::new(db.collection(User::COLLECTION)),
            Arc::new(db.collection(Food::COLLECTION)),
            Arc::new(db.collection(Employee::COLLECTION)),
            tokens,
        )
    }
}

/// Registers shared state and the route table.
pub fn configure(cfg: &mut web::ServiceConfig, state: &AppState) {
    cfg.app_data(state.users.clone())
        .app_data(state.foods.clone())
        .app_data(state.employees.clone())
        .app_data(state.tokens.clone())
        .app_data(web::JsonConfig::default().error_handler(|err, _req| {
            AppError::InvalidArgument(format!("Invalid request body: {}", err)).into()
        }))
        // Health
        .route("/", web::get().to(health::welcome))
        .route("/health", web::get().to(health::health_check))
        // Auth
        .route("/jwt", web::post().to(auth::issue_token))
        .route("/logout", web::post().to(auth::logout))
        // Users: signup is public, lookup requires a credential
        .route("/users", web::post().to(users::create_user))
        .service(
            web::resource("/user/{email}")
                .wrap(AuthGate::all())
                .route(web::get().to(users::get_user)),
        )
        // Foods: public reads, gated writes
        .service(
            web::scope("/food")
                .wrap(AuthGate::writes())
                .route("", web::get().to(foods::list_foods))
                .route("", web::post().to(foods::create_food))
                .route("/{id}", web::get().to(foods::get_food))
                .route("/{id}", web::put().to(foods::update_food))
                .route("/{id}", web::delete().to(foods::delete_food)),
        )
        // Employees: same policy as foods
        .service(
            web::scope("/employee")
                .wrap(AuthGate::writes())
                .route("", web::get().to(employees::list_employees))
                .route("", web::post().to(employees::create_employee))
                .route("/{id}", web::get().to(employees::get_employee))
                .route("/{id}", web::put().to(employees::update_employee))
                .route("/{id}", web::delete().to(employees::delete_employee)),
        );
}
