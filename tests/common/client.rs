use actix_web::{web, App};
use std::sync::Arc;
use user_auth::{
    db::{memory::InMemoryUserStore, UserStore},
    service::authentication::AuthenticationSvc,
};

pub struct TestClient {
    pub svc: AuthenticationSvc,
}

impl TestClient {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        TestClient {
            svc: AuthenticationSvc::new(store),
        }
    }

    pub fn in_memory() -> (Self, Arc<InMemoryUserStore>) {
        let store = Arc::new(InMemoryUserStore::new());
        (Self::new(store.clone()), store)
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.svc.clone()))
            .configure(user_auth::routes::configure_routes)
    }
}
