use actix_web::error::QueryPayloadError;
use actix_web::{HttpRequest, HttpResponse, Responder, error, get, web};
use serde::Serialize;

use crate::config::DelayRange;
use crate::rate_table::{RateQuery, RateTable};

pub struct AppState {
    pub table: RateTable,
    pub fake_delay: Option<DelayRange>,
}

#[derive(Debug, Serialize)]
struct ErrorMessage {
    message: String,
}

fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = err.to_string();
    let response = HttpResponse::UnprocessableEntity().json(ErrorMessage { message });

    error::InternalError::from_response(err, response).into()
}

#[get("/api/v1/historical_rates")]
async fn historical_rates(
    state: web::Data<AppState>,
    query: web::Query<RateQuery>,
) -> impl Responder {
    if let Some(delay) = state.fake_delay {
        tokio::time::sleep(delay.sample()).await;
    }

    HttpResponse::Ok().json(state.table.lookup(&query))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(historical_rates);
}
