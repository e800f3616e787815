use actix_web::{middleware, web, App, HttpRequest, HttpResponse, HttpServer, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};
use tracing::info;

use crate::model::{Guest, Venue};
use crate::parser::read_guests;
use crate::roster::GuestRoster;
use crate::seating::{SeatingPlan, SeatingPlanner};

// In-memory only, nothing survives a restart
pub struct AppState {
    pub roster: Mutex<GuestRoster>,
    pub plan: Mutex<Option<SeatingPlan>>,
    pub admin_password: String,
}

impl AppState {
    pub fn new(admin_password: impl Into<String>) -> Self {
        Self {
            roster: Mutex::new(GuestRoster::new()),
            plan: Mutex::new(None),
            admin_password: admin_password.into(),
        }
    }
}

#[derive(Deserialize)]
pub struct LoginRequest {
    password: String,
}

#[derive(Deserialize)]
pub struct GuestRequest {
    name: Option<String>,
    group_tag: Option<String>,
}

#[derive(Serialize)]
pub struct StatsResponse {
    guest_count: usize,
    group_counts: BTreeMap<String, usize>,
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>> {
    mutex
        .lock()
        .map_err(|_| actix_web::error::ErrorInternalServerError("state lock poisoned"))
}

fn failure(error: impl ToString) -> serde_json::Value {
    serde_json::json!({"success": false, "error": error.to_string()})
}

// Admin login endpoint
async fn admin_login(
    req: web::Json<LoginRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    if req.password == state.admin_password {
        Ok(HttpResponse::Ok().json(serde_json::json!({"success": true})))
    } else {
        Ok(HttpResponse::Unauthorized().json(failure("Invalid password")))
    }
}

// Admin CSV upload endpoint, replaces the whole guest list
async fn admin_upload(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let password = req
        .headers()
        .get("X-Admin-Password")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    if password != state.admin_password {
        return Ok(HttpResponse::Unauthorized().json(failure("Unauthorized")));
    }

    match read_guests(&body[..]) {
        Ok(roster) => {
            let count = roster.count();
            *lock(&state.roster)? = roster;
            *lock(&state.plan)? = None;
            info!(guests = count, "guest list uploaded");

            Ok(HttpResponse::Ok().json(serde_json::json!({
                "success": true,
                "guest_count": count
            })))
        }
        Err(e) => Ok(HttpResponse::BadRequest().json(failure(format!("Failed to process CSV: {}", e)))),
    }
}

async fn list_guests(state: web::Data<AppState>) -> Result<HttpResponse> {
    let roster = lock(&state.roster)?;
    Ok(HttpResponse::Ok().json(roster.all_guests()))
}

async fn add_guest(
    req: web::Json<GuestRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let req = req.into_inner();
    let guest = match Guest::from_parts(req.name, req.group_tag) {
        Ok(guest) => guest,
        Err(e) => return Ok(HttpResponse::BadRequest().json(failure(e))),
    };

    let mut roster = lock(&state.roster)?;
    if roster.contains(guest.name()) {
        return Ok(HttpResponse::Conflict().json(failure("A guest with this name already exists")));
    }
    roster.add(guest.clone());

    Ok(HttpResponse::Created().json(guest))
}

async fn find_guest(
    name: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let roster = lock(&state.roster)?;
    match roster.find(name.as_str()) {
        Some(guest) => Ok(HttpResponse::Ok().json(guest)),
        None => Ok(HttpResponse::NotFound().json(failure(format!("Guest '{}' not found", name)))),
    }
}

async fn remove_guest(
    name: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let mut roster = lock(&state.roster)?;
    if roster.remove(name.as_str()) {
        Ok(HttpResponse::Ok().json(serde_json::json!({"success": true})))
    } else {
        Ok(HttpResponse::NotFound().json(failure(format!("Guest '{}' not found", name))))
    }
}

// Runs the planner over the current guest list
async fn create_seating(
    venue: web::Json<Venue>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let planner = match SeatingPlanner::new(venue.into_inner()) {
        Ok(planner) => planner,
        Err(e) => return Ok(HttpResponse::BadRequest().json(failure(e))),
    };

    let plan = {
        let roster = lock(&state.roster)?;
        planner.generate_seating(roster.all_guests())
    };
    *lock(&state.plan)? = Some(plan.clone());

    Ok(HttpResponse::Ok().json(plan))
}

async fn get_seating(state: web::Data<AppState>) -> Result<HttpResponse> {
    let plan = lock(&state.plan)?;
    match plan.as_ref() {
        Some(plan) => Ok(HttpResponse::Ok().json(plan)),
        None => Ok(HttpResponse::NotFound().json(failure("Seating not generated yet"))),
    }
}

// Stats endpoint, ungrouped guests are counted under ""
async fn get_stats(state: web::Data<AppState>) -> Result<HttpResponse> {
    let roster = lock(&state.roster)?;

    let mut group_counts: BTreeMap<String, usize> = BTreeMap::new();
    for guest in roster.all_guests() {
        *group_counts.entry(guest.group_tag().trim().to_string()).or_insert(0) += 1;
    }

    Ok(HttpResponse::Ok().json(StatsResponse {
        guest_count: roster.count(),
        group_counts,
    }))
}

/// Registers every API route, shared by the server and the handler tests
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/login", web::post().to(admin_login))
        .route("/api/upload", web::post().to(admin_upload))
        .route("/api/guests", web::get().to(list_guests))
        .route("/api/guests", web::post().to(add_guest))
        .route("/api/guests/{name}", web::get().to(find_guest))
        .route("/api/guests/{name}", web::delete().to(remove_guest))
        .route("/api/seating", web::get().to(get_seating))
        .route("/api/seating", web::post().to(create_seating))
        .route("/api/stats", web::get().to(get_stats));
}

pub async fn start_server(port: u16, admin_password: String) -> std::io::Result<()> {
    let app_state = web::Data::new(AppState::new(admin_password));
    info!(port, "starting web server");

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
