//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{appointments, auth, check_ins, employees, health, registrations, stats, visitors};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Atrium API",
        version = "1.0.0",
        description = "Visitor Management System REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html"),
        contact(name = "Atrium Contributors")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        auth::me,
        // Registrations
        registrations::register,
        // Visitors
        visitors::list_visitors,
        visitors::lookup_visitor,
        // Employees
        employees::list_employees,
        employees::create_employee,
        // Appointments
        appointments::list_appointments,
        appointments::approve_appointment,
        appointments::decline_appointment,
        // Check-ins
        check_ins::list_check_ins,
        check_ins::create_check_in,
        check_ins::check_out,
        // Stats
        stats::get_stats,
    ),
    components(
        schemas(
            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            auth::StaffInfo,
            // Registrations
            registrations::RegistrationResponse,
            crate::models::visitor::RegisterVisitor,
            // Visitors
            crate::models::visitor::Visitor,
            crate::models::visitor::VisitorShort,
            // Employees
            crate::models::employee::Employee,
            crate::models::employee::EmployeeShort,
            crate::models::employee::CreateEmployee,
            // Appointments
            crate::models::appointment::Appointment,
            crate::models::appointment::AppointmentShort,
            crate::models::appointment::AppointmentDetails,
            crate::models::enums::AppointmentStatus,
            // Check-ins
            check_ins::CheckInRequest,
            crate::models::check_in::CheckIn,
            crate::models::check_in::CheckInDetails,
            // Staff
            crate::models::enums::UserRole,
            // Stats
            stats::StatsResponse,
            stats::AppointmentBreakdown,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Staff authentication"),
        (name = "registrations", description = "Visitor pre-registration"),
        (name = "visitors", description = "Visitor directory and lookup"),
        (name = "employees", description = "Employee directory"),
        (name = "appointments", description = "Appointment moderation"),
        (name = "check-ins", description = "Security desk check-in and check-out"),
        (name = "stats", description = "Dashboard statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
