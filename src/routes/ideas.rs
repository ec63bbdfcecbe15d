use actix_web::http::header::{Charset, ContentDisposition, DispositionParam, DispositionType, ExtendedValue};
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{assistant_prompt, calculate_budget_distribution, ideas_prompt, District};
use crate::models::{
    AskRequest, AskResponse, BudgetRequest, BudgetResponse, DistrictEntry, ErrorResponse,
    ExportRequest, HealthResponse, IdeasResponse, Profile, ProfileRequest,
};
use crate::services::{file_name, DocumentExporter, GeminiClient, GeminiError, DOCX_MIME_TYPE, EXPORT_UNAVAILABLE_WARNING};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub gemini: Arc<GeminiClient>,
    pub exporter: DocumentExporter,
}

/// Configure all idea-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/districts", web::get().to(list_districts))
        .route("/ideas", web::post().to(generate_ideas))
        .route("/ask", web::post().to(ask_assistant))
        .route("/budget", web::post().to(budget_distribution))
        .route("/export", web::post().to(export_document));
}

fn bad_request(error: &str, message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 400,
    })
}

fn generation_failed(e: &GeminiError) -> HttpResponse {
    HttpResponse::BadGateway().json(ErrorResponse {
        error: "Text generation failed".to_string(),
        message: e.to_string(),
        status_code: 502,
    })
}

/// Validate the submitted form and build the profile
fn parse_profile(req: ProfileRequest) -> Result<Profile, HttpResponse> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for profile: field_errors={:?}", errors);
        return Err(bad_request("Validation failed", errors.to_string()));
    }

    Profile::try_from(req).map_err(|e| {
        tracing::info!("Rejected profile: {}", e);
        bad_request("Invalid profile", e.to_string())
    })
}

/// Content-Disposition for a user's document
///
/// `filename` carries a printable-ASCII fallback; `filename*` carries the
/// exact name, percent-encoded as UTF-8.
pub fn attachment_disposition(name: &str) -> ContentDisposition {
    let ascii_name: String = name
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c == ' ' || c.is_ascii_graphic() => c,
            _ => '_',
        })
        .collect();

    ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters: vec![
            DispositionParam::Filename(file_name(&ascii_name)),
            DispositionParam::FilenameExt(ExtendedValue {
                charset: Charset::Ext("UTF-8".to_string()),
                language_tag: None,
                value: file_name(name).into_bytes(),
            }),
        ],
    }
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        export_available: state.exporter.is_available(),
    })
}

/// District list endpoint
///
/// GET /api/v1/districts
async fn list_districts() -> impl Responder {
    let districts: Vec<DistrictEntry> = District::ALL
        .iter()
        .map(|d| DistrictEntry {
            name: d.name().to_string(),
            description: d.descriptor().to_string(),
        })
        .collect();

    HttpResponse::Ok().json(districts)
}

/// Generate business ideas endpoint
///
/// POST /api/v1/ideas
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "district": "Coimbatore",
///   "qualifications": "string",
///   "budget": 100000,
///   "interests": "string"
/// }
/// ```
async fn generate_ideas(
    state: web::Data<AppState>,
    req: web::Json<ProfileRequest>,
) -> impl Responder {
    let profile = match parse_profile(req.into_inner()) {
        Ok(profile) => profile,
        Err(response) => return response,
    };

    tracing::info!("Generating ideas for district: {}", profile.district);

    let ideas = match state.gemini.generate(&ideas_prompt(&profile)).await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!("Failed to generate ideas for {}: {}", profile.district, e);
            return generation_failed(&e);
        }
    };

    let distribution = calculate_budget_distribution(profile.budget);
    let export_available = state.exporter.is_available();

    HttpResponse::Ok().json(IdeasResponse {
        ideas,
        budget_distribution: distribution.to_lines(),
        export_available,
        download_file_name: export_available.then(|| file_name(&profile.name)),
        warning: (!export_available).then(|| EXPORT_UNAVAILABLE_WARNING.to_string()),
    })
}

/// Business development assistant endpoint
///
/// POST /api/v1/ask
///
/// Request body:
/// ```json
/// {
///   "profile": { "name": "string", "district": "Madurai", ... },
///   "question": "string"
/// }
/// ```
async fn ask_assistant(
    state: web::Data<AppState>,
    req: web::Json<AskRequest>,
) -> impl Responder {
    let req = req.into_inner();
    if let Err(errors) = req.validate() {
        return bad_request("Validation failed", errors.to_string());
    }

    let profile = match parse_profile(req.profile) {
        Ok(profile) => profile,
        Err(response) => return response,
    };

    tracing::info!("Answering assistant question for district: {}", profile.district);

    match state.gemini.generate(&assistant_prompt(&profile, &req.question)).await {
        Ok(answer) => HttpResponse::Ok().json(AskResponse { answer }),
        Err(e) => {
            tracing::error!("Assistant request failed: {}", e);
            generation_failed(&e)
        }
    }
}

/// Budget distribution endpoint
///
/// POST /api/v1/budget
async fn budget_distribution(req: web::Json<BudgetRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return bad_request("Validation failed", errors.to_string());
    }

    HttpResponse::Ok().json(BudgetResponse {
        budget: req.budget,
        budget_distribution: calculate_budget_distribution(req.budget).to_lines(),
    })
}

/// Word document export endpoint
///
/// POST /api/v1/export
///
/// Responds with the `.docx` file as an attachment.
async fn export_document(
    state: web::Data<AppState>,
    req: web::Json<ExportRequest>,
) -> impl Responder {
    if !state.exporter.is_available() {
        return HttpResponse::ServiceUnavailable().json(ErrorResponse {
            error: "Export unavailable".to_string(),
            message: EXPORT_UNAVAILABLE_WARNING.to_string(),
            status_code: 503,
        });
    }

    let req = req.into_inner();
    let profile = match parse_profile(req.profile) {
        Ok(profile) => profile,
        Err(response) => return response,
    };

    let distribution = calculate_budget_distribution(profile.budget);

    match state.exporter.build_document(&profile, &req.ideas, &distribution) {
        Some(bytes) => HttpResponse::Ok()
            .content_type(DOCX_MIME_TYPE)
            .insert_header(attachment_disposition(&profile.name))
            .body(bytes),
        None => HttpResponse::InternalServerError().json(ErrorResponse {
            error: "Export failed".to_string(),
            message: "The document could not be generated".to_string(),
            status_code: 500,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_profile_rejects_unknown_district() {
        let req = ProfileRequest {
            name: "Test".to_string(),
            district: "Atlantis".to_string(),
            qualifications: String::new(),
            budget: 10.0,
            interests: String::new(),
        };

        let response = parse_profile(req).unwrap_err();
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_attachment_disposition_ascii_name() {
        let header = attachment_disposition("Selvi").to_string();
        assert!(header.starts_with("attachment"));
        assert!(header.contains("filename=\"business_ideas_for_Selvi.docx\""));
        assert!(header.contains("filename*=UTF-8''business_ideas_for_Selvi.docx"));
    }

    #[test]
    fn test_attachment_disposition_strips_control_and_quotes() {
        let header = attachment_disposition("a\"b\nc").to_string();
        assert!(header.contains("filename=\"business_ideas_for_a_b_c.docx\""));
        assert!(header.contains("filename*=UTF-8''business_ideas_for_a%22b%0Ac.docx"));
        assert!(!header.contains('\n'));
    }

    #[test]
    fn test_parse_profile_rejects_negative_budget() {
        let req = ProfileRequest {
            name: "Test".to_string(),
            district: "Salem".to_string(),
            qualifications: String::new(),
            budget: -5.0,
            interests: String::new(),
        };

        assert!(parse_profile(req).is_err());
    }
}
