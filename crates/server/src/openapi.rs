use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String, pub version: String }

#[derive(ToSchema)]
pub struct LoginRequest { pub username: String, pub password: String }

/// `success` + human-readable `message`
#[derive(ToSchema)]
pub struct OutcomeDoc { pub success: bool, pub message: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String, pub detail: Option<String> }

#[derive(ToSchema)]
pub struct HighlightDoc { pub title: String, pub desc: String }

#[derive(ToSchema)]
pub struct HeroDoc {
    pub title_line1: String,
    pub title_line2: String,
    pub subtitle: String,
    pub highlights: Vec<HighlightDoc>,
}

#[derive(ToSchema)]
pub struct ContactDoc {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub message: String,
}

// 以下集合条目均由服务端补充 id / created_at / updated_at
#[derive(ToSchema)]
pub struct PostDoc { pub title: String, pub category: String, pub excerpt: String, pub content: String, pub image_url: String }

#[derive(ToSchema)]
pub struct ServiceDoc {
    pub icon: String,
    pub title: String,
    pub desc: String,
    pub detailed_desc: String,
    pub features: String,
    pub benefits: String,
    pub image_url: String,
}

#[derive(ToSchema)]
pub struct MetricDoc { pub label: String, pub target: i64, pub suffix: String }

#[derive(ToSchema)]
pub struct ProcessStepDoc { pub step: i64, pub title: String, pub desc: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::hero::get,
        crate::routes::hero::replace,
        crate::routes::auth::login,
        crate::routes::contact::submit,
    ),
    components(
        schemas(
            HealthResponse,
            LoginRequest,
            OutcomeDoc,
            ErrorDoc,
            HighlightDoc,
            HeroDoc,
            ContactDoc,
            PostDoc,
            ServiceDoc,
            MetricDoc,
            ProcessStepDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "content"),
        (name = "auth"),
        (name = "contact")
    )
)]
pub struct ApiDoc;
