//! JSON query surface over a [`Catalog`].
//!
//! Routing is a pure function of the request line and a catalog so it can be
//! exercised without a socket; [`server`] only moves bytes.

pub mod server;

use serde::Serialize;
use url::form_urlencoded;

use crate::data::catalog::{Catalog, HeroContent};
use crate::data::model::Course;
use crate::data::sections::SectionFilter;

/// Body of `GET /api/academy`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademyPayload<'a> {
    pub courses: &'a [Course],
    pub hero_content: &'a HeroContent,
}

impl<'a> From<&'a Catalog> for AcademyPayload<'a> {
    fn from(catalog: &'a Catalog) -> Self {
        AcademyPayload {
            courses: &catalog.courses,
            hero_content: &catalog.hero,
        }
    }
}

/// Body of `GET /api/academy/training/{slug}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingPayload<'a> {
    pub course: &'a Course,
    pub related_trainings: Vec<&'a Course>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    fn json<T: Serialize>(status: u16, value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(body) => HttpResponse { status, body },
            Err(e) => {
                log::error!("Failed to serialize response: {e}");
                HttpResponse::error(500, "Internal server error")
            }
        }
    }

    fn error(status: u16, message: &str) -> Self {
        let body = serde_json::json!({ "error": message }).to_string();
        HttpResponse { status, body }
    }

    fn no_content() -> Self {
        HttpResponse {
            status: 204,
            body: String::new(),
        }
    }

    fn reason(&self) -> &'static str {
        match self.status {
            200 => "OK",
            204 => "No Content",
            404 => "Not Found",
            405 => "Method Not Allowed",
            _ => "Internal Server Error",
        }
    }

    /// Full HTTP/1.1 response with CORS headers.
    pub fn to_http(&self) -> String {
        let mut response = format!(
            "HTTP/1.1 {} {}\r\n\
            Access-Control-Allow-Origin: *\r\n\
            Access-Control-Allow-Methods: GET, OPTIONS\r\n\
            Access-Control-Allow-Headers: Content-Type\r\n",
            self.status,
            self.reason(),
        );
        if self.status != 204 {
            response.push_str("Content-Type: application/json\r\n");
        }
        response.push_str(&format!(
            "Content-Length: {}\r\nConnection: close\r\n\r\n{}",
            self.body.len(),
            self.body
        ));
        response
    }
}

/// Answer one request against `catalog`.
///
/// * `GET /api/academy` – every course plus hero copy
/// * `GET /api/academy/zones?tab=..&section=..` – resolved zone listing
/// * `GET /api/academy/training/{slug}` – one course and its related trainings
pub fn route(method: &str, target: &str, catalog: &Catalog, related_limit: usize) -> HttpResponse {
    if method == "OPTIONS" {
        return HttpResponse::no_content();
    }
    if method != "GET" {
        return HttpResponse::error(405, "Method not allowed");
    }

    let (path, query) = target.split_once('?').unwrap_or((target, ""));
    let path = path.trim_end_matches('/');

    match path {
        "/api/academy" => HttpResponse::json(200, &AcademyPayload::from(catalog)),
        "/api/academy/zones" => {
            let mut tab = None;
            let mut section = SectionFilter::All;
            for (key, value) in form_urlencoded::parse(query.as_bytes()) {
                match key.as_ref() {
                    "tab" => tab = Some(value.into_owned()),
                    "section" if !value.is_empty() => section = SectionFilter::parse(&value),
                    _ => {}
                }
            }
            HttpResponse::json(200, &catalog.zone_view(tab.as_deref(), &section))
        }
        _ => match path.strip_prefix("/api/academy/training/") {
            Some(slug) => training(catalog, slug, related_limit),
            None => HttpResponse::error(404, "Not found"),
        },
    }
}

fn training(catalog: &Catalog, slug: &str, related_limit: usize) -> HttpResponse {
    match catalog.find_by_slug(slug) {
        Some(course) => HttpResponse::json(
            200,
            &TrainingPayload {
                course,
                related_trainings: catalog.related(course, related_limit),
            },
        ),
        None => HttpResponse::error(404, "Training not found"),
    }
}
