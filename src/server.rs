//! Interactive driver: a minimal upload page backed by the same
//! transformation as the CLI. Each request processes its own uploaded bytes;
//! nothing is kept between requests.

use crate::config::AppConfig;
use crate::error::SummaryError;
use crate::pipeline::{self, PackingReport};
use crate::report;
use anyhow::anyhow;
use axum::Router;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{get, post};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use std::path::Path;
use std::sync::Arc;

const UPLOAD_FIELD: &str = "workbook";

pub fn router(config: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/process", post(process_handler))
        .with_state(config)
}

async fn index_handler() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

async fn process_handler(
    State(config): State<Arc<AppConfig>>,
    multipart: Multipart,
) -> (StatusCode, Html<String>) {
    match handle_upload(&config, multipart).await {
        Ok(page) => (StatusCode::OK, Html(page)),
        Err(error) => {
            tracing::warn!(kind = error.kind(), %error, "upload processing failed");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(error_page(&error.to_string())),
            )
        }
    }
}

async fn handle_upload(
    config: &AppConfig,
    mut multipart: Multipart,
) -> Result<String, SummaryError> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|error| SummaryError::Workbook(anyhow!("invalid upload: {error}")))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let name = field
            .file_name()
            .unwrap_or("workbook.xlsx")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|error| SummaryError::Workbook(anyhow!("failed to read upload: {error}")))?;
        upload = Some((name, bytes.to_vec()));
    }

    let (name, bytes) =
        upload.ok_or_else(|| SummaryError::Workbook(anyhow!("no workbook file in upload")))?;

    tracing::info!(file = %name, bytes = bytes.len(), "processing uploaded workbook");
    let report_data = pipeline::summarize_bytes(&bytes, config)?;
    let csv = report::csv_bytes(&report_data)?;
    let download_name = report::output_filename(Path::new(&name));

    Ok(result_page(&name, &download_name, &report_data, &csv))
}

fn result_page(
    input_name: &str,
    download_name: &str,
    report: &PackingReport,
    csv: &[u8],
) -> String {
    let mut rows = String::new();
    for carton in &report.cartons {
        rows.push_str("<tr>");
        for value in [
            carton.carton.clone(),
            carton.part.clone(),
            crate::aggregate::format_number(carton.net_weight),
            crate::aggregate::format_number(carton.gross_weight),
            crate::aggregate::format_number(carton.quantity),
            carton.customer.clone(),
            carton.purchase_order.clone(),
        ] {
            rows.push_str("<td>");
            rows.push_str(&escape_html(&value));
            rows.push_str("</td>");
        }
        rows.push_str("</tr>\n");
    }

    let headers: String = report::OUTPUT_COLUMNS
        .iter()
        .map(|name| format!("<th>{name}</th>"))
        .collect();

    format!(
        "<!doctype html>\n<html><head><title>Packing List Summary</title></head><body>\n\
         <p class=\"banner success\">File processed successfully!</p>\n\
         <h2>Preview Result</h2>\n\
         <p>Input: {input}</p>\n\
         <table border=\"1\"><thead><tr>{headers}</tr></thead><tbody>\n{rows}</tbody></table>\n\
         <p><a download=\"{download}\" href=\"data:text/csv;base64,{payload}\">Download CSV</a></p>\n\
         <p><a href=\"/\">Process another file</a></p>\n\
         </body></html>\n",
        input = escape_html(input_name),
        download = escape_html(download_name),
        payload = BASE64.encode(csv),
    )
}

fn error_page(message: &str) -> String {
    format!(
        "<!doctype html>\n<html><head><title>Packing List Summary</title></head><body>\n\
         <p class=\"banner error\">Error: {}</p>\n\
         <p><a href=\"/\">Back</a></p>\n\
         </body></html>\n",
        escape_html(message)
    )
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

const INDEX_PAGE: &str = "<!doctype html>\n<html><head><title>Packing List Summary</title></head><body>\n\
<h1>Packing List Summary</h1>\n\
<p>Upload a packing-list workbook to produce a carton-level CSV summary.</p>\n\
<form action=\"/process\" method=\"post\" enctype=\"multipart/form-data\">\n\
<input type=\"file\" name=\"workbook\" accept=\".xlsx\" required>\n\
<button type=\"submit\">Process File</button>\n\
</form>\n\
</body></html>\n";
