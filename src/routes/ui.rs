//! Browser form for the idea generator.
//!
//! The page is rendered once per request from the district table and the
//! export capability; all actions call the JSON API under `/api/v1`.

use actix_web::{web, HttpResponse, Responder};
use crate::core::District;
use crate::models::DEFAULT_BUDGET;
use crate::routes::AppState;
use crate::services::EXPORT_UNAVAILABLE_WARNING;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index));
}

async fn index(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_form_page(state.exporter.is_available()))
}

/// Render the full form page
pub fn render_form_page(export_available: bool) -> String {
    let options = District::ALL
        .iter()
        .map(|d| format!(r#"<option value="{0}">{0}</option>"#, d.name()))
        .collect::<Vec<_>>()
        .join("\n          ");

    let export_notice = if export_available {
        String::new()
    } else {
        format!(r#"<p class="warning">{}</p>"#, EXPORT_UNAVAILABLE_WARNING)
    };

    PAGE_TEMPLATE
        .replace("{{DISTRICT_OPTIONS}}", &options)
        .replace("{{DEFAULT_BUDGET}}", &DEFAULT_BUDGET.to_string())
        .replace("{{EXPORT_AVAILABLE}}", if export_available { "true" } else { "false" })
        .replace("{{EXPORT_NOTICE}}", &export_notice)
}

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Business Ideas Generator for Tamil Nadu</title>
  <style>
    body { font-family: sans-serif; max-width: 760px; margin: 2rem auto; padding: 0 1rem; }
    label { display: block; margin-top: 0.8rem; font-weight: 600; }
    input, select, textarea { width: 100%; padding: 0.4rem; box-sizing: border-box; }
    button { margin-top: 1rem; padding: 0.5rem 1rem; }
    #ideas, #answer { white-space: pre-wrap; }
    .warning { color: #8a6d00; }
    .error { color: #b00020; }
  </style>
</head>
<body>
  <h1>Business Ideas Generator for Tamil Nadu</h1>
  {{EXPORT_NOTICE}}

  <h2>Your Information</h2>
  <form id="profile" onsubmit="return false;">
    <label for="name">Your name:</label>
    <input id="name" name="name" type="text">

    <label for="district">Select your district:</label>
    <select id="district" name="district">
          {{DISTRICT_OPTIONS}}
    </select>

    <label for="qualifications">Your qualifications:</label>
    <input id="qualifications" name="qualifications" type="text">

    <label for="budget">Your budget (in INR):</label>
    <input id="budget" name="budget" type="number" min="0" step="10000" value="{{DEFAULT_BUDGET}}">

    <label for="interests">Your personal interests:</label>
    <textarea id="interests" name="interests" rows="3"></textarea>
  </form>

  <h2>Generate Business Ideas</h2>
  <button id="generate" type="button">Generate Business Ideas</button>
  <p id="status"></p>
  <div id="ideas"></div>

  <div id="budget-section" hidden>
    <h2>Budget Distribution</h2>
    <p>Here's how your budget could be distributed:</p>
    <ul id="distribution"></ul>
    <button id="download" type="button" hidden>Download Business Ideas as Word Document</button>
  </div>

  <h2>Business Development Assistant</h2>
  <label for="question">Ask a question about your business idea or entrepreneurship in your area:</label>
  <input id="question" type="text">
  <button id="ask" type="button">Ask</button>
  <div id="answer"></div>

  <script>
    const exportAvailable = {{EXPORT_AVAILABLE}};
    let lastIdeas = null;
    let lastFileName = null;

    function profile() {
      return {
        name: document.getElementById("name").value,
        district: document.getElementById("district").value,
        qualifications: document.getElementById("qualifications").value,
        budget: Number(document.getElementById("budget").value),
        interests: document.getElementById("interests").value,
      };
    }

    function rupees(amount) {
      return "₹" + amount.toLocaleString("en-US", { minimumFractionDigits: 2, maximumFractionDigits: 2 });
    }

    async function postJson(path, body) {
      const res = await fetch(path, {
        method: "POST",
        headers: { "Content-Type": "application/json" },
        body: JSON.stringify(body),
      });
      if (!res.ok) {
        const err = await res.json().catch(() => ({ message: res.statusText }));
        throw new Error(err.message || res.statusText);
      }
      return res;
    }

    function setStatus(text, isError) {
      const el = document.getElementById("status");
      el.textContent = text;
      el.className = isError ? "error" : "";
    }

    document.getElementById("generate").addEventListener("click", async () => {
      setStatus("Generating business ideas...", false);
      try {
        const data = await (await postJson("/api/v1/ideas", profile())).json();
        setStatus("", false);
        lastIdeas = data.ideas;
        lastFileName = data.download_file_name || null;
        document.getElementById("ideas").textContent = data.ideas;

        const list = document.getElementById("distribution");
        list.innerHTML = "";
        for (const line of data.budget_distribution) {
          const item = document.createElement("li");
          item.textContent = line.category + ": " + rupees(line.amount);
          list.appendChild(item);
        }
        document.getElementById("budget-section").hidden = false;
        document.getElementById("download").hidden = !(exportAvailable && data.export_available);
      } catch (e) {
        setStatus(e.message, true);
      }
    });

    document.getElementById("download").addEventListener("click", async () => {
      if (lastIdeas === null) return;
      try {
        const res = await postJson("/api/v1/export", { profile: profile(), ideas: lastIdeas });
        const blob = await res.blob();
        const link = document.createElement("a");
        link.href = URL.createObjectURL(blob);
        link.download = lastFileName || ("business_ideas_for_" + profile().name + ".docx");
        link.click();
        URL.revokeObjectURL(link.href);
      } catch (e) {
        setStatus(e.message, true);
      }
    });

    document.getElementById("ask").addEventListener("click", async () => {
      const question = document.getElementById("question").value;
      if (!question) return;
      const answer = document.getElementById("answer");
      answer.textContent = "Generating response...";
      try {
        const data = await (await postJson("/api/v1/ask", { profile: profile(), question })).json();
        answer.textContent = "Assistant: " + data.answer;
      } catch (e) {
        answer.textContent = "";
        setStatus(e.message, true);
      }
    });
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_lists_every_district() {
        let page = render_form_page(true);
        for district in District::ALL {
            assert!(page.contains(&format!(r#"<option value="{0}">{0}</option>"#, district.name())));
        }
    }

    #[test]
    fn test_budget_input_defaults() {
        let page = render_form_page(true);
        assert!(page.contains(r#"type="number" min="0" step="10000" value="100000""#));
    }

    #[test]
    fn test_export_warning_only_when_unavailable() {
        assert!(!render_form_page(true).contains(EXPORT_UNAVAILABLE_WARNING));
        let page = render_form_page(false);
        assert!(page.contains(EXPORT_UNAVAILABLE_WARNING));
        assert!(page.contains("const exportAvailable = false;"));
    }
}
