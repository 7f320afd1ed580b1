//! # 페이지 렌더링 서비스
//!
//! View DTO의 `to_view()` 결과를 HTML로 만드는 렌더러입니다.
//!
//! 기본 구현인 [`ShellRenderer`]는 페이지 뼈대 HTML에 뷰 데이터를 JSON으로 심어 두고,
//! 템플릿별 클라이언트 스크립트가 이 데이터를 읽어 화면을 그립니다.
//!
//! ```html
//! <script id="page-data" type="application/json">{"title":"작품", ...}</script>
//! <script type="module" src="/static/js/artwork/list.js"></script>
//! ```

use async_trait::async_trait;
use serde_json::{Map, Value};
use crate::{
    core::errors::{AppError, AppResult},
    core::registry::{register_component, ServiceLocator},
};

/// 템플릿 이름으로 페이지를 렌더링하는 협력자
#[async_trait]
pub trait ViewRenderer: Send + Sync {
    async fn render(&self, template: &str, view: Map<String, Value>) -> AppResult<String>;
}

/// HTML 뼈대 + 페이지 데이터 JSON 렌더러
pub struct ShellRenderer {
    script_base: String,
}

register_component!(Service, "view_renderer", ShellRenderer, ShellRenderer::from_locator);

impl Default for ShellRenderer {
    fn default() -> Self {
        Self { script_base: "/static/js".to_string() }
    }
}

impl ShellRenderer {
    pub fn from_locator(_locator: &ServiceLocator) -> AppResult<Self> {
        Ok(Self::default())
    }

    /// `artwork/detail` 처럼 소문자, 숫자, `_`, `-` 로 된 구간을 `/`로 이은 이름만 허용합니다.
    fn check_template(template: &str) -> AppResult<()> {
        let valid = !template.is_empty()
            && template.split('/').all(|segment| {
                !segment.is_empty()
                    && segment
                        .chars()
                        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
            });

        if valid {
            Ok(())
        } else {
            Err(AppError::RenderError(format!("잘못된 템플릿 이름: {:?}", template)))
        }
    }
}

/// HTML 텍스트/속성 값 이스케이프
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[async_trait]
impl ViewRenderer for ShellRenderer {
    async fn render(&self, template: &str, view: Map<String, Value>) -> AppResult<String> {
        Self::check_template(template)?;

        let title = view
            .get("title")
            .and_then(Value::as_str)
            .map(escape_html)
            .unwrap_or_default();

        // </script> 로 데이터 블록이 끝나지 않도록 `</` 를 이스케이프
        let data = serde_json::to_string(&view)
            .map_err(|e| AppError::RenderError(format!("뷰 데이터 직렬화 실패: {}", e)))?
            .replace("</", "<\\/");

        log::debug!("페이지 렌더링: template={}, bytes={}", template, data.len());

        Ok(format!(
            "<!DOCTYPE html>\n\
             <html lang=\"ko\">\n\
             <head>\n\
             <meta charset=\"utf-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
             <title>{title}</title>\n\
             </head>\n\
             <body data-template=\"{template}\">\n\
             <div id=\"app\"></div>\n\
             <script id=\"page-data\" type=\"application/json\">{data}</script>\n\
             <script type=\"module\" src=\"{base}/{template}.js\"></script>\n\
             </body>\n\
             </html>\n",
            title = title,
            template = template,
            data = data,
            base = self.script_base,
        ))
    }
}
